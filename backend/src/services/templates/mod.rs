//! # Template Service Module
//!
//! This module aggregates all API endpoints related to the WhatsApp message
//! templates. It acts as a router, directing incoming HTTP requests under the
//! `/api/templates` path to the appropriate handler logic defined in its
//! sub-modules.
//!
//! ## Sub-modules:
//! - `get`: Retrieves the stored Arabic and English bodies of a template type.
//! - `save`: Creates or replaces the bodies of a template type.
//! - `variables`: Lists the variables offered for a template type.
//! - `preview`: Renders a body with the example values of a language.
//! - `test_send`: Queues a rendered message to a test phone number.

mod get;
mod preview;
mod save;
mod test_send;
mod variables;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`POST /save`**:
///     - **Handler**: `save::process`
///     - **Description**: Upserts a `SaveTemplateRequest`. The last write wins.
///       Placeholders that match no known variable are accepted and logged.
///
/// *   **`POST /preview`**:
///     - **Handler**: `preview::process`
///     - **Description**: Renders `content` with the example values of
///       `language` and lists the placeholders that stayed unresolved.
///
/// *   **`POST /test_send`**:
///     - **Handler**: `test_send::process`
///     - **Description**: Queues an already rendered message to a phone number.
///
/// *   **`GET /{template_type}`**:
///     - **Handler**: `get::process`
///     - **Description**: Answers the `MessageTemplate` of the type. A known
///       type that was never saved answers an empty template.
///
/// *   **`GET /{template_type}/variables?lang=ar|en`**:
///     - **Handler**: `variables::process`
///     - **Description**: Answers the ordered `VariableDescriptor` list of the type.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/preview", post().to(preview::process))
        .route("/test_send", post().to(test_send::process))
        .route("/{template_type}", get().to(get::process))
        .route("/{template_type}/variables", get().to(variables::process))
}

#[cfg(test)]
mod tests {
    use crate::db::testing::temp_database;
    use crate::error::ApiError;
    use crate::gateway::{MessageGateway, OutboxGateway, OutgoingMessage};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::language::Language;
    use common::model::template::MessageTemplate;
    use common::model::variable::VariableDescriptor;
    use common::requests::{
        ApiErrorBody, PreviewRequest, PreviewResponse, SaveTemplateRequest, TestSendRequest,
        TestSendResponse,
    };
    use std::sync::{Arc, Mutex};

    macro_rules! app {
        ($db:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($db.clone()))
                    .app_data(OutboxGateway::new($db.clone()).into_app_data())
                    .configure(crate::services::configure),
            )
            .await
        };
    }

    fn save_request(template_type: &str, ar: &str, en: &str) -> SaveTemplateRequest {
        SaveTemplateRequest {
            template_type: template_type.to_string(),
            content_ar: ar.to_string(),
            content_en: en.to_string(),
        }
    }

    #[actix_web::test]
    async fn known_type_without_record_is_empty() {
        let (_file, db) = temp_database();
        let app = app!(db);

        let req = test::TestRequest::get().uri("/api/templates/student_welcome").to_request();
        let template: MessageTemplate = test::call_and_read_body_json(&app, req).await;
        assert_eq!(template, MessageTemplate::empty("student_welcome"));

        let req = test::TestRequest::get().uri("/api/templates/no_such_type").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn save_then_get_last_write_wins() {
        let (_file, db) = temp_database();
        let app = app!(db);

        for body in ["أهلاً {student_name_ar}", "مرحباً {student_name_ar}"] {
            let req = test::TestRequest::post()
                .uri("/api/templates/save")
                .set_json(save_request("student_welcome", body, "Welcome {student_name_en}"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/api/templates/student_welcome").to_request();
        let template: MessageTemplate = test::call_and_read_body_json(&app, req).await;
        assert_eq!(template.content_ar, "مرحباً {student_name_ar}");
        assert_eq!(template.content_en, "Welcome {student_name_en}");
    }

    #[actix_web::test]
    async fn save_rejects_blank_type() {
        let (_file, db) = temp_database();
        let app = app!(db);

        let req = test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(save_request("  ", "x", "y"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.code, "invalid_request");
    }

    #[actix_web::test]
    async fn variables_are_listed_per_language() {
        let (_file, db) = temp_database();
        let app = app!(db);

        let req = test::TestRequest::get()
            .uri("/api/templates/session_reminder/variables?lang=en")
            .to_request();
        let variables: Vec<VariableDescriptor> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(variables.len(), 7);
        assert_eq!(variables[0].key, "salutation_ar");
        assert_eq!(variables[0].example, "Dear");

        let req = test::TestRequest::get()
            .uri("/api/templates/session_reminder/variables?lang=fr")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn preview_reports_unresolved_placeholders() {
        let (_file, db) = temp_database();
        let app = app!(db);

        let req = test::TestRequest::post()
            .uri("/api/templates/preview")
            .set_json(PreviewRequest {
                content: "{salutation_ar} {student_name_ar} {typo}".to_string(),
                language: Language::Ar,
            })
            .to_request();
        let preview: PreviewResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(preview.rendered, "عزيزي ممدوح {typo}");
        assert_eq!(preview.unknown, vec!["typo".to_string()]);
    }

    #[actix_web::test]
    async fn test_send_queues_the_message() {
        let (_file, db) = temp_database();
        let app = app!(db);

        let req = test::TestRequest::post()
            .uri("/api/templates/test_send")
            .set_json(TestSendRequest {
                template_type: "student_welcome".to_string(),
                rendered: "عزيزي ممدوح".to_string(),
                destination: "+966 50 000 0000".to_string(),
            })
            .to_request();
        let sent: TestSendResponse = test::call_and_read_body_json(&app, req).await;

        let (destination, body): (String, String) = db
            .open()
            .expect("open")
            .query_row(
                "SELECT destination, body FROM outbox WHERE id = ?1",
                rusqlite::params![sent.message_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .expect("outbox row");
        assert_eq!(destination, "+966500000000");
        assert_eq!(body, "عزيزي ممدوح");
    }

    #[derive(Default)]
    struct RecordingGateway {
        sent: Mutex<Vec<OutgoingMessage>>,
    }

    impl MessageGateway for RecordingGateway {
        fn send(&self, message: &OutgoingMessage) -> Result<String, ApiError> {
            let mut sent = self.sent.lock().expect("lock");
            sent.push(message.clone());
            Ok(format!("msg-{}", sent.len()))
        }
    }

    #[actix_web::test]
    async fn test_send_hands_the_message_to_the_gateway() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(gateway.clone() as Arc<dyn MessageGateway>))
                .configure(crate::services::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/templates/test_send")
            .set_json(TestSendRequest {
                template_type: "student_welcome".to_string(),
                rendered: "Dear Mamdouh".to_string(),
                destination: "050-000 0000".to_string(),
            })
            .to_request();
        let sent: TestSendResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(sent.message_id, "msg-1");

        let recorded = gateway.sent.lock().expect("lock");
        assert_eq!(
            *recorded,
            vec![OutgoingMessage {
                template_type: "student_welcome".to_string(),
                destination: "0500000000".to_string(),
                body: "Dear Mamdouh".to_string(),
            }]
        );
    }

    #[actix_web::test]
    async fn test_send_rejects_bad_destination() {
        let (_file, db) = temp_database();
        let app = app!(db);

        let req = test::TestRequest::post()
            .uri("/api/templates/test_send")
            .set_json(TestSendRequest {
                template_type: "student_welcome".to_string(),
                rendered: "hello".to_string(),
                destination: "not a phone".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
