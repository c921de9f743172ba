//! Outgoing WhatsApp messages.
//!
//! Handlers only see the [`MessageGateway`] trait. The shipped
//! [`OutboxGateway`] records every message in the `outbox` table, which the
//! delivery worker drains.

use crate::db::Database;
use crate::error::ApiError;
use actix_web::web;
use log::info;
use rusqlite::params;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub template_type: String,
    /// Normalized phone number.
    pub destination: String,
    pub body: String,
}

pub trait MessageGateway: Send + Sync {
    /// Accepts `message` for delivery and returns its id. May block.
    fn send(&self, message: &OutgoingMessage) -> Result<String, ApiError>;
}

pub struct OutboxGateway {
    db: Database,
}

impl OutboxGateway {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// The gateway as application data for `web::Data<dyn MessageGateway>`.
    pub fn into_app_data(self) -> web::Data<dyn MessageGateway> {
        web::Data::from(Arc::new(self) as Arc<dyn MessageGateway>)
    }
}

impl MessageGateway for OutboxGateway {
    fn send(&self, message: &OutgoingMessage) -> Result<String, ApiError> {
        let message_id = Uuid::new_v4().to_string();
        self.db.open()?.execute(
            "INSERT INTO outbox (id, template_type, destination, body) VALUES (?1, ?2, ?3, ?4)",
            params![
                &message_id,
                &message.template_type,
                &message.destination,
                &message.body
            ],
        )?;
        info!(
            "Queued message {} of template '{}' to {}",
            message_id, message.template_type, message.destination
        );
        Ok(message_id)
    }
}
