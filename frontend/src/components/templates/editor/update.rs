//! Update function for the template editor component.
//!
//! Elm-style: receives the state, the `Context` and a `Msg`, mutates the
//! state and returns whether the view should re-render. Text transforms and
//! the picker transitions come from `common::templates`; this module only
//! moves their results in and out of the textarea and the backend.

use common::model::template::MessageTemplate;
use common::requests::{SaveTemplateRequest, TestSendRequest};
use common::templates::cursor::text_before_cursor;
use common::templates::{insert_at_cursor, render, PickerState};
use web_sys::HtmlTextAreaElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{post_json, Remote};
use crate::components::toast::{show_error_toast, show_toast};

use super::helpers::{selection_start, set_window_dirty_flag, template_md5};
use super::messages::Msg;
use super::state::TemplateEditorComponent;
use super::{load_template, load_variables};

pub fn update(
    component: &mut TemplateEditorComponent,
    ctx: &Context<TemplateEditorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Reload => {
            component.template = Remote::Loading;
            component.variables = Remote::Loading;
            component.picker = PickerState::Closed;
            component.original_md5 = None;
            load_template(ctx);
            load_variables(ctx, component.language);
            set_window_dirty_flag(false);
            true
        }
        Msg::TemplateLoaded(Ok(template)) => {
            component.original_md5 = Some(template_md5(&template));
            component.template = Remote::Loaded(template);
            set_window_dirty_flag(false);
            ctx.link().send_message(Msg::AutoResize);
            true
        }
        Msg::TemplateLoaded(Err(err)) => {
            gloo_console::error!(format!("Loading template failed: {}", err));
            show_error_toast(&format!("Could not load the template: {}", err));
            component.template = Remote::Failed(err);
            true
        }
        Msg::VariablesLoaded(language, result) => {
            // A slow answer for a tab the user already left is stale.
            if language != component.language {
                return false;
            }
            if let Err(err) = &result {
                gloo_console::error!(format!("Loading variables failed: {}", err));
            }
            component.variables = result.into();
            true
        }
        Msg::SetLanguage(language) => {
            if language == component.language {
                return false;
            }
            component.language = language;
            component.picker = PickerState::Closed;
            component.variables = Remote::Loading;
            load_variables(ctx, language);
            ctx.link().send_message(Msg::AutoResize);
            true
        }
        Msg::Input { text, cursor } => {
            if component.template.loaded().is_none() {
                return false;
            }
            let candidates = component.candidates().len();
            component.picker = component
                .picker
                .on_input(text_before_cursor(&text, cursor), candidates);
            let language = component.language;
            if let Remote::Loaded(template) = &mut component.template {
                template.set_content(language, text);
            }
            set_window_dirty_flag(component.is_dirty());
            component.resize_textarea();
            true
        }
        Msg::CursorMoved { cursor } => {
            let next = component
                .picker
                .on_cursor_moved(text_before_cursor(component.content(), cursor));
            let changed = next != component.picker;
            component.picker = next;
            changed
        }
        Msg::Picker(transition) => {
            component.picker = transition.state;
            if let Some(index) = transition.insert {
                insert_variable(component, index);
            }
            true
        }
        Msg::InsertVariable(index) => {
            component.picker = PickerState::Closed;
            insert_variable(component, index);
            true
        }
        Msg::AutoResize => {
            component.resize_textarea();
            false
        }
        Msg::Save => {
            let Some(template) = component.template.loaded() else {
                return false;
            };
            if component.saving {
                return false;
            }
            component.saving = true;

            let request = SaveTemplateRequest {
                template_type: template.template_type.clone(),
                content_ar: template.content_ar.clone(),
                content_en: template.content_en.clone(),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result =
                    post_json::<_, MessageTemplate>("/api/templates/save", &request).await;
                link.send_message(Msg::SaveFinished(result));
            });
            true
        }
        Msg::SaveFinished(Ok(saved)) => {
            component.saving = false;
            component.original_md5 = Some(template_md5(&saved));
            set_window_dirty_flag(component.is_dirty());
            show_toast("Template saved.");
            true
        }
        Msg::SaveFinished(Err(err)) => {
            component.saving = false;
            gloo_console::error!(format!("Saving template failed: {}", err));
            show_error_toast(&format!(
                "Could not save the template: {}. Your changes are kept, try again.",
                err
            ));
            true
        }
        Msg::SetDestination(destination) => {
            component.destination = destination;
            true
        }
        Msg::TestSend => {
            let Some(template) = component.template.loaded() else {
                return false;
            };
            if component.sending {
                return false;
            }
            let rendered = render(template.content(component.language), component.language);
            if rendered.trim().is_empty() {
                show_toast("Nothing to send: the message is empty.");
                return false;
            }
            if component.destination.trim().is_empty() {
                show_toast("Enter a phone number for the test message.");
                return false;
            }
            component.sending = true;

            let request = TestSendRequest {
                template_type: template.template_type.clone(),
                rendered,
                destination: component.destination.trim().to_string(),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = post_json("/api/templates/test_send", &request).await;
                link.send_message(Msg::TestSendFinished(result));
            });
            true
        }
        Msg::TestSendFinished(result) => {
            component.sending = false;
            match result {
                Ok(sent) => show_toast(&format!("Test message queued ({}).", sent.message_id)),
                Err(err) => show_error_toast(&format!("Could not send the test message: {}", err)),
            }
            true
        }
    }
}

/// Inserts the `{key}` token of candidate `index` at the textarea cursor,
/// consuming the `@` that opened the picker, and schedules the cursor to move
/// right after the token.
fn insert_variable(component: &mut TemplateEditorComponent, index: usize) {
    let Some(key) = component.candidates().get(index).map(|v| v.key.clone()) else {
        return;
    };
    let language = component.language;
    let cursor = component
        .textarea_ref
        .cast::<HtmlTextAreaElement>()
        .map(|textarea| selection_start(&textarea))
        .unwrap_or_else(|| component.content().encode_utf16().count());

    let Remote::Loaded(template) = &mut component.template else {
        return;
    };
    let insertion = insert_at_cursor(template.content(language), cursor, &key);
    template.set_content(language, insertion.text);
    component.pending_cursor = Some(insertion.cursor as u32);
    set_window_dirty_flag(component.is_dirty());
}
