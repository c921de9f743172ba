//! Component state for the template editor.
//!
//! Holds the template being edited (both language bodies), the variables
//! offered for the active language, the `@` picker state and the bits of
//! dirty tracking and request bookkeeping used by `update` and `view`.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::model::language::Language;
use common::model::template::MessageTemplate;
use common::model::variable::VariableDescriptor;
use common::templates::PickerState;

use super::helpers::template_md5;
use crate::api::Remote;

pub struct TemplateEditorComponent {
    pub template: Remote<MessageTemplate>,

    /// Variables of the template type resolved for `language`, in the order
    /// the picker and the side list show them.
    pub variables: Remote<Vec<VariableDescriptor>>,

    /// Body being edited and previewed.
    pub language: Language,

    pub picker: PickerState,

    pub textarea_ref: NodeRef,

    /// Fingerprint of both bodies at last load or successful save.
    pub original_md5: Option<String>,

    /// UTF-16 cursor to restore once the textarea shows the new text.
    pub pending_cursor: Option<u32>,

    pub saving: bool,

    /// Phone number typed in the test-send form.
    pub destination: String,

    pub sending: bool,
}

impl TemplateEditorComponent {
    pub fn new() -> Self {
        Self {
            template: Remote::Loading,
            variables: Remote::Loading,
            language: Language::default(),
            picker: PickerState::Closed,
            textarea_ref: NodeRef::default(),
            original_md5: None,
            pending_cursor: None,
            saving: false,
            destination: String::new(),
            sending: false,
        }
    }

    /// Picker candidates. Empty until the variables are loaded, so the
    /// picker cannot open on a failed or pending list.
    pub fn candidates(&self) -> &[VariableDescriptor] {
        self.variables.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn content(&self) -> &str {
        self.template
            .loaded()
            .map(|t| t.content(self.language))
            .unwrap_or("")
    }

    pub fn is_dirty(&self) -> bool {
        match (self.template.loaded(), &self.original_md5) {
            (Some(template), Some(orig)) => orig != &template_md5(template),
            _ => false,
        }
    }

    /// Grows the textarea to its content height.
    pub fn resize_textarea(&self) {
        if let Some(textarea) = self.textarea_ref.cast::<HtmlTextAreaElement>() {
            if let Ok(html_elem) = textarea.clone().dyn_into::<HtmlElement>() {
                let style = html_elem.style();
                let _ = style.set_property("height", "auto");
                let scroll_height = textarea.scroll_height();
                let _ = style.set_property("height", &format!("{}px", scroll_height));
            }
        }
    }
}
