use crate::model::language::Language;
use serde::{Deserialize, Serialize};

/// A WhatsApp message template as stored by the backend, one record per
/// template type with an Arabic and an English body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplate {
    pub template_type: String,
    pub content_ar: String,
    pub content_en: String,
}

impl MessageTemplate {
    pub fn empty(template_type: impl Into<String>) -> Self {
        Self {
            template_type: template_type.into(),
            ..Self::default()
        }
    }

    pub fn content(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.content_ar,
            Language::En => &self.content_en,
        }
    }

    pub fn set_content(&mut self, language: Language, text: String) {
        match language {
            Language::Ar => self.content_ar = text,
            Language::En => self.content_en = text,
        }
    }
}
