use crate::model::language::Language;
use serde::{Deserialize, Serialize};

/// One entry of the variable dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableEntry {
    /// Arabic label shown in the picker.
    pub label: String,
    pub label_en: String,
    /// Material icon name.
    pub icon: String,
    pub ar_example: String,
    pub en_example: String,
}

impl VariableEntry {
    pub fn new(label: &str, label_en: &str, icon: &str, ar_example: &str, en_example: &str) -> Self {
        Self {
            label: label.to_string(),
            label_en: label_en.to_string(),
            icon: icon.to_string(),
            ar_example: ar_example.to_string(),
            en_example: en_example.to_string(),
        }
    }

    pub fn example(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.ar_example,
            Language::En => &self.en_example,
        }
    }
}

/// A dictionary entry resolved for one template and one language, in the shape
/// the "available variables" list and the `@` picker consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDescriptor {
    pub key: String,
    pub label: String,
    pub label_en: String,
    pub icon: String,
    pub example: String,
}

impl VariableDescriptor {
    /// The `{key}` token inserted into a template body.
    pub fn token(&self) -> String {
        format!("{{{}}}", self.key)
    }
}
