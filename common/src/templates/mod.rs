//! WhatsApp template rendering and editing helpers.

pub mod cursor;
pub mod dictionary;
pub mod picker;
pub mod render;

use crate::model::language::Language;
use crate::model::variable::VariableDescriptor;
use dictionary::{TemplateVariableSets, VariableDictionary};

pub use cursor::{insert_at_cursor, should_trigger_hint, Insertion};
pub use picker::{PickerKey, PickerState, PickerTransition};
pub use render::{placeholders, render_with};

/// Renders `template` with the built-in dictionary's examples for `language`.
pub fn render(template: &str, language: Language) -> String {
    VariableDictionary::builtin().render(template, language)
}

/// The built-in variables offered for `template_type`, in the set's order.
pub fn variables_for(template_type: &str, language: Language) -> Vec<VariableDescriptor> {
    TemplateVariableSets::builtin().variables_for(
        VariableDictionary::builtin(),
        template_type,
        language,
    )
}

/// Placeholders of `template` the built-in dictionary does not know.
pub fn unknown_placeholders(template: &str) -> Vec<&str> {
    render::unknown_placeholders(VariableDictionary::builtin(), template)
}
