//! Defines the properties for the `TemplateEditorComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TemplateEditorProps {
    /// The message type being edited, e.g. `session_reminder`. Both bodies
    /// and the variable list are fetched for it on mount and whenever it
    /// changes.
    pub template_type: AttrValue,
}
