use common::model::language::Language;
use common::model::template::MessageTemplate;
use common::model::variable::VariableDescriptor;
use common::requests::TestSendResponse;
use common::templates::PickerTransition;

use crate::api::FetchError;

pub enum Msg {
    Reload,
    TemplateLoaded(Result<MessageTemplate, FetchError>),
    VariablesLoaded(Language, Result<Vec<VariableDescriptor>, FetchError>),
    SetLanguage(Language),
    /// The user typed; `cursor` is the UTF-16 selection start after the edit.
    Input { text: String, cursor: usize },
    /// The cursor moved without an edit (click, arrow keys).
    CursorMoved { cursor: usize },
    Picker(PickerTransition),
    /// Insert the candidate at this index of the variable list.
    InsertVariable(usize),
    AutoResize,
    Save,
    SaveFinished(Result<MessageTemplate, FetchError>),
    SetDestination(String),
    TestSend,
    TestSendFinished(Result<TestSendResponse, FetchError>),
}
