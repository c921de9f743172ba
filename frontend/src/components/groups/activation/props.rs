use common::requests::ActivateGroupResponse;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GroupActivationProps {
    pub group_id: AttrValue,
    /// Asked to close the hosting sheet.
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_activated: Option<Callback<ActivateGroupResponse>>,
}
