use common::links::ActivationConsent;
use common::model::link_pool::LinkPool;
use common::requests::{ActivateGroupResponse, ReleaseLinksResponse};

use crate::api::FetchError;

pub enum Msg {
    Load,
    PoolLoaded(Result<LinkPool, FetchError>),
    Release,
    Released(Result<ReleaseLinksResponse, FetchError>),
    Activate(ActivationConsent),
    Activated(Result<ActivateGroupResponse, FetchError>),
    Close,
}
