use common::model::link_pool::LinkPool;
use common::requests::ActivateGroupResponse;

use crate::api::Remote;

pub struct GroupActivationComponent {
    /// Last fetched snapshot. A failed fetch stays `Failed` and is never shown
    /// as an empty pool.
    pub pool: Remote<LinkPool>,
    /// A release or activation request is in flight.
    pub busy: bool,
    pub outcome: Option<ActivateGroupResponse>,
}

impl GroupActivationComponent {
    pub fn new() -> Self {
        Self {
            pool: Remote::Loading,
            busy: false,
            outcome: None,
        }
    }
}
