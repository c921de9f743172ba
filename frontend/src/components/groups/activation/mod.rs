//! Group activation modal.
//!
//! Shows how the available meeting links would be spread over the group's
//! sessions and gates the activation on the matching acknowledgement. The
//! distribution is recomputed from every fetched snapshot, never patched.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::link_pool::LinkPool;

use crate::api::get_json;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::GroupActivationProps;
pub use state::GroupActivationComponent;

impl Component for GroupActivationComponent {
    type Message = Msg;
    type Properties = GroupActivationProps;

    fn create(ctx: &Context<Self>) -> Self {
        load_pool(ctx);
        GroupActivationComponent::new()
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().group_id != old_props.group_id {
            self.outcome = None;
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

fn load_pool(ctx: &Context<GroupActivationComponent>) {
    let link = ctx.link().clone();
    let url = format!("/api/groups/{}/links", ctx.props().group_id);
    spawn_local(async move {
        let result = get_json::<LinkPool>(&url).await;
        link.send_message(Msg::PoolLoaded(result));
    });
}
