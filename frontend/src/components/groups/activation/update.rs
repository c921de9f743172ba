use common::requests::{ActivateGroupRequest, ActivateGroupResponse, ReleaseLinksResponse};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{post_json, Remote};
use crate::components::toast::{show_error_toast, show_toast};

use super::load_pool;
use super::messages::Msg;
use super::state::GroupActivationComponent;

pub fn update(
    component: &mut GroupActivationComponent,
    ctx: &Context<GroupActivationComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            component.pool = Remote::Loading;
            load_pool(ctx);
            true
        }
        Msg::PoolLoaded(result) => {
            if let Err(err) = &result {
                gloo_console::error!(format!("Loading link pool failed: {}", err));
            }
            component.pool = result.into();
            true
        }
        Msg::Release => {
            if component.busy {
                return false;
            }
            component.busy = true;
            let link = ctx.link().clone();
            let url = format!("/api/groups/{}/links/release", ctx.props().group_id);
            spawn_local(async move {
                let result = post_json::<_, ReleaseLinksResponse>(&url, &()).await;
                link.send_message(Msg::Released(result));
            });
            true
        }
        Msg::Released(Ok(response)) => {
            component.busy = false;
            if response.released == 0 {
                show_toast("No links were reserved for this group.");
            } else {
                show_toast(&format!("Released {} link(s).", response.released));
            }
            // The pool changed on the server; distribute again from a fresh snapshot.
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Released(Err(err)) => {
            component.busy = false;
            show_error_toast(&format!("Could not release the links: {}", err));
            true
        }
        Msg::Activate(consent) => {
            if component.busy {
                return false;
            }
            component.busy = true;
            let link = ctx.link().clone();
            let url = format!("/api/groups/{}/activate", ctx.props().group_id);
            spawn_local(async move {
                let result =
                    post_json::<_, ActivateGroupResponse>(&url, &ActivateGroupRequest { consent })
                        .await;
                link.send_message(Msg::Activated(result));
            });
            true
        }
        Msg::Activated(Ok(response)) => {
            component.busy = false;
            component.outcome = Some(response);
            show_toast("Group activated.");
            if let Some(on_activated) = &ctx.props().on_activated {
                on_activated.emit(response);
            }
            true
        }
        Msg::Activated(Err(err)) => {
            component.busy = false;
            show_error_toast(&format!("Could not activate the group: {}", err));
            if err.code() == Some("consent_required") {
                // The pool moved since it was shown.
                ctx.link().send_message(Msg::Load);
            }
            true
        }
        Msg::Close => {
            ctx.props().on_close.emit(());
            false
        }
    }
}
