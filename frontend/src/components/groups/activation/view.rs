use common::links::{distribute, ActivationConsent, Assignment, Coverage};
use common::model::link_pool::{GroupStatus, LinkPool};
use yew::html::Scope;
use yew::prelude::*;

use crate::api::Remote;

use super::messages::Msg;
use super::state::GroupActivationComponent;

pub fn view(component: &GroupActivationComponent, ctx: &Context<GroupActivationComponent>) -> Html {
    let link = ctx.link();

    let body = match (&component.outcome, &component.pool) {
        (Some(outcome), _) => html! {
            <div class="banner full">
                { format!(
                    "Group activated. {} session(s) got a meeting link.",
                    outcome.linked_sessions
                ) }
            </div>
        },
        (None, Remote::Loading) => html! { <p class="muted">{"Loading meeting links…"}</p> },
        (None, Remote::Failed(err)) => html! {
            <div class="banner no_links_at_all">
                <p>{ format!("Could not load the meeting links: {}", err) }</p>
                <button onclick={link.callback(|_| Msg::Load)}>{"Retry"}</button>
            </div>
        },
        (None, Remote::Loaded(pool)) => build_pool(component, pool, link),
    };

    html! {
        <div class="activation-modal" style="background:#fff; padding:16px 24px; border-radius:8px; min-width:520px;">
            <h3>{ format!("Activate group {}", ctx.props().group_id) }</h3>
            { body }
            <div style="text-align:end; margin-top:12px;">
                <button onclick={link.callback(|_| Msg::Close)}>{"Close"}</button>
            </div>
        </div>
    }
}

fn build_pool(
    component: &GroupActivationComponent,
    pool: &LinkPool,
    link: &Scope<GroupActivationComponent>,
) -> Html {
    if pool.group_status == GroupStatus::Active {
        return build_active_group(component, pool, link);
    }
    let assignment = distribute(&pool.sessions, &pool.available);
    let coverage = Coverage::classify(pool, &assignment);

    html! {
        <>
            <p class="muted">
                { format!(
                    "{} link(s) in the pool: {} available, {} reserved.",
                    pool.total_links, pool.available_links_count, pool.reserved_links_count
                ) }
            </p>
            { build_sessions_table(&assignment) }
            <div class={classes!("banner", coverage_class(&coverage))}>
                { coverage_message(&coverage) }
            </div>
            { build_actions(component, &coverage, link) }
        </>
    }
}

fn build_active_group(
    component: &GroupActivationComponent,
    pool: &LinkPool,
    link: &Scope<GroupActivationComponent>,
) -> Html {
    html! {
        <>
            <div class="banner full">
                { format!(
                    "This group is already active with {} session(s). Release its links to distribute them again.",
                    pool.sessions.len()
                ) }
            </div>
            <button disabled={component.busy} onclick={link.callback(|_| Msg::Release)}>
                {"Release links and redistribute"}
            </button>
        </>
    }
}

fn build_sessions_table(assignment: &[Assignment<'_>]) -> Html {
    if assignment.is_empty() {
        return html! {};
    }
    html! {
        <table style="width:100%; border-collapse:collapse;">
            <thead>
                <tr><th>{"Session"}</th><th>{"Date"}</th><th>{"Time"}</th><th>{"Meeting link"}</th></tr>
            </thead>
            <tbody>
                {
                    for assignment.iter().map(|row| html! {
                        <tr>
                            <td>{ row.session.title.clone() }</td>
                            <td>{ row.session.scheduled_date.clone() }</td>
                            <td>{ format!("{} – {}", row.session.start_time, row.session.end_time) }</td>
                            <td>
                                {
                                    match row.link {
                                        Some(meeting) => html! {
                                            <span title={meeting.url.clone()}>
                                                <i class="material-icons">{ meeting.platform.icon() }</i>
                                                { format!(" {} ({})", meeting.name, meeting.platform.label()) }
                                            </span>
                                        },
                                        None => html! { <span class="muted">{"No link"}</span> },
                                    }
                                }
                            </td>
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

fn build_actions(
    component: &GroupActivationComponent,
    coverage: &Coverage,
    link: &Scope<GroupActivationComponent>,
) -> Html {
    let disabled = component.busy;
    let activate = |label: &'static str, consent: ActivationConsent| {
        html! {
            <button {disabled} onclick={link.callback(move |_| Msg::Activate(consent))}>
                { label }
            </button>
        }
    };
    let acknowledged = ActivationConsent {
        acknowledge_partial: true,
        ..ActivationConsent::default()
    };

    match coverage {
        Coverage::NoSessions => html! {},
        Coverage::Full => activate("Activate", ActivationConsent::default()),
        Coverage::Partial { .. } => activate("Activate anyway", acknowledged),
        Coverage::AllReserved { .. } => html! {
            <>
                <button {disabled} onclick={link.callback(|_| Msg::Release)}>
                    {"Release links and retry"}
                </button>
                { activate("Activate anyway", acknowledged) }
            </>
        },
        Coverage::NoLinksAtAll => activate(
            "Activate without links",
            ActivationConsent {
                proceed_without_links: true,
                ..ActivationConsent::default()
            },
        ),
    }
}

fn coverage_class(coverage: &Coverage) -> &'static str {
    match coverage {
        Coverage::NoSessions => "no_sessions",
        Coverage::Full => "full",
        Coverage::Partial { .. } => "partial",
        Coverage::AllReserved { .. } => "all_reserved",
        Coverage::NoLinksAtAll => "no_links_at_all",
    }
}

fn coverage_message(coverage: &Coverage) -> String {
    match coverage {
        Coverage::NoSessions => "This group has no sessions to activate.".to_string(),
        Coverage::Full => "Every session gets a meeting link.".to_string(),
        Coverage::Partial { linked, unlinked } => format!(
            "{} session(s) get a link. {} session(s) will have no link.",
            linked, unlinked
        ),
        Coverage::AllReserved { reserved } => format!(
            "All {} link(s) are reserved. Release the links held by this group and retry, or activate without links.",
            reserved
        ),
        Coverage::NoLinksAtAll => {
            "There are no meeting links at all. The group can still be activated without links."
                .to_string()
        }
    }
}
