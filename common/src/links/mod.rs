//! Distribution of meeting links over the sessions of a group.
//!
//! The rule is a truncating zip: the first session gets the first available
//! link, the second session the second one, and so on. When the pool runs out
//! the remaining sessions get no link at all. Links are never reused for a
//! second session and the distribution never wraps around; the activation
//! screen tells the user exactly how many sessions stay unlinked and relies on
//! that.
//!
//! Nothing here touches the link pool. Releasing reserved links is a backend
//! operation; after it the caller fetches a fresh [`LinkPool`] and distributes
//! again.

use crate::model::link_pool::LinkPool;
use crate::model::meeting_link::MeetingLink;
use crate::model::session::Session;
use serde::{Deserialize, Serialize};

/// A session paired with the link it would get, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub session: &'a Session,
    pub link: Option<&'a MeetingLink>,
}

impl Assignment<'_> {
    pub fn is_linked(&self) -> bool {
        self.link.is_some()
    }
}

/// Pairs `sessions[i]` with `available_links[i]` for every `i` both sides have.
///
/// Surplus links are left unused; surplus sessions get `None`.
pub fn distribute<'a>(
    sessions: &'a [Session],
    available_links: &'a [MeetingLink],
) -> Vec<Assignment<'a>> {
    sessions
        .iter()
        .enumerate()
        .map(|(i, session)| Assignment {
            session,
            link: available_links.get(i),
        })
        .collect()
}

/// `true` when there is at least one session and every session has a link.
pub fn all_satisfied(assignment: &[Assignment<'_>]) -> bool {
    !assignment.is_empty() && assignment.iter().all(Assignment::is_linked)
}

pub fn unsatisfied_count(assignment: &[Assignment<'_>]) -> usize {
    assignment.iter().filter(|a| !a.is_linked()).count()
}

/// `true` when the pool holds no link at all, available or reserved.
///
/// An empty available list with reserved links left is a different situation:
/// releasing those links may fix it.
pub fn has_no_links_at_all(pool: &LinkPool) -> bool {
    pool.total_links == 0
}

/// How well a distribution covers the sessions of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Coverage {
    /// The group has no sessions to link.
    NoSessions,
    Full,
    /// Some sessions get a link, the trailing `unlinked` ones do not.
    Partial { linked: usize, unlinked: usize },
    /// Links exist but all of them are reserved.
    AllReserved { reserved: usize },
    NoLinksAtAll,
}

impl Coverage {
    pub fn classify(pool: &LinkPool, assignment: &[Assignment<'_>]) -> Self {
        if assignment.is_empty() {
            return Coverage::NoSessions;
        }
        if has_no_links_at_all(pool) {
            return Coverage::NoLinksAtAll;
        }
        if all_satisfied(assignment) {
            return Coverage::Full;
        }
        let unlinked = unsatisfied_count(assignment);
        let linked = assignment.len() - unlinked;
        if linked == 0 {
            Coverage::AllReserved {
                reserved: pool.reserved_links_count,
            }
        } else {
            Coverage::Partial { linked, unlinked }
        }
    }

    /// Distributes the pool's available links and classifies the result.
    pub fn assess(pool: &LinkPool) -> Self {
        Self::classify(pool, &distribute(&pool.sessions, &pool.available))
    }

    /// Whether activation may go ahead with the given consent.
    pub fn permits(&self, consent: &ActivationConsent) -> bool {
        match self {
            Coverage::NoSessions => false,
            Coverage::Full => true,
            Coverage::Partial { .. } | Coverage::AllReserved { .. } => consent.acknowledge_partial,
            Coverage::NoLinksAtAll => consent.proceed_without_links,
        }
    }

    /// Number of sessions that would stay without a link.
    pub fn unlinked_sessions(&self, session_count: usize) -> usize {
        match self {
            Coverage::NoSessions | Coverage::Full => 0,
            Coverage::Partial { unlinked, .. } => *unlinked,
            Coverage::AllReserved { .. } | Coverage::NoLinksAtAll => session_count,
        }
    }
}

/// The explicit acknowledgements a user gave in the confirmation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationConsent {
    /// Proceed even though some sessions stay without a link.
    #[serde(default)]
    pub acknowledge_partial: bool,
    /// Proceed although the pool is empty.
    #[serde(default)]
    pub proceed_without_links: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::link_pool::GroupStatus;
    use crate::model::meeting_link::{LinkPlatform, LinkStatus};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn sessions(n: usize) -> Vec<Session> {
        (0..n)
            .map(|i| Session {
                id: format!("s{i}"),
                title: format!("Session {}", i + 1),
                scheduled_date: format!("2026-01-{:02}", i + 1),
                start_time: "17:00".to_string(),
                end_time: "18:30".to_string(),
            })
            .collect()
    }

    fn links(n: usize, status: LinkStatus) -> Vec<MeetingLink> {
        (0..n)
            .map(|i| MeetingLink {
                id: format!("{}-l{i}", status.as_str()),
                platform: LinkPlatform::Zoom,
                name: format!("Room {i}"),
                url: format!("https://zoom.example/{i}"),
                status,
            })
            .collect()
    }

    fn pool(session_count: usize, available: usize, reserved: usize) -> LinkPool {
        LinkPool::new(
            "g1",
            GroupStatus::Pending,
            sessions(session_count),
            links(available, LinkStatus::Available),
            links(reserved, LinkStatus::Reserved),
        )
    }

    fn linked_ids<'a>(assignment: &[Assignment<'a>]) -> Vec<Option<&'a str>> {
        assignment
            .iter()
            .map(|a| a.link.map(|l| l.id.as_str()))
            .collect()
    }

    #[test]
    fn first_sessions_get_links_in_order() {
        let s = sessions(4);
        let l = links(2, LinkStatus::Available);
        let assignment = distribute(&s, &l);

        assert_eq!(
            linked_ids(&assignment),
            vec![Some("available-l0"), Some("available-l1"), None, None]
        );
        let order: Vec<&str> = assignment.iter().map(|a| a.session.id.as_str()).collect();
        assert_eq!(order, vec!["s0", "s1", "s2", "s3"]);
    }

    #[test]
    fn truncating_zip_holds_for_all_small_sizes() {
        for m in 0..6 {
            for n in 0..6 {
                let s = sessions(m);
                let l = links(n, LinkStatus::Available);
                let assignment = distribute(&s, &l);

                assert_eq!(assignment.len(), m);
                let linked = assignment.iter().filter(|a| a.is_linked()).count();
                assert_eq!(linked, m.min(n), "m={m} n={n}");
                for (i, a) in assignment.iter().enumerate() {
                    assert_eq!(a.is_linked(), i < n, "m={m} n={n} i={i}");
                }
                let unique: HashSet<&str> = assignment
                    .iter()
                    .filter_map(|a| a.link.map(|l| l.id.as_str()))
                    .collect();
                assert_eq!(unique.len(), linked);

                assert_eq!(all_satisfied(&assignment), n >= m && m > 0, "m={m} n={n}");
                assert_eq!(unsatisfied_count(&assignment), m - m.min(n));
            }
        }
    }

    #[test]
    fn surplus_links_are_left_unused() {
        let s = sessions(2);
        let l = links(5, LinkStatus::Available);
        let assignment = distribute(&s, &l);
        assert!(all_satisfied(&assignment));
        assert_eq!(linked_ids(&assignment), vec![Some("available-l0"), Some("available-l1")]);
    }

    #[test]
    fn distribute_is_idempotent() {
        let s = sessions(3);
        let l = links(2, LinkStatus::Available);
        assert_eq!(distribute(&s, &l), distribute(&s, &l));
    }

    #[test]
    fn empty_inputs() {
        let none: Vec<Session> = Vec::new();
        let l = links(3, LinkStatus::Available);
        assert!(distribute(&none, &l).is_empty());
        assert!(!all_satisfied(&distribute(&none, &l)));

        let s = sessions(3);
        let assignment = distribute(&s, &[]);
        assert_eq!(linked_ids(&assignment), vec![None, None, None]);
        assert_eq!(unsatisfied_count(&assignment), 3);
    }

    #[test]
    fn empty_pool_is_distinct_from_all_reserved() {
        assert!(has_no_links_at_all(&pool(0, 0, 0)));
        assert!(has_no_links_at_all(&pool(7, 0, 0)));
        assert!(!has_no_links_at_all(&pool(3, 0, 2)));
        assert!(!has_no_links_at_all(&pool(3, 1, 0)));

        assert_eq!(Coverage::assess(&pool(3, 0, 0)), Coverage::NoLinksAtAll);
        assert_eq!(
            Coverage::assess(&pool(3, 0, 2)),
            Coverage::AllReserved { reserved: 2 }
        );
    }

    #[test]
    fn coverage_classification() {
        assert_eq!(Coverage::assess(&pool(0, 2, 0)), Coverage::NoSessions);
        assert_eq!(Coverage::assess(&pool(2, 2, 1)), Coverage::Full);
        assert_eq!(
            Coverage::assess(&pool(5, 2, 4)),
            Coverage::Partial {
                linked: 2,
                unlinked: 3
            }
        );
    }

    #[test]
    fn consent_gates_activation() {
        let none = ActivationConsent::default();
        let partial = ActivationConsent {
            acknowledge_partial: true,
            ..ActivationConsent::default()
        };
        let without = ActivationConsent {
            proceed_without_links: true,
            ..ActivationConsent::default()
        };

        assert!(Coverage::Full.permits(&none));
        assert!(!Coverage::NoSessions.permits(&partial));

        let shortage = Coverage::Partial {
            linked: 1,
            unlinked: 1,
        };
        assert!(!shortage.permits(&none));
        assert!(shortage.permits(&partial));
        assert!(!shortage.permits(&without));

        assert!(!Coverage::NoLinksAtAll.permits(&partial));
        assert!(Coverage::NoLinksAtAll.permits(&without));
        assert!(Coverage::AllReserved { reserved: 1 }.permits(&partial));
    }

    #[test]
    fn unlinked_session_count_per_coverage() {
        assert_eq!(Coverage::Full.unlinked_sessions(4), 0);
        assert_eq!(
            Coverage::Partial {
                linked: 1,
                unlinked: 3
            }
            .unlinked_sessions(4),
            3
        );
        assert_eq!(Coverage::NoLinksAtAll.unlinked_sessions(4), 4);
    }
}
