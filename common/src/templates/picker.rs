//! Keyboard state machine of the `@` variable picker.
//!
//! The picker never looks at the DOM. The editor feeds it the text before the
//! cursor and the keys the user presses, and applies the returned state.

use crate::templates::cursor::should_trigger_hint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open {
        selected: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Tab,
    Escape,
    Other,
}

impl PickerKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowDown" => PickerKey::ArrowDown,
            "ArrowUp" => PickerKey::ArrowUp,
            "Enter" => PickerKey::Enter,
            "Tab" => PickerKey::Tab,
            "Escape" => PickerKey::Escape,
            _ => PickerKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerTransition {
    pub state: PickerState,
    /// Index of the candidate to insert.
    pub insert: Option<usize>,
    /// The key was handled by the picker and must not reach the text input.
    pub consumed: bool,
}

impl PickerTransition {
    fn pass(state: PickerState) -> Self {
        Self {
            state,
            insert: None,
            consumed: false,
        }
    }

    fn consume(state: PickerState) -> Self {
        Self {
            state,
            insert: None,
            consumed: true,
        }
    }
}

impl PickerState {
    pub fn is_open(self) -> bool {
        matches!(self, PickerState::Open { .. })
    }

    pub fn selected(self) -> Option<usize> {
        match self {
            PickerState::Open { selected } => Some(selected),
            PickerState::Closed => None,
        }
    }

    /// Called after the user typed. Opens on a fresh `@`, keeps an open picker
    /// open while the text still ends with `@`, closes otherwise. Never opens
    /// on an empty candidate list.
    pub fn on_input(self, text_before_cursor: &str, candidates: usize) -> Self {
        if candidates == 0 || !should_trigger_hint(text_before_cursor) {
            return PickerState::Closed;
        }
        match self {
            PickerState::Open { selected } if selected < candidates => self,
            _ => PickerState::Open { selected: 0 },
        }
    }

    /// Called when the cursor moved without typing (click, arrow keys while
    /// closed, ...). Can only dismiss the picker, never open it.
    pub fn on_cursor_moved(self, text_before_cursor: &str) -> Self {
        match self {
            PickerState::Open { .. } if should_trigger_hint(text_before_cursor) => self,
            _ => PickerState::Closed,
        }
    }

    pub fn on_key(self, key: PickerKey, candidates: usize) -> PickerTransition {
        let PickerState::Open { selected } = self else {
            return PickerTransition::pass(self);
        };
        if candidates == 0 {
            return PickerTransition::pass(PickerState::Closed);
        }
        let selected = selected % candidates;
        match key {
            PickerKey::ArrowDown => PickerTransition::consume(PickerState::Open {
                selected: (selected + 1) % candidates,
            }),
            PickerKey::ArrowUp => PickerTransition::consume(PickerState::Open {
                selected: (selected + candidates - 1) % candidates,
            }),
            PickerKey::Enter | PickerKey::Tab => PickerTransition {
                state: PickerState::Closed,
                insert: Some(selected),
                consumed: true,
            },
            PickerKey::Escape => PickerTransition::consume(PickerState::Closed),
            PickerKey::Other => PickerTransition::pass(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: PickerState, key: PickerKey, n: usize) -> PickerState {
        state.on_key(key, n).state
    }

    #[test]
    fn typing_trigger_opens_at_first_candidate() {
        assert_eq!(
            PickerState::Closed.on_input("Hello @", 3),
            PickerState::Open { selected: 0 }
        );
        assert_eq!(PickerState::Closed.on_input("Hello", 3), PickerState::Closed);
    }

    #[test]
    fn empty_candidate_list_never_opens() {
        assert_eq!(PickerState::Closed.on_input("Hello @", 0), PickerState::Closed);
    }

    #[test]
    fn arrows_wrap_around() {
        let open = PickerState::Open { selected: 0 };
        let mut state = open;
        for _ in 0..3 {
            state = press(state, PickerKey::ArrowDown, 3);
        }
        assert_eq!(state, open);
        assert_eq!(
            press(open, PickerKey::ArrowUp, 3),
            PickerState::Open { selected: 2 }
        );
        assert!(open.on_key(PickerKey::ArrowDown, 3).consumed);
    }

    #[test]
    fn enter_and_tab_insert_the_selection() {
        let open = PickerState::Open { selected: 1 };
        for key in [PickerKey::Enter, PickerKey::Tab] {
            let transition = open.on_key(key, 3);
            assert_eq!(transition.state, PickerState::Closed);
            assert_eq!(transition.insert, Some(1));
            assert!(transition.consumed);
        }
    }

    #[test]
    fn escape_closes_without_inserting() {
        let transition = PickerState::Open { selected: 2 }.on_key(PickerKey::Escape, 3);
        assert_eq!(transition.state, PickerState::Closed);
        assert_eq!(transition.insert, None);
        assert!(transition.consumed);
    }

    #[test]
    fn keys_pass_through_while_closed() {
        for key in [PickerKey::Enter, PickerKey::ArrowDown, PickerKey::Escape] {
            let transition = PickerState::Closed.on_key(key, 3);
            assert_eq!(transition.state, PickerState::Closed);
            assert!(!transition.consumed);
            assert_eq!(transition.insert, None);
        }
    }

    #[test]
    fn moving_away_from_trigger_dismisses() {
        let open = PickerState::Open { selected: 1 };
        assert_eq!(open.on_cursor_moved("Hello @"), open);
        assert_eq!(open.on_cursor_moved("Hello"), PickerState::Closed);
        assert_eq!(open.on_input("Hello @n", 3), PickerState::Closed);
        assert_eq!(PickerState::Closed.on_cursor_moved("Hello @"), PickerState::Closed);
    }

    #[test]
    fn stale_selection_is_clamped_to_candidates() {
        let transition = PickerState::Open { selected: 4 }.on_key(PickerKey::Enter, 3);
        assert_eq!(transition.insert, Some(1));
        assert_eq!(
            PickerState::Open { selected: 4 }.on_input("@", 2),
            PickerState::Open { selected: 0 }
        );
    }

    #[test]
    fn key_names_map_from_dom() {
        assert_eq!(PickerKey::from_key("ArrowUp"), PickerKey::ArrowUp);
        assert_eq!(PickerKey::from_key("a"), PickerKey::Other);
    }
}
