//! Cursor-aware placeholder insertion.
//!
//! Browser text inputs report `selectionStart`/`selectionEnd` in UTF-16 code
//! units while Rust strings are indexed by UTF-8 bytes. Every cursor position
//! in this module's public API is in UTF-16 code units, so the editor can pass
//! the widget's values straight through.

/// Typed by the user to ask for the variable picker.
pub const TRIGGER: char = '@';

/// Result of [`insert_at_cursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub text: String,
    /// UTF-16 offset right after the inserted token.
    pub cursor: usize,
}

/// Converts a UTF-16 code unit index into a UTF-8 byte index.
///
/// Positions past the end map to `s.len()`. A position inside a surrogate pair
/// maps to the start of the following character.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

/// Converts a UTF-8 byte index into a UTF-16 code unit index.
pub fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> usize {
    let byte_idx = byte_idx.min(s.len());
    s.char_indices()
        .take_while(|(i, _)| *i < byte_idx)
        .map(|(_, ch)| ch.len_utf16())
        .sum()
}

pub fn text_before_cursor(text: &str, cursor: usize) -> &str {
    &text[..utf16_to_byte_idx(text, cursor)]
}

/// Whether the picker should be offered for this text before the cursor.
pub fn should_trigger_hint(text_before_cursor: &str) -> bool {
    text_before_cursor.ends_with(TRIGGER)
}

/// Inserts `{key}` at `cursor`, consuming a directly preceding `@`.
pub fn insert_at_cursor(text: &str, cursor: usize, key: &str) -> Insertion {
    let byte_pos = utf16_to_byte_idx(text, cursor);
    let start = if text[..byte_pos].ends_with(TRIGGER) {
        byte_pos - TRIGGER.len_utf8()
    } else {
        byte_pos
    };
    let token = format!("{{{key}}}");

    let mut new_text = String::with_capacity(text.len() + token.len());
    new_text.push_str(&text[..start]);
    new_text.push_str(&token);
    new_text.push_str(&text[byte_pos..]);

    let cursor = byte_to_utf16_idx(&new_text, start + token.len());
    Insertion {
        text: new_text,
        cursor,
    }
}
