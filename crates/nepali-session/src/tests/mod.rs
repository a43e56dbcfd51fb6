mod simulator;

use crate::{FieldResponse, TextField};

/// Insert `s` one character at a time at the caret, the way a widget reports
/// keystrokes.
pub(super) fn type_string(field: &mut TextField<'_>, s: &str) -> Vec<FieldResponse> {
    let mut responses = Vec::new();
    for ch in s.chars() {
        let (raw, cursor) = insert_at_cursor(field, ch);
        responses.push(field.handle_change(&raw, cursor));
    }
    responses
}

pub(super) fn insert_at_cursor(field: &TextField<'_>, ch: char) -> (String, usize) {
    let mut chars: Vec<char> = field.text().chars().collect();
    let cursor = field.cursor().min(chars.len());
    chars.insert(cursor, ch);
    (chars.into_iter().collect(), cursor + 1)
}

/// Delete the character before the caret.
pub(super) fn backspace(field: &mut TextField<'_>) -> FieldResponse {
    let mut chars: Vec<char> = field.text().chars().collect();
    let cursor = field.cursor().min(chars.len());
    if cursor == 0 {
        let raw = field.text().to_string();
        return field.handle_change(&raw, 0);
    }
    chars.remove(cursor - 1);
    let raw: String = chars.into_iter().collect();
    field.handle_change(&raw, cursor - 1)
}
