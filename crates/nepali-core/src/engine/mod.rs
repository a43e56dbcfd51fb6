//! Romanized-to-Devanagari conversion over a live text buffer.
//!
//! Every call rescans the whole buffer. Keys are applied one at a time in
//! [`MappingTable::sorted_entries`] order; each key gets a single left-to-right
//! pass and only occurrences with a word boundary on both sides are replaced.
//! Output values never contain key characters, so a second call on converted
//! text is a no-op.

mod cursor;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::table::{MappingEntry, MappingTable};
use crate::unicode::{is_word_boundary, SYNTHETIC_BOUNDARY};

pub use cursor::remap_cursor;

/// Result of one conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub text: String,
    /// Cursor offset in characters, always within `0..=text.chars().count()`.
    pub cursor: usize,
    /// Number of substitutions performed.
    pub replacements: usize,
}

/// Convert `buffer` with the process-wide table.
pub fn convert(buffer: &str, cursor: usize) -> Conversion {
    convert_with(MappingTable::global(), buffer, cursor)
}

/// Convert `buffer` with `table`, mapping `cursor` (a character offset) into
/// the converted text. Out-of-range cursors are clamped.
pub fn convert_with(table: &MappingTable, buffer: &str, cursor: usize) -> Conversion {
    let _span = debug_span!("convert").entered();

    let mut chars: Vec<char> = buffer.chars().collect();
    let mut cursor = cursor.min(chars.len());

    if !chars.iter().any(|&c| table.can_start_key(c)) {
        return Conversion {
            text: buffer.to_string(),
            cursor,
            replacements: 0,
        };
    }

    let mut replacements = 0;
    for entry in table.sorted_entries() {
        replacements += apply_entry(&mut chars, &mut cursor, entry);
    }

    let cursor = cursor.min(chars.len());
    debug!(
        buffer_len = chars.len(),
        replacements,
        cursor,
        "conversion done"
    );

    Conversion {
        text: chars.into_iter().collect(),
        cursor,
        replacements,
    }
}

/// One left-to-right pass of a single key. Returns the number of replacements.
fn apply_entry(chars: &mut Vec<char>, cursor: &mut usize, entry: &MappingEntry) -> usize {
    let key: Vec<char> = entry.key.chars().collect();
    let value: Vec<char> = entry.value.chars().collect();
    let mut count = 0;
    let mut from = 0;

    while let Some(start) = find(chars, &key, from) {
        let end = start + key.len();
        if has_boundaries(chars, start, end) {
            chars.splice(start..end, value.iter().copied());
            *cursor = remap_cursor(*cursor, start, end, value.len());
            count += 1;
            // Skip the inserted value; it can never match a key anyway.
            from = start + value.len();
        } else {
            from = start + 1;
        }
    }

    count
}

/// Position of the first occurrence of `needle` at or after `from`.
fn find(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || from >= haystack.len() || haystack.len() - from < needle.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| from + p)
}

fn has_boundaries(chars: &[char], start: usize, end: usize) -> bool {
    let before = if start == 0 {
        SYNTHETIC_BOUNDARY
    } else {
        chars[start - 1]
    };
    let after = chars.get(end).copied().unwrap_or(SYNTHETIC_BOUNDARY);
    is_word_boundary(before) && is_word_boundary(after)
}
