//! Character-level Unicode classification for Devanagari text.

/// Stands in for the missing neighbour at either end of the buffer.
pub const SYNTHETIC_BOUNDARY: char = ' ';

/// Danda (।), ends a sentence.
pub const DANDA: char = '\u{0964}';
/// Double danda (॥), ends a verse or paragraph.
pub const DOUBLE_DANDA: char = '\u{0965}';

/// Check the Devanagari block (U+0900..U+097F). Includes vowel signs,
/// halanta and the dandas.
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

pub fn is_sentence_terminator(c: char) -> bool {
    c == DANDA || c == DOUBLE_DANDA
}

/// A romanized token may only be replaced when both of its neighbours satisfy
/// this test.
pub fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || is_devanagari(c) || is_sentence_terminator(c)
}
