//! Property-based tests for the conversion engine.
//!
//! Buffers are drawn from an alphabet mixing key characters, boundary
//! characters and inert Latin, so that both converted and skipped tokens
//! show up often.

use proptest::prelude::*;

use crate::engine::convert_with;
use crate::table::MappingTable;

fn arb_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::sample::select(vec!['k', 'a', 'h', 'i', 'n', 'e', 't', 's']),
        1 => prop::sample::select(vec!['H', 'M', '.', '1', 'x', 'q', ',']),
        3 => prop::sample::select(vec![' ', ' ', '\n']),
        2 => prop::sample::select(vec!['क', 'न', '्', '।']),
    ]
}

fn arb_buffer() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 0..32).prop_map(|cs| cs.into_iter().collect())
}

fn arb_token() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['k', 'a', 'h', 'i', 'n']), 1..5)
        .prop_map(|cs| cs.into_iter().collect())
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(buffer in arb_buffer(), cursor in 0usize..40) {
        let table = MappingTable::global();
        let r = convert_with(table, &buffer, cursor);
        prop_assert!(r.cursor <= r.text.chars().count());
    }

    #[test]
    fn second_pass_is_noop(buffer in arb_buffer(), cursor in 0usize..40) {
        let table = MappingTable::global();
        let first = convert_with(table, &buffer, cursor);
        let second = convert_with(table, &first.text, first.cursor);
        prop_assert_eq!(&second.text, &first.text);
        prop_assert_eq!(second.cursor, first.cursor);
        prop_assert_eq!(second.replacements, 0);
    }

    #[test]
    fn text_without_key_chars_is_untouched(
        buffer in "[ xqXQ,;!\n\u{0915}-\u{0939}]{0,24}",
        cursor in 0usize..30,
    ) {
        let table = MappingTable::global();
        let r = convert_with(table, &buffer, cursor);
        prop_assert_eq!(&r.text, &buffer);
        prop_assert_eq!(r.cursor, cursor.min(buffer.chars().count()));
    }

    #[test]
    fn key_between_latin_is_never_converted(index in 0usize..300) {
        let table = MappingTable::global();
        let entry = &table.entries()[index % table.len()];
        let buffer = format!("x{}q", entry.key);
        let r = convert_with(table, &buffer, 0);
        prop_assert_eq!(r.text, buffer);
    }

    #[test]
    fn key_between_spaces_is_converted(index in 0usize..300) {
        let table = MappingTable::global();
        let entry = &table.entries()[index % table.len()];
        let buffer = format!(" {} ", entry.key);
        let r = convert_with(table, &buffer, 0);
        prop_assert_eq!(r.text, format!(" {} ", entry.value));
    }

    #[test]
    fn replacement_before_cursor_shifts_by_delta(
        token in arb_token(),
        tail in "[ xq]{0,6}",
    ) {
        let table = MappingTable::global();
        let Some(value) = table.get(&token) else {
            return Ok(());
        };
        // Keep the tail free of convertible tokens.
        let buffer = format!("{token} {tail}");
        let cursor = buffer.chars().count();
        let r = convert_with(table, &buffer, cursor);
        prop_assume!(r.replacements == 1);
        let delta = value.chars().count() as isize - token.chars().count() as isize;
        prop_assert_eq!(r.cursor as isize, cursor as isize + delta);
    }
}
