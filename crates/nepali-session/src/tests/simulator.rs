//! Keystroke-level simulations against the default table.

use super::{backspace, type_string};
use crate::TextField;

#[test]
fn test_syllable_converts_when_complete() {
    let mut field = TextField::global();
    let responses = type_string(&mut field, "ka");
    assert_eq!(responses[0].text, "k");
    assert!(!responses[0].changed);
    assert_eq!(responses[1].text, "क");
    assert!(responses[1].changed);
    assert_eq!(field.cursor(), 1);
}

#[test]
fn test_halanta_joins_conjunct() {
    let mut field = TextField::global();
    type_string(&mut field, "namasaHte");
    assert_eq!(field.text(), "नमस्ते");
    assert_eq!(field.cursor(), 6);
}

#[test]
fn test_sentence() {
    let mut field = TextField::global();
    type_string(&mut field, "ma gharA jAnaHchhu.");
    assert_eq!(field.text(), "म घरा जान्छु।");
    assert_eq!(field.cursor(), field.text().chars().count());
}

#[test]
fn test_long_vowel_typed_as_two_keys() {
    // "ka" converts as soon as it is complete, so the second "a" arrives
    // after a Devanagari character and becomes an independent vowel.
    let mut field = TextField::global();
    type_string(&mut field, "kaa");
    assert_eq!(field.text(), "कअ");
}

#[test]
fn test_anusvara() {
    let mut field = TextField::global();
    type_string(&mut field, "saMsAra");
    assert_eq!(field.text(), "संसार");
}

#[test]
fn test_latin_word_left_alone() {
    let mut field = TextField::global();
    type_string(&mut field, "wifi ");
    // "wi" converts, then "f" and "i" follow a Latin letter.
    assert_eq!(field.text(), "विfi ");
}

#[test]
fn test_typing_in_the_middle() {
    let mut field = TextField::global();
    type_string(&mut field, "ka  kha");
    assert_eq!(field.text(), "क  ख");
    assert_eq!(field.cursor(), 4);

    // A selection change arrives as a change event with the same value.
    let text = field.text().to_string();
    let resp = field.handle_change(&text, 2);
    assert!(!resp.changed);
    assert_eq!(field.cursor(), 2);

    type_string(&mut field, "ga");
    assert_eq!(field.text(), "क ग ख");
    assert_eq!(field.cursor(), 3);
}

#[test]
fn test_backspace_removes_vowel_sign() {
    let mut field = TextField::global();
    type_string(&mut field, "kA");
    assert_eq!(field.text(), "का");
    let resp = backspace(&mut field);
    assert_eq!(resp.text, "क");
    assert!(!resp.changed);
    assert_eq!(resp.restore.offset(), 1);
}

#[test]
fn test_backspace_at_start_is_harmless() {
    let mut field = TextField::global();
    let resp = backspace(&mut field);
    assert_eq!(resp.text, "");
    assert_eq!(resp.restore.offset(), 0);
}

#[test]
fn test_paste_whole_phrase() {
    let mut field = TextField::global();
    let resp = field.handle_change("kaa ki ko ", 10);
    assert_eq!(resp.text, "का कि को ");
    assert_eq!(resp.restore.offset(), 9);
}
