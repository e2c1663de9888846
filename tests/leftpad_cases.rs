use std::borrow::Cow;

use left_pad::{leftpad, leftpad_with};

#[test]
fn pads_with_spaces() {
    assert_eq!(leftpad("1", 5), "    1");
    assert_eq!(leftpad("", 3), "   ");
}

#[test]
fn pads_with_custom_char() {
    assert_eq!(leftpad_with("1", 5, '0'), "00001");
    assert_eq!(leftpad_with("ab", 4, '→'), "→→ab");
}

#[test]
fn wide_enough_is_unchanged() {
    assert_eq!(leftpad("hello", 3), "hello");
    assert_eq!(leftpad("hello", 5), "hello");
    assert_eq!(leftpad("abc", 0), "abc");
    assert_eq!(leftpad("", 0), "");
}

#[test]
fn width_counts_chars_not_bytes() {
    // "héllo" is 6 bytes but 5 chars.
    assert_eq!(leftpad("héllo", 6), " héllo");
    assert_eq!(leftpad("héllo", 5), "héllo");
    assert_eq!(leftpad_with("日本", 4, '*'), "**日本");
}

#[test]
fn unchanged_borrowed_input_stays_borrowed() {
    let s = "hello";
    match leftpad(s, 3) {
        Cow::Borrowed(b) => assert!(std::ptr::eq(b, s)),
        Cow::Owned(_) => panic!("expected borrowed result"),
    }
}

#[test]
fn unchanged_owned_input_is_moved() {
    let s = String::from("hello");
    let ptr = s.as_ptr();
    match leftpad(s, 2) {
        Cow::Owned(o) => assert_eq!(o.as_ptr(), ptr),
        Cow::Borrowed(_) => panic!("expected owned result"),
    }
}

#[test]
fn accepts_cow_input() {
    let cow: Cow<str> = Cow::Borrowed("7");
    assert_eq!(leftpad_with(cow, 3, '0'), "007");
}
