//! Single-character parsers
//!
//! Each constructor is an [`ElementMatching`] built from a predicate and the
//! description reported when it fails. Classification uses the standard
//! library's code point properties.

use crate::element::{ElementMatching, element_except};

/// Element parser backed by a plain function pointer
pub type CharClass = ElementMatching<fn(char) -> bool>;

fn class(predicate: fn(char) -> bool, description: &'static str) -> CharClass {
    ElementMatching::new(predicate, description)
}

/// Parser that matches a specific character
pub fn is_char(expected: char) -> ElementMatching<impl Fn(char) -> bool + Clone> {
    ElementMatching::new(move |c| c == expected, expected.to_string())
}

/// Parser that matches any character other than `excluded`
pub fn char_except(excluded: char) -> ElementMatching<impl Fn(char) -> bool + Clone> {
    element_except(move |c| c == excluded, excluded)
}

/// Parser that matches `expected` in either case
pub fn char_ignore_case(expected: char) -> ElementMatching<impl Fn(char) -> bool + Clone> {
    ElementMatching::new(
        move |c: char| c.to_lowercase().eq(expected.to_lowercase()),
        expected.to_string(),
    )
}

/// Parser that matches any one of the given characters
pub fn chars_in(
    set: impl IntoIterator<Item = char>,
) -> ElementMatching<impl Fn(char) -> bool + Clone> {
    let set: Vec<char> = set.into_iter().collect();
    let description = describe_set(&set);
    ElementMatching::new(move |c| set.contains(&c), description)
}

/// Parser that matches any character not in the given set
pub fn chars_not_in(
    set: impl IntoIterator<Item = char>,
) -> ElementMatching<impl Fn(char) -> bool + Clone> {
    let set: Vec<char> = set.into_iter().collect();
    let description = describe_set(&set);
    element_except(move |c| set.contains(&c), description)
}

fn describe_set(set: &[char]) -> String {
    set.iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

pub fn any_char() -> CharClass {
    class(|_| true, "any character")
}

pub fn whitespace() -> CharClass {
    class(char::is_whitespace, "whitespace")
}

/// First code point of every run of ten decimal digits (general category Nd)
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

fn is_decimal_digit(c: char) -> bool {
    let code = c as u32;
    match DECIMAL_ZEROS.binary_search(&code) {
        Ok(_) => true,
        Err(0) => false,
        Err(next) => code - DECIMAL_ZEROS[next - 1] < 10,
    }
}

/// Decimal digit in any script, such as `7`, `٣` or `０`
///
/// Other numeric characters like `½` or `Ⅷ` are left to [`numeric`].
pub fn digit() -> CharClass {
    class(is_decimal_digit, "digit")
}

/// Any Unicode letter
pub fn letter() -> CharClass {
    class(char::is_alphabetic, "letter")
}

pub fn letter_or_digit() -> CharClass {
    class(|c| c.is_alphabetic() || is_decimal_digit(c), "letter or digit")
}

pub fn lower() -> CharClass {
    class(char::is_lowercase, "lowercase letter")
}

pub fn upper() -> CharClass {
    class(char::is_uppercase, "uppercase letter")
}

/// Any Unicode numeric character, including non-ASCII digits and numerals
pub fn numeric() -> CharClass {
    class(char::is_numeric, "numeric character")
}
