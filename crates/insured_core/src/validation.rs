//! Field validation for raw shell input.
//!
//! # Responsibility
//! - Classify raw text into `Validation::Correct` or one rejection reason.
//!
//! # Invariants
//! - Validators are pure: no state, no I/O, no logging.
//! - Rejection reasons form a closed set; message text lives at the
//!   presentation edge.

use once_cell::sync::Lazy;
use regex::Regex;

const SHORT_PHONE_LEN: usize = 9;
const MIN_AGE: i32 = 0;
const MAX_AGE: i32 = 100;

static LETTERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}+$").expect("valid letters regex"));
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid digits regex"));
static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid spaces regex"));

/// Outcome of validating one raw field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validation {
    /// Input is acceptable.
    Correct,
    /// Name is empty after trimming.
    NameEmpty,
    /// Name contains a character that is not a Unicode letter.
    NameNotLetter,
    /// Phone number has fewer than 9 characters.
    PhoneTooShort,
    /// 9-character phone number contains a non-digit.
    PhoneShortFormNotDigits,
    /// Longer phone number contains a non-digit (ignoring a leading `+`).
    PhoneLongFormNotDigits,
    /// Age is not an integer in `0..=100`.
    AgeIncorrect,
}

impl Validation {
    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }

    /// Stable identifier used to look up user-facing text.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::NameEmpty => "name_empty",
            Self::NameNotLetter => "name_not_letter",
            Self::PhoneTooShort => "phone_too_short",
            Self::PhoneShortFormNotDigits => "phone_short_form_not_digits",
            Self::PhoneLongFormNotDigits => "phone_long_form_not_digits",
            Self::AgeIncorrect => "age_incorrect",
        }
    }
}

/// Any of the field validators in this module.
pub type FieldValidator = fn(&str) -> Validation;

/// Validates a first or last name.
pub fn validate_name(text: &str) -> Validation {
    let name = text.trim();
    if name.is_empty() {
        return Validation::NameEmpty;
    }
    if !LETTERS_RE.is_match(name) {
        return Validation::NameNotLetter;
    }
    Validation::Correct
}

/// Validates a phone number after removing all space characters.
///
/// Numbers longer than 9 characters may start with `+`; without it the
/// whole string must be digits (a `00` country prefix is assumed, not checked).
pub fn validate_phone_number(text: &str) -> Validation {
    let number = normalize_phone_number(text);
    let len = number.chars().count();

    if len < SHORT_PHONE_LEN {
        return Validation::PhoneTooShort;
    }
    if len == SHORT_PHONE_LEN {
        if !DIGITS_RE.is_match(&number) {
            return Validation::PhoneShortFormNotDigits;
        }
        return Validation::Correct;
    }

    let digits = number.strip_prefix('+').unwrap_or(&number);
    if !DIGITS_RE.is_match(digits) {
        return Validation::PhoneLongFormNotDigits;
    }
    Validation::Correct
}

/// Validates an age given as text.
pub fn validate_age(text: &str) -> Validation {
    match parse_age(text) {
        Some(_) => Validation::Correct,
        None => Validation::AgeIncorrect,
    }
}

/// Parses an age accepted by [`validate_age`].
pub fn parse_age(text: &str) -> Option<u8> {
    let age = text.trim().parse::<i32>().ok()?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return None;
    }
    u8::try_from(age).ok()
}

/// Removes every space (U+0020) from a phone number; other whitespace is kept.
pub fn normalize_phone_number(text: &str) -> String {
    SPACES_RE.replace_all(text, "").into_owned()
}
