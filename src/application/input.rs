//! Typed parsing of operator input lines.
//!
//! Every parser takes the raw line and returns either a value or an
//! [`InputError`]. A bad entry is an ordinary outcome here, never an `Err`
//! of the crate error type: the caller decides what to do with it, and the
//! workflows abort on the first one.
//!
//! Numeric fields are stored non-negative, so [`decimal`] and [`short`]
//! fold a negative entry to its absolute value instead of rejecting it.

use std::num::IntErrorKind;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a line could not be turned into a value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty")]
    EmptyInput,

    #[error("input is not a number")]
    NotANumber,

    #[error("number is out of range")]
    Overflow,

    #[error("input is not y or n")]
    InvalidChoice,
}

impl InputError {
    /// The message shown to the operator for a field called `label`.
    #[must_use]
    pub fn describe(self, label: &str) -> String {
        match self {
            Self::EmptyInput => format!("{label} cannot be empty"),
            Self::NotANumber => format!("Invalid {label}. Please enter a number."),
            Self::Overflow => format!("{label} is too large. Please enter a smaller number."),
            Self::InvalidChoice => "Invalid input. Please enter y or n.".to_string(),
        }
    }
}

/// A line with at least one non-whitespace character, returned verbatim.
pub fn non_empty(line: &str) -> Result<String, InputError> {
    if line.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }
    Ok(line.to_string())
}

/// A decimal number, returned as its absolute value.
pub fn decimal(line: &str) -> Result<Decimal, InputError> {
    let text = line.trim();
    if text.is_empty() {
        return Err(InputError::EmptyInput);
    }
    let normalized = normalize_decimal(text).ok_or(InputError::NotANumber)?;
    // The text is a well-formed number at this point, so the only way left
    // to fail is a magnitude beyond 96 bits.
    let value = Decimal::from_str(&normalized).map_err(|_| InputError::Overflow)?;
    Ok(value.abs())
}

/// A 16-bit integer, returned as its absolute value.
pub fn short(line: &str) -> Result<i16, InputError> {
    let value: i16 = parse_integer(line)?;
    value.checked_abs().ok_or(InputError::Overflow)
}

/// A 32-bit integer, returned as typed. Used for record identifiers.
pub fn integer(line: &str) -> Result<i32, InputError> {
    parse_integer(line)
}

/// `y` or `n` in any case.
pub fn yes_no(line: &str) -> Result<bool, InputError> {
    let text = line.trim();
    if text.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(InputError::InvalidChoice)
    }
}

/// Edit-mode wrapper: a blank line keeps the current value (`None`),
/// anything else goes through `parse`.
pub fn keep_or<T>(
    line: &str,
    parse: impl FnOnce(&str) -> Result<T, InputError>,
) -> Result<Option<T>, InputError> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    parse(line).map(Some)
}

fn parse_integer<T>(line: &str) -> Result<T, InputError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let text = line.trim();
    if text.is_empty() {
        return Err(InputError::EmptyInput);
    }
    text.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::Overflow,
        IntErrorKind::Empty => InputError::EmptyInput,
        _ => InputError::NotANumber,
    })
}

/// Check decimal syntax (`[+-]digits[.digits]`) and return a form
/// `Decimal::from_str` accepts, or `None` if the text is not a number.
fn normalize_decimal(text: &str) -> Option<String> {
    let (sign, unsigned) = match text.as_bytes().first()? {
        b'-' => ("-", &text[1..]),
        b'+' => ("", &text[1..]),
        _ => ("", text),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) {
        return None;
    }
    match fraction {
        None if whole.is_empty() => None,
        None => Some(format!("{sign}{whole}")),
        Some(fraction) if fraction.is_empty() || !all_digits(fraction) => None,
        Some(fraction) => {
            let whole = if whole.is_empty() { "0" } else { whole };
            Some(format!("{sign}{whole}.{fraction}"))
        }
    }
}
