//! Validation of the user-supplied term count.

use std::num::IntErrorKind;

use fibseq_core::MAX_EXACT_TERMS;
use thiserror::Error;

/// Message shown to the user for any rejected count.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid non-negative integer.";

/// Reasons a term count is rejected before generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Nothing was entered.
    #[error("no term count was entered")]
    Empty,

    /// The text is not an integer.
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),

    /// The integer is below zero.
    #[error("term count must not be negative: {0}")]
    Negative(String),

    /// The count would produce terms that do not fit the term type.
    #[error("term count {requested} exceeds the maximum of {max}")]
    TooLarge { requested: String, max: usize },
}

/// Parse a term count from raw user text.
///
/// Surrounding whitespace is ignored and a leading `+` is accepted. Anything
/// else that is not a plain integer in `0..=MAX_EXACT_TERMS` is rejected.
pub fn parse_count(text: &str) -> Result<usize, InvalidInputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InvalidInputError::Empty);
    }

    let value: i128 = text.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => InvalidInputError::TooLarge {
            requested: text.to_string(),
            max: MAX_EXACT_TERMS,
        },
        IntErrorKind::NegOverflow => InvalidInputError::Negative(text.to_string()),
        _ => InvalidInputError::NotAnInteger(text.to_string()),
    })?;

    if value < 0 {
        return Err(InvalidInputError::Negative(text.to_string()));
    }

    match usize::try_from(value) {
        Ok(count) if count <= MAX_EXACT_TERMS => Ok(count),
        _ => Err(InvalidInputError::TooLarge {
            requested: text.to_string(),
            max: MAX_EXACT_TERMS,
        }),
    }
}
