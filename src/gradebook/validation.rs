//! Pure validation of raw user input.
//!
//! These functions turn text into typed values or a typed error. Re-prompting on
//! failure is the caller's business; nothing here loops or does I/O.

use crate::error::{AddError, MarkError};
use crate::model::Subject;

pub const MIN_MARK: f64 = 0.0;
pub const MAX_MARK: f64 = 100.0;

pub fn validate_name(raw: &str) -> Result<String, AddError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AddError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn validate_roll(raw: &str) -> Result<String, AddError> {
    let roll = raw.trim();
    if roll.is_empty() {
        return Err(AddError::EmptyRoll);
    }
    Ok(roll.to_string())
}

/// Canonical lookup key for a roll number.
pub fn normalize_roll(roll: &str) -> String {
    roll.trim().to_lowercase()
}

/// Parses one subject's mark from text.
///
/// Text that is not a number is `NotNumeric`. `nan` and `inf` parse as numbers and
/// are then rejected as `OutOfRange`.
pub fn parse_mark(subject: Subject, raw: &str) -> Result<f64, MarkError> {
    let input = raw.trim();
    let value: f64 = input.parse().map_err(|_| MarkError::NotNumeric {
        subject,
        input: input.to_string(),
    })?;
    validate_mark(subject, value)
}

/// Range check for an already-numeric mark. NaN is never in range.
pub fn validate_mark(subject: Subject, value: f64) -> Result<f64, MarkError> {
    if !(MIN_MARK..=MAX_MARK).contains(&value) {
        return Err(MarkError::OutOfRange { subject, value });
    }
    Ok(value)
}
