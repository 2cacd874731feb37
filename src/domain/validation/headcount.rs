//! Headcount validation.

use super::ValidationError;
use crate::domain::recruitment::Headcount;

/// Validate the requested headcount.
///
/// Absent input and `0` (the platform's "not supplied" for integer
/// options) fall back to [`Headcount::default`]. Any other value must be
/// one of 2, 3, 5 or 10.
pub fn validate_headcount(raw: Option<i64>) -> Result<Headcount, ValidationError> {
    match raw {
        None | Some(0) => Ok(Headcount::default()),
        Some(value) => Headcount::try_from_value(value),
    }
}
