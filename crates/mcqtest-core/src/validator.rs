//! Response validation.

use crate::error::ResponseError;

/// The only accepted answer letters. Matching is case-sensitive.
pub const VALID_OPTIONS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Check a trimmed, non-blank response against [`VALID_OPTIONS`].
///
/// Blank input is the caller's concern: it is a default answer in a normal
/// test and an error while capturing a key.
pub fn validate_response(response: &str) -> Result<(), ResponseError> {
    if VALID_OPTIONS.contains(&response) {
        Ok(())
    } else {
        Err(ResponseError::Invalid(response.to_string()))
    }
}
