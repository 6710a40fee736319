//! Utility functions for controller request handling.
//!
//! Path IDs are parsed by axum's `Path` extractor, which already rejects segments that
//! are not integers. The helpers here reject values that parse but can never identify
//! a record.

use crate::server::error::Error;

/// Ensures a path ID is a positive integer.
///
/// # Returns
/// - `Ok(i32)` - The ID, unchanged
/// - `Err(Error::BadRequest)` - The ID is zero or negative
pub fn validate_id(name: &str, id: i32) -> Result<i32, Error> {
    if id <= 0 {
        return Err(Error::BadRequest(format!(
            "Invalid {}: must be a positive integer",
            name
        )));
    }

    Ok(id)
}
