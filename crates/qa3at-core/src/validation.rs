//! # Validation Helpers
//!
//! Pure validation functions for user input, run at the API boundary before
//! any business logic or database work.
//!
//! Each helper returns `Result<(), ValidationError>` (or the parsed value)
//! so callers can chain them with `?`.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::MAX_GUEST_COUNT;

/// Maximum length accepted for the free-text search query.
pub const MAX_QUERY_LENGTH: usize = 100;

/// Maximum length for booking notes.
pub const MAX_NOTES_LENGTH: usize = 1000;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a guest count is in `[1, MAX_GUEST_COUNT]`.
pub fn validate_guest_count(guest_count: i64) -> Result<(), ValidationError> {
    if guest_count < 1 || guest_count > MAX_GUEST_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "guestCount".to_string(),
            min: 1,
            max: MAX_GUEST_COUNT,
        });
    }
    Ok(())
}

/// Validates and parses an ISO `YYYY-MM-DD` event date.
pub fn validate_date(date: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })
}

/// Validates the free-text search query length.
pub fn validate_search_query(query: &str) -> Result<(), ValidationError> {
    if query.len() > MAX_QUERY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LENGTH,
        });
    }
    Ok(())
}

/// Validates optional booking notes length.
pub fn validate_notes(notes: &str) -> Result<(), ValidationError> {
    if notes.len() > MAX_NOTES_LENGTH {
        return Err(ValidationError::TooLong {
            field: "notes".to_string(),
            max: MAX_NOTES_LENGTH,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
