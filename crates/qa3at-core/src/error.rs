//! # Error Types
//!
//! Domain-specific error types for qa3at-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  qa3at-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  qa3at-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - What the client sees (HTTP status + JSON)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Client       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (venue id, status, etc.)
//! 3. Errors are enum variants, never String
//! 4. The pure search/pricing functions never construct these; all fallible
//!    behavior lives at the boundaries

use thiserror::Error;

use crate::types::BookingStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or missing referenced
/// entities. They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Referenced venue cannot be found (or is soft-deleted).
    #[error("Venue not found: {0}")]
    VenueNotFound(String),

    /// Referenced time slot cannot be found.
    #[error("Time slot not found: {0}")]
    SlotNotFound(String),

    /// Referenced booking cannot be found.
    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    /// A cancel was requested from a terminal status.
    ///
    /// ## When This Occurs
    /// ```text
    /// PATCH /bookings/{id}/cancel
    ///      │
    ///      ▼
    /// status is COMPLETED or CANCELLED
    ///      │
    ///      ▼
    /// CannotCancel { booking_id, status: Completed }
    ///      │
    ///      ▼
    /// Client shows: "Cannot cancel this booking"
    /// ```
    #[error("Booking {booking_id} is {status:?} and cannot be cancelled")]
    CannotCancel {
        booking_id: String,
        status: BookingStatus,
    },

    /// A status change outside the booking state machine was requested.
    #[error("Booking {booking_id} cannot move from {from:?} to {to:?}")]
    InvalidStatusTransition {
        booking_id: String,
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid date string).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the closed set of accepted values.
    /// Unknown wire strings fail fast here instead of silently defaulting.
    #[error("{field} '{value}' must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CannotCancel {
            booking_id: "b-1".to_string(),
            status: BookingStatus::Completed,
        };
        assert_eq!(
            err.to_string(),
            "Booking b-1 is Completed and cannot be cancelled"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooLong {
            field: "notes".to_string(),
            max: 1000,
        };
        assert_eq!(err.to_string(), "notes must be at most 1000 characters");

        let err = ValidationError::OutOfRange {
            field: "guestCount".to_string(),
            min: 1,
            max: 5000,
        };
        assert_eq!(err.to_string(), "guestCount must be between 1 and 5000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
