//! # qa3at-core: Pure Business Logic for qa3at
//!
//! This crate is the **heart** of qa3at, a wedding-venue booking service.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         qa3at Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile Client                                │   │
//! │  │   Search ──► Venue Detail ──► Package Builder ──► Booking      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST (JSON)                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    API Server (axum)                            │   │
//! │  │    /venues, /packages, /bookings, /assistant, /auth            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ qa3at-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  search   │  │  pricing  │  │   │
//! │  │   │   Venue   │  │   Money   │  │  filter   │  │  estimate │  │   │
//! │  │   │  Booking  │  │  TaxRate  │  │  rank     │  │  quote    │  │   │
//! │  │   └───────────┘  └───────────┘  │  paginate │  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  └───────────┘                 │   │
//! │  │   │ assistant │  │ validation│                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    qa3at-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Venue, Package, Booking, etc.)
//! - [`money`] - Money type in fils (no floating point!)
//! - [`search`] - Venue filter, ranker, and pagination
//! - [`pricing`] - Price estimator producing frozen booking lines
//! - [`assistant`] - Rule-based venue recommendation stub
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in fils (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod assistant;
pub mod error;
pub mod money;
pub mod pricing;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use qa3at_core::Money` instead of
// `use qa3at_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// VAT-equivalent tax rate applied to every booking, in basis points.
///
/// ## Why a constant?
/// 10% is the flat rate used across the whole pricing path. Keeping it named
/// here (rather than `* 0.10` inline) means one place to change when the
/// rate changes and zero magic numbers in the estimator.
pub const VAT_RATE_BPS: u32 = 1000;

/// Sentinel luxury rank for venues that were never manually ranked.
///
/// ## Business Reason
/// Curators assign low numbers (1 = most luxury) to promote specific venues
/// in the default ordering. Unranked venues carry this sentinel so they sort
/// after every curated one.
pub const LUXURY_RANK_UNRANKED: i64 = 999;

/// Maximum page size accepted by the search pipeline.
///
/// ## Business Reason
/// Caps response payloads; anything larger is clamped at the boundary,
/// never rejected.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Default page size when the client does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum guest count accepted on a booking or search filter.
///
/// ## Business Reason
/// The largest halls in the catalogue seat around 2,500; 5,000 leaves
/// headroom without letting a typo (50000) through.
pub const MAX_GUEST_COUNT: i64 = 5000;
