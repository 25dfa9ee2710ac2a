//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Repeated line-item additions drift:                                    │
//! │    BD 10.000 / 3 = BD 3.333 (×3 = BD 9.999)  → Lost a fils!            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Fils                                             │
//! │    All prices are i64 fils. 1 BHD = 1000 fils (BHD has three           │
//! │    minor digits). The database, calculations, and API all use fils.    │
//! │    Only display layers convert to dinars.                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use qa3at_core::money::Money;
//!
//! // Create from fils (preferred)
//! let base = Money::from_fils(1_500_000); // BD 1,500.000
//!
//! // Or from whole dinars for fixtures and seeds
//! let same = Money::from_dinars(1500);
//! assert_eq!(base, same);
//!
//! // Arithmetic operations
//! let per_person = Money::from_dinars(25);
//! let total = base + per_person.multiply_quantity(200);
//! assert_eq!(total.dinars(), 6500);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

/// Number of fils in one Bahraini dinar.
///
/// BHD is a three-minor-digit currency, unlike the two digits of USD/EUR.
pub const FILS_PER_DINAR: i64 = 1000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in fils (the smallest BHD unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a plain integer of fils
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Venue.base_price ──┬──► BookingItem.unit_price ──► BookingItem.total   │
/// │                     │                                                   │
/// │                     └──► Displayed as "BD 1,500.000" in the client      │
/// │                                                                         │
/// │  Quote.subtotal ──► VAT Calculation ──► Quote.total ──► Booking.total   │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from fils (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use qa3at_core::money::Money;
    ///
    /// let price = Money::from_fils(1_500_000); // BD 1,500.000
    /// assert_eq!(price.fils(), 1_500_000);
    /// ```
    #[inline]
    pub const fn from_fils(fils: i64) -> Self {
        Money(fils)
    }

    /// Creates a Money value from whole dinars.
    ///
    /// Convenient for catalogue prices, which are quoted in whole BHD.
    #[inline]
    pub const fn from_dinars(dinars: i64) -> Self {
        Money(dinars * FILS_PER_DINAR)
    }

    /// Returns the value in fils.
    #[inline]
    pub const fn fils(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dinars) portion.
    #[inline]
    pub const fn dinars(&self) -> i64 {
        self.0 / FILS_PER_DINAR
    }

    /// Returns the minor unit (fils) portion (always 0-999).
    #[inline]
    pub const fn fils_part(&self) -> i64 {
        (self.0 % FILS_PER_DINAR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates a percentage of this amount with half-up rounding.
    ///
    /// ## Implementation
    /// Integer math throughout: `(fils * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use qa3at_core::money::Money;
    /// use qa3at_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_dinars(6500);
    /// let vat = TaxRate::from_bps(1000); // 10%
    ///
    /// assert_eq!(subtotal.calculate_tax(vat).dinars(), 650);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Quote subtotal: BD 6,500.000
    ///      │
    ///      ▼
    /// calculate_tax(10%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: BD 650.000
    ///      │
    ///      ▼
    /// Grand Total: BD 7,150.000
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        let tax_fils = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_fils(tax_fils as i64)
    }

    /// Multiplies money by a quantity (e.g., a per-person rate by guest count).
    ///
    /// ## Example
    /// ```rust
    /// use qa3at_core::money::Money;
    ///
    /// let per_person = Money::from_dinars(25);
    /// assert_eq!(per_person.multiply_quantity(200).dinars(), 5000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, quantity: i64) -> Money {
        Money(self.0 * quantity)
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        Money(self.0 * quantity)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    /// Formats as "BD 1,500.000" for logs and diagnostics.
    /// Client-facing formatting (locale, Arabic numerals) happens in the app.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}BD {}.{:03}", sign, self.dinars().abs(), self.fils_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
