//! # Domain Types
//!
//! Core domain types used throughout qa3at.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Venue       │   │    Booking      │   │  BookingItem    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  item_type      │       │
//! │  │  name / nameAr  │   │  status         │   │  name snapshot  │       │
//! │  │  base_price     │   │  guest_count    │   │  unit_price     │       │
//! │  │  luxury_rank    │   │  total_fils     │   │  total_price    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  BookingStatus  │   │    PriceType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Pending        │   │  Fixed          │       │
//! │  │  1000 = 10%     │   │  Confirmed      │   │  PerPerson      │       │
//! │  └─────────────────┘   │  Completed      │   │  PerHour        │       │
//! │                        │  Cancelled      │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bilingual Fields
//! Every customer-facing name/description carries an English and an Arabic
//! form (`name` / `name_ar`). Which one is rendered is decided per request by
//! [`Lang`], never by process-wide state.
//!
//! ## Closed Enums
//! Category, tier, status, and price-type values are closed enums with
//! exhaustive mapping at the wire and database boundaries. An unknown string
//! fails fast there instead of silently defaulting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::Money;
use crate::LUXURY_RANK_UNRANKED;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the VAT-equivalent rate on bookings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Language
// =============================================================================

/// Rendering language for bilingual fields.
///
/// Parsed per request (e.g., from `Accept-Language`) and passed explicitly
/// into any localized formatting. There is deliberately no global locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    /// Picks a language from an `Accept-Language` header value.
    /// Anything that doesn't lead with an Arabic tag falls back to English.
    pub fn from_accept_language(header: Option<&str>) -> Self {
        match header {
            Some(value) if value.trim_start().to_ascii_lowercase().starts_with("ar") => Lang::Ar,
            _ => Lang::En,
        }
    }
}

// =============================================================================
// Venue
// =============================================================================

/// The venue category: a hotel ballroom or an independent hall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VenueCategory {
    Hotel,
    Hall,
}

impl VenueCategory {
    /// Database/wire string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            VenueCategory::Hotel => "HOTEL",
            VenueCategory::Hall => "HALL",
        }
    }
}

impl FromStr for VenueCategory {
    type Err = crate::ValidationError;

    /// Case-insensitive parse of a category string.
    ///
    /// The `"all"` / empty-string "no filter" sentinels are handled at the
    /// query-parameter boundary, not here; this parser only accepts real
    /// categories and rejects everything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hotel" => Ok(VenueCategory::Hotel),
            "hall" => Ok(VenueCategory::Hall),
            other => Err(crate::ValidationError::NotAllowed {
                field: "type".to_string(),
                value: other.to_string(),
                allowed: vec!["hotel".to_string(), "hall".to_string()],
            }),
        }
    }
}

impl fmt::Display for VenueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A photo attached to a venue. One photo per venue is marked primary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePhoto {
    pub id: String,
    pub venue_id: String,
    pub url: String,
    pub is_primary: bool,
    /// Display order within the venue gallery (ascending).
    pub sort_order: i64,
}

/// Slim vendor reference embedded in venue detail responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRef {
    pub id: String,
    pub name: String,
    pub name_ar: String,
}

/// A bookable wedding venue.
///
/// ## Capacity Semantics
/// `capacity == 0` means "unknown", not "zero seats". A guest-count filter
/// never matches an unknown-capacity venue (see [`crate::search`]).
///
/// ## Luxury Rank
/// A manually curated integer; lower = more luxury. Unranked venues carry
/// [`LUXURY_RANK_UNRANKED`] so they sort after every curated one in the
/// default ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Owning vendor.
    pub vendor_id: String,

    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    pub address: String,
    pub address_ar: String,
    pub city: String,
    pub city_ar: String,

    /// Geo-coordinates; absent for venues scraped without a map pin.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Minimum bookable guest count.
    pub min_capacity: i64,
    /// Maximum guest count. 0 = unknown.
    pub capacity: i64,

    /// Flat rental price in fils.
    pub base_price_fils: i64,
    /// Per-guest price in fils (catering-style pricing).
    pub price_per_person_fils: i64,

    /// Average review rating (0.0 - 5.0).
    pub rating: f64,
    pub review_count: i64,

    pub category: VenueCategory,

    /// Amenity labels ("Parking", "Bridal suite", ...).
    pub amenities: Vec<String>,

    /// Whether the venue is listed (soft delete).
    pub is_active: bool,
    /// Editorially featured; sorts first in the default ordering.
    pub is_featured: bool,
    /// Manual luxury rank; lower = more luxury.
    pub luxury_rank: i64,

    /// Ordered photo gallery; search responses carry only the primary photo.
    pub photos: Vec<VenuePhoto>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl Venue {
    /// Returns the flat rental price as Money.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_fils(self.base_price_fils)
    }

    /// Returns the per-guest price as Money.
    #[inline]
    pub fn price_per_person(&self) -> Money {
        Money::from_fils(self.price_per_person_fils)
    }

    /// Venue rental line for a given party size: `base + per_person × guests`.
    pub fn rental_price(&self, guest_count: i64) -> Money {
        self.base_price() + self.price_per_person().multiply_quantity(guest_count)
    }

    /// Display name in the requested language.
    pub fn display_name(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.name,
            Lang::Ar => &self.name_ar,
        }
    }

    /// Whether this venue was never manually ranked.
    #[inline]
    pub fn is_unranked(&self) -> bool {
        self.luxury_rank >= LUXURY_RANK_UNRANKED
    }

    /// Drops every photo except the primary one. List responses send a
    /// single card image; the detail endpoint keeps the full gallery.
    pub fn retain_primary_photo(&mut self) {
        self.photos.retain(|p| p.is_primary);
        self.photos.truncate(1);
    }
}

// =============================================================================
// Packages and Addons
// =============================================================================

/// Quality bracket of a service package. Cosmetic label, not load-bearing
/// in any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageTier {
    Silver,
    Gold,
    Diamond,
}

impl PackageTier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Silver => "SILVER",
            PackageTier::Gold => "GOLD",
            PackageTier::Diamond => "DIAMOND",
        }
    }
}

impl FromStr for PackageTier {
    type Err = crate::ValidationError;

    /// Parses the stored tier string. Unknown values fail fast.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SILVER" => Ok(PackageTier::Silver),
            "GOLD" => Ok(PackageTier::Gold),
            "DIAMOND" => Ok(PackageTier::Diamond),
            other => Err(crate::ValidationError::NotAllowed {
                field: "tier".to_string(),
                value: other.to_string(),
                allowed: vec!["SILVER".to_string(), "GOLD".to_string(), "DIAMOND".to_string()],
            }),
        }
    }
}

/// A bundled service offering (decoration, catering, ...).
///
/// Priced as an optional flat base plus a per-guest rate; either part may
/// be zero/absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    pub tier: PackageTier,
    /// Free-form category label ("DECORATION", "CATERING", ...).
    pub category: String,
    /// Flat component in fils; `None` for purely per-guest packages.
    pub base_price_fils: Option<i64>,
    /// Per-guest component in fils.
    pub price_per_person_fils: i64,
    pub is_active: bool,
}

impl Package {
    /// Package line for a party size: `(base ?? 0) + per_person × guests`.
    pub fn price_for(&self, guest_count: i64) -> Money {
        Money::from_fils(self.base_price_fils.unwrap_or(0))
            + Money::from_fils(self.price_per_person_fils).multiply_quantity(guest_count)
    }
}

/// Pricing semantics of an addon.
///
/// `PerHour` is declared in the catalogue but no duration field exists
/// anywhere in the booking flow, so it prices as flat until one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceType {
    Fixed,
    PerPerson,
    PerHour,
}

impl PriceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PriceType::Fixed => "FIXED",
            PriceType::PerPerson => "PER_PERSON",
            PriceType::PerHour => "PER_HOUR",
        }
    }
}

impl FromStr for PriceType {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(PriceType::Fixed),
            "PER_PERSON" => Ok(PriceType::PerPerson),
            "PER_HOUR" => Ok(PriceType::PerHour),
            other => Err(crate::ValidationError::NotAllowed {
                field: "priceType".to_string(),
                value: other.to_string(),
                allowed: vec![
                    "FIXED".to_string(),
                    "PER_PERSON".to_string(),
                    "PER_HOUR".to_string(),
                ],
            }),
        }
    }
}

/// An à la carte extra (photographer, oud player, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    /// Free-form category label.
    pub category: String,
    pub price_fils: i64,
    pub price_type: PriceType,
    pub is_active: bool,
}

impl Addon {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_fils(self.price_fils)
    }
}

// =============================================================================
// Time Slots
// =============================================================================

/// A named event interval ("Evening", 18:00-23:00).
///
/// Start/end are opaque display strings; no overlap validation is performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
}

/// An availability record for a venue on a date and slot.
///
/// Exposed via the availability endpoint. Booking creation does not consult
/// these rows (matches observed upstream behavior).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueAvailability {
    pub id: String,
    pub venue_id: String,
    pub slot_id: String,
    pub date: String,
    pub is_available: bool,
}

// =============================================================================
// Booking
// =============================================================================

/// The status of a booking.
///
/// ## State Machine
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │   PENDING ──────► CONFIRMED ──────► COMPLETED (terminal)               │
/// │      │                │                                                 │
/// │      └────────┬───────┘                                                 │
/// │               ▼                                                         │
/// │           CANCELLED (terminal)                                          │
/// │                                                                         │
/// │   Cancel is rejected (BadRequest) from CANCELLED or COMPLETED.          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Created, awaiting confirmation.
    #[default]
    Pending,
    /// Confirmed by the vendor/payment flow.
    Confirmed,
    /// Event took place. Terminal.
    Completed,
    /// Cancelled by the user. Terminal.
    Cancelled,
}

impl BookingStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Whether a user-initiated cancel is allowed from this status.
    pub const fn can_cancel(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Whether the state machine permits `self → next`.
    pub const fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
        )
    }
}

impl FromStr for BookingStatus {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "COMPLETED" => Ok(BookingStatus::Completed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            other => Err(crate::ValidationError::NotAllowed {
                field: "status".to_string(),
                value: other.to_string(),
                allowed: vec![
                    "PENDING".to_string(),
                    "CONFIRMED".to_string(),
                    "COMPLETED".to_string(),
                    "CANCELLED".to_string(),
                ],
            }),
        }
    }
}

/// Line-item type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Venue,
    Package,
    Addon,
}

impl ItemType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemType::Venue => "VENUE",
            ItemType::Package => "PACKAGE",
            ItemType::Addon => "ADDON",
        }
    }
}

impl FromStr for ItemType {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VENUE" => Ok(ItemType::Venue),
            "PACKAGE" => Ok(ItemType::Package),
            "ADDON" => Ok(ItemType::Addon),
            other => Err(crate::ValidationError::NotAllowed {
                field: "itemType".to_string(),
                value: other.to_string(),
                allowed: vec!["VENUE".to_string(), "PACKAGE".to_string(), "ADDON".to_string()],
            }),
        }
    }
}

/// A priced line in a booking.
/// Uses the snapshot pattern: name and prices are frozen at booking-creation
/// time and never recomputed, even if the catalogue changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingItem {
    pub id: String,
    pub booking_id: String,
    pub item_type: ItemType,
    /// Name at time of booking (frozen).
    pub name: String,
    /// Arabic name at time of booking (frozen).
    pub name_ar: String,
    /// Source package, if this line is a package.
    pub package_id: Option<String>,
    /// Source addon, if this line is an addon.
    pub addon_id: Option<String>,
    pub quantity: i64,
    /// Unit price in fils at time of booking (frozen).
    pub unit_price_fils: i64,
    /// Line total in fils (frozen).
    pub total_price_fils: i64,
}

impl BookingItem {
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_fils(self.unit_price_fils)
    }

    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_fils(self.total_price_fils)
    }
}

/// A venue booking with its frozen invoice lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub venue_id: String,
    pub slot_id: String,
    /// Event date as an ISO `YYYY-MM-DD` string. Not cross-validated against
    /// slot or venue availability at the domain level.
    pub date: String,
    pub guest_count: i64,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub subtotal_fils: i64,
    pub tax_fils: i64,
    pub total_fils: i64,
    pub items: Vec<BookingItem>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_fils(self.subtotal_fils)
    }

    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_fils(self.tax_fils)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_fils(self.total_fils)
    }
}

// =============================================================================
// Search Parameters
// =============================================================================

/// Sort key for venue search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Base price ascending.
    PriceLow,
    /// Base price descending.
    PriceHigh,
    /// Rating descending.
    Rating,
    /// Capacity descending.
    Capacity,
    /// Display name ascending.
    Name,
    /// Default multi-key order: featured desc, luxury rank asc, rating desc.
    #[default]
    Recommended,
}

impl FromStr for SortKey {
    type Err = crate::ValidationError;

    /// Parses the `sortBy` query parameter. Empty = default ordering;
    /// unknown values fail fast.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_low" => Ok(SortKey::PriceLow),
            "price_high" => Ok(SortKey::PriceHigh),
            "rating" => Ok(SortKey::Rating),
            "capacity" => Ok(SortKey::Capacity),
            "name" => Ok(SortKey::Name),
            "" | "recommended" => Ok(SortKey::Recommended),
            other => Err(crate::ValidationError::NotAllowed {
                field: "sortBy".to_string(),
                value: other.to_string(),
                allowed: vec![
                    "price_low".to_string(),
                    "price_high".to_string(),
                    "rating".to_string(),
                    "capacity".to_string(),
                    "name".to_string(),
                ],
            }),
        }
    }
}

/// Value bag parameterizing the filter → rank → paginate pipeline.
/// Carries no lifecycle of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Free-text query; case-insensitive substring over bilingual
    /// name/description/city fields.
    pub query: Option<String>,
    /// Case-insensitive exact city match.
    pub city: Option<String>,
    /// Category filter; `None` means all categories.
    pub category: Option<VenueCategory>,
    /// Event date; carried for the client, not used as a predicate.
    pub date: Option<String>,
    /// Guest count; venue must satisfy `min_capacity <= g <= capacity`.
    pub guest_count: Option<i64>,
    /// Time slot; carried for the client, not used as a predicate.
    pub slot_id: Option<String>,
    /// Requested ordering.
    pub sort: SortKey,
}

// =============================================================================
// Users
// =============================================================================

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Customer,
    Vendor,
    Admin,
}

impl UserRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "CUSTOMER",
            UserRole::Vendor => "VENDOR",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl FromStr for UserRole {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" => Ok(UserRole::Customer),
            "VENDOR" => Ok(UserRole::Vendor),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(crate::ValidationError::NotAllowed {
                field: "role".to_string(),
                value: other.to_string(),
                allowed: vec![
                    "CUSTOMER".to_string(),
                    "VENDOR".to_string(),
                    "ADMIN".to_string(),
                ],
            }),
        }
    }
}

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Argon2 password hash. Never serialized to the wire.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_transitions() {
        use BookingStatus::*;

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Pending));
    }

    #[test]
    fn test_cancel_allowed_only_from_pending_or_confirmed() {
        assert!(BookingStatus::Pending.can_cancel());
        assert!(BookingStatus::Confirmed.can_cancel());
        assert!(!BookingStatus::Completed.can_cancel());
        assert!(!BookingStatus::Cancelled.can_cancel());
    }

    #[test]
    fn test_venue_category_parse() {
        assert_eq!("hotel".parse::<VenueCategory>().unwrap(), VenueCategory::Hotel);
        assert_eq!("HALL".parse::<VenueCategory>().unwrap(), VenueCategory::Hall);
        assert!("castle".parse::<VenueCategory>().is_err());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("price_low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::Recommended);
        assert!("cheapest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_lang_from_accept_language() {
        assert_eq!(Lang::from_accept_language(Some("ar-BH,ar;q=0.9")), Lang::Ar);
        assert_eq!(Lang::from_accept_language(Some("en-US")), Lang::En);
        assert_eq!(Lang::from_accept_language(None), Lang::En);
    }

    #[test]
    fn test_tax_rate_percentage() {
        assert!((TaxRate::from_bps(1000).percentage() - 10.0).abs() < 0.001);
    }

    fn photo(id: &str, is_primary: bool, sort_order: i64) -> VenuePhoto {
        VenuePhoto {
            id: id.to_string(),
            venue_id: "v-1".to_string(),
            url: format!("https://example.test/{id}.jpg"),
            is_primary,
            sort_order,
        }
    }

    fn gallery_venue(photos: Vec<VenuePhoto>) -> Venue {
        Venue {
            id: "v-1".to_string(),
            vendor_id: "vendor-1".to_string(),
            name: "Pearl Ballroom".to_string(),
            name_ar: "قاعة اللؤلؤة".to_string(),
            description: String::new(),
            description_ar: String::new(),
            address: String::new(),
            address_ar: String::new(),
            city: "Manama".to_string(),
            city_ar: "المنامة".to_string(),
            latitude: None,
            longitude: None,
            min_capacity: 50,
            capacity: 400,
            base_price_fils: 1_500_000,
            price_per_person_fils: 0,
            rating: 4.5,
            review_count: 10,
            category: VenueCategory::Hotel,
            amenities: vec![],
            is_active: true,
            is_featured: false,
            luxury_rank: LUXURY_RANK_UNRANKED,
            photos,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_retain_primary_photo_keeps_one_card_image() {
        let mut venue = gallery_venue(vec![
            photo("p1", false, 0),
            photo("p2", true, 1),
            photo("p3", false, 2),
        ]);
        venue.retain_primary_photo();
        assert_eq!(venue.photos.len(), 1);
        assert_eq!(venue.photos[0].id, "p2");
    }

    #[test]
    fn test_retain_primary_photo_without_primary_drops_gallery() {
        let mut venue = gallery_venue(vec![photo("p1", false, 0), photo("p2", false, 1)]);
        venue.retain_primary_photo();
        assert!(venue.photos.is_empty());
    }
}
