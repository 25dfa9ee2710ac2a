//! # Price Estimator
//!
//! Turns a venue + package + addon selection into a priced quote.
//!
//! ## Quote Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Quote for 200 guests                                │
//! │                                                                         │
//! │  VENUE    Pearl Ballroom        1 × BD 6,500.000  =  BD 6,500.000      │
//! │           (base 1,500 + 25/person × 200)                               │
//! │  PACKAGE  Gold Decoration       1 × BD 1,400.000  =  BD 1,400.000      │
//! │           (base 400 + 5/person × 200)                                  │
//! │  ADDON    Photographer          1 × BD   350.000  =  BD   350.000      │
//! │  ADDON    Welcome Drinks      200 × BD     1.500  =  BD   300.000      │
//! │                                                   ─────────────────    │
//! │  Subtotal                                            BD 8,550.000      │
//! │  Tax (10%)                                           BD   855.000      │
//! │  Total                                               BD 9,405.000      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line Rules
//! - Venue: quantity 1, unit price `base + per_person × guests`
//! - Package: quantity 1, unit price `(base ?? 0) + per_person × guests`
//! - Addon PER_PERSON: quantity = guests, unit price = catalogue price
//! - Addon FIXED / PER_HOUR: quantity 1, unit price = catalogue price
//!   (no duration exists in the booking flow, so PER_HOUR prices flat)
//!
//! The quote's lines carry frozen name/price snapshots; the booking layer
//! persists them verbatim so later catalogue edits never rewrite history.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Addon, ItemType, Package, PriceType, TaxRate, Venue};
use crate::VAT_RATE_BPS;

// =============================================================================
// Quote Types
// =============================================================================

/// One priced line of a quote. Everything here is a snapshot: names and
/// prices are copied out of the catalogue at estimation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub item_type: ItemType,
    pub name: String,
    pub name_ar: String,
    /// Source package id, for PACKAGE lines.
    pub package_id: Option<String>,
    /// Source addon id, for ADDON lines.
    pub addon_id: Option<String>,
    pub quantity: i64,
    pub unit_price: Money,
    pub total_price: Money,
}

/// A complete priced quote: lines plus the subtotal/tax/total roll-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// Estimator
// =============================================================================

/// Prices a selection for a given party size.
///
/// Deterministic and total: callers validate guest count and resolve
/// catalogue ids before calling, so nothing here can fail.
///
/// Line order is stable: venue first, then packages and addons in the
/// order given.
pub fn estimate(venue: &Venue, guest_count: i64, packages: &[Package], addons: &[Addon]) -> Quote {
    let mut lines = Vec::with_capacity(1 + packages.len() + addons.len());

    let rental = venue.rental_price(guest_count);
    lines.push(QuoteLine {
        item_type: ItemType::Venue,
        name: venue.name.clone(),
        name_ar: venue.name_ar.clone(),
        package_id: None,
        addon_id: None,
        quantity: 1,
        unit_price: rental,
        total_price: rental,
    });

    for package in packages {
        let price = package.price_for(guest_count);
        lines.push(QuoteLine {
            item_type: ItemType::Package,
            name: package.name.clone(),
            name_ar: package.name_ar.clone(),
            package_id: Some(package.id.clone()),
            addon_id: None,
            quantity: 1,
            unit_price: price,
            total_price: price,
        });
    }

    for addon in addons {
        let quantity = match addon.price_type {
            PriceType::PerPerson => guest_count,
            PriceType::Fixed | PriceType::PerHour => 1,
        };
        let unit_price = addon.price();
        lines.push(QuoteLine {
            item_type: ItemType::Addon,
            name: addon.name.clone(),
            name_ar: addon.name_ar.clone(),
            package_id: None,
            addon_id: Some(addon.id.clone()),
            quantity,
            unit_price,
            total_price: unit_price.multiply_quantity(quantity),
        });
    }

    let subtotal: Money = lines.iter().map(|l| l.total_price).sum();
    let tax = subtotal.calculate_tax(TaxRate::from_bps(VAT_RATE_BPS));

    Quote {
        lines,
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PackageTier, VenueCategory};
    use chrono::Utc;

    fn venue(base_dinars: i64, per_person_dinars: i64) -> Venue {
        Venue {
            id: "venue-1".to_string(),
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
            base_price_fils: base_dinars * 1000,
            price_per_person_fils: per_person_dinars * 1000,
            rating: 4.5,
            review_count: 10,
            category: VenueCategory::Hotel,
            amenities: vec![],
            is_active: true,
            is_featured: false,
            luxury_rank: crate::LUXURY_RANK_UNRANKED,
            photos: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn package(base_dinars: Option<i64>, per_person_dinars: i64) -> Package {
        Package {
            id: "package-1".to_string(),
            name: "Gold Decoration".to_string(),
            name_ar: "ديكور ذهبي".to_string(),
            description: String::new(),
            description_ar: String::new(),
            tier: PackageTier::Gold,
            category: "DECORATION".to_string(),
            base_price_fils: base_dinars.map(|d| d * 1000),
            price_per_person_fils: per_person_dinars * 1000,
            is_active: true,
        }
    }

    fn addon(id: &str, price_fils: i64, price_type: PriceType) -> Addon {
        Addon {
            id: id.to_string(),
            name: format!("Addon {id}"),
            name_ar: String::new(),
            description: String::new(),
            description_ar: String::new(),
            category: "ENTERTAINMENT".to_string(),
            price_fils,
            price_type,
            is_active: true,
        }
    }

    #[test]
    fn test_venue_only_quote() {
        // base 1500 + 25/person × 200 = 6500; tax 650; total 7150
        let quote = estimate(&venue(1500, 25), 200, &[], &[]);

        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.lines[0].quantity, 1);
        assert_eq!(quote.lines[0].unit_price, Money::from_dinars(6500));
        assert_eq!(quote.subtotal, Money::from_dinars(6500));
        assert_eq!(quote.tax, Money::from_dinars(650));
        assert_eq!(quote.total, Money::from_dinars(7150));
    }

    #[test]
    fn test_package_with_missing_base_prices_per_person_only() {
        let quote = estimate(&venue(1000, 0), 100, &[package(None, 5)], &[]);

        let line = &quote.lines[1];
        assert_eq!(line.item_type, ItemType::Package);
        assert_eq!(line.total_price, Money::from_dinars(500));
        assert_eq!(quote.subtotal, Money::from_dinars(1500));
    }

    #[test]
    fn test_per_person_addon_scales_by_guests() {
        let drinks = addon("drinks", 1_500, PriceType::PerPerson);
        let quote = estimate(&venue(1000, 0), 200, &[], &[drinks]);

        let line = &quote.lines[1];
        assert_eq!(line.quantity, 200);
        assert_eq!(line.unit_price, Money::from_fils(1_500));
        assert_eq!(line.total_price, Money::from_dinars(300));
    }

    #[test]
    fn test_fixed_and_per_hour_addons_price_flat() {
        let photo = addon("photo", 350_000, PriceType::Fixed);
        let band = addon("band", 500_000, PriceType::PerHour);
        let quote = estimate(&venue(1000, 0), 200, &[], &[photo, band]);

        assert_eq!(quote.lines[1].quantity, 1);
        assert_eq!(quote.lines[1].total_price, Money::from_dinars(350));
        assert_eq!(quote.lines[2].quantity, 1);
        assert_eq!(quote.lines[2].total_price, Money::from_dinars(500));
    }

    #[test]
    fn test_full_selection_roll_up() {
        let quote = estimate(
            &venue(1500, 25),
            200,
            &[package(Some(400), 5)],
            &[
                addon("photo", 350_000, PriceType::Fixed),
                addon("drinks", 1_500, PriceType::PerPerson),
            ],
        );

        // 6500 + 1400 + 350 + 300 = 8550
        assert_eq!(quote.subtotal, Money::from_dinars(8550));
        assert_eq!(quote.tax, Money::from_dinars(855));
        assert_eq!(quote.total, Money::from_dinars(9405));

        // Subtotal always equals the sum of its lines
        let line_sum: Money = quote.lines.iter().map(|l| l.total_price).sum();
        assert_eq!(line_sum, quote.subtotal);
    }

    #[test]
    fn test_line_order_is_venue_then_packages_then_addons() {
        let quote = estimate(
            &venue(1000, 0),
            100,
            &[package(Some(100), 0)],
            &[addon("a", 1000, PriceType::Fixed)],
        );
        let types: Vec<ItemType> = quote.lines.iter().map(|l| l.item_type).collect();
        assert_eq!(types, vec![ItemType::Venue, ItemType::Package, ItemType::Addon]);
    }
}
