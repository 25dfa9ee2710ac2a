//! # Venue Search Pipeline
//!
//! The filter → rank → paginate pipeline behind `GET /venues`.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Venue Search Pipeline                               │
//! │                                                                         │
//! │  All active venues (from qa3at-db)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_venues(filters) ── conjunctive predicates:                     │
//! │       │                    query, city, category, guest count          │
//! │       ▼                                                                 │
//! │  rank_venues(sort) ─────── comparator per sort key; default is         │
//! │       │                    featured desc → luxury rank asc →           │
//! │       │                    rating desc; id asc as final tiebreak       │
//! │       ▼                                                                 │
//! │  paginate(page, limit) ─── 1-indexed offset slicing;                   │
//! │       │                    limit clamped to [1, 50]                    │
//! │       ▼                                                                 │
//! │  Page { items, meta: { total, page, limit, totalPages } }              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! Everything here is a pure function over already-validated input. No
//! predicate raises an error: absent or empty criteria simply match all.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::{SearchFilters, SortKey, Venue};
use crate::MAX_PAGE_SIZE;

// =============================================================================
// Pagination Types
// =============================================================================

/// Pagination metadata returned alongside every search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total matching items across all pages.
    pub total: usize,
    /// 1-indexed page number (after clamping).
    pub page: u32,
    /// Page size (after clamping).
    pub limit: u32,
    /// `ceil(total / limit)`.
    pub total_pages: usize,
}

/// One page of results plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

// =============================================================================
// Venue Filter
// =============================================================================

/// Narrows a candidate set to venues matching every supplied criterion.
///
/// ## Contract
/// - Absent/empty criteria impose no constraint (match all)
/// - Free text: case-insensitive substring over name, Arabic name,
///   description, Arabic description, city, Arabic city (a hit in any
///   field matches)
/// - City: case-insensitive exact match
/// - Category: exact match (the `"all"` sentinel is resolved to `None`
///   before this function is called)
/// - Guest count: `min_capacity <= g <= capacity`; `capacity == 0` means
///   unknown and never satisfies a positive guest-count request
///
/// Inactive venues are excluded unconditionally.
pub fn filter_venues(venues: Vec<Venue>, filters: &SearchFilters) -> Vec<Venue> {
    let query = filters
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    let city = filters
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase);

    venues
        .into_iter()
        .filter(|v| v.is_active)
        .filter(|v| match &query {
            Some(q) => matches_query(v, q),
            None => true,
        })
        .filter(|v| match &city {
            Some(c) => v.city.to_lowercase() == *c,
            None => true,
        })
        .filter(|v| match filters.category {
            Some(cat) => v.category == cat,
            None => true,
        })
        .filter(|v| match filters.guest_count {
            Some(g) => g <= v.capacity && g >= v.min_capacity,
            None => true,
        })
        .collect()
}

/// Case-insensitive substring match across the bilingual text fields.
/// `needle` must already be lowercased.
fn matches_query(venue: &Venue, needle: &str) -> bool {
    venue.name.to_lowercase().contains(needle)
        || venue.name_ar.contains(needle)
        || venue.description.to_lowercase().contains(needle)
        || venue.description_ar.contains(needle)
        || venue.city.to_lowercase().contains(needle)
        || venue.city_ar.contains(needle)
}

// =============================================================================
// Venue Ranker
// =============================================================================

/// Orders venues by the requested sort key.
///
/// ## Contract
/// - `price_low` / `price_high`: base price asc/desc
/// - `rating`: rating desc
/// - `capacity`: capacity desc
/// - `name`: display name asc
/// - default: featured desc, then luxury rank asc (lower = more luxury),
///   then rating desc
///
/// Every ordering ends with an id-ascending tiebreak so results are
/// reproducible run to run regardless of input order.
pub fn rank_venues(venues: &mut [Venue], sort: SortKey) {
    venues.sort_by(|a, b| compare(a, b, sort).then_with(|| a.id.cmp(&b.id)));
}

fn compare(a: &Venue, b: &Venue, sort: SortKey) -> Ordering {
    match sort {
        SortKey::PriceLow => a.base_price_fils.cmp(&b.base_price_fils),
        SortKey::PriceHigh => b.base_price_fils.cmp(&a.base_price_fils),
        // total_cmp: ratings are finite, but a total order keeps sort stable
        // even if a NaN ever slips in from bad data
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Capacity => b.capacity.cmp(&a.capacity),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Recommended => b
            .is_featured
            .cmp(&a.is_featured)
            .then_with(|| a.luxury_rank.cmp(&b.luxury_rank))
            .then_with(|| b.rating.total_cmp(&a.rating)),
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Clamps a requested page number to `>= 1`.
#[inline]
pub fn clamp_page(page: u32) -> u32 {
    page.max(1)
}

/// Clamps a requested page size to `[1, MAX_PAGE_SIZE]`.
#[inline]
pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_PAGE_SIZE)
}

/// Slices one 1-indexed page out of a result list.
///
/// ## Contract
/// - `total_pages = ceil(total / limit)`
/// - A page beyond `total_pages` yields an empty page, not an error
/// - `page` and `limit` are clamped, never rejected
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> Page<T> {
    let page = clamp_page(page);
    let limit = clamp_limit(limit);

    let total = items.len();
    let total_pages = total.div_ceil(limit as usize);

    let start = (page as usize - 1).saturating_mul(limit as usize);
    let data: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    Page {
        data,
        meta: PageMeta {
            total,
            page,
            limit,
            total_pages,
        },
    }
}

// =============================================================================
// Pipeline Entry Point
// =============================================================================

/// Runs the full filter → rank → paginate pipeline over a candidate set.
///
/// This is what `GET /venues` calls after loading the active venues.
pub fn search_venues(
    venues: Vec<Venue>,
    filters: &SearchFilters,
    page: u32,
    limit: u32,
) -> Page<Venue> {
    let mut matched = filter_venues(venues, filters);
    rank_venues(&mut matched, filters.sort);
    paginate(matched, page, limit)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{VenueCategory, VenuePhoto};
    use crate::LUXURY_RANK_UNRANKED;
    use chrono::Utc;

    struct VenueSpec {
        id: &'static str,
        name: &'static str,
        city: &'static str,
        category: VenueCategory,
        min_capacity: i64,
        capacity: i64,
        base_price_dinars: i64,
        rating: f64,
        is_featured: bool,
        luxury_rank: i64,
    }

    fn venue(spec: VenueSpec) -> Venue {
        Venue {
            id: spec.id.to_string(),
            vendor_id: "vendor-1".to_string(),
            name: spec.name.to_string(),
            name_ar: format!("قاعة {}", spec.id),
            description: format!("{} wedding venue", spec.name),
            description_ar: String::new(),
            address: "Building 1, Road 1".to_string(),
            address_ar: String::new(),
            city: spec.city.to_string(),
            city_ar: "المنامة".to_string(),
            latitude: None,
            longitude: None,
            min_capacity: spec.min_capacity,
            capacity: spec.capacity,
            base_price_fils: spec.base_price_dinars * 1000,
            price_per_person_fils: 0,
            rating: spec.rating,
            review_count: 10,
            category: spec.category,
            amenities: vec!["Parking".to_string()],
            is_active: true,
            is_featured: spec.is_featured,
            luxury_rank: spec.luxury_rank,
            photos: vec![VenuePhoto {
                id: format!("photo-{}", spec.id),
                venue_id: spec.id.to_string(),
                url: "https://example.test/p.jpg".to_string(),
                is_primary: true,
                sort_order: 0,
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Twelve-venue fixture: four Manama hotels, the rest spread over
    /// other cities and halls.
    fn fixture() -> Vec<Venue> {
        vec![
            venue(VenueSpec { id: "v01", name: "Pearl Ballroom", city: "Manama", category: VenueCategory::Hotel, min_capacity: 50, capacity: 400, base_price_dinars: 1500, rating: 4.5, is_featured: false, luxury_rank: LUXURY_RANK_UNRANKED }),
            venue(VenueSpec { id: "v02", name: "Harbour Grand", city: "Manama", category: VenueCategory::Hotel, min_capacity: 100, capacity: 800, base_price_dinars: 3200, rating: 4.8, is_featured: true, luxury_rank: 1 }),
            venue(VenueSpec { id: "v03", name: "Seef Crown Hall", city: "Manama", category: VenueCategory::Hall, min_capacity: 80, capacity: 500, base_price_dinars: 900, rating: 4.1, is_featured: false, luxury_rank: LUXURY_RANK_UNRANKED }),
            venue(VenueSpec { id: "v04", name: "Corniche Palace", city: "Manama", category: VenueCategory::Hotel, min_capacity: 150, capacity: 1000, base_price_dinars: 2800, rating: 4.6, is_featured: false, luxury_rank: 2 }),
            venue(VenueSpec { id: "v05", name: "Muharraq Heritage Hall", city: "Muharraq", category: VenueCategory::Hall, min_capacity: 40, capacity: 300, base_price_dinars: 600, rating: 3.9, is_featured: false, luxury_rank: LUXURY_RANK_UNRANKED }),
            venue(VenueSpec { id: "v06", name: "Amwaj Lagoon Resort", city: "Muharraq", category: VenueCategory::Hotel, min_capacity: 100, capacity: 600, base_price_dinars: 2100, rating: 4.4, is_featured: true, luxury_rank: 3 }),
            venue(VenueSpec { id: "v07", name: "Riffa Views Pavilion", city: "Riffa", category: VenueCategory::Hall, min_capacity: 60, capacity: 450, base_price_dinars: 1100, rating: 4.2, is_featured: false, luxury_rank: LUXURY_RANK_UNRANKED }),
            venue(VenueSpec { id: "v08", name: "Royal Golf Clubhouse", city: "Riffa", category: VenueCategory::Hotel, min_capacity: 80, capacity: 350, base_price_dinars: 1900, rating: 4.7, is_featured: false, luxury_rank: 4 }),
            venue(VenueSpec { id: "v09", name: "Sitra Gardens", city: "Sitra", category: VenueCategory::Hall, min_capacity: 30, capacity: 250, base_price_dinars: 450, rating: 3.6, is_featured: false, luxury_rank: LUXURY_RANK_UNRANKED }),
            venue(VenueSpec { id: "v10", name: "Zallaq Beach Resort", city: "Zallaq", category: VenueCategory::Hotel, min_capacity: 120, capacity: 700, base_price_dinars: 2500, rating: 4.3, is_featured: false, luxury_rank: 5 }),
            venue(VenueSpec { id: "v11", name: "Hamad Town Majlis", city: "Hamad Town", category: VenueCategory::Hall, min_capacity: 50, capacity: 350, base_price_dinars: 700, rating: 4.0, is_featured: false, luxury_rank: LUXURY_RANK_UNRANKED }),
            // Unknown capacity: must never satisfy a guest-count filter
            venue(VenueSpec { id: "v12", name: "Budaiya Farm Venue", city: "Budaiya", category: VenueCategory::Hall, min_capacity: 0, capacity: 0, base_price_dinars: 800, rating: 4.9, is_featured: false, luxury_rank: LUXURY_RANK_UNRANKED }),
        ]
    }

    fn ids(venues: &[Venue]) -> Vec<&str> {
        venues.iter().map(|v| v.id.as_str()).collect()
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_filters_match_all_active() {
        let result = filter_venues(fixture(), &SearchFilters::default());
        assert_eq!(result.len(), 12);
    }

    #[test]
    fn test_inactive_venues_always_excluded() {
        let mut venues = fixture();
        venues[0].is_active = false;
        let result = filter_venues(venues, &SearchFilters::default());
        assert_eq!(result.len(), 11);
    }

    #[test]
    fn test_query_matches_any_text_field() {
        let filters = SearchFilters {
            query: Some("PEARL".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_venues(fixture(), &filters)), vec!["v01"]);

        // City name via the free-text path
        let filters = SearchFilters {
            query: Some("muharraq".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_venues(fixture(), &filters).len(), 2);
    }

    #[test]
    fn test_city_filter_is_case_insensitive_exact() {
        let filters = SearchFilters {
            city: Some("mAnAmA".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_venues(fixture(), &filters).len(), 4);
    }

    #[test]
    fn test_guest_count_respects_capacity_bounds() {
        // 350 guests: capacity >= 350 and min_capacity <= 350
        let filters = SearchFilters {
            guest_count: Some(350),
            ..Default::default()
        };
        let result = filter_venues(fixture(), &filters);
        assert!(result.iter().all(|v| v.capacity >= 350 && v.min_capacity <= 350));
        assert!(result.iter().any(|v| v.id == "v01"));
        // v09 (capacity 250) excluded
        assert!(!result.iter().any(|v| v.id == "v09"));
    }

    #[test]
    fn test_unknown_capacity_never_matches_guest_filter() {
        let filters = SearchFilters {
            guest_count: Some(10),
            ..Default::default()
        };
        let result = filter_venues(fixture(), &filters);
        assert!(!result.iter().any(|v| v.id == "v12"));
    }

    #[test]
    fn test_guest_below_min_capacity_excluded() {
        let filters = SearchFilters {
            guest_count: Some(60),
            ..Default::default()
        };
        let result = filter_venues(fixture(), &filters);
        // v04 requires at least 150 guests
        assert!(!result.iter().any(|v| v.id == "v04"));
    }

    #[test]
    fn test_filter_criteria_commute() {
        // city-then-category equals category-then-city
        let city_only = SearchFilters {
            city: Some("Manama".to_string()),
            ..Default::default()
        };
        let category_only = SearchFilters {
            category: Some(VenueCategory::Hotel),
            ..Default::default()
        };
        let both = SearchFilters {
            city: Some("Manama".to_string()),
            category: Some(VenueCategory::Hotel),
            ..Default::default()
        };

        let a = filter_venues(filter_venues(fixture(), &city_only), &category_only);
        let b = filter_venues(filter_venues(fixture(), &category_only), &city_only);
        let c = filter_venues(fixture(), &both);

        assert_eq!(ids(&a), ids(&b));
        assert_eq!(ids(&a), ids(&c));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filters = SearchFilters {
            city: Some("Manama".to_string()),
            category: Some(VenueCategory::Hotel),
            ..Default::default()
        };
        let once = filter_venues(fixture(), &filters);
        let twice = filter_venues(once.clone(), &filters);
        assert_eq!(ids(&once), ids(&twice));
    }

    // -------------------------------------------------------------------------
    // Ranker
    // -------------------------------------------------------------------------

    #[test]
    fn test_price_low_then_reverse_equals_price_high() {
        let mut low = filter_venues(fixture(), &SearchFilters::default());
        rank_venues(&mut low, SortKey::PriceLow);

        let mut high = filter_venues(fixture(), &SearchFilters::default());
        rank_venues(&mut high, SortKey::PriceHigh);

        // All fixture prices are distinct, so reversal must be exact
        let mut reversed = low.clone();
        reversed.reverse();
        assert_eq!(ids(&reversed), ids(&high));
    }

    #[test]
    fn test_rating_sort_descending() {
        let mut venues = fixture();
        rank_venues(&mut venues, SortKey::Rating);
        let ratings: Vec<f64> = venues.iter().map(|v| v.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(venues[0].id, "v12"); // 4.9
    }

    #[test]
    fn test_capacity_sort_descending() {
        let mut venues = fixture();
        rank_venues(&mut venues, SortKey::Capacity);
        assert_eq!(venues[0].id, "v04"); // 1000
        assert_eq!(venues.last().unwrap().id, "v12"); // 0 = unknown sorts last
    }

    #[test]
    fn test_name_sort_ascending() {
        let mut venues = fixture();
        rank_venues(&mut venues, SortKey::Name);
        let names: Vec<&str> = venues.iter().map(|v| v.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_default_sort_featured_then_luxury_then_rating() {
        let mut venues = fixture();
        rank_venues(&mut venues, SortKey::Recommended);

        // Featured first: v02 (rank 1) before v06 (rank 3)
        assert_eq!(ids(&venues)[..2], ["v02", "v06"]);
        // Then curated luxury ranks ascending
        assert_eq!(ids(&venues)[2..5], ["v04", "v08", "v10"]);
        // Then unranked by rating descending, starting with v12 (4.9)
        assert_eq!(venues[5].id, "v12");
    }

    #[test]
    fn test_ranking_is_deterministic_under_shuffled_input() {
        let mut a = fixture();
        let mut b = fixture();
        b.reverse();

        rank_venues(&mut a, SortKey::Recommended);
        rank_venues(&mut b, SortKey::Recommended);
        assert_eq!(ids(&a), ids(&b));
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    #[test]
    fn test_paginate_basic_slicing() {
        let items: Vec<i32> = (1..=12).collect();
        let page = paginate(items, 2, 5);

        assert_eq!(page.data, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.meta.total, 12);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_page_beyond_end_is_empty_not_error() {
        let items: Vec<i32> = (1..=12).collect();
        let page = paginate(items, 3, 6);

        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 12);
        assert_eq!(page.meta.total_pages, 2);
    }

    #[test]
    fn test_pages_partition_the_list() {
        let items: Vec<i32> = (1..=12).collect();
        let limit = 5;

        let total_pages = paginate(items.clone(), 1, limit).meta.total_pages;
        let mut collected = Vec::new();
        for p in 1..=total_pages as u32 {
            collected.extend(paginate(items.clone(), p, limit).data);
        }

        assert_eq!(collected, items);
        // Last page carries the remainder: 12 - 2*5 = 2 items
        assert_eq!(paginate(items, total_pages as u32, limit).data.len(), 2);
    }

    #[test]
    fn test_limit_and_page_clamping() {
        let items: Vec<i32> = (1..=200).collect();

        // Oversized limit clamps to 50
        let page = paginate(items.clone(), 1, 500);
        assert_eq!(page.data.len(), 50);
        assert_eq!(page.meta.limit, 50);

        // Page 0 clamps to 1
        let page = paginate(items.clone(), 0, 10);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.data[0], 1);

        // Limit 0 clamps up to 1, it is not a default fallback
        let page = paginate(items, 1, 0);
        assert_eq!(page.meta.limit, 1);
        assert_eq!(page.data, vec![1]);
    }

    #[test]
    fn test_limit_zero_clamps_to_one_item_page() {
        let items: Vec<i32> = (1..=12).collect();
        let page = paginate(items, 1, 0);

        assert_eq!(page.meta.limit, 1);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.total_pages, 12);
    }

    // -------------------------------------------------------------------------
    // Full Pipeline
    // -------------------------------------------------------------------------

    #[test]
    fn test_manama_hotels_in_default_order() {
        let filters = SearchFilters {
            city: Some("Manama".to_string()),
            category: Some(VenueCategory::Hotel),
            ..Default::default()
        };
        let page = search_venues(fixture(), &filters, 1, 10);

        // Exactly the Manama hotels, default order: featured (v02) first,
        // then luxury rank asc (v04 rank 2), then unranked by rating (v01)
        assert_eq!(
            page.data.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(),
            vec!["v02", "v04", "v01"]
        );
        assert_eq!(page.meta.total, 3);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_pipeline_meta_reflects_filtered_total() {
        let filters = SearchFilters {
            category: Some(VenueCategory::Hall),
            sort: SortKey::PriceLow,
            ..Default::default()
        };
        let page = search_venues(fixture(), &filters, 1, 3);

        assert_eq!(page.meta.total, 6);
        assert_eq!(page.meta.total_pages, 2);
        assert_eq!(page.data.len(), 3);
        // Cheapest hall first
        assert_eq!(page.data[0].id, "v09");
    }
}
