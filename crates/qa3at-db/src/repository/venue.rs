//! # Venue Repository
//!
//! Database operations for venues, their photo galleries, the distinct-city
//! list, and availability lookups.
//!
//! ## Loading Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list_active()                                                          │
//! │                                                                         │
//! │  1. SELECT * FROM venues WHERE is_active = 1      (one query)          │
//! │  2. SELECT * FROM venue_photos WHERE venue_id IN (active)              │
//! │  3. Group photos by venue_id in memory                                  │
//! │                                                                         │
//! │  Filtering/ranking/pagination happen in qa3at-core over this list;     │
//! │  the catalogue is a few hundred venues, not millions.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::debug;

use crate::error::{DbError, DbResult};
use qa3at_core::types::{VendorRef, Venue, VenueAvailability, VenuePhoto};

/// Repository for venue database operations.
#[derive(Debug, Clone)]
pub struct VenueRepository {
    pool: SqlitePool,
}

// =============================================================================
// Row Records
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct VenueRecord {
    id: String,
    vendor_id: String,
    name: String,
    name_ar: String,
    description: String,
    description_ar: String,
    address: String,
    address_ar: String,
    city: String,
    city_ar: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    min_capacity: i64,
    capacity: i64,
    base_price_fils: i64,
    price_per_person_fils: i64,
    rating: f64,
    review_count: i64,
    category: String,
    amenities: String,
    is_active: bool,
    is_featured: bool,
    luxury_rank: i64,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl VenueRecord {
    /// Converts a row into the domain type. Enum and JSON columns are
    /// parsed here and fail fast on corrupt data.
    fn into_domain(self, photos: Vec<VenuePhoto>) -> DbResult<Venue> {
        let category = self
            .category
            .parse()
            .map_err(|e| DbError::corrupt("venues", format!("{e}")))?;
        let amenities: Vec<String> = serde_json::from_str(&self.amenities)
            .map_err(|e| DbError::corrupt("venues", format!("amenities: {e}")))?;

        Ok(Venue {
            id: self.id,
            vendor_id: self.vendor_id,
            name: self.name,
            name_ar: self.name_ar,
            description: self.description,
            description_ar: self.description_ar,
            address: self.address,
            address_ar: self.address_ar,
            city: self.city,
            city_ar: self.city_ar,
            latitude: self.latitude,
            longitude: self.longitude,
            min_capacity: self.min_capacity,
            capacity: self.capacity,
            base_price_fils: self.base_price_fils,
            price_per_person_fils: self.price_per_person_fils,
            rating: self.rating,
            review_count: self.review_count,
            category,
            amenities,
            is_active: self.is_active,
            is_featured: self.is_featured,
            luxury_rank: self.luxury_rank,
            photos,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PhotoRecord {
    id: String,
    venue_id: String,
    url: String,
    is_primary: bool,
    sort_order: i64,
}

impl From<PhotoRecord> for VenuePhoto {
    fn from(r: PhotoRecord) -> Self {
        VenuePhoto {
            id: r.id,
            venue_id: r.venue_id,
            url: r.url,
            is_primary: r.is_primary,
            sort_order: r.sort_order,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AvailabilityRecord {
    id: String,
    venue_id: String,
    slot_id: String,
    date: String,
    is_available: bool,
}

// =============================================================================
// Repository
// =============================================================================

impl VenueRepository {
    /// Creates a new VenueRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VenueRepository { pool }
    }

    /// Loads every active venue with its photo gallery.
    ///
    /// This is the candidate set for the search pipeline.
    pub async fn list_active(&self) -> DbResult<Vec<Venue>> {
        let records = sqlx::query_as::<_, VenueRecord>(
            r#"
            SELECT
                id, vendor_id, name, name_ar, description, description_ar,
                address, address_ar, city, city_ar, latitude, longitude,
                min_capacity, capacity, base_price_fils, price_per_person_fils,
                rating, review_count, category, amenities,
                is_active, is_featured, luxury_rank, created_at, updated_at
            FROM venues
            WHERE is_active = 1
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = records.len(), "Loaded active venues");

        let mut photos_by_venue = self.load_photos_for_active().await?;

        records
            .into_iter()
            .map(|r| {
                let photos = photos_by_venue.remove(&r.id).unwrap_or_default();
                r.into_domain(photos)
            })
            .collect()
    }

    /// Photos for all active venues, grouped by venue id.
    async fn load_photos_for_active(&self) -> DbResult<HashMap<String, Vec<VenuePhoto>>> {
        let photos = sqlx::query_as::<_, PhotoRecord>(
            r#"
            SELECT p.id, p.venue_id, p.url, p.is_primary, p.sort_order
            FROM venue_photos p
            INNER JOIN venues v ON v.id = p.venue_id
            WHERE v.is_active = 1
            ORDER BY p.venue_id, p.sort_order
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<String, Vec<VenuePhoto>> = HashMap::new();
        for photo in photos {
            grouped
                .entry(photo.venue_id.clone())
                .or_default()
                .push(photo.into());
        }
        Ok(grouped)
    }

    /// Gets a single active venue with photos, plus its vendor reference.
    ///
    /// ## Returns
    /// * `Ok(Some((venue, vendor)))` - Venue found and active
    /// * `Ok(None)` - No such venue, or soft-deleted
    pub async fn get_with_vendor(&self, id: &str) -> DbResult<Option<(Venue, VendorRef)>> {
        let record = sqlx::query_as::<_, VenueRecord>(
            r#"
            SELECT
                id, vendor_id, name, name_ar, description, description_ar,
                address, address_ar, city, city_ar, latitude, longitude,
                min_capacity, capacity, base_price_fils, price_per_person_fils,
                rating, review_count, category, amenities,
                is_active, is_featured, luxury_rank, created_at, updated_at
            FROM venues
            WHERE id = ?1 AND is_active = 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        let photos = sqlx::query_as::<_, PhotoRecord>(
            r#"
            SELECT id, venue_id, url, is_primary, sort_order
            FROM venue_photos
            WHERE venue_id = ?1
            ORDER BY sort_order
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(VenuePhoto::from)
        .collect();

        let vendor = sqlx::query_as::<_, (String, String, String)>(
            "SELECT id, name, name_ar FROM vendors WHERE id = ?1",
        )
        .bind(&record.vendor_id)
        .fetch_one(&self.pool)
        .await?;

        let venue = record.into_domain(photos)?;
        Ok(Some((
            venue,
            VendorRef {
                id: vendor.0,
                name: vendor.1,
                name_ar: vendor.2,
            },
        )))
    }

    /// Distinct cities with at least one active venue, alphabetical.
    ///
    /// Backs `GET /venues/cities`; the API layer caches the result.
    pub async fn distinct_cities(&self) -> DbResult<Vec<String>> {
        let cities = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT city
            FROM venues
            WHERE is_active = 1
            ORDER BY city
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cities)
    }

    /// Availability records for a venue on a given date.
    pub async fn availability(&self, venue_id: &str, date: &str) -> DbResult<Vec<VenueAvailability>> {
        let records = sqlx::query_as::<_, AvailabilityRecord>(
            r#"
            SELECT id, venue_id, slot_id, date, is_available
            FROM venue_availability
            WHERE venue_id = ?1 AND date = ?2
            ORDER BY slot_id
            "#,
        )
        .bind(venue_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(records
            .into_iter()
            .map(|r| VenueAvailability {
                id: r.id,
                venue_id: r.venue_id,
                slot_id: r.slot_id,
                date: r.date,
                is_available: r.is_available,
            })
            .collect())
    }
}
