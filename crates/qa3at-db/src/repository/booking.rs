//! # Booking Repository
//!
//! Database operations for bookings and their frozen invoice lines.
//!
//! ## Snapshot Writes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create(booking)                                                        │
//! │                                                                         │
//! │  BEGIN TRANSACTION                                                      │
//! │    INSERT INTO bookings (totals frozen from the quote)                  │
//! │    INSERT INTO booking_items × N (names and prices frozen)              │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Either the booking and all its lines land, or nothing does.           │
//! │  Catalogue edits after this point never touch these rows.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use qa3at_core::types::{Booking, BookingItem, BookingStatus};

/// Repository for booking database operations.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

// =============================================================================
// Row Records
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct BookingRecord {
    id: String,
    user_id: String,
    venue_id: String,
    slot_id: String,
    date: String,
    guest_count: i64,
    status: String,
    notes: Option<String>,
    subtotal_fils: i64,
    tax_fils: i64,
    total_fils: i64,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl BookingRecord {
    fn into_domain(self, items: Vec<BookingItem>) -> DbResult<Booking> {
        let status = self
            .status
            .parse()
            .map_err(|e| DbError::corrupt("bookings", format!("{e}")))?;

        Ok(Booking {
            id: self.id,
            user_id: self.user_id,
            venue_id: self.venue_id,
            slot_id: self.slot_id,
            date: self.date,
            guest_count: self.guest_count,
            status,
            notes: self.notes,
            subtotal_fils: self.subtotal_fils,
            tax_fils: self.tax_fils,
            total_fils: self.total_fils,
            items,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRecord {
    id: String,
    booking_id: String,
    item_type: String,
    name: String,
    name_ar: String,
    package_id: Option<String>,
    addon_id: Option<String>,
    quantity: i64,
    unit_price_fils: i64,
    total_price_fils: i64,
}

impl ItemRecord {
    fn into_domain(self) -> DbResult<BookingItem> {
        let item_type = self
            .item_type
            .parse()
            .map_err(|e| DbError::corrupt("booking_items", format!("{e}")))?;

        Ok(BookingItem {
            id: self.id,
            booking_id: self.booking_id,
            item_type,
            name: self.name,
            name_ar: self.name_ar,
            package_id: self.package_id,
            addon_id: self.addon_id,
            quantity: self.quantity,
            unit_price_fils: self.unit_price_fils,
            total_price_fils: self.total_price_fils,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

impl BookingRepository {
    /// Creates a new BookingRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookingRepository { pool }
    }

    /// Persists a booking and all its invoice lines atomically.
    ///
    /// The caller (API layer) assembles the `Booking` from a priced quote;
    /// every value written here is already frozen.
    pub async fn create(&self, booking: &Booking) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, user_id, venue_id, slot_id, date, guest_count,
                status, notes, subtotal_fils, tax_fils, total_fils,
                created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
        )
        .bind(&booking.id)
        .bind(&booking.user_id)
        .bind(&booking.venue_id)
        .bind(&booking.slot_id)
        .bind(&booking.date)
        .bind(booking.guest_count)
        .bind(booking.status.as_str())
        .bind(&booking.notes)
        .bind(booking.subtotal_fils)
        .bind(booking.tax_fils)
        .bind(booking.total_fils)
        .bind(booking.created_at.to_rfc3339())
        .bind(booking.updated_at.to_rfc3339())
        .execute(&mut *tx)
        .await?;

        for item in &booking.items {
            sqlx::query(
                r#"
                INSERT INTO booking_items (
                    id, booking_id, item_type, name, name_ar,
                    package_id, addon_id, quantity,
                    unit_price_fils, total_price_fils
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                "#,
            )
            .bind(&item.id)
            .bind(&item.booking_id)
            .bind(item.item_type.as_str())
            .bind(&item.name)
            .bind(&item.name_ar)
            .bind(&item.package_id)
            .bind(&item.addon_id)
            .bind(item.quantity)
            .bind(item.unit_price_fils)
            .bind(item.total_price_fils)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            booking_id = %booking.id,
            total_fils = booking.total_fils,
            items = booking.items.len(),
            "Booking created"
        );
        Ok(())
    }

    /// Lists a user's bookings, newest first, with their invoice lines.
    pub async fn list_for_user(&self, user_id: &str) -> DbResult<Vec<Booking>> {
        let records = sqlx::query_as::<_, BookingRecord>(
            r#"
            SELECT
                id, user_id, venue_id, slot_id, date, guest_count,
                status, notes, subtotal_fils, tax_fils, total_fils,
                created_at, updated_at
            FROM bookings
            WHERE user_id = ?1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(user_id = %user_id, count = records.len(), "Loaded bookings");

        let mut bookings = Vec::with_capacity(records.len());
        for record in records {
            let items = self.load_items(&record.id).await?;
            bookings.push(record.into_domain(items)?);
        }
        Ok(bookings)
    }

    /// Gets a booking by id with its invoice lines.
    ///
    /// ## Returns
    /// * `Ok(Some(Booking))` - Booking found
    /// * `Ok(None)` - No such booking
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Booking>> {
        let record = sqlx::query_as::<_, BookingRecord>(
            r#"
            SELECT
                id, user_id, venue_id, slot_id, date, guest_count,
                status, notes, subtotal_fils, tax_fils, total_fils,
                created_at, updated_at
            FROM bookings
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        let items = self.load_items(&record.id).await?;
        Ok(Some(record.into_domain(items)?))
    }

    /// Sets a booking's status and bumps `updated_at`.
    ///
    /// State machine enforcement (who may move where) happens in the API
    /// layer before this is called; this is a plain write.
    pub async fn set_status(&self, id: &str, status: BookingStatus) -> DbResult<()> {
        let result = sqlx::query(
            "UPDATE bookings SET status = ?1, updated_at = ?2 WHERE id = ?3",
        )
        .bind(status.as_str())
        .bind(Utc::now().to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Booking", id));
        }

        info!(booking_id = %id, status = status.as_str(), "Booking status updated");
        Ok(())
    }

    async fn load_items(&self, booking_id: &str) -> DbResult<Vec<BookingItem>> {
        let records = sqlx::query_as::<_, ItemRecord>(
            r#"
            SELECT
                id, booking_id, item_type, name, name_ar,
                package_id, addon_id, quantity,
                unit_price_fils, total_price_fils
            FROM booking_items
            WHERE booking_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(ItemRecord::into_domain).collect()
    }
}
