//! # Catalog Repository
//!
//! Database operations for the service catalogue: packages, addons, and
//! time slots. Everything here is read-only from the API's point of view;
//! catalogue writes happen through seeding and back-office tooling.

use sqlx::SqlitePool;

use crate::error::{DbError, DbResult};
use qa3at_core::types::{Addon, Package, TimeSlot};

/// Repository for packages, addons, and time slots.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

// =============================================================================
// Row Records
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct PackageRecord {
    id: String,
    name: String,
    name_ar: String,
    description: String,
    description_ar: String,
    tier: String,
    category: String,
    base_price_fils: Option<i64>,
    price_per_person_fils: i64,
    is_active: bool,
}

impl PackageRecord {
    fn into_domain(self) -> DbResult<Package> {
        let tier = self
            .tier
            .parse()
            .map_err(|e| DbError::corrupt("packages", format!("{e}")))?;

        Ok(Package {
            id: self.id,
            name: self.name,
            name_ar: self.name_ar,
            description: self.description,
            description_ar: self.description_ar,
            tier,
            category: self.category,
            base_price_fils: self.base_price_fils,
            price_per_person_fils: self.price_per_person_fils,
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddonRecord {
    id: String,
    name: String,
    name_ar: String,
    description: String,
    description_ar: String,
    category: String,
    price_fils: i64,
    price_type: String,
    is_active: bool,
}

impl AddonRecord {
    fn into_domain(self) -> DbResult<Addon> {
        let price_type = self
            .price_type
            .parse()
            .map_err(|e| DbError::corrupt("addons", format!("{e}")))?;

        Ok(Addon {
            id: self.id,
            name: self.name,
            name_ar: self.name_ar,
            description: self.description,
            description_ar: self.description_ar,
            category: self.category,
            price_fils: self.price_fils,
            price_type,
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TimeSlotRecord {
    id: String,
    name: String,
    name_ar: String,
    start_time: String,
    end_time: String,
    is_active: bool,
}

// =============================================================================
// Repository
// =============================================================================

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    /// Lists active packages, optionally filtered by category
    /// (case-insensitive; the stored form is uppercase).
    ///
    /// Ordered tier ascending (SILVER, GOLD, DIAMOND) then base price
    /// ascending, so the builder screen shows a natural progression.
    pub async fn list_packages(&self, category: Option<&str>) -> DbResult<Vec<Package>> {
        let category = category.map(str::to_uppercase);

        let records = sqlx::query_as::<_, PackageRecord>(
            r#"
            SELECT
                id, name, name_ar, description, description_ar,
                tier, category, base_price_fils, price_per_person_fils, is_active
            FROM packages
            WHERE is_active = 1
              AND (?1 IS NULL OR category = ?1)
            ORDER BY
                CASE tier
                    WHEN 'SILVER' THEN 0
                    WHEN 'GOLD' THEN 1
                    WHEN 'DIAMOND' THEN 2
                    ELSE 3
                END,
                COALESCE(base_price_fils, 0)
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(PackageRecord::into_domain).collect()
    }

    /// Loads specific packages by id, active only. Order follows the input
    /// ids so quote lines come out in selection order.
    pub async fn packages_by_ids(&self, ids: &[String]) -> DbResult<Vec<Package>> {
        let mut packages = Vec::with_capacity(ids.len());
        for id in ids {
            let record = sqlx::query_as::<_, PackageRecord>(
                r#"
                SELECT
                    id, name, name_ar, description, description_ar,
                    tier, category, base_price_fils, price_per_person_fils, is_active
                FROM packages
                WHERE id = ?1 AND is_active = 1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Package", id))?;

            packages.push(record.into_domain()?);
        }
        Ok(packages)
    }

    /// Lists active addons, optionally filtered by category, price ascending.
    pub async fn list_addons(&self, category: Option<&str>) -> DbResult<Vec<Addon>> {
        let category = category.map(str::to_uppercase);

        let records = sqlx::query_as::<_, AddonRecord>(
            r#"
            SELECT
                id, name, name_ar, description, description_ar,
                category, price_fils, price_type, is_active
            FROM addons
            WHERE is_active = 1
              AND (?1 IS NULL OR category = ?1)
            ORDER BY price_fils
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(AddonRecord::into_domain).collect()
    }

    /// Loads specific addons by id, active only, in input order.
    pub async fn addons_by_ids(&self, ids: &[String]) -> DbResult<Vec<Addon>> {
        let mut addons = Vec::with_capacity(ids.len());
        for id in ids {
            let record = sqlx::query_as::<_, AddonRecord>(
                r#"
                SELECT
                    id, name, name_ar, description, description_ar,
                    category, price_fils, price_type, is_active
                FROM addons
                WHERE id = ?1 AND is_active = 1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Addon", id))?;

            addons.push(record.into_domain()?);
        }
        Ok(addons)
    }

    /// Lists active time slots in start-time order.
    pub async fn list_time_slots(&self) -> DbResult<Vec<TimeSlot>> {
        let records = sqlx::query_as::<_, TimeSlotRecord>(
            r#"
            SELECT id, name, name_ar, start_time, end_time, is_active
            FROM time_slots
            WHERE is_active = 1
            ORDER BY start_time
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records
            .into_iter()
            .map(|r| TimeSlot {
                id: r.id,
                name: r.name,
                name_ar: r.name_ar,
                start_time: r.start_time,
                end_time: r.end_time,
                is_active: r.is_active,
            })
            .collect())
    }

    /// Checks a time slot exists and is active. Used before booking creation.
    pub async fn slot_exists(&self, id: &str) -> DbResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM time_slots WHERE id = ?1 AND is_active = 1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }
}
