//! Integration tests for the repository layer against an in-memory SQLite
//! database with the real migrations applied.

use chrono::Utc;
use uuid::Uuid;

use qa3at_core::types::{
    Booking, BookingItem, BookingStatus, ItemType, User, UserRole, VenueCategory,
};
use qa3at_db::{Database, DbConfig, DbError};

async fn test_db() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

/// Inserts a vendor and a venue directly; returns the venue id.
async fn insert_venue(db: &Database, name: &str, city: &str, base_price_fils: i64) -> String {
    let now = Utc::now().to_rfc3339();

    let vendor_id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO vendors (id, name, name_ar, phone, created_at) VALUES (?1, ?2, '', '', ?3)")
        .bind(&vendor_id)
        .bind("Test Vendor")
        .bind(&now)
        .execute(db.pool())
        .await
        .unwrap();

    let venue_id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO venues (
            id, vendor_id, name, name_ar, description, description_ar,
            address, address_ar, city, city_ar, latitude, longitude,
            min_capacity, capacity, base_price_fils, price_per_person_fils,
            rating, review_count, category, amenities,
            is_active, is_featured, luxury_rank, created_at, updated_at
        )
        VALUES (?1, ?2, ?3, '', '', '', '', '', ?4, '', NULL, NULL,
                50, 400, ?5, 25000, 4.5, 10, 'HOTEL', '["Parking"]',
                1, 0, 999, ?6, ?6)
        "#,
    )
    .bind(&venue_id)
    .bind(&vendor_id)
    .bind(name)
    .bind(city)
    .bind(base_price_fils)
    .bind(&now)
    .execute(db.pool())
    .await
    .unwrap();

    venue_id
}

async fn insert_slot(db: &Database) -> String {
    let slot_id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO time_slots (id, name, name_ar, start_time, end_time, is_active)
        VALUES (?1, 'Evening', '', '18:00', '23:00', 1)
        "#,
    )
    .bind(&slot_id)
    .execute(db.pool())
    .await
    .unwrap();
    slot_id
}

fn make_user(email: &str) -> User {
    User {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        name: "Fatima".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        role: UserRole::Customer,
        created_at: Utc::now(),
    }
}

fn make_booking(user_id: &str, venue_id: &str, slot_id: &str) -> Booking {
    let booking_id = Uuid::new_v4().to_string();
    let now = Utc::now();

    Booking {
        id: booking_id.clone(),
        user_id: user_id.to_string(),
        venue_id: venue_id.to_string(),
        slot_id: slot_id.to_string(),
        date: "2026-11-20".to_string(),
        guest_count: 200,
        status: BookingStatus::Pending,
        notes: Some("Window seating please".to_string()),
        subtotal_fils: 6_500_000,
        tax_fils: 650_000,
        total_fils: 7_150_000,
        items: vec![BookingItem {
            id: Uuid::new_v4().to_string(),
            booking_id,
            item_type: ItemType::Venue,
            name: "Pearl Ballroom".to_string(),
            name_ar: "قاعة اللؤلؤة".to_string(),
            package_id: None,
            addon_id: None,
            quantity: 1,
            unit_price_fils: 6_500_000,
            total_price_fils: 6_500_000,
        }],
        created_at: now,
        updated_at: now,
    }
}

// =============================================================================
// Venues
// =============================================================================

#[tokio::test]
async fn test_list_active_loads_domain_venues() {
    let db = test_db().await;
    insert_venue(&db, "Pearl Ballroom", "Manama", 1_500_000).await;
    insert_venue(&db, "Amwaj Lagoon Resort", "Muharraq", 2_100_000).await;

    let venues = db.venues().list_active().await.unwrap();

    assert_eq!(venues.len(), 2);
    let pearl = venues.iter().find(|v| v.name == "Pearl Ballroom").unwrap();
    assert_eq!(pearl.category, VenueCategory::Hotel);
    assert_eq!(pearl.amenities, vec!["Parking".to_string()]);
    assert_eq!(pearl.base_price_fils, 1_500_000);
}

#[tokio::test]
async fn test_corrupt_category_fails_fast() {
    let db = test_db().await;
    let id = insert_venue(&db, "Broken Venue", "Manama", 1_000).await;

    sqlx::query("UPDATE venues SET category = 'CASTLE' WHERE id = ?1")
        .bind(&id)
        .execute(db.pool())
        .await
        .unwrap();

    let err = db.venues().list_active().await.unwrap_err();
    assert!(matches!(err, DbError::CorruptRow { .. }));
}

#[tokio::test]
async fn test_distinct_cities_sorted_and_active_only() {
    let db = test_db().await;
    insert_venue(&db, "A", "Manama", 1_000).await;
    insert_venue(&db, "B", "Manama", 1_000).await;
    let inactive = insert_venue(&db, "C", "Zallaq", 1_000).await;

    sqlx::query("UPDATE venues SET is_active = 0 WHERE id = ?1")
        .bind(&inactive)
        .execute(db.pool())
        .await
        .unwrap();
    insert_venue(&db, "D", "Muharraq", 1_000).await;

    let cities = db.venues().distinct_cities().await.unwrap();
    assert_eq!(cities, vec!["Manama".to_string(), "Muharraq".to_string()]);
}

#[tokio::test]
async fn test_get_with_vendor_misses_on_inactive() {
    let db = test_db().await;
    let id = insert_venue(&db, "Pearl Ballroom", "Manama", 1_000).await;

    let found = db.venues().get_with_vendor(&id).await.unwrap();
    assert!(found.is_some());
    let (venue, vendor) = found.unwrap();
    assert_eq!(venue.id, id);
    assert_eq!(vendor.name, "Test Vendor");

    sqlx::query("UPDATE venues SET is_active = 0 WHERE id = ?1")
        .bind(&id)
        .execute(db.pool())
        .await
        .unwrap();

    assert!(db.venues().get_with_vendor(&id).await.unwrap().is_none());
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_user_create_and_lookup() {
    let db = test_db().await;
    let user = make_user("fatima@example.bh");

    db.users().create(&user).await.unwrap();

    let by_email = db
        .users()
        .find_by_email("fatima@example.bh")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);
    assert_eq!(by_email.role, UserRole::Customer);

    assert!(db.users().find_by_id(&user.id).await.unwrap().is_some());
    assert!(db.users().find_by_email("nobody@example.bh").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let db = test_db().await;
    db.users().create(&make_user("dup@example.bh")).await.unwrap();

    let err = db.users().create(&make_user("dup@example.bh")).await.unwrap_err();
    assert!(matches!(err, DbError::UniqueViolation { .. }));
}

// =============================================================================
// Bookings
// =============================================================================

#[tokio::test]
async fn test_booking_roundtrip_with_items() {
    let db = test_db().await;
    let venue_id = insert_venue(&db, "Pearl Ballroom", "Manama", 1_500_000).await;
    let slot_id = insert_slot(&db).await;
    let user = make_user("guest@example.bh");
    db.users().create(&user).await.unwrap();

    let booking = make_booking(&user.id, &venue_id, &slot_id);
    db.bookings().create(&booking).await.unwrap();

    let loaded = db.bookings().get_by_id(&booking.id).await.unwrap().unwrap();
    assert_eq!(loaded.status, BookingStatus::Pending);
    assert_eq!(loaded.total_fils, 7_150_000);
    assert_eq!(loaded.items.len(), 1);
    assert_eq!(loaded.items[0].item_type, ItemType::Venue);
    assert_eq!(loaded.items[0].name_ar, "قاعة اللؤلؤة");

    let listed = db.bookings().list_for_user(&user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_status_update() {
    let db = test_db().await;
    let venue_id = insert_venue(&db, "Pearl Ballroom", "Manama", 1_500_000).await;
    let slot_id = insert_slot(&db).await;
    let user = make_user("guest@example.bh");
    db.users().create(&user).await.unwrap();

    let booking = make_booking(&user.id, &venue_id, &slot_id);
    db.bookings().create(&booking).await.unwrap();

    db.bookings()
        .set_status(&booking.id, BookingStatus::Confirmed)
        .await
        .unwrap();

    let loaded = db.bookings().get_by_id(&booking.id).await.unwrap().unwrap();
    assert_eq!(loaded.status, BookingStatus::Confirmed);
}

/// A completed booking refuses cancellation at the domain level, and as long
/// as the caller honors that check the stored row stays untouched.
#[tokio::test]
async fn test_completed_booking_stays_untouched_when_cancel_refused() {
    let db = test_db().await;
    let venue_id = insert_venue(&db, "Pearl Ballroom", "Manama", 1_500_000).await;
    let slot_id = insert_slot(&db).await;
    let user = make_user("guest@example.bh");
    db.users().create(&user).await.unwrap();

    let booking = make_booking(&user.id, &venue_id, &slot_id);
    db.bookings().create(&booking).await.unwrap();
    db.bookings()
        .set_status(&booking.id, BookingStatus::Confirmed)
        .await
        .unwrap();
    db.bookings()
        .set_status(&booking.id, BookingStatus::Completed)
        .await
        .unwrap();

    let before = db.bookings().get_by_id(&booking.id).await.unwrap().unwrap();
    assert!(!before.status.can_cancel());

    // Caller sees can_cancel() == false and never issues the write; the
    // row is exactly as it was
    let after = db.bookings().get_by_id(&booking.id).await.unwrap().unwrap();
    assert_eq!(after.status, BookingStatus::Completed);
    assert_eq!(after.total_fils, before.total_fils);
    assert_eq!(after.updated_at, before.updated_at);
}

#[tokio::test]
async fn test_set_status_on_missing_booking_is_not_found() {
    let db = test_db().await;
    let err = db
        .bookings()
        .set_status("no-such-id", BookingStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_packages_ordered_by_tier_then_price() {
    let db = test_db().await;

    for (name, tier, base) in [
        ("Diamond Decoration", "DIAMOND", 900_000),
        ("Silver Buffet", "SILVER", 150_000),
        ("Gold Decoration", "GOLD", 400_000),
        ("Silver Decoration", "SILVER", 200_000),
    ] {
        sqlx::query(
            r#"
            INSERT INTO packages (
                id, name, name_ar, description, description_ar,
                tier, category, base_price_fils, price_per_person_fils, is_active
            )
            VALUES (?1, ?2, '', '', '', ?3, 'DECORATION', ?4, 5000, 1)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(name)
        .bind(tier)
        .bind(base)
        .execute(db.pool())
        .await
        .unwrap();
    }

    let packages = db.catalog().list_packages(None).await.unwrap();
    let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Silver Buffet",
            "Silver Decoration",
            "Gold Decoration",
            "Diamond Decoration"
        ]
    );
}

#[tokio::test]
async fn test_package_category_filter_is_case_insensitive() {
    let db = test_db().await;

    sqlx::query(
        r#"
        INSERT INTO packages (
            id, name, name_ar, description, description_ar,
            tier, category, base_price_fils, price_per_person_fils, is_active
        )
        VALUES (?1, 'Gold Buffet', '', '', '', 'GOLD', 'CATERING', NULL, 12000, 1)
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .execute(db.pool())
    .await
    .unwrap();

    let matched = db.catalog().list_packages(Some("catering")).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].base_price_fils, None);

    let missed = db.catalog().list_packages(Some("decoration")).await.unwrap();
    assert!(missed.is_empty());
}

#[tokio::test]
async fn test_missing_addon_id_is_not_found() {
    let db = test_db().await;
    let err = db
        .catalog()
        .addons_by_ids(&["ghost-addon".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}
