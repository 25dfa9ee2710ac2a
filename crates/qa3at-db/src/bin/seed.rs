//! # Seed Data Generator
//!
//! Populates the database with demo Bahrain venue data for development.
//!
//! ## Usage
//! ```bash
//! # Seed into the default database
//! cargo run -p qa3at-db --bin seed
//!
//! # Specify database path
//! cargo run -p qa3at-db --bin seed -- --db ./data/qa3at.db
//! ```
//!
//! ## What Gets Seeded
//! - 1 demo vendor
//! - 12 venues across Bahrain (Manama, Muharraq, Riffa, Sitra, ...)
//!   with photos, amenities, ratings, and luxury ranks
//! - 3 time slots (Morning / Afternoon / Evening)
//! - 6 packages across tiers and categories
//! - 6 addons (fixed, per-person, and per-hour pricing)
//! - Availability rows for the next weekend
//!
//! User accounts are not seeded; register through `POST /auth/register`.

use chrono::Utc;
use std::env;
use uuid::Uuid;

use qa3at_db::{Database, DbConfig};

/// (name, name_ar, city, city_ar, category, min_cap, cap, base BD, ppp BD,
/// rating, reviews, featured, luxury_rank)
#[allow(clippy::type_complexity)]
const VENUES: &[(
    &str,
    &str,
    &str,
    &str,
    &str,
    i64,
    i64,
    i64,
    i64,
    f64,
    i64,
    bool,
    i64,
)] = &[
    ("Pearl Ballroom", "قاعة اللؤلؤة", "Manama", "المنامة", "HOTEL", 50, 400, 1500, 25, 4.5, 128, false, 999),
    ("Harbour Grand Ballroom", "قاعة المرفأ الكبرى", "Manama", "المنامة", "HOTEL", 100, 800, 3200, 35, 4.8, 342, true, 1),
    ("Seef Crown Hall", "قاعة تاج السيف", "Manama", "المنامة", "HALL", 80, 500, 900, 12, 4.1, 86, false, 999),
    ("Corniche Palace", "قصر الكورنيش", "Manama", "المنامة", "HOTEL", 150, 1000, 2800, 30, 4.6, 215, false, 2),
    ("Muharraq Heritage Hall", "قاعة تراث المحرق", "Muharraq", "المحرق", "HALL", 40, 300, 600, 8, 3.9, 54, false, 999),
    ("Amwaj Lagoon Resort", "منتجع بحيرة أمواج", "Muharraq", "المحرق", "HOTEL", 100, 600, 2100, 28, 4.4, 167, true, 3),
    ("Riffa Views Pavilion", "جناح إطلالات الرفاع", "Riffa", "الرفاع", "HALL", 60, 450, 1100, 15, 4.2, 93, false, 999),
    ("Royal Golf Clubhouse", "نادي الجولف الملكي", "Riffa", "الرفاع", "HOTEL", 80, 350, 1900, 32, 4.7, 188, false, 4),
    ("Sitra Gardens", "حدائق سترة", "Sitra", "سترة", "HALL", 30, 250, 450, 6, 3.6, 31, false, 999),
    ("Zallaq Beach Resort", "منتجع شاطئ الزلاق", "Zallaq", "الزلاق", "HOTEL", 120, 700, 2500, 30, 4.3, 142, false, 5),
    ("Hamad Town Majlis", "مجلس مدينة حمد", "Hamad Town", "مدينة حمد", "HALL", 50, 350, 700, 9, 4.0, 67, false, 999),
    ("Budaiya Farm Venue", "مزرعة البديع للمناسبات", "Budaiya", "البديع", "HALL", 0, 0, 800, 10, 4.9, 23, false, 999),
];

/// (name, name_ar, start, end)
const TIME_SLOTS: &[(&str, &str, &str, &str)] = &[
    ("Morning", "صباحي", "09:00", "13:00"),
    ("Afternoon", "عصري", "14:00", "17:00"),
    ("Evening", "مسائي", "18:00", "23:00"),
];

/// (name, name_ar, tier, category, base BD or -1 for NULL, ppp BD)
const PACKAGES: &[(&str, &str, &str, &str, i64, i64)] = &[
    ("Silver Decoration", "ديكور فضي", "SILVER", "DECORATION", 200, 2),
    ("Gold Decoration", "ديكور ذهبي", "GOLD", "DECORATION", 400, 5),
    ("Diamond Decoration", "ديكور ماسي", "DIAMOND", "DECORATION", 900, 8),
    ("Silver Buffet", "بوفيه فضي", "SILVER", "CATERING", -1, 8),
    ("Gold Buffet", "بوفيه ذهبي", "GOLD", "CATERING", -1, 12),
    ("Diamond Buffet", "بوفيه ماسي", "DIAMOND", "CATERING", 300, 18),
];

/// (name, name_ar, category, price fils, price_type)
const ADDONS: &[(&str, &str, &str, i64, &str)] = &[
    ("Wedding Photographer", "مصور أعراس", "PHOTOGRAPHY", 350_000, "FIXED"),
    ("Videography Package", "باقة تصوير فيديو", "PHOTOGRAPHY", 500_000, "FIXED"),
    ("Welcome Drinks", "مشروبات ترحيبية", "CATERING", 1_500, "PER_PERSON"),
    ("Arabic Coffee Service", "خدمة القهوة العربية", "CATERING", 1_000, "PER_PERSON"),
    ("Oud Player", "عازف عود", "ENTERTAINMENT", 150_000, "PER_HOUR"),
    ("DJ & Sound System", "دي جيه ونظام صوتي", "ENTERTAINMENT", 400_000, "FIXED"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./qa3at_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("qa3at Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./qa3at_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 qa3at Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
        .fetch_one(db.pool())
        .await?;
    if existing > 0 {
        println!("⚠ Database already has {} venues", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let now = Utc::now().to_rfc3339();

    // Vendor
    let vendor_id = Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO vendors (id, name, name_ar, phone, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&vendor_id)
    .bind("Bahrain Venues Co.")
    .bind("شركة قاعات البحرين")
    .bind("+973 1700 0000")
    .bind(&now)
    .execute(db.pool())
    .await?;

    // Time slots
    let mut slot_ids = Vec::new();
    for (name, name_ar, start, end) in TIME_SLOTS {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            r#"
            INSERT INTO time_slots (id, name, name_ar, start_time, end_time, is_active)
            VALUES (?1, ?2, ?3, ?4, ?5, 1)
            "#,
        )
        .bind(&id)
        .bind(name)
        .bind(name_ar)
        .bind(start)
        .bind(end)
        .execute(db.pool())
        .await?;
        slot_ids.push(id);
    }
    println!("✓ Seeded {} time slots", slot_ids.len());

    // Venues with photos and availability
    let mut venue_count = 0;
    for (idx, v) in VENUES.iter().enumerate() {
        let (name, name_ar, city, city_ar, category, min_cap, cap, base_bd, ppp_bd, rating, reviews, featured, rank) = *v;

        let venue_id = Uuid::new_v4().to_string();
        let amenities = serde_json::to_string(&[
            "Parking",
            "Bridal suite",
            "Prayer room",
            "Stage & lighting",
        ])?;

        sqlx::query(
            r#"
            INSERT INTO venues (
                id, vendor_id, name, name_ar, description, description_ar,
                address, address_ar, city, city_ar, latitude, longitude,
                min_capacity, capacity, base_price_fils, price_per_person_fils,
                rating, review_count, category, amenities,
                is_active, is_featured, luxury_rank, created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                    ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, 1, ?21, ?22, ?23, ?24)
            "#,
        )
        .bind(&venue_id)
        .bind(&vendor_id)
        .bind(name)
        .bind(name_ar)
        .bind(format!("{name} is an elegant wedding venue in {city}."))
        .bind(format!("{name_ar} قاعة أنيقة لحفلات الزفاف في {city_ar}."))
        .bind(format!("Building {}, Road {}, {city}", idx + 1, (idx + 1) * 10))
        .bind(format!("مبنى {}، طريق {}، {city_ar}", idx + 1, (idx + 1) * 10))
        .bind(city)
        .bind(city_ar)
        .bind(26.1 + idx as f64 * 0.01)
        .bind(50.5 + idx as f64 * 0.01)
        .bind(min_cap)
        .bind(cap)
        .bind(base_bd * 1000)
        .bind(ppp_bd * 1000)
        .bind(rating)
        .bind(reviews)
        .bind(category)
        .bind(&amenities)
        .bind(featured)
        .bind(rank)
        .bind(&now)
        .bind(&now)
        .execute(db.pool())
        .await?;

        // Three photos per venue, first one primary
        for photo_idx in 0..3 {
            sqlx::query(
                r#"
                INSERT INTO venue_photos (id, venue_id, url, is_primary, sort_order)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&venue_id)
            .bind(format!(
                "https://images.qa3at.example/venues/{}/{}.jpg",
                idx + 1,
                photo_idx + 1
            ))
            .bind(photo_idx == 0)
            .bind(photo_idx as i64)
            .execute(db.pool())
            .await?;
        }

        // Evening slot available next two Fridays
        for date in ["2026-09-04", "2026-09-11"] {
            sqlx::query(
                r#"
                INSERT INTO venue_availability (id, venue_id, slot_id, date, is_available)
                VALUES (?1, ?2, ?3, ?4, 1)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&venue_id)
            .bind(&slot_ids[2])
            .bind(date)
            .execute(db.pool())
            .await?;
        }

        venue_count += 1;
    }
    println!("✓ Seeded {} venues with photos and availability", venue_count);

    // Packages
    for (name, name_ar, tier, category, base_bd, ppp_bd) in PACKAGES {
        let base: Option<i64> = if *base_bd < 0 { None } else { Some(base_bd * 1000) };
        sqlx::query(
            r#"
            INSERT INTO packages (
                id, name, name_ar, description, description_ar,
                tier, category, base_price_fils, price_per_person_fils, is_active
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 1)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(name)
        .bind(name_ar)
        .bind(format!("{name} package for your celebration."))
        .bind(format!("باقة {name_ar} لحفلك."))
        .bind(tier)
        .bind(category)
        .bind(base)
        .bind(ppp_bd * 1000)
        .execute(db.pool())
        .await?;
    }
    println!("✓ Seeded {} packages", PACKAGES.len());

    // Addons
    for (name, name_ar, category, price_fils, price_type) in ADDONS {
        sqlx::query(
            r#"
            INSERT INTO addons (
                id, name, name_ar, description, description_ar,
                category, price_fils, price_type, is_active
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(name)
        .bind(name_ar)
        .bind(format!("{name} for your event."))
        .bind(format!("{name_ar} لمناسبتك."))
        .bind(category)
        .bind(price_fils)
        .bind(price_type)
        .execute(db.pool())
        .await?;
    }
    println!("✓ Seeded {} addons", ADDONS.len());

    // Sanity: the search pipeline should see everything we wrote
    let venues = db.venues().list_active().await?;
    let cities = db.venues().distinct_cities().await?;
    println!();
    println!("Verifying seed...");
    println!("  Active venues: {}", venues.len());
    println!("  Cities: {}", cities.join(", "));

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
