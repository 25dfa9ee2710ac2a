//! # Planning Assistant
//!
//! A rule-based chat assistant for the booking flow. No ML, no external
//! calls: keyword triggers, three venue picks, and canned bilingual replies.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /assistant/chat { message, context? }                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  should_recommend(message, context, cities)?                            │
//! │       │ yes                              │ no                           │
//! │       ▼                                  ▼                              │
//! │  >= 3 active venues?              canned_reply(message)                 │
//! │       │ yes          │ no         (greeting / price / date / fallback)  │
//! │       ▼              ▼                                                  │
//! │  pick 3 tiers    canned fallback                                        │
//! │  BUDGET   = cheapest                                                    │
//! │  BALANCED = median by price                                             │
//! │  LUXURY   = top rated                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Estimate Formula
//! Each pick carries a rough all-in figure:
//! `(base + per_person × guests + package allowance) × 1.15`, all in integer
//! fils. The allowance stands in for a mid-tier package the user has not
//! chosen yet; the 15% covers tax plus headroom.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Lang, TaxRate, Venue};

/// Guest count assumed when the client supplies none.
pub const DEFAULT_GUEST_COUNT: i64 = 200;

/// Flat package allowance folded into assistant estimates, in fils (BD 15,000).
pub const PACKAGE_ALLOWANCE_FILS: i64 = 15_000_000;

/// Markup applied on top of the raw figure, in basis points (15%).
pub const ESTIMATE_MARKUP_BPS: u32 = 1500;

/// Minimum catalogue size before the assistant will recommend.
const MIN_VENUES_FOR_RECOMMENDATION: usize = 3;

// =============================================================================
// Request / Reply Types
// =============================================================================

/// Optional structured context the client sends alongside the free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    pub guest_count: Option<i64>,
    pub city: Option<String>,
}

/// Quality tier label on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationTier {
    Budget,
    Balanced,
    Luxury,
}

/// One recommended venue with a rough all-in estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub tier: RecommendationTier,
    pub venue_id: String,
    pub venue_name: String,
    pub venue_name_ar: String,
    pub city: String,
    pub rating: f64,
    /// Rough all-in figure in fils for the assumed party size.
    pub estimated_total: Money,
    pub reason: String,
    pub reason_ar: String,
}

/// What the assistant sends back: a message, and picks when triggered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub message: String,
    pub recommendations: Vec<Recommendation>,
}

// =============================================================================
// Trigger
// =============================================================================

/// Decides whether a message asks for venue recommendations.
///
/// Triggers on intent keywords, a round guest-count token, any known city
/// name appearing in the text, or an explicit guest count in the context.
pub fn should_recommend(message: &str, context: &ChatContext, cities: &[String]) -> bool {
    if context.guest_count.is_some() {
        return true;
    }

    let lower = message.to_lowercase();
    let keyword_hit = ["recommend", "suggest", "budget", "venue for", "200"]
        .iter()
        .any(|k| lower.contains(k));
    if keyword_hit {
        return true;
    }

    cities.iter().any(|c| lower.contains(&c.to_lowercase()))
}

// =============================================================================
// Recommendation
// =============================================================================

/// Picks three venues across price tiers, or none when the catalogue is
/// too small to offer a meaningful spread.
///
/// The input should already be narrowed (active venues, optionally by city).
/// Returns an empty vec below [`MIN_VENUES_FOR_RECOMMENDATION`] venues.
pub fn recommend(venues: &[Venue], context: &ChatContext) -> Vec<Recommendation> {
    let mut candidates: Vec<&Venue> = venues.iter().filter(|v| v.is_active).collect();
    if candidates.len() < MIN_VENUES_FOR_RECOMMENDATION {
        return Vec::new();
    }

    let guest_count = context.guest_count.unwrap_or(DEFAULT_GUEST_COUNT);

    // Price order with id tiebreak, so the median pick is reproducible
    candidates.sort_by(|a, b| {
        a.base_price_fils
            .cmp(&b.base_price_fils)
            .then_with(|| a.id.cmp(&b.id))
    });

    let budget = candidates[0];
    let balanced = candidates[candidates.len() / 2];
    let luxury = candidates
        .iter()
        .max_by(|a, b| {
            a.rating
                .total_cmp(&b.rating)
                .then_with(|| b.id.cmp(&a.id))
        })
        .copied()
        .unwrap_or(candidates[candidates.len() - 1]);

    vec![
        build_recommendation(budget, RecommendationTier::Budget, guest_count),
        build_recommendation(balanced, RecommendationTier::Balanced, guest_count),
        build_recommendation(luxury, RecommendationTier::Luxury, guest_count),
    ]
}

fn build_recommendation(venue: &Venue, tier: RecommendationTier, guest_count: i64) -> Recommendation {
    let (reason, reason_ar) = match tier {
        RecommendationTier::Budget => (
            "Best value for your guest count",
            "أفضل قيمة لعدد ضيوفك",
        ),
        RecommendationTier::Balanced => (
            "Great balance of price and quality",
            "توازن رائع بين السعر والجودة",
        ),
        RecommendationTier::Luxury => (
            "Top rated venue for an unforgettable celebration",
            "القاعة الأعلى تقييماً لحفل لا يُنسى",
        ),
    };

    Recommendation {
        tier,
        venue_id: venue.id.clone(),
        venue_name: venue.name.clone(),
        venue_name_ar: venue.name_ar.clone(),
        city: venue.city.clone(),
        rating: venue.rating,
        estimated_total: estimate_total(venue, guest_count),
        reason: reason.to_string(),
        reason_ar: reason_ar.to_string(),
    }
}

/// Rough all-in figure: rental + package allowance, marked up 15%.
/// Integer fils throughout, half-up on the markup.
pub fn estimate_total(venue: &Venue, guest_count: i64) -> Money {
    let raw = venue.rental_price(guest_count) + Money::from_fils(PACKAGE_ALLOWANCE_FILS);
    raw + raw.calculate_tax(TaxRate::from_bps(ESTIMATE_MARKUP_BPS))
}

// =============================================================================
// Canned Replies
// =============================================================================

/// Fixed reply for messages that don't trigger a recommendation.
pub fn canned_reply(message: &str, lang: Lang) -> String {
    let lower = message.to_lowercase();

    let reply = if lower.contains("hello") || lower.contains("hi") || lower.contains("مرحبا") {
        match lang {
            Lang::En => "Hello! I can help you find the perfect wedding venue. Tell me your city, guest count, or budget.",
            Lang::Ar => "مرحباً! يمكنني مساعدتك في إيجاد قاعة الأفراح المثالية. أخبرني بالمدينة أو عدد الضيوف أو الميزانية.",
        }
    } else if lower.contains("price") || lower.contains("cost") || lower.contains("سعر") {
        match lang {
            Lang::En => "Venue prices vary by size and season. Share your guest count and I can suggest options with estimates.",
            Lang::Ar => "تختلف أسعار القاعات حسب الحجم والموسم. شاركني عدد الضيوف وسأقترح خيارات مع تقديرات.",
        }
    } else if lower.contains("date") || lower.contains("available") || lower.contains("موعد") {
        match lang {
            Lang::En => "You can check availability on each venue's page. Pick a venue and a date to see open time slots.",
            Lang::Ar => "يمكنك التحقق من التوفر في صفحة كل قاعة. اختر قاعة وتاريخاً لعرض الفترات المتاحة.",
        }
    } else {
        match lang {
            Lang::En => "I can recommend venues if you tell me your city, guest count, or budget.",
            Lang::Ar => "يمكنني اقتراح قاعات إذا أخبرتني بالمدينة أو عدد الضيوف أو الميزانية.",
        }
    };

    reply.to_string()
}

/// The lead-in message placed above a set of recommendations.
pub fn recommendation_message(guest_count: i64, lang: Lang) -> String {
    match lang {
        Lang::En => format!(
            "Here are three venues for around {guest_count} guests, across budgets:"
        ),
        Lang::Ar => format!("إليك ثلاث قاعات لحوالي {guest_count} ضيف بمختلف الميزانيات:"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{VenueCategory, VenuePhoto};
    use chrono::Utc;

    fn venue(id: &str, base_dinars: i64, rating: f64) -> Venue {
        Venue {
            id: id.to_string(),
            vendor_id: "vendor-1".to_string(),
            name: format!("Venue {id}"),
            name_ar: format!("قاعة {id}"),
            description: String::new(),
            description_ar: String::new(),
            address: String::new(),
            address_ar: String::new(),
            city: "Manama".to_string(),
            city_ar: "المنامة".to_string(),
            latitude: None,
            longitude: None,
            min_capacity: 50,
            capacity: 500,
            base_price_fils: base_dinars * 1000,
            price_per_person_fils: 10_000,
            rating,
            review_count: 5,
            category: VenueCategory::Hall,
            amenities: vec![],
            is_active: true,
            is_featured: false,
            luxury_rank: crate::LUXURY_RANK_UNRANKED,
            photos: Vec::<VenuePhoto>::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn cities() -> Vec<String> {
        vec!["Manama".to_string(), "Muharraq".to_string(), "Riffa".to_string()]
    }

    #[test]
    fn test_trigger_on_keywords() {
        let ctx = ChatContext::default();
        assert!(should_recommend("Can you recommend a hall?", &ctx, &cities()));
        assert!(should_recommend("suggest something nice", &ctx, &cities()));
        assert!(should_recommend("we have a small BUDGET", &ctx, &cities()));
        assert!(should_recommend("around 200 people", &ctx, &cities()));
        assert!(!should_recommend("how do I pay?", &ctx, &cities()));
    }

    #[test]
    fn test_trigger_on_city_name() {
        let ctx = ChatContext::default();
        assert!(should_recommend("something in muharraq please", &ctx, &cities()));
    }

    #[test]
    fn test_trigger_on_context_guest_count() {
        let ctx = ChatContext {
            guest_count: Some(150),
            ..Default::default()
        };
        assert!(should_recommend("how do I pay?", &ctx, &cities()));
    }

    #[test]
    fn test_no_recommendation_below_three_venues() {
        let venues = vec![venue("a", 1000, 4.0), venue("b", 2000, 4.5)];
        let picks = recommend(&venues, &ChatContext::default());
        assert!(picks.is_empty());
    }

    #[test]
    fn test_inactive_venues_do_not_count_toward_guard() {
        let mut venues = vec![
            venue("a", 1000, 4.0),
            venue("b", 2000, 4.5),
            venue("c", 3000, 4.2),
        ];
        venues[2].is_active = false;
        assert!(recommend(&venues, &ChatContext::default()).is_empty());
    }

    #[test]
    fn test_tier_selection() {
        let venues = vec![
            venue("a", 3000, 4.2),
            venue("b", 500, 3.8),
            venue("c", 1500, 4.9),
            venue("d", 2200, 4.0),
            venue("e", 900, 4.1),
        ];
        let picks = recommend(&venues, &ChatContext::default());

        assert_eq!(picks.len(), 3);
        // Budget = cheapest (b at 500)
        assert_eq!(picks[0].tier, RecommendationTier::Budget);
        assert_eq!(picks[0].venue_id, "b");
        // Balanced = median by price (e, c, d sorted: b e c d a → index 2 = c)
        assert_eq!(picks[1].tier, RecommendationTier::Balanced);
        assert_eq!(picks[1].venue_id, "c");
        // Luxury = highest rated (c at 4.9)
        assert_eq!(picks[2].tier, RecommendationTier::Luxury);
        assert_eq!(picks[2].venue_id, "c");
    }

    #[test]
    fn test_estimate_formula() {
        // base 2000 + 10/person × 200 = 4000; + 15000 allowance = 19000;
        // × 1.15 = 21850
        let v = venue("a", 2000, 4.0);
        assert_eq!(estimate_total(&v, 200), Money::from_dinars(21_850));
    }

    #[test]
    fn test_default_guest_count_used_without_context() {
        let venues = vec![
            venue("a", 1000, 4.0),
            venue("b", 2000, 4.5),
            venue("c", 3000, 4.2),
        ];
        let picks = recommend(&venues, &ChatContext::default());
        let budget = &picks[0];

        // venue a: 1000 + 10×200 = 3000; + 15000 = 18000; ×1.15 = 20700
        assert_eq!(budget.estimated_total, Money::from_dinars(20_700));
    }

    #[test]
    fn test_canned_replies() {
        assert!(canned_reply("hello there", Lang::En).contains("wedding venue"));
        assert!(canned_reply("what's the price?", Lang::En).contains("guest count"));
        assert!(canned_reply("is that date available?", Lang::En).contains("availability"));
        assert!(canned_reply("xyzzy", Lang::En).contains("recommend"));
        assert!(canned_reply("مرحبا", Lang::Ar).contains("مرحباً"));
    }
}
