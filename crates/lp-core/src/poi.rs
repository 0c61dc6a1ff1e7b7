//! Points of interest a traveler might visit during a layover.

use serde::{Deserialize, Serialize};

use crate::category::PoiCategory;
use crate::types::PoiId;

/// Minimum rating for a POI to be recommended.
const RECOMMENDED_MIN_RATING: f32 = 4.0;

/// Minimum rating count for a POI to be recommended.
const RECOMMENDED_MIN_RATINGS: u32 = 50;

/// A place a traveler might visit during a layover.
///
/// Shared read-only between itinerary items; items reference a POI by
/// identity and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Poi {
    /// Unique identifier.
    pub id: PoiId,

    /// Display name.
    pub name: String,

    /// Street address, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,

    /// Category driving default durations and descriptions.
    pub category: PoiCategory,

    /// Average rating (1.0 to 5.0), when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    /// Number of ratings behind the average.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,

    /// Price level 0 to 4, where 0 is free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,

    /// Estimated visit duration in minutes.
    ///
    /// Defaults to the category table value when not supplied.
    #[serde(default)]
    pub estimated_visit_minutes: Option<f64>,
}

impl Poi {
    /// Visit duration in minutes, falling back to the category default.
    #[must_use]
    pub fn visit_minutes(&self) -> f64 {
        self.estimated_visit_minutes
            .unwrap_or_else(|| self.category.default_visit_minutes())
    }

    /// Whether this POI should be surfaced as a recommendation.
    ///
    /// Requires a good rating backed by enough reviews, in a popular
    /// category.
    #[must_use]
    pub fn is_recommended(&self) -> bool {
        let good_rating = self.rating.unwrap_or(0.0) >= RECOMMENDED_MIN_RATING;
        let enough_reviews = self.user_ratings_total.unwrap_or(0) >= RECOMMENDED_MIN_RATINGS;
        good_rating && enough_reviews && self.category.is_popular()
    }

    /// Derived tags for filtering and display.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = vec![self.category.as_str()];

        if self.rating.unwrap_or(0.0) >= 4.5 {
            tags.push("highly_rated");
        }
        match self.price_level {
            Some(0) => tags.push("free"),
            Some(1) => tags.push("budget"),
            Some(3 | 4) => tags.push("luxury"),
            _ => {}
        }
        if self.visit_minutes() <= 60.0 {
            tags.push("quick_visit");
        }
        if self.visit_minutes() >= 120.0 {
            tags.push("half_day");
        }

        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(category: PoiCategory) -> Poi {
        Poi {
            id: PoiId::new("poi-1").unwrap(),
            name: "Test Place".to_string(),
            address: None,
            latitude: 48.86,
            longitude: 2.35,
            category,
            rating: None,
            user_ratings_total: None,
            price_level: None,
            estimated_visit_minutes: None,
        }
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "table values are exact")]
    fn visit_minutes_defaults_from_category() {
        assert_eq!(poi(PoiCategory::Museum).visit_minutes(), 120.0);

        let mut custom = poi(PoiCategory::Museum);
        custom.estimated_visit_minutes = Some(75.0);
        assert_eq!(custom.visit_minutes(), 75.0);
    }

    #[test]
    fn recommendation_requires_rating_reviews_and_category() {
        let mut p = poi(PoiCategory::Museum);
        assert!(!p.is_recommended());

        p.rating = Some(4.2);
        p.user_ratings_total = Some(120);
        assert!(p.is_recommended());

        // Unpopular category never recommends.
        let mut q = poi(PoiCategory::Romantic);
        q.rating = Some(4.8);
        q.user_ratings_total = Some(500);
        assert!(!q.is_recommended());

        // Too few reviews.
        p.user_ratings_total = Some(10);
        assert!(!p.is_recommended());
    }

    #[test]
    fn tags_reflect_rating_price_and_duration() {
        let mut p = poi(PoiCategory::Museum);
        p.rating = Some(4.7);
        p.price_level = Some(0);

        let tags = p.tags();
        assert!(tags.contains(&"museum"));
        assert!(tags.contains(&"highly_rated"));
        assert!(tags.contains(&"free"));
        assert!(tags.contains(&"half_day"));
        assert!(!tags.contains(&"quick_visit"));
    }

    #[test]
    fn poi_serde_roundtrip() {
        let p = poi(PoiCategory::Park);
        let json = serde_json::to_string(&p).unwrap();
        let parsed: Poi = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }
}
