//! POI category enum as the single source of truth for category strings,
//! default visit durations, and stock descriptions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of point-of-interest categories.
///
/// Every lookup keyed by category (visit duration, description) is an
/// exhaustive match, so adding a variant forces the tables to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoiCategory {
    Museum,
    Park,
    Restaurant,
    Shopping,
    Historical,
    Entertainment,
    Cultural,
    Outdoor,
    Indoor,
    Family,
    Romantic,
    Budget,
    Luxury,
    QuickVisit,
    HalfDay,
    FullDay,
}

impl PoiCategory {
    /// All variants, in display order.
    pub const ALL: [Self; 16] = [
        Self::Museum,
        Self::Park,
        Self::Restaurant,
        Self::Shopping,
        Self::Historical,
        Self::Entertainment,
        Self::Cultural,
        Self::Outdoor,
        Self::Indoor,
        Self::Family,
        Self::Romantic,
        Self::Budget,
        Self::Luxury,
        Self::QuickVisit,
        Self::HalfDay,
        Self::FullDay,
    ];

    /// Fallback category for unmapped place types and unknown strings.
    pub const FALLBACK: Self = Self::Cultural;

    /// Default visit duration in minutes.
    #[must_use]
    pub const fn default_visit_minutes(&self) -> f64 {
        match self {
            Self::Museum | Self::Entertainment | Self::Luxury => 120.0,
            Self::Park | Self::Historical | Self::Outdoor | Self::Indoor | Self::Romantic
            | Self::Budget => 60.0,
            Self::Restaurant => 45.0,
            Self::Shopping | Self::Cultural | Self::Family => 90.0,
            Self::QuickVisit => 30.0,
            Self::HalfDay => 240.0,
            Self::FullDay => 480.0,
        }
    }

    /// Stock one-line description for presentation.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Museum => "Explore fascinating exhibits and learn about history, art, and culture.",
            Self::Park => "Enjoy the outdoors with beautiful scenery and recreational activities.",
            Self::Restaurant => "Savor delicious local cuisine and authentic flavors.",
            Self::Shopping => "Discover unique shops and find perfect souvenirs.",
            Self::Historical => "Step back in time and explore historical landmarks.",
            Self::Entertainment => "Have fun with exciting entertainment options.",
            Self::Cultural => "Immerse yourself in local culture and traditions.",
            Self::Outdoor => "Experience nature and outdoor adventures.",
            Self::Indoor => "Stay comfortable with indoor activities.",
            Self::Family => "Perfect for family-friendly activities and fun.",
            Self::Romantic => "Ideal for romantic outings and special moments.",
            Self::Budget => "Great value for money with affordable options.",
            Self::Luxury => "Premium experiences and high-end offerings.",
            Self::QuickVisit => "Perfect for a short, efficient visit.",
            Self::HalfDay => "Ideal for spending several hours exploring.",
            Self::FullDay => "Worth dedicating a full day to explore thoroughly.",
        }
    }

    /// Whether the category is popular enough to back a recommendation.
    #[must_use]
    pub const fn is_popular(&self) -> bool {
        matches!(
            self,
            Self::Museum | Self::Park | Self::Restaurant | Self::Historical
        )
    }

    /// String representation for display and serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Museum => "museum",
            Self::Park => "park",
            Self::Restaurant => "restaurant",
            Self::Shopping => "shopping",
            Self::Historical => "historical",
            Self::Entertainment => "entertainment",
            Self::Cultural => "cultural",
            Self::Outdoor => "outdoor",
            Self::Indoor => "indoor",
            Self::Family => "family",
            Self::Romantic => "romantic",
            Self::Budget => "budget",
            Self::Luxury => "luxury",
            Self::QuickVisit => "quick_visit",
            Self::HalfDay => "half_day",
            Self::FullDay => "full_day",
        }
    }

    /// Parse a category name, falling back to [`Self::FALLBACK`] for anything
    /// unrecognized. Category input comes from external place data, so an
    /// unknown string degrades to the generic category instead of failing.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .unwrap_or(Self::FALLBACK)
    }

    /// Map place-type tags (Google Places style) onto a category.
    ///
    /// First match wins; unmapped type lists fall back to [`Self::FALLBACK`].
    #[must_use]
    pub fn from_place_types<S: AsRef<str>>(types: &[S]) -> Self {
        let has = |t: &str| types.iter().any(|s| s.as_ref() == t);

        if has("museum") {
            Self::Museum
        } else if has("park") {
            Self::Park
        } else if has("restaurant") || has("food") {
            Self::Restaurant
        } else if has("shopping_mall") || has("store") {
            Self::Shopping
        } else if has("tourist_attraction") || has("historical") {
            Self::Historical
        } else if has("amusement_park") || has("movie_theater") {
            Self::Entertainment
        } else if has("art_gallery") || has("library") {
            Self::Cultural
        } else if has("natural_feature") || has("campground") {
            Self::Outdoor
        } else if has("indoor") {
            Self::Indoor
        } else {
            Self::FALLBACK
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PoiCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PoiCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Lenient on deserialization: external data may carry categories we
        // don't model.
        Ok(Self::parse_lenient(&s))
    }
}
