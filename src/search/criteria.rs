use crate::models::{ListingType, PropertyRecord, PropertyType};
use serde::{Deserialize, Serialize};

/// Exact-match constraint on an enumerated field.
///
/// `Unrecognized` keeps a selection that named no known variant; it matches
/// no record rather than being dropped or treated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExactMatch<T> {
    Is(T),
    Unrecognized(String),
}

impl<T: PartialEq> ExactMatch<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            ExactMatch::Is(expected) => expected == value,
            ExactMatch::Unrecognized(_) => false,
        }
    }
}

/// A query ready to run against a catalog.
///
/// Every `None`/empty field is neutral. All active constraints are
/// AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the record location. Empty = no constraint.
    pub location: String,
    pub property_type: Option<ExactMatch<PropertyType>>,
    pub listing_type: Option<ExactMatch<ListingType>>,
    /// Inclusive lower price bound.
    pub price_min: Option<u64>,
    /// Inclusive upper price bound.
    pub price_max: Option<u64>,
    /// At least this many bedrooms.
    pub bedrooms_min: Option<u32>,
    /// At least this many bathrooms.
    pub bathrooms_min: Option<u32>,
    /// Features every result must carry. Records may have more.
    pub features: Vec<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(ExactMatch::Is(property_type));
        self
    }

    pub fn listing_type(mut self, listing_type: ListingType) -> Self {
        self.listing_type = Some(ExactMatch::Is(listing_type));
        self
    }

    pub fn price_min(mut self, price: u64) -> Self {
        self.price_min = Some(price);
        self
    }

    pub fn price_max(mut self, price: u64) -> Self {
        self.price_max = Some(price);
        self
    }

    pub fn bedrooms_min(mut self, bedrooms: u32) -> Self {
        self.bedrooms_min = Some(bedrooms);
        self
    }

    pub fn bathrooms_min(mut self, bathrooms: u32) -> Self {
        self.bathrooms_min = Some(bathrooms);
        self
    }

    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Returns true if no constraint is active.
    pub fn is_neutral(&self) -> bool {
        self.location.is_empty()
            && self.property_type.is_none()
            && self.listing_type.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.bedrooms_min.is_none()
            && self.bathrooms_min.is_none()
            && self.features.is_empty()
    }

    /// Check a single record against every active constraint.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.matches_folded(record, &self.location.to_lowercase())
    }

    /// Same as [`matches`](Self::matches) with the location needle already lowercased,
    /// so a catalog scan folds it once.
    pub(crate) fn matches_folded(&self, record: &PropertyRecord, location_lower: &str) -> bool {
        // Location filter
        if !location_lower.is_empty() && !record.location.to_lowercase().contains(location_lower) {
            return false;
        }

        // Property type filter
        if let Some(ref wanted) = self.property_type {
            if !wanted.matches(&record.property_type) {
                return false;
            }
        }

        // Listing type filter
        if let Some(ref wanted) = self.listing_type {
            if !wanted.matches(&record.listing_type) {
                return false;
            }
        }

        // Price range
        if self.price_min.is_some_and(|min| record.price < min) {
            return false;
        }
        if self.price_max.is_some_and(|max| record.price > max) {
            return false;
        }

        // Bedrooms and bathrooms are "at least N"
        if self.bedrooms_min.is_some_and(|min| record.bedrooms < min) {
            return false;
        }
        if self.bathrooms_min.is_some_and(|min| record.bathrooms < min) {
            return false;
        }

        // Required features
        self.features.iter().all(|f| record.has_feature(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PropertyRecord {
        PropertyRecord {
            id: 1,
            title: "Harbour Condo".to_string(),
            price: 480_000,
            property_type: PropertyType::Condo,
            listing_type: ListingType::Sale,
            bedrooms: 2,
            bathrooms: 1,
            area_sqft: 900,
            location: "Seattle, WA".to_string(),
            features: vec!["Balcony".to_string(), "Gym".to_string()],
            image: None,
        }
    }

    #[test]
    fn neutral_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_neutral());
        assert!(criteria.matches(&record()));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let r = record();
        assert!(FilterCriteria::new().price_min(480_000).matches(&r));
        assert!(FilterCriteria::new().price_max(480_000).matches(&r));
        assert!(!FilterCriteria::new().price_min(480_001).matches(&r));
        assert!(!FilterCriteria::new().price_max(479_999).matches(&r));
    }

    #[test]
    fn room_thresholds_are_at_least() {
        let r = record();
        assert!(FilterCriteria::new().bedrooms_min(1).matches(&r));
        assert!(FilterCriteria::new().bedrooms_min(2).matches(&r));
        assert!(!FilterCriteria::new().bedrooms_min(3).matches(&r));
        assert!(FilterCriteria::new().bathrooms_min(0).matches(&r));
        assert!(!FilterCriteria::new().bathrooms_min(2).matches(&r));
    }

    #[test]
    fn features_use_inclusion_not_equality() {
        let r = record();
        assert!(FilterCriteria::new().feature("Gym").matches(&r));
        assert!(FilterCriteria::new().feature("Gym").feature("Balcony").matches(&r));
        assert!(!FilterCriteria::new().feature("Gym").feature("Pool").matches(&r));
        // Feature names compare exactly
        assert!(!FilterCriteria::new().feature("gym").matches(&r));
    }

    #[test]
    fn unrecognized_type_matches_nothing() {
        let criteria = FilterCriteria {
            property_type: Some(ExactMatch::Unrecognized("castle".to_string())),
            ..Default::default()
        };
        assert!(!criteria.is_neutral());
        assert!(!criteria.matches(&record()));
    }

    #[test]
    fn location_is_case_insensitive_substring() {
        let r = record();
        assert!(FilterCriteria::new().location("seattle").matches(&r));
        assert!(FilterCriteria::new().location("TTLE, w").matches(&r));
        assert!(!FilterCriteria::new().location("portland").matches(&r));
    }

    #[test]
    fn exact_match_serializes_as_plain_string() {
        let criteria = FilterCriteria::new().listing_type(ListingType::Rent);
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["listing_type"], "rent");
        assert_eq!(json["property_type"], serde_json::Value::Null);
    }
}
