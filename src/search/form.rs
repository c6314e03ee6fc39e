use crate::search::criteria::{ExactMatch, FilterCriteria};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};

/// Selection value meaning "no constraint" for type and room fields.
pub const ANY: &str = "any";

/// Shown to the user after the form is cleared.
pub const RESET_NOTICE: &str = "Search filters have been reset";

/// Editable fields of the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Location,
    PropertyType,
    ListingType,
    PriceMin,
    PriceMax,
    Bedrooms,
    Bathrooms,
}

/// Search form state as the user types it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    /// City, state, or ZIP fragment
    pub location: String,
    /// `"any"` or a property type name
    pub property_type: String,
    /// `"any"` or a listing type name
    pub listing_type: String,
    /// Minimum price, free text
    pub price_min: String,
    /// Maximum price, free text
    pub price_max: String,
    /// `"any"` or a minimum bedroom count
    pub bedrooms: String,
    /// `"any"` or a minimum bathroom count
    pub bathrooms: String,
    /// Selected features in the order they were picked
    pub features: Vec<String>,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            location: String::new(),
            property_type: ANY.to_string(),
            listing_type: ANY.to_string(),
            price_min: String::new(),
            price_max: String::new(),
            bedrooms: ANY.to_string(),
            bathrooms: ANY.to_string(),
            features: Vec::new(),
        }
    }
}

impl SearchForm {
    /// Replace the text of one field
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            FormField::Location => &mut self.location,
            FormField::PropertyType => &mut self.property_type,
            FormField::ListingType => &mut self.listing_type,
            FormField::PriceMin => &mut self.price_min,
            FormField::PriceMax => &mut self.price_max,
            FormField::Bedrooms => &mut self.bedrooms,
            FormField::Bathrooms => &mut self.bathrooms,
        };
        *slot = value;
    }

    /// Select a feature, or deselect it if it is already selected
    pub fn toggle_feature(&mut self, feature: &str) {
        if let Some(pos) = self.features.iter().position(|f| f == feature) {
            self.features.remove(pos);
        } else {
            self.features.push(feature.to_string());
        }
    }

    /// Clear every field back to its neutral value
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("{}", RESET_NOTICE);
    }

    /// Convert the form into executable criteria.
    ///
    /// Unparseable thresholds become unset. Type selections that name no
    /// known variant are kept and match nothing.
    pub fn criteria(&self) -> FilterCriteria {
        let criteria = FilterCriteria {
            location: self.location.clone(),
            property_type: parse_selection(&self.property_type),
            listing_type: parse_selection(&self.listing_type),
            price_min: parse_threshold(&self.price_min),
            price_max: parse_threshold(&self.price_max),
            bedrooms_min: parse_threshold(&self.bedrooms),
            bathrooms_min: parse_threshold(&self.bathrooms),
            features: self.features.clone(),
        };

        debug!(?criteria, "Built criteria from search form");
        criteria
    }
}

fn parse_selection<T: FromStr>(value: &str) -> Option<ExactMatch<T>> {
    let value = value.trim();
    if value.is_empty() || value == ANY {
        return None;
    }

    match value.parse::<T>() {
        Ok(parsed) => Some(ExactMatch::Is(parsed)),
        Err(_) => {
            debug!(selection = value, "Selection names no known variant");
            Some(ExactMatch::Unrecognized(value.to_string()))
        }
    }
}

/// Unsigned integer a threshold can be read into
pub trait Threshold: TryFrom<u128> {
    const MAX: Self;
}

impl Threshold for u32 {
    const MAX: Self = u32::MAX;
}

impl Threshold for u64 {
    const MAX: Self = u64::MAX;
}

/// Read a non-negative threshold from user text.
///
/// Takes the leading run of digits after trimming, so `"3+"` reads as 3.
/// Anything without leading digits (empty, words, `"any"`, negative numbers)
/// is unset. Numbers too large for the target type saturate at its maximum.
pub fn parse_threshold<T: Threshold>(text: &str) -> Option<T> {
    let text = text.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());

    if end == 0 {
        return None;
    }

    // Only digits remain, so the sole parse failure is overflow
    let value = text[..end].parse::<u128>().unwrap_or(u128::MAX);
    Some(T::try_from(value).unwrap_or(T::MAX))
}
