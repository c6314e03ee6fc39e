use crate::catalog::traits::CatalogSource;
use crate::models::{ListingType, PropertyRecord, PropertyType};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// The fixed listing set shipped with the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Build the listings synchronously
    pub fn properties(&self) -> Vec<PropertyRecord> {
        vec![
            PropertyRecord {
                id: 1,
                title: "Modern Downtown Apartment".to_string(),
                price: 750_000,
                property_type: PropertyType::Apartment,
                listing_type: ListingType::Sale,
                bedrooms: 2,
                bathrooms: 2,
                area_sqft: 1_200,
                location: "New York, NY".to_string(),
                features: features(&["Pool", "Gym", "Security"]),
                image: Some(
                    "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=400&h=300&fit=crop"
                        .to_string(),
                ),
            },
            PropertyRecord {
                id: 2,
                title: "Luxury Family Home".to_string(),
                price: 1_250_000,
                property_type: PropertyType::House,
                listing_type: ListingType::Sale,
                bedrooms: 4,
                bathrooms: 3,
                area_sqft: 2_800,
                location: "Los Angeles, CA".to_string(),
                features: features(&["Garden", "Garage", "Pool", "Fireplace"]),
                image: Some(
                    "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=400&h=300&fit=crop"
                        .to_string(),
                ),
            },
            PropertyRecord {
                id: 3,
                title: "Cozy Studio Apartment".to_string(),
                price: 2_200,
                property_type: PropertyType::Apartment,
                listing_type: ListingType::Rent,
                bedrooms: 1,
                bathrooms: 1,
                area_sqft: 650,
                location: "San Francisco, CA".to_string(),
                features: features(&["Furnished", "Pet Friendly"]),
                image: Some(
                    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=400&h=300&fit=crop"
                        .to_string(),
                ),
            },
            PropertyRecord {
                id: 4,
                title: "Spacious Townhouse".to_string(),
                price: 3_500,
                property_type: PropertyType::Townhouse,
                listing_type: ListingType::Rent,
                bedrooms: 3,
                bathrooms: 2,
                area_sqft: 1_800,
                location: "Chicago, IL".to_string(),
                features: features(&["Garage", "Garden", "Air Conditioning"]),
                image: Some(
                    "https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=400&h=300&fit=crop"
                        .to_string(),
                ),
            },
        ]
    }
}

fn features(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        let properties = self.properties();
        info!("📋 Loaded {} built-in listings", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "Built-in"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let properties = BuiltinCatalog::new().properties();
        let ids: HashSet<u64> = properties.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), properties.len());
    }

    #[tokio::test]
    async fn load_returns_catalog_order() {
        let properties = BuiltinCatalog::new().load().await.unwrap();
        let titles: Vec<&str> = properties.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Modern Downtown Apartment",
                "Luxury Family Home",
                "Cozy Studio Apartment",
                "Spacious Townhouse",
            ]
        );
    }
}
