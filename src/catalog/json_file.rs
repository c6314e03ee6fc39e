use crate::catalog::traits::CatalogSource;
use crate::models::PropertyRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog read from a JSON array of listings on disk
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode a catalog, rejecting duplicate ids and zero areas
pub fn parse_catalog(json: &str) -> Result<Vec<PropertyRecord>> {
    let properties: Vec<PropertyRecord> =
        serde_json::from_str(json).context("Failed to decode listing catalog")?;

    let mut seen = HashSet::with_capacity(properties.len());
    for property in &properties {
        if !seen.insert(property.id) {
            anyhow::bail!("Duplicate listing id {} in catalog", property.id);
        }
        if property.area_sqft == 0 {
            anyhow::bail!("Listing {} has zero area", property.id);
        }
    }

    Ok(properties)
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        debug!("Reading catalog from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        let properties = parse_catalog(&json)
            .with_context(|| format!("Invalid catalog file {}", self.path.display()))?;

        info!(
            "📂 Loaded {} listings from {}",
            properties.len(),
            self.path.display()
        );
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 1, "title": "A", "price": 1, "property_type": "house", "listing_type": "sale",
             "bedrooms": 1, "bathrooms": 1, "area_sqft": 100, "location": "X", "features": []},
            {"id": 1, "title": "B", "price": 2, "property_type": "condo", "listing_type": "rent",
             "bedrooms": 1, "bathrooms": 1, "area_sqft": 100, "location": "Y", "features": []}
        ]"#;

        let err = parse_catalog(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate listing id 1"));
    }

    #[test]
    fn zero_area_is_rejected() {
        let json = r#"[
            {"id": 9, "title": "A", "price": 1, "property_type": "house", "listing_type": "sale",
             "bedrooms": 1, "bathrooms": 1, "area_sqft": 0, "location": "X", "features": []}
        ]"#;

        let err = parse_catalog(json).unwrap_err();
        assert!(err.to_string().contains("Listing 9 has zero area"));
    }

    #[test]
    fn unknown_property_type_is_rejected() {
        let json = r#"[
            {"id": 1, "title": "A", "price": 1, "property_type": "castle", "listing_type": "sale",
             "bedrooms": 1, "bathrooms": 1, "area_sqft": 100, "location": "X", "features": []}
        ]"#;
        assert!(parse_catalog(json).is_err());
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let catalog = JsonFileCatalog::new("/nonexistent/estatehub/catalog.json");
        let err = catalog.load().await.unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/estatehub/catalog.json"));
    }
}
