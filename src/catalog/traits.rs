use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can supply the listing catalog.
/// The loaded catalog is treated as read-only for the rest of the run.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every listing, in catalog order
    async fn load(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
