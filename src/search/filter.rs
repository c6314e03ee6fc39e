use crate::models::PropertyRecord;
use crate::search::criteria::FilterCriteria;
use tracing::debug;

/// Narrow a catalog to the records matching every active criterion.
///
/// Catalog order is preserved. Neutral criteria return the whole catalog.
pub fn filter(catalog: &[PropertyRecord], criteria: &FilterCriteria) -> Vec<PropertyRecord> {
    if criteria.is_neutral() {
        return catalog.to_vec();
    }

    let location_lower = criteria.location.to_lowercase();

    let results: Vec<PropertyRecord> = catalog
        .iter()
        .filter(|record| criteria.matches_folded(record, &location_lower))
        .cloned()
        .collect();

    debug!(
        catalog = catalog.len(),
        matched = results.len(),
        "Filtered catalog"
    );

    results
}
