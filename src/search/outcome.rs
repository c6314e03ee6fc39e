use crate::models::PropertyRecord;
use crate::search::criteria::FilterCriteria;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user is told after a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    NoMatches,
}

impl SearchOutcome {
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Found(count)
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(count) => write!(f, "Found {} matching properties!", count),
            SearchOutcome::NoMatches => f.write_str("No properties found matching your criteria"),
        }
    }
}

/// Snapshot of one search, written out as JSON on request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub searched_at: DateTime<Utc>,
    pub source: String,
    pub criteria: FilterCriteria,
    pub total: usize,
    pub results: Vec<PropertyRecord>,
}

impl SearchReport {
    pub fn new(source: &str, criteria: FilterCriteria, results: Vec<PropertyRecord>) -> Self {
        Self {
            searched_at: Utc::now(),
            source: source.to_string(),
            criteria,
            total: results.len(),
            results,
        }
    }

    pub fn outcome(&self) -> SearchOutcome {
        SearchOutcome::from_count(self.total)
    }
}
