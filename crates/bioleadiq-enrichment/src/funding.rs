//! Funding reference table and merge.
//!
//! Matching is exact and case-sensitive on the trimmed company name. A miss is
//! the normal path and yields `"Unknown"` / no year.

use std::collections::HashMap;
use std::path::Path;

use bioleadiq_common::{EnrichedProfile, FundingAttributes, FundingRecord, LeadError, Result};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct FundingLookup {
    records: HashMap<String, FundingRecord>,
}

impl FundingLookup {
    /// Build the table from dataset order; a later duplicate company replaces an earlier one.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = FundingRecord>,
    {
        let records = records
            .into_iter()
            .map(|r| (r.company.trim().to_string(), r))
            .collect();
        Self { records }
    }

    /// Parse a JSON array of funding records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<FundingRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load the funding dataset from disk. Missing or malformed files are fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let source = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| LeadError::input(&source, e))?;
        let lookup = Self::from_json_str(&content).map_err(|e| LeadError::input(&source, e))?;
        info!(companies = lookup.len(), path = %source, "Funding dataset loaded");
        Ok(lookup)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find(&self, company: &str) -> Option<&FundingRecord> {
        self.records.get(company.trim())
    }

    /// Funding attributes for a company, or the unmatched defaults.
    pub fn lookup(&self, company: &str) -> FundingAttributes {
        self.find(company)
            .map(FundingAttributes::from)
            .unwrap_or_else(FundingAttributes::unmatched)
    }

    /// Attach funding attributes to every profile, preserving order.
    pub fn enrich(&self, profiles: Vec<EnrichedProfile>) -> Vec<EnrichedProfile> {
        let total = profiles.len();
        let matched = profiles.iter().filter(|p| self.find(&p.profile.company).is_some()).count();
        let enriched: Vec<EnrichedProfile> = profiles
            .into_iter()
            .map(|p| {
                let funding = self.lookup(&p.profile.company);
                p.with_funding(funding)
            })
            .collect();
        debug!(matched, total, "Funding merge complete");
        enriched
    }
}
