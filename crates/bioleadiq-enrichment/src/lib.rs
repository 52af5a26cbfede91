//! bioleadiq-enrichment — Signal enrichment stages.
//! - Funding merge against the exact-match reference table
//! - Scientific-intent resolution (static table or PubMed live lookup)
//! - Sequential stage runner producing `EnrichedProfile`s

pub mod funding;
pub mod pipeline;
pub mod sources;

pub use funding::FundingLookup;
pub use pipeline::enrich_profiles;
pub use sources::{build_resolver, ScientificIntentResolver};
