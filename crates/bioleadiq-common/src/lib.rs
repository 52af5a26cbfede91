//! bioleadiq-common — Shared records, errors, and configuration used across all BioLeadIQ crates.

pub mod error;
pub mod profile;
pub mod intent_config;
pub mod sandbox;

// Re-export commonly used types
pub use error::{LeadError, Result};
pub use intent_config::IntentConfig;
pub use profile::{EnrichedProfile, FundingAttributes, FundingRecord, Profile, ScientificIntentSignal};
