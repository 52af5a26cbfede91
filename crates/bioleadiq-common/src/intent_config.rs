//! Configuration consumed by the scientific-intent stage.
//!
//! The live/static choice is made once from this struct when the resolver is
//! built; nothing re-reads the environment per lookup.

use std::time::Duration;

use secrecy::SecretString;

/// PubMed E-utilities esearch endpoint.
pub const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

/// Environment toggle for the live lookup (`true`, case-insensitive).
pub const LIVE_LOOKUP_ENV: &str = "ENABLE_PUBMED_LIVE";
/// Environment variable holding the NCBI API key.
pub const API_KEY_ENV: &str = "NCBI_API_KEY";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Topic keywords OR-ed into every live query.
pub fn default_keywords() -> Vec<String> {
    ["Drug-Induced Liver Injury", "hepatic", "toxicology", "3D culture"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

#[derive(Debug)]
pub struct IntentConfig {
    /// Query PubMed instead of the static publication table.
    pub live_lookup: bool,
    /// Optional NCBI credential, sent as `api_key`.
    pub api_key: Option<SecretString>,
    pub endpoint: String,
    pub timeout: Duration,
    pub keywords: Vec<String>,
    /// Hosts allowed in addition to NCBI and loopback.
    pub allowed_hosts: Vec<String>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            live_lookup: false,
            api_key: None,
            endpoint: ESEARCH_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            keywords: default_keywords(),
            allowed_hosts: Vec::new(),
        }
    }
}

impl IntentConfig {
    /// Apply `ENABLE_PUBMED_LIVE` / `NCBI_API_KEY` overrides.
    /// `lookup` is usually `|k| std::env::var(k).ok()`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(flag) = lookup(LIVE_LOOKUP_ENV) {
            self.live_lookup = flag.trim().eq_ignore_ascii_case("true");
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(SecretString::from(key));
        }
        self
    }
}
