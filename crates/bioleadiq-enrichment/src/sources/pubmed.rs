//! PubMed E-utilities live lookup.
//!
//! Endpoint used:
//!   esearch: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!
//! One esearch per person, no retries. Every failure degrades to a zero
//! signal with a warning.

use async_trait::async_trait;
use bioleadiq_common::sandbox::SandboxClient as Client;
use bioleadiq_common::{IntentConfig, LeadError, Result, ScientificIntentSignal};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use super::ScientificIntentResolver;

/// Publication-date window, in days (~24 months).
pub const RELDATE_DAYS: u32 = 730;

pub struct PubMedIntentResolver {
    client: Client,
    endpoint: String,
    api_key: Option<SecretString>,
    keywords: Vec<String>,
}

impl PubMedIntentResolver {
    pub fn from_config(config: IntentConfig) -> Result<Self> {
        let mut client = Client::new(config.timeout)?;
        for host in &config.allowed_hosts {
            client.allow_domain(host);
        }
        Ok(Self {
            client,
            endpoint: config.endpoint,
            api_key: config.api_key,
            keywords: config.keywords,
        })
    }

    fn params(&self, name: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("db", "pubmed".to_string()),
            ("retmode", "json".to_string()),
            ("term", build_query(name, &self.keywords)),
            ("datetype", "pdat".to_string()),
            ("reldate", RELDATE_DAYS.to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.expose_secret().to_string()));
        }
        params
    }

    /// Count PubMed hits for a person within the keyword scope.
    /// Transport errors drop the request URL, which carries `api_key`.
    #[instrument(skip(self))]
    async fn esearch_count(&self, name: &str) -> Result<u32> {
        let resp: serde_json::Value = self.client
            .get(&self.endpoint)?
            .query(&self.params(name))
            .send()
            .await
            .map_err(reqwest::Error::without_url)?
            .error_for_status()
            .map_err(reqwest::Error::without_url)?
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;

        let count = parse_esearch_count(&resp)?;
        debug!(count, "PubMed esearch returned count");
        Ok(count)
    }
}

#[async_trait]
impl ScientificIntentResolver for PubMedIntentResolver {
    async fn resolve(&self, name: &str) -> ScientificIntentSignal {
        match self.esearch_count(name).await {
            Ok(hits) => ScientificIntentSignal {
                keyword_hits: hits,
                recent_publication: hits > 0,
                used_live_lookup: true,
            },
            Err(e) => {
                warn!(person = %name, error = %e, "PubMed live lookup failed, using zero signal");
                ScientificIntentSignal::none(true)
            }
        }
    }

    fn is_live(&self) -> bool {
        true
    }
}

/// `<name> AND (<k1> OR <k2> ...)`
pub fn build_query(name: &str, keywords: &[String]) -> String {
    format!("{} AND ({})", name, keywords.join(" OR "))
}

/// Extract `esearchresult.count`, which NCBI returns as a decimal string.
fn parse_esearch_count(resp: &serde_json::Value) -> Result<u32> {
    let count = &resp["esearchresult"]["count"];
    let parsed = match count {
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        serde_json::Value::Number(n) => n.as_u64(),
        _ => None,
    };
    parsed
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .ok_or_else(|| LeadError::MalformedResponse(format!("esearch count missing or non-numeric: {}", count)))
}
