use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::LeadError;

/// An HTTP client that only allows requests to approved hosts.
/// Outbound calls from the enrichment stage are capped to the literature service and loopback.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client with the default allowlist and the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, LeadError> {
        let domains = [
            "eutils.ncbi.nlm.nih.gov", // PubMed
            "localhost",
            "127.0.0.1",
        ];
        let allowlist = domains.iter().map(|d| d.to_string()).collect();

        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| LeadError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        // Exact match or a subdomain of an allowed host
        self.allowlist
            .iter()
            .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
    }

    /// Builds a GET request if the URL passes the allowlist.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, LeadError> {
        if !self.is_allowed(url) {
            return Err(LeadError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
