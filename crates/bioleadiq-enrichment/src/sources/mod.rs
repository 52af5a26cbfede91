//! Scientific-intent sources.

pub mod pubmed;
pub mod static_table;

use async_trait::async_trait;
use bioleadiq_common::{IntentConfig, Result, ScientificIntentSignal};
use tracing::info;

pub use pubmed::PubMedIntentResolver;
pub use static_table::StaticIntentResolver;

/// Common interface for resolving a person's recent publishing activity.
///
/// Resolution is infallible: implementations degrade to a zero signal
/// instead of returning an error.
#[async_trait]
pub trait ScientificIntentResolver: Send + Sync {
    /// Resolve the publishing signal for a person by name.
    async fn resolve(&self, name: &str) -> ScientificIntentSignal;

    /// Whether this resolver queries an external service.
    fn is_live(&self) -> bool;
}

/// Pick the resolver once from configuration.
/// Only building the live HTTP client can fail.
pub fn build_resolver(config: IntentConfig) -> Result<Box<dyn ScientificIntentResolver>> {
    if config.live_lookup {
        info!(endpoint = %config.endpoint, "Scientific intent: PubMed live lookup");
        Ok(Box::new(PubMedIntentResolver::from_config(config)?))
    } else {
        info!("Scientific intent: static publication table");
        Ok(Box::new(StaticIntentResolver::builtin()))
    }
}
