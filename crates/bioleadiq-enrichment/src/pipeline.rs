//! Enrichment stage runner.
//!
//! Runs the stages in their fixed order:
//!   1. Wrap each raw `Profile` as an `EnrichedProfile` with default attributes
//!   2. Merge funding attributes from the reference table
//!   3. Resolve scientific intent, one person at a time
//!
//! Profiles are processed strictly in sequence and input order is preserved.

use bioleadiq_common::{EnrichedProfile, Profile};
use tracing::{debug, info};

use crate::funding::FundingLookup;
use crate::sources::ScientificIntentResolver;

pub async fn enrich_profiles(
    profiles: Vec<Profile>,
    funding: &FundingLookup,
    resolver: &dyn ScientificIntentResolver,
) -> Vec<EnrichedProfile> {
    let enriched = funding.enrich(profiles.into_iter().map(EnrichedProfile::from).collect());
    let enriched = attach_intent(enriched, resolver).await;

    let with_signal = enriched.iter().filter(|p| p.intent.has_signal()).count();
    info!(
        profiles = enriched.len(),
        with_signal,
        live = resolver.is_live(),
        "Enrichment complete"
    );
    enriched
}

/// Resolve scientific intent for each profile, awaiting one lookup at a time.
pub async fn attach_intent(
    profiles: Vec<EnrichedProfile>,
    resolver: &dyn ScientificIntentResolver,
) -> Vec<EnrichedProfile> {
    let mut out = Vec::with_capacity(profiles.len());
    for p in profiles {
        let intent = resolver.resolve(&p.profile.name).await;
        debug!(person = %p.profile.name, hits = intent.keyword_hits, recent = intent.recent_publication, "Intent resolved");
        out.push(p.with_intent(intent));
    }
    out
}
