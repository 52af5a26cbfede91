//! Sub-score and composite score computation.
//!
//! S = role_fit × w1 + scientific_intent × w2 + company_funding × w3 + location_hub × w4
//! probability_score = round(clamp(S / 100, 0, 1) × 100, 1)

use bioleadiq_common::EnrichedProfile;
use serde::{Deserialize, Serialize};

use crate::normalise::{clamp_unit, round_to, to_probability};
use crate::tables::{
    stage_weight, BIOTECH_HUBS, HIT_BONUS, MAX_BONUS_HITS, OLDER_PUBLICATION_BASE,
    RECENT_FUNDING_BONUS, RECENT_FUNDING_YEAR, RECENT_PUBLICATION_BASE, ROLE_KEYWORDS,
};
use crate::weights::WeightVector;

/// 1.0 for senior/research titles, 0.5 for any other title, 0.0 for none.
pub fn role_fit_score(title: &str) -> f64 {
    let t = title.to_lowercase();
    if ROLE_KEYWORDS.iter().any(|k| t.contains(k)) {
        1.0
    } else if !t.is_empty() {
        0.5
    } else {
        0.0
    }
}

pub fn scientific_intent_score(keyword_hits: u32, recent_publication: bool) -> f64 {
    if keyword_hits == 0 {
        return 0.0;
    }
    let base = if recent_publication { RECENT_PUBLICATION_BASE } else { OLDER_PUBLICATION_BASE };
    let bonus = f64::from(keyword_hits.min(MAX_BONUS_HITS)) * HIT_BONUS;
    clamp_unit(base + bonus)
}

pub fn company_funding_score(funding_stage: &str, last_funding_year: Option<i32>) -> f64 {
    let recency_bonus = match last_funding_year {
        Some(year) if year >= RECENT_FUNDING_YEAR => RECENT_FUNDING_BONUS,
        _ => 0.0,
    };
    clamp_unit(stage_weight(funding_stage) + recency_bonus)
}

/// 1.0 if the location names a biotech hub.
pub fn location_hub_score(person_location: &str) -> f64 {
    let loc = person_location.to_lowercase();
    if BIOTECH_HUBS.iter().any(|hub| loc.contains(hub)) { 1.0 } else { 0.0 }
}

/// Sub-scores as stored for explainability (rounded to 2 decimals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub role_fit: f64,
    pub scientific_intent: f64,
    pub company_funding: f64,
    pub location_hub: f64,
}

impl ComponentScores {
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.role_fit,
            self.scientific_intent,
            self.company_funding,
            self.location_hub,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(flatten)]
    pub components: ComponentScores,
    /// In [0, 100], one decimal.
    pub probability_score: f64,
}

/// Composite score with the default weights.
pub fn composite_score(profile: &EnrichedProfile) -> ScoreBreakdown {
    composite_score_with(profile, &WeightVector::default())
}

/// Composite score with explicit weights.
/// The weighted sum uses unrounded sub-scores; only the stored copies are rounded.
pub fn composite_score_with(profile: &EnrichedProfile, weights: &WeightVector) -> ScoreBreakdown {
    let raw_components = ComponentScores {
        role_fit: role_fit_score(&profile.profile.title),
        scientific_intent: scientific_intent_score(
            profile.intent.keyword_hits,
            profile.intent.recent_publication,
        ),
        company_funding: company_funding_score(
            &profile.funding.funding_stage,
            profile.funding.last_funding_year,
        ),
        location_hub: location_hub_score(&profile.profile.person_location),
    };

    let weighted_sum: f64 = raw_components
        .as_array()
        .iter()
        .zip(weights.as_array().iter())
        .map(|(s, w)| s * w)
        .sum();

    ScoreBreakdown {
        components: ComponentScores {
            role_fit: round_to(raw_components.role_fit, 2),
            scientific_intent: round_to(raw_components.scientific_intent, 2),
            company_funding: round_to(raw_components.company_funding, 2),
            location_hub: round_to(raw_components.location_hub, 2),
        },
        probability_score: to_probability(weighted_sum),
    }
}
