//! Scoring and ranking over the whole profile collection.
//!
//! Score every profile in input order, stable-sort by probability score
//! descending, then number the sorted sequence 1..N. Equal scores keep their
//! input order.

use bioleadiq_common::EnrichedProfile;
use serde::Serialize;
use tracing::{debug, info};

use crate::scorer::{composite_score_with, ScoreBreakdown};
use crate::weights::WeightVector;

/// A ranked profile. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProfile {
    pub rank: usize,
    #[serde(flatten)]
    pub profile: EnrichedProfile,
    #[serde(flatten)]
    pub score: ScoreBreakdown,
}

#[derive(Debug, Clone, Default)]
pub struct RankingPipeline {
    weights: WeightVector,
}

impl RankingPipeline {
    pub fn new(weights: WeightVector) -> Self {
        Self { weights }
    }

    pub fn rank(&self, profiles: Vec<EnrichedProfile>) -> Vec<ScoredProfile> {
        let mut scored: Vec<(EnrichedProfile, ScoreBreakdown)> = profiles
            .into_iter()
            .map(|p| {
                let score = composite_score_with(&p, &self.weights);
                (p, score)
            })
            .collect();

        // Vec::sort_by is stable.
        scored.sort_by(|a, b| b.1.probability_score.total_cmp(&a.1.probability_score));

        let ranked: Vec<ScoredProfile> = scored
            .into_iter()
            .enumerate()
            .map(|(idx, (profile, score))| ScoredProfile { rank: idx + 1, profile, score })
            .collect();

        if let Some(top) = ranked.first() {
            debug!(person = %top.profile.profile.name, score = top.score.probability_score, "Top-ranked profile");
        }
        info!(ranked = ranked.len(), "Ranking complete");
        ranked
    }
}

/// Rank with the default weights.
pub fn rank_profiles(profiles: Vec<EnrichedProfile>) -> Vec<ScoredProfile> {
    RankingPipeline::default().rank(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioleadiq_common::Profile;
    use pretty_assertions::assert_eq;

    fn titled(name: &str, title: &str) -> EnrichedProfile {
        EnrichedProfile::from(Profile {
            name: name.to_string(),
            title: title.to_string(),
            ..Profile::default()
        })
    }

    #[test]
    fn test_ranks_descending() {
        let ranked = rank_profiles(vec![
            titled("none", ""),
            titled("senior", "Director"),
            titled("other", "Engineer"),
        ]);
        let order: Vec<&str> = ranked.iter().map(|r| r.profile.profile.name.as_str()).collect();
        assert_eq!(order, vec!["senior", "other", "none"]);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_profiles(vec![
            titled("a", "Engineer"),
            titled("b", "Director"),
            titled("c", "Analyst"),
            titled("d", "Head of Biology"),
            titled("e", "Engineer"),
        ]);
        let order: Vec<&str> = ranked.iter().map(|r| r.profile.profile.name.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(rank_profiles(vec![]).is_empty());
    }
}
