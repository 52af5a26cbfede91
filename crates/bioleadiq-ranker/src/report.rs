//! Fixed output table for ranked profiles.

use serde::{Deserialize, Serialize};

use crate::pipeline::ScoredProfile;

/// One exported row, with the column headers consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Probability Score (0-100)")]
    pub probability_score: f64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Person Location")]
    pub person_location: String,
    #[serde(rename = "Company HQ")]
    pub company_hq: String,
    #[serde(rename = "Scientific Signal (papers / yes-no)")]
    pub scientific_signal: String,
    #[serde(rename = "Funding Stage")]
    pub funding_stage: String,
    #[serde(rename = "LinkedIn URL")]
    pub linkedin_url: String,
}

impl From<&ScoredProfile> for OutputRow {
    fn from(scored: &ScoredProfile) -> Self {
        let p = &scored.profile.profile;
        Self {
            rank: scored.rank,
            probability_score: scored.score.probability_score,
            name: p.name.clone(),
            title: p.title.clone(),
            company: p.company.clone(),
            person_location: p.person_location.clone(),
            company_hq: p.company_hq.clone(),
            scientific_signal: scored.profile.intent.signal_label().to_string(),
            funding_stage: scored.profile.funding.funding_stage.clone(),
            linkedin_url: p.linkedin_url.clone(),
        }
    }
}

/// Format ranked profiles for export, keeping rank order.
pub fn format_for_output(scored: &[ScoredProfile]) -> Vec<OutputRow> {
    scored.iter().map(OutputRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::rank_profiles;
    use bioleadiq_common::{EnrichedProfile, ScientificIntentSignal};
    use bioleadiq_test_utils::profile;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_row_columns() {
        let enriched = EnrichedProfile::from(profile("Amelia Rossi", "Head of In Vitro", "Organo", "Basel"))
            .with_intent(ScientificIntentSignal { keyword_hits: 4, recent_publication: true, used_live_lookup: false });
        let rows = format_for_output(&rank_profiles(vec![enriched]));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].scientific_signal, "yes");
        assert_eq!(rows[0].funding_stage, "Unknown");

        let json = serde_json::to_value(&rows[0]).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert!(keys.contains(&"Probability Score (0-100)"));
        assert!(keys.contains(&"Scientific Signal (papers / yes-no)"));
        assert!(keys.contains(&"LinkedIn URL"));
    }
}
