//! Ranking contract over mixed profile sets.

use bioleadiq_common::{EnrichedProfile, FundingAttributes, ScientificIntentSignal};
use bioleadiq_ranker::{rank_profiles, RankingPipeline, WeightVector};
use bioleadiq_test_utils::pretty_assertions::assert_eq;
use bioleadiq_test_utils::profile;

fn mixed_profiles() -> Vec<EnrichedProfile> {
    let titles = ["Director of Toxicology", "Engineer", "", "Senior Scientist"];
    let locations = ["Boston, MA", "Tokyo", "", "Cambridge, UK"];
    let stages = [("Series B", Some(2024)), ("Unknown", None), ("seed", Some(2019)), ("PUBLIC", Some(2023))];
    let hits = [0u32, 1, 3, 12];

    let mut out = Vec::new();
    for (i, title) in titles.iter().enumerate() {
        for (j, location) in locations.iter().enumerate() {
            let (stage, year) = stages[(i + j) % stages.len()];
            let keyword_hits = hits[(i * 3 + j) % hits.len()];
            let p = profile(&format!("p{i}{j}"), title, "Co", location);
            out.push(
                EnrichedProfile::from(p)
                    .with_funding(FundingAttributes { funding_stage: stage.to_string(), last_funding_year: year })
                    .with_intent(ScientificIntentSignal {
                        keyword_hits,
                        recent_publication: (i + j) % 2 == 0,
                        used_live_lookup: false,
                    }),
            );
        }
    }
    out
}

#[test]
fn test_scores_bounded_and_ranks_form_permutation() {
    let ranked = rank_profiles(mixed_profiles());
    let n = ranked.len();

    for r in &ranked {
        assert!((0.0..=100.0).contains(&r.score.probability_score));
        for c in r.score.components.as_array() {
            assert!((0.0..=1.0).contains(&c));
        }
    }

    let mut ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=n).collect::<Vec<_>>());

    for pair in ranked.windows(2) {
        assert!(pair[0].score.probability_score >= pair[1].score.probability_score);
        assert_eq!(pair[0].rank + 1, pair[1].rank);
    }
}

#[test]
fn test_equal_scores_preserve_input_order() {
    let input = mixed_profiles();
    let position = |name: &str| input.iter().position(|p| p.profile.name == name).unwrap();
    let ranked = rank_profiles(input.clone());

    for pair in ranked.windows(2) {
        if pair[0].score.probability_score == pair[1].score.probability_score {
            assert!(position(&pair[0].profile.profile.name) < position(&pair[1].profile.profile.name));
        }
    }
}

#[test]
fn test_identical_profiles_keep_order() {
    let twins = vec![
        EnrichedProfile::from(profile("first", "Director", "Acme", "Boston")),
        EnrichedProfile::from(profile("second", "Director", "Acme", "Boston")),
    ];
    let ranked = rank_profiles(twins);
    assert_eq!(ranked[0].score.probability_score, ranked[1].score.probability_score);
    assert_eq!(ranked[0].profile.profile.name, "first");
    assert_eq!(ranked[1].profile.profile.name, "second");
}

#[test]
fn test_custom_weights_change_order() {
    let profiles = vec![
        EnrichedProfile::from(profile("senior", "Director", "Co", "Tokyo")),
        EnrichedProfile::from(profile("local", "", "Co", "Boston")),
    ];
    let geo_heavy = WeightVector { role_fit: 10.0, scientific_intent: 10.0, company_funding: 10.0, location_hub: 70.0 };
    assert!(geo_heavy.validate());

    let ranked = RankingPipeline::new(geo_heavy).rank(profiles);

    assert_eq!(ranked[0].profile.profile.name, "local");
}
