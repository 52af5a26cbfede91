//! bioleadiq-ranker — Lead scoring and ranking engine.
//! Four bounded sub-scores, a weighted composite probability score,
//! and a stable descending ranking.

pub mod normalise;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod tables;
pub mod weights;

pub use pipeline::{rank_profiles, RankingPipeline, ScoredProfile};
pub use report::OutputRow;
pub use scorer::{
    company_funding_score, composite_score, location_hub_score, role_fit_score,
    scientific_intent_score, ComponentScores, ScoreBreakdown,
};
pub use weights::WeightVector;
