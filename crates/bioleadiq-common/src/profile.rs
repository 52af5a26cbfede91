//! Candidate records flowing through the enrichment and scoring stages.
//!
//! Each stage takes ownership of a record and hands back a new one with its
//! attributes attached, so no two stages ever alias the same row.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Funding stage assigned when no funding record matches a company.
pub const UNKNOWN_STAGE: &str = "Unknown";

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// A candidate contact as read from the profile source.
/// Missing columns decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub company: String,
    pub person_location: String,
    pub company_hq: String,
    pub linkedin_url: String,
}

// ---------------------------------------------------------------------------
// Funding
// ---------------------------------------------------------------------------

/// One entry of the funding reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRecord {
    pub company: String,
    #[serde(default = "unknown_stage", deserialize_with = "deserialize_stage")]
    pub funding_stage: String,
    #[serde(default, deserialize_with = "deserialize_lenient_year")]
    pub last_funding_year: Option<i32>,
}

fn unknown_stage() -> String { UNKNOWN_STAGE.to_string() }

fn deserialize_stage<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        _ => unknown_stage(),
    })
}

fn deserialize_lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_year))
}

/// Coerce a loosely-typed year value into an integer.
/// Integers, whole floats and numeric strings are accepted; anything else is `None`.
pub fn parse_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(whole_number))
            .and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i32>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number).and_then(|y| i32::try_from(y).ok()))
        }
        _ => None,
    }
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 {
        Some(f as i64)
    } else {
        None
    }
}

/// Funding attributes merged onto a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingAttributes {
    pub funding_stage: String,
    pub last_funding_year: Option<i32>,
}

impl FundingAttributes {
    /// Attributes for a company with no funding record.
    pub fn unmatched() -> Self {
        Self {
            funding_stage: UNKNOWN_STAGE.to_string(),
            last_funding_year: None,
        }
    }
}

impl Default for FundingAttributes {
    fn default() -> Self {
        Self::unmatched()
    }
}

impl From<&FundingRecord> for FundingAttributes {
    fn from(record: &FundingRecord) -> Self {
        Self {
            funding_stage: record.funding_stage.clone(),
            last_funding_year: record.last_funding_year,
        }
    }
}

// ---------------------------------------------------------------------------
// Scientific intent
// ---------------------------------------------------------------------------

/// Publishing-activity signal for one person.
/// `used_live_lookup` is kept for auditability and never scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScientificIntentSignal {
    pub keyword_hits: u32,
    pub recent_publication: bool,
    pub used_live_lookup: bool,
}

impl ScientificIntentSignal {
    /// Zero signal, as returned for unknown people or failed live lookups.
    pub fn none(used_live_lookup: bool) -> Self {
        Self {
            keyword_hits: 0,
            recent_publication: false,
            used_live_lookup,
        }
    }

    pub fn has_signal(&self) -> bool {
        self.keyword_hits > 0
    }

    /// "yes" / "no" label used in the exported table.
    pub fn signal_label(&self) -> &'static str {
        if self.has_signal() { "yes" } else { "no" }
    }
}

// ---------------------------------------------------------------------------
// Enriched profile
// ---------------------------------------------------------------------------

/// A profile with funding and scientific-intent attributes attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedProfile {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(flatten)]
    pub funding: FundingAttributes,
    #[serde(flatten)]
    pub intent: ScientificIntentSignal,
}

impl From<Profile> for EnrichedProfile {
    fn from(profile: Profile) -> Self {
        Self {
            profile,
            funding: FundingAttributes::unmatched(),
            intent: ScientificIntentSignal::default(),
        }
    }
}

impl EnrichedProfile {
    pub fn with_funding(self, funding: FundingAttributes) -> Self {
        Self { funding, ..self }
    }

    pub fn with_intent(self, intent: ScientificIntentSignal) -> Self {
        Self { intent, ..self }
    }
}
