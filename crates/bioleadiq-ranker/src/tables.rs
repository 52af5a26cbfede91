//! Fixed lookup tables for the sub-scores. Read-only for the life of the process.

/// Title substrings marking a senior or research role (lower-case).
pub const ROLE_KEYWORDS: &[&str] = &[
    "director",
    "head",
    "lead",
    "vp",
    "vice president",
    "chief",
    "cso",
    "scientist",
];

/// Location substrings for biotech hubs (lower-case).
pub const BIOTECH_HUBS: &[&str] = &[
    "boston",
    "cambridge",
    "san diego",
    "san francisco",
    "south san francisco",
    "basel",
    "london",
    "cambridge, uk",
    "oxford",
    "bangalore",
];

/// Funding stage weights, keyed by lower-case stage label.
pub const FUNDING_WEIGHTS: &[(&str, f64)] = &[
    ("seed",     0.4),
    ("series a", 0.6),
    ("series b", 0.8),
    ("series c", 0.9),
    ("public",   1.0),
];

/// Weight for any stage not in `FUNDING_WEIGHTS`, including "Unknown".
pub const DEFAULT_STAGE_WEIGHT: f64 = 0.3;

/// Funding in or after this year earns the recency bonus.
pub const RECENT_FUNDING_YEAR: i32 = 2023;
pub const RECENT_FUNDING_BONUS: f64 = 0.1;

pub const RECENT_PUBLICATION_BASE: f64 = 0.5;
pub const OLDER_PUBLICATION_BASE: f64 = 0.3;
/// Per-hit bonus, counted up to `MAX_BONUS_HITS`.
pub const HIT_BONUS: f64 = 0.1;
pub const MAX_BONUS_HITS: u32 = 5;

/// Stage weight for a free-form stage label, matched case-insensitively.
pub fn stage_weight(stage: &str) -> f64 {
    let stage = stage.to_lowercase();
    FUNDING_WEIGHTS
        .iter()
        .find(|(label, _)| *label == stage)
        .map(|(_, w)| *w)
        .unwrap_or(DEFAULT_STAGE_WEIGHT)
}
