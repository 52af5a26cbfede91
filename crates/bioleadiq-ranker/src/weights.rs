//! Weight vector for the composite probability score.

use serde::{Deserialize, Serialize};

/// Points each sub-score contributes at full strength.
/// Weights sum to 100, so a perfect profile scores 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightVector {
    /// Title seniority
    pub role_fit: f64,
    /// Recent publishing activity
    pub scientific_intent: f64,
    /// Employer funding stage and recency
    pub company_funding: f64,
    /// Biotech hub proximity
    pub location_hub: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            role_fit:          30.0,
            scientific_intent: 40.0,
            company_funding:   20.0,
            location_hub:      10.0,
        }
    }
}

impl WeightVector {
    /// All weights finite and non-negative, summing to ~100.
    pub fn validate(&self) -> bool {
        let arr = self.as_array();
        if arr.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return false;
        }
        (arr.iter().sum::<f64>() - 100.0).abs() < 1e-6
    }

    /// Convert to array for iteration, in sub-score order.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.role_fit,
            self.scientific_intent,
            self.company_funding,
            self.location_hub,
        ]
    }
}
