//! Score normalisation helpers.

/// Clamp into [0, 1]. Non-finite values map to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Round to a fixed number of decimals, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Map a raw weighted sum (0–100 scale) to the reported probability score.
pub fn to_probability(raw: f64) -> f64 {
    round_to(clamp_unit(raw / 100.0) * 100.0, 1)
}
