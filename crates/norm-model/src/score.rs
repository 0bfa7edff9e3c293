use serde::{Deserialize, Serialize};

/// One standardization request: subject age in years (fractional allowed) and
/// the raw test score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreQuery {
    pub age: f64,
    pub raw_score: f64,
}

/// Standardized result for one query. Immutable, one per call, echoes both
/// inputs alongside the looked-up norms and the derived scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub age: f64,
    pub raw_score: f64,
    pub predicted_mean: f64,
    pub predicted_sd: f64,
    pub z_score: f64,
    pub t_score: f64,
    pub percentile: f64,
}
