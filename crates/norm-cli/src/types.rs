use serde::Serialize;

use norm_model::ScoreResult;

/// Everything the CLI reports for one standardized score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub test_id: String,
    pub test_name: String,
    pub unit: String,
    pub reversed: bool,
    /// Inclusive age range of the band the query resolved to.
    pub band_min: i64,
    pub band_max: i64,
    pub result: ScoreResult,
}
