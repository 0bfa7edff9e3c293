use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use crate::types::ScoreReport;

/// Plain-text report for one standardized score.
pub fn render_score_report(report: &ScoreReport) -> String {
    let direction = if report.reversed {
        "higher raw score indicates worse performance"
    } else {
        "higher raw score indicates better performance"
    };
    let r = &report.result;
    [
        format!("Test: {}", report.test_name),
        format!("Unit: {}", report.unit),
        format!("Direction: {direction}"),
        format!("Age: {} (band {}-{})", r.age, report.band_min, report.band_max),
        format!("Raw score: {}", r.raw_score),
        format!("Predicted mean: {}", r.predicted_mean),
        format!("Predicted SD: {}", r.predicted_sd),
        format!("Z-score: {:.2}", r.z_score),
        format!("T-score: {:.2}", r.t_score),
        format!("Percentile: {:.2}", r.percentile),
    ]
    .join("\n")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
