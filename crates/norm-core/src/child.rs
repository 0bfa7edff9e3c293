//! Pediatric norm derivation.
//!
//! Child norms come as a continuous regression over age plus empirically
//! fixed anchor values at a few ages. The builder materializes one row per
//! integer age (anchor wins, regression is the fallback) and then aggregates
//! contiguous year runs into bands by arithmetic mean.

use std::collections::BTreeMap;

use tracing::debug;

use norm_model::{
    AgeBand, AnchorOverride, ChildAgeBandGroup, ChildAgeYearRow, ChildRegressionSpec, ConfigError,
};

/// Produce one row per integer age in `[lo, hi]`.
///
/// Anchors whose age matches replace the regression estimate entirely (both
/// mean and SD). Anchors outside the range are ignored, so one anchor
/// superset can be shared across tests.
pub fn build_child_year_rows(
    spec: &ChildRegressionSpec,
    anchors: &[AnchorOverride],
    lo: i64,
    hi: i64,
) -> Vec<ChildAgeYearRow> {
    let anchor_by_age: BTreeMap<i64, &AnchorOverride> =
        anchors.iter().map(|a| (a.age, a)).collect();

    (lo..=hi)
        .map(|age| match anchor_by_age.get(&age) {
            Some(anchor) => ChildAgeYearRow {
                age,
                predicted_mean: anchor.predicted_mean,
                predicted_sd: anchor.predicted_sd,
            },
            None => ChildAgeYearRow {
                age,
                predicted_mean: spec.mean.eval(age as f64),
                predicted_sd: spec.sd.eval(age as f64),
            },
        })
        .collect()
}

/// Aggregate per-year rows into bands by grouped averaging.
///
/// Each group's mean and SD are the arithmetic means of the rows whose age
/// falls in `[age_min, age_max]`. A group that matches no rows is a
/// band/range mismatch and fails rather than averaging an empty set.
pub fn aggregate_band_groups(
    rows: &[ChildAgeYearRow],
    groups: &[ChildAgeBandGroup],
) -> Result<Vec<AgeBand>, ConfigError> {
    let mut bands = Vec::with_capacity(groups.len());
    for group in groups {
        let covered: Vec<&ChildAgeYearRow> = rows
            .iter()
            .filter(|row| group.age_min <= row.age && row.age <= group.age_max)
            .collect();
        if covered.is_empty() {
            return Err(ConfigError::EmptyBandGroup {
                age_min: group.age_min,
                age_max: group.age_max,
            });
        }
        let n = covered.len() as f64;
        let mean = covered.iter().map(|r| r.predicted_mean).sum::<f64>() / n;
        let sd = covered.iter().map(|r| r.predicted_sd).sum::<f64>() / n;
        debug!(
            age_min = group.age_min,
            age_max = group.age_max,
            rows = covered.len(),
            "aggregated child band group"
        );
        bands.push(AgeBand::new(group.age_min, group.age_max, mean, sd));
    }
    Ok(bands)
}
