//! Merging the adult fixed-band table with the child-derived band table.
//!
//! Validation runs once here, at engine construction. A table that reaches a
//! lookup has already been proven to cover every integer age in its domain
//! exactly once.

use tracing::debug;

use norm_model::{AgeBand, ConfigError, NormBandTable};

/// Concatenate adult and child bands into one validated table.
///
/// Fails if any band is malformed (inverted range, non-positive SD), if two
/// bands overlap, or if any integer age between the combined minimum and
/// maximum is uncovered.
pub fn merge_band_tables(
    adult: &[AgeBand],
    child: &[AgeBand],
) -> Result<NormBandTable, ConfigError> {
    let mut bands: Vec<AgeBand> = child.iter().chain(adult.iter()).copied().collect();
    if bands.is_empty() {
        return Err(ConfigError::EmptyTable);
    }
    for band in &bands {
        if band.age_min > band.age_max {
            return Err(ConfigError::InvertedBandRange {
                age_min: band.age_min,
                age_max: band.age_max,
            });
        }
        if band.predicted_sd.is_nan() || band.predicted_sd <= 0.0 {
            return Err(ConfigError::NonPositiveSd {
                age_min: band.age_min,
                age_max: band.age_max,
                sd: band.predicted_sd,
            });
        }
    }
    bands.sort_by_key(|band| (band.age_min, band.age_max));

    for pair in bands.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.age_min <= prev.age_max {
            return Err(ConfigError::BandOverlap {
                first: format!("{}-{}", prev.age_min, prev.age_max),
                second: format!("{}-{}", next.age_min, next.age_max),
            });
        }
        if next.age_min > prev.age_max + 1 {
            let (min, max) = domain_of(&bands);
            return Err(ConfigError::CoverageGap {
                age: prev.age_max + 1,
                min,
                max,
            });
        }
    }

    let (min, max) = domain_of(&bands);
    debug!(min, max, bands = bands.len(), "merged normative band table");
    Ok(NormBandTable::from_validated(bands))
}

fn domain_of(bands: &[AgeBand]) -> (i64, i64) {
    let min = bands.iter().map(|b| b.age_min).min().unwrap_or(0);
    let max = bands.iter().map(|b| b.age_max).max().unwrap_or(0);
    (min, max)
}
