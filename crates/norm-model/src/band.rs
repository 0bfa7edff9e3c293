use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One age band of a normative table: inclusive integer age range with the
/// predicted mean and standard deviation for that range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub age_min: i64,
    pub age_max: i64,
    pub predicted_mean: f64,
    pub predicted_sd: f64,
}

impl AgeBand {
    pub fn new(age_min: i64, age_max: i64, predicted_mean: f64, predicted_sd: f64) -> Self {
        Self {
            age_min,
            age_max,
            predicted_mean,
            predicted_sd,
        }
    }

    /// Returns true if the integer age falls inside this band (inclusive).
    pub fn contains(&self, age: i64) -> bool {
        self.age_min <= age && age <= self.age_max
    }
}

/// Validated sequence of contiguous, non-overlapping age bands. Built only by
/// the merger in `norm-core`, which enforces the coverage invariant before an
/// engine ever serves a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormBandTable {
    bands: Vec<AgeBand>,
}

impl NormBandTable {
    /// Wrap a band list without validating coverage. Callers are expected to
    /// have run the merge validation first.
    pub fn from_validated(bands: Vec<AgeBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[AgeBand] {
        &self.bands
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Inclusive (min, max) integer age domain covered by the table.
    pub fn domain(&self) -> (i64, i64) {
        let min = self.bands.iter().map(|b| b.age_min).min().unwrap_or(0);
        let max = self.bands.iter().map(|b| b.age_max).max().unwrap_or(0);
        (min, max)
    }

    /// Select the unique band containing the floored query age.
    ///
    /// The raw floating-point age is validated against the inclusive domain
    /// first, then floored to an integer year, so fractional ages resolve to
    /// the band of the year they fall in and never hit a seam gap. Zero or
    /// multiple matches after that is a table-consistency failure and is
    /// reported rather than resolved arbitrarily.
    pub fn band_for_age(&self, age: f64) -> Result<&AgeBand, DomainError> {
        let (min, max) = self.domain();
        if !age.is_finite() || age < min as f64 || age > max as f64 {
            return Err(DomainError::AgeOutOfRange { age, min, max });
        }
        let year = age.floor() as i64;
        let mut matches = self.bands.iter().filter(|band| band.contains(year));
        let band = matches
            .next()
            .ok_or(DomainError::AmbiguousAge { age, matches: 0 })?;
        if matches.next().is_some() {
            let count = self.bands.iter().filter(|b| b.contains(year)).count();
            return Err(DomainError::AmbiguousAge {
                age,
                matches: count,
            });
        }
        Ok(band)
    }
}

/// Per-integer-age normative row for the pediatric range, produced by the
/// child-norm builder before band aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildAgeYearRow {
    pub age: i64,
    pub predicted_mean: f64,
    pub predicted_sd: f64,
}

/// Grouping specification: aggregate the child per-year rows whose age falls
/// in `[age_min, age_max]` into one band by arithmetic mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildAgeBandGroup {
    pub age_min: i64,
    pub age_max: i64,
}
