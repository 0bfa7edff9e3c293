//! The per-test standardization engine.
//!
//! One engine is built per test type from its normative configuration and is
//! immutable afterwards: every `standardize` call is a pure function of the
//! query and the validated table, so an engine can be shared across threads
//! freely.

use tracing::trace;

use norm_model::{
    AgeBand, AnchorOverride, ChildAgeBandGroup, ChildRegressionSpec, ConfigError, DomainError,
    NormBandTable, ScoreQuery, ScoreResult,
};

use crate::child::{aggregate_band_groups, build_child_year_rows};
use crate::merge::merge_band_tables;
use crate::stats::standard_normal_cdf;

/// Static configuration for one test type.
#[derive(Debug, Clone)]
pub struct EngineSpec {
    /// Fixed adult bands from the empirical research table.
    pub adult_bands: Vec<AgeBand>,
    /// Continuous pediatric regression.
    pub child_regression: ChildRegressionSpec,
    /// Empirical overrides applied on top of the regression.
    pub anchors: Vec<AnchorOverride>,
    /// Inclusive pediatric age range the regression covers.
    pub child_age_min: i64,
    pub child_age_max: i64,
    /// Year-range groups that become pediatric bands.
    pub child_band_groups: Vec<ChildAgeBandGroup>,
    /// True for tests where a larger raw score means worse performance
    /// (completion times); flips the sign of the z-score.
    pub reversed: bool,
}

/// Ready-to-query standardization engine for one test type.
#[derive(Debug, Clone)]
pub struct NormEngine {
    table: NormBandTable,
    reversed: bool,
}

impl NormEngine {
    /// Build and fully validate an engine.
    ///
    /// All table validation happens here, never per query: the child rows are
    /// derived, aggregated into bands, and merged with the adult table under
    /// the coverage invariant. A `ConfigError` means the normative
    /// configuration is wrong and no engine is produced.
    pub fn build(spec: &EngineSpec) -> Result<Self, ConfigError> {
        let rows = build_child_year_rows(
            &spec.child_regression,
            &spec.anchors,
            spec.child_age_min,
            spec.child_age_max,
        );
        let child_bands = aggregate_band_groups(&rows, &spec.child_band_groups)?;
        let table = merge_band_tables(&spec.adult_bands, &child_bands)?;
        Ok(Self {
            table,
            reversed: spec.reversed,
        })
    }

    /// Inclusive integer age domain served by this engine.
    pub fn domain(&self) -> (i64, i64) {
        self.table.domain()
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn table(&self) -> &NormBandTable {
        &self.table
    }

    /// Standardize a query record. Equivalent to
    /// `standardize(query.age, query.raw_score)`.
    pub fn standardize_query(&self, query: &ScoreQuery) -> Result<ScoreResult, DomainError> {
        self.standardize(query.age, query.raw_score)
    }

    /// Standardize one raw score for one subject age.
    ///
    /// Looks up the band containing the age (validated against the domain,
    /// then floored to a year), computes the direction-aware z-score, and
    /// derives t-score and percentile from it.
    pub fn standardize(&self, age: f64, raw_score: f64) -> Result<ScoreResult, DomainError> {
        let band = self.table.band_for_age(age)?;
        let z_score = if self.reversed {
            (band.predicted_mean - raw_score) / band.predicted_sd
        } else {
            (raw_score - band.predicted_mean) / band.predicted_sd
        };
        let t_score = 50.0 + 10.0 * z_score;
        let percentile = standard_normal_cdf(z_score) * 100.0;
        trace!(age, raw_score, z_score, "standardized score");
        Ok(ScoreResult {
            age,
            raw_score,
            predicted_mean: band.predicted_mean,
            predicted_sd: band.predicted_sd,
            z_score,
            t_score,
            percentile,
        })
    }
}
