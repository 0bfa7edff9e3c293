use serde::Deserialize;

use norm_core::{EngineSpec, NormEngine};
use norm_model::{
    AgeBand, AnchorOverride, ChildAgeBandGroup, ChildRegressionSpec, ConfigError, RegressionPoly,
};

/// Fully loaded normative configuration for one test, ready to build an
/// engine from.
#[derive(Debug, Clone)]
pub struct TestDefinition {
    pub id: String,
    pub name: String,
    /// Raw score unit as printed to users ("seconds", "words").
    pub unit: String,
    /// True when a larger raw score indicates worse performance.
    pub reversed: bool,
    pub adult_bands: Vec<AgeBand>,
    pub child_regression: ChildRegressionSpec,
    pub anchors: Vec<AnchorOverride>,
    pub child_age_min: i64,
    pub child_age_max: i64,
    pub child_band_groups: Vec<ChildAgeBandGroup>,
}

impl TestDefinition {
    pub fn engine_spec(&self) -> EngineSpec {
        EngineSpec {
            adult_bands: self.adult_bands.clone(),
            child_regression: self.child_regression.clone(),
            anchors: self.anchors.clone(),
            child_age_min: self.child_age_min,
            child_age_max: self.child_age_max,
            child_band_groups: self.child_band_groups.clone(),
            reversed: self.reversed,
        }
    }

    /// Build the validated standardization engine for this test.
    pub fn build_engine(&self) -> Result<NormEngine, ConfigError> {
        NormEngine::build(&self.engine_spec())
    }
}

/// On-disk `norms.toml` layout.
#[derive(Debug, Deserialize)]
pub(crate) struct NormsManifest {
    pub test: TestSection,
    pub child: ChildSection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TestSection {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub reversed: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChildSection {
    pub age_min: i64,
    pub age_max: i64,
    pub mean_coefficients: Vec<f64>,
    pub sd_coefficients: Vec<f64>,
    pub band_groups: Vec<[i64; 2]>,
}

impl ChildSection {
    pub(crate) fn regression(&self) -> ChildRegressionSpec {
        ChildRegressionSpec {
            mean: RegressionPoly::new(self.mean_coefficients.clone()),
            sd: RegressionPoly::new(self.sd_coefficients.clone()),
        }
    }

    pub(crate) fn groups(&self) -> Vec<ChildAgeBandGroup> {
        self.band_groups
            .iter()
            .map(|pair| ChildAgeBandGroup {
                age_min: pair[0],
                age_max: pair[1],
            })
            .collect()
    }
}
