//! Behavioral tests for the standardization engine.

use norm_core::{EngineSpec, NormEngine, standard_normal_cdf};
use norm_model::{
    AgeBand, AnchorOverride, ChildAgeBandGroup, ChildRegressionSpec, RegressionPoly,
};
use proptest::prelude::*;

fn regression() -> ChildRegressionSpec {
    ChildRegressionSpec {
        mean: RegressionPoly::new(vec![170.0, -14.9, 0.475]),
        sd: RegressionPoly::new(vec![70.0, -6.2, 0.20]),
    }
}

fn anchors() -> Vec<AnchorOverride> {
    vec![
        AnchorOverride {
            age: 8,
            predicted_mean: 85.74,
            predicted_sd: 31.23,
        },
        AnchorOverride {
            age: 12,
            predicted_mean: 56.33,
            predicted_sd: 21.41,
        },
    ]
}

fn timed_engine() -> NormEngine {
    let spec = EngineSpec {
        adult_bands: vec![
            AgeBand::new(16, 19, 53.92, 20.12),
            AgeBand::new(20, 54, 60.0, 22.0),
            AgeBand::new(55, 89, 95.0, 35.0),
        ],
        child_regression: regression(),
        anchors: anchors(),
        child_age_min: 4,
        child_age_max: 15,
        child_band_groups: vec![
            ChildAgeBandGroup {
                age_min: 4,
                age_max: 7,
            },
            ChildAgeBandGroup {
                age_min: 8,
                age_max: 11,
            },
            ChildAgeBandGroup {
                age_min: 12,
                age_max: 15,
            },
        ],
        reversed: true,
    };
    NormEngine::build(&spec).expect("build timed engine")
}

/// Recompute the 8-11 child band the way the spec defines it, without going
/// through the builder: anchor at 8, regression at 9-11, averaged.
#[test]
fn child_band_matches_independent_average() {
    let engine = timed_engine();

    let reg_mean = |age: f64| 170.0 - 14.9 * age + 0.475 * age * age;
    let reg_sd = |age: f64| 70.0 - 6.2 * age + 0.20 * age * age;

    let means = [85.74, reg_mean(9.0), reg_mean(10.0), reg_mean(11.0)];
    let sds = [31.23, reg_sd(9.0), reg_sd(10.0), reg_sd(11.0)];
    let expected_mean = means.iter().sum::<f64>() / 4.0;
    let expected_sd = sds.iter().sum::<f64>() / 4.0;

    for age in [8.0, 9.0, 10.0, 11.0] {
        let result = engine.standardize(age, 80.0).unwrap();
        assert!(
            (result.predicted_mean - expected_mean).abs() < 1e-9,
            "age {age}: mean {} != {expected_mean}",
            result.predicted_mean
        );
        assert!((result.predicted_sd - expected_sd).abs() < 1e-9);
    }
}

#[test]
fn anchor_ages_use_anchor_values_exactly() {
    let rows = norm_core::build_child_year_rows(&regression(), &anchors(), 4, 15);
    let at_8 = rows.iter().find(|r| r.age == 8).unwrap();
    assert_eq!(at_8.predicted_mean, 85.74);
    assert_eq!(at_8.predicted_sd, 31.23);
    let at_12 = rows.iter().find(|r| r.age == 12).unwrap();
    assert_eq!(at_12.predicted_mean, 56.33);
    assert_eq!(at_12.predicted_sd, 21.41);
}

#[test]
fn derived_scores_are_consistent_with_z() {
    let engine = timed_engine();
    for (age, raw) in [(4.0, 130.0), (17.0, 53.92), (17.0, 74.04), (60.5, 150.0)] {
        let result = engine.standardize(age, raw).unwrap();
        assert_eq!(result.t_score, 50.0 + 10.0 * result.z_score);
        assert_eq!(result.percentile, standard_normal_cdf(result.z_score) * 100.0);
    }
}

proptest! {
    /// For a timed (reversed) test, a slower raw score can never standardize
    /// to a better score.
    #[test]
    fn reversed_scores_strictly_decrease_in_raw(
        age in 4.0f64..=89.0,
        raw in 20.0f64..=170.0,
        delta in 0.5f64..=30.0,
    ) {
        let engine = timed_engine();
        let a = engine.standardize(age, raw).unwrap();
        let b = engine.standardize(age, raw + delta).unwrap();
        prop_assert!(b.z_score < a.z_score);
        prop_assert!(b.t_score < a.t_score);
        prop_assert!(b.percentile < a.percentile);
    }

    /// Same age always resolves to the same band regardless of the raw score.
    #[test]
    fn band_lookup_depends_only_on_age(
        age in 4.0f64..=89.0,
        raw_a in 20.0f64..=170.0,
        raw_b in 20.0f64..=170.0,
    ) {
        let engine = timed_engine();
        let a = engine.standardize(age, raw_a).unwrap();
        let b = engine.standardize(age, raw_b).unwrap();
        prop_assert_eq!(a.predicted_mean, b.predicted_mean);
        prop_assert_eq!(a.predicted_sd, b.predicted_sd);
    }
}
