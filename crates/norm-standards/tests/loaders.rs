use norm_standards::{load_default_registry, load_registry};

#[test]
fn loads_bundled_registry() {
    let registry = load_default_registry().expect("load bundled norms");
    assert_eq!(registry.ids(), vec!["letter_fluency", "tmt_a", "tmt_b"]);
}

#[test]
fn tmt_b_definition_matches_bundled_tables() {
    let registry = load_default_registry().expect("load bundled norms");
    let tmt_b = registry.get("tmt_b").expect("tmt_b definition");

    assert_eq!(tmt_b.name, "Trail Making Test, Part B");
    assert_eq!(tmt_b.unit, "seconds");
    assert!(tmt_b.reversed);
    assert_eq!(tmt_b.adult_bands.len(), 12);
    assert_eq!(tmt_b.child_age_min, 4);
    assert_eq!(tmt_b.child_age_max, 15);
    assert_eq!(tmt_b.child_band_groups.len(), 6);

    let first = &tmt_b.adult_bands[0];
    assert_eq!((first.age_min, first.age_max), (16, 19));
    assert_eq!(first.predicted_mean, 53.92);
    assert_eq!(first.predicted_sd, 20.12);

    let anchors: Vec<i64> = tmt_b.anchors.iter().map(|a| a.age).collect();
    assert_eq!(anchors, vec![8, 12]);
}

#[test]
fn every_bundled_test_builds_an_engine_covering_4_to_89() {
    let registry = load_default_registry().expect("load bundled norms");
    for definition in registry.definitions() {
        let engine = definition
            .build_engine()
            .unwrap_or_else(|e| panic!("{}: {e}", definition.id));
        assert_eq!(engine.domain(), (4, 89), "{}", definition.id);
    }
}

#[test]
fn adult_band_boundary_ages_return_fixed_rows() {
    let registry = load_default_registry().expect("load bundled norms");
    let tmt_b = registry.get("tmt_b").expect("tmt_b definition");
    let engine = tmt_b.build_engine().expect("build tmt_b engine");

    for band in &tmt_b.adult_bands {
        for age in [band.age_min, band.age_max] {
            let result = engine.standardize(age as f64, 60.0).unwrap();
            assert_eq!(result.predicted_mean, band.predicted_mean, "age {age}");
            assert_eq!(result.predicted_sd, band.predicted_sd, "age {age}");
        }
    }
}

#[test]
fn fluency_is_not_reversed() {
    let registry = load_default_registry().expect("load bundled norms");
    let fluency = registry.get("letter_fluency").expect("fluency definition");
    let engine = fluency.build_engine().expect("build fluency engine");

    // More words than the mean is above-average performance.
    let result = engine.standardize(30.0, 53.79).unwrap();
    assert!((result.z_score - 1.0).abs() < 1e-9);
    assert!(result.percentile > 80.0);
}

#[test]
fn missing_root_is_an_error() {
    let err = load_registry(std::path::Path::new("/nonexistent/norms")).unwrap_err();
    assert!(format!("{err:#}").contains("read norms root"));
}
