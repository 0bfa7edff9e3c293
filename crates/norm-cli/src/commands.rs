use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use tracing::{debug, info_span};

use norm_cli::summary::apply_table_style;
use norm_cli::types::ScoreReport;
use norm_core::NormEngine;
use norm_model::{DomainError, ScoreQuery};
use norm_standards::{TestDefinition, load_default_registry};

use crate::cli::ScoreArgs;

/// Standardize one raw score against the bundled norms.
pub fn run_score(args: &ScoreArgs) -> Result<ScoreReport> {
    let span = info_span!("score", test = %args.test);
    let _guard = span.enter();

    let registry = load_default_registry().context("load bundled norms")?;
    let definition = registry.get(&args.test).ok_or_else(|| {
        anyhow!(
            "unknown test '{}' (run `neuronorm tests` to list the bundled tests)",
            args.test
        )
    })?;
    let engine = definition
        .build_engine()
        .with_context(|| format!("build engine for {}", definition.id))?;
    debug!(
        test = %definition.id,
        reversed = definition.reversed,
        "engine ready"
    );

    let query = ScoreQuery {
        age: args.age,
        raw_score: args.raw,
    };
    let report = report_for(definition, &engine, &query)?;
    Ok(report)
}

fn report_for(
    definition: &TestDefinition,
    engine: &NormEngine,
    query: &ScoreQuery,
) -> Result<ScoreReport, DomainError> {
    let result = engine.standardize_query(query)?;
    let band = engine.table().band_for_age(query.age)?;
    Ok(ScoreReport {
        test_id: definition.id.clone(),
        test_name: definition.name.clone(),
        unit: definition.unit.clone(),
        reversed: definition.reversed,
        band_min: band.age_min,
        band_max: band.age_max,
        result,
    })
}

/// Print the bundled test definitions.
pub fn run_tests() -> Result<()> {
    let registry = load_default_registry().context("load bundled norms")?;
    let mut table = Table::new();
    table.set_header(vec!["Test", "Name", "Unit", "Direction", "Ages"]);
    apply_table_style(&mut table);
    for definition in registry.definitions() {
        let engine = definition
            .build_engine()
            .with_context(|| format!("build engine for {}", definition.id))?;
        let (min, max) = engine.domain();
        let direction = if definition.reversed {
            "lower is better"
        } else {
            "higher is better"
        };
        table.add_row(vec![
            definition.id.clone(),
            definition.name.clone(),
            definition.unit.clone(),
            direction.to_string(),
            format!("{min}-{max}"),
        ]);
    }
    println!("{table}");
    Ok(())
}
