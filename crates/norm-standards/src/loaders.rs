use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use norm_model::{AgeBand, AnchorOverride};

use crate::definition::{NormsManifest, TestDefinition};

const NORMS_ENV_VAR: &str = "NEURONORM_NORMS_DIR";
const MANIFEST_FILE: &str = "norms.toml";
const ADULT_BANDS_FILE: &str = "adult_bands.csv";
const CHILD_ANCHORS_FILE: &str = "child_anchors.csv";

/// Root of the bundled `norms/` directory. Overridable via
/// `NEURONORM_NORMS_DIR` for deployments that ship their own tables.
pub fn default_norms_root() -> PathBuf {
    if let Ok(root) = std::env::var(NORMS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../norms")
}

/// Load one test's normative configuration from its directory
/// (`norms.toml` + `adult_bands.csv` + `child_anchors.csv`).
pub fn load_test_definition(dir: &Path) -> Result<TestDefinition> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let raw = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("read manifest: {}", manifest_path.display()))?;
    let manifest: NormsManifest = toml::from_str(&raw)
        .with_context(|| format!("parse manifest: {}", manifest_path.display()))?;

    if manifest.test.id.is_empty() {
        bail!("manifest {} has an empty test id", manifest_path.display());
    }
    if manifest.child.age_min > manifest.child.age_max {
        bail!(
            "manifest {} has an inverted child age range {}-{}",
            manifest_path.display(),
            manifest.child.age_min,
            manifest.child.age_max
        );
    }

    let adult_bands: Vec<AgeBand> = read_csv_records(&dir.join(ADULT_BANDS_FILE))?;
    let anchors: Vec<AnchorOverride> = read_csv_records(&dir.join(CHILD_ANCHORS_FILE))?;

    Ok(TestDefinition {
        id: manifest.test.id,
        name: manifest.test.name,
        unit: manifest.test.unit,
        reversed: manifest.test.reversed,
        adult_bands,
        child_regression: manifest.child.regression(),
        anchors,
        child_age_min: manifest.child.age_min,
        child_age_max: manifest.child.age_max,
        child_band_groups: manifest.child.groups(),
    })
}

fn read_csv_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.with_context(|| format!("parse record: {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Discover every test directory under the norms root.
pub(crate) fn test_directories(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("read norms root: {}", root.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() && path.join(MANIFEST_FILE).is_file() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
