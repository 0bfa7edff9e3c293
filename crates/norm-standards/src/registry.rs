use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::definition::TestDefinition;
use crate::loaders::{default_norms_root, load_test_definition, test_directories};

/// All bundled test definitions, keyed by test id.
#[derive(Debug, Clone, Default)]
pub struct NormRegistry {
    tests: BTreeMap<String, TestDefinition>,
}

impl NormRegistry {
    pub fn get(&self, id: &str) -> Option<&TestDefinition> {
        self.tests.get(id)
    }

    /// Definitions in id order.
    pub fn definitions(&self) -> impl Iterator<Item = &TestDefinition> {
        self.tests.values()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.tests.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// Load every test definition under the given norms root.
pub fn load_registry(root: &Path) -> Result<NormRegistry> {
    let mut tests = BTreeMap::new();
    for dir in test_directories(root)? {
        let definition = load_test_definition(&dir)
            .with_context(|| format!("load test definition: {}", dir.display()))?;
        if let Some(previous) = tests.insert(definition.id.clone(), definition) {
            bail!("duplicate test id in norms directory: {}", previous.id);
        }
    }
    if tests.is_empty() {
        bail!("no test definitions found under {}", root.display());
    }
    Ok(NormRegistry { tests })
}

/// Load the registry from the bundled `norms/` directory.
pub fn load_default_registry() -> Result<NormRegistry> {
    load_registry(&default_norms_root())
}
