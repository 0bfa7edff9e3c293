//! Bundled normative datasets.
//!
//! Each test ships as a directory under `norms/` with a TOML manifest (test
//! metadata, child regression, band grouping) and CSV tables (adult bands,
//! child anchors). The registry loads all of them and bridges to the
//! standardization engine in `norm-core`.

pub mod definition;
pub mod loaders;
pub mod registry;

pub use definition::TestDefinition;
pub use loaders::{default_norms_root, load_test_definition};
pub use registry::{NormRegistry, load_default_registry, load_registry};
