//! CLI library components for the neuronorm tool.

pub mod logging;
pub mod summary;
pub mod types;
