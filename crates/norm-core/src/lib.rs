pub mod child;
pub mod engine;
pub mod merge;
pub mod stats;

pub use child::{aggregate_band_groups, build_child_year_rows};
pub use engine::{EngineSpec, NormEngine};
pub use merge::merge_band_tables;
pub use stats::{erfc, standard_normal_cdf};
