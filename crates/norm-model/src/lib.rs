pub mod band;
pub mod error;
pub mod regression;
pub mod score;

pub use band::{AgeBand, ChildAgeBandGroup, ChildAgeYearRow, NormBandTable};
pub use error::{ConfigError, DomainError};
pub use regression::{AnchorOverride, ChildRegressionSpec, RegressionPoly};
pub use score::{ScoreQuery, ScoreResult};
