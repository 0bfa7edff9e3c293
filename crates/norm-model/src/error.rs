use thiserror::Error;

/// Construction-time failures: the normative table configuration itself is
/// wrong and must be fixed by whoever assembled it. An engine is never built
/// from a table that produced one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("age bands overlap: {first} and {second}")]
    BandOverlap { first: String, second: String },

    #[error("no band covers age {age} (table domain {min}-{max})")]
    CoverageGap { age: i64, min: i64, max: i64 },

    #[error("band group {age_min}-{age_max} matches no child rows")]
    EmptyBandGroup { age_min: i64, age_max: i64 },

    #[error("band {age_min}-{age_max} has non-positive standard deviation {sd}")]
    NonPositiveSd { age_min: i64, age_max: i64, sd: f64 },

    #[error("band has inverted age range: {age_min}-{age_max}")]
    InvertedBandRange { age_min: i64, age_max: i64 },

    #[error("normative table has no bands")]
    EmptyTable,
}

/// Per-query failures: the supplied age does not map to exactly one band.
/// Surfaced to the caller with the offending age and the valid bounds,
/// never clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("age {age} is outside the supported range {min}-{max}")]
    AgeOutOfRange { age: f64, min: i64, max: i64 },

    #[error("age {age} matched {matches} bands; the normative table is inconsistent")]
    AmbiguousAge { age: f64, matches: usize },
}
