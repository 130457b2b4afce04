use thiserror::Error;

/// Errors produced by the engine.
///
/// Everything except `CorruptCatalog` is a per-request condition the caller
/// can recover from. `CorruptCatalog` only happens while building a catalog
/// from reference data and should abort startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("unknown food '{0}'")]
    UnknownFood(String),

    #[error("amount must be a positive number (got {0})")]
    InvalidAmount(f64),

    #[error("invalid target {field}: must be a non-negative number (got {value})")]
    InvalidTarget { field: &'static str, value: f64 },

    #[error("bad catalog entry: {0}")]
    CorruptCatalog(String),
}
