// crates/countrydb-core/src/error.rs

use thiserror::Error;

/// Errors raised while building a [`CountryDb`](crate::CountryDb).
///
/// Lookups never fail: an unknown code or region is reported as `None` or an
/// empty list. Every variant here describes a dataset that could not be
/// loaded, which callers treat as fatal at startup.
#[derive(Debug, Error)]
pub enum CountryDbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record was readable but violates the dataset invariants.
    #[error("invalid country record #{index}: {reason}")]
    Invalid { index: usize, reason: String },

    /// Two records share a two- or three-letter code (case-insensitive).
    #[error("duplicate country code: {0}")]
    DuplicateCode(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// [`CountryDb::init_from_path`](crate::CountryDb::init_from_path) was
    /// called after the process-wide dataset had already been loaded.
    #[error("the country dataset is already initialized")]
    AlreadyInitialized,
}

pub type Result<T, E = CountryDbError> = std::result::Result<T, E>;
