// crates/countrydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (embedded bytes, files, decompression) and
//! hands the parsed payload to [`model::from_raw`](crate::model::from_raw).
//!
//! The bundled dataset is compiled into the crate, so [`CountryDb::load`]
//! never touches the filesystem. The first successful load is kept in a
//! process-wide cell; concurrent first callers block on the same
//! initialization and all observe the fully loaded value.

use crate::error::Result;
use crate::model::{self, Country, CountryDb};
use crate::raw::CountriesRaw;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

#[cfg(feature = "json")]
mod common_io;

#[cfg(feature = "json")]
use crate::error::CountryDbError;
#[cfg(feature = "json")]
use std::path::Path;

// Single in-process cache so we only deserialize once per process.
static COUNTRY_DB_CACHE: OnceCell<CountryDb> = OnceCell::new();

/// The dataset shipped with the crate.
pub static BUNDLED_DATASET: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/countries.json"
));

/// Returns every country of the process-wide dataset, in source order.
///
/// Shorthand for `CountryDb::load()?.countries()`.
pub fn load_all() -> Result<&'static [Country]> {
    Ok(CountryDb::load()?.countries.as_slice())
}

impl CountryDb {
    /// Load the process-wide database.
    ///
    /// - The first call parses the bundled dataset (or whatever
    ///   [`CountryDb::init_from_path`] installed) and caches it.
    /// - Later calls return the same `&'static` instance without re-parsing.
    ///
    /// An error here means the bundled data is malformed; callers should
    /// treat it as fatal at startup.
    pub fn load() -> Result<&'static Self> {
        COUNTRY_DB_CACHE.get_or_try_init(|| {
            let db = Self::from_json_str(BUNDLED_DATASET)?;
            info!(countries = db.countries.len(), "bundled country dataset loaded");
            Ok(db)
        })
    }

    /// Installs a custom dataset as the process-wide database.
    ///
    /// Must run before the first [`CountryDb::load`]; afterwards the cache is
    /// frozen and this returns [`CountryDbError::AlreadyInitialized`].
    #[cfg(feature = "json")]
    pub fn init_from_path(path: impl AsRef<Path>) -> Result<&'static Self> {
        let path = path.as_ref();
        if COUNTRY_DB_CACHE.get().is_some() {
            return Err(CountryDbError::AlreadyInitialized);
        }
        let db = Self::load_from_path(path)?;
        COUNTRY_DB_CACHE
            .set(db)
            .map_err(|_| CountryDbError::AlreadyInitialized)?;
        info!(path = %path.display(), "custom country dataset installed");
        Self::load()
    }

    /// Reads a dataset from disk (`.json`, or `.json.gz` with `compact`).
    ///
    /// The result is an owned database; the process-wide cache is untouched.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading country dataset");
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader)
    }

    /// Parses and validates a dataset from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        model::from_raw(raw)
    }

    /// Parses and validates a dataset held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        debug!(bytes = json.len(), "parsing country dataset");
        let raw: CountriesRaw = serde_json::from_str(json)?;
        model::from_raw(raw)
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountryDbError;
    use std::io::Cursor;

    #[test]
    fn load_returns_the_same_instance() {
        let a = CountryDb::load().unwrap();
        let b = CountryDb::load().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
    }

    #[test]
    fn load_all_matches_load() {
        let all = load_all().unwrap();
        assert_eq!(all, CountryDb::load().unwrap().countries.as_slice());
        assert!(!all.is_empty());
    }

    #[test]
    fn init_after_load_is_rejected() {
        CountryDb::load().unwrap();
        #[cfg(feature = "json")]
        {
            let path = CountryDb::default_data_dir().join(CountryDb::default_dataset_filename());
            assert!(matches!(
                CountryDb::init_from_path(path),
                Err(CountryDbError::AlreadyInitialized)
            ));
        }
    }

    #[test]
    fn from_reader_parses_bundled_bytes() {
        let db = CountryDb::from_reader(Cursor::new(BUNDLED_DATASET.as_bytes())).unwrap();
        assert_eq!(db.country_count(), CountryDb::load().unwrap().country_count());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            CountryDb::from_json_str("{ not json"),
            Err(CountryDbError::Json(_))
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_file_is_not_found() {
        let err = CountryDb::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CountryDbError::NotFound(_)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn load_from_path_reads_plain_json() {
        let path = CountryDb::default_data_dir().join(CountryDb::default_dataset_filename());
        let db = CountryDb::load_from_path(path).unwrap();
        assert_eq!(&db, CountryDb::load().unwrap());
    }
}
