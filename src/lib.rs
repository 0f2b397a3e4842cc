//! Workspace facade: re-exports [`countrydb_core`] so the demos can use a
//! single import path.
pub use countrydb_core::*;
