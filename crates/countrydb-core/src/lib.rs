// crates/countrydb-core/src/lib.rs

//! # countrydb-core
//!
//! An in-memory database of world countries, loaded once from a bundled
//! JSON dataset and shared for the lifetime of the process.
//!
//! - [`CountryDb::load`] parses the bundled dataset on first use and caches it.
//! - [`CountrySearch`] provides code lookup, region grouping and region listing.
//! - [`to_card`] projects a [`Country`] into a minimal [`CountryCard`].
//! - [`filter`] narrows a card list by free text and region.
//!
//! ```rust
//! use countrydb_core::prelude::*;
//!
//! let db = CountryDb::load()?;
//! let de = db.find_by_code("de").expect("Germany is bundled");
//! assert_eq!(de.name(), "Germany");
//!
//! let cards: Vec<CountryCard> = db.countries().iter().map(to_card).collect();
//! let hits = visible(&cards, "berl", "");
//! assert_eq!(hits[0].name, "Germany");
//! # Ok::<(), countrydb_core::CountryDbError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod card;
pub mod common;
pub mod error;
pub mod filter;
pub mod format;
pub mod loader;
pub mod model;
pub mod search;
pub mod text;
pub mod traits;
// Loosely typed input shape; never leaves the loader.
#[doc(hidden)]
pub mod raw;

pub mod prelude;

// Re-exports
pub use crate::card::{to_card, CountryCard};
pub use crate::common::DbStats;
pub use crate::error::{CountryDbError, Result};
pub use crate::filter::{available_regions, visible, CardFilter, CardGrid};
pub use crate::format::{format_area, format_population};
pub use crate::loader::load_all;
pub use crate::model::{Country, CountryDb, CountryName, Currency, Flags};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{CardFields, CountrySearch};
