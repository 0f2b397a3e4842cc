//! countrydb prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::api::{region_views, CountryView, RegionView};
pub use crate::card::{to_card, CountryCard};
pub use crate::common::DbStats;
pub use crate::error::{CountryDbError, Result};
pub use crate::filter::{available_regions, visible, CardFilter, CardGrid};
pub use crate::format::{format_area, format_population};
pub use crate::loader::load_all;
pub use crate::model::{Country, CountryDb, CountryName, Currency, Flags};
pub use crate::traits::{CardFields, CountrySearch};
