// crates/countrydb-core/src/api.rs

//! JSON views for front ends (CLI `--json`, WASM).
//!
//! Views borrow from the database and add the display labels a detail page
//! needs, so consumers never re-derive them.
use crate::format::{format_area, format_population};
use crate::model::Country;
use crate::traits::CountrySearch;
use serde::Serialize;

/// Detail view of a country.
#[derive(Debug, Serialize)]
pub struct CountryView<'a> {
    pub name: &'a str,
    pub official_name: &'a str,
    pub cca2: &'a str,
    pub cca3: &'a str,
    pub region: &'a str,
    pub subregion: Option<&'a str>,
    pub population: u64,
    pub population_label: String,
    pub capital: Option<&'a str>,
    pub area: Option<f64>,
    pub area_label: Option<String>,
    pub languages: String,
    pub currencies: String,
    pub flag: &'a str,
    pub flag_alt: String,
    pub href: String,
}

impl<'a> From<&'a Country> for CountryView<'a> {
    fn from(c: &'a Country) -> Self {
        CountryView {
            name: c.name(),
            official_name: c.official_name(),
            cca2: c.cca2(),
            cca3: c.cca3(),
            region: c.region(),
            subregion: c.subregion(),
            population: c.population,
            population_label: format_population(c.population),
            capital: c.capital(),
            area: c.area,
            area_label: c.area.map(format_area),
            languages: c.languages_label(),
            currencies: c.currencies_label(),
            flag: c.flag_png(),
            flag_alt: c.flag_alt(),
            href: format!("/country/{}", c.cca2),
        }
    }
}

/// A region with the number of countries in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionView {
    pub name: String,
    pub countries: usize,
}

/// Every region of `db` with its country count, ascending by name.
pub fn region_views<S: CountrySearch + ?Sized>(db: &S) -> Vec<RegionView> {
    db.regions()
        .into_iter()
        .map(|name| RegionView {
            countries: db.find_by_region(&name).len(),
            name,
        })
        .collect()
}
