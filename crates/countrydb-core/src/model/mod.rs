// crates/countrydb-core/src/model/mod.rs

//! # Domain Model
//!
//! Strict, validated country records. Built once from
//! [`CountryRaw`](crate::raw::CountryRaw) by [`from_raw`] and never mutated
//! afterwards.
use serde::{Deserialize, Serialize};

pub mod convert;

pub use convert::from_raw;

/// Placeholder shown for a missing detail field.
pub const MISSING: &str = "—";

/// The master database struct. Countries keep the order of the source file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryDb {
    pub(crate) countries: Vec<Country>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub png: String,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// A Country entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub cca2: String,
    pub cca3: String,
    pub region: String,
    pub subregion: Option<String>,
    pub population: u64,
    /// First entry is the capital shown on cards; empty when the source has none.
    pub capital: Vec<String>,
    /// km²
    pub area: Option<f64>,
    pub flags: Flags,
    /// (language code, language name) in source order; `None` when the
    /// source has no `languages` object.
    pub languages: Option<Vec<(String, String)>>,
    /// (currency code, currency) in source order; `None` when absent.
    pub currencies: Option<Vec<(String, Currency)>>,
}

impl CountryDb {
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    pub fn cca2(&self) -> &str {
        &self.cca2
    }

    pub fn cca3(&self) -> &str {
        &self.cca3
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref()
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    /// The capital used for display: the first entry of the capital list.
    pub fn capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    pub fn capitals(&self) -> &[String] {
        &self.capital
    }

    pub fn area(&self) -> Option<f64> {
        self.area
    }

    pub fn flag_png(&self) -> &str {
        &self.flags.png
    }

    /// Alt text for the flag image, falling back to "Flag of <name>".
    pub fn flag_alt(&self) -> String {
        self.flags
            .alt
            .clone()
            .unwrap_or_else(|| format!("Flag of {}", self.name()))
    }

    /// Capital for a detail page, or a dash.
    pub fn capital_label(&self) -> &str {
        self.capital().unwrap_or(MISSING)
    }

    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies
            .as_deref()?
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, cur)| cur)
    }

    /// Language names joined with `", "` in source order.
    ///
    /// A dash when the record has no languages object; an empty object
    /// renders as an empty string.
    pub fn languages_label(&self) -> String {
        match &self.languages {
            Some(langs) => langs
                .iter()
                .map(|(_, name)| name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            None => MISSING.to_string(),
        }
    }

    /// Currencies as `"<name> (<symbol>)"` joined with `", "`, or a dash.
    pub fn currencies_label(&self) -> String {
        match &self.currencies {
            Some(currencies) => currencies
                .iter()
                .map(|(_, c)| format!("{} ({})", c.name, c.symbol))
                .collect::<Vec<_>>()
                .join(", "),
            None => MISSING.to_string(),
        }
    }

    /// Region, followed by `" · <subregion>"` when known.
    pub fn region_label(&self) -> String {
        match self.subregion() {
            Some(sub) => format!("{} · {}", self.region, sub),
            None => self.region.clone(),
        }
    }
}
