// crates/countrydb-core/src/card.rs
use crate::model::Country;
use crate::traits::CardFields;
use serde::{Deserialize, Serialize};

/// Minimal projection of a [`Country`] for list and grid presentation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCard {
    pub name: String,
    pub cca2: String,
    pub region: String,
    pub population: u64,
    pub capital: Option<String>,
    /// PNG flag reference.
    pub flag: String,
}

/// Projects a country into its display card. Pure and total.
pub fn to_card(country: &Country) -> CountryCard {
    CountryCard {
        name: country.name.common.clone(),
        cca2: country.cca2.clone(),
        region: country.region.clone(),
        population: country.population,
        capital: country.capital().map(str::to_string),
        flag: country.flags.png.clone(),
    }
}

impl From<&Country> for CountryCard {
    fn from(country: &Country) -> Self {
        to_card(country)
    }
}

impl CountryCard {
    /// Relative link to the country's detail page.
    pub fn href(&self) -> String {
        format!("/country/{}", self.cca2)
    }
}

impl CardFields for CountryCard {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn capital_str(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    fn region_str(&self) -> &str {
        &self.region
    }
}
