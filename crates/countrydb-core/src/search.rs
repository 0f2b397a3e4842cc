// crates/countrydb-core/src/search.rs

use crate::common::DbStats;
use crate::model::{Country, CountryDb};
use crate::traits::{CardFields, CountrySearch};
use std::collections::BTreeSet;

impl CountrySearch for CountryDb {
    fn countries(&self) -> &[Country] {
        &self.countries
    }

    fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            regions: self.regions().len(),
        }
    }

    fn find_by_code(&self, code: &str) -> Option<&Country> {
        // Two-character inputs come from URLs in any case ("de", "De").
        let normalized = if code.chars().count() == 2 {
            code.to_uppercase()
        } else {
            code.to_string()
        };

        // Linear scan is fast (N < 300)
        self.countries.iter().find(|c| {
            c.cca2.eq_ignore_ascii_case(&normalized) || c.cca3.eq_ignore_ascii_case(&normalized)
        })
    }

    fn find_by_region(&self, region: &str) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.region == region)
            .collect()
    }

    fn regions(&self) -> Vec<String> {
        self.countries
            .iter()
            .map(|c| c.region.as_str())
            .filter(|r| !r.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl CardFields for Country {
    fn name_str(&self) -> &str {
        self.name()
    }

    fn capital_str(&self) -> Option<&str> {
        self.capital()
    }

    fn region_str(&self) -> &str {
        &self.region
    }
}
