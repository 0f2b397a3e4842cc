// crates/countrydb-core/src/model/convert.rs
use crate::error::{CountryDbError, Result};
use crate::model::{Country, CountryDb, CountryName, Currency, Flags};
use crate::raw::{CountriesRaw, CountryRaw};
use std::collections::HashSet;
use tracing::debug;

/// **Standard Converter:** Raw -> strict `CountryDb`.
///
/// Validates every record and rejects duplicate codes. The first problem
/// found aborts the conversion; there is no partial dataset.
pub fn from_raw(raw_countries: CountriesRaw) -> Result<CountryDb> {
    let mut countries = Vec::with_capacity(raw_countries.len());
    let mut seen_codes: HashSet<String> = HashSet::new();

    for (index, c_raw) in raw_countries.into_iter().enumerate() {
        let country = convert_country(index, c_raw)?;

        for code in [&country.cca2, &country.cca3] {
            if !seen_codes.insert(code.to_ascii_uppercase()) {
                return Err(CountryDbError::DuplicateCode(code.clone()));
            }
        }
        countries.push(country);
    }

    debug!(countries = countries.len(), "converted raw country records");
    Ok(CountryDb { countries })
}

fn convert_country(index: usize, c_raw: CountryRaw) -> Result<Country> {
    let invalid = |reason: &str| CountryDbError::Invalid {
        index,
        reason: reason.to_string(),
    };

    let common = non_empty(c_raw.name.common).ok_or_else(|| invalid("missing common name"))?;
    let official = non_empty(c_raw.name.official).unwrap_or_else(|| common.clone());
    let cca2 = non_empty(c_raw.cca2).ok_or_else(|| invalid("missing cca2 code"))?;
    let cca3 = non_empty(c_raw.cca3).ok_or_else(|| invalid("missing cca3 code"))?;
    let region = non_empty(c_raw.region).ok_or_else(|| invalid("missing region"))?;

    // Must be a non-negative integer; 1.5 or -3 are rejected.
    let population = c_raw
        .population
        .as_ref()
        .and_then(serde_json::Number::as_u64)
        .ok_or_else(|| invalid("population must be a non-negative integer"))?;

    if let Some(area) = c_raw.area {
        if !area.is_finite() || area < 0.0 {
            return Err(invalid("area must be a finite, non-negative number"));
        }
    }

    let png = non_empty(c_raw.flags.png)
        .or_else(|| c_raw.flags.svg.clone().filter(|s| !s.trim().is_empty()))
        .ok_or_else(|| invalid("missing flag image"))?;

    let languages = c_raw.languages.map(|entries| {
        entries
            .into_iter()
            .filter_map(|(code, name)| name.map(|n| (code, n)))
            .collect::<Vec<_>>()
    });

    let currencies = c_raw.currencies.map(|entries| {
        entries
            .into_iter()
            .filter_map(|(code, cur)| {
                let cur = cur?;
                Some((
                    code,
                    Currency {
                        name: cur.name?,
                        symbol: cur.symbol.unwrap_or_default(),
                    },
                ))
            })
            .collect::<Vec<_>>()
    });

    Ok(Country {
        name: CountryName { common, official },
        cca2,
        cca3,
        region,
        subregion: non_empty(c_raw.subregion),
        population,
        capital: c_raw.capital.unwrap_or_default(),
        area: c_raw.area,
        flags: Flags {
            png,
            svg: c_raw.flags.svg,
            alt: c_raw.flags.alt,
        },
        languages,
        currencies,
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}
