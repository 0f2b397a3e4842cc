// crates/countrydb-core/src/raw.rs

//! Raw country structures as they come from the JSON source
//! (REST Countries v3.1 field names).
//!
//! Everything optional in the source is optional here; the strict
//! [`Country`](crate::Country) is produced by [`crate::model::from_raw`].
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

/// Object entries in source order; `null` values are kept as `None`.
pub type EntriesRaw<T> = Vec<(String, Option<T>)>;

#[derive(Debug, Deserialize)]
pub struct CountryNameRaw {
    #[serde(default)]
    pub common: Option<String>,
    #[serde(default)]
    pub official: Option<String>,
}

/// {
///   "png": "https://flagcdn.com/w320/de.png",
///   "svg": "https://flagcdn.com/de.svg",
///   "alt": "The flag of Germany ..."
/// }
#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Raw country structure from JSON.
/// Unknown fields (timezones, borders, latlng, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: CountryNameRaw,
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    /// Kept as a JSON number so negative or fractional values can be
    /// reported instead of failing the whole parse.
    #[serde(default)]
    pub population: Option<serde_json::Number>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub flags: FlagsRaw,
    /// languages: { "deu": "German", ... }; `null` values are tolerated.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub languages: Option<EntriesRaw<String>>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub currencies: Option<EntriesRaw<CurrencyRaw>>,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// Reads a JSON object into a list of entries without reordering its keys.
fn ordered_entries<'de, D, T>(deserializer: D) -> Result<Option<EntriesRaw<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct Entries<T>(EntriesRaw<T>);

    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Entries<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, Option<T>>()? {
                entries.push(entry);
            }
            Ok(Entries(entries))
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(EntriesVisitor(PhantomData))
        }
    }

    Ok(Option::<Entries<T>>::deserialize(deserializer)?.map(|e| e.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_entries_keep_source_order() {
        let raw: CountryRaw = serde_json::from_str(
            r#"{"name": {"common": "Switzerland"},
                "languages": {"gsw": "Swiss German", "fra": "French", "roh": null}}"#,
        )
        .unwrap();
        assert_eq!(
            raw.languages.unwrap(),
            vec![
                ("gsw".to_string(), Some("Swiss German".to_string())),
                ("fra".to_string(), Some("French".to_string())),
                ("roh".to_string(), None),
            ]
        );
        assert!(raw.currencies.is_none());
    }

    #[test]
    fn explicit_null_map_is_absent() {
        let raw: CountryRaw =
            serde_json::from_str(r#"{"name": {"common": "X"}, "languages": null}"#).unwrap();
        assert!(raw.languages.is_none());
    }
}
