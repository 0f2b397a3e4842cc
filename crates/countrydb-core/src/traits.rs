// crates/countrydb-core/src/traits.rs
use crate::common::DbStats;
use crate::model::Country;
use crate::text::contains_folded;

/// Text fields consulted by the card filter.
///
/// Implemented by [`CountryCard`](crate::CountryCard) and by [`Country`], so
/// the same predicate narrows either list.
///
/// # Examples
/// ```rust
/// use countrydb_core::traits::CardFields;
///
/// struct Place(&'static str, &'static str);
/// impl CardFields for Place {
///     fn name_str(&self) -> &str { self.0 }
///     fn capital_str(&self) -> Option<&str> { None }
///     fn region_str(&self) -> &str { self.1 }
/// }
///
/// assert!(Place("Germany", "Europe").matches_text("GERM"));
/// assert!(Place("Germany", "Europe").in_region("Europe"));
/// assert!(!Place("Germany", "Europe").in_region("europe"));
/// ```
pub trait CardFields {
    /// The display name.
    fn name_str(&self) -> &str;

    /// The display capital, if any.
    fn capital_str(&self) -> Option<&str>;

    fn region_str(&self) -> &str;

    /// Case-insensitive substring match on name or capital.
    ///
    /// An empty query matches everything.
    #[inline]
    fn matches_text(&self, query: &str) -> bool {
        query.is_empty()
            || contains_folded(self.name_str(), query)
            || self
                .capital_str()
                .is_some_and(|cap| contains_folded(cap, query))
    }

    /// Exact, case-sensitive region match. An empty region matches everything.
    #[inline]
    fn in_region(&self, region: &str) -> bool {
        region.is_empty() || self.region_str() == region
    }
}

/// The lookup operations available on a country dataset.
pub trait CountrySearch {
    /// All countries, in dataset order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countrydb_core::{CountryDb, CountrySearch};
    ///
    /// let db = CountryDb::load().unwrap();
    /// for country in db.countries().iter().take(5) {
    ///     println!("- {} ({})", country.name(), country.cca2());
    /// }
    /// ```
    fn countries(&self) -> &[Country];

    fn stats(&self) -> DbStats;

    /// Looks a country up by two- or three-letter code.
    ///
    /// Inputs of exactly two characters are upper-cased first; the
    /// comparison against both code fields is ASCII case-insensitive, so
    /// non-ASCII look-alikes (such as the Kelvin sign `K`) never match.
    /// Unknown or malformed codes yield `None`.
    ///
    /// ```no_run
    /// use countrydb_core::{CountryDb, CountrySearch};
    ///
    /// let db = CountryDb::load().unwrap();
    /// assert_eq!(db.find_by_code("jp").map(|c| c.name()), Some("Japan"));
    /// assert_eq!(db.find_by_code("jpn").map(|c| c.name()), Some("Japan"));
    /// assert!(db.find_by_code("zz").is_none());
    /// ```
    fn find_by_code(&self, code: &str) -> Option<&Country>;

    /// Countries whose region equals `region` exactly (case-sensitive),
    /// in dataset order.
    fn find_by_region(&self, region: &str) -> Vec<&Country>;

    /// Distinct non-empty regions, ascending.
    fn regions(&self) -> Vec<String>;
}
