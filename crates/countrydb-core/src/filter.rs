// crates/countrydb-core/src/filter.rs

//! # Card Filter
//!
//! Narrows an already loaded card list by a free-text query and a selected
//! region. Both functions are pure: the criteria are passed in, never read
//! from shared state. [`CardGrid`] bundles a card list with its filter state
//! for front ends that re-render on every keystroke.

use crate::card::CountryCard;
use crate::traits::CardFields;
use std::collections::BTreeSet;

/// Cards that match both criteria, in input order.
///
/// A card is kept when (`query` is empty, or its name or capital contains
/// `query` case-insensitively) and (`region` is empty, or its region equals
/// `region` exactly).
pub fn visible<T: CardFields + Clone>(cards: &[T], query: &str, region: &str) -> Vec<T> {
    cards
        .iter()
        .filter(|c| c.matches_text(query) && c.in_region(region))
        .cloned()
        .collect()
}

/// Distinct non-empty regions of `cards`, ascending.
pub fn available_regions<T: CardFields>(cards: &[T]) -> Vec<String> {
    cards
        .iter()
        .map(CardFields::region_str)
        .filter(|r| !r.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The two filter criteria. Changing one never resets the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardFilter {
    query: String,
    region: String,
}

impl CardFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Selected region; empty means "all regions".
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
    }

    pub fn clear_region(&mut self) {
        self.region.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.region.is_empty()
    }

    pub fn apply<T: CardFields + Clone>(&self, cards: &[T]) -> Vec<T> {
        visible(cards, &self.query, &self.region)
    }
}

/// A card list plus its filter state and region options.
///
/// Region options are derived from the cards and recomputed only when the
/// card list is replaced, not when the criteria change.
#[derive(Clone, Debug, Default)]
pub struct CardGrid {
    cards: Vec<CountryCard>,
    regions: Vec<String>,
    filter: CardFilter,
}

impl CardGrid {
    pub fn new(cards: Vec<CountryCard>) -> Self {
        let regions = available_regions(&cards);
        Self {
            cards,
            regions,
            filter: CardFilter::default(),
        }
    }

    pub fn cards(&self) -> &[CountryCard] {
        &self.cards
    }

    /// Replaces the card list, keeping the current criteria.
    pub fn set_cards(&mut self, cards: Vec<CountryCard>) {
        self.regions = available_regions(&cards);
        self.cards = cards;
    }

    /// Region selector options.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn filter(&self) -> &CardFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut CardFilter {
        &mut self.filter
    }

    pub fn visible(&self) -> Vec<CountryCard> {
        self.filter.apply(&self.cards)
    }

    /// e.g. `"Showing 3 of 24 countries"`.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} countries",
            self.visible().len(),
            self.cards.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, region: &str, capital: Option<&str>) -> CountryCard {
        CountryCard {
            name: name.to_string(),
            cca2: name[..2].to_uppercase(),
            region: region.to_string(),
            population: 1,
            capital: capital.map(str::to_string),
            flag: format!("{name}.png"),
        }
    }

    fn sample() -> Vec<CountryCard> {
        vec![
            card("France", "Europe", Some("Paris")),
            card("Germany", "Europe", Some("Berlin")),
            card("Japan", "Asia", Some("Tokyo")),
        ]
    }

    fn names(cards: &[CountryCard]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn query_matches_capital() {
        assert_eq!(names(&visible(&sample(), "ber", "")), ["Germany"]);
    }

    #[test]
    fn region_selects_exactly() {
        assert_eq!(names(&visible(&sample(), "", "Asia")), ["Japan"]);
        assert!(visible(&sample(), "", "asia").is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(visible(&sample(), "z", "").is_empty());
    }

    #[test]
    fn empty_criteria_keep_everything_in_order() {
        assert_eq!(names(&visible(&sample(), "", "")), ["France", "Germany", "Japan"]);
    }

    #[test]
    fn both_criteria_must_hold() {
        assert_eq!(names(&visible(&sample(), "a", "Europe")), ["France", "Germany"]);
        assert!(visible(&sample(), "tokyo", "Europe").is_empty());
    }

    #[test]
    fn missing_capital_only_matches_by_name() {
        let cards = vec![card("Antarctica", "Antarctic", None)];
        assert!(visible(&cards, "paris", "").is_empty());
        assert_eq!(names(&visible(&cards, "ANTARC", "")), ["Antarctica"]);
    }

    #[test]
    fn available_regions_are_sorted_and_distinct() {
        let mut cards = sample();
        cards.push(card("Nowhere", "", None));
        assert_eq!(available_regions(&cards), ["Asia", "Europe"]);
        assert!(available_regions::<CountryCard>(&[]).is_empty());
    }

    #[test]
    fn criteria_are_independent() {
        let mut f = CardFilter::new();
        f.set_region("Europe");
        f.set_query("ger");
        assert_eq!(f.region(), "Europe");
        f.set_query("");
        assert_eq!(f.region(), "Europe");
        f.clear_region();
        assert_eq!(f.query(), "");
        assert!(!f.is_active());
    }

    #[test]
    fn grid_recomputes_regions_only_with_new_cards() {
        let mut grid = CardGrid::new(sample());
        assert_eq!(grid.regions(), ["Asia", "Europe"]);

        grid.filter_mut().set_region("Asia");
        assert_eq!(grid.regions(), ["Asia", "Europe"]);
        assert_eq!(names(&grid.visible()), ["Japan"]);
        assert_eq!(grid.summary(), "Showing 1 of 3 countries");

        grid.set_cards(vec![card("Kenya", "Africa", Some("Nairobi"))]);
        assert_eq!(grid.regions(), ["Africa"]);
        assert_eq!(grid.filter().region(), "Asia");
        assert_eq!(grid.summary(), "Showing 0 of 1 countries");
    }

    mod proptests {
        use crate::card::CountryCard;
        use crate::filter::visible;
        use proptest::prelude::*;

        fn arb_card() -> impl Strategy<Value = CountryCard> {
            (
                "[A-Za-z ]{1,12}",
                prop_oneof![
                    Just("Africa"),
                    Just("Americas"),
                    Just("Asia"),
                    Just("Europe"),
                    Just("Oceania"),
                ],
                proptest::option::of("[A-Za-z ]{1,10}"),
            )
                .prop_map(|(name, region, capital)| CountryCard {
                    cca2: "XX".to_string(),
                    flag: String::new(),
                    population: 0,
                    name,
                    region: region.to_string(),
                    capital,
                })
        }

        fn arb_region() -> impl Strategy<Value = String> {
            prop_oneof![Just(""), Just("Asia"), Just("Europe"), Just("europe")]
                .prop_map(str::to_string)
        }

        proptest! {
            #[test]
            fn filtering_twice_changes_nothing(
                cards in proptest::collection::vec(arb_card(), 0..20),
                query in "[a-zA-Z]{0,3}",
                region in arb_region(),
            ) {
                let once = visible(&cards, &query, &region);
                let twice = visible(&once, &query, &region);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn criteria_never_grow_the_list(
                cards in proptest::collection::vec(arb_card(), 0..20),
                query in "[a-zA-Z]{0,3}",
                region in arb_region(),
            ) {
                let all = visible(&cards, "", "");
                prop_assert_eq!(&all, &cards);
                prop_assert!(visible(&cards, &query, "").len() <= all.len());
                prop_assert!(visible(&cards, "", &region).len() <= all.len());
                prop_assert!(
                    visible(&cards, &query, &region).len()
                        <= visible(&cards, &query, "").len()
                );
            }

            #[test]
            fn result_is_an_ordered_subsequence(
                cards in proptest::collection::vec(arb_card(), 0..20),
                query in "[a-zA-Z]{0,3}",
            ) {
                let out = visible(&cards, &query, "");
                let mut rest = cards.iter();
                for c in &out {
                    prop_assert!(rest.any(|x| x == c));
                }
            }
        }
    }
}
