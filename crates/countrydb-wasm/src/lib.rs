//! countrydb-wasm — WebAssembly bindings for countrydb-core
//!
//! This crate exposes a small JS/WASM API built on top of `countrydb-core`.
//! The country dataset is compiled into the binary; the card list is
//! projected once and then filtered client-side on every input event.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Lookups: `get_country_count()`, `get_country_name(code)`, `get_country(code)`
//! - Regions: `list_regions()`, `countries_in_region("Europe")`
//! - Filtering: `all_cards()`, `card_regions()`, `filter_cards(query, region)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { card_regions, filter_cards } from 'countrydb-wasm';
//!
//! async function main() {
//!   await init();
//!   const options = card_regions();          // ["Africa", "Americas", ...]
//!   const result = filter_cards('ber', '');  // { cards: [...], summary: "Showing 3 of 24 countries", ... }
//!   console.log(result.summary);
//! }
//! main();
//! ```
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use countrydb_core::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::to_value;

// Projected once; the dataset never changes after load.
static CARDS: OnceLock<Vec<CountryCard>> = OnceLock::new();

/// Payload of [`filter_cards`].
#[derive(Debug, Serialize)]
pub struct FilterResult {
    pub cards: Vec<CountryCard>,
    pub shown: usize,
    pub total: usize,
    pub summary: String,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing countrydb WASM module...".into());

    match CountryDb::load() {
        Ok(db) => {
            let stats = db.stats();
            web_sys::console::log_1(
                &format!(
                    "✓ Loaded {} countries in {} regions",
                    stats.countries, stats.regions
                )
                .into(),
            );
        }
        Err(e) => web_sys::console::error_1(&format!("countrydb: {e}").into()),
    }
}

fn db() -> Result<&'static CountryDb, CountryDbError> {
    CountryDb::load()
}

fn cards() -> Result<&'static [CountryCard], CountryDbError> {
    if let Some(cards) = CARDS.get() {
        return Ok(cards);
    }
    let projected = db()?.countries().iter().map(to_card).collect();
    Ok(CARDS.get_or_init(|| projected))
}

fn filter_result(query: &str, region: &str) -> Result<FilterResult, CountryDbError> {
    let all = cards()?;
    let mut filter = CardFilter::new();
    filter.set_query(query);
    filter.set_region(region);
    let hits = filter.apply(all);
    Ok(FilterResult {
        shown: hits.len(),
        total: all.len(),
        summary: format!("Showing {} of {} countries", hits.len(), all.len()),
        cards: hits,
    })
}

fn js_err(e: CountryDbError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(JsValue::from)
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_country_count() -> Result<usize, JsValue> {
    Ok(db().map_err(js_err)?.countries().len())
}

/// Common name for a code, `undefined` when unknown; throws if the dataset
/// failed to load.
#[wasm_bindgen]
pub fn get_country_name(code: &str) -> Result<Option<String>, JsValue> {
    country_name(db(), code).map_err(js_err)
}

fn country_name(
    db: Result<&CountryDb, CountryDbError>,
    code: &str,
) -> Result<Option<String>, CountryDbError> {
    Ok(db?.find_by_code(code).map(|c| c.name().to_string()))
}

/// Detail view for a code, or `null` when the code is unknown.
#[wasm_bindgen]
pub fn get_country(code: &str) -> Result<JsValue, JsValue> {
    match db().map_err(js_err)?.find_by_code(code) {
        Some(country) => to_js(&CountryView::from(country)),
        None => Ok(JsValue::NULL),
    }
}

/* --------------------------------------------------------------------------
   Regions
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn list_regions() -> Result<js_sys::Array, JsValue> {
    let array = js_sys::Array::new();
    for region in db().map_err(js_err)?.regions() {
        array.push(&JsValue::from_str(&region));
    }
    Ok(array)
}

#[wasm_bindgen]
pub fn countries_in_region(region: &str) -> Result<JsValue, JsValue> {
    let cards: Vec<CountryCard> = db()
        .map_err(js_err)?
        .find_by_region(region)
        .into_iter()
        .map(to_card)
        .collect();
    to_js(&cards)
}

/* --------------------------------------------------------------------------
   Card Filtering
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn all_cards() -> Result<JsValue, JsValue> {
    to_js(cards().map_err(js_err)?)
}

/// Region selector options for the full card list.
#[wasm_bindgen]
pub fn card_regions() -> Result<JsValue, JsValue> {
    to_js(&available_regions(cards().map_err(js_err)?))
}

/// Cards matching `query` (name or capital, case-insensitive) and `region`
/// (exact; empty for all), plus a "Showing X of Y" summary.
#[wasm_bindgen]
pub fn filter_cards(query: &str, region: &str) -> Result<JsValue, JsValue> {
    to_js(&filter_result(query, region).map_err(js_err)?)
}

#[wasm_bindgen(js_name = formatPopulation)]
pub fn format_population_js(n: f64) -> String {
    // Saturating cast: NaN and negatives become 0.
    format_population(n.max(0.0) as u64)
}
