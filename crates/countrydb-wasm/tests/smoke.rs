use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use countrydb_wasm::{format_population_js, get_country_count, get_country_name};

#[wasm_bindgen_test]
fn can_get_country_count() {
    #[cfg(target_arch = "wasm32")]
    countrydb_wasm::start();

    let count = get_country_count().unwrap_or(0);
    assert!(count > 0, "expected at least one country, got {count}");
}

#[wasm_bindgen_test]
fn can_lookup_country_name_by_either_code() {
    #[cfg(target_arch = "wasm32")]
    countrydb_wasm::start();

    assert_eq!(get_country_name("us").unwrap().as_deref(), Some("United States"));
    assert_eq!(get_country_name("USA").unwrap().as_deref(), Some("United States"));
    assert_eq!(get_country_name("zz").unwrap(), None);
}

#[wasm_bindgen_test]
fn formats_population() {
    assert_eq!(format_population_js(83_240_525.0), "83,240,525");
}
