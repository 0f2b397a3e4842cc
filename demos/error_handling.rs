//! Error handling example for countrydb-rs
//!
//! Lookups never fail: unknown codes and regions come back as `None` or an
//! empty list. Only loading a dataset can fail.

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading the dataset with error handling ---");
    match CountryDb::load() {
        Ok(db) => {
            println!("✓ Dataset loaded successfully");
            println!("  Countries: {}", db.countries().len());
        }
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    }
    println!();

    let db = CountryDb::load()?;

    // Example 2: Handling missing countries
    println!("--- Example 2: Searching for non-existent countries ---");
    for code in ["XX", "yy", "ZZZ"] {
        match db.find_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.cca2()),
            None => println!("  Not found: {code}"),
        }
    }
    println!();

    // Example 3: Handling malformed codes
    println!("--- Example 3: Handling malformed codes ---");
    for code in ["", "A", "ABCD", "123"] {
        match db.find_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.cca2()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 4: Region names are case-sensitive
    println!("--- Example 4: Region lookups ---");
    for region in ["Europe", "europe", ""] {
        println!("  {region:?}: {} countries", db.find_by_region(region).len());
    }
    println!();

    // Example 5: Rejected datasets
    println!("--- Example 5: Invalid datasets ---");
    let broken = [
        ("not JSON", "{"),
        (
            "negative population",
            r#"[{"name": {"common": "X"}, "cca2": "XX", "cca3": "XXX", "region": "Nowhere", "population": -1, "flags": {"png": "x.png"}}]"#,
        ),
        (
            "missing region",
            r#"[{"name": {"common": "X"}, "cca2": "XX", "cca3": "XXX", "population": 1, "flags": {"png": "x.png"}}]"#,
        ),
    ];
    for (label, json) in broken {
        match CountryDb::from_json_str(json) {
            Ok(_) => println!("  {label}: unexpectedly accepted"),
            Err(e) => println!("  {label}: {e}"),
        }
    }

    Ok(())
}
