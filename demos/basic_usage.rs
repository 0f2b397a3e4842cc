//! Basic usage example for countrydb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country dataset
//! - Look countries up by two- or three-letter code
//! - Group countries by region
//! - Project countries into display cards

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Basic Usage Example ===\n");

    println!("Loading country dataset...");
    let db = CountryDb::load()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: Get all countries
    println!("--- Example 1: List all countries ---");
    let countries = db.countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.cca2());
    }
    println!("... and {} more\n", countries.len().saturating_sub(5));

    // Example 2: Find a specific country
    println!("--- Example 2: Find country by code ---");
    for code in ["us", "DEU", "jp"] {
        if let Some(country) = db.find_by_code(code) {
            println!("{code} -> {} ({})", country.name(), country.official_name());
            println!("  Capital: {}", country.capital_label());
            println!("  Population: {}", format_population(country.population()));
            println!("  Languages: {}", country.languages_label());
            println!("  Currencies: {}", country.currencies_label());
            if let Some(area) = country.area() {
                println!("  Area: {}", format_area(area));
            }
        }
    }
    println!();

    // Example 3: Regions
    println!("--- Example 3: Countries per region ---");
    for region in region_views(db) {
        println!("{}: {}", region.name, region.countries);
    }
    println!();

    // Example 4: One region
    println!("--- Example 4: Countries in Oceania ---");
    for country in db.find_by_region("Oceania") {
        println!("- {} ({})", country.name(), country.region_label());
    }
    println!();

    // Example 5: Using the cache
    println!("--- Example 5: Cache usage ---");
    let start = std::time::Instant::now();
    let again = CountryDb::load()?;
    println!("Second load (from cache): {:?}", start.elapsed());
    println!("Same instance: {}", std::ptr::eq(db, again));
    println!();

    // Example 6: Cards
    println!("--- Example 6: Display cards ---");
    let cards: Vec<CountryCard> = db.countries().iter().map(to_card).collect();
    for card in cards.iter().take(3) {
        println!(
            "{} · {} · {} · Pop. {}",
            card.name,
            card.region,
            card.capital.as_deref().unwrap_or("—"),
            format_population(card.population)
        );
    }

    let stats = db.stats();
    println!(
        "\nTotal: {} countries in {} regions",
        stats.countries, stats.regions
    );
    println!("\n=== Example completed successfully ===");
    Ok(())
}
