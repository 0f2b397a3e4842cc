//! Card filtering example for countrydb-rs
//!
//! Simulates a country grid: the card list is built once, then the search box
//! and region selector change independently.

use countrydb_rs::prelude::*;

fn print_grid(grid: &CardGrid) {
    let f = grid.filter();
    println!("query={:?} region={:?}", f.query(), f.region());
    for card in grid.visible() {
        println!(
            "  {} ({}) · {}",
            card.name,
            card.region,
            card.capital.as_deref().unwrap_or("—")
        );
    }
    println!("  {}\n", grid.summary());
}

fn main() -> Result<()> {
    println!("=== countrydb-rs Filtering Example ===\n");

    let db = CountryDb::load()?;
    let mut grid = CardGrid::new(db.countries().iter().map(to_card).collect());
    println!("Region options: {}\n", grid.regions().join(", "));

    grid.filter_mut().set_query("ber");
    print_grid(&grid);

    grid.filter_mut().set_region("Europe");
    print_grid(&grid);

    // Clearing the query keeps the region.
    grid.filter_mut().set_query("");
    print_grid(&grid);

    grid.filter_mut().clear_region();
    grid.filter_mut().set_query("z");
    print_grid(&grid);

    // The pure function works on any card slice.
    let asia: Vec<CountryCard> = db.find_by_region("Asia").into_iter().map(to_card).collect();
    let hits = visible(&asia, "i", "");
    println!("Asian countries matching \"i\": {}", hits.len());

    Ok(())
}
