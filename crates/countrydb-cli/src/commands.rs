use crate::args::Commands;
use anyhow::{bail, Result};
use countrydb_core::prelude::*;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, warn};

/// Renders one subcommand against `db` into `out`.
///
/// Unknown codes and regions are errors here so the process exits non-zero.
pub fn run<S, W>(db: &S, command: &Commands, json: bool, out: &mut W) -> Result<()>
where
    S: CountrySearch + ?Sized,
    W: Write,
{
    debug!(?command, json, "running command");

    match command {
        Commands::Stats => {
            let stats = db.stats();
            if json {
                return write_json(out, &stats);
            }
            writeln!(out, "Dataset statistics:")?;
            writeln!(out, "  Countries: {}", stats.countries)?;
            writeln!(out, "  Regions: {}", stats.regions)?;
        }

        Commands::Countries => {
            let cards: Vec<CountryCard> = db.countries().iter().map(to_card).collect();
            if json {
                return write_json(out, &cards);
            }
            for card in &cards {
                write_card(out, card)?;
            }
        }

        Commands::Country { code } => {
            let Some(country) = db.find_by_code(code) else {
                bail!("No country found for: {code}");
            };
            let view = CountryView::from(country);
            if json {
                return write_json(out, &view);
            }
            writeln!(out, "Country: {}", view.name)?;
            writeln!(out, "Official name: {}", view.official_name)?;
            writeln!(out, "Codes: {} / {}", view.cca2, view.cca3)?;
            writeln!(out, "Region: {}", country.region_label())?;
            writeln!(out, "Population: {}", view.population_label)?;
            writeln!(out, "Capital: {}", country.capital_label())?;
            if let Some(area) = &view.area_label {
                writeln!(out, "Area: {area}")?;
            }
            writeln!(out, "Languages: {}", view.languages)?;
            writeln!(out, "Currencies: {}", view.currencies)?;
            writeln!(out, "Flag: {}", view.flag)?;
        }

        Commands::Regions => {
            let regions = region_views(db);
            if json {
                return write_json(out, &regions);
            }
            for r in &regions {
                writeln!(out, "{} ({})", r.name, r.countries)?;
            }
        }

        Commands::Region { name } => {
            let countries = db.find_by_region(name);
            if countries.is_empty() {
                bail!("Region not found: {name}");
            }
            let cards: Vec<CountryCard> = countries.into_iter().map(to_card).collect();
            if json {
                return write_json(out, &cards);
            }
            writeln!(out, "Countries in {name} ({}):", cards.len())?;
            for card in &cards {
                write_card(out, card)?;
            }
        }

        Commands::Search { query, region } => {
            let mut grid = CardGrid::new(db.countries().iter().map(to_card).collect());
            if !region.is_empty() && !grid.regions().iter().any(|r| r == region) {
                warn!(%region, "region is not in the dataset; nothing will match");
            }
            grid.filter_mut().set_query(query.as_str());
            grid.filter_mut().set_region(region.as_str());

            let hits = grid.visible();
            if json {
                return write_json(out, &hits);
            }
            for card in &hits {
                write_card(out, card)?;
            }
            writeln!(out, "{}", grid.summary())?;
        }
    }

    Ok(())
}

fn write_card<W: Write>(out: &mut W, card: &CountryCard) -> Result<()> {
    write!(out, "{} ({}) — {}", card.name, card.cca2, card.region)?;
    if let Some(capital) = &card.capital {
        write!(out, " · {capital}")?;
    }
    writeln!(out, " — Pop. {}", format_population(card.population))?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
