use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countrydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "CLI for browsing and searching the countrydb-core world countries dataset"
)]
pub struct CliArgs {
    /// Path to a custom dataset (.json, or .json.gz); defaults to the bundled one
    #[arg(short = 'i', long = "input", env = "COUNTRYDB_DATA", global = true)]
    pub input: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List all countries
    Countries,

    /// Show details for a country by two- or three-letter code
    Country {
        /// Code, any case (e.g. de, DEU)
        code: String,
    },

    /// List all regions
    Regions,

    /// List the countries of a region
    Region {
        /// Region name, exact and case-sensitive (e.g. Europe)
        name: String,
    },

    /// Filter country cards by text and region
    Search {
        /// Substring of the country name or capital (case-insensitive)
        #[arg(short = 'q', long = "query", default_value = "")]
        query: String,

        /// Restrict to one region (exact match)
        #[arg(short = 'r', long = "region", default_value = "")]
        region: String,
    },
}
