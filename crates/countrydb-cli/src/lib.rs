//! countrydb-cli
//! =============
//!
//! Command-line interface for the `countrydb-core` world countries dataset.
//!
//! The binary (`countrydb`) is a thin shell around [`commands::run`], which
//! renders each subcommand into any `Write` so it can be tested without a
//! terminal.
//!
//! Basic usage:
//!
//! ```text
//! countrydb stats
//! countrydb country de
//! countrydb region Europe
//! countrydb search --query ber --region Europe
//! countrydb --json country JPN
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod commands;
