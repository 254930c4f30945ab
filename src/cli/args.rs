//! Command-line arguments and subcommands for the `prejspy` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "prejspy",
    version,
    about = "Parse JavaScript-like expressions into a JSON syntax tree."
)]
pub struct PrejspyArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse an expression and print its syntax tree.
    Parse {
        /// The expression to parse.
        expression: String,
        /// JSON file with a (partial) grammar configuration.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the compact parenthesized form instead of JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective grammar configuration.
    Config {
        /// JSON file merged over the default configuration.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run every fixture file found below a directory.
    Test {
        #[arg(default_value = "tests/fixtures")]
        path: PathBuf,
    },
    /// Record the current behavior for an expression as a fixture.
    Fixture {
        /// The expression to record.
        expression: String,
        /// Description stored in the fixture's `message` field.
        #[arg(short, long)]
        message: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
