//! The PreJsPy command-line interface.
//!
//! Every subcommand handler returns whether it succeeded; tool failures are rendered
//! as miette diagnostics by [`run`].

use std::path::Path;
use std::process;

use clap::Parser as _;

use crate::cli::args::{Command, PrejspyArgs};
use crate::config::PartialConfig;
use crate::errors::ToolError;
use crate::fixtures::{discover_fixture_files, make_fixture, run_fixture_file, FixtureSummary};
use crate::syntax::Parser;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = PrejspyArgs::parse();

    let result = match args.command {
        Command::Parse {
            expression,
            config,
            pretty,
        } => handle_parse(&expression, config.as_deref(), pretty),
        Command::Config { config } => handle_config(config.as_deref()),
        Command::Test { path } => handle_test(&path),
        Command::Fixture {
            expression,
            message,
            config,
        } => handle_fixture(&expression, &message, config.as_deref()),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            output::print_error(err);
            process::exit(1);
        }
    }
}

fn load_parser(config: Option<&Path>) -> Result<Parser, ToolError> {
    match config {
        Some(path) => Ok(Parser::with_config(&PartialConfig::from_file(path)?)),
        None => Ok(Parser::new()),
    }
}

fn handle_parse(expression: &str, config: Option<&Path>, pretty: bool) -> Result<bool, ToolError> {
    let mut parser = load_parser(config)?;
    let tree = parser.parse(expression)?;

    if pretty {
        println!("{}", tree.pretty());
    } else {
        output::print_json(&tree);
    }
    Ok(true)
}

fn handle_config(config: Option<&Path>) -> Result<bool, ToolError> {
    let parser = load_parser(config)?;
    output::print_json(&parser.get_config());
    Ok(true)
}

fn handle_test(dir: &Path) -> Result<bool, ToolError> {
    let mut parser = Parser::new();
    let mut summary = FixtureSummary::default();

    for file in discover_fixture_files(dir)? {
        let results = run_fixture_file(&mut parser, &file)?;
        output::print_file_results(&file, &results);
        for result in &results {
            summary.record(result);
        }
    }

    output::print_summary(&summary);
    Ok(summary.is_success())
}

fn handle_fixture(expression: &str, message: &str, config: Option<&Path>) -> Result<bool, ToolError> {
    let mut parser = load_parser(config)?;
    let fixture = make_fixture(&mut parser, expression, message);
    output::print_json(&fixture);
    Ok(true)
}
