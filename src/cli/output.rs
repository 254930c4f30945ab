//! Handles all user-facing output for the CLI.
//!
//! JSON goes to stdout. Status lines are colorized with termcolor, fixture mismatches are
//! shown as line diffs, and errors are rendered as miette reports on stderr.

use std::io::Write;
use std::path::Path;

use difference::{Changeset, Difference};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::ToolError;
use crate::fixtures::{FixtureResult, FixtureSummary};

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("Error: could not serialize output: {err}"),
    }
}

pub fn print_error(err: ToolError) {
    eprintln!("{:?}", miette::Report::new(err));
}

/// One status line per fixture, plus a diff for every mismatch.
pub fn print_file_results(file: &Path, results: &[FixtureResult]) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    set_color(&mut stdout, Color::Yellow, true);
    let _ = writeln!(stdout, "--- {} ---", file.display());
    let _ = stdout.reset();

    for result in results {
        match result {
            FixtureResult::Pass { message } => {
                set_color(&mut stdout, Color::Green, false);
                let _ = write!(stdout, "PASS");
                let _ = stdout.reset();
                let _ = writeln!(stdout, " {message}");
            }
            FixtureResult::Fail {
                message,
                input,
                expected,
                actual,
            } => {
                set_color(&mut stdout, Color::Red, true);
                let _ = write!(stdout, "FAIL");
                let _ = stdout.reset();
                let _ = writeln!(stdout, " {message} (input: {input:?})");

                let changeset = Changeset::new(expected, actual, "\n");
                print_diff(&mut stdout, &changeset.diffs);
            }
        }
    }
}

pub fn print_summary(summary: &FixtureSummary) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let color = if summary.is_success() {
        Color::Green
    } else {
        Color::Red
    };

    set_color(&mut stdout, color, true);
    let _ = writeln!(
        stdout,
        "{} passed, {} failed, {} total",
        summary.passed,
        summary.failed,
        summary.total()
    );
    let _ = stdout.reset();
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn set_color(stdout: &mut StandardStream, color: Color, bold: bool) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
}

fn print_diff(stdout: &mut StandardStream, diffs: &[Difference]) {
    for diff in diffs {
        match diff {
            Difference::Same(x) => {
                let _ = stdout.reset();
                let _ = writeln!(stdout, " {}", x.replace('\n', "\n "));
            }
            Difference::Add(x) => {
                set_color(stdout, Color::Green, false);
                let _ = writeln!(stdout, "+{}", x.replace('\n', "\n+"));
            }
            Difference::Rem(x) => {
                set_color(stdout, Color::Red, false);
                let _ = writeln!(stdout, "-{}", x.replace('\n', "\n-"));
            }
        }
    }
    let _ = stdout.reset();
}
