//! JSON fixture corpus
//!
//! A fixture file is a JSON array of cases. Each case names an input, the configuration
//! to parse it with, and exactly one expected outcome:
//!
//! ```json
//! [
//!   {
//!     "config": { "Features": { "Calls": false } },
//!     "input": "f(x)",
//!     "error": "Unexpected function call at character 1",
//!     "message": "calls can be disabled"
//!   }
//! ]
//! ```
//!
//! Every case starts from the default grammar, so cases never see each other's config.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;
use walkdir::WalkDir;

use crate::ast::Expression;
use crate::config::PartialConfig;
use crate::errors::ToolError;
use crate::syntax::Parser;

// =============================================================================
// CORE TYPES
// =============================================================================

/// A single recorded parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub config: PartialConfig,
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

/// Outcome of running one fixture.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureResult {
    Pass {
        message: String,
    },
    /// `expected` and `actual` are pretty JSON of `{"output": .., "error": ..}`.
    Fail {
        message: String,
        input: String,
        expected: String,
        actual: String,
    },
}

impl FixtureResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, FixtureResult::Pass { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            FixtureResult::Pass { message } | FixtureResult::Fail { message, .. } => message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureSummary {
    pub passed: usize,
    pub failed: usize,
}

impl FixtureSummary {
    pub fn record(&mut self, result: &FixtureResult) {
        if result.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

// =============================================================================
// DISCOVERY AND LOADING
// =============================================================================

/// All `*.json` files below `dir`, sorted by path.
pub fn discover_fixture_files(dir: &Path) -> Result<Vec<PathBuf>, ToolError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ToolError::io(path, e.into())
        })?;

        let is_json = entry.path().extension().is_some_and(|ext| ext == "json");
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

pub fn load_fixture_file(path: &Path) -> Result<Vec<Fixture>, ToolError> {
    let text = fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| ToolError::json(path, e))
}

// =============================================================================
// EXECUTION
// =============================================================================

/// Resets `parser` to the default grammar, applies the fixture's config, and compares
/// the parse against the recorded outcome.
pub fn run_fixture(parser: &mut Parser, fixture: &Fixture) -> FixtureResult {
    parser.set_config(Some(&Parser::default_config().into()));
    parser.set_config(Some(&fixture.config));

    let outcome = parser.try_parse(&fixture.input);
    let error = outcome.error.as_ref().map(ToString::to_string);

    if outcome.output == fixture.output && error == fixture.error {
        return FixtureResult::Pass {
            message: fixture.message.clone(),
        };
    }

    FixtureResult::Fail {
        message: fixture.message.clone(),
        input: fixture.input.clone(),
        expected: render_outcome(fixture.output.as_ref(), fixture.error.as_deref()),
        actual: render_outcome(outcome.output.as_ref(), error.as_deref()),
    }
}

/// Runs every fixture in one file on a shared parser.
pub fn run_fixture_file(parser: &mut Parser, path: &Path) -> Result<Vec<FixtureResult>, ToolError> {
    let fixtures = load_fixture_file(path)?;
    Ok(fixtures
        .iter()
        .map(|fixture| run_fixture(parser, fixture))
        .collect())
}

/// Records what `parser` currently does with `input` as a new fixture.
///
/// The parser's config is stored only when it differs from the default grammar.
pub fn make_fixture(parser: &mut Parser, input: &str, message: &str) -> Fixture {
    let current = parser.get_config();
    let config = if current == Parser::default_config() {
        PartialConfig::default()
    } else {
        PartialConfig::from(current)
    };

    let outcome = parser.try_parse(input);

    Fixture {
        config,
        input: input.to_string(),
        output: outcome.output,
        error: outcome.error.map(|e| e.to_string()),
        message: message.to_string(),
    }
}

fn render_outcome(output: Option<&Expression>, error: Option<&str>) -> String {
    serde_json::to_string_pretty(&json!({ "output": output, "error": error }))
        .unwrap_or_default()
}
