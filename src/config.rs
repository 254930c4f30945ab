//! Grammar configuration
//!
//! The configuration decides which operators exist, how tightly binary operators bind,
//! which words are literals, and which syntactic constructs are enabled at all. It is a
//! plain value: the parser owns one and only replaces parts of it through
//! [`Grammar::apply`], which merges a [`PartialConfig`] on top of the current state.
//!
//! JSON field names are PascalCase so that config files and fixture files look like:
//!
//! ```json
//! { "Operators": { "Literals": {"true": true}, "Unary": ["-"], "Binary": {"+": 9} },
//!   "Features": { "Compound": true, "Members": {"Static": true} } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::ast::LiteralValue;
use crate::errors::ToolError;

// ============================================================================
// FULL CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    pub operators: Operators,
    pub features: Features,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Operators {
    /// Words that parse as literals instead of identifiers, and their values.
    pub literals: BTreeMap<String, LiteralValue>,
    pub unary: Vec<String>,
    /// Binary operators and their precedence. Higher binds tighter.
    pub binary: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Features {
    pub compound: bool,
    pub conditional: bool,
    pub identifiers: bool,
    pub calls: bool,
    pub members: MemberFeatures,
    pub literals: LiteralFeatures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemberFeatures {
    #[serde(rename = "Static")]
    pub static_: bool,
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LiteralFeatures {
    pub numeric: bool,
    /// Digit separator accepted inside numeric literals. Empty disables separators.
    pub numeric_separator: String,
    pub string: bool,
    pub array: bool,
}

static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(|| Config {
    operators: Operators {
        literals: [
            ("true", LiteralValue::Bool(true)),
            ("false", LiteralValue::Bool(false)),
            ("null", LiteralValue::Null),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect(),
        unary: ["-", "!", "~", "+"].iter().map(|s| s.to_string()).collect(),
        binary: [
            ("||", 1),
            ("&&", 2),
            ("|", 3),
            ("^", 4),
            ("&", 5),
            ("==", 6),
            ("!=", 6),
            ("===", 6),
            ("!==", 6),
            ("<", 7),
            (">", 7),
            ("<=", 7),
            (">=", 7),
            ("<<", 8),
            (">>", 8),
            (">>>", 8),
            ("+", 9),
            ("-", 9),
            ("*", 10),
            ("/", 10),
            ("%", 10),
        ]
        .into_iter()
        .map(|(op, prec)| (op.to_string(), prec))
        .collect(),
    },
    features: Features {
        compound: true,
        conditional: true,
        identifiers: true,
        calls: true,
        members: MemberFeatures {
            static_: true,
            computed: true,
        },
        literals: LiteralFeatures {
            numeric: true,
            numeric_separator: String::new(),
            string: true,
            array: true,
        },
    },
});

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

// ============================================================================
// PARTIAL CONFIGURATION
// ============================================================================

/// A configuration where every field may be left out.
///
/// Absent fields keep whatever value the parser currently has.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operators: Option<PartialOperators>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<PartialFeatures>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PartialOperators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literals: Option<BTreeMap<String, LiteralValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unary: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<BTreeMap<String, u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PartialFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<PartialMemberFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literals: Option<PartialLiteralFeatures>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PartialMemberFeatures {
    #[serde(rename = "Static", skip_serializing_if = "Option::is_none")]
    pub static_: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PartialLiteralFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array: Option<bool>,
}

impl From<Config> for PartialConfig {
    fn from(config: Config) -> Self {
        let Config {
            operators,
            features,
        } = config;
        PartialConfig {
            operators: Some(PartialOperators {
                literals: Some(operators.literals),
                unary: Some(operators.unary),
                binary: Some(operators.binary),
            }),
            features: Some(PartialFeatures {
                compound: Some(features.compound),
                conditional: Some(features.conditional),
                identifiers: Some(features.identifiers),
                calls: Some(features.calls),
                members: Some(PartialMemberFeatures {
                    static_: Some(features.members.static_),
                    computed: Some(features.members.computed),
                }),
                literals: Some(PartialLiteralFeatures {
                    numeric: Some(features.literals.numeric),
                    numeric_separator: Some(features.literals.numeric_separator),
                    string: Some(features.literals.string),
                    array: Some(features.literals.array),
                }),
            }),
        }
    }
}

impl PartialConfig {
    /// Reads a JSON config file. Any subset of the fields may be present.
    pub fn from_file(path: &Path) -> Result<Self, ToolError> {
        let text = fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| ToolError::json(path, e))
    }
}

// ============================================================================
// GRAMMAR: configuration plus derived lookup lengths
// ============================================================================

/// The configuration as the parser holds it.
///
/// Keeps the longest unary and binary operator lengths (in characters) next to the
/// tables they were computed from. Both are recomputed on every [`Grammar::apply`] that
/// touches an operator table, so they can never go stale.
#[derive(Debug, Clone)]
pub struct Grammar {
    config: Config,
    unary_max_len: usize,
    binary_max_len: usize,
}

impl Grammar {
    pub fn new(config: Config) -> Self {
        let mut grammar = Grammar {
            config,
            unary_max_len: 0,
            binary_max_len: 0,
        };
        grammar.refresh_lengths();
        grammar
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn unary_max_len(&self) -> usize {
        self.unary_max_len
    }

    pub fn binary_max_len(&self) -> usize {
        self.binary_max_len
    }

    /// Precedence of a configured binary operator.
    pub fn precedence(&self, op: &str) -> Option<u32> {
        self.config.operators.binary.get(op).copied()
    }

    pub fn is_unary(&self, op: &str) -> bool {
        self.config.operators.unary.iter().any(|u| u == op)
    }

    pub fn literal(&self, word: &str) -> Option<&LiteralValue> {
        self.config.operators.literals.get(word)
    }

    /// Merges `partial` over the current configuration.
    pub fn apply(&mut self, partial: &PartialConfig) {
        if let Some(ops) = &partial.operators {
            let target = &mut self.config.operators;
            if let Some(literals) = &ops.literals {
                target.literals = literals.clone();
            }
            if let Some(unary) = &ops.unary {
                target.unary = unary.clone();
            }
            if let Some(binary) = &ops.binary {
                target.binary = binary.clone();
            }
        }

        if let Some(features) = &partial.features {
            let target = &mut self.config.features;
            set_if(&mut target.compound, features.compound);
            set_if(&mut target.conditional, features.conditional);
            set_if(&mut target.identifiers, features.identifiers);
            set_if(&mut target.calls, features.calls);

            if let Some(members) = &features.members {
                set_if(&mut target.members.static_, members.static_);
                set_if(&mut target.members.computed, members.computed);
            }
            if let Some(literals) = &features.literals {
                set_if(&mut target.literals.numeric, literals.numeric);
                set_if(&mut target.literals.string, literals.string);
                set_if(&mut target.literals.array, literals.array);
                if let Some(sep) = &literals.numeric_separator {
                    target.literals.numeric_separator = sep.clone();
                }
            }
        }

        self.refresh_lengths();
    }

    fn refresh_lengths(&mut self) {
        let ops = &self.config.operators;
        self.unary_max_len = max_char_len(ops.unary.iter());
        self.binary_max_len = max_char_len(ops.binary.keys());
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::new(Config::default())
    }
}

fn set_if(target: &mut bool, value: Option<bool>) {
    if let Some(v) = value {
        *target = v;
    }
}

fn max_char_len<'a>(ops: impl Iterator<Item = &'a String>) -> usize {
    ops.map(|op| op.chars().count()).max().unwrap_or(0)
}
