//! Shared vocabulary for the Sonic Pi preparser.
//!
//! The preparser rewrites a handful of sugared spellings in user source into
//! plain Ruby before the host interpreter sees it:
//! - List macros (`(ing 1 2 3)`)
//! - Prefix vector-function calls (`( ring 1, 2)`)
//! - Symbol paths (`:drums:kick`)
//! - Shorthand decimals (`.5`, `2.`)

use serde::{Deserialize, Serialize};

/// A builtin list-producing function registered by the host runtime.
///
/// Only the name matters to the preparser: it drives call spacing
/// normalization and the assignment guard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VectorFunctionSpec {
    pub name: String,
}

impl VectorFunctionSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for VectorFunctionSpec {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Keywords that introduce a list macro block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroKeyword {
    /// `(ing ...)`, a ring literal.
    Ing,
    /// `(nit ...)`
    Nit,
    /// `(ine ...)`
    Ine,
}

impl MacroKeyword {
    pub const ALL: [MacroKeyword; 3] = [MacroKeyword::Ing, MacroKeyword::Nit, MacroKeyword::Ine];

    pub fn as_str(self) -> &'static str {
        match self {
            MacroKeyword::Ing => "ing",
            MacroKeyword::Nit => "nit",
            MacroKeyword::Ine => "ine",
        }
    }
}

impl std::fmt::Display for MacroKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Separator placed between segments in the folded symbol path string.
pub const SYMBOL_PATH_SEPARATOR: &str = " : ";

/// A colon-chained symbol with two or more segments, e.g. `:drums:kick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPath {
    pub segments: Vec<String>,
}

impl SymbolPath {
    /// Build a path from its segments. Returns `None` for fewer than two,
    /// since a lone `:seg` is an ordinary symbol.
    pub fn new(segments: Vec<String>) -> Option<Self> {
        if segments.len() < 2 {
            return None;
        }
        Some(Self { segments })
    }

    /// The string argument handed to the symbol path constructor.
    pub fn joined(&self) -> String {
        self.segments.join(SYMBOL_PATH_SEPARATOR)
    }

    /// Render as a constructor call, e.g. `::SonicPi::SPSym.new('a : b')`.
    pub fn to_constructor_call(&self, constructor: &str) -> String {
        format!("{}('{}')", constructor, self.joined())
    }
}

/// Feature flags and settings controlling which preparser passes run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreparseSyntax {
    pub list_macros: bool,
    pub call_spacing: bool,
    pub symbol_paths: bool,
    pub name_guard: bool,
    pub numeric_literals: bool,
    pub macro_keywords: Vec<MacroKeyword>,
    /// Callee emitted for folded symbol paths.
    pub symbol_path_constructor: String,
}

impl Default for PreparseSyntax {
    fn default() -> Self {
        Self {
            list_macros: true,
            call_spacing: true,
            symbol_paths: true,
            name_guard: true,
            numeric_literals: true,
            macro_keywords: MacroKeyword::ALL.to_vec(),
            symbol_path_constructor: "::SonicPi::SPSym.new".to_string(),
        }
    }
}

impl PreparseSyntax {
    /// All passes disabled; the preparser becomes the identity.
    pub fn none() -> Self {
        Self {
            list_macros: false,
            call_spacing: false,
            symbol_paths: false,
            name_guard: false,
            numeric_literals: false,
            ..Self::default()
        }
    }
}
