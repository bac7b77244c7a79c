//! Preparser for Sonic Pi source.
//!
//! Rewrites sugared spellings into Ruby the host interpreter already accepts:
//!
//! - List macros (`(ing 1 2 3)` → `(ing 1,2,3)`)
//! - Prefix vector-function calls (`( ring 1, 2)` → ` ring(1, 2)`)
//! - Symbol paths (`:a:b` → `::SonicPi::SPSym.new('a : b')`)
//! - Shorthand decimals (`.5` → `0.5`, `2.` → `2.0`)
//!
//! It also rejects assignments to builtin vector-function names. Everything
//! else, including malformed input, passes through for the host parser to
//! judge.

pub mod error;
pub mod preparse;
pub mod preprocess;

pub use error::PreParseError;
pub use preparse::{preparse, preparse_with};
pub use sp_syntax::{PreparseSyntax, VectorFunctionSpec};
