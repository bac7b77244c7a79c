//! Text-level rewrite passes.
//!
//! Each pass takes the current text and returns a new string; passes only
//! match at code positions (see `sp_lexer`), never inside comments or string
//! literal text.
//!
//! Processing order:
//! 1. List macros (`(ing ...)`, `(nit ...)`, `(ine ...)`)
//! 2. Call spacing, once per vector function
//! 3. Symbol paths (`:a:b`)
//! 4. Assignment guard, once per vector function
//! 5. Shorthand decimals
//!
//! Later passes rely on the text shape the earlier ones leave behind, e.g.
//! the guard must see calls already normalized by pass 2.

use sp_syntax::{PreparseSyntax, VectorFunctionSpec};

use crate::error::PreParseError;

pub mod call_pass;
pub mod macro_pass;
pub mod numeric_pass;
pub mod symbol_pass;
mod util;

/// Run every enabled pass over `source`.
pub fn preprocess(
    source: &str,
    vec_fns: &[VectorFunctionSpec],
    syntax: &PreparseSyntax,
) -> Result<String, PreParseError> {
    let mut result = source.to_string();

    let names: Vec<&str> = vec_fns
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| !name.is_empty())
        .collect();

    if syntax.list_macros {
        result = macro_pass::expand_list_macros(&result, &syntax.macro_keywords);
    }

    if syntax.call_spacing {
        for name in &names {
            result = call_pass::normalize_call_spacing(&result, name);
        }
    }

    if syntax.symbol_paths {
        result = symbol_pass::fold_symbol_paths(&result, &syntax.symbol_path_constructor);
    }

    if syntax.name_guard {
        for name in &names {
            call_pass::check_assignment(&result, name)?;
        }
    }

    if syntax.numeric_literals {
        result = numeric_pass::normalize_numeric_literals(&result);
    }

    Ok(result)
}
