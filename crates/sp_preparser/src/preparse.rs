use sp_syntax::{PreparseSyntax, VectorFunctionSpec};

use crate::error::PreParseError;
use crate::preprocess;

/// Rewrite Sonic Pi sugar in `source` with every pass enabled.
///
/// `vec_fns` is the registry of builtin vector functions; their names drive
/// call spacing normalization and the assignment guard.
pub fn preparse(source: &str, vec_fns: &[VectorFunctionSpec]) -> Result<String, PreParseError> {
    preparse_with(source, vec_fns, &PreparseSyntax::default())
}

/// Like [`preparse`], with passes and settings taken from `syntax`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len(), fns = vec_fns.len()))]
pub fn preparse_with(
    source: &str,
    vec_fns: &[VectorFunctionSpec],
    syntax: &PreparseSyntax,
) -> Result<String, PreParseError> {
    preprocess::preprocess(source, vec_fns, syntax)
}
