use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreParseError {
    /// A builtin vector-function name was used as an assignment target.
    #[error("You may not use the built-in fn names as variable names.\n You attempted to use: {name}")]
    NameCollision {
        name: String,
        line: usize,
        /// Byte offset of the name in the preparsed text.
        offset: usize,
    },
}

impl PreParseError {
    /// The offending builtin name.
    pub fn name(&self) -> &str {
        match self {
            PreParseError::NameCollision { name, .. } => name,
        }
    }

    /// 1-based line of the offending assignment.
    pub fn line(&self) -> usize {
        match self {
            PreParseError::NameCollision { line, .. } => *line,
        }
    }

    /// Byte offset of the offending name in the text the guard ran on.
    pub fn offset(&self) -> usize {
        match self {
            PreParseError::NameCollision { offset, .. } => *offset,
        }
    }
}
