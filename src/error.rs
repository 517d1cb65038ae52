use thiserror::Error;

/// A malformed polynomial expression.
///
/// Every variant carries the byte offset in the input where the problem
/// was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed expression: invalid number `{text}` at position {pos}")]
    InvalidNumber { text: String, pos: usize },
    #[error("malformed expression: missing exponent after `^` at position {pos}")]
    MissingExponent { pos: usize },
    #[error("malformed expression: exponent `{text}` is not an integer in range at position {pos}")]
    InvalidExponent { text: String, pos: usize },
    #[error("malformed expression: expected {expected}, found {found} at position {pos}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        pos: usize,
    },
    #[error("malformed expression: unexpected character `{ch}` at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
}

impl ParseError {
    /// Byte offset of the offending input.
    pub fn position(&self) -> usize {
        match self {
            ParseError::InvalidNumber { pos, .. }
            | ParseError::MissingExponent { pos }
            | ParseError::InvalidExponent { pos, .. }
            | ParseError::UnexpectedToken { pos, .. }
            | ParseError::UnexpectedChar { pos, .. } => *pos,
        }
    }
}
