use core::fmt;

use crate::error::ParseError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Plus,
    Minus,
    /// Digits and decimal points, unconverted.
    Number(&'a str),
    /// The variable `x`.
    Var,
    Caret,
    End,
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Plus => write!(f, "`+`"),
            TokenKind::Minus => write!(f, "`-`"),
            TokenKind::Number(text) => write!(f, "number `{}`", text),
            TokenKind::Var => write!(f, "`x`"),
            TokenKind::Caret => write!(f, "`^`"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// A token and the byte offset where it starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub pos: usize,
}

/// Splits polynomial text into tokens, skipping whitespace.
///
/// After the first [`TokenKind::End`] the lexer keeps yielding `End`
/// from its `next_token`, and the iterator stops.
///
/// # Example
///
/// ```
/// use polyterm::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("-2x^3")
///     .map(|t| t.unwrap().kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Minus,
///         TokenKind::Number("2"),
///         TokenKind::Var,
///         TokenKind::Caret,
///         TokenKind::Number("3"),
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            done: false,
        }
    }

    /// Produce the next token, or `End` once the input is consumed.
    pub fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        let input = self.input;
        let rest = &input[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();

        let start = self.pos;
        let Some(c) = trimmed.chars().next() else {
            return Ok(Token {
                kind: TokenKind::End,
                pos: start,
            });
        };

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '^' => TokenKind::Caret,
            'x' | 'X' => TokenKind::Var,
            c if c.is_ascii_digit() || c == '.' => {
                let len = trimmed
                    .find(|ch: char| !(ch.is_ascii_digit() || ch == '.'))
                    .unwrap_or(trimmed.len());
                self.pos += len;
                return Ok(Token {
                    kind: TokenKind::Number(&trimmed[..len]),
                    pos: start,
                });
            }
            ch => return Err(ParseError::UnexpectedChar { ch, pos: start }),
        };

        self.pos += c.len_utf8();
        Ok(Token { kind, pos: start })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Token {
                kind: TokenKind::End,
                ..
            }) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
            ok => Some(ok),
        }
    }
}
