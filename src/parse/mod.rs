//! Parser for the polynomial text form.
//!
//! Accepted grammar:
//!
//! ```text
//! poly  := <empty> | [sign] term (sign term)*
//! term  := number ['x' ['^' ['-'] number]]
//!        | 'x' ['^' ['-'] number]
//! sign  := '+' | '-'
//! ```
//!
//! A bare number is a constant term, `x` without `^` means `x^1`, and a term
//! with no coefficient has coefficient 1. Nothing else is accepted: in
//! particular `*` and `%` are rejected rather than evaluated.

mod lexer;

pub use lexer::{Lexer, Token, TokenKind};

use log::debug;

use crate::error::ParseError;
use crate::structures::poly::Polynomial;

/// Parse a polynomial such as `"3x^4+5x^2+1"`.
///
/// The result is built term by term through
/// [`Polynomial::insert_term`], so repeated exponents are combined.
/// On error no polynomial is returned.
///
/// # Example
///
/// ```
/// use polyterm::parse;
///
/// let p = parse("3x^4+5x^2+1").unwrap();
/// assert_eq!(p.to_string(), "3.0x^4 +5.0x^2 +1.0x^0");
///
/// assert!(parse("2+3*5%2").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if a numeral cannot be converted, an exponent
/// is missing or not an integer, or the input does not follow the grammar.
pub fn parse(input: &str) -> Result<Polynomial, ParseError> {
    let mut parser = Parser::new(input)?;
    let poly = parser.polynomial()?;
    debug!("parsed {:?} into {} terms", input, poly.len());
    Ok(poly)
}

/// One-token-lookahead consumer over a [`Lexer`].
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    fn bump(&mut self) -> Result<Token<'a>, ParseError> {
        let token = self.current;
        self.current = self.lexer.next_token()?;
        Ok(token)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current.kind.to_string(),
            pos: self.current.pos,
        }
    }

    fn polynomial(&mut self) -> Result<Polynomial, ParseError> {
        let mut poly = Polynomial::new();
        if self.current.kind == TokenKind::End {
            return Ok(poly);
        }

        let mut negative = self.sign()?;
        loop {
            let (coeff, exp) = self.term()?;
            poly.insert_term(if negative { -coeff } else { coeff }, exp);

            match self.current.kind {
                TokenKind::End => return Ok(poly),
                TokenKind::Plus | TokenKind::Minus => negative = self.sign()?,
                _ => return Err(self.unexpected("`+`, `-` or end of input")),
            }
        }
    }

    /// Consume an optional sign, returning whether it was `-`.
    fn sign(&mut self) -> Result<bool, ParseError> {
        match self.current.kind {
            TokenKind::Plus => {
                self.bump()?;
                Ok(false)
            }
            TokenKind::Minus => {
                self.bump()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn term(&mut self) -> Result<(f64, i32), ParseError> {
        let coeff = match self.current.kind {
            TokenKind::Number(text) => {
                let token = self.bump()?;
                text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_string(),
                    pos: token.pos,
                })?
            }
            TokenKind::Var => 1.0,
            _ => return Err(self.unexpected("a coefficient or `x`")),
        };

        if self.current.kind != TokenKind::Var {
            return Ok((coeff, 0));
        }
        self.bump()?;

        if self.current.kind != TokenKind::Caret {
            return Ok((coeff, 1));
        }
        self.bump()?;

        Ok((coeff, self.exponent()?))
    }

    fn exponent(&mut self) -> Result<i32, ParseError> {
        let negative = if self.current.kind == TokenKind::Minus {
            self.bump()?;
            true
        } else {
            false
        };

        let TokenKind::Number(text) = self.current.kind else {
            return Err(ParseError::MissingExponent {
                pos: self.current.pos,
            });
        };
        let token = self.bump()?;

        let invalid = || ParseError::InvalidExponent {
            text: text.to_string(),
            pos: token.pos,
        };
        let magnitude: i64 = text.parse().map_err(|_| invalid())?;
        let value = if negative { -magnitude } else { magnitude };
        i32::try_from(value).map_err(|_| invalid())
    }
}
