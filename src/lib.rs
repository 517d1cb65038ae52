//! Single-variable polynomials with `f64` coefficients and `i32` exponents.
//!
//! ```
//! use polyterm::{add, multiply, parse};
//!
//! let a = parse("3x^4+5x^2+1").unwrap();
//! let b = parse("2x^3+4x^2+6").unwrap();
//!
//! assert_eq!(add(&a, &b).to_string(), "3.0x^4 +2.0x^3 +9.0x^2 +7.0x^0");
//! assert_eq!(multiply(&a, &b).degree(), Some(7));
//! ```

pub mod algebra;
pub mod error;
pub mod parse;
pub mod structures;

pub use algebra::arith::{add, checked_multiply, multiply};
pub use error::ParseError;
pub use parse::{parse, Lexer, Token, TokenKind};
pub use structures::poly::{render, Polynomial};
pub use structures::term::Term;
