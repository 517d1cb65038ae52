use core::fmt;
use core::ops::{Add, Mul};
use core::str::FromStr;

use log::trace;

use crate::algebra::arith;
use crate::error::ParseError;
use crate::structures::term::Term;

/// Single-variable polynomial with real coefficients and integer exponents.
///
/// Terms are stored in strictly descending order of exponent, with at most
/// one term per exponent. Terms whose coefficient becomes zero are dropped,
/// so the zero polynomial is represented as an empty term vector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Create the empty (zero) polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use polyterm::Polynomial;
    ///
    /// let p = Polynomial::new();
    /// assert!(p.is_zero());
    /// assert_eq!(p.to_string(), "0");
    /// ```
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Create a monomial `coeff * x^exp`.
    pub fn monomial(coeff: f64, exp: i32) -> Self {
        let mut poly = Self::new();
        poly.insert_term(coeff, exp);
        poly
    }

    /// Create a constant polynomial.
    pub fn constant(c: f64) -> Self {
        Self::monomial(c, 0)
    }

    /// Add `coeff * x^exp` into this polynomial.
    ///
    /// If a term with exponent `exp` already exists, `coeff` is accumulated
    /// into it (and the term is removed if the sum is zero). Otherwise a new
    /// term is placed so that exponents stay strictly descending.
    ///
    /// # Example
    ///
    /// ```
    /// use polyterm::Polynomial;
    ///
    /// let mut p = Polynomial::new();
    /// p.insert_term(5.0, 2);
    /// p.insert_term(3.0, 4);
    /// p.insert_term(1.0, 0);
    /// p.insert_term(2.0, 2);
    /// assert_eq!(p.to_string(), "3.0x^4 +7.0x^2 +1.0x^0");
    /// ```
    pub fn insert_term(&mut self, coeff: f64, exp: i32) {
        // Descending order: a stored exponent greater than `exp` sorts before it.
        match self.terms.binary_search_by(|t| exp.cmp(&t.exp())) {
            Ok(i) => {
                self.terms[i].accumulate(coeff);
                if self.terms[i].is_zero() {
                    trace!("x^{} cancelled", exp);
                    self.terms.remove(i);
                }
            }
            Err(i) => {
                if coeff != 0.0 {
                    self.terms.insert(i, Term::new(coeff, exp));
                }
            }
        }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of (non-zero) terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms from highest to lowest exponent.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Highest exponent, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<i32> {
        self.terms.first().map(Term::exp)
    }

    /// Coefficient of the highest-exponent term.
    pub fn leading_coeff(&self) -> Option<f64> {
        self.terms.first().map(Term::coeff)
    }

    /// Get the coefficient of `x^exp`, zero if there is no such term.
    pub fn coeff(&self, exp: i32) -> f64 {
        self.terms
            .binary_search_by(|t| exp.cmp(&t.exp()))
            .map_or(0.0, |i| self.terms[i].coeff())
    }

    /// Evaluate the polynomial at `x`.
    ///
    /// # Example
    ///
    /// ```
    /// use polyterm::Polynomial;
    ///
    /// let p: Polynomial = "2x^2-3x^1+1".parse().unwrap();
    /// assert_eq!(p.eval(2.0), 3.0);
    /// assert_eq!(Polynomial::new().eval(5.0), 0.0);
    /// ```
    pub fn eval(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.eval(x)).sum()
    }

    /// Sum of two polynomials. Neither operand is modified.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &Polynomial) -> Polynomial {
        arith::add(self, rhs)
    }

    /// Product of two polynomials. Neither operand is modified.
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the product overflows `i32`.
    /// Use [`checked_multiply`](Self::checked_multiply) to handle that case.
    pub fn multiply(&self, rhs: &Polynomial) -> Polynomial {
        arith::multiply(self, rhs)
    }

    /// Product of two polynomials, or `None` on exponent overflow.
    pub fn checked_multiply(&self, rhs: &Polynomial) -> Option<Polynomial> {
        arith::checked_multiply(self, rhs)
    }
}

/// Render a polynomial, highest exponent first.
///
/// Equivalent to `p.to_string()`.
pub fn render(p: &Polynomial) -> String {
    p.to_string()
}

/* ---- Construction from term streams ---- */

impl Extend<(f64, i32)> for Polynomial {
    fn extend<I: IntoIterator<Item = (f64, i32)>>(&mut self, iter: I) {
        for (coeff, exp) in iter {
            self.insert_term(coeff, exp);
        }
    }
}

impl FromIterator<(f64, i32)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (f64, i32)>>(iter: I) -> Self {
        let mut poly = Self::new();
        poly.extend(iter);
        poly
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        iter.into_iter().map(|t| (t.coeff(), t.exp())).collect()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = core::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

/* ---- Arithmetic operators ---- */

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        arith::add(self, rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// # Panics
    ///
    /// Panics on exponent overflow, see [`Polynomial::multiply`].
    fn mul(self, rhs: &Polynomial) -> Self::Output {
        arith::multiply(self, rhs)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
                if term.coeff() > 0.0 {
                    write!(f, "+")?;
                }
            }
            write!(f, "{}", term)?;
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.terms, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Rebuilt through insert_term so unsorted or duplicated input is normalized.
        let terms = <Vec<Term> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(terms.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exps(p: &Polynomial) -> Vec<i32> {
        p.iter().map(Term::exp).collect()
    }

    #[test]
    fn new_is_zero() {
        let p = Polynomial::new();
        assert!(p.is_zero());
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert_eq!(p.degree(), None);
        assert_eq!(p.leading_coeff(), None);
    }

    #[test]
    fn insert_into_empty() {
        let mut p = Polynomial::new();
        p.insert_term(4.0, 3);
        assert_eq!(p.terms(), &[Term::new(4.0, 3)]);
    }

    #[test]
    fn insert_new_head() {
        let mut p = Polynomial::monomial(1.0, 2);
        p.insert_term(2.0, 5);
        assert_eq!(exps(&p), vec![5, 2]);
    }

    #[test]
    fn insert_middle_and_tail() {
        let mut p = Polynomial::new();
        p.insert_term(1.0, 10);
        p.insert_term(1.0, 0);
        p.insert_term(1.0, 4);
        p.insert_term(1.0, -2);
        p.insert_term(1.0, 7);
        assert_eq!(exps(&p), vec![10, 7, 4, 0, -2]);
    }

    #[test]
    fn insert_accumulates_same_exponent() {
        let mut p = Polynomial::new();
        p.insert_term(1.5, 3);
        p.insert_term(2.0, 1);
        p.insert_term(2.5, 3);
        assert_eq!(p.len(), 2);
        assert_eq!(p.coeff(3), 4.0);
        assert_eq!(p.coeff(1), 2.0);
    }

    #[test]
    fn insert_accumulates_into_head() {
        let mut p = Polynomial::monomial(3.0, 4);
        p.insert_term(1.0, 4);
        assert_eq!(p.terms(), &[Term::new(4.0, 4)]);
    }

    #[test]
    fn insert_cancellation_drops_term() {
        let mut p = Polynomial::new();
        p.insert_term(2.0, 2);
        p.insert_term(1.0, 1);
        p.insert_term(-2.0, 2);
        assert_eq!(p.terms(), &[Term::new(1.0, 1)]);
    }

    #[test]
    fn insert_zero_coefficient_is_noop() {
        let mut p = Polynomial::monomial(1.0, 1);
        p.insert_term(0.0, 3);
        p.insert_term(-0.0, 0);
        assert_eq!(exps(&p), vec![1]);
        assert!(Polynomial::constant(0.0).is_zero());
    }

    #[test]
    fn coeff_absent_is_zero() {
        let p: Polynomial = vec![(3.0, 4), (1.0, 0)].into_iter().collect();
        assert_eq!(p.coeff(4), 3.0);
        assert_eq!(p.coeff(2), 0.0);
        assert_eq!(p.coeff(-1), 0.0);
    }

    #[test]
    fn degree_and_leading_coeff() {
        let p: Polynomial = vec![(1.0, 0), (-6.0, 9), (2.0, 3)].into_iter().collect();
        assert_eq!(p.degree(), Some(9));
        assert_eq!(p.leading_coeff(), Some(-6.0));
    }

    #[test]
    fn from_terms_normalizes() {
        let p: Polynomial = vec![Term::new(1.0, 1), Term::new(2.0, 3), Term::new(1.0, 1)]
            .into_iter()
            .collect();
        assert_eq!(p.terms(), &[Term::new(2.0, 3), Term::new(2.0, 1)]);
    }

    #[test]
    fn extend_inserts() {
        let mut p = Polynomial::constant(1.0);
        p.extend([(1.0, 1), (-1.0, 0)]);
        assert_eq!(p.terms(), &[Term::new(1.0, 1)]);
    }

    #[test]
    fn eval_sums_terms() {
        // 3x^4 + 5x^2 + 1 at x = 1
        let p: Polynomial = vec![(3.0, 4), (5.0, 2), (1.0, 0)].into_iter().collect();
        assert_eq!(p.eval(1.0), 9.0);
        assert_eq!(p.eval(0.0), 1.0);
    }

    #[test]
    fn display_zero() {
        assert_eq!(Polynomial::new().to_string(), "0");
        assert_eq!(render(&Polynomial::new()), "0");
    }

    #[test]
    fn display_signs() {
        let p: Polynomial = vec![(-1.0, 3), (2.5, 1), (-4.0, 0)].into_iter().collect();
        assert_eq!(p.to_string(), "-1.0x^3 +2.5x^1 -4.0x^0");
    }

    #[test]
    fn display_leading_positive_has_no_plus() {
        let p = Polynomial::monomial(6.0, 2);
        assert_eq!(render(&p), "6.0x^2");
    }

    #[test]
    fn methods_match_operators() {
        let a: Polynomial = vec![(1.0, 1), (1.0, 0)].into_iter().collect();
        let b: Polynomial = vec![(1.0, 1), (-1.0, 0)].into_iter().collect();
        assert_eq!(a.add(&b), &a + &b);
        assert_eq!(a.multiply(&b), &a * &b);
        assert_eq!(a.checked_multiply(&b), Some(&a * &b));
    }

    #[test]
    fn from_str_delegates_to_parser() {
        let p: Polynomial = "3x^4+5x^2+1".parse().unwrap();
        assert_eq!(p.to_string(), "3.0x^4 +5.0x^2 +1.0x^0");
        assert!("3x^".parse::<Polynomial>().is_err());
    }
}
