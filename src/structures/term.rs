use core::fmt;

/// A single monomial `coeff * x^exp`.
///
/// The exponent is fixed at construction. Only the owning
/// [`Polynomial`](crate::Polynomial) may accumulate into the coefficient.
///
/// # Example
///
/// ```
/// use polyterm::Term;
///
/// let t = Term::new(3.0, 2); // 3x^2
/// assert_eq!(t.coeff(), 3.0);
/// assert_eq!(t.exp(), 2);
/// assert_eq!(t.eval(2.0), 12.0);
/// assert_eq!(t.to_string(), "3.0x^2");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    coeff: f64,
    exp: i32,
}

impl Term {
    /// Create the term `coeff * x^exp`.
    pub const fn new(coeff: f64, exp: i32) -> Self {
        Self { coeff, exp }
    }

    pub const fn coeff(&self) -> f64 {
        self.coeff
    }

    pub const fn exp(&self) -> i32 {
        self.exp
    }

    /// Check whether the coefficient is zero (either sign).
    pub fn is_zero(&self) -> bool {
        self.coeff == 0.0
    }

    /// Evaluate the term at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeff * x.powi(self.exp)
    }

    /// Multiply two terms: coefficients multiply, exponents add.
    ///
    /// Returns `None` if the exponent sum overflows `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use polyterm::Term;
    ///
    /// let p = Term::new(2.0, 1).checked_mul(&Term::new(3.0, 1)).unwrap();
    /// assert_eq!(p, Term::new(6.0, 2));
    ///
    /// assert!(Term::new(1.0, i32::MAX).checked_mul(&Term::new(1.0, 1)).is_none());
    /// ```
    pub fn checked_mul(&self, rhs: &Term) -> Option<Term> {
        let exp = self.exp.checked_add(rhs.exp)?;
        Some(Term::new(self.coeff * rhs.coeff, exp))
    }

    pub(crate) fn accumulate(&mut self, coeff: f64) {
        self.coeff += coeff;
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}x^{}", self.coeff, self.exp)
    }
}
