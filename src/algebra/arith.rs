//! Polynomial addition and multiplication.
//!
//! Both operations build a fresh result through
//! [`Polynomial::insert_term`], so the result is always sorted and
//! deduplicated regardless of how the contributions arrive.

use core::cmp::Ordering;

use log::trace;

use crate::structures::poly::Polynomial;

/// Term-wise sum of `a` and `b`.
///
/// Walks both operands from highest to lowest exponent. Matching exponents
/// are summed; the rest pass through unchanged.
///
/// # Example
///
/// ```
/// use polyterm::{add, parse};
///
/// let a = parse("3x^4+5x^2+1").unwrap();
/// let b = parse("2x^3+4x^2+6").unwrap();
/// assert_eq!(add(&a, &b).to_string(), "3.0x^4 +2.0x^3 +9.0x^2 +7.0x^0");
/// ```
pub fn add(a: &Polynomial, b: &Polynomial) -> Polynomial {
    let lhs = a.terms();
    let rhs = b.terms();
    let mut result = Polynomial::new();
    let (mut i, mut j) = (0, 0);

    loop {
        match (lhs.get(i), rhs.get(j)) {
            (Some(p), Some(q)) => match p.exp().cmp(&q.exp()) {
                Ordering::Greater => {
                    result.insert_term(p.coeff(), p.exp());
                    i += 1;
                }
                Ordering::Less => {
                    result.insert_term(q.coeff(), q.exp());
                    j += 1;
                }
                Ordering::Equal => {
                    result.insert_term(p.coeff() + q.coeff(), p.exp());
                    i += 1;
                    j += 1;
                }
            },
            (Some(p), None) => {
                result.insert_term(p.coeff(), p.exp());
                i += 1;
            }
            (None, Some(q)) => {
                result.insert_term(q.coeff(), q.exp());
                j += 1;
            }
            (None, None) => break,
        }
    }

    trace!("add: {} + {} terms -> {}", lhs.len(), rhs.len(), result.len());
    result
}

/// Distributive product of `a` and `b`, or `None` if an exponent overflows.
///
/// Each term of `a` is multiplied against all of `b` into a partial
/// product, which is then folded into the running result with [`add`].
pub fn checked_multiply(a: &Polynomial, b: &Polynomial) -> Option<Polynomial> {
    let mut result = Polynomial::new();

    for t1 in a.terms() {
        let mut partial = Polynomial::new();
        for t2 in b.terms() {
            let product = t1.checked_mul(t2)?;
            partial.insert_term(product.coeff(), product.exp());
        }
        result = add(&result, &partial);
    }

    trace!(
        "multiply: {} * {} terms -> {}",
        a.len(),
        b.len(),
        result.len()
    );
    Some(result)
}

/// Distributive product of `a` and `b`.
///
/// # Panics
///
/// Panics if an exponent of the product overflows `i32`.
///
/// # Example
///
/// ```
/// use polyterm::{multiply, parse, Term};
///
/// let p = multiply(&parse("2x^1").unwrap(), &parse("3x^1").unwrap());
/// assert_eq!(p.terms(), &[Term::new(6.0, 2)]);
/// ```
pub fn multiply(a: &Polynomial, b: &Polynomial) -> Polynomial {
    match checked_multiply(a, b) {
        Some(p) => p,
        None => panic!("exponent overflow while multiplying polynomials"),
    }
}
