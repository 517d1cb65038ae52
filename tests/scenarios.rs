//! End-to-end scenarios through the public API.

use polyterm::{add, multiply, parse, render, ParseError, Polynomial, Term};

fn exp_coeff(p: &Polynomial) -> Vec<(i32, f64)> {
    p.iter().map(|t| (t.exp(), t.coeff())).collect()
}

#[test]
fn direct_insertion_renders_in_order() {
    let mut p = Polynomial::new();
    p.insert_term(3.0, 4);
    p.insert_term(5.0, 2);
    p.insert_term(1.0, 0);
    assert_eq!(render(&p), "3.0x^4 +5.0x^2 +1.0x^0");
}

#[test]
fn insertion_order_does_not_matter() {
    let mut p = Polynomial::new();
    p.insert_term(1.0, 0);
    p.insert_term(5.0, 2);
    p.insert_term(3.0, 4);
    assert_eq!(render(&p), "3.0x^4 +5.0x^2 +1.0x^0");
}

#[test]
fn sum_of_parsed_polynomials() {
    let a = parse("3x^4+5x^2+1").unwrap();
    let b = parse("2x^3+4x^2+6").unwrap();
    let sum = add(&a, &b);
    assert_eq!(
        exp_coeff(&sum),
        vec![(4, 3.0), (3, 2.0), (2, 9.0), (0, 7.0)]
    );
}

#[test]
fn product_of_linear_monomials() {
    let p = multiply(&parse("2x^1").unwrap(), &parse("3x^1").unwrap());
    assert_eq!(p.terms(), &[Term::new(6.0, 2)]);
}

#[test]
fn cancellation_yields_zero_polynomial() {
    let sum = add(&parse("2x^2").unwrap(), &parse("-2x^2").unwrap());
    assert!(sum.is_zero());
    assert_eq!(render(&sum), "0");
}

#[test]
fn product_of_sample_polynomials() {
    let a = parse("3x^4+5x^2+1").unwrap();
    let b = parse("2x^3+4x^2+6").unwrap();
    let product = &a * &b;
    assert_eq!(
        render(&product),
        "6.0x^7 +12.0x^6 +10.0x^5 +38.0x^4 +2.0x^3 +34.0x^2 +6.0x^0"
    );
    assert_eq!(product, multiply(&b, &a));
}

#[test]
fn negative_terms_render_their_own_sign() {
    let p = parse("-1x^3+2x^1-7").unwrap();
    assert_eq!(render(&p), "-1.0x^3 +2.0x^1 -7.0x^0");
}

#[test]
fn rejected_inputs_are_errors() {
    for input in ["2+3*5%2", "3x^", "1.2.3", "3++x", "x^2.5", "4+"] {
        let result = parse(input);
        assert!(result.is_err(), "{input:?} should not parse");
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("malformed expression"), "{message}");
    }
}

#[test]
fn error_carries_position() {
    let err = "1+2x^3+5%".parse::<Polynomial>().unwrap_err();
    assert_eq!(err, ParseError::UnexpectedChar { ch: '%', pos: 8 });
    assert_eq!(err.position(), 8);
}
