//! Polynomial Arithmetic
//!
//! This example demonstrates `Polynomial` operations including:
//! - Parsing from text
//! - Addition and multiplication
//! - Direct term insertion
//! - Evaluation
//! - Rejected input
//!
//! Run with: cargo run --example poly_arithmetic
//! Set `POLYTERM_LOG=debug` (or `trace`) to see library logging.

use std::env;

use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TerminalMode, TermLogger};

use polyterm::{parse, render, ParseError, Polynomial};

fn main() {
    init_logger();

    if let Err(e) = arithmetic() {
        error!("{}", e);
        return;
    }
    insertion();
    evaluation();
    rejected_input();
}

fn init_logger() {
    let level = match env::var("POLYTERM_LOG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Info,
    };
    let logger = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    if logger.is_err() {
        println!("logger already initialized, continuing without it");
    }
}

/// Parse the two sample polynomials and combine them
fn arithmetic() -> Result<(), ParseError> {
    println!("--- Parsing and Arithmetic ---\n");

    let p1 = parse("3x^4+5x^2+1")?;
    let p2 = parse("2x^3+4x^2+6")?;

    println!("Polynomial 1: {}", p1);
    println!("Polynomial 2: {}", p2);

    // Addition
    println!("Sum: {}", p1.add(&p2));

    // Multiplication
    let product = &p1 * &p2;
    println!("Product: {}", product);
    info!("product has degree {:?}", product.degree());

    // Cancellation leaves the zero polynomial
    let cancelled = parse("2x^2")?.add(&parse("-2x^2")?);
    println!("2x^2 + (-2x^2) = {}", cancelled);

    println!();
    Ok(())
}

/// Build a polynomial term by term
fn insertion() {
    println!("--- Direct Insertion ---\n");

    let mut p = Polynomial::new();
    for (coeff, exp) in [(5.0, 2), (1.0, 0), (3.0, 4)] {
        p.insert_term(coeff, exp);
        println!("insert {}x^{:<2} -> {}", coeff, exp, render(&p));
    }

    // Same exponent accumulates into the existing term
    p.insert_term(-5.0, 2);
    println!("insert -5x^2  -> {}", render(&p));

    println!();
}

/// Evaluate a polynomial at a few points
fn evaluation() {
    println!("--- Evaluation ---\n");

    let p: Polynomial = [(1.0, 2), (-3.0, 1), (2.0, 0)].into_iter().collect();
    println!("p(x) = {}", p);
    for x in [0.0, 1.0, 2.0, 3.0] {
        println!("  p({}) = {}", x, p.eval(x));
    }

    println!();
}

/// Operators outside the polynomial grammar are rejected
fn rejected_input() {
    println!("--- Rejected Input ---\n");

    for input in ["2+3*5%2", "3x^", "1.2.3x^2"] {
        match input.parse::<Polynomial>() {
            Ok(p) => println!("{:?} parsed as {}", input, p),
            Err(e) => println!("{:?}: {}", input, e),
        }
    }
}
