//! Guard Clauses Example
//!
//! Validates constructor arguments with preconditions and verifies results
//! with checks, including a custom failure type.
//!
//! Run with: cargo run --example guard_clauses

use std::fmt;

use requisite::prelude::*;

#[derive(Debug)]
struct Temperature {
    celsius: f64,
}

impl Temperature {
    fn new(celsius: f64) -> Result<Self, PreconditionFailed> {
        let celsius = celsius.require_that_with(
            |c| *c >= -273.15,
            |c| format!("{} C is below absolute zero", c),
        )?;
        Ok(Temperature { celsius })
    }

    fn fahrenheit(&self) -> Result<f64, ConversionError> {
        (self.celsius * 9.0 / 5.0 + 32.0)
            .check_or_else_with(|f| f.is_finite(), |f| ConversionError(*f))
    }
}

#[derive(Debug)]
struct ConversionError(f64);

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conversion produced {}", self.0)
    }
}

impl std::error::Error for ConversionError {}

fn main() {
    println!("=== Guard Clauses Example ===\n");

    preconditions();
    checks();
    default_messages();
}

/// Demonstrates argument validation
fn preconditions() {
    println!("--- Preconditions ---\n");

    for input in [21.5, -300.0] {
        match Temperature::new(input) {
            Ok(t) => println!("  accepted: {:?}", t),
            Err(e) => println!("  rejected: {}", e),
        }
    }
    println!();
}

/// Demonstrates post-condition checks with a custom failure
fn checks() {
    println!("--- Checks ---\n");

    let warm = Temperature { celsius: 21.5 };
    println!("  21.5 C in F: {:?}", warm.fahrenheit());

    let broken = Temperature { celsius: f64::MAX };
    match broken.fahrenheit() {
        Ok(f) => println!("  unexpected: {}", f),
        Err(e) => println!("  failed: {}", e),
    }
    println!();
}

/// Demonstrates messages echoed from the guarded expression
fn default_messages() {
    println!("--- Default Messages ---\n");

    let retries = 12;
    if let Err(e) = require!(retries, retries <= 10) {
        println!("  {}", e);
    }

    let sorted = vec![3, 1, 2];
    if let Err(e) = check!(sorted, |v| v.windows(2).all(|w| w[0] <= w[1])) {
        println!("  {}", e);
    }
}
