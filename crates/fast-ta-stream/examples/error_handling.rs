//! Error Handling Examples
//!
//! This example demonstrates the error handling patterns of fast-ta-stream.
//! Errors only come from parameters and paired-series shapes; short or gappy
//! data is answered with `None`.
//!
//! Run with: `cargo run --example error_handling`

use fast_ta_stream::prelude::*;

fn main() {
    println!("=== Error Handling Examples ===");
    println!();

    // Example 1: Invalid period
    println!("1. Invalid Period:");
    match sma(&[1.0_f64, 2.0, 3.0], 1) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::InvalidPeriod { period, reason }) => {
            println!("   Caught InvalidPeriod error (expected)");
            println!("   Details: period={period}, reason={reason}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 2: Invalid factor
    println!("2. Invalid SAR Maximum:");
    match Sar::<f64>::new(0.02, -0.2) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::InvalidParameter { name, value, reason }) => {
            println!("   Caught InvalidParameter error (expected)");
            println!("   Details: {name} = {value}: {reason}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 3: Mismatched high/low lengths
    println!("3. Length Mismatch:");
    match midprice(&[2.0_f64, 3.0, 4.0], &[1.0, 2.0], 2) {
        Ok(_) => println!("   Unexpected success"),
        Err(e @ Error::LengthMismatch { .. }) => {
            println!("   Caught LengthMismatch error (expected)");
            println!("   Details: {e}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 4: Not an error
    println!("4. Short and Gappy Data:");
    let data = [1.0_f64, f64::NAN, 2.0];
    match sma(&data, 5) {
        Ok(values) => println!("   {values:?} (warming up, no error)"),
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 5: Unknown family in configuration
    println!("5. Unknown Family:");
    match serde_json::from_str::<IndicatorConfig>(r#"{"family": "RSI", "period": 14}"#) {
        Ok(_) => println!("   Unexpected success"),
        Err(e) => println!("   Rejected at parse time: {e}"),
    }
}
