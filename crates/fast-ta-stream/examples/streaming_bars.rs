//! Streaming Bars Example
//!
//! This example feeds a live-style tick stream into several indicators built
//! from JSON configuration. Ticks inside a bar revise the open bar; the first
//! tick of a new bar commits it.
//!
//! Run with: `cargo run --example streaming_bars`

use fast_ta_stream::prelude::*;

/// (bar index, high, low, close) ticks; several ticks per bar.
const TICKS: &[(usize, f64, f64, f64)] = &[
    (0, 44.50, 44.10, 44.34),
    (1, 44.40, 44.00, 44.20),
    (1, 44.40, 43.95, 44.09),
    (2, 44.10, 43.50, 43.61),
    (3, 44.40, 43.60, 44.33),
    (4, 44.90, 44.20, 44.70),
    (4, 44.95, 44.20, 44.83),
    (5, 45.20, 44.70, 45.10),
    (6, 45.50, 45.00, 45.42),
    (7, 45.90, 45.30, 45.84),
    (8, 46.20, 45.70, 46.08),
    (9, 46.10, 45.80, 45.89),
    (9, 46.10, 45.60, 45.70),
    (10, 46.10, 45.60, 46.03),
];

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let configs: Vec<IndicatorConfig> = serde_json::from_str(
        r#"[
            {"family": "SMA", "period": 5},
            {"family": "EMA", "period": 5},
            {"family": "KAMA", "period": 4},
            {"family": "SAR"},
            {"family": "MIDPRICE", "period": 3}
        ]"#,
    )?;

    let mut states = configs
        .iter()
        .map(IndicatorConfig::build::<f64>)
        .collect::<Result<Vec<_>>>()?;

    for config in &configs {
        println!("{:>10}: lookback {}", config.family(), config.lookback());
    }
    println!();

    let mut open_bar = None;
    for &(index, high, low, close) in TICKS {
        let mode = if open_bar == Some(index) {
            BarMode::Revise
        } else {
            open_bar = Some(index);
            BarMode::Commit
        };
        let bar = PriceBar::new(high, low, close);
        let values: Vec<String> = states
            .iter_mut()
            .map(|state| match state.next(bar, mode) {
                Some(v) => format!("{v:>8.3}"),
                None => format!("{:>8}", "-"),
            })
            .collect();
        println!("bar {index:>2} {mode:?}\t{}", values.join(" "));
    }

    Ok(())
}
