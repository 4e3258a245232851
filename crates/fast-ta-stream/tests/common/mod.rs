//! Common test utilities shared by the integration tests.

use fast_ta_stream::prelude::*;

/// Default epsilon for floating-point comparisons
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for values that go through long recursive chains
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Compare two optional outputs with an absolute tolerance.
#[allow(dead_code)]
pub fn approx_eq_opt(a: Option<f64>, b: Option<f64>, eps: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() <= eps,
        _ => false,
    }
}

/// Assert two output series agree element-wise, reporting the first mismatch.
#[allow(dead_code)]
pub fn assert_outputs_eq(actual: &[Option<f64>], expected: &[Option<f64>], eps: f64, label: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{label}: length {} != {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            approx_eq_opt(*a, *e, eps),
            "{label}: index {i} expected {e:?}, got {a:?}"
        );
    }
}

/// Number of leading `None` outputs.
#[allow(dead_code)]
pub fn leading_none(outputs: &[Option<f64>]) -> usize {
    outputs.iter().take_while(|v| v.is_none()).count()
}

// ==================== Data Generators ====================

/// Deterministic pseudo-random walk (xorshift) so fixtures stay reproducible.
#[allow(dead_code)]
pub fn random_walk(seed: u64, len: usize) -> Vec<f64> {
    let mut state = seed.max(1);
    let mut price = 100.0;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let noise = (state % 2001) as f64 / 1000.0 - 1.0;
            price += noise + (i as f64 / 7.0).sin() * 0.4;
            price
        })
        .collect()
}

/// Build high/low/close bars around a close series with a varying spread.
#[allow(dead_code)]
pub fn bars_from_close(close: &[f64]) -> Vec<PriceBar<f64>> {
    close
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let spread = 0.3 + (i % 5) as f64 * 0.2;
            PriceBar::new(c + spread, c - spread * 0.8, c)
        })
        .collect()
}

/// One representative configuration per family, with short periods so
/// every family produces values on a modest series.
#[allow(dead_code)]
pub fn sample_configs() -> Vec<IndicatorConfig> {
    let configs: Vec<IndicatorConfig> = [
        r#"{"family": "SMA", "period": 5}"#,
        r#"{"family": "EMA", "period": 5}"#,
        r#"{"family": "WMA", "period": 5}"#,
        r#"{"family": "DEMA", "period": 5}"#,
        r#"{"family": "TEMA", "period": 4}"#,
        r#"{"family": "TRIMA", "period": 6}"#,
        r#"{"family": "KAMA", "period": 6}"#,
        r#"{"family": "T3", "period": 3, "volume_factor": 0.7}"#,
        r#"{"family": "SAR", "acceleration": 0.02, "maximum": 0.2}"#,
        r#"{"family": "MIDPOINT", "period": 7}"#,
        r#"{"family": "MIDPRICE", "period": 7}"#,
        r#"{"family": "HT_TRENDLINE"}"#,
    ]
    .iter()
    .map(|json| serde_json::from_str(json).unwrap())
    .collect();
    assert_eq!(configs.len(), Family::ALL.len());
    configs
}

// ==================== Replay Helpers ====================

/// Feed every bar with Commit through a fresh state built from `config`.
#[allow(dead_code)]
pub fn commit_all(config: &IndicatorConfig, bars: &[PriceBar<f64>]) -> Vec<Option<f64>> {
    let mut state = config.build::<f64>().unwrap();
    bars.iter()
        .map(|&bar| state.next(bar, BarMode::Commit))
        .collect()
}

/// Feed every bar as a sequence of provisional values followed by the
/// final one: each bar is committed with a distorted value, revised a few
/// times, and finally revised to the true value. The output recorded for a
/// bar is the one returned by the last revise.
#[allow(dead_code)]
pub fn commit_with_revisions(config: &IndicatorConfig, bars: &[PriceBar<f64>]) -> Vec<Option<f64>> {
    let mut state = config.build::<f64>().unwrap();
    bars.iter()
        .enumerate()
        .map(|(i, &bar)| {
            let shift = if i % 2 == 0 { 1.5 } else { -2.25 };
            state.next(distort(bar, shift), BarMode::Commit);
            state.next(distort(bar, -shift), BarMode::Revise);
            state.next(distort(bar, shift * 3.0), BarMode::Revise);
            state.next(bar, BarMode::Revise)
        })
        .collect()
}

/// Shift every field of a bar by the same amount.
#[allow(dead_code)]
pub fn distort(bar: PriceBar<f64>, shift: f64) -> PriceBar<f64> {
    PriceBar::new(bar.high + shift, bar.low + shift, bar.close + shift)
}
