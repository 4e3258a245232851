//! Property-based tests for all indicator families using proptest.
//!
//! These tests verify invariant properties that must hold for all valid inputs,
//! using randomly generated bars and parameters to find edge cases.

#![allow(clippy::float_cmp)]

mod common;

use common::{commit_all, distort, leading_none};
use fast_ta_stream::config::{PeriodParams, RangeParams, SarParams, T3Params};
use fast_ta_stream::indicators::{ema, kama, midpoint, midprice, sar, sma, trima, wma};
use fast_ta_stream::prelude::*;
use proptest::prelude::*;

// ==================== Test Data Generators ====================

/// Generate a random close series (all positive values)
fn arb_price_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, min_len..=max_len)
}

/// Generate bars with valid constraints (low <= close <= high)
fn arb_bars(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<PriceBar<f64>>> {
    prop::collection::vec(
        (1.0..1000.0_f64, 0.0..0.1_f64, 0.0..0.1_f64),
        min_len..=max_len,
    )
    .prop_map(|data| {
        data.into_iter()
            .map(|(base, high_pct, low_pct)| {
                PriceBar::new(base * (1.0 + high_pct), base * (1.0 - low_pct), base)
            })
            .collect()
    })
}

fn arb_smoother_config() -> impl Strategy<Value = IndicatorConfig> {
    prop_oneof![
        (2usize..=12).prop_map(|p| IndicatorConfig::Sma(PeriodParams::new(p))),
        (2usize..=12).prop_map(|p| IndicatorConfig::Ema(PeriodParams::new(p))),
        (2usize..=12).prop_map(|p| IndicatorConfig::Wma(PeriodParams::new(p))),
        (2usize..=8).prop_map(|p| IndicatorConfig::Dema(PeriodParams::new(p))),
        (2usize..=6).prop_map(|p| IndicatorConfig::Tema(PeriodParams::new(p))),
        (2usize..=12).prop_map(|p| IndicatorConfig::Trima(PeriodParams::new(p))),
    ]
}

fn arb_other_config() -> impl Strategy<Value = IndicatorConfig> {
    prop_oneof![
        (2usize..=12).prop_map(|p| IndicatorConfig::Kama(PeriodParams::new(p))),
        (2usize..=5, 0.05..=1.0_f64).prop_map(|(period, volume_factor)| {
            IndicatorConfig::T3(T3Params {
                period,
                volume_factor,
            })
        }),
        (0.005..0.1_f64, 0.1..0.5_f64).prop_map(|(acceleration, maximum)| {
            IndicatorConfig::Sar(SarParams {
                acceleration,
                maximum,
            })
        }),
        (2usize..=12).prop_map(|p| IndicatorConfig::Midpoint(RangeParams::new(p))),
        (2usize..=12).prop_map(|p| IndicatorConfig::Midprice(RangeParams::new(p))),
        Just(IndicatorConfig::HtTrendline),
    ]
}

/// Any family with randomized parameters.
fn arb_config() -> impl Strategy<Value = IndicatorConfig> {
    prop_oneof![arb_smoother_config(), arb_other_config()]
}

// ==================== Streaming Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Output length equals input length
    #[test]
    fn prop_output_length(config in arb_config(), bars in arb_bars(0, 120)) {
        let wrapped: Vec<Option<PriceBar<f64>>> = bars.iter().copied().map(Some).collect();
        let out = batch(config.build::<f64>().unwrap(), &wrapped);
        prop_assert_eq!(out.len(), bars.len());
    }

    /// Exactly `lookback` leading outputs are not ready, and none after
    #[test]
    fn prop_lookback_prefix(config in arb_config(), bars in arb_bars(0, 120)) {
        let out = commit_all(&config, &bars);
        let expected = config.lookback().min(bars.len());
        prop_assert_eq!(leading_none(&out), expected);
        prop_assert!(out[expected..].iter().all(Option::is_some));
        prop_assert!(out.iter().flatten().all(|v| !v.is_nan()));
    }

    /// Streaming one bar at a time equals the batch fold
    #[test]
    fn prop_stream_equals_batch(config in arb_config(), bars in arb_bars(1, 120)) {
        let wrapped: Vec<Option<PriceBar<f64>>> = bars.iter().copied().map(Some).collect();
        let folded = batch(config.build::<f64>().unwrap(), &wrapped);
        prop_assert_eq!(folded, commit_all(&config, &bars));
    }

    /// Any sequence of provisional revisions followed by the final value is
    /// indistinguishable from committing the final value directly
    #[test]
    fn prop_revise_then_final_equals_commit(
        config in arb_config(),
        bars in arb_bars(1, 100),
        shifts in prop::collection::vec(-5.0..5.0_f64, 1..4),
    ) {
        let mut revised = config.build::<f64>().unwrap();
        let mut direct = config.build::<f64>().unwrap();
        for &bar in &bars {
            revised.next(distort(bar, shifts[0]), BarMode::Commit);
            for &shift in &shifts[1..] {
                revised.next(distort(bar, shift), BarMode::Revise);
            }
            let a = revised.next(bar, BarMode::Revise);
            let b = direct.next(bar, BarMode::Commit);
            prop_assert_eq!(a, b);
            prop_assert_eq!(revised.bars(), direct.bars());
        }
        prop_assert_eq!(revised, direct);
    }

    /// Missing samples interleaved anywhere only produce `None` at their own
    /// positions and do not perturb the other outputs
    #[test]
    fn prop_missing_samples_are_transparent(
        config in arb_config(),
        bars in arb_bars(1, 100),
        mask in prop::collection::vec(prop::bool::weighted(0.15), 100),
    ) {
        let mut gapped = Vec::new();
        for (i, &bar) in bars.iter().enumerate() {
            if mask[i] {
                gapped.push(None);
            }
            gapped.push(Some(bar));
        }
        let out = batch(config.build::<f64>().unwrap(), &gapped);
        let kept: Vec<Option<f64>> = out
            .iter()
            .zip(&gapped)
            .filter(|(_, input)| input.is_some())
            .map(|(v, _)| *v)
            .collect();
        for (v, input) in out.iter().zip(&gapped) {
            if input.is_none() {
                prop_assert!(v.is_none());
            }
        }
        prop_assert_eq!(kept, commit_all(&config, &bars));
    }

    /// Reset then replay reproduces a fresh run
    #[test]
    fn prop_reset_equals_fresh(config in arb_config(), warm in arb_bars(0, 80), bars in arb_bars(0, 80)) {
        let mut state = config.build::<f64>().unwrap();
        for &bar in &warm {
            state.next(bar, BarMode::Commit);
        }
        state.reset();
        let replay: Vec<Option<f64>> = bars.iter().map(|&b| state.next(b, BarMode::Commit)).collect();
        prop_assert_eq!(replay, commit_all(&config, &bars));
    }
}

// ==================== Window Bounds ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// SMA, WMA, TRIMA and MIDPOINT stay within the window's min and max
    #[test]
    fn prop_window_averages_bounded(data in arb_price_series(2, 100), period in 2usize..=10) {
        let outputs = [
            sma(&data, period).unwrap(),
            wma(&data, period).unwrap(),
            trima(&data, period).unwrap(),
            midpoint(&data, period).unwrap(),
        ];
        for out in &outputs {
            for (i, v) in out.iter().enumerate() {
                if let Some(v) = v {
                    let window = &data[i + 1 - period..=i];
                    let lo = window.iter().copied().fold(f64::INFINITY, f64::min);
                    let hi = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    prop_assert!(*v >= lo - 1e-9 && *v <= hi + 1e-9, "{} outside [{}, {}]", v, lo, hi);
                }
            }
        }
    }

    /// SMA equals the naive mean of the window
    #[test]
    fn prop_sma_matches_naive_mean(data in arb_price_series(2, 100), period in 2usize..=10) {
        let out = sma(&data, period).unwrap();
        for i in (period - 1)..data.len() {
            let mean = data[i + 1 - period..=i].iter().sum::<f64>() / period as f64;
            prop_assert!((out[i].unwrap() - mean).abs() < 1e-9);
        }
    }

    /// MIDPRICE stays between the lowest low and the highest high of its window
    #[test]
    fn prop_midprice_bounded(bars in arb_bars(2, 100), period in 2usize..=10) {
        let high: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let low: Vec<f64> = bars.iter().map(|b| b.low).collect();
        let out = midprice(&high, &low, period).unwrap();
        for (i, v) in out.iter().enumerate() {
            if let Some(v) = v {
                let lo = low[i + 1 - period..=i].iter().copied().fold(f64::INFINITY, f64::min);
                let hi = high[i + 1 - period..=i].iter().copied().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(*v >= lo && *v <= hi);
            }
        }
    }

    /// The printed stop never falls strictly inside the bar's range
    #[test]
    fn prop_sar_outside_bar_range(bars in arb_bars(2, 150)) {
        let high: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let low: Vec<f64> = bars.iter().map(|b| b.low).collect();
        let out = sar(&high, &low, 0.02, 0.2).unwrap();
        prop_assert!(out[0].is_none());
        for i in 1..out.len() {
            let stop = out[i].unwrap();
            prop_assert!(
                !(stop > low[i] && stop < high[i]),
                "stop {} inside [{}, {}] at {}", stop, low[i], high[i], i
            );
        }
    }
}

// ==================== Constant Input ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Smoothers of a constant series equal that constant
    #[test]
    fn prop_constant_input(constant in 1.0..1000.0_f64, len in 30usize..80, period in 2usize..=8) {
        let data = vec![constant; len];
        for out in [ema(&data, period).unwrap(), kama(&data, period).unwrap()] {
            for v in out.iter().flatten() {
                prop_assert!((v - constant).abs() < 1e-9 * constant.max(1.0));
            }
        }
    }
}
