//! Input validation tests.
//!
//! Parameter errors surface at construction time, never mid-stream:
//! - Periods outside `2..=100_000`
//! - Non-finite or non-positive SAR factors and T3 volume factors
//! - High/low series of different lengths
//!
//! Data problems are not errors: NaN samples are skipped and short series
//! simply produce no values.

#![allow(clippy::float_cmp)]

use fast_ta_stream::config::{PeriodParams, RangeParams, SarParams, T3Params};
use fast_ta_stream::error::Error;
use fast_ta_stream::indicators::{
    dema, ema, kama, midpoint, midprice, sar, sma, t3, tema, trima, wma, Ema, Sar, Sma, T3,
};
use fast_ta_stream::prelude::*;
use fast_ta_stream::traits::MAX_PERIOD;

const DATA: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

// ==================== Period Bounds ====================

#[test]
fn validation_period_below_minimum_for_every_period_family() {
    for period in [0, 1] {
        let results = [
            sma(&DATA, period),
            ema(&DATA, period),
            wma(&DATA, period),
            dema(&DATA, period),
            tema(&DATA, period),
            trima(&DATA, period),
            kama(&DATA, period),
            t3(&DATA, period, 0.7),
            midpoint(&DATA, period),
            midprice(&DATA, &DATA, period),
        ];
        for result in results {
            assert!(
                matches!(result, Err(Error::InvalidPeriod { period: p, .. }) if p == period),
                "period {period} accepted"
            );
        }
    }
}

#[test]
fn validation_period_above_maximum() {
    let err = Sma::<f64>::new(MAX_PERIOD + 1).unwrap_err();
    assert!(matches!(err, Error::InvalidPeriod { period, .. } if period == MAX_PERIOD + 1));
    assert!(err.to_string().contains("at most"));
}

#[test]
fn validation_maximum_period_is_accepted() {
    let out = sma(&DATA, MAX_PERIOD).unwrap();
    assert!(out.iter().all(Option::is_none));
}

#[test]
fn validation_config_build_reports_bad_period() {
    for config in [
        IndicatorConfig::Wma(PeriodParams::new(1)),
        IndicatorConfig::Midprice(RangeParams::new(0)),
        IndicatorConfig::T3(T3Params {
            period: 1,
            volume_factor: 0.7,
        }),
    ] {
        assert!(
            matches!(config.build::<f64>(), Err(Error::InvalidPeriod { .. })),
            "{config:?}"
        );
    }
}

// ==================== Factor Parameters ====================

#[test]
fn validation_sar_rejects_bad_factors() {
    for (acceleration, maximum) in [
        (0.0, 0.2),
        (-0.02, 0.2),
        (0.02, 0.0),
        (f64::NAN, 0.2),
        (0.02, f64::INFINITY),
    ] {
        let err = Sar::<f64>::new(acceleration, maximum).unwrap_err();
        assert!(
            matches!(err, Error::InvalidParameter { .. }),
            "({acceleration}, {maximum}) accepted"
        );
    }
}

#[test]
fn validation_sar_acceleration_clamped_to_maximum() {
    let state = Sar::<f64>::new(0.5, 0.2).unwrap();
    assert_eq!(state.acceleration(), 0.2);
    assert_eq!(state.maximum(), 0.2);
}

#[test]
fn validation_sar_error_names_parameter() {
    let err = IndicatorConfig::Sar(SarParams {
        acceleration: 0.02,
        maximum: -1.0,
    })
    .build::<f64>()
    .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "maximum", .. }));
}

#[test]
fn validation_t3_volume_factor_range() {
    for volume_factor in [0.0, -0.1, 1.01, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                T3::<f64>::new(5, volume_factor),
                Err(Error::InvalidParameter {
                    name: "volume_factor",
                    ..
                })
            ),
            "{volume_factor} accepted"
        );
    }
    assert!(T3::<f64>::new(5, 1.0).is_ok());
    assert!(T3::<f64>::new(5, 0.01).is_ok());
}

// ==================== Paired Series ====================

#[test]
fn validation_length_mismatch() {
    let high = [2.0, 3.0, 4.0];
    let low = [1.0, 2.0];
    assert!(matches!(
        sar(&high, &low, 0.02, 0.2),
        Err(Error::LengthMismatch { .. })
    ));
    assert!(matches!(
        midprice(&high, &low, 2),
        Err(Error::LengthMismatch { .. })
    ));
}

// ==================== Data Edge Cases ====================

#[test]
fn validation_empty_input_is_not_an_error() {
    let empty: [f64; 0] = [];
    assert!(sma(&empty, 5).unwrap().is_empty());
    assert!(ema(&empty, 5).unwrap().is_empty());
    assert!(sar(&empty, &empty, 0.02, 0.2).unwrap().is_empty());
}

#[test]
fn validation_minimum_period_is_accepted() {
    assert_eq!(sma(&DATA, 2).unwrap()[1], Some(1.5));
}

#[test]
fn validation_period_equal_to_length_gives_one_value() {
    for out in [
        sma(&DATA, DATA.len()).unwrap(),
        wma(&DATA, DATA.len()).unwrap(),
        ema(&DATA, DATA.len()).unwrap(),
        trima(&DATA, DATA.len()).unwrap(),
        midpoint(&DATA, DATA.len()).unwrap(),
    ] {
        assert!(out[..DATA.len() - 1].iter().all(Option::is_none));
        assert!(out[DATA.len() - 1].is_some());
    }
}

#[test]
fn validation_series_shorter_than_lookback() {
    let out = tema(&DATA, 5).unwrap();
    assert_eq!(out.len(), DATA.len());
    assert!(out.iter().all(Option::is_none));
}

#[test]
fn validation_nan_samples_are_skipped() {
    let data = [1.0, f64::NAN, 2.0, 3.0];
    let out = sma(&data, 2).unwrap();
    assert_eq!(out, vec![None, None, Some(1.5), Some(2.5)]);
}

#[test]
fn validation_nan_in_either_side_of_high_low_is_missing() {
    let high = [10.0, f64::NAN, 11.0, 12.0];
    let low = [9.0, 9.5, f64::NAN, 10.0];
    let out = midprice(&high, &low, 2).unwrap();
    assert_eq!(out, vec![None, None, None, Some(10.5)]);
}

#[test]
fn validation_infinite_samples_are_skipped() {
    let out = sma(&[1.0, f64::INFINITY, 3.0, 4.0], 2).unwrap();
    assert_eq!(out, vec![None, None, Some(2.0), Some(3.5)]);

    let out = sma(&[f64::INFINITY, f64::NEG_INFINITY, 1.0], 2).unwrap();
    assert_eq!(out, vec![None, None, None]);
}

#[test]
fn validation_infinite_samples_never_reach_ema() {
    let out = ema(&[1.0, f64::INFINITY, 2.0, 3.0], 2).unwrap();
    assert_eq!(out[..2], [None, None]);
    assert!((out[2].unwrap() - 1.5).abs() < 1e-12);
    assert!((out[3].unwrap() - 2.5).abs() < 1e-12);
}

#[test]
fn validation_infinite_samples_keep_chained_stages_aligned() {
    let dense = [1.0, 2.0, 3.0, 4.0, 5.0];
    let gapped = [1.0, f64::INFINITY, 2.0, 3.0, f64::NEG_INFINITY, 4.0, 5.0];
    let expected = dema(&dense, 2).unwrap();
    let out = dema(&gapped, 2).unwrap();

    assert_eq!(out[1], None);
    assert_eq!(out[4], None);
    let kept: Vec<Option<f64>> = out
        .iter()
        .zip(&gapped)
        .filter(|(_, v)| v.is_finite())
        .map(|(o, _)| *o)
        .collect();
    assert_eq!(kept, expected);
    assert!(out[6].is_some());
}

#[test]
fn validation_infinite_revise_is_ignored() {
    let mut state = Ema::<f64>::new(2).unwrap();
    state.next(1.0, BarMode::Commit);
    let committed = state.next(2.0, BarMode::Commit);
    assert_eq!(state.next(f64::INFINITY, BarMode::Revise), None);
    assert_eq!(state.next(2.0, BarMode::Revise), committed);
    assert_eq!(state.bars(), 2);
}

#[test]
fn validation_outputs_never_nan_for_any_family() {
    let close = [1.0, f64::INFINITY, 2.0, f64::NEG_INFINITY, 3.0, 2.5, 4.0, 3.0];
    for config in [
        r#"{"family": "SMA", "period": 2}"#,
        r#"{"family": "EMA", "period": 2}"#,
        r#"{"family": "DEMA", "period": 2}"#,
        r#"{"family": "TEMA", "period": 2}"#,
        r#"{"family": "KAMA", "period": 2}"#,
        r#"{"family": "SAR"}"#,
        r#"{"family": "MIDPRICE", "period": 2}"#,
    ] {
        let config: IndicatorConfig = serde_json::from_str(config).unwrap();
        let mut state = config.build::<f64>().unwrap();
        for &v in &close {
            let bar = PriceBar::new(v + 0.5, v - 0.5, v);
            if let Some(out) = state.next(bar, BarMode::Commit) {
                assert!(out.is_finite(), "{config:?} produced {out}");
            }
        }
    }
}

#[test]
fn validation_all_nan_series() {
    let data = [f64::NAN; 10];
    let mut state = Sma::<f64>::new(2).unwrap();
    for &v in &data {
        assert_eq!(state.next(v, BarMode::Commit), None);
    }
    assert_eq!(state.bars(), 0);
}
