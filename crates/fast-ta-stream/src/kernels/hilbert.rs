//! Hilbert transform core for the instantaneous trendline.
//!
//! This is Ehlers' homodyne cycle estimator in its incremental form. Each
//! bar runs a four-bar weighted smoother, four Hilbert filters (detrender,
//! quadrature and the two 90 degree phase advances), a homodyne
//! discriminator for the dominant cycle period, and finally averages the
//! last `round(smooth_period)` prices into the trendline.
//!
//! The filters keep separate delay lines for odd and even bars, so the bar
//! parity is part of the input. The whole accumulator is `Copy`: streaming
//! states snapshot it at each commit and recompute the open bar from the
//! snapshot on revise.
//!
//! # Warm-up
//!
//! ```text
//! bars 0..=36   fill the price window only
//! bars 37..=62  run the transform, output discarded
//! bar 63        first trendline
//! ```

use crate::error::Result;
use crate::kernels::window::SlidingWindow;
use crate::traits::SeriesElement;
use std::f64::consts::PI;

/// Number of prices the trendline may average over, and the window size.
pub const HT_PRICE_WINDOW: usize = 50;

/// First bar (0-based) on which the transform runs.
pub const HT_WARMUP_START: usize = 37;

/// Number of leading bars without a trendline.
pub const HT_LOOKBACK: usize = 63;

/// Constants of the transform in the series element type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HilbertConstants<T> {
    a: T,
    b: T,
    period_scale: T,
    period_offset: T,
    smooth: T,
    carry: T,
    rise_limit: T,
    fall_limit: T,
    min_period: T,
    max_period: T,
    period_weight: T,
    period_carry: T,
    full_circle: T,
    deg_per_rad: T,
    half: T,
    tenth: T,
    three: T,
    four: T,
    ten: T,
}

impl<T: SeriesElement> HilbertConstants<T> {
    /// Converts the transform constants into `T`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a constant cannot be represented.
    pub fn new() -> Result<Self> {
        Ok(Self {
            a: T::from_f64(0.0962)?,
            b: T::from_f64(0.5769)?,
            period_scale: T::from_f64(0.075)?,
            period_offset: T::from_f64(0.54)?,
            smooth: T::from_f64(0.2)?,
            carry: T::from_f64(0.8)?,
            rise_limit: T::from_f64(1.5)?,
            fall_limit: T::from_f64(0.67)?,
            min_period: T::from_f64(6.0)?,
            max_period: T::from_f64(50.0)?,
            period_weight: T::from_f64(0.33)?,
            period_carry: T::from_f64(0.67)?,
            full_circle: T::from_f64(360.0)?,
            deg_per_rad: T::from_f64(180.0 / PI)?,
            half: T::from_f64(0.5)?,
            tenth: T::from_f64(0.1)?,
            three: T::from_f64(3.0)?,
            four: T::from_f64(4.0)?,
            ten: T::from_f64(10.0)?,
        })
    }
}

/// One Hilbert FIR filter with its odd/even delay lines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct HilbertFilter<T> {
    odd: [T; 3],
    even: [T; 3],
    prev_odd: T,
    prev_even: T,
    prev_input_odd: T,
    prev_input_even: T,
}

impl<T: SeriesElement> HilbertFilter<T> {
    fn apply(&mut self, input: T, slot: usize, even: bool, adjusted: T, c: &HilbertConstants<T>) -> T {
        let (ring, prev, prev_input) = if even {
            (&mut self.even, &mut self.prev_even, &mut self.prev_input_even)
        } else {
            (&mut self.odd, &mut self.prev_odd, &mut self.prev_input_odd)
        };
        let scaled = c.a * input;
        let mut value = -ring[slot];
        ring[slot] = scaled;
        value = value + scaled;
        value = value - *prev;
        *prev = c.b * *prev_input;
        value = value + *prev;
        *prev_input = input;
        value * adjusted
    }
}

/// Full accumulator of the instantaneous trendline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrendlineAccumulator<T> {
    detrender: HilbertFilter<T>,
    q1: HilbertFilter<T>,
    ji: HilbertFilter<T>,
    jq: HilbertFilter<T>,
    slot: usize,
    i1_odd_prev2: T,
    i1_odd_prev3: T,
    i1_even_prev2: T,
    i1_even_prev3: T,
    prev_i2: T,
    prev_q2: T,
    re: T,
    im: T,
    period: T,
    smooth_period: T,
    trend1: T,
    trend2: T,
    trend3: T,
}

impl<T: SeriesElement> TrendlineAccumulator<T> {
    /// Current smoothed dominant cycle period.
    #[must_use]
    pub fn smooth_period(&self) -> T {
        self.smooth_period
    }

    /// Runs one bar of the transform and returns the trendline candidate.
    ///
    /// `prices` must end with the price of bar `bar` and hold at least the
    /// last four prices.
    pub fn advance(&mut self, prices: &SlidingWindow<T>, bar: usize, c: &HilbertConstants<T>) -> T {
        let price = |age: usize| prices.back(age).unwrap_or_else(T::zero);
        let adjusted = c.period_scale * self.period + c.period_offset;
        let smoothed =
            (c.four * price(0) + c.three * price(1) + T::two() * price(2) + price(3)) * c.tenth;

        let slot = self.slot;
        let (q2, i2) = if bar % 2 == 0 {
            let detrender = self.detrender.apply(smoothed, slot, true, adjusted, c);
            let q1 = self.q1.apply(detrender, slot, true, adjusted, c);
            let ji = self.ji.apply(self.i1_even_prev3, slot, true, adjusted, c);
            let jq = self.jq.apply(q1, slot, true, adjusted, c);
            self.slot = (slot + 1) % 3;

            let q2 = c.smooth * (q1 + ji) + c.carry * self.prev_q2;
            let i2 = c.smooth * (self.i1_even_prev3 - jq) + c.carry * self.prev_i2;
            self.i1_odd_prev3 = self.i1_odd_prev2;
            self.i1_odd_prev2 = detrender;
            (q2, i2)
        } else {
            let detrender = self.detrender.apply(smoothed, slot, false, adjusted, c);
            let q1 = self.q1.apply(detrender, slot, false, adjusted, c);
            let ji = self.ji.apply(self.i1_odd_prev3, slot, false, adjusted, c);
            let jq = self.jq.apply(q1, slot, false, adjusted, c);

            let q2 = c.smooth * (q1 + ji) + c.carry * self.prev_q2;
            let i2 = c.smooth * (self.i1_odd_prev3 - jq) + c.carry * self.prev_i2;
            self.i1_even_prev3 = self.i1_even_prev2;
            self.i1_even_prev2 = detrender;
            (q2, i2)
        };

        self.re = c.smooth * (i2 * self.prev_i2 + q2 * self.prev_q2) + c.carry * self.re;
        self.im = c.smooth * (i2 * self.prev_q2 - q2 * self.prev_i2) + c.carry * self.im;
        self.prev_q2 = q2;
        self.prev_i2 = i2;

        let previous = self.period;
        if self.im != T::zero() && self.re != T::zero() {
            self.period = c.full_circle / ((self.im / self.re).atan() * c.deg_per_rad);
        }
        let ceiling = c.rise_limit * previous;
        if self.period > ceiling {
            self.period = ceiling;
        }
        let floor = c.fall_limit * previous;
        if self.period < floor {
            self.period = floor;
        }
        if self.period < c.min_period {
            self.period = c.min_period;
        } else if self.period > c.max_period {
            self.period = c.max_period;
        }
        self.smooth_period = c.period_weight * self.period + c.period_carry * self.smooth_period;

        // Average of the last int(smooth_period + 0.5) prices, newest first.
        let cycle = (self.smooth_period + c.half).floor();
        let mut trend = T::zero();
        let mut count = T::zero();
        for &v in prices.iter().rev() {
            if count >= cycle {
                break;
            }
            trend = trend + v;
            count = count + T::one();
        }
        if count > T::zero() {
            trend = trend / count;
        }

        let line = (c.four * trend + c.three * self.trend1 + T::two() * self.trend2 + self.trend3)
            / c.ten;
        self.trend3 = self.trend2;
        self.trend2 = self.trend1;
        self.trend1 = trend;
        line
    }
}
