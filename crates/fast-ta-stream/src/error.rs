//! Error types for fast-ta-stream.
//!
//! Errors only arise when an indicator state is constructed or when a batch
//! call is handed malformed input. A state that is not yet warmed up is not an
//! error: it yields `None` from [`Indicator::next`](crate::traits::Indicator::next).

use thiserror::Error;

/// The main error type for fast-ta-stream operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The period parameter is invalid.
    ///
    /// Returned when the period is below the family minimum (2 for every
    /// period-based family) or above [`MAX_PERIOD`](crate::traits::MAX_PERIOD).
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A non-period parameter (acceleration, maximum, volume factor) is invalid.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was provided, widened to `f64` for reporting.
        value: f64,
        /// Description of why the value is invalid.
        reason: &'static str,
    },

    /// Two input series that must be paired have different lengths.
    ///
    /// This is returned by the two-series batch functions (SAR, MIDPRICE) when
    /// the high and low series disagree in length.
    #[error("input length mismatch: {description}")]
    LengthMismatch {
        /// Description of the mismatch.
        description: String,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert values
    /// (e.g., converting a `usize` period to a generic `Float` type) and
    /// the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the fast-ta-stream Error type.
pub type Result<T> = std::result::Result<T, Error>;
