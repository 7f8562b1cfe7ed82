//! Sampler port: Trait for bounded random generation.
//!
//! The forecasting and aggregation services have no real model behind them;
//! every metric is drawn uniformly from a fixed range. This trait abstracts
//! the random source from the application logic so tests can pin
//! deterministic sequences and verify bound compliance without flakiness.

/// Trait for bounded uniform sampling.
///
/// Both methods draw from the half-open range `[lo, hi)`, matching the
/// `floor(random * width) + lo` construction every generated metric uses.
pub trait Sampler {
    /// Draw a uniform integer from `[lo, hi)`.
    ///
    /// Implementations may panic when `lo >= hi`; callers own the range
    /// invariant.
    fn int_in(&mut self, lo: u32, hi: u32) -> u32;

    /// Draw a uniform float from `[lo, hi)`.
    fn float_in(&mut self, lo: f64, hi: f64) -> f64;
}
