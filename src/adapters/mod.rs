//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external libraries:
//! - `rng`: rand/rand_chacha for bounded random sampling

pub mod rng;

pub use rng::ChaChaSampler;
