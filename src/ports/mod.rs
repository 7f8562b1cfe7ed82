//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (here, the random source
//! standing in for a predictive model).

mod sampler;

pub use sampler::Sampler;
