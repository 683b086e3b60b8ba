//! Firefly movement rule — the reference iteration strategy.
//!
//! Each entity is attracted toward every *brighter* neighbor (better
//! fitness under the engine's ordering), with attractiveness decaying
//! exponentially in the squared distance, plus a uniform random step.
//! The rule only needs positions, neighborhoods, and fitness
//! comparisons, so it runs unchanged under any topology and entity type.
//!
//! # References
//!
//! - Yang, Xin-She (2009), "Firefly algorithms for multimodal
//!   optimization", *Stochastic Algorithms: Foundations and Applications*,
//!   169-178.

mod config;
mod strategy;

pub use config::FireflyConfig;
pub use strategy::FireflyIteration;
