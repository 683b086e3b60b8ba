//! The generational control loop.
//!
//! [`Algorithm`] is the single-population engine: it owns one topology
//! plus the strategy objects that fill and update it, and drives the
//! lifecycle *initialize once → iterate repeatedly → extract solutions*.
//! Stopping conditions live outside the engine; callers poll whatever
//! criterion they like between calls to [`Algorithm::iterate`].
//!
//! # Core Traits
//!
//! - [`InitializationStrategy`]: produces the starting population
//! - [`IterationStrategy`]: performs one algorithm-specific round
//!
//! # Key Types
//!
//! - [`Algorithm`]: the engine itself
//! - [`ClonedPopulationInitialization`]: prototype-cloning initializer

mod engine;
mod initialization;
mod iteration;

pub use engine::Algorithm;
pub use initialization::{ClonedPopulationInitialization, InitializationStrategy};
pub use iteration::IterationStrategy;
