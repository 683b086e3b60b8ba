//! Error types for the iteration engine.
//!
//! All failures in this crate are deterministic configuration, state, or
//! collaborator-contract errors. There is no transient-failure category
//! and nothing is retried: an [`Error`] means the run is misconfigured or
//! a pluggable collaborator broke its contract.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the algorithm engine and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No prototype entity was configured for cloned population
    /// initialization.
    #[error("no prototype entity configured for population initialization")]
    MissingPrototype,

    /// An operation that requires a non-empty population was given none,
    /// or the configured population size is zero.
    #[error("population is empty")]
    EmptyPopulation,

    /// A lifecycle method was called before `initialize()`.
    #[error("algorithm has not been initialized")]
    NotInitialized,

    /// `initialize()` was called twice without an intervening `reset()`.
    #[error("algorithm is already initialized; call reset() first")]
    AlreadyInitialized,

    /// An iteration strategy changed the topology's membership count.
    /// Strategies update entities in place; they never add or remove
    /// members.
    #[error("iteration strategy changed topology size from {before} to {after}")]
    TopologyMutated {
        /// Membership count before the round.
        before: usize,
        /// Membership count after the round.
        after: usize,
    },

    /// An entity was left without a fitness value. Every position change
    /// must be followed by `calculate_fitness` before the entity is
    /// compared or the round ends.
    #[error("entity {index} has stale fitness")]
    StaleFitness {
        /// Index of the offending entity in insertion order.
        index: usize,
    },

    /// A topology returned an empty neighborhood for one of its own
    /// members, which best-extraction cannot tolerate.
    #[error("topology returned an empty neighborhood for member {index}")]
    EmptyNeighborhood {
        /// Index of the member with no neighbors.
        index: usize,
    },

    /// Domain bounds failed validation.
    #[error("invalid domain bounds: {0}")]
    InvalidBounds(String),

    /// A strategy configuration failed validation.
    #[error("invalid strategy configuration: {0}")]
    InvalidConfig(String),
}
