//! Optimization problem abstraction.
//!
//! The engine treats a problem as an opaque evaluator over position
//! vectors plus the domain bounds positions must stay within. Everything
//! else — constraints, penalties, benchmark families — lives on the
//! problem side of this boundary.
//!
//! # Key Types
//!
//! - [`OptimizationProblem`]: the evaluator contract
//! - [`Bounds`]: per-dimension search-space limits
//! - [`FnProblem`]: closure-backed problem for tests and quick experiments
//! - [`Solution`]: packaged position + fitness returned by the engine

mod bounds;
mod solution;

pub use bounds::Bounds;
pub use solution::Solution;

use crate::entity::Fitness;

/// An optimization problem: a fitness evaluator over a bounded domain.
///
/// Implementations must be `Send + Sync`; one problem instance is shared
/// (behind an `Arc`) by every engine cloned from the same run.
pub trait OptimizationProblem: Send + Sync {
    /// The fitness type produced by this problem.
    type Fitness: Fitness;

    /// Evaluates the fitness of a position.
    ///
    /// Whether larger or smaller values are better is decided by the
    /// engine's [`FitnessOrdering`](crate::comparator::FitnessOrdering);
    /// the problem just measures.
    fn fitness_of(&self, position: &[f64]) -> Self::Fitness;

    /// The search-space bounds used for population initialization and
    /// position clamping.
    fn domain(&self) -> &Bounds;
}

/// A problem defined by a closure over the position vector.
///
/// # Examples
///
/// ```
/// use metapop::problem::{Bounds, FnProblem, OptimizationProblem};
///
/// let sphere = FnProblem::new(
///     Bounds::symmetric(2, 5.0).unwrap(),
///     |x| x.iter().map(|v| v * v).sum::<f64>(),
/// );
/// assert_eq!(sphere.fitness_of(&[3.0, 4.0]), 25.0);
/// ```
pub struct FnProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    objective: F,
    domain: Bounds,
}

impl<F> FnProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    /// Creates a problem from domain bounds and an objective closure.
    pub fn new(domain: Bounds, objective: F) -> Self {
        Self { objective, domain }
    }
}

impl<F> OptimizationProblem for FnProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    type Fitness = f64;

    fn fitness_of(&self, position: &[f64]) -> f64 {
        (self.objective)(position)
    }

    fn domain(&self) -> &Bounds {
        &self.domain
    }
}
