//! Packaged optimization results.

use crate::entity::Fitness;

/// A snapshot of a winning entity: its position and the fitness of that
/// position.
///
/// Solutions are plain values detached from the population; holding one
/// never aliases live entity state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<F: Fitness> {
    /// Position of the winning entity at extraction time.
    pub position: Vec<f64>,
    /// Fitness of that position.
    pub fitness: F,
}

impl<F: Fitness> Solution<F> {
    /// Creates a solution from a position and its fitness.
    pub fn new(position: Vec<f64>, fitness: F) -> Self {
        Self { position, fitness }
    }
}
