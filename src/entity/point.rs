//! The standard position-vector entity.

use super::types::{Entity, Fitness};

/// A plain candidate solution: a position vector plus an optional fitness.
///
/// This is the default prototype type for cloned population
/// initialization. Algorithms needing extra per-entity state (velocities,
/// personal bests, ages) implement [`Entity`] on their own types instead.
#[derive(Debug, Clone, PartialEq)]
pub struct PointEntity<F: Fitness = f64> {
    position: Vec<f64>,
    fitness: Option<F>,
}

impl<F: Fitness> PointEntity<F> {
    /// Creates an unevaluated entity at the origin of a
    /// `dimension`-dimensional search space.
    pub fn new(dimension: usize) -> Self {
        Self {
            position: vec![0.0; dimension],
            fitness: None,
        }
    }

    /// Creates an unevaluated entity at the given position.
    pub fn from_position(position: Vec<f64>) -> Self {
        Self {
            position,
            fitness: None,
        }
    }

    /// Number of dimensions of the position vector.
    pub fn dimension(&self) -> usize {
        self.position.len()
    }
}

impl<F: Fitness> Entity for PointEntity<F> {
    type Fitness = F;

    fn position(&self) -> &[f64] {
        &self.position
    }

    fn set_position(&mut self, position: Vec<f64>) {
        self.position = position;
        self.fitness = None;
    }

    fn fitness(&self) -> Option<F> {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: F) {
        self.fitness = Some(fitness);
    }
}
