//! Global-best topology.

use super::Topology;
use crate::entity::Entity;

/// The fully connected topology: every entity's neighborhood is the
/// entire population.
///
/// This is the engine's default. Information about the best position
/// found spreads to every member in a single round, which converges fast
/// but explores less than structured variants.
#[derive(Debug, Clone)]
pub struct GBestTopology<E: Entity> {
    entities: Vec<E>,
}

impl<E: Entity> GBestTopology<E> {
    /// Creates an empty global-best topology.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

impl<E: Entity> Default for GBestTopology<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Topology<E> for GBestTopology<E> {
    fn clear(&mut self) {
        self.entities.clear();
    }

    fn add_all(&mut self, entities: Vec<E>) {
        self.entities.extend(entities);
    }

    fn len(&self) -> usize {
        self.entities.len()
    }

    fn entities(&self) -> &[E] {
        &self.entities
    }

    fn entities_mut(&mut self) -> &mut [E] {
        &mut self.entities
    }

    fn neighborhood_of(&self, _index: usize) -> Vec<usize> {
        (0..self.entities.len()).collect()
    }

    fn clone_box(&self) -> Box<dyn Topology<E>> {
        Box::new(self.clone())
    }
}
