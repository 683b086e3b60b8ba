//! Ring (local-best) topology.

use super::Topology;
use crate::entity::Entity;

/// The ring topology: each entity's neighborhood is a fixed window of
/// structurally adjacent members, wrapping around the ends.
///
/// Adjacency is structural (insertion-order indices), not spatial, so
/// neighborhoods are constant across the run. Smaller windows slow the
/// spread of good positions and keep sub-populations exploring different
/// regions.
#[derive(Debug, Clone)]
pub struct LBestTopology<E: Entity> {
    entities: Vec<E>,
    neighborhood_size: usize,
}

/// Default window size, the entity itself plus one neighbor on each side.
const DEFAULT_NEIGHBORHOOD_SIZE: usize = 3;

impl<E: Entity> LBestTopology<E> {
    /// Creates an empty ring topology with the default window size of 3.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            neighborhood_size: DEFAULT_NEIGHBORHOOD_SIZE,
        }
    }

    /// Sets the window size. Values below 1 are raised to 1; windows
    /// larger than the population are capped at query time.
    pub fn with_neighborhood_size(mut self, size: usize) -> Self {
        self.neighborhood_size = size.max(1);
        self
    }

    /// The configured window size.
    pub fn neighborhood_size(&self) -> usize {
        self.neighborhood_size
    }
}

impl<E: Entity> Default for LBestTopology<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Topology<E> for LBestTopology<E> {
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

    fn neighborhood_of(&self, index: usize) -> Vec<usize> {
        let n = self.entities.len();
        if n == 0 {
            return Vec::new();
        }
        let window = self.neighborhood_size.min(n);
        // window centered on index, biased right for even sizes
        let start = (index + n - (window - 1) / 2) % n;
        (0..window).map(|offset| (start + offset) % n).collect()
    }

    fn clone_box(&self) -> Box<dyn Topology<E>> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PointEntity;
    use proptest::prelude::*;

    fn ring(n: usize, window: usize) -> LBestTopology<PointEntity> {
        let mut topology = LBestTopology::new().with_neighborhood_size(window);
        topology.add_all(
            (0..n)
                .map(|i| PointEntity::from_position(vec![i as f64]))
                .collect(),
        );
        topology
    }

    #[test]
    fn test_window_of_three() {
        let topology = ring(5, 3);
        assert_eq!(topology.neighborhood_of(2), vec![1, 2, 3]);
    }

    #[test]
    fn test_wraps_around() {
        let topology = ring(5, 3);
        assert_eq!(topology.neighborhood_of(0), vec![4, 0, 1]);
        assert_eq!(topology.neighborhood_of(4), vec![3, 4, 0]);
    }

    #[test]
    fn test_window_of_one_is_self() {
        let topology = ring(4, 1);
        for index in 0..4 {
            assert_eq!(topology.neighborhood_of(index), vec![index]);
        }
    }

    #[test]
    fn test_oversized_window_caps_at_population() {
        let topology = ring(3, 10);
        let mut neighborhood = topology.neighborhood_of(1);
        neighborhood.sort_unstable();
        assert_eq!(neighborhood, vec![0, 1, 2]);
    }

    #[test]
    fn test_size_below_one_is_raised() {
        let topology: LBestTopology<PointEntity> =
            LBestTopology::new().with_neighborhood_size(0);
        assert_eq!(topology.neighborhood_size(), 1);
    }

    proptest! {
        #[test]
        fn prop_neighborhood_covers_every_member(
            n in 1usize..30,
            window in 1usize..10,
            index_seed in any::<usize>(),
        ) {
            let topology = ring(n, window);
            let index = index_seed % n;
            let neighborhood = topology.neighborhood_of(index);

            prop_assert_eq!(neighborhood.len(), window.min(n));
            prop_assert!(neighborhood.contains(&index), "window must contain the entity itself");
            for &i in &neighborhood {
                prop_assert!(i < n);
            }
        }
    }
}
