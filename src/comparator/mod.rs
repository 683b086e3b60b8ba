//! Fitness ordering policy and best-entity extraction.
//!
//! A [`FitnessOrdering`] turns the raw `PartialOrd` on fitness values
//! into a direction: whether larger or smaller values win. Extraction is
//! deterministic — ties are broken by earliest insertion order, and
//! incomparable pairs (NaN fitness) are treated as ties — so the same
//! population always yields the same best entity.

use std::cmp::Ordering;

use crate::entity::{Entity, Fitness};
use crate::error::{Error, Result};
use crate::topology::Topology;

/// Direction of the total order over fitness values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessOrdering {
    /// Larger fitness is better (maximization). The engine default.
    #[default]
    Descending,
    /// Smaller fitness is better (minimization).
    Ascending,
}

impl FitnessOrdering {
    /// Whether `candidate` is strictly better than `incumbent`.
    ///
    /// Strict comparison is what gives extraction its insertion-order
    /// tie-break: an equal (or incomparable) candidate never displaces
    /// an earlier incumbent.
    pub fn is_better<F: Fitness>(self, candidate: F, incumbent: F) -> bool {
        match candidate.partial_cmp(&incumbent) {
            Some(Ordering::Greater) => self == FitnessOrdering::Descending,
            Some(Ordering::Less) => self == FitnessOrdering::Ascending,
            _ => false,
        }
    }
}

/// Returns the index of the best entity in `entities` under `ordering`.
///
/// Ties are broken by earliest insertion order. Fails with
/// [`Error::EmptyPopulation`] on an empty slice and
/// [`Error::StaleFitness`] if any entity has no fitness value — stale
/// entities must never be compared.
pub fn best_of<E: Entity>(entities: &[E], ordering: FitnessOrdering) -> Result<usize> {
    if entities.is_empty() {
        return Err(Error::EmptyPopulation);
    }
    let mut best = 0;
    let mut best_fitness = entities[0].fitness().ok_or(Error::StaleFitness { index: 0 })?;
    for (index, entity) in entities.iter().enumerate().skip(1) {
        let fitness = entity.fitness().ok_or(Error::StaleFitness { index })?;
        if ordering.is_better(fitness, best_fitness) {
            best = index;
            best_fitness = fitness;
        }
    }
    Ok(best)
}

/// Returns the index of the best entity in each distinct neighborhood of
/// `topology`, de-duplicated by identity.
///
/// One entity winning several overlapping neighborhoods appears once, in
/// first-discovery order; distinct entities that merely tie on fitness
/// are all kept. Within a neighborhood, ties go to the member earliest in
/// insertion order. Fails with [`Error::EmptyNeighborhood`] if the
/// topology returns no neighbors for a live member.
pub fn neighborhood_best_entities<E: Entity>(
    topology: &dyn Topology<E>,
    ordering: FitnessOrdering,
) -> Result<Vec<usize>> {
    let entities = topology.entities();
    let mut elected = vec![false; entities.len()];
    let mut bests = Vec::new();

    for index in 0..entities.len() {
        let mut neighborhood = topology.neighborhood_of(index);
        if neighborhood.is_empty() {
            return Err(Error::EmptyNeighborhood { index });
        }
        // insertion order within the neighborhood, so ties resolve the
        // same way regardless of how the topology orders its window
        neighborhood.sort_unstable();

        let mut local = neighborhood[0];
        let mut local_fitness = entities[local]
            .fitness()
            .ok_or(Error::StaleFitness { index: local })?;
        for &candidate in &neighborhood[1..] {
            let fitness = entities[candidate]
                .fitness()
                .ok_or(Error::StaleFitness { index: candidate })?;
            if ordering.is_better(fitness, local_fitness) {
                local = candidate;
                local_fitness = fitness;
            }
        }

        if !elected[local] {
            elected[local] = true;
            bests.push(local);
        }
    }

    Ok(bests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PointEntity;
    use crate::topology::{GBestTopology, LBestTopology};

    fn entity(fitness: f64) -> PointEntity {
        let mut e = PointEntity::from_position(vec![fitness]);
        e.set_fitness(fitness);
        e
    }

    #[test]
    fn test_is_better_directions() {
        assert!(FitnessOrdering::Descending.is_better(7.0, 3.0));
        assert!(!FitnessOrdering::Descending.is_better(3.0, 7.0));
        assert!(FitnessOrdering::Ascending.is_better(3.0, 7.0));
        assert!(!FitnessOrdering::Ascending.is_better(7.0, 3.0));
    }

    #[test]
    fn test_equal_and_nan_never_better() {
        assert!(!FitnessOrdering::Descending.is_better(5.0, 5.0));
        assert!(!FitnessOrdering::Ascending.is_better(5.0, 5.0));
        assert!(!FitnessOrdering::Descending.is_better(f64::NAN, 1.0));
        assert!(!FitnessOrdering::Ascending.is_better(f64::NAN, 1.0));
    }

    #[test]
    fn test_best_of_descending() {
        let population = vec![entity(3.0), entity(7.0), entity(5.0)];
        assert_eq!(best_of(&population, FitnessOrdering::Descending).unwrap(), 1);
    }

    #[test]
    fn test_best_of_ascending() {
        let population = vec![entity(3.0), entity(7.0), entity(5.0)];
        assert_eq!(best_of(&population, FitnessOrdering::Ascending).unwrap(), 0);
    }

    #[test]
    fn test_best_of_tie_keeps_first_inserted() {
        let population = vec![entity(2.0), entity(7.0), entity(7.0)];
        for _ in 0..10 {
            assert_eq!(best_of(&population, FitnessOrdering::Descending).unwrap(), 1);
        }
    }

    #[test]
    fn test_best_of_empty() {
        let population: Vec<PointEntity> = Vec::new();
        assert_eq!(
            best_of(&population, FitnessOrdering::Descending),
            Err(Error::EmptyPopulation)
        );
    }

    #[test]
    fn test_best_of_rejects_stale() {
        let population = vec![entity(1.0), PointEntity::new(1)];
        assert_eq!(
            best_of(&population, FitnessOrdering::Descending),
            Err(Error::StaleFitness { index: 1 })
        );
    }

    #[test]
    fn test_gbest_yields_single_neighborhood_best() {
        let mut topology = GBestTopology::new();
        topology.add_all(vec![
            entity(1.0),
            entity(9.0),
            entity(4.0),
            entity(9.0),
            entity(2.0),
        ]);
        let bests =
            neighborhood_best_entities(&topology, FitnessOrdering::Descending).unwrap();
        assert_eq!(bests, vec![1], "one shared neighborhood, earliest tie wins");
    }

    #[test]
    fn test_ring_dedups_overlapping_winners() {
        // entity 2 dominates every window it appears in; entity 0 wins
        // the windows that exclude 2
        let mut topology = LBestTopology::new().with_neighborhood_size(3);
        topology.add_all(vec![
            entity(8.0),
            entity(1.0),
            entity(9.0),
            entity(2.0),
            entity(3.0),
        ]);
        let bests =
            neighborhood_best_entities(&topology, FitnessOrdering::Descending).unwrap();
        assert_eq!(bests, vec![0, 2]);
    }

    #[test]
    fn test_ring_distinct_local_bests() {
        let mut topology = LBestTopology::new().with_neighborhood_size(1);
        topology.add_all(vec![entity(1.0), entity(2.0), entity(3.0)]);
        let bests =
            neighborhood_best_entities(&topology, FitnessOrdering::Descending).unwrap();
        assert_eq!(bests, vec![0, 1, 2], "singleton windows elect everyone");
    }
}
