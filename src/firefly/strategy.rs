//! The firefly update round.

use rand::{Rng, RngCore};

use super::config::FireflyConfig;
use crate::algorithm::IterationStrategy;
use crate::comparator::FitnessOrdering;
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::problem::OptimizationProblem;
use crate::topology::Topology;

/// The standard firefly movement rule.
///
/// For each entity in insertion order: accumulate attraction steps toward
/// every brighter member of its neighborhood, add a uniform random step
/// scaled by `alpha` and the domain width, clamp the result into the
/// domain, assign it, and immediately re-evaluate fitness. Entities with
/// no brighter neighbor stay put (and stay fresh).
///
/// The update is sequential, so a move made early in the round is visible
/// to entities processed later, matching the classic formulation.
///
/// The configuration is validated at the start of every round; a config
/// that fails [`FireflyConfig::validate`] surfaces as
/// [`Error::InvalidConfig`] instead of silently poisoning positions.
#[derive(Debug, Clone, Default)]
pub struct FireflyIteration {
    config: FireflyConfig,
}

impl FireflyIteration {
    /// Creates the strategy with the given movement parameters.
    pub fn new(config: FireflyConfig) -> Self {
        Self { config }
    }

    /// The movement parameters.
    pub fn config(&self) -> &FireflyConfig {
        &self.config
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum()
}

impl<P, E> IterationStrategy<P, E> for FireflyIteration
where
    P: OptimizationProblem,
    E: Entity<Fitness = P::Fitness>,
{
    fn perform_iteration(
        &self,
        topology: &mut dyn Topology<E>,
        problem: &P,
        ordering: FitnessOrdering,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        self.config.validate().map_err(Error::InvalidConfig)?;
        let domain = problem.domain();

        for index in 0..topology.len() {
            let neighborhood = topology.neighborhood_of(index);
            if neighborhood.is_empty() {
                return Err(Error::EmptyNeighborhood { index });
            }

            let entities = topology.entities();
            let fitness = entities[index]
                .fitness()
                .ok_or(Error::StaleFitness { index })?;
            let mut position = entities[index].position().to_vec();
            let mut moved = false;

            for &neighbor in &neighborhood {
                if neighbor == index {
                    continue;
                }
                let other = &entities[neighbor];
                let other_fitness = other
                    .fitness()
                    .ok_or(Error::StaleFitness { index: neighbor })?;
                if !ordering.is_better(other_fitness, fitness) {
                    continue;
                }

                let beta = self.config.beta0
                    * (-self.config.gamma * squared_distance(&position, other.position()))
                        .exp();
                for (dim, value) in position.iter_mut().enumerate() {
                    let width = domain.upper()[dim] - domain.lower()[dim];
                    let step = self.config.alpha * (rng.random::<f64>() - 0.5) * width;
                    *value += beta * (other.position()[dim] - *value) + step;
                }
                moved = true;
            }

            if moved {
                domain.clamp(&mut position);
                let entity = &mut topology.entities_mut()[index];
                entity.set_position(position);
                entity.calculate_fitness(problem);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Algorithm, ClonedPopulationInitialization};
    use crate::entity::PointEntity;
    use crate::problem::{Bounds, FnProblem};
    use crate::topology::LBestTopology;

    type Sphere = FnProblem<fn(&[f64]) -> f64>;

    fn sphere_fitness(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    fn sphere_engine(population: usize) -> Algorithm<Sphere, PointEntity> {
        let problem: Sphere =
            FnProblem::new(Bounds::symmetric(2, 5.0).unwrap(), sphere_fitness);
        Algorithm::new(problem)
            .with_fitness_ordering(FitnessOrdering::Ascending)
            .with_initialization_strategy(
                ClonedPopulationInitialization::new()
                    .with_prototype(PointEntity::new(2))
                    .with_population_size(population),
            )
            .with_seed(42)
    }

    #[test]
    fn test_sphere_improves_under_gbest() {
        let mut algorithm = sphere_engine(25)
            .with_iteration_strategy(FireflyIteration::default());
        algorithm.initialize().unwrap();

        for _ in 0..150 {
            algorithm.iterate().unwrap();
        }

        let best = algorithm.best_solution().unwrap();
        // random positions in [-5, 5]^2 average fitness ~16.7; the swarm
        // should do far better than chance
        assert!(
            best.fitness < 5.0,
            "expected fitness < 5.0 on 2D sphere, got {}",
            best.fitness
        );
    }

    #[test]
    fn test_runs_under_ring_topology() {
        let mut algorithm = sphere_engine(12)
            .with_topology(LBestTopology::new().with_neighborhood_size(3))
            .with_iteration_strategy(FireflyIteration::default());
        algorithm.initialize().unwrap();

        for _ in 0..50 {
            algorithm.iterate().unwrap();
        }
        assert_eq!(algorithm.iterations(), 50);
        assert!(!algorithm.solutions().unwrap().is_empty());
    }

    #[test]
    fn test_positions_stay_in_domain() {
        let mut algorithm = sphere_engine(10)
            .with_iteration_strategy(FireflyIteration::new(
                FireflyConfig::default().with_alpha(1.0),
            ));
        algorithm.initialize().unwrap();

        for _ in 0..20 {
            algorithm.iterate().unwrap();
        }
        for entity in algorithm.topology().entities() {
            for &value in entity.position() {
                assert!((-5.0..=5.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_round_leaves_no_stale_entity() {
        let mut algorithm = sphere_engine(8)
            .with_iteration_strategy(FireflyIteration::default());
        algorithm.initialize().unwrap();
        algorithm.iterate().unwrap();

        for entity in algorithm.topology().entities() {
            assert!(entity.fitness().is_some());
        }
    }

    #[test]
    fn test_invalid_config_surfaces_error() {
        // struct-literal configs bypass the clamping builders, so the
        // round itself must reject them
        let config = FireflyConfig {
            alpha: f64::NAN,
            ..FireflyConfig::default()
        };
        let mut algorithm =
            sphere_engine(10).with_iteration_strategy(FireflyIteration::new(config));
        algorithm.initialize().unwrap();

        assert!(matches!(
            algorithm.iterate(),
            Err(Error::InvalidConfig(_))
        ));
        assert_eq!(algorithm.iterations(), 0, "a rejected round must not count");
        for entity in algorithm.topology().entities() {
            assert!(
                entity.fitness().unwrap().is_finite(),
                "no entity may be poisoned by an invalid config"
            );
        }
    }

    #[test]
    fn test_uniform_population_stays_put() {
        // identical fitness everywhere: nobody is brighter, nobody moves
        let mut algorithm = sphere_engine(5).with_iteration_strategy(
            FireflyIteration::default(),
        );
        algorithm.initialize().unwrap();
        for entity in algorithm.topology_mut().entities_mut() {
            entity.set_fitness(1.0);
        }
        let positions: Vec<Vec<f64>> = algorithm
            .topology()
            .entities()
            .iter()
            .map(|e| e.position().to_vec())
            .collect();

        algorithm.iterate().unwrap();

        for (entity, before) in algorithm.topology().entities().iter().zip(&positions) {
            assert_eq!(entity.position(), before.as_slice());
        }
    }
}
