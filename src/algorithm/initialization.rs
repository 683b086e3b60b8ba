//! Population initialization strategies.

use rand::RngCore;

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::problem::OptimizationProblem;

/// Produces the starting population for an algorithm run.
///
/// Implementations must be stateless between calls (`Send + Sync`); the
/// same strategy instance may be shared by several engines at once.
pub trait InitializationStrategy<P, E>: Send + Sync
where
    P: OptimizationProblem,
    E: Entity<Fitness = P::Fitness>,
{
    /// Returns the initial population for `problem`.
    ///
    /// Returned entities may be stale; the engine evaluates every entity
    /// once immediately after adding them to the topology.
    fn initialize(&self, problem: &P, rng: &mut dyn RngCore) -> Result<Vec<E>>;
}

/// Initialization by cloning a prototype entity.
///
/// Produces exactly `population_size` independent deep clones of the
/// configured prototype, each repositioned uniformly at random inside the
/// problem's domain bounds. The prototype itself is never mutated.
///
/// # Examples
///
/// ```
/// use metapop::algorithm::ClonedPopulationInitialization;
/// use metapop::entity::PointEntity;
///
/// let init = ClonedPopulationInitialization::new()
///     .with_prototype(PointEntity::<f64>::new(2))
///     .with_population_size(30);
/// assert_eq!(init.population_size(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct ClonedPopulationInitialization<E> {
    prototype: Option<E>,
    population_size: usize,
}

/// Default population size when none is configured.
const DEFAULT_POPULATION_SIZE: usize = 50;

impl<E: Entity> ClonedPopulationInitialization<E> {
    /// Creates a strategy with no prototype and the default population
    /// size of 50. A prototype must be set before the strategy can run.
    pub fn new() -> Self {
        Self {
            prototype: None,
            population_size: DEFAULT_POPULATION_SIZE,
        }
    }

    /// Sets the prototype entity that clones are made from.
    pub fn with_prototype(mut self, prototype: E) -> Self {
        self.prototype = Some(prototype);
        self
    }

    /// Sets the number of entities to produce.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// The configured population size.
    pub fn population_size(&self) -> usize {
        self.population_size
    }
}

impl<E: Entity> Default for ClonedPopulationInitialization<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, E> InitializationStrategy<P, E> for ClonedPopulationInitialization<E>
where
    P: OptimizationProblem,
    E: Entity<Fitness = P::Fitness>,
{
    fn initialize(&self, problem: &P, rng: &mut dyn RngCore) -> Result<Vec<E>> {
        let prototype = self.prototype.as_ref().ok_or(Error::MissingPrototype)?;
        if self.population_size == 0 {
            return Err(Error::EmptyPopulation);
        }

        let domain = problem.domain();
        Ok((0..self.population_size)
            .map(|_| {
                let mut entity = prototype.clone();
                entity.set_position(domain.sample(rng));
                entity
            })
            .collect())
    }
}
