//! The single-population algorithm engine.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use super::initialization::{ClonedPopulationInitialization, InitializationStrategy};
use super::iteration::IterationStrategy;
use crate::comparator::{self, FitnessOrdering};
use crate::entity::{Entity, Fitness};
use crate::error::{Error, Result};
use crate::firefly::FireflyIteration;
use crate::problem::{OptimizationProblem, Solution};
use crate::topology::{GBestTopology, Topology};

/// A single-population metaheuristic engine.
///
/// Owns one topology plus the strategy objects that fill and update it.
/// The engine is parametric over the problem, entity, topology,
/// initialization, and iteration rule; defaults are a global-best
/// topology, cloned-prototype initialization (prototype still to be
/// configured), and the firefly reference movement rule.
///
/// # Lifecycle
///
/// ```text
/// UNINITIALIZED --initialize()--> INITIALIZED --iterate()*--> ...
///        ^                                          |
///        +-------------------reset()----------------+
/// ```
///
/// `initialize` twice without `reset` and `iterate` before `initialize`
/// are state errors. Stopping is the caller's concern: loop over
/// [`iterate`](Algorithm::iterate) until your own criterion is met, then
/// read [`best_solution`](Algorithm::best_solution).
///
/// # Cloning
///
/// `Clone` deep-copies the topology (entities included) and shares the
/// problem and strategy objects, which are stateless by contract. A clone
/// continues iterating independently without aliasing the original's
/// entity state, which is what cooperative and multi-population setups
/// fork on.
///
/// # Examples
///
/// ```
/// use metapop::algorithm::{Algorithm, ClonedPopulationInitialization};
/// use metapop::comparator::FitnessOrdering;
/// use metapop::entity::PointEntity;
/// use metapop::problem::{Bounds, FnProblem};
///
/// let sphere = FnProblem::new(
///     Bounds::symmetric(2, 5.0).unwrap(),
///     |x| x.iter().map(|v| v * v).sum::<f64>(),
/// );
///
/// let mut algorithm = Algorithm::<_, PointEntity>::new(sphere)
///     .with_fitness_ordering(FitnessOrdering::Ascending)
///     .with_initialization_strategy(
///         ClonedPopulationInitialization::new()
///             .with_prototype(PointEntity::new(2))
///             .with_population_size(25),
///     )
///     .with_seed(42);
///
/// algorithm.initialize().unwrap();
/// for _ in 0..50 {
///     algorithm.iterate().unwrap();
/// }
/// let best = algorithm.best_solution().unwrap();
/// assert!(best.fitness < 50.0);
/// ```
pub struct Algorithm<P, E>
where
    P: OptimizationProblem,
    E: Entity<Fitness = P::Fitness>,
{
    problem: Arc<P>,
    topology: Box<dyn Topology<E>>,
    iteration_strategy: Arc<dyn IterationStrategy<P, E>>,
    initialization_strategy: Arc<dyn InitializationStrategy<P, E>>,
    ordering: FitnessOrdering,
    rng: StdRng,
    iterations: usize,
    initialized: bool,
}

impl<P, E> Algorithm<P, E>
where
    P: OptimizationProblem,
    E: Entity<Fitness = P::Fitness>,
{
    /// Creates an engine with default collaborators: global-best
    /// topology, firefly iteration, cloned-prototype initialization
    /// (no prototype yet), descending fitness ordering, random seed.
    pub fn new(problem: P) -> Self {
        Self {
            problem: Arc::new(problem),
            topology: Box::new(GBestTopology::new()),
            iteration_strategy: Arc::new(FireflyIteration::default()),
            initialization_strategy: Arc::new(ClonedPopulationInitialization::new()),
            ordering: FitnessOrdering::default(),
            rng: StdRng::seed_from_u64(rand::random()),
            iterations: 0,
            initialized: false,
        }
    }

    // ---- configuration ----

    /// Replaces the topology, discarding any population and returning
    /// the engine to the uninitialized state.
    pub fn set_topology(&mut self, topology: impl Topology<E> + 'static) {
        self.topology = Box::new(topology);
        self.iterations = 0;
        self.initialized = false;
    }

    /// Builder-style [`set_topology`](Algorithm::set_topology).
    pub fn with_topology(mut self, topology: impl Topology<E> + 'static) -> Self {
        self.set_topology(topology);
        self
    }

    /// Replaces the iteration strategy. Takes effect from the next round.
    pub fn set_iteration_strategy(
        &mut self,
        strategy: impl IterationStrategy<P, E> + 'static,
    ) {
        self.iteration_strategy = Arc::new(strategy);
    }

    /// Builder-style
    /// [`set_iteration_strategy`](Algorithm::set_iteration_strategy).
    pub fn with_iteration_strategy(
        mut self,
        strategy: impl IterationStrategy<P, E> + 'static,
    ) -> Self {
        self.set_iteration_strategy(strategy);
        self
    }

    /// Replaces the initialization strategy.
    pub fn set_initialization_strategy(
        &mut self,
        strategy: impl InitializationStrategy<P, E> + 'static,
    ) {
        self.initialization_strategy = Arc::new(strategy);
    }

    /// Builder-style
    /// [`set_initialization_strategy`](Algorithm::set_initialization_strategy).
    pub fn with_initialization_strategy(
        mut self,
        strategy: impl InitializationStrategy<P, E> + 'static,
    ) -> Self {
        self.set_initialization_strategy(strategy);
        self
    }

    /// Sets the fitness ordering used for extraction and passed to
    /// iteration strategies.
    pub fn set_fitness_ordering(&mut self, ordering: FitnessOrdering) {
        self.ordering = ordering;
    }

    /// Builder-style
    /// [`set_fitness_ordering`](Algorithm::set_fitness_ordering).
    pub fn with_fitness_ordering(mut self, ordering: FitnessOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Seeds the engine's random source for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ---- accessors ----

    /// The optimization problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// The current topology.
    pub fn topology(&self) -> &dyn Topology<E> {
        self.topology.as_ref()
    }

    /// Mutable access to the current topology.
    pub fn topology_mut(&mut self) -> &mut dyn Topology<E> {
        self.topology.as_mut()
    }

    /// The iteration strategy, shareable with other engines.
    pub fn iteration_strategy(&self) -> Arc<dyn IterationStrategy<P, E>> {
        Arc::clone(&self.iteration_strategy)
    }

    /// The initialization strategy, shareable with other engines.
    pub fn initialization_strategy(&self) -> Arc<dyn InitializationStrategy<P, E>> {
        Arc::clone(&self.initialization_strategy)
    }

    /// The configured fitness ordering.
    pub fn fitness_ordering(&self) -> FitnessOrdering {
        self.ordering
    }

    /// Number of completed iterations since (re-)initialization.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether [`initialize`](Algorithm::initialize) has completed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ---- lifecycle ----

    /// Builds the starting population and evaluates every entity once.
    ///
    /// Valid only in the uninitialized state; a second call without
    /// [`reset`](Algorithm::reset) fails with
    /// [`Error::AlreadyInitialized`]. Configuration problems inside the
    /// initialization strategy (no prototype, zero population) surface
    /// here.
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Err(Error::AlreadyInitialized);
        }

        let strategy = Arc::clone(&self.initialization_strategy);
        let problem = Arc::clone(&self.problem);
        let entities = strategy.initialize(problem.as_ref(), &mut self.rng)?;

        self.topology.clear();
        self.topology.add_all(entities);
        for entity in self.topology.entities_mut() {
            entity.calculate_fitness(problem.as_ref());
        }

        self.initialized = true;
        debug!(population = self.topology.len(), "population initialized");
        Ok(())
    }

    /// Runs one full round of the configured iteration strategy and
    /// advances the iteration counter.
    ///
    /// After the strategy returns, the engine verifies the round
    /// contract: membership count unchanged and no stale entity left
    /// behind. Violations are fatal, never silently tolerated.
    pub fn iterate(&mut self) -> Result<()> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        let before = self.topology.len();
        if before == 0 {
            return Err(Error::EmptyPopulation);
        }

        let strategy = Arc::clone(&self.iteration_strategy);
        let problem = Arc::clone(&self.problem);
        strategy.perform_iteration(
            self.topology.as_mut(),
            problem.as_ref(),
            self.ordering,
            &mut self.rng,
        )?;

        let after = self.topology.len();
        if after != before {
            return Err(Error::TopologyMutated { before, after });
        }
        let mut round_best: Option<P::Fitness> = None;
        for (index, entity) in self.topology.entities().iter().enumerate() {
            let Some(fitness) = entity.fitness() else {
                return Err(Error::StaleFitness { index });
            };
            match round_best {
                Some(best) if !self.ordering.is_better(fitness, best) => {}
                _ => round_best = Some(fitness),
            }
        }

        self.iterations += 1;
        if let Some(best) = round_best {
            trace!(
                iteration = self.iterations,
                best = best.to_f64(),
                "iteration complete"
            );
        }
        Ok(())
    }

    /// Discards the population and returns to the uninitialized state,
    /// allowing a fresh [`initialize`](Algorithm::initialize).
    pub fn reset(&mut self) {
        self.topology.clear();
        self.iterations = 0;
        self.initialized = false;
    }

    // ---- extraction ----

    /// The best entity's position and fitness under the configured
    /// ordering. Does not mutate any state; calling it repeatedly
    /// without an intervening round yields identical results.
    pub fn best_solution(&self) -> Result<Solution<P::Fitness>> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        let entities = self.topology.entities();
        let best = comparator::best_of(entities, self.ordering)?;
        let entity = &entities[best];
        let fitness = entity.fitness().ok_or(Error::StaleFitness { index: best })?;
        Ok(Solution::new(entity.position().to_vec(), fitness))
    }

    /// One packaged solution per distinct neighborhood-best entity.
    ///
    /// Under a global-best topology this is a single solution equal to
    /// [`best_solution`](Algorithm::best_solution); structured topologies
    /// report one simultaneously-tracked optimum per neighborhood winner.
    pub fn solutions(&self) -> Result<Vec<Solution<P::Fitness>>> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        let entities = self.topology.entities();
        comparator::neighborhood_best_entities(self.topology.as_ref(), self.ordering)?
            .into_iter()
            .map(|index| {
                let entity = &entities[index];
                let fitness = entity.fitness().ok_or(Error::StaleFitness { index })?;
                Ok(Solution::new(entity.position().to_vec(), fitness))
            })
            .collect()
    }
}

impl<P, E> Clone for Algorithm<P, E>
where
    P: OptimizationProblem,
    E: Entity<Fitness = P::Fitness>,
{
    fn clone(&self) -> Self {
        Self {
            problem: Arc::clone(&self.problem),
            topology: self.topology.clone_box(),
            iteration_strategy: Arc::clone(&self.iteration_strategy),
            initialization_strategy: Arc::clone(&self.initialization_strategy),
            ordering: self.ordering,
            rng: self.rng.clone(),
            iterations: self.iterations,
            initialized: self.initialized,
        }
    }
}
