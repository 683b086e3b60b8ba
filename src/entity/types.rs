//! Core trait definitions for entities.
//!
//! The [`Entity`] trait is the contract between the generic engine and
//! concrete candidate-solution representations. The engine never inspects
//! an entity beyond this surface.

use crate::problem::OptimizationProblem;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable. Whether a
/// larger or smaller value is better is decided separately by a
/// [`FitnessOrdering`](crate::comparator::FitnessOrdering) policy, so the
/// same fitness type serves minimization and maximization problems.
///
/// Built-in implementations exist for `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution with a position in search space and a fitness.
///
/// Entities carry their own fitness value. A fitness of `None` marks the
/// entity as *stale*: its position has changed (or it was never evaluated)
/// and it must not be compared until [`calculate_fitness`] has run.
///
/// # Contract
///
/// - [`set_position`](Entity::set_position) must clear the stored fitness,
///   so a stale entity is always detectable.
/// - `Clone` must be a deep copy: no two clones may share mutable position
///   storage. This is what makes engine cloning safe for independent
///   parallel runs.
///
/// # Implementing
///
/// ```
/// use metapop::entity::Entity;
///
/// #[derive(Clone)]
/// struct MySolution {
///     position: Vec<f64>,
///     fitness: Option<f64>,
/// }
///
/// impl Entity for MySolution {
///     type Fitness = f64;
///     fn position(&self) -> &[f64] { &self.position }
///     fn set_position(&mut self, position: Vec<f64>) {
///         self.position = position;
///         self.fitness = None;
///     }
///     fn fitness(&self) -> Option<f64> { self.fitness }
///     fn set_fitness(&mut self, fitness: f64) { self.fitness = Some(fitness); }
/// }
/// ```
///
/// [`calculate_fitness`]: Entity::calculate_fitness
pub trait Entity: Clone + Send + Sync + 'static {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the entity's current position in search space.
    fn position(&self) -> &[f64];

    /// Replaces the entity's position and clears the stored fitness.
    fn set_position(&mut self, position: Vec<f64>);

    /// Returns the current fitness, or `None` if the entity is stale.
    fn fitness(&self) -> Option<Self::Fitness>;

    /// Stores a fitness value for the current position.
    fn set_fitness(&mut self, fitness: Self::Fitness);

    /// Evaluates the current position against `problem` and stores the
    /// result, making the entity fresh again.
    fn calculate_fitness<P>(&mut self, problem: &P)
    where
        Self: Sized,
        P: OptimizationProblem<Fitness = Self::Fitness> + ?Sized,
    {
        let fitness = problem.fitness_of(self.position());
        self.set_fitness(fitness);
    }
}
