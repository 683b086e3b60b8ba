//! The per-round update contract.

use rand::RngCore;

use crate::comparator::FitnessOrdering;
use crate::entity::Entity;
use crate::error::Result;
use crate::problem::OptimizationProblem;
use crate::topology::Topology;

/// One algorithm-specific update round over a topology.
///
/// The engine is agnostic to the movement mathematics; swarm attraction,
/// evolutionary recombination, and anything else plug in through this
/// trait. See [`FireflyIteration`](crate::firefly::FireflyIteration) for
/// the reference implementation.
///
/// # Contract
///
/// - Entities are updated **in place**; membership count must not change.
///   The engine verifies this after every round.
/// - Every position change must be followed immediately by
///   [`calculate_fitness`](Entity::calculate_fitness); no entity may be
///   left stale at the round boundary.
/// - Which entities influence which is decided by
///   [`Topology::neighborhood_of`], never by scanning the population
///   directly, so the same strategy works under any topology.
/// - Implementations hold no per-run mutable state (`Send + Sync`); one
///   strategy instance may serve many engines concurrently. All
///   randomness comes from the engine-supplied `rng`.
pub trait IterationStrategy<P, E>: Send + Sync
where
    P: OptimizationProblem,
    E: Entity<Fitness = P::Fitness>,
{
    /// Performs one full round over `topology`.
    fn perform_iteration(
        &self,
        topology: &mut dyn Topology<E>,
        problem: &P,
        ordering: FitnessOrdering,
        rng: &mut dyn RngCore,
    ) -> Result<()>;
}
