//! Population containers with neighborhood structure.
//!
//! A [`Topology`] is an ordered container of entities that also defines
//! which entities influence which during an iteration. Iteration
//! strategies query [`neighborhood_of`](Topology::neighborhood_of) to
//! find the peers an entity is attracted to (or recombined with), so the
//! same movement rule yields different search dynamics under different
//! topologies.
//!
//! Entities are addressed by their insertion-order index; the index is
//! the entity's identity for neighborhood and de-duplication purposes.
//!
//! # Variants
//!
//! - [`GBestTopology`]: one global neighborhood covering the whole
//!   population
//! - [`LBestTopology`]: ring structure, each entity sees a fixed window
//!   of structurally adjacent members

mod gbest;
mod lbest;

pub use gbest::GBestTopology;
pub use lbest::LBestTopology;

use crate::entity::Entity;

/// An ordered, neighborhood-structured population container.
///
/// # Contract
///
/// - Iteration order over [`entities`](Topology::entities) is stable
///   insertion order.
/// - [`neighborhood_of`](Topology::neighborhood_of) must return a
///   non-empty index set for every index in `0..len()`; an empty
///   neighborhood for a live member is a contract violation the engine
///   surfaces as an error.
/// - Membership changes only through [`clear`](Topology::clear) and
///   [`add_all`](Topology::add_all), never as a side effect of an
///   iteration.
/// - [`clone_box`](Topology::clone_box) must deep-copy the contained
///   entities, so cloned engines never alias entity state.
pub trait Topology<E: Entity>: Send {
    /// Removes all entities.
    fn clear(&mut self);

    /// Appends entities in order, preserving existing members.
    fn add_all(&mut self, entities: Vec<E>);

    /// Number of entities currently contained.
    fn len(&self) -> usize;

    /// Whether the topology holds no entities.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entities in insertion order.
    fn entities(&self) -> &[E];

    /// Mutable view of all entities in insertion order.
    fn entities_mut(&mut self) -> &mut [E];

    /// Indices of the entities adjacent to the entity at `index`,
    /// including `index` itself where the variant's structure says so.
    fn neighborhood_of(&self, index: usize) -> Vec<usize>;

    /// Deep copy behind a fresh box; entities are cloned, not shared.
    fn clone_box(&self) -> Box<dyn Topology<E>>;
}

impl<E: Entity> Clone for Box<dyn Topology<E>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
