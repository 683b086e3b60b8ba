//! Candidate-solution entities.
//!
//! An [`Entity`] is a candidate solution: a position in search space plus
//! the fitness of that position. Entities are created by cloning a
//! prototype during population initialization and are updated in place by
//! iteration strategies.
//!
//! # Core Traits
//!
//! - [`Fitness`]: comparable, cheaply copyable quality measure
//! - [`Entity`]: position + fitness + self-evaluation against a problem
//!
//! # Key Types
//!
//! - [`PointEntity`]: the standard position-vector entity, used as the
//!   default prototype/clone template

mod point;
mod types;

pub use point::PointEntity;
pub use types::{Entity, Fitness};
