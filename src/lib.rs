//! Domain-agnostic population-based metaheuristic iteration engine.
//!
//! Drives a population of candidate solutions ("entities") through
//! repeated rounds of stochastic improvement behind one uniform control
//! loop. The update rule, the neighborhood structure, and the way the
//! starting population is built are all pluggable:
//!
//! - **Entity**: a candidate solution that knows its position, its
//!   fitness, and how to re-evaluate itself against a problem.
//! - **Topology**: an ordered population container defining which
//!   entities influence which ([`GBestTopology`](topology::GBestTopology),
//!   [`LBestTopology`](topology::LBestTopology)).
//! - **IterationStrategy**: one algorithm-specific update round; the
//!   firefly rule ships as the reference implementation.
//! - **InitializationStrategy**: builds the starting population, by
//!   default cloning a prototype entity into uniform-random positions.
//! - **Algorithm**: the engine owning all of the above — initialize
//!   once, iterate until the caller's stopping condition, extract the
//!   best solution(s).
//!
//! Engines clone deeply: a cloned engine copies its entities and
//! continues independently, which is what ensemble and cooperative
//! multi-population algorithms fork on. Strategy objects are stateless
//! and shared between clones.
//!
//! # Example
//!
//! ```
//! use metapop::algorithm::{Algorithm, ClonedPopulationInitialization};
//! use metapop::comparator::FitnessOrdering;
//! use metapop::entity::PointEntity;
//! use metapop::problem::{Bounds, FnProblem};
//!
//! // minimize the 2D sphere function
//! let problem = FnProblem::new(
//!     Bounds::symmetric(2, 5.0).unwrap(),
//!     |x| x.iter().map(|v| v * v).sum::<f64>(),
//! );
//!
//! let mut algorithm = Algorithm::<_, PointEntity>::new(problem)
//!     .with_fitness_ordering(FitnessOrdering::Ascending)
//!     .with_initialization_strategy(
//!         ClonedPopulationInitialization::new()
//!             .with_prototype(PointEntity::new(2))
//!             .with_population_size(30),
//!     )
//!     .with_seed(7);
//!
//! algorithm.initialize().unwrap();
//! while algorithm.iterations() < 100 {
//!     algorithm.iterate().unwrap();
//! }
//! println!("best: {:?}", algorithm.best_solution().unwrap());
//! ```

pub mod algorithm;
pub mod comparator;
pub mod entity;
pub mod error;
pub mod firefly;
pub mod problem;
pub mod topology;

pub use error::{Error, Result};
