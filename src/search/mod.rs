//! Local search for number partitioning.
//!
//! Repeated random sampling, hill climbing and simulated annealing, each
//! written once against the [`Encoding`](crate::encoding::Encoding) trait
//! and therefore available for both the sign and prepartition encodings.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Johnson, Aragon, McGeoch & Schevon (1991), "Optimization by Simulated
//!   Annealing: An Experimental Evaluation; Part II, Graph Coloring and
//!   Number Partitioning", *Operations Research* 39(3), 378-406.

mod config;
mod runner;

pub use config::{CoolingSchedule, SearchConfig, DEFAULT_ITERATIONS};
pub use runner::{LocalSearch, SearchResult, Strategy};
