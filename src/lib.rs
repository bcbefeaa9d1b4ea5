//! Number partitioning heuristics.
//!
//! Given a multiset of reals, split it into two parts whose sums are as
//! close as possible. The quality of a split is its **residue**, the
//! absolute difference of the two sums. This crate provides:
//!
//! - **Karmarkar-Karp differencing** ([`kk`]): deterministic O(n log n)
//!   reduction over a binary max-heap ([`heap`]).
//! - **Encodings** ([`encoding`]): the standard sign vector and the
//!   prepartition label vector, whose residue is Karmarkar-Karp over the
//!   grouped sums.
//! - **Local search** ([`search`]): repeated random sampling, hill climbing
//!   and simulated annealing, written once over the [`encoding::Encoding`]
//!   trait.
//! - **Algorithm selection** ([`algorithm`]): numeric selector codes mapped
//!   onto the above.
//!
//! Randomness is always explicit. Every randomized entry point either takes
//! `&mut R: Rng` or seeds its own generator from [`search::SearchConfig::seed`].
//!
//! # Example
//!
//! ```
//! use u_partition::algorithm::Algorithm;
//! use u_partition::search::SearchConfig;
//!
//! let values = [1.0, 7.0, 8.0, 4.0, 6.0, 10.0];
//! let config = SearchConfig::default().with_seed(42);
//! let residue = Algorithm::from_code(12).unwrap().solve(&values, &config).unwrap();
//! assert!(residue >= 0.0);
//! ```

pub mod algorithm;
pub mod draws;
pub mod encoding;
pub mod error;
pub mod heap;
pub mod input;
pub mod kk;
pub mod search;

pub use error::{PartitionError, Result};
