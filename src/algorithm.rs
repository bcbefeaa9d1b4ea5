//! Algorithm selection by numeric code.
//!
//! | Code | Algorithm                                  |
//! |------|--------------------------------------------|
//! | 0    | Karmarkar-Karp on the raw input            |
//! | 1    | Repeated random, sign encoding             |
//! | 2    | Hill climbing, sign encoding               |
//! | 3    | Simulated annealing, sign encoding         |
//! | 11   | Repeated random, prepartition encoding     |
//! | 12   | Hill climbing, prepartition encoding       |
//! | 13   | Simulated annealing, prepartition encoding |

use std::fmt;

use crate::draws::rng_from_seed;
use crate::encoding::{PrepartitionEncoding, SignEncoding};
use crate::error::{PartitionError, Result};
use crate::kk::karmarkar_karp;
use crate::search::{LocalSearch, SearchConfig, Strategy};
use rand::Rng;
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A partitioning algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Deterministic differencing on the input.
    KarmarkarKarp,
    /// Local search over sign vectors.
    Standard(Strategy),
    /// Local search over prepartition label vectors.
    Prepartition(Strategy),
}

impl Algorithm {
    /// Every algorithm, in code order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::KarmarkarKarp,
        Algorithm::Standard(Strategy::RepeatedRandom),
        Algorithm::Standard(Strategy::HillClimbing),
        Algorithm::Standard(Strategy::SimulatedAnnealing),
        Algorithm::Prepartition(Strategy::RepeatedRandom),
        Algorithm::Prepartition(Strategy::HillClimbing),
        Algorithm::Prepartition(Strategy::SimulatedAnnealing),
    ];

    /// Parses a selector code.
    ///
    /// # Errors
    ///
    /// [`PartitionError::InvalidAlgorithmSelector`] for unknown codes.
    pub fn from_code(code: i64) -> Result<Self> {
        let algorithm = match code {
            0 => Algorithm::KarmarkarKarp,
            1 => Algorithm::Standard(Strategy::RepeatedRandom),
            2 => Algorithm::Standard(Strategy::HillClimbing),
            3 => Algorithm::Standard(Strategy::SimulatedAnnealing),
            11 => Algorithm::Prepartition(Strategy::RepeatedRandom),
            12 => Algorithm::Prepartition(Strategy::HillClimbing),
            13 => Algorithm::Prepartition(Strategy::SimulatedAnnealing),
            other => return Err(PartitionError::InvalidAlgorithmSelector(other)),
        };
        Ok(algorithm)
    }

    /// The selector code of this algorithm.
    pub fn code(&self) -> i64 {
        let offset = |s: Strategy| match s {
            Strategy::RepeatedRandom => 1,
            Strategy::HillClimbing => 2,
            Strategy::SimulatedAnnealing => 3,
        };
        match *self {
            Algorithm::KarmarkarKarp => 0,
            Algorithm::Standard(s) => offset(s),
            Algorithm::Prepartition(s) => 10 + offset(s),
        }
    }

    /// Whether the algorithm consumes random draws.
    pub fn is_randomized(&self) -> bool {
        !matches!(self, Algorithm::KarmarkarKarp)
    }

    /// Computes a residue for `values`, seeding from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::algorithm::Algorithm;
    /// use u_partition::search::SearchConfig;
    ///
    /// let values = [10.0, 15.0, 0.0, 6.0, 5.0];
    /// let config = SearchConfig::default();
    /// assert_eq!(Algorithm::from_code(0).unwrap().solve(&values, &config).unwrap(), 4.0);
    /// ```
    pub fn solve(&self, values: &[f64], config: &SearchConfig) -> Result<f64> {
        let mut rng = rng_from_seed(config.seed);
        self.solve_with_rng(values, config, &mut rng)
    }

    /// Computes a residue for `values` using the supplied generator.
    pub fn solve_with_rng<R: Rng>(
        &self,
        values: &[f64],
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<f64> {
        let residue = match *self {
            Algorithm::KarmarkarKarp => karmarkar_karp(values)?,
            Algorithm::Standard(strategy) => {
                let encoding = SignEncoding::new(values)?;
                LocalSearch::run_with_rng(&encoding, strategy, config, rng)?.best_residue
            }
            Algorithm::Prepartition(strategy) => {
                let encoding = PrepartitionEncoding::new(values)?;
                LocalSearch::run_with_rng(&encoding, strategy, config, rng)?.best_residue
            }
        };
        info!(algorithm = %self, n = values.len(), residue, "solved");
        Ok(residue)
    }

    /// Best residue over `restarts` independent runs.
    ///
    /// Karmarkar-Karp is deterministic and runs once regardless of
    /// `restarts`.
    pub fn solve_restarts(
        &self,
        values: &[f64],
        config: &SearchConfig,
        restarts: usize,
    ) -> Result<f64> {
        let residue = match *self {
            Algorithm::KarmarkarKarp => karmarkar_karp(values)?,
            Algorithm::Standard(strategy) => {
                let encoding = SignEncoding::new(values)?;
                LocalSearch::run_restarts(&encoding, strategy, config, restarts)?.best_residue
            }
            Algorithm::Prepartition(strategy) => {
                let encoding = PrepartitionEncoding::new(values)?;
                LocalSearch::run_restarts(&encoding, strategy, config, restarts)?.best_residue
            }
        };
        info!(algorithm = %self, n = values.len(), restarts, residue, "solved");
        Ok(residue)
    }
}

impl TryFrom<i64> for Algorithm {
    type Error = PartitionError;

    fn try_from(code: i64) -> Result<Self> {
        Algorithm::from_code(code)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::KarmarkarKarp => "karmarkar-karp",
            Algorithm::Standard(Strategy::RepeatedRandom) => "repeated-random",
            Algorithm::Standard(Strategy::HillClimbing) => "hill-climbing",
            Algorithm::Standard(Strategy::SimulatedAnnealing) => "simulated-annealing",
            Algorithm::Prepartition(Strategy::RepeatedRandom) => "prepartition-repeated-random",
            Algorithm::Prepartition(Strategy::HillClimbing) => "prepartition-hill-climbing",
            Algorithm::Prepartition(Strategy::SimulatedAnnealing) => {
                "prepartition-simulated-annealing"
            }
        };
        f.write_str(name)
    }
}
