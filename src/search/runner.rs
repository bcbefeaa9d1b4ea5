//! Local-search execution loops.
//!
//! One driver serves every [`Encoding`]. Each strategy runs exactly
//! `config.iterations` iterations; there is no early exit.
//!
//! # Algorithm
//!
//! - **Repeated random**: draw a fresh random solution each iteration and
//!   keep the strictly best one.
//! - **Hill climbing**: draw a neighbor of the best solution each
//!   iteration and keep it if strictly better. The neighbor is always
//!   rebuilt from the best, never from a rejected neighbor.
//! - **Simulated annealing**: draw a neighbor of the accepted solution `S`.
//!   Accept it if strictly better, or with probability
//!   `exp(-(r' - r) / T(i))`. Afterwards, promote `S` to the global best
//!   `S''` if it improves on it. `S` may worsen; `S''` never does.

use super::config::SearchConfig;
use crate::draws::{acceptance_draw, rng_from_seed};
use crate::encoding::Encoding;
use crate::error::{PartitionError, Result};
use rand::Rng;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local-search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Independent random solutions, keep the best.
    RepeatedRandom,
    /// Single-move improvement from the best solution.
    HillClimbing,
    /// Metropolis acceptance under a cooling schedule.
    SimulatedAnnealing,
}

/// Result of a local-search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult<S: Clone> {
    /// Best solution found.
    pub best: S,

    /// Residue of the best solution.
    pub best_residue: f64,

    /// Residue of the first candidate generated in the run.
    pub initial_residue: f64,

    /// Iterations executed (the initial solution is not counted).
    pub iterations: usize,

    /// Number of candidates that replaced the current solution.
    pub accepted_moves: usize,

    /// Number of candidates strictly better than the current solution.
    pub improving_moves: usize,

    /// Number of accepted candidates strictly worse than the solution they
    /// replaced. Only simulated annealing makes such moves.
    pub uphill_moves: usize,

    /// Best residue sampled every `history_interval` iterations, starting
    /// with the initial residue and ending with the final best.
    pub residue_history: Vec<f64>,
}

/// Best-residue sampler.
struct History {
    interval: usize,
    samples: Vec<f64>,
}

impl History {
    fn new(config: &SearchConfig, initial: f64) -> Self {
        let mut samples = Vec::with_capacity(config.iterations / config.history_interval + 2);
        samples.push(initial);
        Self {
            interval: config.history_interval,
            samples,
        }
    }

    /// Records `best` after `done` completed iterations.
    fn record(&mut self, done: usize, best: f64) {
        if done.is_multiple_of(self.interval) {
            trace!(iteration = done, best_residue = best, "history sample");
            self.samples.push(best);
        }
    }

    fn finish(mut self, iterations: usize, best: f64) -> Vec<f64> {
        if iterations == 0 || !iterations.is_multiple_of(self.interval) {
            self.samples.push(best);
        }
        self.samples
    }
}

/// Executes local search over any [`Encoding`].
///
/// # Examples
///
/// ```
/// use u_partition::encoding::SignEncoding;
/// use u_partition::search::{LocalSearch, SearchConfig, Strategy};
///
/// let values = [1.0, 7.0, 8.0, 4.0, 6.0, 10.0];
/// let encoding = SignEncoding::new(&values).unwrap();
/// let config = SearchConfig::default().with_iterations(1_000).with_seed(42);
///
/// let result = LocalSearch::run(&encoding, Strategy::HillClimbing, &config).unwrap();
/// assert!(result.best_residue <= result.initial_residue);
/// ```
pub struct LocalSearch;

impl LocalSearch {
    /// Runs `strategy` with a generator seeded from `config.seed`.
    pub fn run<E: Encoding>(
        encoding: &E,
        strategy: Strategy,
        config: &SearchConfig,
    ) -> Result<SearchResult<E::Solution>> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(encoding, strategy, config, &mut rng)
    }

    /// Runs `strategy` drawing from the supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<E: Encoding, R: Rng>(
        encoding: &E,
        strategy: Strategy,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult<E::Solution>> {
        let result = match strategy {
            Strategy::RepeatedRandom => Self::repeated_random(encoding, config, rng),
            Strategy::HillClimbing => Self::hill_climbing(encoding, config, rng),
            Strategy::SimulatedAnnealing => Self::simulated_annealing(encoding, config, rng),
        }?;
        debug!(
            ?strategy,
            n = encoding.len(),
            iterations = result.iterations,
            initial_residue = result.initial_residue,
            best_residue = result.best_residue,
            accepted = result.accepted_moves,
            improving = result.improving_moves,
            uphill = result.uphill_moves,
            "local search finished"
        );
        Ok(result)
    }

    /// Repeated random sampling.
    pub fn repeated_random<E: Encoding, R: Rng>(
        encoding: &E,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult<E::Solution>> {
        check(encoding, config)?;

        let mut best = encoding.random_solution(rng);
        let mut best_residue = encoding.residue(&best)?;
        let initial_residue = best_residue;
        let mut history = History::new(config, best_residue);
        let mut improving_moves = 0usize;

        for i in 0..config.iterations {
            let candidate = encoding.random_solution(rng);
            let candidate_residue = encoding.residue(&candidate)?;
            if candidate_residue < best_residue {
                best = candidate;
                best_residue = candidate_residue;
                improving_moves += 1;
            }
            history.record(i + 1, best_residue);
        }

        Ok(SearchResult {
            best,
            best_residue,
            initial_residue,
            iterations: config.iterations,
            accepted_moves: improving_moves,
            improving_moves,
            uphill_moves: 0,
            residue_history: history.finish(config.iterations, best_residue),
        })
    }

    /// Hill climbing from a random start.
    pub fn hill_climbing<E: Encoding, R: Rng>(
        encoding: &E,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult<E::Solution>> {
        check(encoding, config)?;

        let mut best = encoding.random_solution(rng);
        let mut best_residue = encoding.residue(&best)?;
        let initial_residue = best_residue;
        let mut history = History::new(config, best_residue);
        let mut improving_moves = 0usize;

        for i in 0..config.iterations {
            let neighbor = encoding.neighbor(&best, rng);
            let neighbor_residue = encoding.residue(&neighbor)?;
            if neighbor_residue < best_residue {
                best = neighbor;
                best_residue = neighbor_residue;
                improving_moves += 1;
            }
            history.record(i + 1, best_residue);
        }

        Ok(SearchResult {
            best,
            best_residue,
            initial_residue,
            iterations: config.iterations,
            accepted_moves: improving_moves,
            improving_moves,
            uphill_moves: 0,
            residue_history: history.finish(config.iterations, best_residue),
        })
    }

    /// Simulated annealing from a random start.
    pub fn simulated_annealing<E: Encoding, R: Rng>(
        encoding: &E,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult<E::Solution>> {
        check(encoding, config)?;

        let mut current = encoding.random_solution(rng);
        let mut current_residue = encoding.residue(&current)?;
        let mut best = current.clone();
        let mut best_residue = current_residue;
        let initial_residue = current_residue;
        let mut history = History::new(config, best_residue);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut uphill_moves = 0usize;

        for i in 0..config.iterations {
            let neighbor = encoding.neighbor(&current, rng);
            let neighbor_residue = encoding.residue(&neighbor)?;

            // Metropolis acceptance criterion
            let accept = if neighbor_residue < current_residue {
                improving_moves += 1;
                true
            } else {
                let temperature = config.cooling.temperature(i);
                let probability = (-(neighbor_residue - current_residue) / temperature).exp();
                acceptance_draw(rng) <= probability
            };

            if accept {
                if neighbor_residue > current_residue {
                    uphill_moves += 1;
                }
                current = neighbor;
                current_residue = neighbor_residue;
                accepted_moves += 1;
            }

            if current_residue < best_residue {
                best = current.clone();
                best_residue = current_residue;
            }

            history.record(i + 1, best_residue);
        }

        Ok(SearchResult {
            best,
            best_residue,
            initial_residue,
            iterations: config.iterations,
            accepted_moves,
            improving_moves,
            uphill_moves,
            residue_history: history.finish(config.iterations, best_residue),
        })
    }

    /// Runs `restarts` independent searches and returns the best.
    ///
    /// Restart `k` is seeded with `seed + k`, where `seed` is `config.seed`
    /// or a fresh random value. With the `parallel` feature the restarts run
    /// on the rayon pool. The result is the same either way; ties go to the
    /// lowest restart index.
    pub fn run_restarts<E: Encoding>(
        encoding: &E,
        strategy: Strategy,
        config: &SearchConfig,
        restarts: usize,
    ) -> Result<SearchResult<E::Solution>> {
        if restarts == 0 {
            return Err(PartitionError::InvalidConfig("restarts must be positive".into()));
        }
        let base = config.seed.unwrap_or_else(rand::random);
        let run_one = |k: usize| {
            let seeded = config.clone().with_seed(base.wrapping_add(k as u64));
            Self::run(encoding, strategy, &seeded)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<SearchResult<E::Solution>> = (0..restarts)
            .into_par_iter()
            .map(run_one)
            .collect::<Result<_>>()?;
        #[cfg(not(feature = "parallel"))]
        let results: Vec<SearchResult<E::Solution>> =
            (0..restarts).map(run_one).collect::<Result<_>>()?;

        results
            .into_iter()
            .reduce(|best, r| if r.best_residue < best.best_residue { r } else { best })
            .ok_or_else(|| PartitionError::InvalidConfig("restarts must be positive".into()))
    }
}

fn check<E: Encoding>(encoding: &E, config: &SearchConfig) -> Result<()> {
    config.validate().map_err(PartitionError::InvalidConfig)?;
    if encoding.is_empty() {
        return Err(PartitionError::EmptyInput);
    }
    Ok(())
}
