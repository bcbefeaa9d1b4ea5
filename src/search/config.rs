//! Search configuration and cooling schedules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default iteration budget for every strategy.
pub const DEFAULT_ITERATIONS: usize = 25_000;

/// Cooling schedule for simulated annealing.
///
/// The temperature depends only on the iteration index, so the schedule is
/// a pure function and can be evaluated at any point of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoolingSchedule {
    /// Piecewise-constant geometric cooling:
    /// `T(i) = initial * factor^floor(i / step)`.
    Stepped {
        /// Temperature at iteration 0.
        initial: f64,
        /// Multiplier applied once per step, in `(0, 1]`.
        factor: f64,
        /// Iterations spent at each temperature level.
        step: usize,
    },

    /// Per-iteration geometric cooling: `T(i) = initial * alpha^i`.
    Geometric {
        /// Temperature at iteration 0.
        initial: f64,
        /// Cooling factor in `(0, 1]`.
        alpha: f64,
    },
}

impl Default for CoolingSchedule {
    /// `T(i) = 10^10 * 0.8^floor(i / 300)`.
    fn default() -> Self {
        CoolingSchedule::Stepped {
            initial: 1e10,
            factor: 0.8,
            step: 300,
        }
    }
}

impl CoolingSchedule {
    /// Temperature at iteration `i`.
    pub fn temperature(&self, i: usize) -> f64 {
        match *self {
            CoolingSchedule::Stepped {
                initial,
                factor,
                step,
            } => initial * factor.powi(exponent(i / step.max(1))),
            CoolingSchedule::Geometric { initial, alpha } => initial * alpha.powi(exponent(i)),
        }
    }

    fn validate(&self) -> Result<(), String> {
        let (initial, factor, name) = match *self {
            CoolingSchedule::Stepped {
                initial,
                factor,
                step,
            } => {
                if step == 0 {
                    return Err("stepped cooling step must be positive".into());
                }
                (initial, factor, "stepped factor")
            }
            CoolingSchedule::Geometric { initial, alpha } => (initial, alpha, "geometric alpha"),
        };
        if !(initial > 0.0 && initial.is_finite()) {
            return Err(format!(
                "initial temperature must be positive and finite, got {initial}"
            ));
        }
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(format!("{name} must be in (0, 1], got {factor}"));
        }
        Ok(())
    }
}

fn exponent(k: usize) -> i32 {
    i32::try_from(k).unwrap_or(i32::MAX)
}

/// Configuration shared by all local-search strategies.
///
/// # Examples
///
/// ```
/// use u_partition::search::{CoolingSchedule, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_iterations(5_000)
///     .with_cooling(CoolingSchedule::Geometric { initial: 1e6, alpha: 0.999 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Fixed number of iterations. There is no convergence test.
    pub iterations: usize,

    /// Cooling schedule (simulated annealing only).
    pub cooling: CoolingSchedule,

    /// Sample the best residue into the history every this many iterations.
    pub history_interval: usize,

    /// Random seed for reproducibility. `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            cooling: CoolingSchedule::default(),
            history_interval: 100,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.history_interval == 0 {
            return Err("history_interval must be positive".into());
        }
        self.cooling.validate()
    }
}
