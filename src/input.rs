//! Number-list input and random instance generation.
//!
//! The input format is one non-negative decimal number per line.
//! Surrounding whitespace is trimmed and blank lines are skipped.

use std::fs;
use std::path::Path;

use crate::error::{PartitionError, Result};
use rand::Rng;
use tracing::debug;

/// Parses newline-delimited numbers.
///
/// # Errors
///
/// [`PartitionError::MalformedNumericLine`] for the first line that is not
/// a finite non-negative real number.
///
/// # Examples
///
/// ```
/// use u_partition::input::parse_numbers;
///
/// let values = parse_numbers("10\n15\n0\n6\n5\n").unwrap();
/// assert_eq!(values, vec![10.0, 15.0, 0.0, 6.0, 5.0]);
/// ```
pub fn parse_numbers(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => values.push(v),
            _ => {
                return Err(PartitionError::MalformedNumericLine {
                    line: idx + 1,
                    content: line.to_string(),
                })
            }
        }
    }
    Ok(values)
}

/// Reads and parses a number file.
pub fn read_numbers<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let values = parse_numbers(&text)?;
    debug!(path = %path.display(), count = values.len(), "read input numbers");
    Ok(values)
}

/// Draws `n` integers uniformly from `1..=max`, as `f64`.
///
/// `max` must be at least 1.
pub fn random_instance<R: Rng>(n: usize, max: u64, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(1..=max) as f64).collect()
}
