//! Standard sign-vector encoding.

use super::types::Encoding;
use crate::draws::{random_index, random_sign};
use crate::error::{PartitionError, Result};
use crate::kk::check_values;
use rand::Rng;

/// Assignment of each number to one side of the partition, as `+1` / `-1`.
pub type SignVector = Vec<i8>;

/// Residue of a sign assignment: `|sum(values[i] * signs[i])|`.
///
/// # Errors
///
/// [`PartitionError::EmptyInput`] or [`PartitionError::InvalidValue`] for a
/// bad input sequence, [`PartitionError::InvalidSolution`] if `signs` has
/// the wrong length or holds anything but `+1` / `-1`.
pub fn standard_residue(values: &[f64], signs: &[i8]) -> Result<f64> {
    check_values(values)?;
    signed_residue(values, signs)
}

/// Residue over values already known to be valid.
fn signed_residue(values: &[f64], signs: &[i8]) -> Result<f64> {
    if signs.len() != values.len() {
        return Err(PartitionError::InvalidSolution(format!(
            "{} signs for {} values",
            signs.len(),
            values.len()
        )));
    }
    let mut sum = 0.0;
    for (i, (&v, &s)) in values.iter().zip(signs).enumerate() {
        if s != 1 && s != -1 {
            return Err(PartitionError::InvalidSolution(format!(
                "sign {s} at index {i}"
            )));
        }
        sum += v * f64::from(s);
    }
    Ok(sum.abs())
}

/// Draws `n` independent fair signs.
pub fn random_sign_vector<R: Rng>(n: usize, rng: &mut R) -> SignVector {
    (0..n).map(|_| random_sign(rng)).collect()
}

/// Sign-vector encoding over a borrowed input sequence.
///
/// A neighbor flips the sign of one uniformly chosen position.
#[derive(Debug, Clone, Copy)]
pub struct SignEncoding<'a> {
    values: &'a [f64],
}

impl<'a> SignEncoding<'a> {
    /// Wraps `values`.
    ///
    /// # Errors
    ///
    /// [`PartitionError::EmptyInput`] if `values` is empty,
    /// [`PartitionError::InvalidValue`] if any value is negative or not finite.
    pub fn new(values: &'a [f64]) -> Result<Self> {
        check_values(values)?;
        Ok(Self { values })
    }

    /// The input sequence.
    pub fn values(&self) -> &'a [f64] {
        self.values
    }
}

impl Encoding for SignEncoding<'_> {
    type Solution = SignVector;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> SignVector {
        random_sign_vector(self.values.len(), rng)
    }

    fn neighbor<R: Rng>(&self, solution: &SignVector, rng: &mut R) -> SignVector {
        let mut next = solution.clone();
        let i = random_index(next.len(), rng);
        next[i] = -next[i];
        next
    }

    fn residue(&self, solution: &SignVector) -> Result<f64> {
        signed_residue(self.values, solution)
    }
}
