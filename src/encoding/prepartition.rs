//! Prepartition (group label) encoding.

use super::types::Encoding;
use crate::draws::{random_index, random_label};
use crate::error::{PartitionError, Result};
use crate::kk::{check_values, karmarkar_karp};
use rand::Rng;

/// Group label for each number, each in `0..n`.
pub type LabelVector = Vec<usize>;

/// Sums the values sharing each label.
///
/// The result always has `values.len()` slots. Labels nobody uses leave a
/// `0.0` in their slot.
///
/// # Errors
///
/// [`PartitionError::InvalidSolution`] if `labels` has the wrong length or
/// holds a label outside `0..values.len()`.
pub fn group_by_labels(values: &[f64], labels: &[usize]) -> Result<Vec<f64>> {
    let n = values.len();
    if labels.len() != n {
        return Err(PartitionError::InvalidSolution(format!(
            "{} labels for {n} values",
            labels.len()
        )));
    }
    let mut grouped = vec![0.0; n];
    for (i, (&v, &label)) in values.iter().zip(labels).enumerate() {
        let slot = grouped.get_mut(label).ok_or_else(|| {
            PartitionError::InvalidSolution(format!("label {label} at index {i} outside 0..{n}"))
        })?;
        *slot += v;
    }
    Ok(grouped)
}

/// Residue of a prepartition: Karmarkar-Karp over the grouped sums.
///
/// # Errors
///
/// [`PartitionError::EmptyInput`] or [`PartitionError::InvalidValue`] for a
/// bad input sequence, [`PartitionError::InvalidSolution`] for labels that
/// do not fit it.
pub fn prepartition_residue(values: &[f64], labels: &[usize]) -> Result<f64> {
    check_values(values)?;
    karmarkar_karp(&group_by_labels(values, labels)?)
}

/// Draws `n` independent labels, each uniform in `0..n`.
pub fn random_label_vector<R: Rng>(n: usize, rng: &mut R) -> LabelVector {
    (0..n).map(|_| random_label(n, rng)).collect()
}

/// Prepartition encoding over a borrowed input sequence.
///
/// A neighbor reassigns one uniformly chosen position to a uniformly chosen
/// label. The new label may equal the old one, in which case the neighbor
/// is identical to its origin.
#[derive(Debug, Clone, Copy)]
pub struct PrepartitionEncoding<'a> {
    values: &'a [f64],
}

impl<'a> PrepartitionEncoding<'a> {
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

impl Encoding for PrepartitionEncoding<'_> {
    type Solution = LabelVector;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> LabelVector {
        random_label_vector(self.values.len(), rng)
    }

    fn neighbor<R: Rng>(&self, solution: &LabelVector, rng: &mut R) -> LabelVector {
        let n = solution.len();
        let mut next = solution.clone();
        let i = random_index(n, rng);
        next[i] = random_label(n, rng);
        next
    }

    fn residue(&self, solution: &LabelVector) -> Result<f64> {
        karmarkar_karp(&group_by_labels(self.values, solution)?)
    }
}
