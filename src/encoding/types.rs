//! Core trait for partition encodings.

use crate::error::Result;
use rand::Rng;

/// A solution representation for the number partitioning problem.
///
/// The search driver is generic over this trait, so each strategy is
/// written once and shared by every encoding.
///
/// # Minimization
///
/// Lower residues are better. Residues are never negative.
///
/// # Examples
///
/// ```
/// use u_partition::draws::create_rng;
/// use u_partition::encoding::{Encoding, SignEncoding};
///
/// let values = [1.0, 7.0, 8.0, 4.0, 6.0, 10.0];
/// let encoding = SignEncoding::new(&values).unwrap();
/// let mut rng = create_rng(42);
///
/// let solution = encoding.random_solution(&mut rng);
/// let neighbor = encoding.neighbor(&solution, &mut rng);
/// assert!(encoding.residue(&neighbor).unwrap() >= 0.0);
/// ```
pub trait Encoding: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Number of input values covered by a solution.
    fn len(&self) -> usize;

    /// Whether the encoding covers no values. Constructors reject empty
    /// input, so this is `false` for every encoding the crate builds.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draws a uniformly random solution.
    fn random_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Draws a neighbor differing from `solution` in exactly one position.
    ///
    /// `solution` itself is not modified; the neighbor is a fresh copy.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;

    /// Computes the residue of a solution.
    fn residue(&self, solution: &Self::Solution) -> Result<f64>;
}
