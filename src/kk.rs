//! Karmarkar-Karp differencing.
//!
//! Repeatedly replaces the two largest remaining values with their
//! difference until a single value, the residue, remains. O(n log n).
//!
//! # Reference
//!
//! Karmarkar, N. & Karp, R. M. (1982). "The Differencing Method of Set
//! Partitioning", Technical Report UCB/CSD 82/113, UC Berkeley.

use crate::error::{PartitionError, Result};
use crate::heap::MaxHeap;

/// Reduces `values` to a single residue by largest-differencing.
///
/// A fresh heap is built on every call; `values` is not modified.
///
/// # Errors
///
/// [`PartitionError::EmptyInput`] if `values` is empty,
/// [`PartitionError::InvalidValue`] if any value is negative or not finite.
///
/// # Examples
///
/// ```
/// use u_partition::kk::karmarkar_karp;
///
/// assert_eq!(karmarkar_karp(&[10.0, 15.0, 0.0, 6.0, 5.0]).unwrap(), 4.0);
/// assert_eq!(karmarkar_karp(&[42.0]).unwrap(), 42.0);
/// ```
pub fn karmarkar_karp(values: &[f64]) -> Result<f64> {
    check_values(values)?;

    let mut heap = MaxHeap::from_values(values);
    while heap.size() > 1 {
        let max = heap.pop()?;
        let second_max = heap.pop()?;
        heap.insert(max - second_max);
    }
    heap.pop()
}

/// Checks that `values` is a non-empty sequence of finite non-negative
/// reals. Every residue entry point requires this.
pub fn check_values(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(PartitionError::EmptyInput);
    }
    match values.iter().position(|v| !(v.is_finite() && *v >= 0.0)) {
        Some(index) => Err(PartitionError::InvalidValue {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
