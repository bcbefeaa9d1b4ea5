//! Array-backed binary max-heap over `f64`.
//!
//! Layout:
//!
//! ```text
//! parent(i)      = (i - 1) / 2
//! left_child(i)  = 2*i + 1
//! right_child(i) = 2*i + 2
//!
//! invariant: data[parent(i)] >= data[i]  for all i > 0
//! ```
//!
//! Comparisons are strict, so on equal children the left one is preferred.
//! Only the popped values are meaningful to callers; the internal layout is
//! an implementation detail.

use crate::error::{PartitionError, Result};

/// Binary max-heap of real numbers.
#[derive(Debug, Clone, Default)]
pub struct MaxHeap {
    data: Vec<f64>,
}

impl MaxHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap by inserting every value in order.
    ///
    /// The input slice is copied; it is never modified.
    pub fn from_values(values: &[f64]) -> Self {
        let mut heap = Self::with_capacity(values.len());
        for &v in values {
            heap.insert(v);
        }
        heap
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The current maximum, if any.
    pub fn peek(&self) -> Option<f64> {
        self.data.first().copied()
    }

    /// Inserts a value and restores the heap invariant. O(log n).
    pub fn insert(&mut self, value: f64) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the maximum. O(log n).
    ///
    /// # Errors
    ///
    /// [`PartitionError::EmptyHeap`] if the heap is empty.
    pub fn pop(&mut self) -> Result<f64> {
        let last = match self.data.len() {
            0 => return Err(PartitionError::EmptyHeap),
            n => n - 1,
        };
        self.data.swap(0, last);
        let max = self.data.pop().ok_or(PartitionError::EmptyHeap)?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(max)
    }

    /// Consumes the heap and returns its backing array in heap order.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.data[i] > self.data[parent] {
                self.data.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let mut largest = i;
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            if left < n && self.data[left] > self.data[largest] {
                largest = left;
            }
            if right < n && self.data[right] > self.data[largest] {
                largest = right;
            }
            if largest == i {
                break;
            }
            self.data.swap(i, largest);
            i = largest;
        }
    }
}
