//! Ordered containers of spatial values for batch consumers.

use crate::{Mat6X, MotionVec, PTransform};
use std::ops::Index;

/// Insertion-ordered sequence of spatial values.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialSeq<T> {
    items: Vec<T>,
}

/// Ordered transforms, e.g. one per body of a kinematic chain.
pub type PTransformSeq = SpatialSeq<PTransform>;
/// Ordered motion vectors; packs into a batch matrix.
pub type MotionVecSeq = SpatialSeq<MotionVec>;

impl<T> SpatialSeq<T> {
    /// Empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Empty sequence with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append at the end.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the sequence holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Values in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl MotionVecSeq {
    /// Pack into a 6xN matrix, one motion vector per column.
    pub fn to_matrix(&self) -> Mat6X {
        let mut out = Mat6X::zeros(self.len());
        for (i, mv) in self.items.iter().enumerate() {
            out.set_column(i, &mv.vector());
        }
        out
    }

    /// Unpack a 6xN matrix column by column.
    pub fn from_matrix(batch: &Mat6X) -> Self {
        batch
            .column_iter()
            .map(|c| MotionVec::from_vector(&c.into_owned()))
            .collect()
    }
}

impl<T> Default for SpatialSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for SpatialSeq<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> From<T> for SpatialSeq<T> {
    fn from(value: T) -> Self {
        Self { items: vec![value] }
    }
}

impl<T> From<Vec<T>> for SpatialSeq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for SpatialSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for SpatialSeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SpatialSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
