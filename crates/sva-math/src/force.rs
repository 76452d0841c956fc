//! Spatial force vectors (wrenches).

use crate::{Vec3, Vec6, concat, head, tail};
use std::fmt;

/// Spatial force vector [n; f]: couple about the frame origin and linear force.
///
/// Dual of [`MotionVec`](crate::MotionVec) under [`MotionVec::dot`](crate::MotionVec::dot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceVec {
    couple: Vec3,
    force: Vec3,
}

impl ForceVec {
    /// Create from couple and force parts.
    #[inline]
    pub fn new(couple: Vec3, force: Vec3) -> Self {
        Self { couple, force }
    }

    /// Create from a 6D vector [couple; force].
    #[inline]
    pub fn from_vector(v: &Vec6) -> Self {
        Self::new(head(v), tail(v))
    }

    /// Zero wrench.
    #[inline]
    pub fn zero() -> Self {
        Self::new(Vec3::zeros(), Vec3::zeros())
    }

    /// Couple (top 3) component.
    #[inline]
    pub fn couple(&self) -> Vec3 {
        self.couple
    }

    /// Force (bottom 3) component.
    #[inline]
    pub fn force(&self) -> Vec3 {
        self.force
    }

    /// Flattened 6D view [couple; force].
    #[inline]
    pub fn vector(&self) -> Vec6 {
        concat(&self.couple, &self.force)
    }
}

impl_pair_signed_ops!(ForceVec, couple, force);

impl Default for ForceVec {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for ForceVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vector().transpose())
    }
}
