//! Spatial motion vectors (twists).

use crate::{ForceVec, Mat6X, Vec3, Vec6, concat, head, map_columns, tail};
use std::fmt;

/// Spatial motion vector [ω; v]: angular velocity and linear velocity of the
/// frame origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionVec {
    angular: Vec3,
    linear: Vec3,
}

impl MotionVec {
    /// Create from angular and linear parts.
    #[inline]
    pub fn new(angular: Vec3, linear: Vec3) -> Self {
        Self { angular, linear }
    }

    /// Create from a 6D vector [angular; linear].
    #[inline]
    pub fn from_vector(v: &Vec6) -> Self {
        Self::new(head(v), tail(v))
    }

    /// Zero motion vector, the additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self::new(Vec3::zeros(), Vec3::zeros())
    }

    /// Angular (top 3) component.
    #[inline]
    pub fn angular(&self) -> Vec3 {
        self.angular
    }

    /// Linear (bottom 3) component.
    #[inline]
    pub fn linear(&self) -> Vec3 {
        self.linear
    }

    /// Flattened 6D view [angular; linear].
    #[inline]
    pub fn vector(&self) -> Vec6 {
        concat(&self.angular, &self.linear)
    }

    /// Spatial cross product (Lie bracket) m ×ₘ m2.
    /// Used in velocity and acceleration propagation.
    pub fn cross(&self, other: &MotionVec) -> MotionVec {
        MotionVec::new(
            self.angular.cross(&other.angular),
            self.angular.cross(&other.linear) + self.linear.cross(&other.angular),
        )
    }

    /// Dual cross product m ×f f. Propagates a wrench under a moving frame.
    pub fn cross_dual(&self, f: &ForceVec) -> ForceVec {
        ForceVec::new(
            self.angular.cross(&f.couple()) + self.linear.cross(&f.force()),
            self.angular.cross(&f.force()),
        )
    }

    /// Power pairing ⟨m, f⟩ = ω·n + v·f.
    #[inline]
    pub fn dot(&self, f: &ForceVec) -> f64 {
        self.angular.dot(&f.couple()) + self.linear.dot(&f.force())
    }

    /// [`cross`](Self::cross) applied to every column of a motion batch.
    pub fn cross_batch(&self, motions: &Mat6X) -> Mat6X {
        map_columns(motions, |c| self.cross(&MotionVec::from_vector(c)).vector())
    }

    /// [`cross_dual`](Self::cross_dual) applied to every column of a force batch.
    pub fn cross_dual_batch(&self, forces: &Mat6X) -> Mat6X {
        map_columns(forces, |c| {
            self.cross_dual(&ForceVec::from_vector(c)).vector()
        })
    }
}

impl_pair_signed_ops!(MotionVec, angular, linear);

impl Default for MotionVec {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for MotionVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vector().transpose())
    }
}

/// Free-function form of [`MotionVec::cross`].
#[inline]
pub fn cross(m1: &MotionVec, m2: &MotionVec) -> MotionVec {
    m1.cross(m2)
}

/// Free-function form of [`MotionVec::cross_dual`].
#[inline]
pub fn cross_dual(m: &MotionVec, f: &ForceVec) -> ForceVec {
    m.cross_dual(f)
}

/// Free-function form of [`MotionVec::dot`].
#[inline]
pub fn dot(m: &MotionVec, f: &ForceVec) -> f64 {
    m.dot(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cross_dual_matrix6, cross_matrix6};
    use approx::assert_relative_eq;

    fn sample() -> (Vec3, Vec3) {
        (Vec3::new(1.5, -2.0, 0.25), Vec3::new(-4.0, 3.5, 10.0))
    }

    #[test]
    fn test_accessors_roundtrip() {
        let (w, v) = sample();
        let m = MotionVec::new(w, v);
        assert_eq!(m.angular(), w);
        assert_eq!(m.linear(), v);
        assert_eq!(m.vector(), Vec6::new(1.5, -2.0, 0.25, -4.0, 3.5, 10.0));
        assert_eq!(MotionVec::from_vector(&m.vector()), m);
    }

    #[test]
    fn test_arithmetic_matches_vector() {
        let (w, v) = sample();
        let m1 = MotionVec::new(w, v);
        let m2 = MotionVec::new(v, w);

        assert_eq!((m1 + m2).vector(), m1.vector() + m2.vector());
        assert_eq!((m1 - m2).vector(), m1.vector() - m2.vector());
        assert_eq!((-m1).vector(), -m1.vector());
        assert_eq!((m1 * 2.0).vector(), m1.vector() * 2.0);
        assert_eq!((2.0 * m1).vector(), m1.vector() * 2.0);
        assert_eq!((m1 / 2.0).vector(), m1.vector() / 2.0);

        let mut acc = m1;
        acc += m2;
        assert_eq!(acc, m1 + m2);
        acc -= m2;
        acc *= 3.0;
        assert_eq!(acc.vector(), (m1 + m2 - m2).vector() * 3.0);
        acc /= 3.0;
        assert_relative_eq!(acc.vector(), m1.vector(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_is_identity() {
        let (w, v) = sample();
        let m = MotionVec::new(w, v);
        assert_eq!(m + MotionVec::zero(), m);
        assert_eq!(MotionVec::default(), MotionVec::zero());
    }

    #[test]
    fn test_equality_is_exact() {
        let (w, v) = sample();
        let m = MotionVec::new(w, v);
        let nudged = MotionVec::new(w + Vec3::new(1e-15, 0.0, 0.0), v);
        assert_eq!(m, m);
        assert_ne!(m, nudged);
    }

    #[test]
    fn test_cross_products_match_matrices() {
        let (w, v) = sample();
        let m1 = MotionVec::new(w, v);
        let m2 = MotionVec::new(Vec3::new(0.3, 0.1, -0.7), Vec3::new(2.0, -1.0, 0.5));
        let f = ForceVec::new(Vec3::new(-1.0, 4.0, 2.0), Vec3::new(0.0, 1.5, -3.0));

        let crm = cross_matrix6(&m1.vector()) * m2.vector();
        assert_relative_eq!(m1.cross(&m2).vector(), crm, epsilon = 1e-10);

        let crf = cross_dual_matrix6(&m1.vector()) * f.vector();
        assert_relative_eq!(m1.cross_dual(&f).vector(), crf, epsilon = 1e-10);

        assert_relative_eq!(m1.dot(&f), m1.vector().dot(&f.vector()), epsilon = 1e-10);
        assert_eq!(cross(&m1, &m2), m1.cross(&m2));
        assert_eq!(cross_dual(&m1, &f), m1.cross_dual(&f));
        assert_eq!(dot(&m1, &f), m1.dot(&f));
    }

    #[test]
    fn test_cross_with_self_is_zero() {
        let (w, v) = sample();
        let m = MotionVec::new(w, v);
        assert_relative_eq!(m.cross(&m).vector(), Vec6::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn test_batch_matches_single() {
        let (w, v) = sample();
        let m = MotionVec::new(w, v);
        let other = MotionVec::new(Vec3::new(0.3, 0.1, -0.7), Vec3::new(2.0, -1.0, 0.5));
        let f = ForceVec::new(Vec3::new(-1.0, 4.0, 2.0), Vec3::new(0.0, 1.5, -3.0));

        let motions = Mat6X::from_columns(&[other.vector(), other.vector()]);
        let res = m.cross_batch(&motions);
        assert_eq!(res.column(0).into_owned(), m.cross(&other).vector());
        assert_eq!(res.column(0).into_owned(), res.column(1).into_owned());

        let forces = Mat6X::from_columns(&[f.vector(), f.vector()]);
        let res = m.cross_dual_batch(&forces);
        assert_eq!(res.column(0).into_owned(), m.cross_dual(&f).vector());
        assert_eq!(res.column(0).into_owned(), res.column(1).into_owned());
    }
}
