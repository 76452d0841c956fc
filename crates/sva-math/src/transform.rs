//! Plücker transforms in compact (rotation, translation) form.

use crate::rotation::rotation_velocity;
use crate::{
    ABInertia, ForceVec, Mat3, Mat6, Mat6X, MotionVec, Quat, RBInertia, Vec3, block6,
    map_columns, skew,
};
use nalgebra as na;
use std::fmt;
use std::ops::{Mul, MulAssign};

/// Plücker transform from frame A to frame B.
///
/// `rotation` is E, the passive rotation taking A coordinates to B
/// coordinates; `translation` is r, the position of B's origin expressed in A.
///
/// X = | E      0 |
///     | -E[r]× E |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PTransform {
    rotation: Mat3,
    translation: Vec3,
}

impl PTransform {
    /// `rot` must be orthonormal with determinant +1.
    pub fn new(rot: Mat3, trans: Vec3) -> Self {
        Self {
            rotation: rot,
            translation: trans,
        }
    }

    /// Identity transform.
    pub fn identity() -> Self {
        Self::new(Mat3::identity(), Vec3::zeros())
    }

    /// Pure rotation.
    pub fn from_rotation(rot: Mat3) -> Self {
        Self::new(rot, Vec3::zeros())
    }

    /// Pure translation.
    pub fn from_translation(trans: Vec3) -> Self {
        Self::new(Mat3::identity(), trans)
    }

    /// Rotation given as a unit quaternion, used as-is (no inversion).
    pub fn from_quaternion(rot: &Quat, trans: Vec3) -> Self {
        Self::new(rot.to_rotation_matrix().into_inner(), trans)
    }

    /// Passive rotation E.
    pub fn rotation(&self) -> Mat3 {
        self.rotation
    }

    /// Translation r, expressed in the predecessor frame.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// 6x6 Plücker matrix acting on motion vectors.
    pub fn matrix(&self) -> Mat6 {
        let e = self.rotation;
        block6(&e, &Mat3::zeros(), &(-e * skew(&self.translation)), &e)
    }

    /// 6x6 dual Plücker matrix acting on force vectors.
    ///
    /// X* = | E  -E[r]× |
    ///      | 0   E     |
    ///
    /// This is the transpose-inverse of [`matrix`](Self::matrix).
    pub fn dual_matrix(&self) -> Mat6 {
        let e = self.rotation;
        block6(&e, &(-e * skew(&self.translation)), &Mat3::zeros(), &e)
    }

    /// Inverse transform (Eᵀ, −E·r).
    pub fn inv(&self) -> PTransform {
        PTransform::new(self.rotation.transpose(), -(self.rotation * self.translation))
    }

    /// Composition `self ∘ other`: the transform whose matrix is
    /// `self.matrix() * other.matrix()`.
    pub fn compose(&self, other: &PTransform) -> PTransform {
        PTransform::new(
            self.rotation * other.rotation,
            other.translation + other.rotation.transpose() * self.translation,
        )
    }

    // --- motion vectors -----------------------------------------------------

    /// X·v.
    pub fn apply(&self, mv: &MotionVec) -> MotionVec {
        MotionVec::new(self.angular_apply(mv), self.linear_apply(mv))
    }

    /// Angular part of [`apply`](Self::apply): E·ω.
    #[inline]
    pub fn angular_apply(&self, mv: &MotionVec) -> Vec3 {
        self.rotation * mv.angular()
    }

    /// Linear part of [`apply`](Self::apply): E·(v − r×ω).
    #[inline]
    pub fn linear_apply(&self, mv: &MotionVec) -> Vec3 {
        self.rotation * (mv.linear() - self.translation.cross(&mv.angular()))
    }

    /// X⁻¹·v without forming the inverse.
    pub fn inv_apply(&self, mv: &MotionVec) -> MotionVec {
        let ang = self.angular_inv_apply(mv);
        let lin = self.rotation.transpose() * mv.linear() + self.translation.cross(&ang);
        MotionVec::new(ang, lin)
    }

    /// Angular part of [`inv_apply`](Self::inv_apply): Eᵀ·ω.
    #[inline]
    pub fn angular_inv_apply(&self, mv: &MotionVec) -> Vec3 {
        self.rotation.transpose() * mv.angular()
    }

    /// Linear part of [`inv_apply`](Self::inv_apply): Eᵀ·v + r×(Eᵀ·ω).
    #[inline]
    pub fn linear_inv_apply(&self, mv: &MotionVec) -> Vec3 {
        let et = self.rotation.transpose();
        et * mv.linear() + self.translation.cross(&(et * mv.angular()))
    }

    // --- force vectors ------------------------------------------------------

    /// X*·f.
    pub fn dual_apply(&self, fv: &ForceVec) -> ForceVec {
        ForceVec::new(self.couple_dual_apply(fv), self.force_dual_apply(fv))
    }

    /// Couple part of [`dual_apply`](Self::dual_apply): E·(n − r×f).
    #[inline]
    pub fn couple_dual_apply(&self, fv: &ForceVec) -> Vec3 {
        self.rotation * (fv.couple() - self.translation.cross(&fv.force()))
    }

    /// Force part of [`dual_apply`](Self::dual_apply): E·f.
    #[inline]
    pub fn force_dual_apply(&self, fv: &ForceVec) -> Vec3 {
        self.rotation * fv.force()
    }

    /// Xᵀ·f: the transpose of the motion matrix applied to a wrench. Equal
    /// to (X*)⁻¹·f, i.e. the wrench expressed back in frame A.
    pub fn trans_apply(&self, fv: &ForceVec) -> ForceVec {
        let force = self.force_trans_apply(fv);
        let couple = self.rotation.transpose() * fv.couple() + self.translation.cross(&force);
        ForceVec::new(couple, force)
    }

    /// Couple part of [`trans_apply`](Self::trans_apply): Eᵀ·n + r×(Eᵀ·f).
    #[inline]
    pub fn couple_trans_apply(&self, fv: &ForceVec) -> Vec3 {
        let et = self.rotation.transpose();
        et * fv.couple() + self.translation.cross(&(et * fv.force()))
    }

    /// Force part of [`trans_apply`](Self::trans_apply): Eᵀ·f.
    #[inline]
    pub fn force_trans_apply(&self, fv: &ForceVec) -> Vec3 {
        self.rotation.transpose() * fv.force()
    }

    // --- batches ------------------------------------------------------------

    /// [`apply`](Self::apply) on every column of a motion batch.
    pub fn apply_batch(&self, motions: &Mat6X) -> Mat6X {
        map_columns(motions, |c| self.apply(&MotionVec::from_vector(c)).vector())
    }

    /// [`inv_apply`](Self::inv_apply) on every column of a motion batch.
    pub fn inv_apply_batch(&self, motions: &Mat6X) -> Mat6X {
        map_columns(motions, |c| {
            self.inv_apply(&MotionVec::from_vector(c)).vector()
        })
    }

    /// [`dual_apply`](Self::dual_apply) on every column of a force batch.
    pub fn dual_apply_batch(&self, forces: &Mat6X) -> Mat6X {
        map_columns(forces, |c| self.dual_apply(&ForceVec::from_vector(c)).vector())
    }

    /// [`trans_apply`](Self::trans_apply) on every column of a force batch.
    pub fn trans_apply_batch(&self, forces: &Mat6X) -> Mat6X {
        map_columns(forces, |c| {
            self.trans_apply(&ForceVec::from_vector(c)).vector()
        })
    }

    // --- inertia congruences ------------------------------------------------

    /// X*·I·X⁻¹: rigid-body inertia expressed in frame B.
    pub fn dual_apply_rb(&self, rb: &RBInertia) -> RBInertia {
        let e = self.rotation;
        let r = self.translation;
        let h = rb.momentum();
        let m = rb.mass();
        let rx = skew(&r);
        let i = e * (rb.inertia() + rx * skew(&h) + skew(&(h - r * m)) * rx) * e.transpose();
        RBInertia::new(m, e * (h - r * m), i)
    }

    /// Xᵀ·I·X: rigid-body inertia expressed back in frame A.
    pub fn trans_apply_rb(&self, rb: &RBInertia) -> RBInertia {
        let e = self.rotation;
        let et = e.transpose();
        let r = self.translation;
        let m = rb.mass();
        let eth = et * rb.momentum();
        let rx = skew(&r);
        let i = et * rb.inertia() * e - rx * skew(&eth) - skew(&(eth + r * m)) * rx;
        RBInertia::new(m, eth + r * m, i)
    }

    /// X*·I·X⁻¹: articulated inertia expressed in frame B.
    pub fn dual_apply_ab(&self, ab: &ABInertia) -> ABInertia {
        let e = self.rotation;
        let et = e.transpose();
        let mass = ab.mass_matrix();
        let rx = skew(&self.translation);
        let h = ab.g_inertia() - rx * mass;

        let m = e * mass * et;
        let i = e * (ab.inertia() - rx * ab.g_inertia().transpose() + h * rx) * et;
        ABInertia::new(&m, &(e * h * et), &i)
    }

    /// Xᵀ·I·X: articulated inertia expressed back in frame A.
    pub fn trans_apply_ab(&self, ab: &ABInertia) -> ABInertia {
        let e = self.rotation;
        let et = e.transpose();
        let rx = skew(&self.translation);
        let mp = et * ab.mass_matrix() * e;
        let hp = et * ab.g_inertia() * e;

        let h = hp + rx * mp;
        let i = et * ab.inertia() * e + rx * hp.transpose() - h * rx;
        ABInertia::new(&mp, &h, &i)
    }
}

impl Default for PTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for PTransform {
    type Output = PTransform;
    fn mul(self, rhs: PTransform) -> PTransform {
        self.compose(&rhs)
    }
}

impl MulAssign for PTransform {
    fn mul_assign(&mut self, rhs: PTransform) {
        *self = self.compose(&rhs);
    }
}

impl Mul<MotionVec> for PTransform {
    type Output = MotionVec;
    fn mul(self, rhs: MotionVec) -> MotionVec {
        self.apply(&rhs)
    }
}

impl fmt::Display for PTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix())
    }
}

/// Motion vector of `x_a_b` in frame `a`: integrating it for one second
/// yields `x_a_b`. Angular part from [`rotation_velocity`], linear part is
/// the translation.
pub fn transform_velocity(x_a_b: &PTransform) -> MotionVec {
    MotionVec::new(rotation_velocity(&x_a_b.rotation), x_a_b.translation)
}

/// 6D error between `x_a_b` and `x_a_c` expressed in frame `a`.
///
/// Angular part equals `rotation_error(E_a_b, E_a_c)`, linear part equals
/// the difference of translations.
pub fn transform_error(x_a_b: &PTransform, x_a_c: &PTransform) -> MotionVec {
    let x_b_c = x_a_c.compose(&x_a_b.inv());
    PTransform::from_rotation(x_a_b.rotation.transpose()).apply(&transform_velocity(&x_b_c))
}

/// Interpolate between two transforms, `t` in [0, 1]: quaternion slerp of
/// the rotation, linear interpolation of the translation.
pub fn interpolate(from: &PTransform, to: &PTransform, t: f64) -> PTransform {
    let q_from = Quat::from_rotation_matrix(&na::Rotation3::from_matrix_unchecked(from.rotation));
    let q_to = Quat::from_rotation_matrix(&na::Rotation3::from_matrix_unchecked(to.rotation));
    PTransform::from_quaternion(
        &q_from.slerp(&q_to, t),
        from.translation * (1.0 - t) + to.translation * t,
    )
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn arb_pos() -> impl Strategy<Value = Vec3> {
        (-10.0..10.0_f64, -10.0..10.0_f64, -10.0..10.0_f64)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    fn arb_angle() -> impl Strategy<Value = f64> {
        -std::f64::consts::PI..std::f64::consts::PI
    }

    fn arb_unit_axis() -> impl Strategy<Value = na::Unit<Vec3>> {
        (-1.0..1.0_f64, -1.0..1.0_f64, -1.0..1.0_f64)
            .prop_filter("non-zero axis", |(x, y, z)| x * x + y * y + z * z > 0.01)
            .prop_map(|(x, y, z)| na::Unit::new_normalize(Vec3::new(x, y, z)))
    }

    fn arb_transform() -> impl Strategy<Value = PTransform> {
        (arb_unit_axis(), arb_angle(), arb_pos()).prop_map(|(axis, angle, pos)| {
            let rot = na::Rotation3::from_axis_angle(&axis, angle);
            PTransform::new(*rot.matrix(), pos)
        })
    }

    fn arb_motion() -> impl Strategy<Value = MotionVec> {
        (arb_pos(), arb_pos()).prop_map(|(w, v)| MotionVec::new(w, v))
    }

    fn arb_sym() -> impl Strategy<Value = Mat3> {
        (
            (-5.0..5.0_f64, -5.0..5.0_f64, -5.0..5.0_f64),
            (-5.0..5.0_f64, -5.0..5.0_f64, -5.0..5.0_f64),
        )
            .prop_map(|((a, b, c), (d, e, f))| Mat3::new(a, d, e, d, b, f, e, f, c))
    }

    fn arb_mat() -> impl Strategy<Value = Mat3> {
        (arb_pos(), arb_pos(), arb_pos()).prop_map(|(r0, r1, r2)| {
            Mat3::from_rows(&[r0.transpose(), r1.transpose(), r2.transpose()])
        })
    }

    fn arb_rb_inertia() -> impl Strategy<Value = RBInertia> {
        (0.1..10.0_f64, arb_pos(), arb_sym()).prop_map(|(m, h, i)| RBInertia::new(m, h, i))
    }

    fn arb_ab_inertia() -> impl Strategy<Value = ABInertia> {
        (arb_sym(), arb_mat(), arb_sym()).prop_map(|(m, h, i)| ABInertia::new(&m, &h, &i))
    }

    fn upper_is_zero(m: &Mat3) -> bool {
        m[(0, 1)] == 0.0 && m[(0, 2)] == 0.0 && m[(1, 2)] == 0.0
    }

    fn close(a: &Mat6, b: &Mat6) -> bool {
        (a - b).norm() <= 1e-9 * (1.0 + b.norm())
    }

    proptest! {
        #[test]
        fn compose_with_inverse_is_identity(xf in arb_transform()) {
            let id = PTransform::identity();
            let left = (xf.inv() * xf).matrix() - id.matrix();
            let right = (xf * xf.inv()).matrix() - id.matrix();
            prop_assert!(left.norm() < 1e-5, "X⁻¹X: {}", left.norm());
            prop_assert!(right.norm() < 1e-5, "XX⁻¹: {}", right.norm());
        }

        #[test]
        fn compose_matches_matrix_product(a in arb_transform(), b in arb_transform()) {
            let diff = (a * b).matrix() - a.matrix() * b.matrix();
            prop_assert!(diff.norm() < EPS * 100.0, "diff = {}", diff.norm());
        }

        #[test]
        fn compose_is_associative(
            a in arb_transform(),
            b in arb_transform(),
            c in arb_transform(),
        ) {
            let ab_c = (a * b) * c;
            let a_bc = a * (b * c);
            prop_assert!((ab_c.rotation() - a_bc.rotation()).norm() < EPS);
            prop_assert!((ab_c.translation() - a_bc.translation()).norm() < EPS * 100.0);
        }

        #[test]
        fn inv_apply_matches_inverse(xf in arb_transform(), v in arb_motion()) {
            let direct = xf.inv_apply(&v).vector();
            let via_inv = xf.inv().apply(&v).vector();
            prop_assert!((direct - via_inv).norm() < EPS * 100.0);
            let back = xf.inv_apply(&xf.apply(&v)).vector();
            prop_assert!((back - v.vector()).norm() < EPS * 100.0);
        }

        #[test]
        fn power_is_frame_invariant(xf in arb_transform(), v in arb_motion(), f in arb_motion()) {
            // ⟨Xv, X*f⟩ = ⟨v, f⟩
            let f = ForceVec::from_vector(&f.vector());
            let lhs = xf.apply(&v).dot(&xf.dual_apply(&f));
            let rhs = v.dot(&f);
            prop_assert!((lhs - rhs).abs() < 1e-7 * (1.0 + rhs.abs()));
        }
    }

    proptest! {
        #[test]
        fn rb_dual_apply_is_congruence(xf in arb_transform(), rb in arb_rb_inertia()) {
            let res = xf.dual_apply_rb(&rb);
            let expected = xf.dual_matrix() * rb.matrix() * xf.inv().matrix();
            prop_assert!(close(&res.matrix(), &expected));
            prop_assert!(upper_is_zero(&res.lower_triangular_inertia()));
        }

        #[test]
        fn rb_trans_apply_is_congruence(xf in arb_transform(), rb in arb_rb_inertia()) {
            let res = xf.trans_apply_rb(&rb);
            let expected = xf.matrix().transpose() * rb.matrix() * xf.matrix();
            prop_assert!(close(&res.matrix(), &expected));
            prop_assert!(upper_is_zero(&res.lower_triangular_inertia()));
        }

        #[test]
        fn ab_dual_apply_is_congruence(xf in arb_transform(), ab in arb_ab_inertia()) {
            let res = xf.dual_apply_ab(&ab);
            let expected = xf.dual_matrix() * ab.matrix() * xf.inv().matrix();
            prop_assert!(close(&res.matrix(), &expected));
            prop_assert!(upper_is_zero(&res.lower_triangular_inertia()));
            prop_assert!(upper_is_zero(&res.lower_triangular_mass_matrix()));
        }

        #[test]
        fn ab_trans_apply_is_congruence(xf in arb_transform(), ab in arb_ab_inertia()) {
            let res = xf.trans_apply_ab(&ab);
            let expected = xf.matrix().transpose() * ab.matrix() * xf.matrix();
            prop_assert!(close(&res.matrix(), &expected));
            prop_assert!(upper_is_zero(&res.lower_triangular_inertia()));
            prop_assert!(upper_is_zero(&res.lower_triangular_mass_matrix()));
        }

        #[test]
        fn rb_congruence_matches_promoted_ab(xf in arb_transform(), rb in arb_rb_inertia()) {
            let via_rb = xf.dual_apply_rb(&rb).matrix();
            let via_ab = xf.dual_apply_ab(&rb.to_articulated()).matrix();
            prop_assert!(close(&via_rb, &via_ab));
        }
    }
}
