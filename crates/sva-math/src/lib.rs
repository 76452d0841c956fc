//! Spatial vector algebra for rigid-body dynamics.
//!
//! Implements 6D motion and force vectors, rigid-body and articulated-body
//! spatial inertia, and Plücker transforms following Featherstone's
//! conventions.
//!
//! Convention: spatial vectors are [angular; linear] (Featherstone order).
//! Rotations stored in a [`PTransform`] are expressed in the successor frame
//! (passive rotations), so `rot_x(θ)` equals an axis-angle rotation of `-θ`.
//!
//! Every operation is total over finite inputs. Rotations are assumed
//! orthonormal and inertia matrices symmetric; neither is checked.

#[macro_use]
mod macros;

pub mod conversions;
pub mod force;
pub mod gain;
pub mod inertia;
pub mod math_func;
pub mod motion;
pub mod rotation;
pub mod seq;
pub mod transform;

pub use conversions::{Handedness, from_homogeneous, to_homogeneous};
pub use force::ForceVec;
pub use gain::{AdmittanceVec, ImpedanceVec};
pub use inertia::{ABInertia, RBInertia, inertia_to_origin};
pub use math_func::{sinc, sinc_inv, so3_right_jac_inv, so3_right_jac_inv_dot};
pub use motion::{MotionVec, cross, cross_dual, dot};
pub use rotation::{
    DEFAULT_PREC, rot_x, rot_y, rot_z, rotation_error, rotation_error_prec, rotation_velocity,
    rotation_velocity_prec,
};
pub use seq::{MotionVecSeq, PTransformSeq, SpatialSeq};
pub use transform::{PTransform, interpolate, transform_error, transform_velocity};

use nalgebra as na;

/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;
/// 3x3 matrix alias.
pub type Mat3 = na::Matrix3<f64>;
/// 4x4 matrix alias.
pub type Mat4 = na::Matrix4<f64>;
/// 6D vector alias.
pub type Vec6 = na::Vector6<f64>;
/// 6x6 matrix alias.
pub type Mat6 = na::Matrix6<f64>;
/// Batch of spatial vectors, one per column.
pub type Mat6X = na::Matrix6xX<f64>;
/// Unit quaternion alias.
pub type Quat = na::UnitQuaternion<f64>;

/// Cross-product matrix: [v]× such that [v]× w = v × w.
#[inline]
pub fn skew(v: &Vec3) -> Mat3 {
    Mat3::new(0.0, -v.z, v.y, v.z, 0.0, -v.x, -v.y, v.x, 0.0)
}

/// Spatial cross-product matrix of a motion vector [w; v].
///
/// crm(m) = | [w]×   0   |
///          | [v]×  [w]× |
///
/// `cross_matrix6(m1.vector()) * m2.vector() == m1.cross(&m2).vector()`.
pub fn cross_matrix6(v: &Vec6) -> Mat6 {
    let wx = skew(&head(v));
    let mut m = Mat6::zeros();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(&wx);
    m.fixed_view_mut::<3, 3>(3, 0).copy_from(&skew(&tail(v)));
    m.fixed_view_mut::<3, 3>(3, 3).copy_from(&wx);
    m
}

/// Dual spatial cross-product matrix: crf(m) = -crm(m)ᵀ.
pub fn cross_dual_matrix6(v: &Vec6) -> Mat6 {
    -cross_matrix6(v).transpose()
}

/// Rebuild a symmetric matrix from its lower triangle. The upper part of
/// `lower` is ignored.
#[inline]
pub fn symmetric_from_lower(lower: &Mat3) -> Mat3 {
    Mat3::from_fn(|i, j| if i >= j { lower[(i, j)] } else { lower[(j, i)] })
}

/// Keep the lower triangle (diagonal included) and zero the strict upper part.
#[inline]
pub fn lower_from_symmetric(m: &Mat3) -> Mat3 {
    Mat3::from_fn(|i, j| if i >= j { m[(i, j)] } else { 0.0 })
}

/// Assemble a 6x6 matrix from four 3x3 blocks.
pub(crate) fn block6(tl: &Mat3, tr: &Mat3, bl: &Mat3, br: &Mat3) -> Mat6 {
    let mut m = Mat6::zeros();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(tl);
    m.fixed_view_mut::<3, 3>(0, 3).copy_from(tr);
    m.fixed_view_mut::<3, 3>(3, 0).copy_from(bl);
    m.fixed_view_mut::<3, 3>(3, 3).copy_from(br);
    m
}

#[inline]
pub(crate) fn head(v: &Vec6) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

#[inline]
pub(crate) fn tail(v: &Vec6) -> Vec3 {
    Vec3::new(v[3], v[4], v[5])
}

#[inline]
pub(crate) fn concat(a: &Vec3, b: &Vec3) -> Vec6 {
    Vec6::new(a.x, a.y, a.z, b.x, b.y, b.z)
}

/// Apply `f` to every column of a 6xN batch.
pub(crate) fn map_columns(batch: &Mat6X, f: impl Fn(&Vec6) -> Vec6) -> Mat6X {
    let mut out = Mat6X::zeros(batch.ncols());
    for (i, col) in batch.column_iter().enumerate() {
        out.set_column(i, &f(&col.into_owned()));
    }
    out
}
