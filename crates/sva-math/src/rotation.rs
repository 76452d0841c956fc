//! Elementary rotations and the SO(3) logarithm.
//!
//! Rotation matrices here are passive (they map coordinates from the
//! predecessor frame into the successor frame), so `rot_x(θ)` equals the
//! active axis-angle rotation of `-θ` about X.

use crate::math_func::sinc_inv;
use crate::{Mat3, Vec3};
use std::f64::consts::PI;

/// Default tolerance for the identity short-cut of [`rotation_velocity_prec`].
pub const DEFAULT_PREC: f64 = 1e-8;

/// Frame rotation of `theta` radians about the X axis.
pub fn rot_x(theta: f64) -> Mat3 {
    let (s, c) = theta.sin_cos();
    Mat3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

/// Frame rotation of `theta` radians about the Y axis.
pub fn rot_y(theta: f64) -> Mat3 {
    let (s, c) = theta.sin_cos();
    Mat3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

/// Frame rotation of `theta` radians about the Z axis.
pub fn rot_z(theta: f64) -> Mat3 {
    let (s, c) = theta.sin_cos();
    Mat3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

/// Rotation vector taking `e_a_b` to `e_a_c`, expressed in frame `a`.
///
/// With E_a_c = E_b_c·E_a_b, this is E_b_a·rotation_velocity(E_b_c).
pub fn rotation_error(e_a_b: &Mat3, e_a_c: &Mat3) -> Vec3 {
    rotation_error_prec(e_a_b, e_a_c, DEFAULT_PREC)
}

/// [`rotation_error`] with an explicit identity tolerance.
pub fn rotation_error_prec(e_a_b: &Mat3, e_a_c: &Mat3, prec: f64) -> Vec3 {
    let e_b_c = e_a_c * e_a_b.transpose();
    e_a_b.transpose() * rotation_velocity_prec(&e_b_c, prec)
}

/// Rotation vector of `e_a_b` in frame `a`: integrating it for one second
/// yields `e_a_b` (matrix logarithm).
pub fn rotation_velocity(e_a_b: &Mat3) -> Vec3 {
    rotation_velocity_prec(e_a_b, DEFAULT_PREC)
}

/// [`rotation_velocity`] returning exactly zero when every entry of `e_a_b`
/// is within `prec` of the identity.
pub fn rotation_velocity_prec(e_a_b: &Mat3, prec: f64) -> Vec3 {
    if (e_a_b - Mat3::identity()).amax() <= prec {
        return Vec3::zeros();
    }
    log_so3(e_a_b)
}

/// SO(3) logarithm of a passive rotation, stable at 0 and π.
fn log_so3(e: &Mat3) -> Vec3 {
    // ε^(1/4)
    const NEAR_PI: f64 = 1.220_703_125e-4;

    let trace = e.trace();
    let theta = ((trace - 1.0) * 0.5).clamp(-1.0, 1.0).acos();
    let w = Vec3::new(
        e[(1, 2)] - e[(2, 1)],
        e[(2, 0)] - e[(0, 2)],
        e[(0, 1)] - e[(1, 0)],
    );

    if 1.0 + trace >= NEAR_PI {
        return w * (sinc_inv(theta) * 0.5);
    }

    // Near π the skew part vanishes: recover |n_i| from the diagonal.
    let s = (e.diagonal() * 2.0 + Vec3::repeat(1.0 - trace)) / (3.0 - trace);
    let mut tn = s.map(|v| theta * v.max(0.0).sqrt());

    if theta > PI - 1e-7 {
        // Sign ambiguity: first non-zero component positive, the others
        // follow from the symmetric off-diagonal terms.
        if tn.x > 0.0 {
            if e[(0, 1)] + e[(1, 0)] < 0.0 {
                tn.y = -tn.y;
            }
            if e[(0, 2)] + e[(2, 0)] < 0.0 {
                tn.z = -tn.z;
            }
        } else if tn.y > 0.0 && e[(1, 2)] + e[(2, 1)] < 0.0 {
            tn.z = -tn.z;
        }
        return tn;
    }

    Vec3::new(
        if w.x >= 0.0 { tn.x } else { -tn.x },
        if w.y >= 0.0 { tn.y } else { -tn.y },
        if w.z >= 0.0 { tn.z } else { -tn.z },
    )
}
