//! Numerically stabilized scalar functions and SO(3) Jacobians.
//!
//! The Taylor fallbacks switch order at bounds scaled on machine precision so
//! that the truncated series is exact to the last bit wherever it is used.

use crate::{Mat3, Vec3, skew};

/// f64::EPSILON = 2⁻⁵².
const TAYLOR_0_BOUND: f64 = f64::EPSILON;
/// sqrt(ε) = 2⁻²⁶.
const TAYLOR_2_BOUND: f64 = 1.490_116_119_384_765_6e-8;
/// ε^(1/4) = 2⁻¹³.
const TAYLOR_N_BOUND: f64 = 1.220_703_125e-4;

/// Cardinal sine sin(x)/x, equal to 1 at x = 0.
pub fn sinc(x: f64) -> f64 {
    let ax = x.abs();
    if ax >= TAYLOR_N_BOUND {
        return x.sin() / x;
    }
    let mut result = 1.0;
    if ax >= TAYLOR_0_BOUND {
        let x2 = x * x;
        result -= x2 / 6.0;
        if ax >= TAYLOR_2_BOUND {
            result += x2 * x2 / 120.0;
        }
    }
    result
}

/// x/sin(x), equal to exactly 1 at x = 0.
///
/// Near zero the 4th-order series 1 + x²/6 + 7x⁴/360 is used; its x⁶ term
/// is below precision for |x| < ε^(1/4). Elsewhere this is `x / x.sin()`.
pub fn sinc_inv(x: f64) -> f64 {
    let ax = x.abs();
    if ax >= TAYLOR_N_BOUND {
        return x / x.sin();
    }
    let mut result = 1.0;
    if ax >= TAYLOR_0_BOUND {
        let x2 = x * x;
        result += x2 / 6.0;
        if ax >= TAYLOR_2_BOUND {
            result += 7.0 * (x2 * x2) / 360.0;
        }
    }
    result
}

/// 1/x² − (1 + cos x)/(2x sin x).
///
/// Series at 0: (1/12)(1 + x²/60 + x⁴/2520 + x⁶/100800 + ...).
pub(crate) fn so3_jac_f2(x: f64) -> f64 {
    let ulp = f64::EPSILON;
    let taylor_2_bound = (60.0 * ulp).sqrt();
    let taylor_4_bound = (2520.0 * ulp).powf(0.25);
    let taylor_6_bound = (100_800.0 * ulp).powf(1.0 / 6.0);
    let taylor_8_bound = (3_991_680.0 * ulp).powf(0.125);

    let ax = x.abs();
    if ax >= taylor_8_bound {
        return 1.0 / (x * x) - (1.0 + x.cos()) / (2.0 * x * x.sin());
    }
    let mut result = 1.0;
    if ax >= taylor_2_bound {
        let x2 = x * x;
        result += x2 / 60.0;
        if ax >= taylor_4_bound {
            let x4 = x2 * x2;
            result += x4 / 2520.0;
            if ax >= taylor_6_bound {
                result += x2 * x4 / 100_800.0;
            }
        }
    }
    result / 12.0
}

/// Derivative of [`so3_jac_f2`]: (x + sin x)/(2x²(1 − cos x)) − 2/x³.
///
/// Series at 0: (x/360)(1 + x²/21 + x⁴/560 + x⁶/16632 + 691x⁸/363242880) + x¹¹/17297280.
/// The analytic form loses about six digits near the x⁸ bound, so the series
/// is carried further than for f2 itself.
pub(crate) fn so3_jac_f2_dot(x: f64) -> f64 {
    let ulp = f64::EPSILON;
    let taylor_2_bound = (21.0 * ulp).sqrt();
    let taylor_4_bound = (560.0 * ulp).powf(0.25);
    let taylor_6_bound = (16_632.0 * ulp).powf(1.0 / 6.0);
    let taylor_8_bound = (363_242_880.0 * ulp / 691.0).powf(0.125);
    let taylor_12_bound = (2_117_187_072_000.0 * ulp / 3617.0).powf(1.0 / 12.0);

    let ax = x.abs();
    if ax >= taylor_12_bound {
        let x2 = x * x;
        return (x + x.sin()) / (2.0 * x2 * (1.0 - x.cos())) - 2.0 / (x2 * x);
    }
    let mut result = 1.0;
    if ax >= taylor_2_bound {
        let x2 = x * x;
        result += x2 / 21.0;
        if ax >= taylor_4_bound {
            let x4 = x2 * x2;
            result += x4 / 560.0;
            if ax >= taylor_6_bound {
                result += x2 * x4 / 16_632.0;
                if ax >= taylor_8_bound {
                    let x8 = x4 * x4;
                    result += 691.0 * x8 / 363_242_880.0 + x2 * x8 / 17_297_280.0;
                }
            }
        }
    }
    x * result / 360.0
}

/// Symmetric part f2·[u]×² of the inverse right Jacobian, written out.
fn jac_c2(u: &Vec3, f2: f64) -> Mat3 {
    let xx = f2 * u.x * u.x;
    let xy = f2 * u.x * u.y;
    let xz = f2 * u.x * u.z;
    let yy = f2 * u.y * u.y;
    let yz = f2 * u.y * u.z;
    let zz = f2 * u.z * u.z;
    #[rustfmt::skip]
    let c2 = Mat3::new(
        -yy - zz, xy,       xz,
        xy,       -xx - zz, yz,
        xz,       yz,       -xx - yy,
    );
    c2
}

/// Inverse right Jacobian of SO(3) at `u` ∈ so(3):
/// Jr⁻¹(u) = 1 + [u/2]× + f2(|u|)·[u]×².
///
/// `rotation_error(X, Y)` has derivative Jr⁻¹ with respect to a right
/// perturbation of X, and −Jr⁻ᵀ with respect to Y.
pub fn so3_right_jac_inv(u: &Vec3) -> Mat3 {
    let f2 = so3_jac_f2(u.norm());
    Mat3::identity() + skew(&(u / 2.0)) + jac_c2(u, f2)
}

/// Time derivative of [`so3_right_jac_inv`] along `du`.
pub fn so3_right_jac_inv_dot(u: &Vec3, du: &Vec3) -> Mat3 {
    let nu = u.norm();
    let f2 = so3_jac_f2(nu);
    // d|u|/dt is undefined at 0 but f2' vanishes there.
    let df2 = if nu > 0.0 {
        (u.dot(du) / nu) * so3_jac_f2_dot(nu)
    } else {
        0.0
    };

    let dxx = 2.0 * f2 * du.x * u.x;
    let dyy = 2.0 * f2 * du.y * u.y;
    let dzz = 2.0 * f2 * du.z * u.z;
    let c12 = f2 * (du.y * u.x + du.x * u.y);
    let c13 = f2 * (du.z * u.x + du.x * u.z);
    let c23 = f2 * (du.z * u.y + du.y * u.z);
    #[rustfmt::skip]
    let c3 = Mat3::new(
        -dyy - dzz, c12,        c13,
        c12,        -dxx - dzz, c23,
        c13,        c23,        -dxx - dyy,
    );

    skew(&(du / 2.0)) + jac_c2(u, df2) + c3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sinc_inv_at_zero() {
        assert_eq!(sinc_inv(0.0), 1.0);
        assert!(!sinc_inv(0.0).is_nan());
        assert_eq!(sinc(0.0), 1.0);
    }

    #[test]
    fn test_sinc_inv_matches_direct() {
        let n = 333;
        for i in 0..n {
            let t = -1.0 + 2.0 * (i as f64) / (n as f64);
            if t.abs() < TAYLOR_N_BOUND {
                continue;
            }
            assert_eq!(sinc_inv(t), t / t.sin(), "mismatch at {t}");
            assert_eq!(sinc(t), t.sin() / t, "mismatch at {t}");
        }
    }

    #[test]
    fn test_sinc_inv_series_is_accurate() {
        for &x in &[1e-17, 1e-10, 1e-6, 5e-5, 1.2e-4] {
            assert_relative_eq!(sinc_inv(x), x / x.sin(), max_relative = 1e-15);
            assert_relative_eq!(sinc_inv(-x), sinc_inv(x), max_relative = 1e-15);
            assert_relative_eq!(sinc(x), x.sin() / x, max_relative = 1e-15);
        }
    }

    #[test]
    fn test_bounds_are_precision_powers() {
        assert_eq!(TAYLOR_2_BOUND, f64::EPSILON.sqrt());
        assert_eq!(TAYLOR_N_BOUND, f64::EPSILON.sqrt().sqrt());
    }

    #[test]
    fn test_jac_f2_series_vs_analytic() {
        // Above the switch point both forms agree to the analytic precision.
        for &x in &[0.05, 0.1, 0.5, 1.0, 2.0] {
            let analytic = 1.0 / (x * x) - (1.0 + f64::cos(x)) / (2.0 * x * f64::sin(x));
            assert_relative_eq!(so3_jac_f2(x), analytic, max_relative = 1e-9);
        }
        assert_eq!(so3_jac_f2(0.0), 1.0 / 12.0);
        assert_relative_eq!(so3_jac_f2(1e-4), 1.0 / 12.0 * (1.0 + 1e-8 / 60.0), max_relative = 1e-14);
    }

    #[test]
    fn test_jac_f2_dot_is_derivative() {
        let h = 1e-6;
        for &x in &[1e-3, 0.01, 0.3, 1.0, 2.5] {
            let fd = (so3_jac_f2(x + h) - so3_jac_f2(x - h)) / (2.0 * h);
            assert_relative_eq!(so3_jac_f2_dot(x), fd, epsilon = 1e-7);
        }
        assert_eq!(so3_jac_f2_dot(0.0), 0.0);
    }

    #[test]
    fn test_right_jac_inv_at_zero_is_identity() {
        assert_relative_eq!(so3_right_jac_inv(&Vec3::zeros()), Mat3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_right_jac_inv_dot_matches_finite_difference() {
        let cases = [
            (Vec3::new(0.3, -0.2, 0.7), Vec3::new(1.0, 0.5, -0.25)),
            (Vec3::new(-0.9, 0.1, 0.4), Vec3::new(-0.3, 0.8, 0.6)),
            (Vec3::new(0.01, 0.02, -0.01), Vec3::new(0.5, -0.5, 0.1)),
        ];
        let dt = 1e-7;
        for (u0, du) in cases {
            let m0 = so3_right_jac_inv(&u0);
            let mt = so3_right_jac_inv(&(u0 + du * dt));
            let dm = (mt - m0) / dt;
            assert_relative_eq!(so3_right_jac_inv_dot(&u0, &du), dm, epsilon = 1e-5);
        }
    }
}
