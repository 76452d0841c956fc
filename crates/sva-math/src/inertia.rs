//! Rigid-body and articulated-body spatial inertia.
//!
//! Both types store their symmetric 3x3 blocks as a lower triangle (upper part
//! exactly zero). Constructors accept either a full symmetric matrix or a
//! lower-triangular one; only the lower triangle is read.

use crate::{
    ForceVec, Mat3, Mat6, Mat6X, MotionVec, Vec3, block6, lower_from_symmetric, map_columns,
    skew, symmetric_from_lower,
};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Spatial rigid-body inertia in compact form: mass, first mass moment
/// h = m·c, and rotational inertia about the frame origin.
///
/// I = | I     [h]× |
///     | [h]×ᵀ  m·1 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RBInertia {
    mass: f64,
    momentum: Vec3,
    lower_inertia: Mat3,
}

impl RBInertia {
    /// `inertia` is the rotational inertia at the body origin (not the CoM).
    /// It must be symmetric; only its lower triangle is read.
    pub fn new(mass: f64, momentum: Vec3, inertia: Mat3) -> Self {
        Self {
            mass,
            momentum,
            lower_inertia: lower_from_symmetric(&inertia),
        }
    }

    /// Zero inertia.
    pub fn zero() -> Self {
        Self::new(0.0, Vec3::zeros(), Mat3::zeros())
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// First mass moment m·c.
    pub fn momentum(&self) -> Vec3 {
        self.momentum
    }

    /// Full symmetric rotational inertia at the origin.
    pub fn inertia(&self) -> Mat3 {
        symmetric_from_lower(&self.lower_inertia)
    }

    /// Rotational inertia with a zero strict upper part.
    pub fn lower_triangular_inertia(&self) -> Mat3 {
        self.lower_inertia
    }

    /// Non-compact 6x6 spatial inertia matrix.
    pub fn matrix(&self) -> Mat6 {
        let hx = skew(&self.momentum);
        block6(
            &self.inertia(),
            &hx,
            &hx.transpose(),
            &(Mat3::identity() * self.mass),
        )
    }

    /// Momentum produced by a motion: I·v.
    pub fn apply(&self, mv: &MotionVec) -> ForceVec {
        let w = mv.angular();
        let v = mv.linear();
        ForceVec::new(
            self.inertia() * w + self.momentum.cross(&v),
            v * self.mass - self.momentum.cross(&w),
        )
    }

    /// [`apply`](Self::apply) on every column of a motion batch.
    pub fn apply_batch(&self, motions: &Mat6X) -> Mat6X {
        map_columns(motions, |c| self.apply(&MotionVec::from_vector(c)).vector())
    }

    /// Promote to an articulated inertia: M = m·1, H = [h]×, I unchanged.
    pub fn to_articulated(&self) -> ABInertia {
        ABInertia::new(
            &(Mat3::identity() * self.mass),
            &skew(&self.momentum),
            &self.lower_inertia,
        )
    }
}

impl Add for RBInertia {
    type Output = RBInertia;
    fn add(self, rhs: RBInertia) -> RBInertia {
        RBInertia {
            mass: self.mass + rhs.mass,
            momentum: self.momentum + rhs.momentum,
            lower_inertia: self.lower_inertia + rhs.lower_inertia,
        }
    }
}

impl Sub for RBInertia {
    type Output = RBInertia;
    fn sub(self, rhs: RBInertia) -> RBInertia {
        RBInertia {
            mass: self.mass - rhs.mass,
            momentum: self.momentum - rhs.momentum,
            lower_inertia: self.lower_inertia - rhs.lower_inertia,
        }
    }
}

impl Neg for RBInertia {
    type Output = RBInertia;
    fn neg(self) -> RBInertia {
        RBInertia {
            mass: -self.mass,
            momentum: -self.momentum,
            lower_inertia: -self.lower_inertia,
        }
    }
}

impl AddAssign for RBInertia {
    fn add_assign(&mut self, rhs: RBInertia) {
        *self = *self + rhs;
    }
}

impl SubAssign for RBInertia {
    fn sub_assign(&mut self, rhs: RBInertia) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for RBInertia {
    type Output = RBInertia;
    fn mul(self, rhs: f64) -> RBInertia {
        RBInertia {
            mass: self.mass * rhs,
            momentum: self.momentum * rhs,
            lower_inertia: self.lower_inertia * rhs,
        }
    }
}

impl Mul<RBInertia> for f64 {
    type Output = RBInertia;
    fn mul(self, rhs: RBInertia) -> RBInertia {
        rhs * self
    }
}

impl Mul<MotionVec> for RBInertia {
    type Output = ForceVec;
    fn mul(self, rhs: MotionVec) -> ForceVec {
        self.apply(&rhs)
    }
}

impl fmt::Display for RBInertia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix())
    }
}

/// Spatial articulated-body inertia in compact form.
///
/// I = | I   H |
///     | Hᵀ  M |
///
/// `M` (mass matrix) and `I` (rotational inertia) are symmetric; `H` is a
/// general 3x3 coupling block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ABInertia {
    lower_mass: Mat3,
    g_inertia: Mat3,
    lower_inertia: Mat3,
}

impl ABInertia {
    /// `mass_matrix` and `inertia` must be symmetric; only their lower
    /// triangles are read. `g_inertia` is stored as given.
    pub fn new(mass_matrix: &Mat3, g_inertia: &Mat3, inertia: &Mat3) -> Self {
        Self {
            lower_mass: lower_from_symmetric(mass_matrix),
            g_inertia: *g_inertia,
            lower_inertia: lower_from_symmetric(inertia),
        }
    }

    /// Zero inertia.
    pub fn zero() -> Self {
        Self::new(&Mat3::zeros(), &Mat3::zeros(), &Mat3::zeros())
    }

    /// Full symmetric mass matrix.
    pub fn mass_matrix(&self) -> Mat3 {
        symmetric_from_lower(&self.lower_mass)
    }

    /// Mass matrix with a zero strict upper part.
    pub fn lower_triangular_mass_matrix(&self) -> Mat3 {
        self.lower_mass
    }

    /// Generalized (coupling) inertia block H.
    pub fn g_inertia(&self) -> Mat3 {
        self.g_inertia
    }

    /// Full symmetric rotational inertia.
    pub fn inertia(&self) -> Mat3 {
        symmetric_from_lower(&self.lower_inertia)
    }

    /// Rotational inertia with a zero strict upper part.
    pub fn lower_triangular_inertia(&self) -> Mat3 {
        self.lower_inertia
    }

    /// Non-compact 6x6 articulated inertia matrix.
    pub fn matrix(&self) -> Mat6 {
        block6(
            &self.inertia(),
            &self.g_inertia,
            &self.g_inertia.transpose(),
            &self.mass_matrix(),
        )
    }

    /// I·v.
    pub fn apply(&self, mv: &MotionVec) -> ForceVec {
        let w = mv.angular();
        let v = mv.linear();
        ForceVec::new(
            self.inertia() * w + self.g_inertia * v,
            self.mass_matrix() * v + self.g_inertia.transpose() * w,
        )
    }

    /// [`apply`](Self::apply) on every column of a motion batch.
    pub fn apply_batch(&self, motions: &Mat6X) -> Mat6X {
        map_columns(motions, |c| self.apply(&MotionVec::from_vector(c)).vector())
    }
}

impl From<RBInertia> for ABInertia {
    fn from(rb: RBInertia) -> Self {
        rb.to_articulated()
    }
}

impl Add for ABInertia {
    type Output = ABInertia;
    fn add(self, rhs: ABInertia) -> ABInertia {
        ABInertia {
            lower_mass: self.lower_mass + rhs.lower_mass,
            g_inertia: self.g_inertia + rhs.g_inertia,
            lower_inertia: self.lower_inertia + rhs.lower_inertia,
        }
    }
}

impl Add<RBInertia> for ABInertia {
    type Output = ABInertia;
    fn add(self, rhs: RBInertia) -> ABInertia {
        self + rhs.to_articulated()
    }
}

impl Sub for ABInertia {
    type Output = ABInertia;
    fn sub(self, rhs: ABInertia) -> ABInertia {
        ABInertia {
            lower_mass: self.lower_mass - rhs.lower_mass,
            g_inertia: self.g_inertia - rhs.g_inertia,
            lower_inertia: self.lower_inertia - rhs.lower_inertia,
        }
    }
}

impl Neg for ABInertia {
    type Output = ABInertia;
    fn neg(self) -> ABInertia {
        ABInertia {
            lower_mass: -self.lower_mass,
            g_inertia: -self.g_inertia,
            lower_inertia: -self.lower_inertia,
        }
    }
}

impl AddAssign for ABInertia {
    fn add_assign(&mut self, rhs: ABInertia) {
        *self = *self + rhs;
    }
}

impl SubAssign for ABInertia {
    fn sub_assign(&mut self, rhs: ABInertia) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for ABInertia {
    type Output = ABInertia;
    fn mul(self, rhs: f64) -> ABInertia {
        ABInertia {
            lower_mass: self.lower_mass * rhs,
            g_inertia: self.g_inertia * rhs,
            lower_inertia: self.lower_inertia * rhs,
        }
    }
}

impl Mul<ABInertia> for f64 {
    type Output = ABInertia;
    fn mul(self, rhs: ABInertia) -> ABInertia {
        rhs * self
    }
}

impl Mul<MotionVec> for ABInertia {
    type Output = ForceVec;
    fn mul(self, rhs: MotionVec) -> ForceVec {
        self.apply(&rhs)
    }
}

impl fmt::Display for ABInertia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix())
    }
}

/// Shift a rotational inertia given at the center of mass to the body
/// origin, then express it in a rotated frame:
/// R (I_c + m[c]×[c]×ᵀ) Rᵀ.
pub fn inertia_to_origin(inertia: &Mat3, mass: f64, com: &Vec3, rotation: &Mat3) -> Mat3 {
    let trans = skew(&(com * mass)) * skew(com).transpose();
    rotation * (inertia + trans) * rotation.transpose()
}
