//! Per-axis spatial gains.
//!
//! An [`ImpedanceVec`] maps motion to force and an [`AdmittanceVec`] maps
//! force to motion, each as an element-wise (diagonal) product. Both are
//! typically used as stiffness/damping gains in task-space controllers.

use crate::{ForceVec, MotionVec, Vec3, Vec6, concat, head, tail};
use std::fmt;
use std::ops::Mul;

macro_rules! gain_type {
    ($(#[$doc:meta])* $ty:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $ty {
            angular: Vec3,
            linear: Vec3,
        }

        impl $ty {
            #[inline]
            pub fn new(angular: Vec3, linear: Vec3) -> Self {
                Self { angular, linear }
            }

            /// Same gain on every angular axis and on every linear axis.
            #[inline]
            pub fn homogeneous(angular: f64, linear: f64) -> Self {
                Self::new(Vec3::repeat(angular), Vec3::repeat(linear))
            }

            /// From a 6D vector [angular; linear].
            #[inline]
            pub fn from_vector(v: &Vec6) -> Self {
                Self::new(head(v), tail(v))
            }

            #[inline]
            pub fn zero() -> Self {
                Self::new(Vec3::zeros(), Vec3::zeros())
            }

            #[inline]
            pub fn angular(&self) -> Vec3 {
                self.angular
            }

            #[inline]
            pub fn linear(&self) -> Vec3 {
                self.linear
            }

            #[inline]
            pub fn vector(&self) -> Vec6 {
                concat(&self.angular, &self.linear)
            }
        }

        impl_pair_scalar_ops!($ty, angular, linear);

        impl Default for $ty {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.vector().transpose())
            }
        }
    };
}

gain_type!(
    /// Diagonal motion-to-force gain.
    ImpedanceVec
);

gain_type!(
    /// Diagonal force-to-motion gain.
    AdmittanceVec
);

impl Mul<MotionVec> for ImpedanceVec {
    type Output = ForceVec;
    fn mul(self, mv: MotionVec) -> ForceVec {
        ForceVec::new(
            self.angular.component_mul(&mv.angular()),
            self.linear.component_mul(&mv.linear()),
        )
    }
}

impl Mul<ImpedanceVec> for MotionVec {
    type Output = ForceVec;
    fn mul(self, gain: ImpedanceVec) -> ForceVec {
        gain * self
    }
}

impl Mul<ForceVec> for AdmittanceVec {
    type Output = MotionVec;
    fn mul(self, fv: ForceVec) -> MotionVec {
        MotionVec::new(
            self.angular.component_mul(&fv.couple()),
            self.linear.component_mul(&fv.force()),
        )
    }
}

impl Mul<AdmittanceVec> for ForceVec {
    type Output = MotionVec;
    fn mul(self, gain: AdmittanceVec) -> MotionVec {
        gain * self
    }
}
