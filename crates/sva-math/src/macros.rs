// Component-wise arithmetic shared by the two-part 6D value types.

/// Addition and scalar scaling for a struct made of two `Vec3` fields.
macro_rules! impl_pair_scalar_ops {
    ($ty:ident, $a:ident, $b:ident) => {
        impl std::ops::Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $ty {
                    $a: self.$a + rhs.$a,
                    $b: self.$b + rhs.$b,
                }
            }
        }

        impl std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $ty) {
                self.$a += rhs.$a;
                self.$b += rhs.$b;
            }
        }

        impl std::ops::Mul<f64> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: f64) -> $ty {
                $ty {
                    $a: self.$a * rhs,
                    $b: self.$b * rhs,
                }
            }
        }

        impl std::ops::Mul<$ty> for f64 {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl std::ops::MulAssign<f64> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: f64) {
                self.$a *= rhs;
                self.$b *= rhs;
            }
        }

        impl std::ops::Div<f64> for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: f64) -> $ty {
                $ty {
                    $a: self.$a / rhs,
                    $b: self.$b / rhs,
                }
            }
        }

        impl std::ops::DivAssign<f64> for $ty {
            #[inline]
            fn div_assign(&mut self, rhs: f64) {
                self.$a /= rhs;
                self.$b /= rhs;
            }
        }
    };
}

/// Subtraction and negation on top of [`impl_pair_scalar_ops`].
macro_rules! impl_pair_signed_ops {
    ($ty:ident, $a:ident, $b:ident) => {
        impl_pair_scalar_ops!($ty, $a, $b);

        impl std::ops::Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $ty {
                    $a: self.$a - rhs.$a,
                    $b: self.$b - rhs.$b,
                }
            }
        }

        impl std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $ty) {
                self.$a -= rhs.$a;
                self.$b -= rhs.$b;
            }
        }

        impl std::ops::Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> $ty {
                $ty {
                    $a: -self.$a,
                    $b: -self.$b,
                }
            }
        }
    };
}
