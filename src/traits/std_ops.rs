use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::AsPrimitive;

use crate::dual::Dual;
use crate::numeric::Numeric;

// ──────────────────────────────────────────────
//  Dual<T> ⊗ Dual<U>
// ──────────────────────────────────────────────
//
// The right operand may carry any scalar type that casts into `T`. It is
// converted once with `as` semantics, then the same-type rule applies, so
// `U = T` goes through the identical code path.

impl<T, U> Add<Dual<U>> for Dual<T>
where
    T: Numeric,
    U: Numeric + AsPrimitive<T>,
{
    type Output = Dual<T>;
    #[inline]
    fn add(self, rhs: Dual<U>) -> Dual<T> {
        let rhs: Dual<T> = rhs.cast();
        Dual {
            value: self.value + rhs.value,
            derivative: self.derivative + rhs.derivative,
        }
    }
}

impl<T, U> Sub<Dual<U>> for Dual<T>
where
    T: Numeric,
    U: Numeric + AsPrimitive<T>,
{
    type Output = Dual<T>;
    #[inline]
    fn sub(self, rhs: Dual<U>) -> Dual<T> {
        let rhs: Dual<T> = rhs.cast();
        Dual {
            value: self.value - rhs.value,
            derivative: self.derivative - rhs.derivative,
        }
    }
}

impl<T, U> Mul<Dual<U>> for Dual<T>
where
    T: Numeric,
    U: Numeric + AsPrimitive<T>,
{
    type Output = Dual<T>;
    #[inline]
    fn mul(self, rhs: Dual<U>) -> Dual<T> {
        let rhs: Dual<T> = rhs.cast();
        Dual {
            value: self.value * rhs.value,
            derivative: self.derivative * rhs.value + self.value * rhs.derivative,
        }
    }
}

impl<T, U> Div<Dual<U>> for Dual<T>
where
    T: Numeric,
    U: Numeric + AsPrimitive<T>,
{
    type Output = Dual<T>;
    #[inline]
    fn div(self, rhs: Dual<U>) -> Dual<T> {
        let rhs: Dual<T> = rhs.cast();
        Dual {
            value: self.value / rhs.value,
            derivative: (self.derivative * rhs.value - self.value * rhs.derivative)
                / (rhs.value * rhs.value),
        }
    }
}

impl<T: Numeric + Neg<Output = T>> Neg for Dual<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Dual {
            value: -self.value,
            derivative: -self.derivative,
        }
    }
}

impl<T, U> AddAssign<Dual<U>> for Dual<T>
where
    T: Numeric,
    U: Numeric + AsPrimitive<T>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Dual<U>) {
        *self = *self + rhs;
    }
}

impl<T, U> SubAssign<Dual<U>> for Dual<T>
where
    T: Numeric,
    U: Numeric + AsPrimitive<T>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Dual<U>) {
        *self = *self - rhs;
    }
}

impl<T, U> MulAssign<Dual<U>> for Dual<T>
where
    T: Numeric,
    U: Numeric + AsPrimitive<T>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Dual<U>) {
        *self = *self * rhs;
    }
}

impl<T, U> DivAssign<Dual<U>> for Dual<T>
where
    T: Numeric,
    U: Numeric + AsPrimitive<T>,
{
    #[inline]
    fn div_assign(&mut self, rhs: Dual<U>) {
        *self = *self / rhs;
    }
}

impl<T: Numeric + AsPrimitive<T>> Sum for Dual<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::constant(T::zero()), |acc, d| acc + d)
    }
}

impl<T: Numeric + AsPrimitive<T>> Product for Dual<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::constant(T::one()), |acc, d| acc * d)
    }
}

// ──────────────────────────────────────────────
//  Dual<T> with a bare scalar T
// ──────────────────────────────────────────────
//
// A scalar acts as a constant; these are the constant-fused forms of the
// dual-dual rules. Generated per primitive because `impl<T> Add<Dual<T>> for T`
// is not expressible for foreign `T`.

macro_rules! impl_dual_scalar_ops {
    ($($f:ty),*) => {$(
        impl Add<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: $f) -> Dual<$f> {
                Dual {
                    value: self.value + rhs,
                    derivative: self.derivative,
                }
            }
        }

        impl Add<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    value: rhs.value + self,
                    derivative: rhs.derivative,
                }
            }
        }

        impl Sub<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> Dual<$f> {
                Dual {
                    value: self.value - rhs,
                    derivative: self.derivative,
                }
            }
        }

        impl Mul<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> Dual<$f> {
                Dual {
                    value: self.value * rhs,
                    derivative: self.derivative * rhs,
                }
            }
        }

        impl Mul<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    value: rhs.value * self,
                    derivative: rhs.derivative * self,
                }
            }
        }

        impl Div<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn div(self, rhs: $f) -> Dual<$f> {
                Dual {
                    value: self.value / rhs,
                    derivative: self.derivative / rhs,
                }
            }
        }

        impl AddAssign<$f> for Dual<$f> {
            #[inline]
            fn add_assign(&mut self, rhs: $f) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<$f> for Dual<$f> {
            #[inline]
            fn sub_assign(&mut self, rhs: $f) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<$f> for Dual<$f> {
            #[inline]
            fn mul_assign(&mut self, rhs: $f) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<$f> for Dual<$f> {
            #[inline]
            fn div_assign(&mut self, rhs: $f) {
                *self = *self / rhs;
            }
        }
    )*};
}

// Scalar on the left of `-` and `/` negates the derivative, so these exist
// only for signed scalars.
macro_rules! impl_signed_scalar_dual_ops {
    ($($f:ty),*) => {$(
        impl Sub<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    value: self - rhs.value,
                    derivative: -rhs.derivative,
                }
            }
        }

        impl Div<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn div(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    value: self / rhs.value,
                    derivative: -self * rhs.derivative / (rhs.value * rhs.value),
                }
            }
        }
    )*};
}

impl_dual_scalar_ops!(i8, i16, i32, i64, i128, isize);
impl_dual_scalar_ops!(u8, u16, u32, u64, u128, usize);
impl_dual_scalar_ops!(f32, f64);

impl_signed_scalar_dual_ops!(i8, i16, i32, i64, i128, isize);
impl_signed_scalar_dual_ops!(f32, f64);
