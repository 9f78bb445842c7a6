//! `approx` trait implementations for `Dual<T>`.
//!
//! Both components must be within tolerance for two duals to compare
//! approximately equal.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::dual::Dual;
use crate::numeric::Numeric;

impl<T> AbsDiffEq for Dual<T>
where
    T: Numeric + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
            && self.derivative.abs_diff_eq(&other.derivative, epsilon)
    }
}

impl<T> RelativeEq for Dual<T>
where
    T: Numeric + RelativeEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
            && self
                .derivative
                .relative_eq(&other.derivative, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Dual<T>
where
    T: Numeric + UlpsEq,
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.value.ulps_eq(&other.value, epsilon, max_ulps)
            && self.derivative.ulps_eq(&other.derivative, epsilon, max_ulps)
    }
}
