use num_traits::{AsPrimitive, One, Zero};

use crate::dual::Dual;
use crate::numeric::Numeric;

impl<T: Numeric + AsPrimitive<T>> Zero for Dual<T> {
    #[inline]
    fn zero() -> Self {
        Dual::constant(T::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.value.is_zero() && self.derivative.is_zero()
    }
}

impl<T: Numeric + AsPrimitive<T>> One for Dual<T> {
    #[inline]
    fn one() -> Self {
        Dual::constant(T::one())
    }
}
