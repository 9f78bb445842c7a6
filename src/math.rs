//! Elementary functions lifted to [`Dual`] numbers.
//!
//! Each function returns `f(x.value)` paired with `x.derivative · f'(x.value)`.
//! Poles (`tan` at odd multiples of π/2, `cot` at multiples of π) are not
//! special-cased and produce the infinities or NaNs of the scalar type.
//!
//! ```
//! use diffy::{math, Dual};
//!
//! let y = math::exp(math::sin(Dual::variable(0.0_f64)));
//! assert_eq!(y.value(), 1.0);
//! assert_eq!(y.derivative(), 1.0);
//! ```

use num_traits::Float;

use crate::dual::Dual;
use crate::numeric::Numeric;

/// `sin(x)`, derivative `x' · cos(x)`.
#[inline]
pub fn sin<T: Numeric + Float>(x: Dual<T>) -> Dual<T> {
    x.sin()
}

/// `cos(x)`, derivative `-x' · sin(x)`.
#[inline]
pub fn cos<T: Numeric + Float>(x: Dual<T>) -> Dual<T> {
    x.cos()
}

/// `tan(x)`, derivative `x' / cos²(x)`.
#[inline]
pub fn tan<T: Numeric + Float>(x: Dual<T>) -> Dual<T> {
    x.tan()
}

/// `1 / tan(x)`, derivative `-x' / sin²(x)`.
#[inline]
pub fn cot<T: Numeric + Float>(x: Dual<T>) -> Dual<T> {
    x.cot()
}

/// `exp(x)`, derivative `x' · exp(x)`.
#[inline]
pub fn exp<T: Numeric + Float>(x: Dual<T>) -> Dual<T> {
    x.exp()
}
