//! First-order dual numbers for forward-mode differentiation.
//!
//! A [`Dual`] pairs a value with its derivative with respect to a single
//! independent variable. Arithmetic on duals applies the sum, product and
//! quotient rules, and the elementary functions apply the chain rule, so the
//! derivative of a composed expression falls out of evaluating it.
//!
//! ```
//! use diffy::Dual;
//!
//! // f(x) = x * x + 3x at x = 2
//! let x = Dual::variable(2.0_f64);
//! let f = x * x + 3.0 * x;
//! assert_eq!(f.value(), 10.0);
//! assert_eq!(f.derivative(), 7.0);
//! ```

use std::fmt::{self, Display};

use num_traits::{AsPrimitive, Float, NumCast, ToPrimitive};

use crate::Numeric;

/// Forward-mode dual number: a value paired with its derivative.
///
/// `Dual::new(v, d)` represents `v + d·ε` where `ε² = 0`. No operation guards
/// against numeric degeneracies: dividing by a zero-valued dual or evaluating
/// `tan` at a pole yields whatever `T` natively yields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<T: Numeric> {
    pub(crate) value: T,
    pub(crate) derivative: T,
}

impl<T: Numeric> Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.value, p, self.derivative),
            None => write!(f, "({}, {})", self.value, self.derivative),
        }
    }
}

impl<T: Numeric> From<T> for Dual<T> {
    #[inline]
    fn from(value: T) -> Self {
        Dual::constant(value)
    }
}

impl<T: Numeric> Dual<T> {
    /// Create a dual number at an arbitrary point of an expression.
    #[inline]
    pub fn new(value: T, derivative: T) -> Self {
        Dual { value, derivative }
    }

    /// Create a constant (zero derivative).
    #[inline]
    pub fn constant(value: T) -> Self {
        Dual {
            value,
            derivative: T::zero(),
        }
    }

    /// Create the differentiation variable (unit derivative).
    #[inline]
    pub fn variable(value: T) -> Self {
        Dual {
            value,
            derivative: T::one(),
        }
    }

    /// Primal value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Derivative with respect to the seeded variable.
    #[inline]
    pub fn derivative(&self) -> T {
        self.derivative
    }

    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.value, self.derivative)
    }

    /// Unary plus. Returns an equal copy.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    // ── Scalar-type conversion ──

    /// Convert both components to `U` with `as` semantics (truncating,
    /// saturating or widening exactly as a primitive cast would).
    #[inline]
    pub fn cast<U>(self) -> Dual<U>
    where
        U: Numeric,
        T: AsPrimitive<U>,
    {
        Dual {
            value: self.value.as_(),
            derivative: self.derivative.as_(),
        }
    }

    /// Build a `Dual<T>` from a dual over another scalar type.
    #[inline]
    pub fn from_dual<U>(other: Dual<U>) -> Self
    where
        U: Numeric + AsPrimitive<T>,
    {
        other.cast()
    }

    /// Checked conversion: fails when either component is not representable
    /// in `U`.
    ///
    /// ```
    /// use diffy::Dual;
    ///
    /// assert!(Dual::new(300_i32, 1).try_cast::<u8>().is_err());
    /// assert_eq!(Dual::new(3.0_f64, -1.0).try_cast::<i8>(), Ok(Dual::new(3, -1)));
    /// ```
    pub fn try_cast<U>(self) -> Result<Dual<U>, CastError>
    where
        U: Numeric + NumCast,
        T: ToPrimitive,
    {
        let target = std::any::type_name::<U>();
        let value = <U as NumCast>::from(self.value).ok_or(CastError::Value { target })?;
        let derivative =
            <U as NumCast>::from(self.derivative).ok_or(CastError::Derivative { target })?;
        Ok(Dual { value, derivative })
    }
}

/// Errors from [`Dual::try_cast`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastError {
    /// The value component does not fit the target scalar type.
    Value {
        /// Name of the target scalar type.
        target: &'static str,
    },
    /// The derivative component does not fit the target scalar type.
    Derivative {
        /// Name of the target scalar type.
        target: &'static str,
    },
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastError::Value { target } => {
                write!(f, "dual value is not representable as {}", target)
            }
            CastError::Derivative { target } => {
                write!(f, "dual derivative is not representable as {}", target)
            }
        }
    }
}

impl std::error::Error for CastError {}

impl<T: Numeric + Float> Dual<T> {
    /// Apply the chain rule: given `f(self.value)` and `f'(self.value)`,
    /// produce the dual result.
    #[inline]
    fn chain(self, f_val: T, f_deriv: T) -> Self {
        Dual {
            value: f_val,
            derivative: self.derivative * f_deriv,
        }
    }

    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.value.sin(), self.value.cos())
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.value.cos(), -self.value.sin())
    }

    #[inline]
    pub fn tan(self) -> Self {
        let c = self.value.cos();
        Dual {
            value: self.value.tan(),
            derivative: self.derivative / (c * c),
        }
    }

    /// Cotangent, evaluated as `1 / tan(x)`.
    #[inline]
    pub fn cot(self) -> Self {
        let s = self.value.sin();
        Dual {
            value: T::one() / self.value.tan(),
            derivative: -self.derivative / (s * s),
        }
    }

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.value.exp();
        self.chain(e, e)
    }
}
