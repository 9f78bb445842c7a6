use std::fmt::{Debug, Display};

use num_traits::Num;

/// Marker trait for the primitive scalars a [`Dual`](crate::Dual) can carry.
///
/// Bundles the arithmetic, equality and formatting bounds the dual-number
/// operators rely on. Implemented for every primitive integer and float.
/// Operations that negate a component additionally require
/// `Neg<Output = Self>`, and the elementary functions require
/// [`num_traits::Float`].
pub trait Numeric: Num + Copy + Default + Debug + Display + Send + Sync + 'static {}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(impl Numeric for $t {})*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize);
impl_numeric!(u8, u16, u32, u64, u128, usize);
impl_numeric!(f32, f64);
