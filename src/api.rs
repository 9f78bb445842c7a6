use crate::dual::Dual;
use crate::numeric::Numeric;

/// Evaluate `f` at `x` and its derivative there, in one forward pass.
///
/// ```
/// let (y, dy) = diffy::derivative(|x| x * x * x - 2.0 * x, 2.0_f64);
/// assert_eq!(y, 4.0);
/// assert_eq!(dy, 10.0);
/// ```
pub fn derivative<T: Numeric>(f: impl FnOnce(Dual<T>) -> Dual<T>, x: T) -> (T, T) {
    f(Dual::variable(x)).into_parts()
}

/// Directional derivative: `(f(x), f'(x) · dx)`.
///
/// Seeds the input tangent with `dx` instead of one, which scales the
/// propagated derivative by `dx`.
pub fn tangent<T: Numeric>(f: impl FnOnce(Dual<T>) -> Dual<T>, x: T, dx: T) -> (T, T) {
    f(Dual::new(x, dx)).into_parts()
}
