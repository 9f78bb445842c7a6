pub mod api;
pub mod dual;
pub mod math;
pub mod numeric;
mod traits;

pub use api::{derivative, tangent};
pub use dual::{CastError, Dual};
pub use math::{cos, cot, exp, sin, tan};
pub use numeric::Numeric;

/// Type alias for dual numbers over `f64`.
pub type Dual64 = Dual<f64>;
/// Type alias for dual numbers over `f32`.
pub type Dual32 = Dual<f32>;
