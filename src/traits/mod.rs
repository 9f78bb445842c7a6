pub mod num_traits_impls;
pub mod std_ops;

#[cfg(feature = "approx")]
pub mod approx_impls;
