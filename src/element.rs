//! Element trait: bounds on a tensor's scalar type

use num_traits::Num;
use std::fmt;

/// Scalar types a [`Tensor`](crate::tensor::Tensor) can hold.
///
/// Requires the four arithmetic operators, equality, and an additive identity
/// (via [`num_traits::Num`]), plus `Copy` and `Default` so buffers can be
/// allocated and filled cheaply. `Send + Sync` lets the identical-shape
/// elementwise path run in parallel.
///
/// Blanket-implemented; `f32`, `f64`, and the integer primitives all qualify.
pub trait Element:
    Num + Copy + Default + Send + Sync + fmt::Debug + fmt::Display + 'static
{
}

impl<T> Element for T where
    T: Num + Copy + Default + Send + Sync + fmt::Debug + fmt::Display + 'static
{
}
