//! Tensor types
//!
//! This module provides the core `Tensor` type, an n-dimensional array with
//! an exclusively owned buffer, plus the `Layout` describing its row-major
//! shape/stride structure.

mod core;
mod layout;

pub use self::core::Tensor;
pub use layout::{broadcast_shapes, Layout, Shape, Strides};
