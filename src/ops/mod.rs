//! Tensor operations
//!
//! Elementwise arithmetic with broadcasting and the rank-dispatched `dot`
//! contraction. The operator methods live on `Tensor` itself; this module
//! also exposes the parametrized [`apply`] routine backing them.

mod binary;
mod matmul;

pub use binary::{apply, BinaryOp};
