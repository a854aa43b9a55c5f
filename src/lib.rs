//! # tensr
//!
//! **Strided, broadcasting n-dimensional arrays for Rust.**
//!
//! tensr provides a generic [`Tensor<T>`](tensor::Tensor) backed by a flat
//! owned buffer plus row-major shape/stride metadata, NumPy-style
//! right-aligned broadcasting for elementwise arithmetic, and a
//! rank-dispatched [`dot`](tensor::Tensor::dot) contraction for vectors and
//! matrices. A small [`table`] module loads delimited text files into typed
//! columns for feeding tensors from data on disk.
//!
//! ## Design
//!
//! - **Generic element type**: operations are monomorphized over
//!   [`Element`](element::Element); there is no dynamic dispatch on the hot
//!   path.
//! - **No views**: every operation allocates a fresh output tensor. Shape and
//!   strides are immutable after construction, so no aliasing between an
//!   operation's inputs and its output can ever occur.
//! - **Two elementwise paths**: identical shapes take a linear zip over the
//!   flat buffers; differing shapes go through a generalized strided
//!   broadcast loop.
//!
//! ## Quick start
//!
//! ```
//! use tensr::prelude::*;
//!
//! let a = Tensor::from_vec(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
//! let b = Tensor::from_vec(&[3], vec![10.0, 20.0, 30.0])?;
//!
//! let c = a.add(&b)?; // broadcasts b over each row of a
//! assert_eq!(c.shape(), &[2, 3]);
//! assert_eq!(c.data(), &[11.0, 22.0, 33.0, 14.0, 25.0, 36.0]);
//!
//! let w = Tensor::from_vec(&[3, 2], vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0])?;
//! let m = a.dot(&w)?;
//! assert_eq!(m.shape(), &[2, 2]);
//! # Ok::<(), tensr::error::Error>(())
//! ```
//!
//! ## Feature flags
//!
//! - `rayon` (default): multi-threaded identical-shape elementwise path

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod ops;
pub mod table;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::ops::BinaryOp;
    pub use crate::table::{ColumnType, Table};
    pub use crate::tensor::{Layout, Tensor};
}
