//! Elementwise binary operations with broadcasting
//!
//! One parametrized apply routine backs the four arithmetic operators. It
//! takes a fast identical-shape path (plain linear zip over the flat
//! buffers) or a generalized strided broadcast loop when the shapes differ.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::tensor::{broadcast_shapes, Layout, Shape, Strides, Tensor};

/// Minimum element count before the fast path fans out to rayon
#[cfg(feature = "rayon")]
const PAR_THRESHOLD: usize = 4096;

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Subtraction: a - b
    Sub,
    /// Multiplication: a * b
    Mul,
    /// Division: a / b
    Div,
}

impl BinaryOp {
    /// Apply the operation to a pair of elements
    ///
    /// Division by zero and other numeric faults follow `T`'s own semantics;
    /// nothing is trapped at this layer.
    #[inline]
    pub fn eval<T: Element>(self, a: T, b: T) -> T {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        }
    }
}

/// Broadcasting-aware elementwise apply
///
/// Identical shapes run as a linear scan with no index decoding. Differing
/// shapes are resolved per right-aligned broadcasting; incompatible shapes
/// yield [`Error::BroadcastIncompatible`] carrying both originals.
pub fn apply<T: Element>(op: BinaryOp, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    if a.shape() == b.shape() {
        return apply_contiguous(op, a, b);
    }

    let out_shape =
        broadcast_shapes(a.shape(), b.shape()).ok_or_else(|| Error::broadcast(a.shape(), b.shape()))?;
    apply_strided(op, a, b, &out_shape)
}

/// Fast path: identical shapes, index-for-index over the flat buffers
fn apply_contiguous<T: Element>(op: BinaryOp, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    // Consistency check; unreachable given correct construction
    let expected = a.numel();
    if b.numel() != expected {
        return Err(Error::SizeMismatch {
            len: b.numel(),
            expected,
        });
    }
    if !a.shape().is_empty() && a.layout().elem_count() != expected {
        return Err(Error::SizeMismatch {
            len: expected,
            expected: a.layout().elem_count(),
        });
    }

    let data = zip_buffers(op, a.data(), b.data());
    Ok(Tensor::from_parts(data, a.layout().clone()))
}

#[cfg(feature = "rayon")]
fn zip_buffers<T: Element>(op: BinaryOp, a: &[T], b: &[T]) -> Vec<T> {
    use rayon::prelude::*;

    if a.len() >= PAR_THRESHOLD {
        a.par_iter()
            .zip(b.par_iter())
            .map(|(&x, &y)| op.eval(x, y))
            .collect()
    } else {
        a.iter().zip(b.iter()).map(|(&x, &y)| op.eval(x, y)).collect()
    }
}

#[cfg(not(feature = "rayon"))]
fn zip_buffers<T: Element>(op: BinaryOp, a: &[T], b: &[T]) -> Vec<T> {
    a.iter().zip(b.iter()).map(|(&x, &y)| op.eval(x, y)).collect()
}

/// General path: aligned, stride-aware broadcast loop
///
/// Each operand's shape and strides are right-aligned and padded to the
/// output rank (missing dimensions: size 1, stride 0). While iterating, a
/// dimension contributes an operand's real stride only when that operand's
/// aligned size there is not 1; broadcast dimensions contribute zero offset.
/// Flat output indices are decoded into multi-indices through per-dimension
/// suffix-product multipliers.
pub(crate) fn apply_strided<T: Element>(
    op: BinaryOp,
    a: &Tensor<T>,
    b: &Tensor<T>,
    out_shape: &[usize],
) -> Result<Tensor<T>> {
    let layout = Layout::contiguous(out_shape);
    let total = layout.elem_count();

    if total == 0 {
        return Ok(Tensor::from_parts(Vec::new(), layout));
    }
    // A degenerate operand cannot supply values; unreachable via public ctors
    if a.numel() == 0 || b.numel() == 0 {
        return Err(Error::SizeMismatch {
            len: a.numel().min(b.numel()),
            expected: 1,
        });
    }

    let nd = out_shape.len();
    let (a_sizes, a_strides) = align_right(a.shape(), a.strides(), nd);
    let (b_sizes, b_strides) = align_right(b.shape(), b.strides(), nd);

    // multipliers[d] = product of out_shape[d+1..]; decodes flat -> multi-index
    let mut multipliers = vec![1usize; nd];
    for d in (0..nd.saturating_sub(1)).rev() {
        multipliers[d] = multipliers[d + 1] * out_shape[d + 1];
    }

    let a_buf = a.data();
    let b_buf = b.data();
    let mut out = Vec::with_capacity(total);
    for flat in 0..total {
        let mut rem = flat;
        let mut offset_a = 0usize;
        let mut offset_b = 0usize;
        for d in 0..nd {
            let idx = rem / multipliers[d];
            rem %= multipliers[d];
            if a_sizes[d] != 1 {
                offset_a += idx * a_strides[d];
            }
            if b_sizes[d] != 1 {
                offset_b += idx * b_strides[d];
            }
        }
        out.push(op.eval(a_buf[offset_a], b_buf[offset_b]));
    }

    Ok(Tensor::from_parts(out, layout))
}

/// Right-align a shape/stride pair to rank `nd`, padding with size 1 / stride 0
fn align_right(shape: &[usize], strides: &[usize], nd: usize) -> (Shape, Strides) {
    let pad = nd - shape.len();
    let mut sizes = Shape::with_capacity(nd);
    let mut steps = Strides::with_capacity(nd);
    for _ in 0..pad {
        sizes.push(1);
        steps.push(0);
    }
    for (&s, &st) in shape.iter().zip(strides.iter()) {
        sizes.push(s);
        steps.push(st);
    }
    (sizes, steps)
}

impl<T: Element> Tensor<T> {
    /// Elementwise addition with broadcasting
    pub fn add(&self, other: &Self) -> Result<Self> {
        apply(BinaryOp::Add, self, other)
    }

    /// Elementwise subtraction with broadcasting
    pub fn sub(&self, other: &Self) -> Result<Self> {
        apply(BinaryOp::Sub, self, other)
    }

    /// Elementwise multiplication with broadcasting
    pub fn mul(&self, other: &Self) -> Result<Self> {
        apply(BinaryOp::Mul, self, other)
    }

    /// Elementwise division with broadcasting
    ///
    /// Division by zero follows the element type's semantics (infinities for
    /// floats; panic for the integer primitives).
    pub fn div(&self, other: &Self) -> Result<Self> {
        apply(BinaryOp::Div, self, other)
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr, $msg:literal) => {
        impl<T: Element> std::ops::$trait<&Tensor<T>> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: &Tensor<T>) -> Tensor<T> {
                apply($op, self, rhs).expect($msg)
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOp::Add, "tensor addition failed");
impl_binary_operator!(Sub, sub, BinaryOp::Sub, "tensor subtraction failed");
impl_binary_operator!(Mul, mul, BinaryOp::Mul, "tensor multiplication failed");
impl_binary_operator!(Div, div, BinaryOp::Div, "tensor division failed");
