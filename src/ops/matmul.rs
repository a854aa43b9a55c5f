//! Dot product / matrix multiplication
//!
//! Rank-pair dispatch with no broadcasting. All 2-d element addressing goes
//! through the stored strides, never a hand-computed row-major offset.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::tensor::Tensor;

impl<T: Element> Tensor<T> {
    /// Dot product / contraction over the shared dimension
    ///
    /// Supported rank pairs:
    /// - 1-d · 1-d: scalar sum of products, returned as a rank-1 size-1 tensor
    /// - 2-d · 2-d: matrix product, `(M,K) · (K,N) -> (M,N)`
    /// - 2-d · 1-d: matrix-vector product, length-M vector
    /// - 1-d · 2-d: vector treated as a `(1,K)` row, length-N vector
    ///
    /// Any other rank combination is [`Error::UnsupportedRank`]; a contracted
    /// dimension disagreement within a supported pair is
    /// [`Error::DimensionMismatch`] naming both dimension values.
    pub fn dot(&self, other: &Self) -> Result<Self> {
        match (self.ndim(), other.ndim()) {
            (1, 1) => dot_vec_vec(self, other),
            (2, 2) => dot_mat_mat(self, other),
            (2, 1) => dot_mat_vec(self, other),
            (1, 2) => dot_vec_mat(self, other),
            (lhs, rhs) => Err(Error::unsupported_rank(lhs, rhs)),
        }
    }
}

fn dot_vec_vec<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    let k = a.shape()[0];
    if k != b.shape()[0] {
        return Err(Error::dimension_mismatch(k, b.shape()[0]));
    }

    let mut acc = T::zero();
    for i in 0..k {
        acc = acc + a.data()[i] * b.data()[i];
    }
    Ok(Tensor::scalar(acc))
}

fn dot_mat_mat<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    let (m, k) = (a.shape()[0], a.shape()[1]);
    let (k2, n) = (b.shape()[0], b.shape()[1]);
    if k != k2 {
        return Err(Error::dimension_mismatch(k, k2));
    }

    let (as0, as1) = (a.strides()[0], a.strides()[1]);
    let (bs0, bs1) = (b.strides()[0], b.strides()[1]);

    let mut out = Tensor::<T>::zeros(&[m, n]);
    let (os0, os1) = (out.strides()[0], out.strides()[1]);

    // i-k-j loop order: the innermost loop walks both b and out along rows
    let a_buf = a.data();
    let b_buf = b.data();
    let out_buf = out.data_mut();
    for i in 0..m {
        for kk in 0..k {
            let a_ik = a_buf[i * as0 + kk * as1];
            for j in 0..n {
                let slot = i * os0 + j * os1;
                out_buf[slot] = out_buf[slot] + a_ik * b_buf[kk * bs0 + j * bs1];
            }
        }
    }
    Ok(out)
}

fn dot_mat_vec<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    let (m, k) = (a.shape()[0], a.shape()[1]);
    if k != b.shape()[0] {
        return Err(Error::dimension_mismatch(k, b.shape()[0]));
    }

    let (as0, as1) = (a.strides()[0], a.strides()[1]);
    let a_buf = a.data();
    let b_buf = b.data();

    let mut out = Vec::with_capacity(m);
    for i in 0..m {
        let mut acc = T::zero();
        for kk in 0..k {
            acc = acc + a_buf[i * as0 + kk * as1] * b_buf[kk];
        }
        out.push(acc);
    }
    Tensor::from_vec(&[m], out)
}

fn dot_vec_mat<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    let k = a.shape()[0];
    if k != b.shape()[0] {
        return Err(Error::dimension_mismatch(k, b.shape()[0]));
    }
    let n = b.shape()[1];

    let (bs0, bs1) = (b.strides()[0], b.strides()[1]);
    let a_buf = a.data();
    let b_buf = b.data();

    // (1,K) row times (K,N)
    let mut out = Vec::with_capacity(n);
    for j in 0..n {
        let mut acc = T::zero();
        for kk in 0..k {
            acc = acc + a_buf[kk] * b_buf[kk * bs0 + j * bs1];
        }
        out.push(acc);
    }
    Tensor::from_vec(&[n], out)
}
