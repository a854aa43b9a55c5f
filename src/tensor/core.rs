//! Core Tensor type

use super::Layout;
use crate::element::Element;
use crate::error::{Error, Result};
use std::fmt;

/// Default cap on rendered elements for `Display`
const DISPLAY_MAX_ELEMS: usize = 256;

/// N-dimensional array with an exclusively owned flat buffer
///
/// `Tensor` is the fundamental data structure in tensr. It consists of:
/// - **Data**: a contiguous `Vec<T>` of elements in row-major order
/// - **Layout**: shape and strides defining the n-dimensional structure
///
/// There are no views: every operation that produces a tensor allocates a
/// new buffer, and shape/strides are fixed at construction. Element values
/// may still be written through [`data_mut`](Self::data_mut).
///
/// # Example
///
/// ```
/// use tensr::tensor::Tensor;
///
/// let t = Tensor::from_vec(&[2, 2], vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(t.shape(), &[2, 2]);
/// assert_eq!(t.get(&[1, 0]), Some(&3.0));
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor<T: Element> {
    /// Flat element buffer, row-major
    data: Vec<T>,
    /// Shape and strides
    layout: Layout,
}

impl<T: Element> Tensor<T> {
    /// Create a tensor of the given shape filled with `T::default()`
    ///
    /// An empty shape yields a degenerate tensor with no elements; use
    /// [`Self::scalar`] for single values.
    pub fn new(shape: &[usize]) -> Self {
        if shape.is_empty() {
            return Self {
                data: Vec::new(),
                layout: Layout::scalar(),
            };
        }

        let layout = Layout::contiguous(shape);
        let data = vec![T::default(); layout.elem_count()];
        Self { data, layout }
    }

    /// Create a tensor of the given shape with supplied data
    ///
    /// Returns [`Error::ShapeMismatch`] when `data.len()` does not equal the
    /// product of the shape dimensions. An empty shape accepts only zero or
    /// exactly one element (the scalar special case).
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        if shape.is_empty() {
            if data.len() > 1 {
                return Err(Error::shape_mismatch(1, data.len()));
            }
            return Ok(Self {
                data,
                layout: Layout::scalar(),
            });
        }

        let layout = Layout::contiguous(shape);
        let expected = layout.elem_count();
        if data.len() != expected {
            return Err(Error::shape_mismatch(expected, data.len()));
        }

        Ok(Self { data, layout })
    }

    /// Create a tensor of the given shape filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        if shape.is_empty() {
            return Self::new(shape);
        }

        let layout = Layout::contiguous(shape);
        let data = vec![T::zero(); layout.elem_count()];
        Self { data, layout }
    }

    /// Create a rank-1, size-1 tensor holding a single value
    ///
    /// This is the crate's uniform scalar convention; `dot` of two vectors
    /// returns the same shape.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            layout: Layout::contiguous(&[1]),
        }
    }

    /// Create a tensor from an already validated buffer and layout
    ///
    /// Invariant: `data.len()` equals the layout's element count. Only op
    /// kernels that just sized the buffer themselves use this.
    pub(crate) fn from_parts(data: Vec<T>, layout: Layout) -> Self {
        debug_assert!(
            data.len() == layout.elem_count() || (layout.is_scalar() && data.len() <= 1)
        );
        Self { data, layout }
    }

    // ===== Accessors =====

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[usize] {
        self.layout.strides()
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Total number of elements in the buffer
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// View the flat buffer
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutably view the flat buffer
    ///
    /// Shape and strides stay fixed; only element values may change.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the element at a multi-index, or `None` when out of range
    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        let flat = self.layout.index(indices)?;
        self.data.get(flat)
    }

    /// Mutable element access by multi-index
    pub fn get_mut(&mut self, indices: &[usize]) -> Option<&mut T> {
        let flat = self.layout.index(indices)?;
        self.data.get_mut(flat)
    }

    // ===== Rendering =====

    /// Render a bounded diagnostic string
    ///
    /// Lists the shape, element type, total element count, and at most
    /// `max_elems` leading elements (followed by `...` when truncated).
    /// Output size stays bounded regardless of tensor size.
    pub fn to_string_capped(&self, max_elems: usize) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = write!(
            out,
            "Tensor(shape={:?}, dtype={})",
            self.shape(),
            std::any::type_name::<T>()
        );

        let total = self.numel();
        let show = total.min(max_elems);
        let _ = write!(out, " data({total}) [");
        for (i, v) in self.data[..show].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{v}");
        }
        if show < total {
            out.push_str(", ...");
        }
        out.push(']');
        out
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &std::any::type_name::<T>())
            .field("numel", &self.numel())
            .finish()
    }
}

impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_capped(DISPLAY_MAX_ELEMS))
    }
}
