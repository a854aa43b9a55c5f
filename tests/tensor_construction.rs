//! Integration tests for tensor construction and layout
//!
//! Tests verify:
//! - Zero-filled construction for a range of shapes
//! - Strict data/shape size checking, including the empty-shape scalar case
//! - Row-major stride derivation
//! - Bounded diagnostic rendering

use tensr::error::Error;
use tensr::tensor::Tensor;

// ============================================================================
// Shape-only construction
// ============================================================================

#[test]
fn test_new_matches_shape_product() {
    for shape in [&[3usize][..], &[2, 3][..], &[4, 1, 5][..], &[1, 1, 1, 1][..]] {
        let t = Tensor::<f64>::new(shape);
        let expected: usize = shape.iter().product();
        assert_eq!(t.numel(), expected, "shape {shape:?}");
        assert!(t.data().iter().all(|&v| v == f64::default()));
    }
}

#[test]
fn test_row_major_strides() {
    let t = Tensor::<i32>::new(&[2, 3, 4]);
    assert_eq!(t.strides(), &[12, 4, 1]);
    assert_eq!(t.shape().len(), t.strides().len());

    let v = Tensor::<i32>::new(&[7]);
    assert_eq!(v.strides(), &[1]);
}

#[test]
fn test_empty_shape_is_degenerate() {
    let t = Tensor::<f32>::new(&[]);
    assert_eq!(t.ndim(), 0);
    assert_eq!(t.numel(), 0);
    assert!(t.strides().is_empty());
}

// ============================================================================
// Construction with data
// ============================================================================

#[test]
fn test_from_vec_happy_path() {
    let t = Tensor::from_vec(&[2, 2], vec![1u32, 2, 3, 4]).unwrap();
    assert_eq!(t.get(&[0, 1]), Some(&2));
    assert_eq!(t.get(&[1, 1]), Some(&4));
}

#[test]
fn test_from_vec_every_mismatch_fails() {
    for wrong_len in [0usize, 1, 5, 7, 100] {
        let data = vec![0.0f64; wrong_len];
        let err = Tensor::from_vec(&[2, 3], data).unwrap_err();
        match err {
            Error::ShapeMismatch { expected, got } => {
                assert_eq!(expected, 6);
                assert_eq!(got, wrong_len);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn test_empty_shape_accepts_zero_or_one() {
    assert!(Tensor::<f64>::from_vec(&[], vec![]).is_ok());
    assert!(Tensor::from_vec(&[], vec![3.5]).is_ok());
    for extra in 2..5 {
        assert!(Tensor::from_vec(&[], vec![0.0; extra]).is_err());
    }
}

#[test]
fn test_scalar_is_rank_one() {
    let s = Tensor::scalar(2.5f64);
    assert_eq!(s.shape(), &[1]);
    assert_eq!(s.numel(), 1);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_display_is_bounded() {
    let big = Tensor::from_vec(&[1000], (0..1000).collect::<Vec<i64>>()).unwrap();
    let rendered = big.to_string_capped(10);
    assert!(rendered.len() < 200);
    assert!(rendered.contains("data(1000)"));
    assert!(rendered.ends_with(", ...]"));
}

#[test]
fn test_display_small_tensor_complete() {
    let t = Tensor::from_vec(&[2], vec![1, 2]).unwrap();
    let rendered = format!("{t}");
    assert!(rendered.contains("shape=[2]"));
    assert!(rendered.contains("[1, 2]"));
    assert!(!rendered.contains("..."));
}
