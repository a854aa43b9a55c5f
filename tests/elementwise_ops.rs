//! Integration tests for elementwise arithmetic with broadcasting
//!
//! Tests verify correctness across:
//! - Identical-shape fast path for all four operators
//! - Right-aligned broadcasting (row, column, scalar, rank-extension)
//! - Incompatibility errors carrying both original shapes
//! - No aliasing between inputs and output
//! - Operator sugar vs the fallible methods

use tensr::error::Error;
use tensr::tensor::Tensor;

// ============================================================================
// Identical shapes
// ============================================================================

#[test]
fn test_all_operators_same_shape() {
    let a = Tensor::from_vec(&[2, 2], vec![8.0, 6.0, 4.0, 2.0]).unwrap();
    let b = Tensor::from_vec(&[2, 2], vec![2.0, 2.0, 2.0, 2.0]).unwrap();

    assert_eq!(a.add(&b).unwrap().data(), &[10.0, 8.0, 6.0, 4.0]);
    assert_eq!(a.sub(&b).unwrap().data(), &[6.0, 4.0, 2.0, 0.0]);
    assert_eq!(a.mul(&b).unwrap().data(), &[16.0, 12.0, 8.0, 4.0]);
    assert_eq!(a.div(&b).unwrap().data(), &[4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn test_add_zero_identity() {
    let a = Tensor::from_vec(&[2, 3], vec![1.0, -2.0, 3.5, 0.0, 5.0, 6.0]).unwrap();
    let zeros = Tensor::<f64>::new(&[2, 3]);
    let c = a.add(&zeros).unwrap();
    assert_eq!(c.data(), a.data());
    assert_eq!(c.shape(), a.shape());
}

#[test]
fn test_large_buffer_add() {
    // Crosses the parallel threshold on default features
    let n = 10_000;
    let a = Tensor::from_vec(&[n], vec![1.0f64; n]).unwrap();
    let b = Tensor::from_vec(&[n], vec![2.0f64; n]).unwrap();
    let c = a.add(&b).unwrap();
    assert_eq!(c.numel(), n);
    assert!(c.data().iter().all(|&v| v == 3.0));
}

// ============================================================================
// Broadcasting
// ============================================================================

#[test]
fn test_row_broadcast() {
    let a = Tensor::from_vec(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Tensor::from_vec(&[3], vec![10.0, 20.0, 30.0]).unwrap();

    let c = a.add(&b).unwrap();
    assert_eq!(c.shape(), &[2, 3]);
    assert_eq!(c.data(), &[11.0, 22.0, 33.0, 14.0, 25.0, 36.0]);
}

#[test]
fn test_scalar_broadcast() {
    let a = Tensor::from_vec(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let s = Tensor::from_vec(&[1], vec![5.0]).unwrap();

    let d = a.mul(&s).unwrap();
    assert_eq!(d.shape(), &[2, 3]);
    assert_eq!(d.data(), &[5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);

    // Shape (1,) against any shape S yields S, both ways around
    let d2 = s.mul(&a).unwrap();
    assert_eq!(d2.shape(), &[2, 3]);
    assert_eq!(d2.data(), d.data());
}

#[test]
fn test_both_operands_broadcast() {
    // (3,1) with (1,4) -> (3,4)
    let col = Tensor::from_vec(&[3, 1], vec![1.0, 2.0, 3.0]).unwrap();
    let row = Tensor::from_vec(&[1, 4], vec![10.0, 20.0, 30.0, 40.0]).unwrap();
    let c = col.add(&row).unwrap();
    assert_eq!(c.shape(), &[3, 4]);
    assert_eq!(
        c.data(),
        &[11.0, 21.0, 31.0, 41.0, 12.0, 22.0, 32.0, 42.0, 13.0, 23.0, 33.0, 43.0]
    );
}

#[test]
fn test_rank_three_broadcast() {
    let a = Tensor::from_vec(&[2, 2, 2], (1..=8).map(|v| v as f64).collect()).unwrap();
    let b = Tensor::from_vec(&[2], vec![10.0, 100.0]).unwrap();
    let c = a.add(&b).unwrap();
    assert_eq!(c.shape(), &[2, 2, 2]);
    assert_eq!(
        c.data(),
        &[11.0, 102.0, 13.0, 104.0, 15.0, 106.0, 17.0, 108.0]
    );
}

#[test]
fn test_subtract_with_broadcast() {
    let a = Tensor::from_vec(&[2, 2], vec![10.0, 20.0, 30.0, 40.0]).unwrap();
    let b = Tensor::from_vec(&[2], vec![1.0, 2.0]).unwrap();
    let c = a.sub(&b).unwrap();
    assert_eq!(c.data(), &[9.0, 18.0, 29.0, 38.0]);
}

#[test]
fn test_incompatible_broadcast_reports_shapes() {
    let a = Tensor::<f64>::new(&[2, 3]);
    let b = Tensor::<f64>::new(&[4]);
    match a.add(&b).unwrap_err() {
        Error::BroadcastIncompatible { lhs, rhs } => {
            assert_eq!(lhs, vec![2, 3]);
            assert_eq!(rhs, vec![4]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_division_by_zero_float_semantics() {
    let a = Tensor::from_vec(&[2], vec![1.0f64, -1.0]).unwrap();
    let z = Tensor::from_vec(&[2], vec![0.0f64, 0.0]).unwrap();
    let c = a.div(&z).unwrap();
    assert_eq!(c.data()[0], f64::INFINITY);
    assert_eq!(c.data()[1], f64::NEG_INFINITY);
}

// ============================================================================
// Ownership
// ============================================================================

#[test]
fn test_output_does_not_alias_inputs() {
    let a = Tensor::from_vec(&[2], vec![1.0, 2.0]).unwrap();
    let b = Tensor::from_vec(&[2], vec![3.0, 4.0]).unwrap();
    let mut c = a.add(&b).unwrap();

    c.data_mut()[0] = 999.0;
    assert_eq!(a.data(), &[1.0, 2.0]);
    assert_eq!(b.data(), &[3.0, 4.0]);
}

// ============================================================================
// Operator sugar
// ============================================================================

#[test]
fn test_std_ops_match_methods() {
    let a = Tensor::from_vec(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Tensor::from_vec(&[3], vec![1.0, 2.0, 4.0]).unwrap();

    assert_eq!((&a + &b).data(), a.add(&b).unwrap().data());
    assert_eq!((&a - &b).data(), a.sub(&b).unwrap().data());
    assert_eq!((&a * &b).data(), a.mul(&b).unwrap().data());
    assert_eq!((&a / &b).data(), a.div(&b).unwrap().data());
}

#[test]
#[should_panic(expected = "tensor addition failed")]
fn test_std_ops_panic_on_incompatible_shapes() {
    let a = Tensor::<f64>::new(&[2, 3]);
    let b = Tensor::<f64>::new(&[4]);
    let _ = &a + &b;
}
