use super::*;
use crate::{Array, DynArray};

// ======================== Folds ========================

#[test]
fn hsum_integers() {
    let a = DynArray::from_slice(&[2, 3, 4]);
    assert_eq!(a.hsum(), Ok(9));
}

#[test]
fn hsum_zero_size() {
    let a = DynArray::<i32>::zeros(0);
    assert_eq!(a.hsum(), Err(ArrayError::ZeroSizeArray { op: "hsum" }));
    assert_eq!(a.hprod(), Err(ArrayError::ZeroSizeArray { op: "hprod" }));
    assert_eq!(a.hmin(), Err(ArrayError::ZeroSizeArray { op: "hmin" }));
    assert_eq!(a.hmax(), Err(ArrayError::ZeroSizeArray { op: "hmax" }));
}

#[test]
fn fixed_zero_size() {
    let a: Array<f32, 0> = Array::new([]);
    assert_eq!(a.hsum(), Err(ArrayError::ZeroSizeArray { op: "hsum" }));
}

#[test]
fn min_max_prod() {
    let a = Array::new([3.0_f64, -1.5, 8.0, 2.0]);
    assert_eq!(a.hmin(), Ok(-1.5));
    assert_eq!(a.hmax(), Ok(8.0));
    assert_eq!(a.hprod(), Ok(-72.0));
}

#[test]
fn hsum_is_left_to_right() {
    // (1e20 + -1e20) + 1 == 1, whereas 1e20 + (-1e20 + 1) == 0.
    let a = DynArray::from_slice(&[1e20_f64, -1e20, 1.0]);
    assert_eq!(a.hsum(), Ok(1.0));
}

#[test]
fn single_element() {
    let a = DynArray::from_slice(&[7_u8]);
    assert_eq!(a.hsum(), Ok(7));
    assert_eq!(a.hprod(), Ok(7));
}

#[test]
fn arithmetic_folds_reject_masks() {
    let m = Array::new([true, false]);
    assert_eq!(m.hsum(), Err(ArrayError::InvalidOperand { op: "hsum" }));
}

#[test]
fn nested_hsum_adds_inner_arrays() {
    let a = Array::new([Array::new([1, 2]), Array::new([10, 20]), Array::new([100, 200])]);
    assert_eq!(a.hsum(), Ok(Array::new([111, 222])));
}

// ======================== Masks ========================

#[test]
fn all_any() {
    let m = DynArray::from_slice(&[true, true, false]);
    assert_eq!(m.all(), Ok(false));
    assert_eq!(m.any(), Ok(true));
    let t = Array::new([true, true]);
    assert_eq!(t.all(), Ok(true));
    let f = Array::new([false, false]);
    assert_eq!(f.any(), Ok(false));
}

#[test]
fn all_rejects_non_masks() {
    let a = Array::new([1, 2]);
    assert_eq!(a.all(), Err(ArrayError::InvalidOperand { op: "all" }));
    assert_eq!(
        DynArray::<bool>::zeros(0).any(),
        Err(ArrayError::ZeroSizeArray { op: "any" })
    );
}

#[test]
fn count_true_lanes() {
    let m = DynArray::from_slice(&[true, false, true, true]);
    assert_eq!(m.count(), Ok(3_u32));
    let nested = Array::new([Array::new([true, false]), Array::new([true, true])]);
    assert_eq!(nested.count(), Ok(Array::new([2_u32, 1])));
    assert_eq!(
        Array::new([1.0_f32]).count(),
        Err(ArrayError::InvalidOperand { op: "count" })
    );
}

// ======================== Dot ========================

#[test]
fn dot_flat() {
    let a = DynArray::from_slice(&[1, 2, 3]);
    let b = DynArray::from_slice(&[4, 5, 6]);
    assert_eq!(a.dot(&b), Ok(32));
    let a = Array::new([1.0_f64, 2.0, 3.0]);
    let b = Array::new([4.0_f64, 5.0, 6.0]);
    assert_eq!(a.dot(&b), Ok(((1.0 * 4.0) + 2.0 * 5.0) + 3.0 * 6.0));
}

#[test]
fn dot_broadcast_and_mismatch() {
    let a = DynArray::from_slice(&[1, 2, 3]);
    assert_eq!(a.dot(&DynArray::from_slice(&[2])), Ok(12));
    assert!(matches!(
        a.dot(&DynArray::from_slice(&[1, 2])),
        Err(ArrayError::SizeMismatch { op: "dot", .. })
    ));
    let e = DynArray::<i32>::zeros(0);
    assert_eq!(e.dot(&e), Err(ArrayError::ZeroSizeArray { op: "dot" }));
}

#[test]
fn dot_nested_float() {
    let a = Array::new([Array::new([1.0_f32, 2.0]), Array::new([3.0, 4.0])]);
    let b = Array::new([Array::new([5.0_f32, 6.0]), Array::new([7.0, 8.0])]);
    assert_eq!(a.dot(&b), Ok(Array::new([1.0 * 5.0 + 3.0 * 7.0, 2.0 * 6.0 + 4.0 * 8.0])));
}

#[test]
fn dot_rejects_masks() {
    let m = Array::new([true]);
    assert_eq!(m.dot(&m), Err(ArrayError::InvalidOperand { op: "dot" }));
}

// ======================== Extract ========================

#[test]
fn extract_first_true() {
    let a = DynArray::from_slice(&[5.0_f32, 6.0, 7.0]);
    assert_eq!(a.extract(&DynArray::from_slice(&[false, false, true])), 7.0);
    assert_eq!(a.extract(&DynArray::from_slice(&[true, true, true])), 5.0);
}

#[test]
fn extract_none_is_zero() {
    let a = DynArray::from_slice(&[5, 6, 7]);
    assert_eq!(a.extract(&DynArray::from_slice(&[false, false, false])), 0);
    assert_eq!(DynArray::<i32>::zeros(0).extract(&DynArray::<bool>::zeros(0)), 0);
}

#[test]
fn extract_broadcast() {
    let a = DynArray::from_slice(&[5, 6, 7]);
    assert_eq!(a.extract(&DynArray::from_slice(&[true])), 5);
    assert_eq!(DynArray::from_slice(&[9]).extract(&DynArray::from_slice(&[false, true])), 9);
    // Positions past the shorter operand are not scanned.
    assert_eq!(a.extract(&DynArray::from_slice(&[false, false, false, true])), 0);
}
