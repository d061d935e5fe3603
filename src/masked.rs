//! Masked writes.
//!
//! A [`Masked`] view pairs a mutable borrow of a target array with a copy of
//! a mask. Compound assignment through the view changes the target only at
//! positions where the mask is true. The view owns no element storage and
//! cannot outlive the borrow it was created from.
//!
//! The new value is computed for every lane and then blended with the old
//! one. For integer division and remainder the divisor is first replaced by
//! 1 wherever the mask is false, so `x[d != 0] /= d` never divides by a
//! masked-off zero.

use core::ops::{
    AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, MulAssign, SubAssign,
};

use crate::broadcast::resolve_in_place;
use crate::engine::admit;
use crate::error::{or_panic, Result};
use crate::op::{BinaryOp, Operation};
use crate::traits::{Arithmetic, ArrayMut, Scalar, Value};
use crate::Array;
#[cfg(feature = "alloc")]
use crate::DynArray;

/// Write view over a target array restricted to the lanes where the mask
/// is true.
///
/// Created by [`Elementwise::masked`](crate::Elementwise::masked).
#[derive(Debug)]
pub struct Masked<'a, A: Value> {
    target: &'a mut A,
    mask: A::Rebind<bool>,
}

impl<'a, A: ArrayMut + Value> Masked<'a, A> {
    pub(crate) fn new(target: &'a mut A, mask: &A::Rebind<bool>) -> Self {
        Self {
            target,
            mask: mask.clone(),
        }
    }

    /// The mask selecting the writable lanes.
    pub fn mask(&self) -> &A::Rebind<bool> {
        &self.mask
    }

    /// `target[mask] ⊕= rhs`.
    ///
    /// The target keeps its size; `rhs` and the mask must each have that
    /// size or size 1. Lanes where the mask is false keep their value, and
    /// on failure the target is left untouched.
    pub fn update(&mut self, op: BinaryOp, rhs: &A) -> Result<()> {
        admit::<BinaryOp, A::Value>(op)?;
        let st = resolve_in_place(
            op.name(),
            self.target.size(),
            &[rhs.size(), self.mask.width()],
        )?;
        if st == 0 {
            return Ok(());
        }
        let guarded;
        let rhs = if A::CATEGORY.is_integral() && matches!(op, BinaryOp::Div | BinaryOp::Rem) {
            let one = A::splat(true.cast::<A::Scalar>());
            guarded = A::select(&self.mask, rhs, &one)?;
            &guarded
        } else {
            rhs
        };
        let updated = self.target.binary(rhs, op)?;
        *self.target = A::select(&self.mask, &updated, self.target)?;
        Ok(())
    }

    /// `target[mask] = value`.
    pub fn assign(&mut self, value: &A) -> Result<()> {
        let st = resolve_in_place(
            "assign",
            self.target.size(),
            &[value.size(), self.mask.width()],
        )?;
        if st == 0 {
            return Ok(());
        }
        *self.target = A::select(&self.mask, value, self.target)?;
        Ok(())
    }
}

macro_rules! impl_masked_assign {
    ($($Op:ident, $op:ident, $bin:ident, $bound:ident);*) => {
        $(
            impl<A> $Op<&A> for Masked<'_, A>
            where
                A: ArrayMut + Value,
                A::Scalar: $bound,
            {
                #[inline]
                fn $op(&mut self, rhs: &A) {
                    or_panic(self.update(BinaryOp::$bin, rhs));
                }
            }

            impl<A> $Op<A> for Masked<'_, A>
            where
                A: ArrayMut + Value,
                A::Scalar: $bound,
            {
                #[inline]
                fn $op(&mut self, rhs: A) {
                    or_panic(self.update(BinaryOp::$bin, &rhs));
                }
            }
        )*
    };
}

impl_masked_assign!(
    AddAssign, add_assign, Add, Arithmetic;
    SubAssign, sub_assign, Sub, Arithmetic;
    MulAssign, mul_assign, Mul, Arithmetic;
    DivAssign, div_assign, Div, Arithmetic;
    BitAndAssign, bitand_assign, And, Scalar;
    BitOrAssign, bitor_assign, Or, Scalar;
    BitXorAssign, bitxor_assign, Xor, Scalar
);

/// `view ⊕= scalar` for views over flat arrays.
macro_rules! impl_masked_scalar_assign {
    ([$($g:tt)*] $ty:ty) => {
        impl_masked_scalar_assign!(@op [$($g)*] $ty, AddAssign, add_assign, Add);
        impl_masked_scalar_assign!(@op [$($g)*] $ty, SubAssign, sub_assign, Sub);
        impl_masked_scalar_assign!(@op [$($g)*] $ty, MulAssign, mul_assign, Mul);
        impl_masked_scalar_assign!(@op [$($g)*] $ty, DivAssign, div_assign, Div);
    };

    (@op [$($g:tt)*] $ty:ty, $Op:ident, $op:ident, $bin:ident) => {
        impl<$($g)*> $Op<T> for Masked<'_, $ty>
        where
            T: Arithmetic + Value<Scalar = T>,
        {
            #[inline]
            fn $op(&mut self, rhs: T) {
                let rhs = <$ty as Value>::splat(rhs);
                or_panic(self.update(BinaryOp::$bin, &rhs));
            }
        }
    };
}

impl_masked_scalar_assign!([T, const N: usize] Array<T, N>);
#[cfg(feature = "alloc")]
impl_masked_scalar_assign!([T] DynArray<T>);

#[cfg(test)]
mod tests {
    use crate::error::{ArrayError, Sizes};
    use crate::op::BinaryOp;
    use crate::{Array, DynArray, Elementwise};

    #[test]
    fn masked_add_scalar() {
        let mut target = DynArray::from_slice(&[1, 2, 3]);
        let mask = DynArray::from_slice(&[true, false, true]);
        let mut view = target.masked(&mask);
        view += 10;
        assert_eq!(target.as_slice(), &[11, 2, 13]);
    }

    #[test]
    fn masked_array_rhs() {
        let mut target = Array::new([1.0_f32, 2.0, 3.0, 4.0]);
        let mask = Array::new([false, true, true, false]);
        let mut view = target.masked(&mask);
        view *= Array::new([10.0, 10.0, 10.0, 10.0]);
        view -= &Array::new([1.0, 1.0, 1.0, 1.0]);
        assert_eq!(target, Array::new([1.0, 19.0, 29.0, 4.0]));
    }

    #[test]
    fn broadcast_mask() {
        let mut target = DynArray::from_slice(&[1, 2, 3]);
        target
            .masked(&DynArray::from_slice(&[true]))
            .update(BinaryOp::Mul, &DynArray::from_slice(&[2]))
            .unwrap();
        assert_eq!(target.as_slice(), &[2, 4, 6]);

        target
            .masked(&DynArray::from_slice(&[false]))
            .update(BinaryOp::Mul, &DynArray::from_slice(&[2]))
            .unwrap();
        assert_eq!(target.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn assign_through_mask() {
        let mut target = DynArray::from_slice(&[1, 2, 3, 4]);
        let mask = DynArray::from_slice(&[true, true, false, false]);
        target.masked(&mask).assign(&DynArray::from_slice(&[0])).unwrap();
        assert_eq!(target.as_slice(), &[0, 0, 3, 4]);
    }

    #[test]
    fn mismatched_mask_leaves_target() {
        let mut target = DynArray::from_slice(&[1, 2, 3]);
        let mask = DynArray::from_slice(&[true, false]);
        let err = target
            .masked(&mask)
            .update(BinaryOp::Add, &DynArray::from_slice(&[1]))
            .unwrap_err();
        assert_eq!(
            err,
            ArrayError::SizeMismatch {
                op: "add",
                sizes: Sizes::from_slice(&[3, 1, 2]),
            }
        );
        assert_eq!(target.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn masked_rejects_inadmissible_op() {
        let mut target = DynArray::from_slice(&[true, false]);
        let mask = DynArray::from_slice(&[true, true]);
        let err = target
            .masked(&mask)
            .update(BinaryOp::Add, &DynArray::from_slice(&[true]))
            .unwrap_err();
        assert_eq!(err, ArrayError::InvalidOperand { op: "add" });
    }

    #[test]
    fn nested_mask() {
        let mut target = Array::new([Array::new([1, 2]), Array::new([3, 4])]);
        let mask = Array::new([Array::new([true, false]), Array::new([false, true])]);
        let mut view = target.masked(&mask);
        view += Array::new([Array::new([100, 100]), Array::new([100, 100])]);
        assert_eq!(target, Array::new([Array::new([101, 2]), Array::new([3, 104])]));
    }

    #[test]
    fn masked_off_zero_divisor_is_skipped() {
        let mut target = DynArray::from_slice(&[10, 20, 30]);
        let mask = DynArray::from_slice(&[true, false, true]);
        let mut view = target.masked(&mask);
        view /= DynArray::from_slice(&[2, 0, 5]);
        assert_eq!(target.as_slice(), &[5, 20, 6]);

        let mut nested = Array::new([Array::new([7, 8]), Array::new([9, 10])]);
        let mask = Array::new([Array::new([true, false]), Array::new([false, true])]);
        nested
            .masked(&mask)
            .update(BinaryOp::Rem, &Array::new([Array::new([4, 0]), Array::new([0, 3])]))
            .unwrap();
        assert_eq!(nested, Array::new([Array::new([3, 8]), Array::new([9, 1])]));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn active_zero_divisor_panics() {
        let mut target = Array::new([10, 20]);
        let mut view = target.masked(&Array::new([true, true]));
        view /= Array::new([1, 0]);
    }

    #[test]
    fn masked_scalar_rhs_on_fixed() {
        let mut target = Array::new([1.0_f64, 2.0, 3.0, 4.0]);
        let mut view = target.masked(&Array::new([true, false, false, true]));
        view -= 0.5;
        view *= 2.0;
        assert_eq!(target, Array::new([1.0, 2.0, 3.0, 7.0]));
    }

    #[test]
    fn empty_target() {
        let mut target = DynArray::<i32>::zeros(0);
        let mut view = target.masked(&DynArray::from_slice(&[true]));
        view += 1;
        assert!(target.is_empty());
    }
}
