pub mod aliases;
mod ops;

pub use aliases::*;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::engine;
use crate::error::{invalid, raise, ArrayError, Result, Sizes};
use crate::op::{BinaryOp, CompareOp, Named, Operation, PairOp, Rounding, TernaryOp, UnaryOp};
use crate::traits::{range_check, ArrayMut, ArrayRef, Integral, Scalar, Size, Value};
use crate::Array;

/// Resizable heap-allocated array.
///
/// `Vec<T>` storage with the element count set at runtime. Operations on
/// dynamic arrays validate operand sizes with the broadcasting law: a
/// size-1 operand stands in for every position, any other disagreement is
/// an [`ArrayError::SizeMismatch`].
///
/// # Examples
///
/// ```
/// use lanewise::{ArrayRef, DynArray, Horizontal};
///
/// let a = DynArray::from_slice(&[2, 3, 4]);
/// assert_eq!(a.size(), 3);
/// assert_eq!(a.hsum(), Ok(9));
///
/// // A size-1 operand broadcasts.
/// let b = &a * &DynArray::from_slice(&[10]);
/// assert_eq!(b.as_slice(), &[20, 30, 40]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynArray<T> {
    data: Vec<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Value> DynArray<T> {
    /// Array of `n` elements, each the additive identity.
    ///
    /// ```
    /// use lanewise::DynArray;
    /// let z = DynArray::<f64>::zeros(3);
    /// assert_eq!(z.as_slice(), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }

    /// Array of `n` copies of `value`.
    pub fn fill(n: usize, value: T) -> Self {
        Self {
            data: vec![value; n],
        }
    }

    /// Copy the elements of `slice`.
    pub fn from_slice(slice: &[T]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Change the element count, appending additive identities when
    /// growing.
    ///
    /// This is the explicit reallocation through which a dynamic array's
    /// size may change.
    pub fn resize(&mut self, n: usize) {
        self.data.resize(n, T::zero());
    }
}

impl<T> DynArray<T> {
    /// Take ownership of `data`.
    #[inline]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create an array of `n` elements by calling `f(i)` for each position.
    ///
    /// ```
    /// use lanewise::DynArray;
    /// let a = DynArray::from_fn(4, |i| i as i32 - 1);
    /// assert_eq!(a.as_slice(), &[-1, 0, 1, 2]);
    /// ```
    pub fn from_fn(n: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: (0..n).map(f).collect(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consume the array, returning its storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    #[inline]
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

// ── ArrayRef / ArrayMut ─────────────────────────────────────────────

impl<T: Value> ArrayRef for DynArray<T> {
    type Value = T;
    const SIZE: Size = Size::Dynamic;

    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn entry(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Value> ArrayMut for DynArray<T> {
    #[inline]
    fn entry_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }

    #[inline]
    fn empty(n: usize) -> Self {
        Self::zeros(n)
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        range_check(i, self.data.len());
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        range_check(i, self.data.len());
        &mut self.data[i]
    }
}

// ── Value ───────────────────────────────────────────────────────────

impl<T: Value> Value for DynArray<T> {
    type Scalar = T::Scalar;
    type Rebind<U: Scalar> = DynArray<T::Rebind<U>>;
    const DEPTH: usize = 1 + T::DEPTH;

    /// A single zero element, which broadcasts against any size.
    fn zero() -> Self {
        Self::zeros(1)
    }

    fn width(&self) -> usize {
        self.data.len()
    }

    fn splat(s: T::Scalar) -> Self {
        Self {
            data: vec![T::splat(s)],
        }
    }

    fn entry_nd(&self, indices: &[usize]) -> &T::Scalar {
        match indices {
            [i, rest @ ..] if indices.len() == Self::DEPTH => self[*i].entry_nd(rest),
            _ => panic!(
                "entry_nd(): expected {} indices, got {}",
                Self::DEPTH,
                indices.len()
            ),
        }
    }

    fn entry_nd_mut(&mut self, indices: &[usize]) -> &mut T::Scalar {
        match indices {
            [i, rest @ ..] if indices.len() == Self::DEPTH => self[*i].entry_nd_mut(rest),
            _ => panic!(
                "entry_nd(): expected {} indices, got {}",
                Self::DEPTH,
                indices.len()
            ),
        }
    }

    fn unary(&self, op: UnaryOp) -> Result<Self> {
        engine::map_unary(op, self, |a| a.unary(op))
    }

    fn unary_pair(&self, op: PairOp) -> Result<(Self, Self)> {
        engine::map_unary_pair(op, self, |a| a.unary_pair(op))
    }

    fn binary(&self, rhs: &Self, op: BinaryOp) -> Result<Self> {
        engine::map_binary(op, self, rhs, |a, b| a.binary(b, op))
    }

    fn bitop_mask(&self, mask: &Self::Rebind<bool>, op: BinaryOp) -> Result<Self> {
        if !op.is_bitwise() {
            return invalid(op.name());
        }
        engine::map_binary(op, self, mask, |a, m| a.bitop_mask(m, op))
    }

    fn ternary(&self, b: &Self, c: &Self, op: TernaryOp) -> Result<Self> {
        engine::map_ternary(op, self, b, c, |x, y, z| x.ternary(y, z, op))
    }

    fn compare(&self, rhs: &Self, op: CompareOp) -> Result<Self::Rebind<bool>> {
        engine::map_binary(op, self, rhs, |a, b| a.compare(b, op))
    }

    fn select(mask: &Self::Rebind<bool>, t: &Self, f: &Self) -> Result<Self> {
        engine::map_ternary(Named("select"), mask, t, f, |m, t, f| T::select(m, t, f))
    }

    fn round_to_int<I: Integral>(&self, mode: Rounding) -> Result<Self::Rebind<I>> {
        engine::map_unary(mode, self, |a| a.round_to_int::<I>(mode))
    }

    fn convert<U: Scalar>(&self) -> Self::Rebind<U> {
        self.data.iter().map(|v| v.convert::<U>()).collect()
    }
}

// ── Conversions: Array ↔ DynArray ───────────────────────────────────

impl<T, const N: usize> From<Array<T, N>> for DynArray<T> {
    /// ```
    /// use lanewise::{Array, DynArray};
    /// let d: DynArray<i32> = Array::new([1, 2, 3]).into();
    /// assert_eq!(d.len(), 3);
    /// ```
    fn from(a: Array<T, N>) -> Self {
        Self {
            data: Vec::from(a.into_inner()),
        }
    }
}

impl<T: Clone, const N: usize> From<&Array<T, N>> for DynArray<T> {
    fn from(a: &Array<T, N>) -> Self {
        Self {
            data: a.as_slice().to_vec(),
        }
    }
}

impl<T: Clone, const N: usize> TryFrom<&DynArray<T>> for Array<T, N> {
    type Error = ArrayError;

    /// Copy a dynamic array into a fixed-size one.
    ///
    /// Fails with `SizeMismatch` unless the dynamic array has exactly `N`
    /// elements.
    ///
    /// ```
    /// use lanewise::{Array, DynArray};
    /// let d = DynArray::from_slice(&[1.0, 2.0]);
    /// let a: Array<f64, 2> = (&d).try_into().unwrap();
    /// assert_eq!(a, Array::new([1.0, 2.0]));
    /// assert!(Array::<f64, 3>::try_from(&d).is_err());
    /// ```
    fn try_from(d: &DynArray<T>) -> Result<Self> {
        let got = d.data.len();
        if got != N {
            return Err(raise(ArrayError::SizeMismatch {
                op: "try_from",
                sizes: Sizes::from_slice(&[N, got]),
            }));
        }
        Ok(Array::from_fn(|i| d.data[i].clone()))
    }
}
