pub mod aliases;
mod ops;

use core::ops::{Index, IndexMut};

use crate::engine;
use crate::error::{invalid, Result};
use crate::op::{BinaryOp, CompareOp, Named, Operation, PairOp, Rounding, TernaryOp, UnaryOp};
use crate::traits::{range_check, ArrayMut, ArrayRef, Integral, Scalar, Size, Value};

/// Fixed-size array of `N` elements.
///
/// Stack-allocated `[T; N]` storage, no-std compatible. `T` is a scalar or
/// itself an array, so `Array<Array<f32, 4>, 3>` is a depth-2 array whose
/// operations recurse into the inner arrays.
///
/// # Examples
///
/// ```
/// use lanewise::{Array, ArrayRef, Elementwise, Horizontal};
///
/// let a = Array::new([1.0_f32, 2.0, 3.0]);
/// let b = Array::new([4.0_f32, 5.0, 6.0]);
/// assert_eq!(a.size(), 3);
/// assert_eq!(a + b, Array::new([5.0, 7.0, 9.0]));
/// assert_eq!(a.dot(&b), Ok(32.0));
/// assert_eq!(a.sqrt().unwrap()[0], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Array<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Create an array from its elements.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Create an array by calling `f(i)` for each position.
    ///
    /// ```
    /// use lanewise::Array;
    /// let a: Array<u32, 4> = Array::from_fn(|i| (i * i) as u32);
    /// assert_eq!(a, Array::new([0, 1, 4, 9]));
    /// ```
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(f),
        }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consume the array, returning its storage.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    /// Permute the elements: output position `k` takes input element
    /// `I[k] % N`.
    ///
    /// ```
    /// use lanewise::Array;
    /// let a = Array::new([10, 20, 30, 40]);
    /// assert_eq!(a.shuffle([3, 2, 1, 0]), Array::new([40, 30, 20, 10]));
    /// assert_eq!(a.shuffle([0, 0, 5, 6]), Array::new([10, 10, 20, 30]));
    /// ```
    pub fn shuffle(&self, indices: [usize; N]) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|k| self.data[indices[k] % N].clone())
    }
}

impl<T: Value, const N: usize> Array<T, N> {
    /// Array with every element equal to `value`.
    #[inline]
    pub fn fill(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }

    /// Array with every element equal to the additive identity.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_fn(|_| T::zero())
    }
}

impl<T: Value, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

// ── ArrayRef / ArrayMut ─────────────────────────────────────────────

impl<T: Value, const N: usize> ArrayRef for Array<T, N> {
    type Value = T;
    const SIZE: Size = Size::Fixed(N);

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn entry(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Value, const N: usize> ArrayMut for Array<T, N> {
    #[inline]
    fn entry_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }

    #[inline]
    fn empty(_n: usize) -> Self {
        Self::zeros()
    }
}

// ── Index ───────────────────────────────────────────────────────────

// Bounds checked in debug builds only, see `traits::range_check`.
impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        range_check(i, N);
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        range_check(i, N);
        &mut self.data[i]
    }
}

// ── Value ───────────────────────────────────────────────────────────

impl<T: Value, const N: usize> Value for Array<T, N> {
    type Scalar = T::Scalar;
    type Rebind<U: Scalar> = Array<T::Rebind<U>, N>;
    const DEPTH: usize = 1 + T::DEPTH;

    fn zero() -> Self {
        Self::zeros()
    }

    fn width(&self) -> usize {
        N
    }

    fn splat(s: T::Scalar) -> Self {
        Self::from_fn(|_| T::splat(s))
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
        Array::from_fn(|i| self.data[i].convert::<U>())
    }
}
