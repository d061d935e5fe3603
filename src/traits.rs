use core::fmt::Debug;

use num_traits::{Float, Num, PrimInt};

use crate::error::{ArrayError, Result};
use crate::op::{BinaryOp, CompareOp, PairOp, Rounding, TernaryOp, UnaryOp};

/// Kind of values an array's scalar type holds.
///
/// Derived once from the scalar type; all admissibility checks go through
/// the flag accessors below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `f32`, `f64`.
    Float,
    /// Signed and unsigned integers.
    Integer,
    /// `bool` lanes.
    Mask,
}

impl Category {
    /// Values that can be added, multiplied, compared by order, etc.
    #[inline]
    pub const fn is_arithmetic(self) -> bool {
        !matches!(self, Category::Mask)
    }

    #[inline]
    pub const fn is_integral(self) -> bool {
        matches!(self, Category::Integer)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Category::Float)
    }

    #[inline]
    pub const fn is_mask(self) -> bool {
        matches!(self, Category::Mask)
    }
}

/// Element count of an array type: known at compile time, or dynamic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Fixed(usize),
    Dynamic,
}

impl Size {
    #[inline]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Size::Dynamic)
    }
}

/// A scalar widened to a common carrier, used for `as`-style conversions
/// between scalar types.
///
/// Integers travel as `i128`, floats as `f64` and masks as `bool`; every
/// primitive fits its carrier losslessly, so converting through it gives
/// the same result as a direct `as` cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widened {
    Int(i128),
    Float(f64),
    Bool(bool),
}

/// Leaf element type: the scalar found after fully unwrapping nesting.
///
/// Implemented for `bool`, `i8`..`i64`, `u8`..`u64`, `f32` and `f64`. Every
/// scalar is also a depth-0 [`Value`] whose scalar is itself, which is what
/// lets `Rebind<U>` of a scalar be `U`.
///
/// The lane operations return `None` when the operation is not defined for
/// the scalar's [`Category`]; array code never reaches that path because it
/// checks admissibility first.
pub trait Scalar:
    Value<Scalar = Self> + Copy + PartialEq + PartialOrd + Debug + Default + Send + Sync + 'static
{
    /// Category of this scalar type.
    const CATEGORY: Category;

    fn unary(self, op: UnaryOp) -> Option<Self>;

    fn unary_pair(self, op: PairOp) -> Option<(Self, Self)>;

    fn binary(self, rhs: Self, op: BinaryOp) -> Option<Self>;

    /// Bit operation against a mask lane: the mask acts as all-ones
    /// (`true`) or all-zeros (`false`) of the same width as `self`.
    fn bitop_mask(self, mask: bool, op: BinaryOp) -> Option<Self>;

    fn ternary(self, b: Self, c: Self, op: TernaryOp) -> Option<Self>;

    fn compare(self, rhs: Self, op: CompareOp) -> Option<bool>;

    fn widen(self) -> Widened;

    /// `as`-cast from the widened carrier.
    fn narrow(w: Widened) -> Self;

    /// `as`-style conversion into another scalar type.
    #[inline]
    fn cast<U: Scalar>(self) -> U {
        U::narrow(self.widen())
    }
}

/// Scalars that support `+ - * /` (floats and integers).
pub trait Arithmetic: Scalar + Num {}

/// Integer scalars. Usable as gather/scatter indices.
pub trait Integral: Arithmetic + PrimInt {
    /// Convert to a memory offset; `None` when negative or too large.
    #[inline]
    fn to_offset(self) -> Option<usize> {
        self.to_usize()
    }
}

/// Floating-point scalars.
pub trait FloatScalar: Arithmetic + Float {}

/// Anything that can be an array element: a scalar, or an array itself.
///
/// Arrays of arrays recurse through this trait, so every operation has the
/// same meaning at every nesting depth.
pub trait Value: Clone + Debug + PartialEq {
    /// Element type after fully unwrapping nesting.
    type Scalar: Scalar;

    /// Same shape, different scalar type. `Rebind<bool>` is the mask
    /// companion of `Self`.
    type Rebind<U: Scalar>: Value<Scalar = U>;

    /// Nesting depth: 0 for scalars, `1 + DEPTH(inner)` for arrays.
    const DEPTH: usize;

    /// Category flags, derived from [`Value::Scalar`].
    const CATEGORY: Category = <Self::Scalar as Scalar>::CATEGORY;

    /// The additive identity (`false` for masks).
    fn zero() -> Self;

    /// Number of outer elements: 1 for a scalar, the array size otherwise.
    fn width(&self) -> usize;

    /// A value with every lane set to `s`.
    ///
    /// Dynamic arrays produce a single-element array, which broadcasts.
    fn splat(s: Self::Scalar) -> Self;

    /// Recursive element access: `indices[0]` selects the outer element, the
    /// rest address into it. Must supply exactly [`Value::DEPTH`] indices.
    fn entry_nd(&self, indices: &[usize]) -> &Self::Scalar;

    /// Mutable counterpart of [`Value::entry_nd`].
    fn entry_nd_mut(&mut self, indices: &[usize]) -> &mut Self::Scalar;

    fn unary(&self, op: UnaryOp) -> Result<Self>;

    fn unary_pair(&self, op: PairOp) -> Result<(Self, Self)>;

    fn binary(&self, rhs: &Self, op: BinaryOp) -> Result<Self>;

    /// Bit operation with a mask operand of the same shape.
    fn bitop_mask(&self, mask: &Self::Rebind<bool>, op: BinaryOp) -> Result<Self>;

    fn ternary(&self, b: &Self, c: &Self, op: TernaryOp) -> Result<Self>;

    fn compare(&self, rhs: &Self, op: CompareOp) -> Result<Self::Rebind<bool>>;

    /// Per-lane choice between `t` and `f`.
    fn select(mask: &Self::Rebind<bool>, t: &Self, f: &Self) -> Result<Self>;

    /// Round each float lane and convert it to the integer type `I`.
    fn round_to_int<I: Integral>(&self, mode: Rounding) -> Result<Self::Rebind<I>>;

    /// Lane-wise `as` conversion to another scalar type.
    fn convert<U: Scalar>(&self) -> Self::Rebind<U>;
}

/// Read-only access to an array.
///
/// This is the collaborator contract every array representation provides:
/// the engine, reductions, masked writes and gather/scatter are all written
/// against it, so the fixed-size [`Array`](crate::Array) and the resizable
/// [`DynArray`](crate::DynArray) behave identically.
pub trait ArrayRef {
    type Value: Value;

    /// `Size::Fixed(N)` or `Size::Dynamic`.
    const SIZE: Size;

    /// Current logical element count.
    fn size(&self) -> usize;

    /// Element `i`, for `i` in `[0, size())`.
    fn entry(&self, i: usize) -> &Self::Value;

    /// Whether the array holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Element `i`, always bounds checked.
    fn checked_entry(&self, i: usize) -> Result<&Self::Value> {
        let size = self.size();
        if i < size {
            Ok(self.entry(i))
        } else {
            Err(crate::error::raise(ArrayError::OutOfRange { index: i, size }))
        }
    }
}

/// Mutable access and allocation.
pub trait ArrayMut: ArrayRef + Sized {
    fn entry_mut(&mut self, i: usize) -> &mut Self::Value;

    /// A fresh array of `n` elements, every one set to `Value::zero()`.
    ///
    /// Fixed-size arrays ignore `n`; callers resolve it to `N` first.
    fn empty(n: usize) -> Self;
}

/// Bounds check performed by the `Index` operators.
///
/// Active in debug builds unless the `disable-range-check` feature is set.
/// Release builds skip it: an out-of-range index then reaches the storage
/// directly, which panics with the slice's own message rather than this
/// one.
#[inline(always)]
pub(crate) fn range_check(_i: usize, _size: usize) {
    #[cfg(all(debug_assertions, not(feature = "disable-range-check")))]
    {
        if _i >= _size {
            panic!("{}", ArrayError::OutOfRange { index: _i, size: _size });
        }
    }
}

macro_rules! impl_markers {
    (float: $($f:ty),*; int: $($i:ty),*) => {
        $(
            impl Arithmetic for $f {}
            impl FloatScalar for $f {}
        )*
        $(
            impl Arithmetic for $i {}
            impl Integral for $i {}
        )*
    };
}

impl_markers!(float: f32, f64; int: i8, i16, i32, i64, u8, u16, u32, u64);
