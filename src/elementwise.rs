//! Named elementwise operations on arrays.
//!
//! [`Elementwise`] is implemented for every array type. Each method is a
//! thin wrapper that picks the operator descriptor and hands it to the
//! [`Value`] operations, which run the generic engine bodies. Unlike the
//! operator overloads, these methods return the error instead of
//! panicking, and they accept any element type: an operation that is not
//! defined for the element category fails with `InvalidOperand`.

use crate::engine;
use crate::error::Result;
use crate::masked::Masked;
use crate::op::{BinaryOp, CompareOp, PairOp, Rounding, TernaryOp, UnaryOp};
use crate::traits::{ArrayMut, FloatScalar, Integral, Value};

/// Per-lane choice between `t` (where `mask` is true) and `f`.
///
/// All three operands broadcast against each other.
///
/// ```
/// use lanewise::{select, DynArray};
///
/// let m = DynArray::from_slice(&[true, false, true]);
/// let t = DynArray::from_slice(&[1, 2, 3]);
/// let f = DynArray::from_slice(&[10, 20, 30]);
/// assert_eq!(select(&m, &t, &f).unwrap().as_slice(), &[1, 20, 3]);
/// ```
#[inline]
pub fn select<V: Value>(mask: &V::Rebind<bool>, t: &V, f: &V) -> Result<V> {
    V::select(mask, t, f)
}

macro_rules! unary_methods {
    ($($(#[$doc:meta])* $name:ident => $op:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            fn $name(&self) -> Result<Self> {
                self.unary(UnaryOp::$op)
            }
        )*
    };
}

macro_rules! binary_methods {
    ($($(#[$doc:meta])* $name:ident => $op:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            fn $name(&self, rhs: &Self) -> Result<Self> {
                self.binary(rhs, BinaryOp::$op)
            }
        )*
    };
}

macro_rules! mask_methods {
    ($($name:ident => $op:ident;)*) => {
        $(
            #[inline]
            fn $name(&self, mask: &Self::Rebind<bool>) -> Result<Self> {
                self.bitop_mask(mask, BinaryOp::$op)
            }
        )*
    };
}

macro_rules! compare_methods {
    ($($name:ident => $op:ident;)*) => {
        $(
            #[inline]
            fn $name(&self, rhs: &Self) -> Result<Self::Rebind<bool>> {
                self.compare(rhs, CompareOp::$op)
            }
        )*
    };
}

macro_rules! ternary_methods {
    ($($(#[$doc:meta])* $name:ident => $op:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            fn $name(&self, b: &Self, c: &Self) -> Result<Self> {
                self.ternary(b, c, TernaryOp::$op)
            }
        )*
    };
}

macro_rules! rounding_methods {
    ($($name:ident => $mode:ident;)*) => {
        $(
            #[inline]
            fn $name<I: Integral>(&self) -> Result<Self::Rebind<I>> {
                self.round_to_int::<I>(Rounding::$mode)
            }
        )*
    };
}

/// Elementwise operations with error reporting.
///
/// ```
/// use lanewise::{DynArray, Elementwise};
///
/// let a = DynArray::from_slice(&[1.0_f64, 4.0, 9.0]);
/// assert_eq!(a.sqrt().unwrap().as_slice(), &[1.0, 2.0, 3.0]);
///
/// // sqrt is float-only.
/// let i = DynArray::from_slice(&[1, 4, 9]);
/// assert_eq!(i.sqrt().unwrap_err().to_string(), "sqrt(): invalid operand type");
/// ```
pub trait Elementwise: ArrayMut + Value {
    binary_methods! {
        try_add => Add;
        try_sub => Sub;
        try_mul => Mul;
        try_div => Div;
        /// Integer remainder.
        try_rem => Rem;
        /// High half of the double-width integer product.
        mulhi => Mulhi;
        min => Min;
        max => Max;
        and => And;
        or => Or;
        xor => Xor;
        /// `self & !rhs`.
        andnot => AndNot;
        /// Shift left by a per-lane amount.
        try_shl => Shl;
        /// Shift right by a per-lane amount (arithmetic for signed types).
        try_shr => Shr;
        atan2 => Atan2;
        /// `self * 2^rhs`.
        ldexp => Ldexp;
        pow => Pow;
    }

    mask_methods! {
        and_mask => And;
        or_mask => Or;
        xor_mask => Xor;
        andnot_mask => AndNot;
    }

    compare_methods! {
        cmp_eq => Eq;
        cmp_neq => Neq;
        cmp_lt => Lt;
        cmp_le => Le;
        cmp_gt => Gt;
        cmp_ge => Ge;
    }

    unary_methods! {
        try_neg => Neg;
        /// Logical negation for masks, bitwise complement for integers.
        try_not => Not;
        abs => Abs;
        sqrt => Sqrt;
        floor => Floor;
        ceil => Ceil;
        trunc => Trunc;
        /// Round to nearest, ties to even.
        round => Round;
        /// Reciprocal.
        rcp => Rcp;
        /// Reciprocal square root.
        rsqrt => Rsqrt;
        sin => Sin;
        cos => Cos;
        tan => Tan;
        csc => Csc;
        sec => Sec;
        cot => Cot;
        asin => Asin;
        acos => Acos;
        atan => Atan;
        exp => Exp;
        exp2 => Exp2;
        log => Log;
        log2 => Log2;
    }

    ternary_methods! {
        /// `self * b + c`
        fmadd => Fmadd;
        /// `self * b - c`
        fmsub => Fmsub;
        /// `-self * b + c`
        fnmadd => Fnmadd;
        /// `-self * b - c`
        fnmsub => Fnmsub;
    }

    rounding_methods! {
        floor2int => Floor;
        ceil2int => Ceil;
        round2int => Round;
        trunc2int => Trunc;
    }

    /// Shift every lane left by `n` bits.
    #[inline]
    fn shl_by(&self, n: u32) -> Result<Self> {
        self.unary(UnaryOp::ShlImm(n))
    }

    /// Shift every lane right by `n` bits.
    #[inline]
    fn shr_by(&self, n: u32) -> Result<Self> {
        self.unary(UnaryOp::ShrImm(n))
    }

    /// `(sin, cos)` of every lane.
    #[inline]
    fn sincos(&self) -> Result<(Self, Self)> {
        self.unary_pair(PairOp::SinCos)
    }

    /// `(mantissa, exponent)` of every lane, the mantissa in `[0.5, 1)`.
    #[inline]
    fn frexp(&self) -> Result<(Self, Self)> {
        self.unary_pair(PairOp::Frexp)
    }

    /// Lane-wise conversion to a floating-point type.
    #[inline]
    fn to_float<F: FloatScalar>(&self) -> Self::Rebind<F> {
        self.convert::<F>()
    }

    /// `self = self ⊕ rhs`, keeping the size of `self`.
    ///
    /// `rhs` must have the size of `self` or size 1; nothing is written when
    /// the operation fails.
    fn update(&mut self, op: BinaryOp, rhs: &Self) -> Result<()> {
        engine::update(op, self, rhs, |a, b| a.binary(b, op))
    }

    /// A write view restricted to the lanes where `mask` is true.
    ///
    /// ```
    /// use lanewise::{Array, Elementwise};
    ///
    /// let mut a = Array::new([1, 2, 3]);
    /// let mut view = a.masked(&Array::new([true, false, true]));
    /// view += 10;
    /// assert_eq!(a, Array::new([11, 2, 13]));
    /// ```
    #[inline]
    fn masked(&mut self, mask: &Self::Rebind<bool>) -> Masked<'_, Self> {
        Masked::new(self, mask)
    }
}

impl<A: ArrayMut + Value> Elementwise for A {}
