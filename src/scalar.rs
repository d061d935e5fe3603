//! Leaf implementations of [`Scalar`] and [`Value`] for the primitive types.
//!
//! The three macro families below are the only place where lane arithmetic
//! happens; everything above them is generic over [`Value`].

use num_traits::Float;

use crate::error::{invalid, Result};
use crate::op::{BinaryOp, CompareOp, Operation, PairOp, Rounding, TernaryOp, UnaryOp};
use crate::traits::{Category, Integral, Scalar, Value, Widened};

/// `Value` for a scalar: depth 0, ops forwarded to the `Scalar` lane ops,
/// a `None` from the lane op becomes `InvalidOperand`.
macro_rules! impl_scalar_value {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                type Scalar = $t;
                type Rebind<U: Scalar> = U;
                const DEPTH: usize = 0;

                #[inline]
                fn zero() -> Self {
                    <$t>::default()
                }

                #[inline]
                fn width(&self) -> usize {
                    1
                }

                #[inline]
                fn splat(s: $t) -> Self {
                    s
                }

                #[inline]
                fn entry_nd(&self, indices: &[usize]) -> &$t {
                    debug_assert!(indices.is_empty(), "entry_nd(): too many indices");
                    self
                }

                #[inline]
                fn entry_nd_mut(&mut self, indices: &[usize]) -> &mut $t {
                    debug_assert!(indices.is_empty(), "entry_nd(): too many indices");
                    self
                }

                #[inline]
                fn unary(&self, op: UnaryOp) -> Result<Self> {
                    Scalar::unary(*self, op).map_or_else(|| invalid(op.name()), Ok)
                }

                #[inline]
                fn unary_pair(&self, op: PairOp) -> Result<(Self, Self)> {
                    Scalar::unary_pair(*self, op).map_or_else(|| invalid(op.name()), Ok)
                }

                #[inline]
                fn binary(&self, rhs: &Self, op: BinaryOp) -> Result<Self> {
                    Scalar::binary(*self, *rhs, op).map_or_else(|| invalid(op.name()), Ok)
                }

                #[inline]
                fn bitop_mask(&self, mask: &bool, op: BinaryOp) -> Result<Self> {
                    Scalar::bitop_mask(*self, *mask, op).map_or_else(|| invalid(op.name()), Ok)
                }

                #[inline]
                fn ternary(&self, b: &Self, c: &Self, op: TernaryOp) -> Result<Self> {
                    Scalar::ternary(*self, *b, *c, op).map_or_else(|| invalid(op.name()), Ok)
                }

                #[inline]
                fn compare(&self, rhs: &Self, op: CompareOp) -> Result<bool> {
                    Scalar::compare(*self, *rhs, op).map_or_else(|| invalid(op.name()), Ok)
                }

                #[inline]
                fn select(mask: &bool, t: &Self, f: &Self) -> Result<Self> {
                    Ok(if *mask { *t } else { *f })
                }

                #[inline]
                fn round_to_int<I: Integral>(&self, mode: Rounding) -> Result<I> {
                    if !mode.admits(<$t as Scalar>::CATEGORY) {
                        return invalid(mode.name());
                    }
                    match Scalar::unary(*self, mode.as_unary()) {
                        Some(r) => Ok(r.cast::<I>()),
                        None => invalid(mode.name()),
                    }
                }

                #[inline]
                fn convert<U: Scalar>(&self) -> U {
                    self.cast::<U>()
                }
            }
        )*
    };
}

impl_scalar_value!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! impl_float_scalar {
    ($($t:ident: $bits:ty, $rint:path, $frexp:path, $ldexp:path);*) => {
        $(
            impl Scalar for $t {
                const CATEGORY: Category = Category::Float;

                fn unary(self, op: UnaryOp) -> Option<Self> {
                    let x = self;
                    Some(match op {
                        UnaryOp::Neg => -x,
                        UnaryOp::Abs => Float::abs(x),
                        UnaryOp::Sqrt => Float::sqrt(x),
                        UnaryOp::Floor => Float::floor(x),
                        UnaryOp::Ceil => Float::ceil(x),
                        UnaryOp::Trunc => Float::trunc(x),
                        UnaryOp::Round => $rint(x),
                        UnaryOp::Rcp => Float::recip(x),
                        UnaryOp::Rsqrt => Float::recip(Float::sqrt(x)),
                        UnaryOp::Sin => Float::sin(x),
                        UnaryOp::Cos => Float::cos(x),
                        UnaryOp::Tan => Float::tan(x),
                        UnaryOp::Csc => Float::recip(Float::sin(x)),
                        UnaryOp::Sec => Float::recip(Float::cos(x)),
                        UnaryOp::Cot => Float::recip(Float::tan(x)),
                        UnaryOp::Asin => Float::asin(x),
                        UnaryOp::Acos => Float::acos(x),
                        UnaryOp::Atan => Float::atan(x),
                        UnaryOp::Exp => Float::exp(x),
                        UnaryOp::Exp2 => Float::exp2(x),
                        UnaryOp::Log => Float::ln(x),
                        UnaryOp::Log2 => Float::log2(x),
                        UnaryOp::Not | UnaryOp::ShlImm(_) | UnaryOp::ShrImm(_) => return None,
                    })
                }

                fn unary_pair(self, op: PairOp) -> Option<(Self, Self)> {
                    Some(match op {
                        PairOp::SinCos => Float::sin_cos(self),
                        PairOp::Frexp => {
                            let (m, e) = $frexp(self);
                            (m, e as $t)
                        }
                    })
                }

                fn binary(self, rhs: Self, op: BinaryOp) -> Option<Self> {
                    let (a, b) = (self, rhs);
                    Some(match op {
                        BinaryOp::Add => a + b,
                        BinaryOp::Sub => a - b,
                        BinaryOp::Mul => a * b,
                        BinaryOp::Div => a / b,
                        BinaryOp::Min => Float::min(a, b),
                        BinaryOp::Max => Float::max(a, b),
                        BinaryOp::And => <$t>::from_bits(a.to_bits() & b.to_bits()),
                        BinaryOp::Or => <$t>::from_bits(a.to_bits() | b.to_bits()),
                        BinaryOp::Xor => <$t>::from_bits(a.to_bits() ^ b.to_bits()),
                        BinaryOp::AndNot => <$t>::from_bits(a.to_bits() & !b.to_bits()),
                        BinaryOp::Atan2 => Float::atan2(a, b),
                        BinaryOp::Ldexp => $ldexp(a, b as i32),
                        BinaryOp::Pow => Float::powf(a, b),
                        BinaryOp::Rem | BinaryOp::Mulhi | BinaryOp::Shl | BinaryOp::Shr => {
                            return None
                        }
                    })
                }

                fn bitop_mask(self, mask: bool, op: BinaryOp) -> Option<Self> {
                    let m: $bits = if mask { !0 } else { 0 };
                    let x = self.to_bits();
                    Some(<$t>::from_bits(match op {
                        BinaryOp::And => x & m,
                        BinaryOp::Or => x | m,
                        BinaryOp::Xor => x ^ m,
                        BinaryOp::AndNot => x & !m,
                        _ => return None,
                    }))
                }

                // Plain `a * b + c`: a fused instruction only pays off on
                // vector-capable element types.
                fn ternary(self, b: Self, c: Self, op: TernaryOp) -> Option<Self> {
                    let a = self;
                    Some(match op {
                        TernaryOp::Fmadd => a * b + c,
                        TernaryOp::Fmsub => a * b - c,
                        TernaryOp::Fnmadd => -a * b + c,
                        TernaryOp::Fnmsub => -a * b - c,
                    })
                }

                fn compare(self, rhs: Self, op: CompareOp) -> Option<bool> {
                    Some(compare_ordered(self, rhs, op))
                }

                #[inline]
                fn widen(self) -> Widened {
                    Widened::Float(self as f64)
                }

                #[inline]
                fn narrow(w: Widened) -> Self {
                    match w {
                        Widened::Int(v) => v as $t,
                        Widened::Float(v) => v as $t,
                        Widened::Bool(v) => u8::from(v) as $t,
                    }
                }
            }
        )*
    };
}

impl_float_scalar!(
    f32: u32, libm::rintf, libm::frexpf, libm::ldexpf;
    f64: u64, libm::rint, libm::frexp, libm::ldexp
);

macro_rules! impl_int_scalar {
    ($($t:ident: $wide:ty, $abs:expr);*) => {
        $(
            impl Scalar for $t {
                const CATEGORY: Category = Category::Integer;

                fn unary(self, op: UnaryOp) -> Option<Self> {
                    let x = self;
                    Some(match op {
                        UnaryOp::Neg => x.wrapping_neg(),
                        UnaryOp::Not => !x,
                        UnaryOp::Abs => $abs(x),
                        UnaryOp::ShlImm(n) => x.wrapping_shl(n),
                        UnaryOp::ShrImm(n) => x.wrapping_shr(n),
                        _ => return None,
                    })
                }

                fn unary_pair(self, _op: PairOp) -> Option<(Self, Self)> {
                    None
                }

                fn binary(self, rhs: Self, op: BinaryOp) -> Option<Self> {
                    let (a, b) = (self, rhs);
                    Some(match op {
                        BinaryOp::Add => a.wrapping_add(b),
                        BinaryOp::Sub => a.wrapping_sub(b),
                        BinaryOp::Mul => a.wrapping_mul(b),
                        BinaryOp::Div => a.wrapping_div(b),
                        BinaryOp::Rem => a.wrapping_rem(b),
                        BinaryOp::Mulhi => {
                            ((a as $wide * b as $wide) >> <$t>::BITS) as $t
                        }
                        BinaryOp::Min => Ord::min(a, b),
                        BinaryOp::Max => Ord::max(a, b),
                        BinaryOp::And => a & b,
                        BinaryOp::Or => a | b,
                        BinaryOp::Xor => a ^ b,
                        BinaryOp::AndNot => a & !b,
                        BinaryOp::Shl => a.wrapping_shl(b as u32),
                        BinaryOp::Shr => a.wrapping_shr(b as u32),
                        BinaryOp::Atan2 | BinaryOp::Ldexp | BinaryOp::Pow => return None,
                    })
                }

                fn bitop_mask(self, mask: bool, op: BinaryOp) -> Option<Self> {
                    let m: $t = if mask { !0 } else { 0 };
                    Some(match op {
                        BinaryOp::And => self & m,
                        BinaryOp::Or => self | m,
                        BinaryOp::Xor => self ^ m,
                        BinaryOp::AndNot => self & !m,
                        _ => return None,
                    })
                }

                fn ternary(self, _b: Self, _c: Self, _op: TernaryOp) -> Option<Self> {
                    None
                }

                fn compare(self, rhs: Self, op: CompareOp) -> Option<bool> {
                    Some(compare_ordered(self, rhs, op))
                }

                #[inline]
                fn widen(self) -> Widened {
                    Widened::Int(self as i128)
                }

                #[inline]
                fn narrow(w: Widened) -> Self {
                    match w {
                        Widened::Int(v) => v as $t,
                        Widened::Float(v) => v as $t,
                        Widened::Bool(v) => <$t>::from(v),
                    }
                }
            }
        )*
    };
}

impl_int_scalar!(
    i8: i16, |x: i8| x.wrapping_abs();
    i16: i32, |x: i16| x.wrapping_abs();
    i32: i64, |x: i32| x.wrapping_abs();
    i64: i128, |x: i64| x.wrapping_abs();
    u8: u16, |x: u8| x;
    u16: u32, |x: u16| x;
    u32: u64, |x: u32| x;
    u64: u128, |x: u64| x
);

impl Scalar for bool {
    const CATEGORY: Category = Category::Mask;

    fn unary(self, op: UnaryOp) -> Option<Self> {
        match op {
            UnaryOp::Not => Some(!self),
            _ => None,
        }
    }

    fn unary_pair(self, _op: PairOp) -> Option<(Self, Self)> {
        None
    }

    fn binary(self, rhs: Self, op: BinaryOp) -> Option<Self> {
        Scalar::bitop_mask(self, rhs, op)
    }

    fn bitop_mask(self, mask: bool, op: BinaryOp) -> Option<Self> {
        Some(match op {
            BinaryOp::And => self && mask,
            BinaryOp::Or => self || mask,
            BinaryOp::Xor => self != mask,
            BinaryOp::AndNot => self && !mask,
            _ => return None,
        })
    }

    fn ternary(self, _b: Self, _c: Self, _op: TernaryOp) -> Option<Self> {
        None
    }

    fn compare(self, rhs: Self, op: CompareOp) -> Option<bool> {
        match op {
            CompareOp::Eq => Some(self == rhs),
            CompareOp::Neq => Some(self != rhs),
            _ => None,
        }
    }

    #[inline]
    fn widen(self) -> Widened {
        Widened::Bool(self)
    }

    #[inline]
    fn narrow(w: Widened) -> Self {
        match w {
            Widened::Int(v) => v != 0,
            Widened::Float(v) => v != 0.0,
            Widened::Bool(v) => v,
        }
    }
}

#[inline]
fn compare_ordered<T: PartialOrd>(a: T, b: T, op: CompareOp) -> bool {
    match op {
        CompareOp::Eq => a == b,
        CompareOp::Neq => a != b,
        CompareOp::Lt => a < b,
        CompareOp::Le => a <= b,
        CompareOp::Gt => a > b,
        CompareOp::Ge => a >= b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArrayError;

    #[test]
    fn float_lane_ops() {
        assert_eq!(Scalar::binary(1.5_f64, 2.0, BinaryOp::Add), Some(3.5));
        assert_eq!(Scalar::unary(4.0_f32, UnaryOp::Rsqrt), Some(0.5));
        assert_eq!(Scalar::unary(2.5_f64, UnaryOp::Round), Some(2.0));
        assert_eq!(Scalar::unary(3.5_f64, UnaryOp::Round), Some(4.0));
        assert_eq!(Scalar::binary(3.0_f64, 2.0, BinaryOp::Ldexp), Some(12.0));
        assert_eq!(Scalar::binary(3.0_f64, 2.0, BinaryOp::Rem), None);
        assert_eq!(Scalar::unary_pair(8.0_f64, PairOp::Frexp), Some((0.5, 4.0)));
    }

    #[test]
    fn float_bit_ops_with_mask() {
        assert_eq!(Scalar::bitop_mask(2.5_f32, true, BinaryOp::And), Some(2.5));
        assert_eq!(Scalar::bitop_mask(2.5_f32, false, BinaryOp::And), Some(0.0));
        assert_eq!(Scalar::bitop_mask(2.5_f32, true, BinaryOp::AndNot), Some(0.0));
        assert!(Scalar::bitop_mask(2.5_f32, true, BinaryOp::Or).unwrap().is_nan());
        assert_eq!(Scalar::bitop_mask(2.5_f32, true, BinaryOp::Add), None);
    }

    #[test]
    fn fmadd_is_unfused_for_scalars() {
        let (a, b, c) = (0.1_f64, 10.0, -1.0);
        assert_eq!(Scalar::ternary(a, b, c, TernaryOp::Fmadd), Some(a * b + c));
        assert_eq!(Scalar::ternary(a, b, c, TernaryOp::Fnmsub), Some(-a * b - c));
    }

    #[test]
    fn int_lane_ops() {
        assert_eq!(Scalar::binary(7_i32, 2, BinaryOp::Rem), Some(1));
        assert_eq!(Scalar::binary(-8_i32, 1, BinaryOp::Shr), Some(-4));
        assert_eq!(Scalar::binary(0xF0_u8, 0x3C, BinaryOp::AndNot), Some(0xC0));
        assert_eq!(Scalar::binary(u32::MAX, 2, BinaryOp::Mulhi), Some(1));
        assert_eq!(Scalar::binary(-3_i16, 4, BinaryOp::Mulhi), Some(-1));
        assert_eq!(Scalar::unary(-5_i8, UnaryOp::Abs), Some(5));
        assert_eq!(Scalar::unary(5_u8, UnaryOp::ShlImm(1)), Some(10));
        assert_eq!(Scalar::unary(5_u8, UnaryOp::Sqrt), None);
        assert_eq!(Scalar::bitop_mask(0x5A_u8, false, BinaryOp::Or), Some(0x5A));
        assert_eq!(Scalar::bitop_mask(0x5A_u8, true, BinaryOp::Xor), Some(0xA5));
    }

    #[test]
    fn mask_lane_ops() {
        assert_eq!(Scalar::binary(true, false, BinaryOp::Or), Some(true));
        assert_eq!(Scalar::binary(true, true, BinaryOp::Xor), Some(false));
        assert_eq!(Scalar::binary(true, true, BinaryOp::Add), None);
        assert_eq!(Scalar::compare(true, false, CompareOp::Neq), Some(true));
        assert_eq!(Scalar::compare(true, false, CompareOp::Lt), None);
        assert_eq!(Scalar::unary(true, UnaryOp::Not), Some(false));
    }

    #[test]
    fn scalar_values_report_named_errors() {
        let err = Value::binary(&true, &false, BinaryOp::Mul).unwrap_err();
        assert_eq!(err, ArrayError::InvalidOperand { op: "mul" });

        let err = Value::round_to_int::<i32>(&3_i32, Rounding::Floor).unwrap_err();
        assert_eq!(err, ArrayError::InvalidOperand { op: "floor2int" });

        assert_eq!(Value::round_to_int::<i32>(&-2.5_f32, Rounding::Floor), Ok(-3));
        assert_eq!(Value::round_to_int::<i32>(&-2.5_f32, Rounding::Ceil), Ok(-2));
        assert_eq!(Value::round_to_int::<i32>(&-2.5_f32, Rounding::Trunc), Ok(-2));
        assert_eq!(Value::round_to_int::<i32>(&-2.5_f32, Rounding::Round), Ok(-2));
    }

    #[test]
    fn rebind_on_scalars() {
        fn to_int<V: Value, I: Integral>(v: &V) -> Result<V::Rebind<I>> {
            v.round_to_int::<I>(Rounding::Trunc)
        }

        let m: <f32 as Value>::Rebind<bool> = Value::compare(&1.0_f32, &2.0, CompareOp::Lt).unwrap();
        assert!(m);
        let c: <bool as Value>::Rebind<u32> = Value::convert::<u32>(&true);
        assert_eq!(c, 1_u32);
        let i: <f64 as Value>::Rebind<i16> = to_int::<f64, i16>(&-7.9).unwrap();
        assert_eq!(i, -7_i16);
        assert_eq!(<<u8 as Value>::Rebind<f32> as Value>::DEPTH, 0);
    }

    #[test]
    fn scalar_select() {
        assert_eq!(<f32 as Value>::select(&true, &1.0, &2.0), Ok(1.0));
        assert_eq!(<f32 as Value>::select(&false, &1.0, &2.0), Ok(2.0));
    }
}
