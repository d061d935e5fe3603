//! Operator descriptors.
//!
//! Every elementwise, comparison and reduction operation is named by a small
//! `Copy` enum. The enum carries the operation's public name (used in error
//! messages) and its admissibility predicate over [`Category`]; the generic
//! bodies in [`crate::engine`] and [`crate::reduce`] consult the predicate
//! once, before touching any element.

use crate::traits::Category;

/// Common interface of the operator enums.
pub trait Operation: Copy {
    /// Name used in error messages, e.g. `"add"`.
    fn name(self) -> &'static str;

    /// Whether the operation is defined for elements of category `c`.
    fn admits(self, c: Category) -> bool;
}

/// An operation defined for every category, known only by its name
/// (`select`, `gather`, `scatter`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Named(pub &'static str);

impl Operation for Named {
    fn name(self) -> &'static str {
        self.0
    }

    fn admits(self, _c: Category) -> bool {
        true
    }
}

/// One-operand elementwise operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    /// Logical negation for masks, bitwise complement for integers.
    Not,
    Abs,
    Sqrt,
    Floor,
    Ceil,
    Trunc,
    /// Round to nearest, ties to even.
    Round,
    Rcp,
    Rsqrt,
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    Asin,
    Acos,
    Atan,
    Exp,
    Exp2,
    Log,
    Log2,
    /// Shift left by an immediate amount.
    ShlImm(u32),
    /// Shift right by an immediate amount.
    ShrImm(u32),
}

impl Operation for UnaryOp {
    fn name(self) -> &'static str {
        match self {
            UnaryOp::Neg => "neg",
            UnaryOp::Not => "not",
            UnaryOp::Abs => "abs",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Floor => "floor",
            UnaryOp::Ceil => "ceil",
            UnaryOp::Trunc => "trunc",
            UnaryOp::Round => "round",
            UnaryOp::Rcp => "rcp",
            UnaryOp::Rsqrt => "rsqrt",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Csc => "csc",
            UnaryOp::Sec => "sec",
            UnaryOp::Cot => "cot",
            UnaryOp::Asin => "asin",
            UnaryOp::Acos => "acos",
            UnaryOp::Atan => "atan",
            UnaryOp::Exp => "exp",
            UnaryOp::Exp2 => "exp2",
            UnaryOp::Log => "log",
            UnaryOp::Log2 => "log2",
            UnaryOp::ShlImm(_) => "sl",
            UnaryOp::ShrImm(_) => "sr",
        }
    }

    fn admits(self, c: Category) -> bool {
        match self {
            UnaryOp::Neg | UnaryOp::Abs => c.is_arithmetic(),
            UnaryOp::Not => !c.is_float(),
            UnaryOp::ShlImm(_) | UnaryOp::ShrImm(_) => c.is_integral(),
            _ => c.is_float(),
        }
    }
}

/// One-operand operations producing two results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOp {
    /// `(sin x, cos x)`.
    SinCos,
    /// `(mantissa, exponent)` with the mantissa in `[0.5, 1)` and the
    /// exponent stored in the same float type.
    Frexp,
}

impl Operation for PairOp {
    fn name(self) -> &'static str {
        match self {
            PairOp::SinCos => "sincos",
            PairOp::Frexp => "frexp",
        }
    }

    fn admits(self, c: Category) -> bool {
        c.is_float()
    }
}

/// Two-operand elementwise operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Integer remainder.
    Rem,
    /// High half of the double-width integer product.
    Mulhi,
    Min,
    Max,
    And,
    Or,
    Xor,
    /// `a & !b`.
    AndNot,
    Shl,
    Shr,
    Atan2,
    /// `a * 2^b`, with `b` truncated to an integer exponent.
    Ldexp,
    Pow,
}

impl BinaryOp {
    /// Bit-level operations, the only ones that also accept a mask operand.
    pub fn is_bitwise(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Xor | BinaryOp::AndNot)
    }
}

impl Operation for BinaryOp {
    fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Rem => "mod",
            BinaryOp::Mulhi => "mulhi",
            BinaryOp::Min => "min",
            BinaryOp::Max => "max",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
            BinaryOp::AndNot => "andnot",
            BinaryOp::Shl => "sl",
            BinaryOp::Shr => "sr",
            BinaryOp::Atan2 => "atan2",
            BinaryOp::Ldexp => "ldexp",
            BinaryOp::Pow => "pow",
        }
    }

    fn admits(self, c: Category) -> bool {
        match self {
            BinaryOp::Add
            | BinaryOp::Sub
            | BinaryOp::Mul
            | BinaryOp::Div
            | BinaryOp::Min
            | BinaryOp::Max => c.is_arithmetic(),
            BinaryOp::Rem | BinaryOp::Mulhi | BinaryOp::Shl | BinaryOp::Shr => c.is_integral(),
            BinaryOp::And | BinaryOp::Or | BinaryOp::Xor | BinaryOp::AndNot => true,
            BinaryOp::Atan2 | BinaryOp::Ldexp | BinaryOp::Pow => c.is_float(),
        }
    }
}

/// Fused multiply-add family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TernaryOp {
    /// `a * b + c`
    Fmadd,
    /// `a * b - c`
    Fmsub,
    /// `-a * b + c`
    Fnmadd,
    /// `-a * b - c`
    Fnmsub,
}

impl Operation for TernaryOp {
    fn name(self) -> &'static str {
        match self {
            TernaryOp::Fmadd => "fmadd",
            TernaryOp::Fmsub => "fmsub",
            TernaryOp::Fnmadd => "fnmadd",
            TernaryOp::Fnmsub => "fnmsub",
        }
    }

    fn admits(self, c: Category) -> bool {
        c.is_float()
    }
}

/// Comparisons. All of them produce a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operation for CompareOp {
    fn name(self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Neq => "neq",
            CompareOp::Lt => "lt",
            CompareOp::Le => "le",
            CompareOp::Gt => "gt",
            CompareOp::Ge => "ge",
        }
    }

    fn admits(self, c: Category) -> bool {
        match self {
            CompareOp::Eq | CompareOp::Neq => true,
            _ => c.is_arithmetic(),
        }
    }
}

/// Rounding mode of the float-to-integer conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    Ceil,
    /// Nearest, ties to even.
    Round,
    Trunc,
}

impl Rounding {
    /// The float-to-float rounding applied before the integer cast.
    pub fn as_unary(self) -> UnaryOp {
        match self {
            Rounding::Floor => UnaryOp::Floor,
            Rounding::Ceil => UnaryOp::Ceil,
            Rounding::Round => UnaryOp::Round,
            Rounding::Trunc => UnaryOp::Trunc,
        }
    }
}

impl Operation for Rounding {
    fn name(self) -> &'static str {
        match self {
            Rounding::Floor => "floor2int",
            Rounding::Ceil => "ceil2int",
            Rounding::Round => "round2int",
            Rounding::Trunc => "trunc2int",
        }
    }

    fn admits(self, c: Category) -> bool {
        c.is_float()
    }
}

/// Horizontal reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Hsum,
    Hprod,
    Hmin,
    Hmax,
    All,
    Any,
    Count,
    Dot,
}

impl Operation for Reduction {
    fn name(self) -> &'static str {
        match self {
            Reduction::Hsum => "hsum",
            Reduction::Hprod => "hprod",
            Reduction::Hmin => "hmin",
            Reduction::Hmax => "hmax",
            Reduction::All => "all",
            Reduction::Any => "any",
            Reduction::Count => "count",
            Reduction::Dot => "dot",
        }
    }

    fn admits(self, c: Category) -> bool {
        match self {
            Reduction::All | Reduction::Any | Reduction::Count => c.is_mask(),
            _ => c.is_arithmetic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_ops_reject_masks() {
        assert!(BinaryOp::Add.admits(Category::Float));
        assert!(BinaryOp::Add.admits(Category::Integer));
        assert!(!BinaryOp::Add.admits(Category::Mask));
    }

    #[test]
    fn bit_ops_admit_everything() {
        for c in [Category::Float, Category::Integer, Category::Mask] {
            for op in [BinaryOp::And, BinaryOp::Or, BinaryOp::Xor, BinaryOp::AndNot] {
                assert!(op.admits(c), "{op:?} should admit {c:?}");
                assert!(op.is_bitwise());
            }
        }
        assert!(!BinaryOp::Mul.is_bitwise());
    }

    #[test]
    fn shifts_need_integers() {
        assert!(BinaryOp::Shl.admits(Category::Integer));
        assert!(!BinaryOp::Shl.admits(Category::Float));
        assert!(!UnaryOp::ShrImm(2).admits(Category::Mask));
    }

    #[test]
    fn transcendentals_need_floats() {
        for op in [UnaryOp::Sin, UnaryOp::Exp, UnaryOp::Log, UnaryOp::Rcp, UnaryOp::Rsqrt] {
            assert!(op.admits(Category::Float));
            assert!(!op.admits(Category::Integer));
        }
        assert!(BinaryOp::Pow.admits(Category::Float));
        assert!(!BinaryOp::Pow.admits(Category::Integer));
    }

    #[test]
    fn comparisons() {
        assert!(CompareOp::Eq.admits(Category::Mask));
        assert!(CompareOp::Neq.admits(Category::Mask));
        assert!(!CompareOp::Lt.admits(Category::Mask));
        assert!(CompareOp::Ge.admits(Category::Integer));
    }

    #[test]
    fn not_rejects_floats() {
        assert!(UnaryOp::Not.admits(Category::Mask));
        assert!(UnaryOp::Not.admits(Category::Integer));
        assert!(!UnaryOp::Not.admits(Category::Float));
    }

    #[test]
    fn reductions() {
        assert!(Reduction::All.admits(Category::Mask));
        assert!(!Reduction::All.admits(Category::Float));
        assert!(Reduction::Hsum.admits(Category::Integer));
        assert!(!Reduction::Hsum.admits(Category::Mask));
        assert_eq!(Rounding::Floor.name(), "floor2int");
        assert_eq!(Rounding::Ceil.as_unary(), UnaryOp::Ceil);
    }
}
