//! Horizontal reductions.
//!
//! Every fold starts from element 0 and applies its operator in index
//! order, so floating-point sums and products are reproducible. There is
//! no identity-element fallback: reducing zero elements is a
//! [`ArrayError::ZeroSizeArray`] failure.

use crate::broadcast::{lane, resolve};
use crate::engine::admit;
use crate::error::{raise, ArrayError, Result};
use crate::op::{BinaryOp, Operation, Reduction, TernaryOp};
use crate::traits::{ArrayRef, Value};

/// Fold `a` with `f`, starting from `a[0]`.
fn fold<A, F>(a: &A, op: Reduction, mut f: F) -> Result<A::Value>
where
    A: ArrayRef + ?Sized,
    F: FnMut(&A::Value, &A::Value) -> Result<A::Value>,
{
    admit::<Reduction, A::Value>(op)?;
    let n = a.size();
    if n == 0 {
        return Err(raise(ArrayError::ZeroSizeArray { op: op.name() }));
    }
    let mut acc = a.entry(0).clone();
    for i in 1..n {
        acc = f(&acc, a.entry(i))?;
    }
    Ok(acc)
}

/// Reductions of an array to a single element.
///
/// For nested arrays the result is itself an array: `hsum` of
/// `Array<Array<f32, 4>, 3>` adds the three inner arrays lane by lane.
///
/// ```
/// use lanewise::{DynArray, Horizontal};
///
/// let a = DynArray::from_slice(&[2, 3, 4]);
/// assert_eq!(a.hsum(), Ok(9));
/// assert_eq!(a.hprod(), Ok(24));
/// assert_eq!(a.hmax(), Ok(4));
///
/// let empty = DynArray::<i32>::zeros(0);
/// assert_eq!(empty.hsum().unwrap_err().to_string(), "hsum(): zero-sized array");
/// ```
pub trait Horizontal: ArrayRef {
    /// `a[0] + a[1] + ... + a[n-1]`, left to right.
    fn hsum(&self) -> Result<Self::Value> {
        fold(self, Reduction::Hsum, |acc, x| acc.binary(x, BinaryOp::Add))
    }

    /// `a[0] * a[1] * ... * a[n-1]`, left to right.
    fn hprod(&self) -> Result<Self::Value> {
        fold(self, Reduction::Hprod, |acc, x| acc.binary(x, BinaryOp::Mul))
    }

    fn hmin(&self) -> Result<Self::Value> {
        fold(self, Reduction::Hmin, |acc, x| acc.binary(x, BinaryOp::Min))
    }

    fn hmax(&self) -> Result<Self::Value> {
        fold(self, Reduction::Hmax, |acc, x| acc.binary(x, BinaryOp::Max))
    }

    /// Whether every lane of a mask is true.
    fn all(&self) -> Result<Self::Value> {
        fold(self, Reduction::All, |acc, x| acc.binary(x, BinaryOp::And))
    }

    /// Whether any lane of a mask is true.
    fn any(&self) -> Result<Self::Value> {
        fold(self, Reduction::Any, |acc, x| acc.binary(x, BinaryOp::Or))
    }

    /// Number of true lanes of a mask, as `u32`.
    fn count(&self) -> Result<<Self::Value as Value>::Rebind<u32>> {
        let op = Reduction::Count;
        admit::<Reduction, Self::Value>(op)?;
        let n = self.size();
        if n == 0 {
            return Err(raise(ArrayError::ZeroSizeArray { op: op.name() }));
        }
        let mut acc = self.entry(0).convert::<u32>();
        for i in 1..n {
            acc = acc.binary(&self.entry(i).convert::<u32>(), BinaryOp::Add)?;
        }
        Ok(acc)
    }

    /// `sum_i self[i] * rhs[i]`, accumulated in index order.
    ///
    /// The operands broadcast against each other. For nested float arrays
    /// each step is a multiply-add into the accumulator.
    fn dot(&self, rhs: &Self) -> Result<Self::Value> {
        let op = Reduction::Dot;
        admit::<Reduction, Self::Value>(op)?;
        let (sa, sb) = (self.size(), rhs.size());
        let sr = resolve(op.name(), &[sa, sb])?;
        if sr == 0 {
            return Err(raise(ArrayError::ZeroSizeArray { op: op.name() }));
        }
        let a = move |i| self.entry(lane(i, sa));
        let b = move |i| rhs.entry(lane(i, sb));
        let mut acc = a(0).binary(b(0), BinaryOp::Mul)?;
        let fused =
            <Self::Value as Value>::DEPTH > 0 && <Self::Value as Value>::CATEGORY.is_float();
        for i in 1..sr {
            acc = if fused {
                a(i).ternary(b(i), &acc, TernaryOp::Fmadd)?
            } else {
                acc.binary(&a(i).binary(b(i), BinaryOp::Mul)?, BinaryOp::Add)?
            };
        }
        Ok(acc)
    }

    /// First element whose mask lane is true, or `Value::zero()` when no
    /// lane is.
    ///
    /// Never fails. A size-1 operand broadcasts; when the sizes otherwise
    /// disagree only the positions both operands have are scanned.
    ///
    /// ```
    /// use lanewise::{Array, Horizontal};
    ///
    /// let a = Array::new([5, 6, 7]);
    /// assert_eq!(a.extract(&Array::new([false, true, true])), 6);
    /// assert_eq!(a.extract(&Array::new([false, false, false])), 0);
    /// ```
    fn extract<M: ArrayRef<Value = bool>>(&self, mask: &M) -> Self::Value {
        let (sa, sm) = (self.size(), mask.size());
        let n = if sa == 1 {
            sm
        } else if sm == 1 {
            sa
        } else {
            sa.min(sm)
        };
        (0..n)
            .find(|&i| *mask.entry(lane(i, sm)))
            .map_or_else(<Self::Value as Value>::zero, |i| self.entry(lane(i, sa)).clone())
    }
}

impl<A: ArrayRef + ?Sized> Horizontal for A {}

#[cfg(test)]
mod tests;
