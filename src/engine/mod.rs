//! Generic bodies of the elementwise operations.
//!
//! Every unary, binary and ternary operation runs the same shape:
//!
//! 1. check the operation against the first operand's [`Category`],
//! 2. resolve the result size through [`crate::broadcast`],
//! 3. allocate the result with [`ArrayMut::empty`],
//! 4. for each position `i` read every operand at `i` (or at `0` when the
//!    operand has size 1), apply the lane operation, store at `i`.
//!
//! The lane operation is a closure; for nested arrays it recurses through
//! [`Value`], so the same body serves every nesting depth.
//!
//! [`Category`]: crate::traits::Category

use crate::broadcast::{lane, resolve_for, resolve_in_place};
use crate::error::{invalid, Result};
use crate::op::Operation;
use crate::traits::{ArrayMut, ArrayRef, Value};

/// Fail with `InvalidOperand` unless `op` is defined for `V`'s category.
#[inline]
pub(crate) fn admit<O: Operation, V: Value>(op: O) -> Result<()> {
    if op.admits(V::CATEGORY) {
        Ok(())
    } else {
        invalid(op.name())
    }
}

/// `out[i] = f(a[i])`.
pub fn map_unary<A, R, O, F>(op: O, a: &A, mut f: F) -> Result<R>
where
    A: ArrayRef,
    R: ArrayMut,
    O: Operation,
    F: FnMut(&A::Value) -> Result<R::Value>,
{
    admit::<O, A::Value>(op)?;
    let sa = a.size();
    let sr = resolve_for::<R>(op.name(), &[sa])?;
    let mut out = R::empty(sr);
    for i in 0..sr {
        *out.entry_mut(i) = f(a.entry(lane(i, sa)))?;
    }
    Ok(out)
}

/// `(out0[i], out1[i]) = f(a[i])`.
pub fn map_unary_pair<A, R, O, F>(op: O, a: &A, mut f: F) -> Result<(R, R)>
where
    A: ArrayRef,
    R: ArrayMut,
    O: Operation,
    F: FnMut(&A::Value) -> Result<(R::Value, R::Value)>,
{
    admit::<O, A::Value>(op)?;
    let sa = a.size();
    let sr = resolve_for::<R>(op.name(), &[sa])?;
    let (mut out0, mut out1) = (R::empty(sr), R::empty(sr));
    for i in 0..sr {
        let (x, y) = f(a.entry(lane(i, sa)))?;
        *out0.entry_mut(i) = x;
        *out1.entry_mut(i) = y;
    }
    Ok((out0, out1))
}

/// `out[i] = f(a[i], b[i])`, admissibility decided by `a`'s category.
pub fn map_binary<A, B, R, O, F>(op: O, a: &A, b: &B, mut f: F) -> Result<R>
where
    A: ArrayRef,
    B: ArrayRef,
    R: ArrayMut,
    O: Operation,
    F: FnMut(&A::Value, &B::Value) -> Result<R::Value>,
{
    admit::<O, A::Value>(op)?;
    let (sa, sb) = (a.size(), b.size());
    let sr = resolve_for::<R>(op.name(), &[sa, sb])?;
    let mut out = R::empty(sr);
    for i in 0..sr {
        *out.entry_mut(i) = f(a.entry(lane(i, sa)), b.entry(lane(i, sb)))?;
    }
    Ok(out)
}

/// `out[i] = f(a[i], b[i], c[i])`, admissibility decided by `a`'s category.
pub fn map_ternary<A, B, C, R, O, F>(op: O, a: &A, b: &B, c: &C, mut f: F) -> Result<R>
where
    A: ArrayRef,
    B: ArrayRef,
    C: ArrayRef,
    R: ArrayMut,
    O: Operation,
    F: FnMut(&A::Value, &B::Value, &C::Value) -> Result<R::Value>,
{
    admit::<O, A::Value>(op)?;
    let (sa, sb, sc) = (a.size(), b.size(), c.size());
    let sr = resolve_for::<R>(op.name(), &[sa, sb, sc])?;
    let mut out = R::empty(sr);
    for i in 0..sr {
        *out.entry_mut(i) = f(
            a.entry(lane(i, sa)),
            b.entry(lane(i, sb)),
            c.entry(lane(i, sc)),
        )?;
    }
    Ok(out)
}

/// `target[i] = f(target[i], b[i])`.
///
/// The target keeps its size: `b` must match it or have size 1. The new
/// contents are computed in full before `target` is replaced, so a failure
/// part way leaves `target` untouched.
pub fn update<A, B, O, F>(op: O, target: &mut A, b: &B, mut f: F) -> Result<()>
where
    A: ArrayMut,
    B: ArrayRef,
    O: Operation,
    F: FnMut(&A::Value, &B::Value) -> Result<A::Value>,
{
    admit::<O, A::Value>(op)?;
    let (st, sb) = (target.size(), b.size());
    let sr = resolve_in_place(op.name(), st, &[sb])?;
    let mut out = A::empty(sr);
    for i in 0..sr {
        *out.entry_mut(i) = f(target.entry(i), b.entry(lane(i, sb)))?;
    }
    *target = out;
    Ok(())
}
