//! Indexed memory access: gather, scatter, scatter-add, load and store.
//!
//! The external memory is a slice of array elements. Index and mask arrays
//! take part in the broadcasting law together with the value operand. All
//! offsets are validated before anything is written, so a failed scatter
//! leaves the target unchanged.
//!
//! The `PERMUTE` const parameter tells the caller's backend that the
//! active indices form a bijection. It does not change results here; it is
//! logged at `trace` level, and in debug builds a permuting scatter checks
//! that no offset repeats.

use crate::broadcast::{lane, resolve, resolve_for};
use crate::error::{invalid, raise, ArrayError, Result};
use crate::op::BinaryOp;
use crate::traits::{ArrayMut, ArrayRef, Integral, Size, Value};

/// Offset for lane `i`, checked against `len`.
///
/// Negative or unrepresentable indices are reported as `usize::MAX`.
#[inline]
fn offset<I>(index: &I, i: usize, len: usize) -> Result<usize>
where
    I: ArrayRef,
    I::Value: Integral,
{
    let o = index
        .entry(lane(i, index.size()))
        .to_offset()
        .unwrap_or(usize::MAX);
    if o >= len {
        return Err(raise(ArrayError::OutOfRange {
            index: o,
            size: len,
        }));
    }
    Ok(o)
}

#[inline]
fn active<M: ArrayRef<Value = bool>>(mask: &M, i: usize) -> bool {
    *mask.entry(lane(i, mask.size()))
}

/// Validate every active offset of a scatter of `n` lanes into `len`
/// elements.
fn check_offsets<const PERMUTE: bool, I, M>(
    index: &I,
    mask: &M,
    n: usize,
    len: usize,
) -> Result<()>
where
    I: ArrayRef,
    I::Value: Integral,
    M: ArrayRef<Value = bool>,
{
    for i in (0..n).filter(|&i| active(mask, i)) {
        let o = offset(index, i, len)?;
        if cfg!(debug_assertions) && PERMUTE {
            let repeated = (0..i)
                .filter(|&j| active(mask, j))
                .any(|j| offset(index, j, len) == Ok(o));
            debug_assert!(
                !repeated,
                "scatter(): permute hint given but offset {o} is written twice"
            );
        }
    }
    Ok(())
}

/// Read `source[index[i]]` into position `i` wherever `mask[i]` is true.
///
/// Masked-off positions hold `Value::zero()`. The result size is resolved
/// from the index and mask sizes.
///
/// ```
/// use lanewise::{gather, DynArray};
///
/// let source = [10, 20, 30, 40];
/// let index = DynArray::from_slice(&[2_u32, 0]);
/// let r: DynArray<i32> =
///     gather::<false, _, _, _>(&source[..], &index, &DynArray::from_slice(&[true])).unwrap();
/// assert_eq!(r.as_slice(), &[30, 10]);
///
/// let r: DynArray<i32> =
///     gather::<false, _, _, _>(&source[..], &index, &DynArray::from_slice(&[false, true])).unwrap();
/// assert_eq!(r.as_slice(), &[0, 10]);
/// ```
pub fn gather<const PERMUTE: bool, A, I, M>(
    source: &[A::Value],
    index: &I,
    mask: &M,
) -> Result<A>
where
    A: ArrayMut,
    I: ArrayRef,
    I::Value: Integral,
    M: ArrayRef<Value = bool>,
{
    let sr = resolve_for::<A>("gather", &[index.size(), mask.size()])?;
    log::trace!("gather(): {sr} lanes, permute = {PERMUTE}");
    let mut out = A::empty(sr);
    for i in (0..sr).filter(|&i| active(mask, i)) {
        let o = offset(index, i, source.len())?;
        *out.entry_mut(i) = source[o].clone();
    }
    Ok(out)
}

/// Write `values[i]` to `target[index[i]]` wherever `mask[i]` is true.
///
/// Writing one offset from two active lanes is the caller's error: which
/// value lands there is unspecified.
///
/// ```
/// use lanewise::{scatter, Array};
///
/// let mut target = [0; 4];
/// let values = Array::new([7, 8, 9]);
/// let index = Array::new([3_i32, 1, 0]);
/// scatter::<true, _, _, _>(&mut target[..], &values, &index, &Array::new([true, true, false])).unwrap();
/// assert_eq!(target, [0, 8, 0, 7]);
/// ```
pub fn scatter<const PERMUTE: bool, A, I, M>(
    target: &mut [A::Value],
    values: &A,
    index: &I,
    mask: &M,
) -> Result<()>
where
    A: ArrayRef,
    I: ArrayRef,
    I::Value: Integral,
    M: ArrayRef<Value = bool>,
{
    let sv = values.size();
    let sr = resolve("scatter", &[sv, index.size(), mask.size()])?;
    log::trace!("scatter(): {sr} lanes, permute = {PERMUTE}");
    check_offsets::<PERMUTE, I, M>(index, mask, sr, target.len())?;
    for i in (0..sr).filter(|&i| active(mask, i)) {
        let o = offset(index, i, target.len())?;
        target[o] = values.entry(lane(i, sv)).clone();
    }
    Ok(())
}

/// Add `values[i]` to `target[index[i]]` wherever `mask[i]` is true.
///
/// Lanes sharing an offset accumulate in index order.
///
/// ```
/// use lanewise::{scatter_add, DynArray};
///
/// let mut target = [0, 0];
/// let values = DynArray::from_slice(&[5, 3, 7]);
/// let index = DynArray::from_slice(&[0_u8, 0, 1]);
/// scatter_add(&mut target[..], &values, &index, &DynArray::from_slice(&[true, true, true])).unwrap();
/// assert_eq!(target, [8, 7]);
/// ```
pub fn scatter_add<A, I, M>(
    target: &mut [A::Value],
    values: &A,
    index: &I,
    mask: &M,
) -> Result<()>
where
    A: ArrayRef,
    I: ArrayRef,
    I::Value: Integral,
    M: ArrayRef<Value = bool>,
{
    if !<A::Value as Value>::CATEGORY.is_arithmetic() {
        return invalid("scatter_add");
    }
    let sv = values.size();
    let sr = resolve("scatter_add", &[sv, index.size(), mask.size()])?;
    check_offsets::<false, I, M>(index, mask, sr, target.len())?;
    for i in (0..sr).filter(|&i| active(mask, i)) {
        let o = offset(index, i, target.len())?;
        target[o] = target[o].binary(values.entry(lane(i, sv)), BinaryOp::Add)?;
    }
    Ok(())
}

/// Copy consecutive elements of `src` into a new array.
///
/// A fixed-size array reads its first `N` elements, a dynamic array reads
/// the whole slice.
///
/// ```
/// use lanewise::{load, Array};
///
/// let a: Array<f32, 2> = load(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(a, Array::new([1.0, 2.0]));
/// assert!(load::<Array<f32, 4>>(&[1.0, 2.0, 3.0]).is_err());
/// ```
pub fn load<A: ArrayMut>(src: &[A::Value]) -> Result<A> {
    let n = match A::SIZE {
        Size::Fixed(n) => n,
        Size::Dynamic => src.len(),
    };
    if n > src.len() {
        return Err(raise(ArrayError::OutOfRange {
            index: n - 1,
            size: src.len(),
        }));
    }
    let mut out = A::empty(n);
    for (i, v) in src[..n].iter().enumerate() {
        *out.entry_mut(i) = v.clone();
    }
    Ok(out)
}

/// Copy the elements of `values` to the front of `dst`.
pub fn store<A: ArrayRef>(values: &A, dst: &mut [A::Value]) -> Result<()> {
    let n = values.size();
    if n > dst.len() {
        return Err(raise(ArrayError::OutOfRange {
            index: n - 1,
            size: dst.len(),
        }));
    }
    for (i, d) in dst[..n].iter_mut().enumerate() {
        *d = values.entry(i).clone();
    }
    Ok(())
}
