//! The broadcasting law.
//!
//! Given operand sizes `s_1..s_n` the result size is `s_r = max(s_i)`, and
//! every operand must have size `s_r` or `1`. A size-1 operand stands in
//! for every position. Elementwise ops, select, masked writes, gather,
//! scatter and dot all resolve their sizes through this module.

use crate::error::{raise, ArrayError, Result, Sizes};
use crate::traits::{ArrayRef, Size};

/// Resolve the result size of an operation over operands of `sizes`.
///
/// ```
/// use lanewise::broadcast::resolve;
///
/// assert_eq!(resolve("add", &[4, 1]), Ok(4));
/// assert_eq!(resolve("add", &[0, 0]), Ok(0));
/// assert!(resolve("add", &[3, 5]).is_err());
/// ```
pub fn resolve(op: &'static str, sizes: &[usize]) -> Result<usize> {
    let sr = sizes.iter().copied().max().unwrap_or(0);
    if sizes.iter().any(|&s| s != sr && s != 1) {
        return Err(raise(ArrayError::SizeMismatch {
            op,
            sizes: Sizes::from_slice(sizes),
        }));
    }
    Ok(sr)
}

/// Resolve the size of a result of array type `R`.
///
/// For a dynamic `R` this is [`resolve`]. For `R` fixed at `N` the result
/// size is `N` and the operands must broadcast to it; operands of the same
/// fixed type always do.
pub fn resolve_for<R: ArrayRef>(op: &'static str, sizes: &[usize]) -> Result<usize> {
    match R::SIZE {
        Size::Dynamic => resolve(op, sizes),
        Size::Fixed(n) => {
            if sizes.iter().any(|&s| s != n && s != 1) {
                return Err(raise(ArrayError::SizeMismatch {
                    op,
                    sizes: Sizes::from_slice(sizes),
                }));
            }
            Ok(n)
        }
    }
}

/// Resolve sizes for an in-place update of a target of size `target`.
///
/// The target cannot grow, so it must already have the resolved size.
pub fn resolve_in_place(op: &'static str, target: usize, sizes: &[usize]) -> Result<usize> {
    if sizes.iter().any(|&s| s != target && s != 1) {
        let mut all = [0; 4];
        let n = sizes.len().min(3);
        all[0] = target;
        all[1..=n].copy_from_slice(&sizes[..n]);
        return Err(raise(ArrayError::SizeMismatch {
            op,
            sizes: Sizes::from_slice(&all[..=n]),
        }));
    }
    Ok(target)
}

/// Position read from an operand of size `size` for result position `i`.
#[inline(always)]
pub fn lane(i: usize, size: usize) -> usize {
    if size > 1 {
        i
    } else {
        0
    }
}
