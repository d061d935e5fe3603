use core::fmt;

/// Convenience alias for results of fallible array operations.
pub type Result<T> = core::result::Result<T, ArrayError>;

/// Operand sizes carried by a [`ArrayError::SizeMismatch`].
///
/// Holds up to four sizes inline so that errors stay `Copy` and need no
/// allocation. Displays the way the sizes are listed in messages:
/// `3 and 5`, `3, 5, and 7`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Sizes {
    len: usize,
    sizes: [usize; Sizes::CAPACITY],
}

impl Sizes {
    const CAPACITY: usize = 4;

    /// Collect the first (at most four) sizes of `sizes`.
    pub fn from_slice(sizes: &[usize]) -> Self {
        let len = sizes.len().min(Self::CAPACITY);
        let mut out = [0; Self::CAPACITY];
        out[..len].copy_from_slice(&sizes[..len]);
        Self { len, sizes: out }
    }

    /// The recorded sizes.
    pub fn as_slice(&self) -> &[usize] {
        &self.sizes[..self.len]
    }
}

impl fmt::Debug for Sizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for Sizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_slice() {
            [] => Ok(()),
            [a] => write!(f, "{a}"),
            [a, b] => write!(f, "{a} and {b}"),
            [init @ .., last] => {
                for s in init {
                    write!(f, "{s}, ")?;
                }
                write!(f, "and {last}")
            }
        }
    }
}

/// Errors raised by array operations.
///
/// Every failure is raised at the point of detection and is the sole
/// outcome of the call: no operation returns a partial result next to an
/// error.
///
/// ```
/// use lanewise::{ArrayError, DynArray, Elementwise};
///
/// let a = DynArray::from_slice(&[1, 2, 3]);
/// let b = DynArray::from_slice(&[1, 2, 3, 4, 5]);
/// let err = a.try_add(&b).unwrap_err();
/// assert!(matches!(err, ArrayError::SizeMismatch { op: "add", .. }));
/// assert_eq!(err.to_string(), "add(): mismatched input sizes (3 and 5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// The operation is not defined for the operand's element category.
    #[error("{op}(): invalid operand type")]
    InvalidOperand { op: &'static str },
    /// Operand sizes violate the broadcasting rule.
    #[error("{op}(): mismatched input sizes ({sizes})")]
    SizeMismatch { op: &'static str, sizes: Sizes },
    /// A reduction was attempted over zero elements.
    #[error("{op}(): zero-sized array")]
    ZeroSizeArray { op: &'static str },
    /// An index lies outside `[0, size)`.
    #[error("out of range access (tried to access index {index} in an array of size {size})")]
    OutOfRange { index: usize, size: usize },
}

impl ArrayError {
    /// Name of the operation that failed, if the error is tied to one.
    pub fn op(&self) -> Option<&'static str> {
        match *self {
            ArrayError::InvalidOperand { op }
            | ArrayError::SizeMismatch { op, .. }
            | ArrayError::ZeroSizeArray { op } => Some(op),
            ArrayError::OutOfRange { .. } => None,
        }
    }
}

/// Log an error at its point of detection and hand it back for returning.
#[inline]
pub(crate) fn raise(err: ArrayError) -> ArrayError {
    log::debug!("{err}");
    err
}

/// Shorthand for `Err(raise(ArrayError::InvalidOperand { op }))`.
#[inline]
pub(crate) fn invalid<T>(op: &'static str) -> Result<T> {
    Err(raise(ArrayError::InvalidOperand { op }))
}

/// Unwrap the result of an operator overload, panicking with the error's
/// message. Operators cannot return `Result`; the `try_*` methods can.
#[inline]
#[track_caller]
pub(crate) fn or_panic<T>(r: Result<T>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn sizes_display() {
        assert_eq!(Sizes::from_slice(&[4]).to_string(), "4");
        assert_eq!(Sizes::from_slice(&[3, 5]).to_string(), "3 and 5");
        assert_eq!(Sizes::from_slice(&[3, 5, 7]).to_string(), "3, 5, and 7");
    }

    #[test]
    fn sizes_truncate_to_capacity() {
        let s = Sizes::from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(s.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn messages() {
        let e = ArrayError::InvalidOperand { op: "sqrt" };
        assert_eq!(e.to_string(), "sqrt(): invalid operand type");
        assert_eq!(e.op(), Some("sqrt"));

        let e = ArrayError::ZeroSizeArray { op: "hsum" };
        assert_eq!(e.to_string(), "hsum(): zero-sized array");

        let e = ArrayError::OutOfRange { index: 7, size: 3 };
        assert_eq!(
            e.to_string(),
            "out of range access (tried to access index 7 in an array of size 3)"
        );
        assert_eq!(e.op(), None);
    }
}
