//! # lanewise
//!
//! Elementwise and horizontal operations over nested, fixed- or
//! dynamically-sized numeric arrays, no-std compatible. The same operation
//! gives the same answer, and fails with the same error, whether the array
//! holds one element, `N` compile-time elements or a runtime count, and
//! whether its elements are scalars or arrays themselves.
//!
//! ## Quick start
//!
//! ```
//! use lanewise::{select, Array, DynArray, Elementwise, Horizontal};
//!
//! // Fixed-size arrays, nested.
//! let p = Array::new([Array::new([1.0_f32, 2.0]), Array::new([3.0, 4.0])]);
//! let q = p + p;
//! assert_eq!(q[1][0], 6.0);
//!
//! // Dynamic arrays broadcast size-1 operands.
//! let a = DynArray::from_slice(&[1, 2, 3]);
//! let b = &a * &DynArray::from_slice(&[10]);
//! assert_eq!(b.hsum(), Ok(60));
//!
//! // Masks come from comparisons and drive select and masked writes.
//! let m = a.cmp_gt(&DynArray::from_slice(&[1])).unwrap();
//! assert_eq!(select(&m, &a, &b).unwrap().as_slice(), &[10, 2, 3]);
//! ```
//!
//! ## Modules
//!
//! - [`array`]: Fixed-size `Array<T, N>`, stack-allocated `[T; N]`
//!   storage. Operators, shuffles and type aliases.
//!
//! - [`dynarray`]: Heap-allocated `DynArray<T>` with a runtime element
//!   count (requires `alloc`, included with `std`).
//!
//! - [`broadcast`]: The broadcasting law every multi-operand operation
//!   resolves its size with.
//!
//! - [`engine`]: Generic unary/binary/ternary bodies the array types run
//!   their operations through. [`Elementwise`] names every operation as a
//!   fallible method.
//!
//! - [`reduce`]: [`Horizontal`] reductions: `hsum`, `hprod`, `hmin`,
//!   `hmax`, `all`, `any`, `count`, `dot`, `extract`.
//!
//! - [`masked`]: [`Masked`] write views restricting compound assignment to
//!   the lanes where a mask is true.
//!
//! - [`gather`]: [`gather()`], [`scatter()`], [`scatter_add()`], [`load()`],
//!   [`store()`] between arrays and slices.
//!
//! - [`traits`]: The element and array interfaces:
//!   - [`Scalar`]: leaf element types with their lane operations
//!   - [`Value`]: scalars and arrays alike, recursively
//!   - [`ArrayRef`] / [`ArrayMut`]: size, entry access and allocation
//!
//! ## Errors
//!
//! Fallible operations return [`Result`] with an [`ArrayError`]. Operator
//! overloads cannot return one and panic with the error's message instead.
//! Every raised error is logged at `debug` level through the `log` facade.
//!
//! ## Bounds checks
//!
//! `array[i]` checks `i` in debug builds only and panics with an
//! out-of-range message. Release builds leave the check out: an
//! out-of-range index then panics inside the underlying storage.
//! [`ArrayRef::checked_entry`] always checks and returns the error.
//!
//! ## Cargo features
//!
//! | Feature               | Default  | Description |
//! |-----------------------|----------|-------------|
//! | `std`                 | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` |
//! | `alloc`               | via std  | `DynArray` (heap-allocated, runtime-sized) |
//! | `disable-range-check` | no       | Drop the debug-build bounds check on `array[i]` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

pub mod array;
pub mod broadcast;
#[cfg(feature = "alloc")]
pub mod dynarray;
pub mod elementwise;
pub mod engine;
pub mod error;
pub mod gather;
pub mod masked;
pub mod op;
pub mod reduce;
mod scalar;
pub mod traits;

pub use array::aliases::{
    Array1, Array16, Array2, Array2d, Array3, Array4, Array4d, Array4f, Array4i, Array4u,
    Array8, Array8f, Mask4, Mask8, Matrix4x4f, Vector3x4f,
};
pub use array::Array;
#[cfg(feature = "alloc")]
pub use dynarray::{
    DynArray, DynArrayf32, DynArrayf64, DynArrayi32, DynArrayi64, DynArrayu32, DynArrayu64,
    DynMask,
};
pub use elementwise::{select, Elementwise};
pub use error::{ArrayError, Result};
pub use gather::{gather, load, scatter, scatter_add, store};
pub use masked::Masked;
pub use op::{BinaryOp, CompareOp, Operation, PairOp, Reduction, Rounding, TernaryOp, UnaryOp};
pub use reduce::Horizontal;
pub use traits::{
    Arithmetic, ArrayMut, ArrayRef, Category, FloatScalar, Integral, Scalar, Size, Value,
};
