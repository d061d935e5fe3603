//! Pre-defined type aliases for common `DynArray` element types.

use super::DynArray;

/// Dynamic array with `f32` elements.
pub type DynArrayf32 = DynArray<f32>;
/// Dynamic array with `f64` elements.
pub type DynArrayf64 = DynArray<f64>;
/// Dynamic array with `i32` elements.
pub type DynArrayi32 = DynArray<i32>;
/// Dynamic array with `i64` elements.
pub type DynArrayi64 = DynArray<i64>;
/// Dynamic array with `u32` elements.
pub type DynArrayu32 = DynArray<u32>;
/// Dynamic array with `u64` elements.
pub type DynArrayu64 = DynArray<u64>;
/// Dynamic mask.
pub type DynMask = DynArray<bool>;
