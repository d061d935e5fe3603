//! Pre-defined type aliases for common fixed-size arrays.

use crate::Array;

// ── Size aliases ────────────────────────────────────────────────────

/// 1-element array.
pub type Array1<T> = Array<T, 1>;
/// 2-element array.
pub type Array2<T> = Array<T, 2>;
/// 3-element array.
pub type Array3<T> = Array<T, 3>;
/// 4-element array.
pub type Array4<T> = Array<T, 4>;
/// 8-element array.
pub type Array8<T> = Array<T, 8>;
/// 16-element array.
pub type Array16<T> = Array<T, 16>;

// ── Packet aliases ──────────────────────────────────────────────────

/// Four `f32` lanes.
pub type Array4f = Array<f32, 4>;
/// Eight `f32` lanes.
pub type Array8f = Array<f32, 8>;
/// Two `f64` lanes.
pub type Array2d = Array<f64, 2>;
/// Four `f64` lanes.
pub type Array4d = Array<f64, 4>;
/// Four `i32` lanes.
pub type Array4i = Array<i32, 4>;
/// Four `u32` lanes.
pub type Array4u = Array<u32, 4>;
/// Four mask lanes, the companion of [`Array4f`], [`Array4i`] and [`Array4u`].
pub type Mask4 = Array<bool, 4>;
/// Eight mask lanes.
pub type Mask8 = Array<bool, 8>;

// ── Nested aliases ──────────────────────────────────────────────────

/// Three-component vector of four-lane packets.
pub type Vector3x4f = Array<Array4f, 3>;
/// 4×4 block of `f32`.
pub type Matrix4x4f = Array<Array4f, 4>;
