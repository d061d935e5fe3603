use super::Array;
use crate::traits::Value;

impl_array_operators!([T: Value, const N: usize] Array<T, N>);
impl_scalar_operators!([T, const N: usize] Array<T, N>);
