use super::DynArray;
use crate::traits::Value;

impl_array_operators!([T: Value] DynArray<T>);
impl_scalar_operators!([T] DynArray<T>);

#[cfg(test)]
mod tests {
    use crate::DynArray;

    #[test]
    fn elementwise() {
        let a = DynArray::from_slice(&[1.0_f32, 2.0, 3.0]);
        let b = DynArray::from_slice(&[0.5_f32, 0.5, 0.5]);
        assert_eq!((&a + &b).as_slice(), &[1.5, 2.5, 3.5]);
        assert_eq!((&a * &b).as_slice(), &[0.5, 1.0, 1.5]);
        assert_eq!((-a).as_slice(), &[-1.0, -2.0, -3.0]);
    }

    #[test]
    fn size_one_broadcasts_either_side() {
        let a = DynArray::from_slice(&[1, 2, 3]);
        let one = DynArray::from_slice(&[10]);
        assert_eq!((&a + &one).as_slice(), &[11, 12, 13]);
        assert_eq!((&one - &a).as_slice(), &[9, 8, 7]);
        assert_eq!((a.clone() * 3).as_slice(), &[3, 6, 9]);
    }

    #[test]
    #[should_panic(expected = "add(): mismatched input sizes (3 and 5)")]
    fn mismatch_panics() {
        let a = DynArray::from_slice(&[1, 2, 3]);
        let b = DynArray::from_slice(&[1, 2, 3, 4, 5]);
        let _ = a + b;
    }

    #[test]
    fn compound_assign_keeps_target_size() {
        let mut a = DynArray::from_slice(&[1, 2, 3]);
        a += DynArray::from_slice(&[1]);
        assert_eq!(a.as_slice(), &[2, 3, 4]);
        a <<= DynArray::from_slice(&[1, 2, 3]);
        assert_eq!(a.as_slice(), &[4, 12, 32]);
    }

    #[test]
    #[should_panic(expected = "add(): mismatched input sizes (1 and 3)")]
    fn compound_assign_cannot_grow() {
        let mut a = DynArray::from_slice(&[1]);
        a += DynArray::from_slice(&[1, 2, 3]);
    }

    #[test]
    fn empty_operands() {
        let a = DynArray::<f64>::from_vec(alloc::vec![]);
        let b = DynArray::<f64>::from_vec(alloc::vec![]);
        assert!((a + b).is_empty());
    }
}
