//! Operator overloads shared by `Array` and `DynArray`.
//!
//! Binary operators resolve sizes with the broadcasting law and panic with
//! the error message on failure; compound assignments keep the left
//! operand's size. The scalar bound on each operator (`Arithmetic`,
//! `Integral`, or plain `Scalar` for bit operations) rejects inadmissible
//! element types at compile time.

macro_rules! impl_array_operators {
    ([$($g:tt)*] $ty:ty) => {
        impl_array_operators!(@binary [$($g)*] $ty, Add, add, AddAssign, add_assign, Add, Arithmetic);
        impl_array_operators!(@binary [$($g)*] $ty, Sub, sub, SubAssign, sub_assign, Sub, Arithmetic);
        impl_array_operators!(@binary [$($g)*] $ty, Mul, mul, MulAssign, mul_assign, Mul, Arithmetic);
        impl_array_operators!(@binary [$($g)*] $ty, Div, div, DivAssign, div_assign, Div, Arithmetic);
        impl_array_operators!(@binary [$($g)*] $ty, Rem, rem, RemAssign, rem_assign, Rem, Integral);
        impl_array_operators!(@binary [$($g)*] $ty, Shl, shl, ShlAssign, shl_assign, Shl, Integral);
        impl_array_operators!(@binary [$($g)*] $ty, Shr, shr, ShrAssign, shr_assign, Shr, Integral);
        impl_array_operators!(@binary [$($g)*] $ty, BitAnd, bitand, BitAndAssign, bitand_assign, And, Scalar);
        impl_array_operators!(@binary [$($g)*] $ty, BitOr, bitor, BitOrAssign, bitor_assign, Or, Scalar);
        impl_array_operators!(@binary [$($g)*] $ty, BitXor, bitxor, BitXorAssign, bitxor_assign, Xor, Scalar);

        impl<$($g)*> core::ops::Neg for $ty
        where
            T::Scalar: $crate::traits::Arithmetic,
        {
            type Output = $ty;

            #[inline]
            fn neg(self) -> $ty {
                $crate::error::or_panic($crate::traits::Value::unary(&self, $crate::op::UnaryOp::Neg))
            }
        }

        impl<'a, $($g)*> core::ops::Neg for &'a $ty
        where
            T::Scalar: $crate::traits::Arithmetic,
        {
            type Output = $ty;

            #[inline]
            fn neg(self) -> $ty {
                $crate::error::or_panic($crate::traits::Value::unary(self, $crate::op::UnaryOp::Neg))
            }
        }

        /// Logical negation for masks, bitwise complement for integers.
        ///
        /// Panics for floating-point elements.
        impl<$($g)*> core::ops::Not for $ty {
            type Output = $ty;

            #[inline]
            fn not(self) -> $ty {
                $crate::error::or_panic($crate::traits::Value::unary(&self, $crate::op::UnaryOp::Not))
            }
        }
    };

    (@binary [$($g:tt)*] $ty:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident,
     $bin:ident, $bound:ident) => {
        impl<$($g)*> core::ops::$Op for $ty
        where
            T::Scalar: $crate::traits::$bound,
        {
            type Output = $ty;

            #[inline]
            fn $op(self, rhs: $ty) -> $ty {
                $crate::error::or_panic($crate::traits::Value::binary(
                    &self,
                    &rhs,
                    $crate::op::BinaryOp::$bin,
                ))
            }
        }

        impl<'a, $($g)*> core::ops::$Op<&'a $ty> for $ty
        where
            T::Scalar: $crate::traits::$bound,
        {
            type Output = $ty;

            #[inline]
            fn $op(self, rhs: &'a $ty) -> $ty {
                $crate::error::or_panic($crate::traits::Value::binary(
                    &self,
                    rhs,
                    $crate::op::BinaryOp::$bin,
                ))
            }
        }

        impl<'a, 'b, $($g)*> core::ops::$Op<&'b $ty> for &'a $ty
        where
            T::Scalar: $crate::traits::$bound,
        {
            type Output = $ty;

            #[inline]
            fn $op(self, rhs: &'b $ty) -> $ty {
                $crate::error::or_panic($crate::traits::Value::binary(
                    self,
                    rhs,
                    $crate::op::BinaryOp::$bin,
                ))
            }
        }

        impl<$($g)*> core::ops::$OpAssign for $ty
        where
            T::Scalar: $crate::traits::$bound,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $ty) {
                core::ops::$OpAssign::$op_assign(self, &rhs);
            }
        }

        impl<'a, $($g)*> core::ops::$OpAssign<&'a $ty> for $ty
        where
            T::Scalar: $crate::traits::$bound,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: &'a $ty) {
                let op = $crate::op::BinaryOp::$bin;
                $crate::error::or_panic($crate::engine::update(op, self, rhs, |a, b| {
                    $crate::traits::Value::binary(a, b, op)
                }));
            }
        }
    };
}

/// `array ⊕ scalar` for flat arrays, the scalar broadcast to every lane.
macro_rules! impl_scalar_operators {
    ([$($g:tt)*] $ty:ty) => {
        impl_scalar_operators!(@op [$($g)*] $ty, Add, add, AddAssign, add_assign, Add);
        impl_scalar_operators!(@op [$($g)*] $ty, Sub, sub, SubAssign, sub_assign, Sub);
        impl_scalar_operators!(@op [$($g)*] $ty, Mul, mul, MulAssign, mul_assign, Mul);
        impl_scalar_operators!(@op [$($g)*] $ty, Div, div, DivAssign, div_assign, Div);
    };

    (@op [$($g:tt)*] $ty:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $bin:ident) => {
        impl<$($g)*> core::ops::$Op<T> for $ty
        where
            T: $crate::traits::Arithmetic + $crate::traits::Value<Scalar = T>,
        {
            type Output = $ty;

            #[inline]
            fn $op(self, rhs: T) -> $ty {
                let rhs = <$ty as $crate::traits::Value>::splat(rhs);
                $crate::error::or_panic($crate::traits::Value::binary(
                    &self,
                    &rhs,
                    $crate::op::BinaryOp::$bin,
                ))
            }
        }

        impl<$($g)*> core::ops::$OpAssign<T> for $ty
        where
            T: $crate::traits::Arithmetic + $crate::traits::Value<Scalar = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                let op = $crate::op::BinaryOp::$bin;
                let rhs = <$ty as $crate::traits::Value>::splat(rhs);
                $crate::error::or_panic($crate::engine::update(op, self, &rhs, |a, b| {
                    $crate::traits::Value::binary(a, b, op)
                }));
            }
        }
    };
}
