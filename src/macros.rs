// implements the unary operator "op &T"
// based on "op T" where T is expected to be `Copy`able
macro_rules! forward_ref_unop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl ::core::ops::$imp for &$t {
            type Output = <$t as ::core::ops::$imp>::Output;

            #[inline]
            fn $method(self) -> <$t as ::core::ops::$imp>::Output {
                ::core::ops::$imp::$method(*self)
            }
        }
    };
}
pub(crate) use forward_ref_unop;

// implements binary operators "&T op U", "T op &U", "&T op &U"
// based on "T op U" where T and U are expected to be `Copy`able
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl<'a> ::core::ops::$imp<$u> for &'a $t {
            type Output = <$t as ::core::ops::$imp<$u>>::Output;

            #[inline]
            fn $method(self, other: $u) -> <$t as ::core::ops::$imp<$u>>::Output {
                ::core::ops::$imp::$method(*self, other)
            }
        }

        impl ::core::ops::$imp<&$u> for $t {
            type Output = <$t as ::core::ops::$imp<$u>>::Output;

            #[inline]
            fn $method(self, other: &$u) -> <$t as ::core::ops::$imp<$u>>::Output {
                ::core::ops::$imp::$method(self, *other)
            }
        }

        impl ::core::ops::$imp<&$u> for &$t {
            type Output = <$t as ::core::ops::$imp<$u>>::Output;

            #[inline]
            fn $method(self, other: &$u) -> <$t as ::core::ops::$imp<$u>>::Output {
                ::core::ops::$imp::$method(*self, *other)
            }
        }
    };
}
pub(crate) use forward_ref_binop;

// implements "T op= &U", based on "T op= U"
// where U is expected to be `Copy`able
macro_rules! forward_ref_op_assign {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl ::core::ops::$imp<&$u> for $t {
            #[inline]
            fn $method(&mut self, other: &$u) {
                ::core::ops::$imp::$method(self, *other);
            }
        }
    };
}
pub(crate) use forward_ref_op_assign;

// implements "T op U" and "T op= U" in terms of
// `$with(self, other, rounding_mode())`
macro_rules! binop_impl {
    ($t:ty; $imp:ident, $method:ident, $with:ident; $assign:ident, $assign_method:ident) => {
        impl ::core::ops::$imp for $t {
            type Output = $t;

            #[inline]
            fn $method(self, other: $t) -> $t {
                self.$with(other, $crate::ctx::rounding_mode()).0
            }
        }

        $crate::macros::forward_ref_binop! { impl $imp, $method for $t, $t }

        impl ::core::ops::$assign for $t {
            #[inline]
            fn $assign_method(&mut self, other: $t) {
                *self = ::core::ops::$imp::$method(*self, other);
            }
        }

        $crate::macros::forward_ref_op_assign! { impl $assign, $assign_method for $t, $t }
    };
}
pub(crate) use binop_impl;

macro_rules! neg_impl {
    ($t:ty) => {
        impl ::core::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                self.copy_neg()
            }
        }

        $crate::macros::forward_ref_unop! { impl Neg, neg for $t }
    };
}
pub(crate) use neg_impl;

/// Implements the arithmetic operator traits.
///
/// The operators round with the process-wide rounding mode.
macro_rules! impl_ops {
    ($t:ty) => {
        $crate::macros::binop_impl!($t; Add, add, add_with; AddAssign, add_assign);
        $crate::macros::binop_impl!($t; Sub, sub, sub_with; SubAssign, sub_assign);
        $crate::macros::binop_impl!($t; Mul, mul, mul_with; MulAssign, mul_assign);
        $crate::macros::binop_impl!($t; Div, div, div_with; DivAssign, div_assign);
        $crate::macros::binop_impl!($t; Rem, rem, rem_with; RemAssign, rem_assign);
        $crate::macros::neg_impl!($t);
    };
}
pub(crate) use impl_ops;
