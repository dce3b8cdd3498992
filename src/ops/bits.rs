//! Bitwise capabilities: or, and, xor, negate.

/// `|` for the host. Symmetric in the `with` variants.
#[macro_export]
macro_rules! orable {
    ($ty:ty) => {
        $crate::__nominal_binop!(BitOr, bitor; $ty => $ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_binop!(mirror BitOr, bitor; $ty, $op => $ty);
    };
    ($ty:ty, to $out:ty) => {
        $crate::__nominal_binop!(BitOr, bitor; $ty => $out);
    };
    ($ty:ty, with $op:ty, to $out:ty) => {
        $crate::__nominal_binop!(mirror BitOr, bitor; $ty, $op => $out);
    };
}

/// `&` for the host. Symmetric in the `with` variants.
#[macro_export]
macro_rules! andable {
    ($ty:ty) => {
        $crate::__nominal_binop!(BitAnd, bitand; $ty => $ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_binop!(mirror BitAnd, bitand; $ty, $op => $ty);
    };
    ($ty:ty, to $out:ty) => {
        $crate::__nominal_binop!(BitAnd, bitand; $ty => $out);
    };
    ($ty:ty, with $op:ty, to $out:ty) => {
        $crate::__nominal_binop!(mirror BitAnd, bitand; $ty, $op => $out);
    };
}

/// `^` for the host. Symmetric in the `with` variants.
#[macro_export]
macro_rules! xorable {
    ($ty:ty) => {
        $crate::__nominal_binop!(BitXor, bitxor; $ty => $ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_binop!(mirror BitXor, bitxor; $ty, $op => $ty);
    };
    ($ty:ty, to $out:ty) => {
        $crate::__nominal_binop!(BitXor, bitxor; $ty => $out);
    };
    ($ty:ty, with $op:ty, to $out:ty) => {
        $crate::__nominal_binop!(mirror BitXor, bitxor; $ty, $op => $out);
    };
}

/// Unary `!` for the host. Plain and `to` variants only.
#[macro_export]
macro_rules! negatable {
    ($ty:ty) => {
        $crate::negatable!($ty, to $ty);
    };
    ($ty:ty, to $out:ty) => {
        impl ::core::ops::Not for $ty {
            type Output = $out;

            #[inline]
            fn not(self) -> $out {
                $crate::Wrap::wrap(!$crate::Unwrap::unwrap(self))
            }
        }
    };
}
