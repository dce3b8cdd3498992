//! Binary arithmetic capabilities: add, subtract, multiply, divide, modulo.

/// Shared expander for the binary operator families.
///
/// Arms:
/// - `Trait, method; Ty => Out`: self-typed operand.
/// - `Trait, method; Ty, Op => Out`: fixed operand, host on the left.
/// - `mirror Trait, method; Ty, Op => Out`: fixed operand, both sides.
#[doc(hidden)]
#[macro_export]
macro_rules! __nominal_binop {
    ($Trait:ident, $method:ident; $ty:ty => $out:ty) => {
        impl ::core::ops::$Trait for $ty {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $ty) -> $out {
                $crate::Wrap::wrap(::core::ops::$Trait::$method(
                    $crate::Unwrap::unwrap(self),
                    $crate::Unwrap::unwrap(rhs),
                ))
            }
        }
    };
    ($Trait:ident, $method:ident; $ty:ty, $op:ty => $out:ty) => {
        impl ::core::ops::$Trait<$op> for $ty {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $op) -> $out {
                $crate::Wrap::wrap(::core::ops::$Trait::$method(
                    $crate::Unwrap::unwrap(self),
                    $crate::Unwrap::unwrap(rhs),
                ))
            }
        }
    };
    (mirror $Trait:ident, $method:ident; $ty:ty, $op:ty => $out:ty) => {
        $crate::__nominal_binop!($Trait, $method; $ty, $op => $out);

        impl ::core::ops::$Trait<$ty> for $op {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $ty) -> $out {
                $crate::Wrap::wrap(::core::ops::$Trait::$method(
                    $crate::Unwrap::unwrap(self),
                    $crate::Unwrap::unwrap(rhs),
                ))
            }
        }
    };
}

/// `+` for the host. Symmetric in the `with` variants.
#[macro_export]
macro_rules! addable {
    ($ty:ty) => {
        $crate::__nominal_binop!(Add, add; $ty => $ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_binop!(mirror Add, add; $ty, $op => $ty);
    };
    ($ty:ty, to $out:ty) => {
        $crate::__nominal_binop!(Add, add; $ty => $out);
    };
    ($ty:ty, with $op:ty, to $out:ty) => {
        $crate::__nominal_binop!(mirror Add, add; $ty, $op => $out);
    };
}

/// `-` for the host. Host-left only.
#[macro_export]
macro_rules! subtractable {
    ($ty:ty) => {
        $crate::__nominal_binop!(Sub, sub; $ty => $ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_binop!(Sub, sub; $ty, $op => $ty);
    };
    ($ty:ty, to $out:ty) => {
        $crate::__nominal_binop!(Sub, sub; $ty => $out);
    };
    ($ty:ty, with $op:ty, to $out:ty) => {
        $crate::__nominal_binop!(Sub, sub; $ty, $op => $out);
    };
}

/// `*` for the host. Symmetric in the `with` variants.
#[macro_export]
macro_rules! multiplicable {
    ($ty:ty) => {
        $crate::__nominal_binop!(Mul, mul; $ty => $ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_binop!(mirror Mul, mul; $ty, $op => $ty);
    };
    ($ty:ty, to $out:ty) => {
        $crate::__nominal_binop!(Mul, mul; $ty => $out);
    };
    ($ty:ty, with $op:ty, to $out:ty) => {
        $crate::__nominal_binop!(mirror Mul, mul; $ty, $op => $out);
    };
}

/// `/` for the host. Host-left only. Division by zero is whatever the raw
/// type does; nothing is intercepted here.
#[macro_export]
macro_rules! dividable {
    ($ty:ty) => {
        $crate::__nominal_binop!(Div, div; $ty => $ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_binop!(Div, div; $ty, $op => $ty);
    };
    ($ty:ty, to $out:ty) => {
        $crate::__nominal_binop!(Div, div; $ty => $out);
    };
    ($ty:ty, with $op:ty, to $out:ty) => {
        $crate::__nominal_binop!(Div, div; $ty, $op => $out);
    };
}

/// `%` for the host. Host-left only.
#[macro_export]
macro_rules! modulable {
    ($ty:ty) => {
        $crate::__nominal_binop!(Rem, rem; $ty => $ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_binop!(Rem, rem; $ty, $op => $ty);
    };
    ($ty:ty, to $out:ty) => {
        $crate::__nominal_binop!(Rem, rem; $ty => $out);
    };
    ($ty:ty, with $op:ty, to $out:ty) => {
        $crate::__nominal_binop!(Rem, rem; $ty, $op => $out);
    };
}
