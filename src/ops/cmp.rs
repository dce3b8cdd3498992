//! Comparison capabilities. Both families compare unwrapped raw values and
//! return plain `bool`s; there is no `to` variant.

#[doc(hidden)]
#[macro_export]
macro_rules! __nominal_eq {
    ($ty:ty) => {
        impl ::core::cmp::PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &$ty) -> bool {
                ::core::cmp::PartialEq::eq(
                    $crate::Unwrap::unwrap(self),
                    $crate::Unwrap::unwrap(other),
                )
            }
        }
    };
    ($ty:ty, $op:ty) => {
        impl ::core::cmp::PartialEq<$op> for $ty {
            #[inline]
            fn eq(&self, other: &$op) -> bool {
                ::core::cmp::PartialEq::eq(
                    $crate::Unwrap::unwrap(self),
                    $crate::Unwrap::unwrap(other),
                )
            }
        }

        impl ::core::cmp::PartialEq<$ty> for $op {
            #[inline]
            fn eq(&self, other: &$ty) -> bool {
                ::core::cmp::PartialEq::eq(
                    $crate::Unwrap::unwrap(self),
                    $crate::Unwrap::unwrap(other),
                )
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __nominal_ord {
    ($ty:ty) => {
        impl ::core::cmp::PartialOrd for $ty {
            #[inline]
            fn partial_cmp(&self, other: &$ty) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::cmp::PartialOrd::partial_cmp(
                    $crate::Unwrap::unwrap(self),
                    $crate::Unwrap::unwrap(other),
                )
            }
        }
    };
    ($ty:ty, $op:ty) => {
        impl ::core::cmp::PartialOrd<$op> for $ty {
            #[inline]
            fn partial_cmp(&self, other: &$op) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::cmp::PartialOrd::partial_cmp(
                    $crate::Unwrap::unwrap(self),
                    $crate::Unwrap::unwrap(other),
                )
            }
        }

        impl ::core::cmp::PartialOrd<$ty> for $op {
            #[inline]
            fn partial_cmp(&self, other: &$ty) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::cmp::PartialOrd::partial_cmp(
                    $crate::Unwrap::unwrap(self),
                    $crate::Unwrap::unwrap(other),
                )
            }
        }
    };
}

/// `==` / `!=` for the host. Symmetric in the `with` variant.
#[macro_export]
macro_rules! equatable {
    ($ty:ty) => {
        $crate::__nominal_eq!($ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_eq!($ty, $op);
    };
}

/// `<` / `<=` / `>` / `>=` for the host. Symmetric in the `with` variant.
///
/// `PartialOrd` requires `PartialEq`, so this also emits the equality
/// operators for the same operand pair. Selecting `equatable` and
/// `orderable` together on the same pair is therefore an overlapping-impl
/// error; pick one.
#[macro_export]
macro_rules! orderable {
    ($ty:ty) => {
        $crate::__nominal_eq!($ty);
        $crate::__nominal_ord!($ty);
    };
    ($ty:ty, with $op:ty) => {
        $crate::__nominal_eq!($ty, $op);
        $crate::__nominal_ord!($ty, $op);
    };
}
