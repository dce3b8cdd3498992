//! Aggregate selectors, all self-typed.

/// The full numeric operator set in one selector: add, subtract, multiply,
/// divide, modulo, increment, decrement, equality and ordering.
///
/// Equality rides in with [`orderable!`](crate::orderable) (`PartialOrd`
/// requires `PartialEq`), so do not combine this with `equatable!`.
#[macro_export]
macro_rules! arithmetic {
    ($ty:ty) => {
        $crate::addable!($ty);
        $crate::subtractable!($ty);
        $crate::multiplicable!($ty);
        $crate::dividable!($ty);
        $crate::modulable!($ty);
        $crate::incrementable!($ty);
        $crate::decrementable!($ty);
        $crate::orderable!($ty);
    };
}

/// The bitwise operator set in one selector: or, and, xor, negate.
#[macro_export]
macro_rules! bitwise_manipulable {
    ($ty:ty) => {
        $crate::orable!($ty);
        $crate::andable!($ty);
        $crate::xorable!($ty);
        $crate::negatable!($ty);
    };
}
