//! Increment and decrement capabilities.
//!
//! Rust has no `++`/`--`, so these generate inherent methods with the same
//! pre/post split: the pre form mutates in place and returns the mutated
//! host, the post form returns the value from before the mutation. Both act
//! on the stored value directly; the host is always the wrapper here.
//!
//! Requirements on the host: `Clone` (for the post forms) and, on the raw
//! type, [`One`](crate::One) plus `AddAssign`/`SubAssign`.

/// `inc` / `post_inc` for the host.
#[macro_export]
macro_rules! incrementable {
    ($ty:ty) => {
        impl $ty {
            /// Adds one unit in place and returns the mutated wrapper.
            #[inline]
            pub fn inc(&mut self) -> &mut Self {
                let one = <<Self as $crate::StrongType>::Raw as $crate::One>::ONE;
                *$crate::StrongType::value_mut(self) += one;
                self
            }

            /// Adds one unit in place and returns the pre-increment value.
            #[inline]
            pub fn post_inc(&mut self) -> Self {
                let prev = ::core::clone::Clone::clone(&*self);
                let _ = self.inc();
                prev
            }
        }
    };
}

/// `dec` / `post_dec` for the host.
#[macro_export]
macro_rules! decrementable {
    ($ty:ty) => {
        impl $ty {
            /// Subtracts one unit in place and returns the mutated wrapper.
            #[inline]
            pub fn dec(&mut self) -> &mut Self {
                let one = <<Self as $crate::StrongType>::Raw as $crate::One>::ONE;
                *$crate::StrongType::value_mut(self) -= one;
                self
            }

            /// Subtracts one unit in place and returns the pre-decrement value.
            #[inline]
            pub fn post_dec(&mut self) -> Self {
                let prev = ::core::clone::Clone::clone(&*self);
                let _ = self.dec();
                prev
            }
        }
    };
}
