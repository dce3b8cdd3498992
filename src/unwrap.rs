//! Uniform extraction and construction across strong and raw values.
//!
//! Every capability body has the same shape: unwrap both operands, apply the
//! raw operator, wrap the result. [`Unwrap`] and [`Wrap`] are the two halves
//! of that shape. Both are registration traits: the derive registers every
//! strong type, this module registers the primitive raw types, and
//! [`impl_raw!`](crate::impl_raw) registers anything else a consumer wants
//! to use as an operand.

/// Extracts the underlying value from either a strong type or a raw value.
///
/// For a strong type the result is the stored raw value; for a registered
/// raw type the value passes through unchanged. Implementations exist for
/// the owned, shared-borrow and mutable-borrow forms of every registered
/// type, so the value category of the input is preserved: unwrapping `&T`
/// yields `&Raw` (same allocation, no copy), unwrapping `T` moves.
pub trait Unwrap {
    /// What unwrapping produces. Identity for raw types.
    type Raw;

    /// Performs the extraction. Never fails, never copies.
    fn unwrap(self) -> Self::Raw;
}

/// Builds a result value from a raw computation result.
///
/// The dual of [`Unwrap`]: a capability with result type `Out` finishes with
/// `Out::wrap(raw)`, which constructs the strong type when `Out` is one and
/// is the identity when `Out` is the raw type itself (e.g. a
/// `subtractable!(Ty, to i32)` selector).
pub trait Wrap<Raw>: Sized {
    /// Wraps `raw` into `Self`.
    fn wrap(raw: Raw) -> Self;
}

impl<T> Wrap<T> for T {
    #[inline(always)]
    fn wrap(raw: T) -> T {
        raw
    }
}

/// Registers types as raw (pass-through) operands for [`Unwrap`].
///
/// The primitive types are pre-registered. Consumers wrapping their own raw
/// types only need this when such a type appears as a `with`/`to` selector
/// argument:
///
/// ```ignore
/// pub struct Celsius(f64);
/// nominal::impl_raw!(Celsius);
/// ```
#[macro_export]
macro_rules! impl_raw {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::Unwrap for $t {
                type Raw = $t;
                #[inline(always)]
                fn unwrap(self) -> $t {
                    self
                }
            }

            impl<'a> $crate::Unwrap for &'a $t {
                type Raw = &'a $t;
                #[inline(always)]
                fn unwrap(self) -> &'a $t {
                    self
                }
            }

            impl<'a> $crate::Unwrap for &'a mut $t {
                type Raw = &'a mut $t;
                #[inline(always)]
                fn unwrap(self) -> &'a mut $t {
                    self
                }
            }
        )+
    };
}

impl_raw!(u8, u16, u32, u64, u128, usize);
impl_raw!(i8, i16, i32, i64, i128, isize);
impl_raw!(f32, f64, bool, char);

impl<'a> Unwrap for &'a str {
    type Raw = &'a str;

    #[inline(always)]
    fn unwrap(self) -> &'a str {
        self
    }
}

#[cfg(feature = "alloc")]
use alloc::string::String;

#[cfg(feature = "alloc")]
impl_raw!(String);
