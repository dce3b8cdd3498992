//! Compile-time probes over arbitrary types.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! answering "does this type satisfy trait X" on concrete types without
//! requiring the type to participate.
//!
//! ## How it works
//!
//! For each trait T we want to probe:
//! 1. Define a fallback trait with `const IS_T: bool = false`
//! 2. Implement fallback for `Detect<X>` for all X
//! 3. Implement an inherent const `IS_T = true` for `Detect<X>` where `X: T`
//!
//! When resolving `Detect::<Concrete>::IS_T`, the compiler:
//! - If `Concrete: T`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`.

use core::marker::PhantomData;

use crate::StrongType;

/// Probe wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

#[doc(hidden)]
pub trait StrongTypeFallback {
    const IS_STRONG_TYPE: bool = false;
}

impl<T: ?Sized> StrongTypeFallback for Detect<T> {}

impl<T: StrongType> Detect<T> {
    pub const IS_STRONG_TYPE: bool = true;
}

// =============================================================================
// Std Trait Probes (generated)
// =============================================================================

/// Generate fallback trait + inherent const for a std trait.
macro_rules! impl_detect {
    ($($Trait:ident),+ $(,)?) => {
        $(
            ::paste::paste! {
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] { const [<IS_ $Trait:upper>]: bool = false; }
                impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
                impl<T: $Trait> Detect<T> { pub const [<IS_ $Trait:upper>]: bool = true; }
            }
        )+
    };
}

impl_detect!(Clone, Copy, Default, Send, Sync);

// =============================================================================
// Probe Macros
// =============================================================================

/// `true` exactly for types produced by `#[derive(StrongType)]`.
///
/// Usable on any concrete type, including ones that opted into nothing:
///
/// ```ignore
/// assert!(is_strong_type!(Meters));
/// assert!(!is_strong_type!(f64));
/// ```
#[macro_export]
macro_rules! is_strong_type {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::StrongTypeFallback as _;
        $crate::detect::Detect::<$t>::IS_STRONG_TYPE
    }};
}

/// `true` if the type is `Clone`.
#[macro_export]
macro_rules! is_clone {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::CloneFallback as _;
        $crate::detect::Detect::<$t>::IS_CLONE
    }};
}

/// `true` if the type is `Copy`.
#[macro_export]
macro_rules! is_copy {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::CopyFallback as _;
        $crate::detect::Detect::<$t>::IS_COPY
    }};
}

/// `true` if the type is `Default`.
#[macro_export]
macro_rules! is_default {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::DefaultFallback as _;
        $crate::detect::Detect::<$t>::IS_DEFAULT
    }};
}

/// `true` if the type is `Send`.
#[macro_export]
macro_rules! is_send {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SendFallback as _;
        $crate::detect::Detect::<$t>::IS_SEND
    }};
}

/// `true` if the type is `Sync`.
#[macro_export]
macro_rules! is_sync {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SyncFallback as _;
        $crate::detect::Detect::<$t>::IS_SYNC
    }};
}
