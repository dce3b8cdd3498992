#![cfg_attr(not(feature = "std"), no_std)]

//! # nominal
//!
//! Zero-overhead strong types with composable operator capabilities.
//!
//! **A strong type wraps one raw value and is a distinct nominal identity.**
//!
//! Two wrappers over the same raw type never mix, there is no implicit
//! conversion in either direction, and a wrapper only has the operators it
//! explicitly selected. Everything happens at compile time; at runtime a
//! wrapper is exactly its raw value.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Contracts                                               |
//! |  - StrongType (storage + tag), Unwrap / Wrap (uniform raw access) |
//! |  - One (unit step), Detect (inherent-const-fallback probes)       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities                                            |
//! |  - addable! .. modulable!, equatable!, orderable!,                |
//! |    incrementable!, decrementable!, orable! .. negatable!,         |
//! |    bundles arithmetic! / bitwise_manipulable!                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - #[derive(StrongType)] + #[strong(caps(...))] selector list     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Each capability body is the same three-step shape: unwrap both operands,
//! apply the raw operator, wrap the result. [`Unwrap`] extracts uniformly
//! from wrappers and raw values; [`Wrap`] constructs either, so a selector
//! can direct the result at the host, another wrapper, or the raw type.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nominal::prelude::*;
//!
//! #[derive(StrongType, Clone, Copy, Debug)]
//! #[strong(caps(arithmetic, addable(with i32)))]
//! struct Integer(i32);
//!
//! assert_eq!((Integer::new(1) + Integer::new(1)).value(), &2);
//! assert_eq!((Integer::new(1) + 1).value(), &2);
//! ```
//!
//! The derive is only the convenience surface. Deriving with no `caps`
//! list gives the minimal storage component (pure identity, no operators),
//! and the capability macros compose onto it directly, next to hand-written
//! methods:
//!
//! ```ignore
//! #[derive(StrongType, Clone, Copy)]
//! struct Meters(f64);
//!
//! nominal::addable!(Meters);
//! nominal::orderable!(Meters);
//!
//! impl Meters {
//!     fn halved(self) -> Self {
//!         Meters::new(self.into_value() / 2.0)
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - **Nominal identity**: the wrapper struct plus a data-free tag type;
//!   reusing a tag merges identities and is a caller obligation, not a
//!   checked condition.
//! - **Composable capabilities**: independent selectors, order-insensitive;
//!   a duplicate operator for the same operand pair is a hard compile error.
//! - **Field-exact duplication**: `Clone`/`Copy`/`Default` come from the
//!   wrapper's own derives, so they track the raw type precisely.
//! - **Extensible selectors**: the derive forwards any selector name to a
//!   same-named macro, so new capabilities slot in without touching it.

// Allow `::nominal` to work inside the crate itself
extern crate self as nominal;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Contracts
// =============================================================================
pub mod detect;
pub mod one;
pub mod strong;
pub mod unwrap;

// =============================================================================
// Layer 1: Capabilities
// =============================================================================
pub mod ops;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use one::One;
pub use strong::StrongType;
pub use unwrap::{Unwrap, Wrap};

// Re-export the derive next to the trait it implements.
pub use macros::StrongType;

/// Common items for declaring and consuming strong types.
///
/// Includes the capability macros: the derive expands a selector `foo` to a
/// bare `foo!(...)` call, so the selector macros must be in scope where the
/// wrapper is declared. That is what keeps the selector surface open: a
/// consumer-defined `macro_rules! foo` with the same grammar is picked up
/// exactly like the built-ins.
pub mod prelude {
    pub use crate::one::One;
    pub use crate::strong::StrongType;
    pub use crate::unwrap::{Unwrap, Wrap};
    pub use macros::StrongType;
    // Capability selectors (all #[macro_export], also usable as
    // `nominal::addable!` etc.).
    pub use crate::{
        addable, andable, arithmetic, bitwise_manipulable, decrementable, dividable, equatable,
        incrementable, modulable, multiplicable, negatable, orable, orderable, subtractable,
        xorable,
    };
    pub use crate::{impl_raw, is_strong_type};
}
