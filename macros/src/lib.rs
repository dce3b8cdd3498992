//! Procedural macros for the nominal strong-type system.
//!
//! One entry point: `#[derive(StrongType)]` with the `#[strong(...)]` helper
//! attribute. The derive emits the storage and identity impls itself and
//! forwards every selector in `caps(...)` to the same-named declarative
//! capability macro of the core crate, so the selector surface stays open:
//! a new capability is a new macro, never a change here.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod derive;
mod selector;

/// Derive a strong type from a single-field struct.
///
/// # Usage
///
/// ```ignore
/// #[derive(StrongType, Clone, Copy)]
/// #[strong(caps(arithmetic, addable(with i32)))]
/// struct Integer(i32);
/// ```
///
/// Generates:
/// - a data-free tag type `IntegerTag` (override with `#[strong(tag = ...)]`)
/// - `impl StrongType`, `impl Unwrap` (owned, `&`, `&mut`) and `impl Wrap`
/// - inherent `new` / `value` / `value_mut` / `into_value`
/// - one capability-macro invocation per selector in `caps(...)`
#[proc_macro_derive(StrongType, attributes(strong))]
pub fn derive_strong_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    derive::expand_derive_strong_type(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
