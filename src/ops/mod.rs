//! The capability behaviors: one exported macro per operator family.
//!
//! Every selector macro takes the host type plus optional `with`/`to`
//! arguments and expands to operator impls routed through
//! [`Unwrap`](crate::Unwrap) and [`Wrap`](crate::Wrap):
//!
//! ```text
//! addable!(Ty);                    Ty + Ty  -> Ty
//! addable!(Ty, with Op);           Ty + Op  -> Ty   (and Op + Ty -> Ty)
//! addable!(Ty, to Out);            Ty + Ty  -> Out
//! addable!(Ty, with Op, to Out);   Ty + Op  -> Out  (and mirrored)
//! ```
//!
//! The mirrored `Op <op> Ty` form exists only for the symmetric families
//! (add, multiply, equality, ordering, bit or/and/xor) and only in the
//! `with` variants; subtract, divide and modulo stay host-left. For the
//! self-typed form a single impl is generated, so requesting the same
//! (trait, operand) pair twice is an overlapping-impl error, never a silent
//! merge.
//!
//! The derive's `#[strong(caps(...))]` list expands to exactly these macros,
//! one call per selector. Invoking them directly is the composition route
//! for hosts that mix generated operators with hand-written methods, and a
//! consumer-defined macro with the same grammar is a first-class selector.

pub mod arith;
pub mod bits;
pub mod bundle;
pub mod cmp;
pub mod step;
