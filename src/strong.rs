//! The storage and identity contract of a strong type.

/// Contract implemented by every strong type produced by
/// `#[derive(StrongType)]`.
///
/// A strong type stores exactly one value of [`Raw`](StrongType::Raw) and is
/// nominally distinct from both the raw type and every other strong type,
/// including strong types over the same raw type. The distinction is carried
/// by the struct itself plus a dedicated, data-free [`Tag`](StrongType::Tag)
/// type.
///
/// Implementing this trait by hand is possible but defeats the point: the
/// capability macros and the [`is_strong_type!`](crate::is_strong_type)
/// probe treat any implementor as a strong type. Use the derive.
///
/// ## Duplication and defaults
///
/// `nominal` never generates `Clone`, `Copy` or `Default` for a wrapper.
/// Derive them on the wrapper struct as needed; the std derives are
/// field-exact, so the wrapper copies, clones and defaults precisely the
/// way its raw type does, and not at all otherwise.
pub trait StrongType: Sized {
    /// The wrapped raw type.
    type Raw;

    /// The data-free marker type establishing this wrapper's identity.
    type Tag;

    /// Wraps a raw value. Explicit, by value.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Borrows the stored value.
    fn value(&self) -> &Self::Raw;

    /// Mutably borrows the stored value.
    fn value_mut(&mut self) -> &mut Self::Raw;

    /// Consumes the wrapper, moving the stored value out.
    fn into_value(self) -> Self::Raw;
}
