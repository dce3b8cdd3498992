//! Composition beyond the selector list: empty capability sets, direct
//! capability-macro invocation next to hand-written methods, and
//! consumer-defined selectors.

use nominal::prelude::*;

// -----------------------------------------------------------------------------
// Empty capability list: pure identity, no operators at all.
// -----------------------------------------------------------------------------

#[derive(StrongType, Clone, Copy, Debug)]
struct UserId(u64);

#[test]
fn empty_capability_list_is_a_valid_wrapper() {
    let id = UserId::new(42);
    assert_eq!(*id.value(), 42);
    assert!(is_strong_type!(UserId));
    // No operator was requested, so none exists; `UserId + UserId` or
    // `UserId == UserId` would fail to compile here.
}

// -----------------------------------------------------------------------------
// Direct composition: minimal storage + capability macros + custom methods.
// -----------------------------------------------------------------------------

#[derive(StrongType, Clone, Copy, Debug)]
struct Meters(f64);

nominal::addable!(Meters);
nominal::orderable!(Meters);

impl Meters {
    fn halved(self) -> Self {
        Meters::new(self.into_value() / 2.0)
    }
}

#[test]
fn direct_composition_matches_the_selector_route() {
    assert_eq!(Meters::new(1.0) + Meters::new(2.0), Meters::new(3.0));
    assert!(Meters::new(1.0) < Meters::new(2.0));
    assert_eq!(Meters::new(3.0).halved(), Meters::new(1.5));
}

// -----------------------------------------------------------------------------
// Consumer-defined selector: any macro with the selector grammar works in a
// caps(...) list, exactly like the built-ins.
// -----------------------------------------------------------------------------

macro_rules! saturating_addable {
    ($ty:ty) => {
        impl $ty {
            pub fn saturating_add(self, rhs: Self) -> Self {
                <$ty as StrongType>::from_raw(
                    self.into_value().saturating_add(rhs.into_value()),
                )
            }
        }
    };
}

#[derive(StrongType, Clone, Copy, Debug)]
#[strong(caps(saturating_addable, equatable))]
struct Byte(u8);

#[test]
fn consumer_defined_capability() {
    assert_eq!(Byte::new(250).saturating_add(Byte::new(10)), Byte::new(255));
    assert_eq!(Byte::new(1).saturating_add(Byte::new(2)), Byte::new(3));
}

// -----------------------------------------------------------------------------
// Named single-field structs work the same as tuple structs.
// -----------------------------------------------------------------------------

#[derive(StrongType, Clone, Debug)]
#[strong(caps(equatable))]
struct Label {
    text: String,
}

#[test]
fn named_field_storage() {
    let label = Label::new(String::from("strong"));
    assert_eq!(label.value(), "strong");
    assert_eq!(label.clone(), label);
    assert_eq!(label.into_value(), "strong");
}

// -----------------------------------------------------------------------------
// Selector order does not matter.
// -----------------------------------------------------------------------------

#[derive(StrongType, Clone, Copy, Debug)]
#[strong(caps(orderable, subtractable, addable))]
struct Shuffled(i32);

#[test]
fn selector_order_is_irrelevant() {
    assert_eq!(Shuffled::new(1) + Shuffled::new(2), Shuffled::new(3));
    assert_eq!(Shuffled::new(3) - Shuffled::new(2), Shuffled::new(1));
    assert!(Shuffled::new(1) < Shuffled::new(2));
}
