//! Conflicting capability selections are compile errors, never silently
//! resolved. The cases below are kept as commented-out demonstrations; each
//! fails with E0119 (conflicting implementations) when uncommented.

#![allow(dead_code)]

use nominal::prelude::*;

#[derive(StrongType, Clone, Copy, Debug)]
#[strong(caps(orderable))]
struct Ranked(i32);

// Case 1: orderable already carries the equality operators for the same
// operand pair.
//
// equatable!(Ranked);

// Case 2: the same selector twice.
//
// addable!(Ranked);
// addable!(Ranked);

// Case 3: two selectors targeting the same (trait, operand) pair through
// different result types.
//
// subtractable!(Ranked);
// subtractable!(Ranked, to i32);

// Case 4: a `with` operand equal to the host duplicates the self-typed
// form; the self-typed selector alone covers it.
//
// addable!(Ranked);
// addable!(Ranked, with Ranked);

// Distinct operand types are not a conflict:
#[derive(StrongType, Clone, Copy, Debug)]
#[strong(caps(addable, addable(with i32), equatable))]
struct Offset(i32);

#[test]
fn distinct_operand_pairs_coexist() {
    assert_eq!(Offset::new(1) + Offset::new(1), Offset::new(2));
    assert_eq!(Offset::new(1) + 1, Offset::new(2));
}

#[test]
fn the_survivor_still_works() {
    assert!(Ranked::new(1) < Ranked::new(2));
    assert!(Ranked::new(2) == Ranked::new(2));
}
