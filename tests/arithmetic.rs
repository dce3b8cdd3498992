//! The full numeric bundle on a single wrapper, plus a cross-type add.

use nominal::prelude::*;

#[derive(StrongType, Clone, Copy, Debug)]
#[strong(caps(arithmetic, addable(with i32)))]
struct Integer(i32);

#[test]
fn addable() {
    assert_eq!(Integer::new(1) + Integer::new(1), Integer::new(2));
    assert_eq!(Integer::new(1) + 1, Integer::new(2));
    assert_eq!(1 + Integer::new(1), Integer::new(2));
}

#[test]
fn subtractable() {
    assert_eq!(Integer::new(1) - Integer::new(1), Integer::new(0));
    assert_eq!(Integer::new(3) - Integer::new(1), Integer::new(2));
}

#[test]
fn multiplicable() {
    assert_eq!(Integer::new(2) * Integer::new(4), Integer::new(8));
}

#[test]
fn dividable() {
    assert_eq!(Integer::new(4) / Integer::new(2), Integer::new(2));
}

#[test]
fn modulable() {
    assert_eq!(Integer::new(4) % Integer::new(2), Integer::new(0));
    assert_eq!(Integer::new(7) % Integer::new(4), Integer::new(3));
}

#[test]
#[should_panic(expected = "divide by zero")]
fn division_by_zero_is_the_raw_behavior() {
    // Nothing is intercepted; integer division by zero panics as it would
    // on a bare i32.
    let _ = Integer::new(1) / Integer::new(0);
}

#[test]
fn agrees_with_raw_arithmetic() {
    for a in -4..=4 {
        for b in 1..=4 {
            assert_eq!(Integer::new(a) + Integer::new(b), Integer::new(a + b));
            assert_eq!(Integer::new(a) - Integer::new(b), Integer::new(a - b));
            assert_eq!(Integer::new(a) * Integer::new(b), Integer::new(a * b));
            assert_eq!(Integer::new(a) / Integer::new(b), Integer::new(a / b));
            assert_eq!(Integer::new(a) + b, Integer::new(a + b));
        }
    }
}

#[test]
fn float_hosts_work_too() {
    #[derive(StrongType, Clone, Copy, Debug)]
    #[strong(caps(arithmetic))]
    struct Meters(f64);

    assert_eq!(Meters::new(1.5) + Meters::new(0.5), Meters::new(2.0));
    assert!(Meters::new(1.0) < Meters::new(2.0));
    // Float division by zero is defined, not trapping.
    assert_eq!(Meters::new(1.0) / Meters::new(0.0), Meters::new(f64::INFINITY));
}
