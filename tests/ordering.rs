//! Comparison laws over wrapped integers, and consistency with the raws.

use nominal::prelude::*;

#[derive(StrongType, Clone, Copy, Debug)]
#[strong(caps(orderable))]
struct Rank(i32);

#[derive(StrongType, Clone, Copy, Debug)]
#[strong(caps(equatable))]
struct Code(u8);

#[test]
fn equality_is_reflexive_and_symmetric() {
    assert!(Code::new(1) == Code::new(1));
    assert!(Code::new(2) != Code::new(1));
    assert!(Code::new(1) != Code::new(2));
}

#[test]
fn ordering_laws() {
    let values = [-3, -1, 0, 2, 5];
    for &a in &values {
        // Reflexive.
        assert!(Rank::new(a) <= Rank::new(a));
        assert!(Rank::new(a) >= Rank::new(a));
        for &b in &values {
            // Antisymmetric.
            if Rank::new(a) <= Rank::new(b) && Rank::new(b) <= Rank::new(a) {
                assert!(Rank::new(a) == Rank::new(b));
            }
            // Consistent with the raw comparison.
            assert_eq!(Rank::new(a) < Rank::new(b), a < b);
            assert_eq!(Rank::new(a) == Rank::new(b), a == b);
            for &c in &values {
                // Transitive.
                if Rank::new(a) < Rank::new(b) && Rank::new(b) < Rank::new(c) {
                    assert!(Rank::new(a) < Rank::new(c));
                }
            }
        }
    }
}

#[test]
fn full_operator_surface() {
    assert!(Rank::new(1) <= Rank::new(1));
    assert!(Rank::new(1) >= Rank::new(1));
    assert!(Rank::new(2) > Rank::new(1));
    assert!(Rank::new(2) >= Rank::new(1));
    assert!(Rank::new(1) < Rank::new(2));
    assert!(Rank::new(1) <= Rank::new(2));
}
