//! Pre/post increment and decrement semantics.

use nominal::prelude::*;

#[derive(StrongType, Clone, Copy, Debug)]
#[strong(caps(incrementable, decrementable, equatable))]
struct Counter(i32);

#[test]
fn pre_increment_returns_the_mutated_value() {
    let mut c = Counter::new(3);
    assert_eq!(*c.inc(), Counter::new(4));
    assert_eq!(c, Counter::new(4));
}

#[test]
fn post_increment_returns_the_previous_value() {
    let mut c = Counter::new(3);
    assert_eq!(c.post_inc(), Counter::new(3));
    assert_eq!(c, Counter::new(4));
}

#[test]
fn pre_decrement_returns_the_mutated_value() {
    let mut c = Counter::new(4);
    assert_eq!(*c.dec(), Counter::new(3));
    assert_eq!(c, Counter::new(3));
}

#[test]
fn post_decrement_returns_the_previous_value() {
    let mut c = Counter::new(4);
    assert_eq!(c.post_dec(), Counter::new(4));
    assert_eq!(c, Counter::new(3));
}

#[test]
fn each_step_moves_by_exactly_one_unit() {
    let mut c = Counter::new(0);
    c.inc();
    c.inc();
    c.post_inc();
    c.dec();
    assert_eq!(c, Counter::new(2));
}

#[test]
fn chained_pre_steps_act_on_the_same_wrapper() {
    let mut c = Counter::new(0);
    c.inc().inc().inc();
    assert_eq!(c, Counter::new(3));
}

#[test]
fn float_steps_use_the_float_unit() {
    #[derive(StrongType, Clone, Copy, Debug)]
    #[strong(caps(incrementable, equatable))]
    struct Gain(f64);

    let mut g = Gain::new(0.5);
    g.inc();
    assert_eq!(g, Gain::new(1.5));
}
