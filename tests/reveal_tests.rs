// Host-side tests for reveal bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn reveals_only_after_intersecting() {
    let mut t = RevealTracker::new();
    t.observe(0);
    assert!(!t.on_intersection(0, false, 0.0));
    assert!(t.is_observed(0));
    assert!(!t.is_revealed(0));
    assert!(t.on_intersection(0, true, 0.4));
    assert!(t.is_revealed(0));
}

#[test]
fn slight_overlap_below_threshold_does_not_reveal() {
    let mut t = RevealTracker::new();
    t.observe(2);
    assert!(!t.on_intersection(2, true, 0.02));
    assert!(!t.on_intersection(2, true, 0.05));
    assert!(t.is_observed(2));
    assert!(!t.is_revealed(2));
    assert!(t.on_intersection(2, true, 0.1));
    assert!(t.is_revealed(2));
}

#[test]
fn reveal_happens_at_most_once() {
    let mut t = RevealTracker::new();
    t.observe(4);
    assert!(t.on_intersection(4, true, 1.0));
    for _ in 0..10 {
        assert!(!t.on_intersection(4, true, 1.0));
        assert!(!t.on_intersection(4, false, 0.0));
    }
    assert!(!t.is_observed(4));
    assert!(t.is_revealed(4));
}

#[test]
fn revealed_elements_are_not_observed_again() {
    let mut t = RevealTracker::new();
    t.observe(1);
    assert!(t.on_intersection(1, true, 0.5));
    t.observe(1);
    assert!(!t.is_observed(1));
    assert!(!t.on_intersection(1, true, 0.5));
}

#[test]
fn unknown_ids_are_ignored() {
    let mut t = RevealTracker::new();
    assert!(!t.on_intersection(9, true, 1.0));
    assert!(!t.is_revealed(9));
}

#[test]
fn pending_counts_unrevealed() {
    let mut t = RevealTracker::new();
    (0..3).for_each(|i| t.observe(i));
    assert_eq!(t.pending(), 3);
    t.on_intersection(1, true, 0.5);
    assert_eq!(t.pending(), 2);
}

#[test]
fn stagger_delays_grow_in_document_order() {
    assert_eq!(stagger_delay_ms(0), 0);
    assert_eq!(stagger_delay_ms(1), 120);
    assert_eq!(stagger_delay_ms(5), 600);
}
