// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
fn transition_and_debounce_delays_are_pinned() {
    assert_eq!(EXIT_TRANSITION_MS, 420);
    assert_eq!(LAYOUT_DEBOUNCE_MS, 120);
    assert_eq!(STAGGER_STEP_MS, 120);
    assert_eq!(OVERLAY_NAVIGATE_MS, 650);
}

#[test]
fn planet_band_matches_top_of_screen() {
    assert_eq!(PLANET_TOP_PCT, (2, 30));
    assert_eq!(PLANET_LEFT_PCT, (5, 90));
    assert_eq!(MOBILE_LANDSCAPE_MAX_WIDTH, 900.0);
    assert_eq!(PLANET_MAX_DELAY_SEC, 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(EMIT_INTERVAL_MIN_MS < EMIT_INTERVAL_MAX_MS);
    assert_eq!((EMIT_INTERVAL_MIN_MS, EMIT_INTERVAL_MAX_MS), (500, 1400));
    assert!(PARTICLE_DURATION_MIN_MS < PARTICLE_DURATION_MAX_MS);
    assert!(PARTICLE_DISTANCE_MIN > 0.0 && PARTICLE_DISTANCE_MIN < PARTICLE_DISTANCE_MAX);
    assert!(PLANET_TOP_PCT.0 < PLANET_TOP_PCT.1);
    assert!(PLANET_LEFT_PCT.0 < PLANET_LEFT_PCT.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_and_parallax_defaults() {
    assert_eq!(REVEAL_THRESHOLD, 0.1);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert_eq!(PARALLAX_DEFAULT_SPEED, 0.5);
    assert_eq!(NAV_OFFSET_PX, 100.0);
    assert!(EXIT_TRANSITION_MS < OVERLAY_NAVIGATE_MS);
}
