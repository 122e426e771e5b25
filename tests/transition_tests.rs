// Host-side tests for page transition decisions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod transition {
    include!("../src/core/transition.rs");
}

use glam::Vec2;
use transition::*;

fn left_click() -> ClickInfo {
    ClickInfo::default()
}

#[test]
fn classifies_hrefs() {
    assert_eq!(classify_href("about.html"), LinkKind::SameSite);
    assert_eq!(classify_href("/projects/"), LinkKind::SameSite);
    assert_eq!(classify_href("../index.html"), LinkKind::SameSite);
    assert_eq!(classify_href("https://example.com"), LinkKind::External);
    assert_eq!(classify_href("HTTP://example.com"), LinkKind::External);
    assert_eq!(classify_href("//cdn.example.com/x"), LinkKind::External);
    assert_eq!(classify_href("#contact"), LinkKind::Fragment);
    assert_eq!(classify_href("mailto:hi@example.com"), LinkKind::Mail);
    assert_eq!(classify_href("tel:+100"), LinkKind::Other);
    assert_eq!(classify_href("javascript:void(0)"), LinkKind::Other);
    assert_eq!(classify_href("   "), LinkKind::Other);
}

#[test]
fn intercepts_plain_left_click_on_same_site_link() {
    assert!(should_intercept(&left_click(), "about.html"));
}

#[test]
fn leaves_external_fragment_and_mail_links_alone() {
    for href in ["https://example.com", "#top", "mailto:a@b.c", "tel:1", ""] {
        assert!(!should_intercept(&left_click(), href), "{href}");
    }
}

#[test]
fn leaves_modified_and_non_primary_clicks_alone() {
    let middle = ClickInfo { button: 1, ..left_click() };
    let ctrl = ClickInfo { modified: true, ..left_click() };
    let blank = ClickInfo { new_tab: true, ..left_click() };
    let download = ClickInfo { download: true, ..left_click() };
    for click in [middle, ctrl, blank, download] {
        assert!(!should_intercept(&click, "about.html"));
    }
}

#[test]
fn overlay_covers_farthest_corner() {
    let vp = Vec2::new(300.0, 400.0);
    assert_eq!(overlay_radius(Vec2::ZERO, vp), 500.0);
    assert_eq!(overlay_radius(vp, vp), 500.0);
    let centre = overlay_radius(vp * 0.5, vp);
    assert!((centre - 250.0).abs() < 1e-4);
}

#[test]
fn cached_page_after_exit_is_reset_once() {
    let mut leave = LeaveState::default();
    leave.begin();
    assert!(leave.is_leaving());
    assert!(leave.on_page_show(true));
    assert!(!leave.is_leaving());
    assert!(!leave.on_page_show(true));
}

#[test]
fn fresh_or_untouched_page_needs_no_reset() {
    let mut idle = LeaveState::default();
    assert!(!idle.on_page_show(true));

    let mut leaving = LeaveState::default();
    leaving.begin();
    assert!(!leaving.on_page_show(false));
    assert!(leaving.is_leaving());
}
