// Host-side tests for the starfield simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod starfield {
    include!("../src/core/starfield.rs");
}

use rand::prelude::*;
use starfield::*;

fn field(params: StarfieldParams, w: f64, h: f64) -> Starfield {
    Starfield::new(params, w, h, StdRng::seed_from_u64(7))
}

#[test]
fn star_count_follows_viewport_perimeter() {
    assert_eq!(star_count(1200.0, 800.0, 8.0), 250);
    assert_eq!(star_count(1200.0, 800.0, 10.0), 200);
    assert_eq!(star_count(380.0, 700.0, 8.0), 135);
    assert_eq!(star_count(0.0, 700.0, 8.0), 0);
    assert_eq!(star_count(800.0, 600.0, 0.0), 0);
}

#[test]
fn presets_use_their_own_density() {
    assert_eq!(field(StarfieldParams::COSMOS, 1200.0, 800.0).stars().len(), 250);
    assert_eq!(field(StarfieldParams::PLAIN, 1200.0, 800.0).stars().len(), 200);
}

#[test]
fn variant_names_resolve_to_presets() {
    assert_eq!(StarfieldParams::from_variant("plain"), StarfieldParams::PLAIN);
    assert_eq!(StarfieldParams::from_variant(" simple "), StarfieldParams::PLAIN);
    assert_eq!(StarfieldParams::from_variant("cosmos"), StarfieldParams::COSMOS);
    assert_eq!(StarfieldParams::from_variant(""), StarfieldParams::COSMOS);
}

#[test]
fn stars_start_inside_viewport_and_ranges() {
    let f = field(StarfieldParams::COSMOS, 640.0, 480.0);
    let p = f.params().clone();
    for s in f.stars() {
        assert!(s.pos.x >= 0.0 && s.pos.x < 640.0);
        assert!(s.pos.y >= 0.0 && s.pos.y < 480.0);
        assert!(p.radius.contains(&s.radius));
        assert!(p.alpha.contains(&s.alpha));
        assert!(p.twinkle.contains(&s.twinkle_speed));
    }
}

#[test]
fn opacity_stays_in_unit_range_after_many_frames() {
    for params in [StarfieldParams::COSMOS, StarfieldParams::PLAIN] {
        let min = params.min_alpha;
        let mut f = field(params, 300.0, 200.0);
        for _ in 0..5_000 {
            f.step();
            for s in f.stars() {
                assert!(s.alpha >= min && s.alpha <= 1.0, "alpha {} escaped", s.alpha);
            }
        }
    }
}

#[test]
fn opacity_clamps_even_with_large_twinkle() {
    let params = StarfieldParams {
        twinkle: 5.0..10.0,
        ..StarfieldParams::PLAIN
    };
    let mut f = field(params, 100.0, 100.0);
    for _ in 0..200 {
        f.step();
    }
    assert!(f.stars().iter().all(|s| (0.0..=1.0).contains(&s.alpha)));
}

#[test]
fn regenerate_replaces_the_whole_set() {
    let mut f = field(StarfieldParams::COSMOS, 1200.0, 800.0);
    let before: Vec<_> = f.stars().iter().map(|s| s.pos).collect();
    f.regenerate(820.0, 400.0);
    assert_eq!(f.size(), (820.0, 400.0));
    assert_eq!(f.stars().len(), star_count(820.0, 400.0, 8.0));
    for s in f.stars() {
        assert!(s.pos.x < 820.0 && s.pos.y < 400.0);
    }
    let survivors = f.stars().iter().filter(|s| before.contains(&s.pos)).count();
    assert_eq!(survivors, 0);
}

#[test]
fn glow_preset_emits_core_then_halo() {
    let f = field(StarfieldParams::COSMOS, 160.0, 160.0);
    let dots: Vec<Dot> = f.dots().collect();
    assert_eq!(dots.len(), f.stars().len() * 2);
    let (star, core, halo) = (&f.stars()[0], dots[0], dots[1]);
    assert_eq!(core.rgb, [255, 255, 255]);
    assert_eq!(core.alpha, star.alpha);
    assert_eq!(halo.rgb, [0, 245, 255]);
    assert!((halo.radius - (star.radius + 1.5)).abs() < 1e-6);
    assert!((halo.alpha - star.alpha * 0.3).abs() < 1e-6);
}

#[test]
fn plain_preset_has_no_halo() {
    let f = field(StarfieldParams::PLAIN, 160.0, 160.0);
    assert_eq!(f.dots().count(), f.stars().len());
}

#[test]
fn dot_color_is_css_rgba() {
    let dot = Dot {
        pos: glam::Vec2::ZERO,
        radius: 1.0,
        rgb: [0, 245, 255],
        alpha: 0.25,
    };
    assert_eq!(dot.css_color(), "rgba(0, 245, 255, 0.250)");
}
