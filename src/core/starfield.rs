use super::constants::{STAR_GLOW_ALPHA_SCALE, STAR_GLOW_EXTRA_RADIUS};
use glam::Vec2;
use rand::prelude::*;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub rgb: [u8; 3],
    pub alpha_scale: f32,
    pub extra_radius: f32,
}

/// Per-canvas configuration. The two presets cover both backgrounds the site
/// uses; the canvas picks one with its `data-starfield` attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldParams {
    /// Stars per pixel of `width + height`, inverted.
    pub density_divisor: f32,
    pub radius: Range<f32>,
    pub alpha: Range<f32>,
    pub twinkle: Range<f32>,
    /// Lower clamp for the random walk. Upper clamp is always 1.
    pub min_alpha: f32,
    pub core_rgb: [u8; 3],
    pub glow: Option<Glow>,
}

impl StarfieldParams {
    pub const COSMOS: StarfieldParams = StarfieldParams {
        density_divisor: 8.0,
        radius: 0.3..1.8,
        alpha: 0.3..0.9,
        twinkle: 0.005..0.025,
        min_alpha: 0.1,
        core_rgb: [255, 255, 255],
        glow: Some(Glow {
            rgb: [0, 245, 255],
            alpha_scale: STAR_GLOW_ALPHA_SCALE,
            extra_radius: STAR_GLOW_EXTRA_RADIUS,
        }),
    };

    pub const PLAIN: StarfieldParams = StarfieldParams {
        density_divisor: 10.0,
        radius: 0.3..1.5,
        alpha: 0.2..0.8,
        twinkle: 0.005..0.02,
        min_alpha: 0.0,
        core_rgb: [220, 230, 255],
        glow: None,
    };

    /// Resolve a `data-starfield` value. Unknown or empty names fall back to
    /// the cosmos preset.
    pub fn from_variant(name: &str) -> StarfieldParams {
        match name.trim() {
            "plain" | "simple" => Self::PLAIN,
            _ => Self::COSMOS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub twinkle_speed: f32,
}

/// One filled circle to paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub pos: Vec2,
    pub radius: f32,
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl Dot {
    pub fn css_color(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }
}

#[inline]
pub fn star_count(width: f64, height: f64, density_divisor: f32) -> usize {
    if width <= 0.0 || height <= 0.0 || density_divisor <= 0.0 {
        return 0;
    }
    ((width + height) / density_divisor as f64).floor() as usize
}

pub struct Starfield {
    params: StarfieldParams,
    width: f64,
    height: f64,
    stars: Vec<Star>,
    rng: StdRng,
}

impl Starfield {
    pub fn new(params: StarfieldParams, width: f64, height: f64, rng: StdRng) -> Self {
        let mut field = Self {
            params,
            width,
            height,
            stars: Vec::new(),
            rng,
        };
        field.regenerate(width, height);
        field
    }

    pub fn params(&self) -> &StarfieldParams {
        &self.params
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Discard every star and build a new set for the given viewport.
    pub fn regenerate(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let count = star_count(width, height, self.params.density_divisor);
        let p = &self.params;
        let rng = &mut self.rng;
        self.stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.gen_range(0.0..width as f32),
                    rng.gen_range(0.0..height as f32),
                ),
                radius: rng.gen_range(p.radius.clone()),
                alpha: rng.gen_range(p.alpha.clone()),
                twinkle_speed: rng.gen_range(p.twinkle.clone()),
            })
            .collect();
    }

    /// Random-walk every star's opacity by one frame.
    pub fn step(&mut self) {
        let lo = self.params.min_alpha.clamp(0.0, 1.0);
        for star in &mut self.stars {
            let jitter = self.rng.gen::<f32>() - 0.5;
            star.alpha = (star.alpha + jitter * star.twinkle_speed).clamp(lo, 1.0);
        }
    }

    /// Paint commands for the current frame, core circle first then glow.
    pub fn dots(&self) -> impl Iterator<Item = Dot> + '_ {
        let core_rgb = self.params.core_rgb;
        let glow = self.params.glow;
        self.stars.iter().flat_map(move |s| {
            let core = Dot {
                pos: s.pos,
                radius: s.radius,
                rgb: core_rgb,
                alpha: s.alpha,
            };
            let halo = glow.map(|g| Dot {
                pos: s.pos,
                radius: s.radius + g.extra_radius,
                rgb: g.rgb,
                alpha: s.alpha * g.alpha_scale,
            });
            std::iter::once(core).chain(halo)
        })
    }
}
