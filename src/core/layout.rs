use super::constants::*;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_mobile_landscape(&self) -> bool {
        self.width <= MOBILE_LANDSCAPE_MAX_WIDTH && self.width > self.height
    }

    pub fn layout_mode(&self) -> LayoutMode {
        if self.is_mobile_landscape() {
            LayoutMode::MobileLandscape
        } else {
            LayoutMode::Default
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Planets scattered across the top band of the screen.
    MobileLandscape,
    /// Stylesheet placement, no inline overrides.
    Default,
}

/// Inline properties the layout pass owns. Restoring the default layout
/// removes exactly these.
pub const PLANET_LAYOUT_PROPERTIES: [&str; 6] = [
    "top",
    "left",
    "right",
    "bottom",
    "transform",
    "animation-delay",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub top_pct: u32,
    pub left_pct: u32,
    pub delay_s: f64,
}

impl Placement {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            top_pct: rng.gen_range(PLANET_TOP_PCT.0..=PLANET_TOP_PCT.1),
            left_pct: rng.gen_range(PLANET_LEFT_PCT.0..=PLANET_LEFT_PCT.1),
            delay_s: rng.gen_range(0.0..PLANET_MAX_DELAY_SEC),
        }
    }

    /// Values for each of [`PLANET_LAYOUT_PROPERTIES`], in the same order.
    pub fn style_properties(&self) -> [(&'static str, String); 6] {
        [
            ("top", format!("{}%", self.top_pct)),
            ("left", format!("{}%", self.left_pct)),
            ("right", "auto".to_string()),
            ("bottom", "auto".to_string()),
            ("transform", "translate(-50%, 0)".to_string()),
            ("animation-delay", format!("{:.2}s", self.delay_s)),
        ]
    }
}
