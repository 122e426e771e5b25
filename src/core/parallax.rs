use super::constants::*;
use glam::Vec2;

/// Parse a `data-parallax` value. Missing, unparseable, zero and non-finite
/// values all mean the default speed.
pub fn parse_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(PARALLAX_DEFAULT_SPEED)
}

#[inline]
pub fn scroll_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Cursor position relative to the viewport centre, scaled to
/// `[-RANGE/2, RANGE/2]` on each axis.
pub fn pointer_vector(client: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    (client / viewport - Vec2::splat(0.5)) * POINTER_PARALLAX_RANGE
}

/// Offset for the `index`-th planet; later planets move further.
#[inline]
pub fn pointer_offset(pointer: Vec2, index: usize) -> Vec2 {
    pointer * ((index + 1) as f32 * POINTER_PARALLAX_STEP)
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", px)
}

pub fn translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
