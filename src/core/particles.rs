use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Where a particle starts, how far it travels and for how long.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub origin: Vec2,
    pub offset: Vec2,
    pub duration_ms: u32,
}

/// Delay before a planet's next particle.
#[inline]
pub fn next_interval_ms<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(EMIT_INTERVAL_MIN_MS..=EMIT_INTERVAL_MAX_MS)
}

/// Roll a particle for an element centred at `center` with the given box size.
/// Elements without a layout box (`display: none`, detached) emit nothing.
pub fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    center: Vec2,
    box_size: Vec2,
) -> Option<ParticleSpec> {
    if !(box_size.x > 0.0 && box_size.y > 0.0) {
        return None;
    }
    let half = box_size.max_element() * 0.5;
    let angle = rng.gen_range(0.0..TAU);
    let distance = half * rng.gen_range(PARTICLE_DISTANCE_MIN..=PARTICLE_DISTANCE_MAX);
    Some(ParticleSpec {
        origin: center,
        offset: Vec2::from_angle(angle) * distance,
        duration_ms: rng.gen_range(PARTICLE_DURATION_MIN_MS..=PARTICLE_DURATION_MAX_MS),
    })
}

impl ParticleSpec {
    /// Inline style for the particle node: fixed at the origin, with the
    /// travel vector and duration handed to the stylesheet as variables.
    pub fn style_properties(&self) -> [(&'static str, String); 6] {
        [
            ("position", "fixed".to_string()),
            ("left", format!("{:.1}px", self.origin.x)),
            ("top", format!("{:.1}px", self.origin.y)),
            ("--tx", format!("{:.1}px", self.offset.x)),
            ("--ty", format!("{:.1}px", self.offset.y)),
            ("--dur", format!("{}ms", self.duration_ms)),
        ]
    }

    /// Time after which the node is removed even if no `transitionend` fired.
    pub fn removal_deadline_ms(&self) -> u32 {
        self.duration_ms + PARTICLE_REMOVE_GRACE_MS
    }
}
