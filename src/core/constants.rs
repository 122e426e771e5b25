/// Tuning constants for every effect on the page.
///
/// Times are milliseconds unless the name says otherwise; lengths are CSS px.

// Starfield
pub const STAR_GLOW_EXTRA_RADIUS: f32 = 1.5;
pub const STAR_GLOW_ALPHA_SCALE: f32 = 0.3;

// Particle emitter
pub const EMIT_INTERVAL_MIN_MS: u32 = 500;
pub const EMIT_INTERVAL_MAX_MS: u32 = 1400;
pub const PARTICLE_DURATION_MIN_MS: u32 = 900;
pub const PARTICLE_DURATION_MAX_MS: u32 = 1600;
pub const PARTICLE_DISTANCE_MIN: f32 = 0.6; // multiples of the planet half-size
pub const PARTICLE_DISTANCE_MAX: f32 = 1.2;
pub const PARTICLE_REMOVE_GRACE_MS: u32 = 100; // fallback removal after the transition

// Responsive layout
pub const MOBILE_LANDSCAPE_MAX_WIDTH: f64 = 900.0;
pub const PLANET_TOP_PCT: (u32, u32) = (2, 30);
pub const PLANET_LEFT_PCT: (u32, u32) = (5, 90);
pub const PLANET_MAX_DELAY_SEC: f64 = 2.0;
pub const LAYOUT_DEBOUNCE_MS: u32 = 120;

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_START_OFFSET_PX: f32 = 20.0;
pub const STAGGER_STEP_MS: u32 = 120;

// Parallax
pub const PARALLAX_DEFAULT_SPEED: f64 = 0.5;
pub const POINTER_PARALLAX_RANGE: f32 = 20.0; // normalized cursor [-0.5, 0.5] -> px
pub const POINTER_PARALLAX_STEP: f32 = 3.0; // per-planet multiplier increment

// Navigation highlight
pub const NAV_OFFSET_PX: f64 = 100.0;
pub const NAV_ACTIVE_COLOR: &str = "var(--accent-cyan)";
pub const NAV_IDLE_COLOR: &str = "var(--text-secondary)";

// Page transitions
pub const EXIT_TRANSITION_MS: u32 = 420;
pub const OVERLAY_NAVIGATE_MS: u32 = 650;
