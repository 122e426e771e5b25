pub mod constants;
pub mod debounce;
pub mod layout;
pub mod nav;
pub mod parallax;
pub mod particles;
pub mod reveal;
/// Twinkling star simulation, independent of any drawing surface.
///
/// A `Starfield` owns its stars and random source. The web renderer calls
/// `Starfield::step` once per animation frame and paints the `Dot`s it gets
/// back from `Starfield::dots`.
pub mod starfield;
pub mod transition;

pub use debounce::Debouncer;
pub use layout::{LayoutMode, Placement, Viewport};
pub use reveal::RevealTracker;
pub use starfield::{Starfield, StarfieldParams};
