use super::constants::{REVEAL_THRESHOLD, STAGGER_STEP_MS};
use fnv::FnvHashSet;

/// One-shot reveal state for elements tagged with an id at setup.
#[derive(Debug, Default)]
pub struct RevealTracker {
    observed: FnvHashSet<usize>,
    revealed: FnvHashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, id: usize) {
        if !self.revealed.contains(&id) {
            self.observed.insert(id);
        }
    }

    /// Feed one intersection entry. Returns `true` exactly once per observed
    /// id: on its first entry that is intersecting by at least
    /// `REVEAL_THRESHOLD` of its area. The id then stops being observed.
    pub fn on_intersection(&mut self, id: usize, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio < REVEAL_THRESHOLD || !self.observed.remove(&id) {
            return false;
        }
        self.revealed.insert(id)
    }

    pub fn is_observed(&self, id: usize) -> bool {
        self.observed.contains(&id)
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.contains(&id)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}

/// Delay before the `index`-th item of a staged group becomes visible.
#[inline]
pub fn stagger_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS)
}
