/// Trailing-edge debounce bookkeeping.
///
/// Every event calls [`Debouncer::arm`] and schedules a timer carrying the
/// returned generation. When a timer fires, [`Debouncer::fire`] reports whether
/// it is still the latest one; older timers are ignored, so a burst of events
/// produces a single run measured from the last event.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    fired: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn fire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.fired == generation {
            return false;
        }
        self.fired = generation;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.generation != self.fired
    }
}
