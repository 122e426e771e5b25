use super::constants::NAV_OFFSET_PX;
use smallvec::SmallVec;

/// Document-space extent of an in-page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub top: f64,
    pub height: f64,
}

impl Section {
    #[inline]
    pub fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos < self.top + self.height
    }
}

/// Nav links resolved to their sections; links without a target keep `None`
/// so indices still line up with the link list.
pub type SectionList = SmallVec<[Option<Section>; 8]>;

/// Index of the link whose section contains `scroll_y + NAV_OFFSET_PX`.
/// When sections overlap the last one in document order wins.
pub fn active_index(scroll_y: f64, sections: &[Option<Section>]) -> Option<usize> {
    let pos = scroll_y + NAV_OFFSET_PX;
    sections
        .iter()
        .rposition(|s| s.map(|s| s.contains(pos)).unwrap_or(false))
}

/// `#section` hrefs are the only ones tracked.
#[inline]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
