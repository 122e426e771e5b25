use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    SameSite,
    External,
    Fragment,
    Mail,
    /// `tel:`, `javascript:` and empty hrefs.
    Other,
}

const EXTERNAL_PREFIXES: [&str; 3] = ["http:", "https:", "//"];

pub fn classify_href(href: &str) -> LinkKind {
    let href = href.trim();
    let lower = href.to_ascii_lowercase();
    if href.is_empty() || lower.starts_with("tel:") || lower.starts_with("javascript:") {
        LinkKind::Other
    } else if href.starts_with('#') {
        LinkKind::Fragment
    } else if lower.starts_with("mailto:") {
        LinkKind::Mail
    } else if EXTERNAL_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        LinkKind::External
    } else {
        LinkKind::SameSite
    }
}

/// The parts of a click the interception decision depends on.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickInfo {
    pub button: i16,
    pub modified: bool,
    pub new_tab: bool,
    pub download: bool,
}

/// Whether a click on a link should play the exit animation instead of
/// navigating immediately.
pub fn should_intercept(click: &ClickInfo, href: &str) -> bool {
    click.button == 0
        && !click.modified
        && !click.new_tab
        && !click.download
        && classify_href(href) == LinkKind::SameSite
}

/// Radius an overlay centred at `point` needs to cover the whole viewport.
pub fn overlay_radius(point: Vec2, viewport: Vec2) -> f32 {
    let corners = [
        Vec2::ZERO,
        Vec2::new(viewport.x, 0.0),
        Vec2::new(0.0, viewport.y),
        viewport,
    ];
    corners
        .iter()
        .map(|c| c.distance(point))
        .fold(0.0, f32::max)
}

/// Whether the page has started an exit transition. A page restored from the
/// back/forward cache comes back in that state and has to be reset.
#[derive(Debug, Default)]
pub struct LeaveState {
    leaving: bool,
}

impl LeaveState {
    pub fn begin(&mut self) {
        self.leaving = true;
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving
    }

    /// Handle `pageshow`. Returns `true` when exit styling has to be undone.
    pub fn on_page_show(&mut self, persisted: bool) -> bool {
        if !persisted || !self.leaving {
            return false;
        }
        self.leaving = false;
        true
    }
}
