use crate::constants::SCROLL_BOTTOM_SLACK;

/// Raw scroll measurements of a section's content viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

/// Which boundary affordances to show for the active section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollState {
    pub scrollable: bool,
    pub at_top: bool,
    pub at_bottom: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scrollable: false,
            at_top: true,
            at_bottom: false,
        }
    }
}

impl ScrollState {
    pub fn measure(m: ScrollMetrics) -> Self {
        Self {
            scrollable: m.scroll_height > m.client_height,
            at_top: m.scroll_top <= 0.0,
            at_bottom: m.scroll_top + m.client_height >= m.scroll_height - SCROLL_BOTTOM_SLACK,
        }
    }

    #[inline]
    pub fn show_up_hint(&self) -> bool {
        self.scrollable && !self.at_top
    }

    #[inline]
    pub fn show_down_hint(&self) -> bool {
        self.scrollable && !self.at_bottom
    }
}
