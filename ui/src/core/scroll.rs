//! Scroll-derived navbar style.

/// Offset (CSS pixels) past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    /// Tall, transparent-on-oat navbar shown at the top of the page.
    AtTop,
    /// Compact, opaque navbar with a shadow.
    Scrolled,
}

impl NavbarStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::AtTop => "site-nav--top",
            Self::Scrolled => "site-nav--scrolled",
        }
    }
}

/// Derives [`NavbarStyle`] from the latest scroll offset.
///
/// There is no hysteresis band: every offset is compared directly against the
/// threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollStyleSwitch {
    threshold_px: f64,
    past_threshold: bool,
}

impl ScrollStyleSwitch {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            past_threshold: false,
        }
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }

    pub fn style(&self) -> NavbarStyle {
        if self.past_threshold {
            NavbarStyle::Scrolled
        } else {
            NavbarStyle::AtTop
        }
    }

    /// Feed a new offset. Returns the new style only when it changed.
    pub fn on_scroll(&mut self, offset_px: f64) -> Option<NavbarStyle> {
        let past = offset_px > self.threshold_px;
        if past == self.past_threshold {
            return None;
        }
        self.past_threshold = past;
        Some(self.style())
    }
}

impl Default for ScrollStyleSwitch {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}
