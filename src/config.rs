//! Page tuning knobs, read from an optional JSON block in `index.html`.
//!
//! ```html
//! <script type="application/json" id="page-config">{ "nav_lock_ms": 1200 }</script>
//! ```
//!
//! Every field has a default, so a partial object (or no block at all) is fine.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Distance below the viewport top at which a section counts as current.
    pub spy_offset_px: f64,
    /// Tolerance for "scrolled to the bottom".
    pub bottom_slack_px: f64,
    /// How long a clicked nav link stays active while the page smooth-scrolls.
    pub nav_lock_ms: f64,
    /// Share of the viewport height the about section's top must pass to reveal.
    pub reveal_ratio: f64,
    /// Viewport width below which the drawer opens directly under its card.
    pub drawer_breakpoint_px: f64,
    pub debug: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            spy_offset_px: 120.0,
            bottom_slack_px: 2.0,
            nav_lock_ms: 900.0,
            reveal_ratio: 0.85,
            drawer_breakpoint_px: 900.0,
            debug: false,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut cfg: PageConfig =
            serde_json::from_str(raw).map_err(|source| PageError::InvalidJson {
                source_id: CONFIG_ELEMENT_ID,
                source,
            })?;
        cfg.sanitize();
        Ok(cfg)
    }

    // Out-of-range numbers fall back to their defaults rather than breaking geometry.
    fn sanitize(&mut self) {
        let d = PageConfig::default();
        if !self.spy_offset_px.is_finite() || self.spy_offset_px < 0.0 {
            self.spy_offset_px = d.spy_offset_px;
        }
        if !self.bottom_slack_px.is_finite() || self.bottom_slack_px < 0.0 {
            self.bottom_slack_px = d.bottom_slack_px;
        }
        if !self.nav_lock_ms.is_finite() || self.nav_lock_ms < 0.0 {
            self.nav_lock_ms = d.nav_lock_ms;
        }
        if !(self.reveal_ratio > 0.0 && self.reveal_ratio <= 1.0) {
            self.reveal_ratio = d.reveal_ratio;
        }
        if !self.drawer_breakpoint_px.is_finite() || self.drawer_breakpoint_px < 0.0 {
            self.drawer_breakpoint_px = d.drawer_breakpoint_px;
        }
    }

    /// Reads `#page-config` from the live document, falling back to defaults.
    pub fn load() -> Self {
        match crate::dom::json_block(CONFIG_ELEMENT_ID) {
            Ok(Some(raw)) => match Self::from_json(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    crate::util::cwarn(&format!("{e}; using default page config"));
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                crate::util::cwarn(&e.to_string());
                Self::default()
            }
        }
    }
}
