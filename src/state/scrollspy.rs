//! Scrollspy: which navigation id matches the section currently in view.
//!
//! Section selection is a fixed-offset heuristic: a marker line sits
//! `offset_px` below the viewport top and the last section whose top is at or
//! above that line wins. Two fallbacks cover the ends of the page: above the
//! first section the first id is active, and once the viewport touches the
//! document bottom the last id is active even if its section is too short to
//! ever reach the marker.

/// A section's absolute top in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionMark {
    pub id: String,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub document_height: f64,
}

/// Sections must be in document order.
pub fn pick_active<'a>(
    sections: &'a [SectionMark],
    vp: &Viewport,
    offset_px: f64,
    bottom_slack_px: f64,
) -> Option<&'a str> {
    let first = sections.first()?;
    let last = sections.last()?;
    if vp.scroll_y + vp.height >= vp.document_height - bottom_slack_px && vp.scroll_y > 0.0 {
        return Some(&last.id);
    }
    let marker = vp.scroll_y + offset_px;
    if marker < first.top {
        return Some(&first.id);
    }
    sections
        .iter()
        .take_while(|s| s.top <= marker)
        .last()
        .map(|s| s.id.as_str())
}

/// A nav id pinned after a click until `until_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct NavLock {
    pub id: String,
    pub until_ms: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSpy {
    pub active: Option<String>,
    pub lock: Option<NavLock>,
}

impl ScrollSpy {
    pub fn lock_to(&mut self, id: &str, now_ms: f64, duration_ms: f64) {
        self.active = Some(id.to_string());
        self.lock = Some(NavLock {
            id: id.to_string(),
            until_ms: now_ms + duration_ms,
        });
    }

    /// Folds a freshly computed id in. Returns whether `active` changed.
    pub fn observe(&mut self, computed: Option<&str>, now_ms: f64) -> bool {
        if let Some(lock) = &self.lock {
            let arrived = computed == Some(lock.id.as_str());
            if now_ms >= lock.until_ms || arrived {
                self.lock = None;
            } else {
                return false;
            }
        }
        if self.active.as_deref() == computed {
            return false;
        }
        self.active = computed.map(str::to_string);
        true
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}

#[cfg(test)]
impl ScrollSpy {
    fn is_locked(&self, now_ms: f64) -> bool {
        self.lock.as_ref().is_some_and(|l| now_ms < l.until_ms)
    }
}
