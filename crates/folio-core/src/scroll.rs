//! Scroll-position math and per-section visibility.
//!
//! Two independent signals live here. [`SectionTracker`] derives the current
//! section from the normalized scroll offset and feeds the mascot and the
//! progress dots. [`SectionVisibility`] records threshold-based visibility
//! reported by an intersection observer and drives entrance animations. They
//! can disagree near section boundaries and are kept apart on purpose.

use crate::constants::INTERACTION_SCROLL_THRESHOLD_PX;

/// Static description of one full-viewport section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionInfo {
    pub name: &'static str,
    pub element_id: &'static str,
    pub dot_color: &'static str,
    /// Fraction of the section box that must be visible to count as shown.
    pub visibility_threshold: f64,
}

pub const SECTIONS: [SectionInfo; 5] = [
    SectionInfo {
        name: "Home",
        element_id: "hero-section",
        dot_color: "#FFD700",
        visibility_threshold: 0.1,
    },
    SectionInfo {
        name: "About",
        element_id: "about-section",
        dot_color: "#87CEEB",
        visibility_threshold: 0.2,
    },
    SectionInfo {
        name: "Projects",
        element_id: "projects-section",
        dot_color: "#98D8C8",
        visibility_threshold: 0.1,
    },
    SectionInfo {
        name: "Links",
        element_id: "links-section",
        dot_color: "#FFB7C5",
        visibility_threshold: 0.2,
    },
    SectionInfo {
        name: "Contact",
        element_id: "contact-section",
        dot_color: "#E6E6FA",
        visibility_threshold: 0.1,
    },
];

/// Viewport and document geometry sampled on a scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    pub fn scrollable_range(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Normalized scroll position in `[0, 1]`. Pages that cannot scroll report 0.
pub fn scroll_progress(m: &ScrollMetrics) -> f64 {
    let range = m.scrollable_range();
    if !(range > 0.0) || !m.scroll_y.is_finite() {
        return 0.0;
    }
    (m.scroll_y / range).clamp(0.0, 1.0)
}

/// `floor(progress * count)` clamped to the last section.
pub fn section_index(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((p * count as f64).floor() as usize).min(count - 1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChange {
    pub from: usize,
    pub to: usize,
}

/// Snapshot of what the progress indicator should display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressView {
    pub percent: f64,
    pub current: usize,
    pub indicator_visible: bool,
}

/// Percentage-based section tracker fed from every scroll event.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    count: usize,
    current: usize,
    progress: f64,
    scroll_y: f64,
}

impl SectionTracker {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: 0,
            progress: 0.0,
            scroll_y: 0.0,
        }
    }

    /// Recompute from fresh geometry. Returns the change when the section
    /// index moved.
    pub fn update(&mut self, metrics: &ScrollMetrics) -> Option<SectionChange> {
        self.scroll_y = metrics.scroll_y;
        self.progress = scroll_progress(metrics);
        let next = section_index(self.progress, self.count);
        if next == self.current {
            return None;
        }
        let change = SectionChange {
            from: self.current,
            to: next,
        };
        self.current = next;
        Some(change)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The indicator stays hidden until the page has scrolled a little.
    pub fn indicator_visible(&self) -> bool {
        self.scroll_y > INTERACTION_SCROLL_THRESHOLD_PX
    }

    pub fn view(&self) -> ProgressView {
        ProgressView {
            percent: self.progress * 100.0,
            current: self.current,
            indicator_visible: self.indicator_visible(),
        }
    }

    /// Valid navigation target, or `None` for an out-of-range dot.
    pub fn target(&self, index: usize) -> Option<usize> {
        (index < self.count).then_some(index)
    }
}

/// Per-section visibility flags set by an intersection observer.
#[derive(Clone, Debug)]
pub struct SectionVisibility {
    visible: Vec<bool>,
}

impl SectionVisibility {
    pub fn new(count: usize) -> Self {
        Self {
            visible: vec![false; count],
        }
    }

    /// Record an observer report. Returns true when the flag changed.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.visible.get_mut(index) {
            Some(v) if *v != intersecting => {
                *v = intersecting;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }
}
