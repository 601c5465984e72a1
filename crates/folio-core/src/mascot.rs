use crate::constants::{
    INTERACTION_SCROLL_THRESHOLD_PX, MASCOT_MESSAGE_DURATION, MASCOT_STARTUP_DELAY,
};
use std::time::Duration;

/// What the mascot overlay shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MascotState {
    Hidden,
    VisibleSilent,
    VisibleSpeaking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Where the mascot sits for a section, in viewport percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MascotAnchor {
    pub bottom_pct: f32,
    pub side: Side,
    pub inset_pct: f32,
}

impl MascotAnchor {
    const fn new(bottom_pct: f32, side: Side, inset_pct: f32) -> Self {
        Self {
            bottom_pct,
            side,
            inset_pct,
        }
    }

    /// Positioning properties to apply one by one. `None` clears the side the
    /// mascot is not anchored to, leaving unrelated inline styles alone.
    pub fn style_properties(&self) -> [(&'static str, Option<String>); 3] {
        let inset = Some(format!("{}%", self.inset_pct));
        let (left, right) = match self.side {
            Side::Left => (inset, None),
            Side::Right => (None, inset),
        };
        [
            ("bottom", Some(format!("{}%", self.bottom_pct))),
            ("left", left),
            ("right", right),
        ]
    }
}

pub const MASCOT_MESSAGES: [&str; 5] = [
    "Welcome! Scroll down to explore!",
    "Here's a bit about me and what I do!",
    "Check out my latest projects!",
    "Let's connect on social media!",
    "Have something to say? Send me a message!",
];

pub const MASCOT_ANCHORS: [MascotAnchor; 5] = [
    MascotAnchor::new(15.0, Side::Right, 5.0),
    MascotAnchor::new(20.0, Side::Left, 5.0),
    MascotAnchor::new(15.0, Side::Right, 8.0),
    MascotAnchor::new(20.0, Side::Left, 5.0),
    MascotAnchor::new(25.0, Side::Right, 5.0),
];

pub const MASCOT_HINT: &str = "Click me!";

/// Message for a section; unknown sections fall back to the first entry.
pub fn message_for(section: usize) -> &'static str {
    MASCOT_MESSAGES
        .get(section)
        .copied()
        .unwrap_or(MASCOT_MESSAGES[0])
}

pub fn anchor_for(section: usize) -> MascotAnchor {
    MASCOT_ANCHORS
        .get(section)
        .copied()
        .unwrap_or(MASCOT_ANCHORS[0])
}

/// Mascot state machine, advanced by [`MascotGuide::tick`].
///
/// The guide pops in after a startup delay. Once the visitor has scrolled past
/// a small threshold, every section change opens the speech bubble for a
/// fixed duration. Clicking the mascot flips the bubble without touching the
/// countdown.
#[derive(Clone, Debug)]
pub struct MascotGuide {
    visible: bool,
    speaking: bool,
    interacted: bool,
    section: usize,
    elapsed: Duration,
    startup_delay: Duration,
    message_duration: Duration,
    message_remaining: Option<Duration>,
}

impl Default for MascotGuide {
    fn default() -> Self {
        Self::new(MASCOT_STARTUP_DELAY, MASCOT_MESSAGE_DURATION)
    }
}

impl MascotGuide {
    pub fn new(startup_delay: Duration, message_duration: Duration) -> Self {
        Self {
            visible: false,
            speaking: false,
            interacted: false,
            section: 0,
            elapsed: Duration::ZERO,
            startup_delay,
            message_duration,
            message_remaining: None,
        }
    }

    /// Advance timers. Returns true when the visible state changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let before = self.state();
        self.elapsed += dt;
        if !self.visible && self.elapsed >= self.startup_delay {
            self.visible = true;
            log::info!("[mascot] visible");
        }
        if let Some(remaining) = self.message_remaining {
            match remaining.checked_sub(dt) {
                Some(left) if !left.is_zero() => self.message_remaining = Some(left),
                _ => {
                    self.message_remaining = None;
                    self.speaking = false;
                }
            }
        }
        before != self.state()
    }

    /// Feed the window scroll offset. Returns true the first time the visitor
    /// counts as having interacted.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if !self.interacted && scroll_y > INTERACTION_SCROLL_THRESHOLD_PX {
            self.interacted = true;
            log::info!("[mascot] visitor interacted");
            return true;
        }
        false
    }

    /// React to a new current section. Returns true when the bubble opened.
    pub fn on_section_change(&mut self, section: usize) -> bool {
        if section == self.section {
            return false;
        }
        self.section = section;
        if !self.interacted {
            return false;
        }
        self.speaking = true;
        self.message_remaining = Some(self.message_duration);
        log::info!("[mascot] speaking for section {}", section);
        true
    }

    pub fn on_click(&mut self) {
        self.speaking = !self.speaking;
    }

    pub fn state(&self) -> MascotState {
        match (self.visible, self.speaking) {
            (false, _) => MascotState::Hidden,
            (true, false) => MascotState::VisibleSilent,
            (true, true) => MascotState::VisibleSpeaking,
        }
    }

    pub fn has_interacted(&self) -> bool {
        self.interacted
    }

    /// The "click me" hint replaces section messages until the first scroll.
    pub fn show_hint(&self) -> bool {
        self.visible && !self.interacted
    }

    pub fn section(&self) -> usize {
        self.section
    }

    pub fn message(&self) -> &'static str {
        message_for(self.section)
    }

    pub fn anchor(&self) -> MascotAnchor {
        anchor_for(self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_sets_one_side_and_clears_the_other() {
        let [bottom, left, right] = MASCOT_ANCHORS[1].style_properties();
        assert_eq!(bottom, ("bottom", Some("20%".to_string())));
        assert_eq!(left, ("left", Some("5%".to_string())));
        assert_eq!(right, ("right", None));

        let [_, left, right] = MASCOT_ANCHORS[2].style_properties();
        assert_eq!(left, ("left", None));
        assert_eq!(right, ("right", Some("8%".to_string())));
    }

    #[test]
    fn out_of_range_section_uses_first_entry() {
        assert_eq!(message_for(42), MASCOT_MESSAGES[0]);
        assert_eq!(anchor_for(42), MASCOT_ANCHORS[0]);
    }
}
