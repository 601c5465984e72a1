use crate::constants::{SOUNDS_DIR, SOUND_EXTENSION};

/// Named UI cue with its usual volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundCue {
    pub name: &'static str,
    pub volume: f32,
}

pub const HOVER: SoundCue = SoundCue {
    name: "hover",
    volume: 0.2,
};
pub const HOVER_SOFT: SoundCue = SoundCue {
    name: "hover",
    volume: 0.15,
};
pub const CLICK: SoundCue = SoundCue {
    name: "click",
    volume: 0.3,
};
pub const CLICK_STRONG: SoundCue = SoundCue {
    name: "click",
    volume: 0.4,
};

#[derive(Clone, Debug, PartialEq)]
pub struct SoundRequest {
    pub name: String,
    pub path: String,
    pub volume: f32,
}

pub fn sound_path(name: &str) -> String {
    format!("{}{}.{}", SOUNDS_DIR, name, SOUND_EXTENSION)
}

/// Fire-and-forget cue gate with a global mute.
#[derive(Clone, Debug)]
pub struct SoundTrigger {
    enabled: bool,
}

impl Default for SoundTrigger {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SoundTrigger {
    /// `None` while sounds are muted or the name is blank.
    pub fn request(&self, name: &str, volume: f32) -> Option<SoundRequest> {
        if !self.enabled || name.trim().is_empty() {
            return None;
        }
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Some(SoundRequest {
            name: name.to_string(),
            path: sound_path(name),
            volume,
        })
    }

    pub fn cue(&self, cue: SoundCue) -> Option<SoundRequest> {
        self.request(cue.name, cue.volume)
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        log::info!("[sound] enabled={}", self.enabled);
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
