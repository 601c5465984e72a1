use crate::constants::*;
use crate::error::FolioError;
use crate::loader::ReadyCondition;
use crate::player::{Playlist, Track};
use crate::scroll::{SectionInfo, SectionTracker, SectionVisibility, SECTIONS};
use crate::theme::backdrop_assets;
use std::time::Duration;

/// How the intro screen decides it is done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderMode {
    #[default]
    Timer,
    Assets,
    Video,
}

impl LoaderMode {
    /// Parse the `data-loader` attribute value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "timer" => Some(LoaderMode::Timer),
            "assets" | "preload" => Some(LoaderMode::Assets),
            "video" | "clip" => Some(LoaderMode::Video),
            _ => None,
        }
    }
}

/// Site-wide configuration.
///
/// - `sections`: the full-viewport blocks in scroll order
/// - `tracks`: background music file names under `music_dir`
/// - `loader_mode` / `loader_duration` / `loader_fallback`: intro gating
/// - `mascot_delay` / `mascot_message`: mascot timings
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub sections: Vec<SectionInfo>,
    pub music_dir: String,
    pub tracks: Vec<String>,
    pub loader_mode: LoaderMode,
    pub loader_duration: Duration,
    pub loader_fallback: Duration,
    pub mascot_delay: Duration,
    pub mascot_message: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sections: SECTIONS.to_vec(),
            music_dir: MUSIC_DIR.to_string(),
            tracks: DEFAULT_TRACKS.iter().map(|s| s.to_string()).collect(),
            loader_mode: LoaderMode::default(),
            loader_duration: LOADER_TIMER_DURATION,
            loader_fallback: LOADER_FALLBACK_TIMEOUT,
            mascot_delay: MASCOT_STARTUP_DELAY,
            mascot_message: MASCOT_MESSAGE_DURATION,
        }
    }
}

pub const DEFAULT_TRACKS: [&str; 9] = [
    "Forest of Little Wonders.mp3",
    "Skybound Over.mp3",
    "Skybound Overture.mp3",
    "Skybound Unique (2).mp3",
    "Skyward Promise V2.mp3",
    "Skyward Promise.mp3",
    "Skyward Stealth.mp3",
    "Skyward.mp3",
    "Unaware.mp3",
];

impl SiteConfig {
    pub fn validate(&self) -> Result<(), FolioError> {
        if self.sections.is_empty() {
            return Err(FolioError::InvalidSectionCount);
        }
        if self.tracks.is_empty() {
            return Err(FolioError::EmptyPlaylist);
        }
        Ok(())
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Tracker sized to the configured sections.
    pub fn section_tracker(&self) -> SectionTracker {
        SectionTracker::new(self.section_count())
    }

    pub fn section_visibility(&self) -> SectionVisibility {
        SectionVisibility::new(self.section_count())
    }

    pub fn playlist(&self) -> Result<Playlist, FolioError> {
        Playlist::new(
            self.music_dir.clone(),
            self.tracks.iter().map(Track::new).collect(),
        )
    }

    /// Images preloaded when the loader runs in asset mode.
    pub fn preload_assets(&self) -> Vec<&'static str> {
        backdrop_assets()
    }

    /// Readiness condition for the chosen mode. Asset mode needs the number of
    /// assets that will actually be requested.
    pub fn ready_condition(&self, asset_count: usize) -> ReadyCondition {
        match self.loader_mode {
            LoaderMode::Timer => ReadyCondition::Timer(self.loader_duration),
            LoaderMode::Assets => ReadyCondition::Assets { total: asset_count },
            LoaderMode::Video => ReadyCondition::ClipEnded,
        }
    }
}
