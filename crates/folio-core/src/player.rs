//! Background music player state.
//!
//! [`MusicPlayer`] never touches an audio element. Each operation updates the
//! logical [`PlayerState`] and returns the [`PlayerEffect`]s the owner of the
//! real audio handle must apply, in order. Autoplay rejections and user
//! gestures are reported back through [`MusicPlayer::play_rejected`] and
//! [`MusicPlayer::user_gesture`].

use crate::constants::{DEFAULT_VOLUME, MUSIC_DIR};
use crate::error::FolioError;
use smallvec::SmallVec;

/// One playlist entry. `file` is an opaque key resolved under the music dir.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub file: String,
    pub title: Option<String>,
}

impl Track {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn display_title(&self) -> String {
        match &self.title {
            Some(t) => t.clone(),
            None => display_title(&self.file),
        }
    }
}

/// Cosmetic title for a file name: no extension, no `(2)`-style copy
/// markers, single spaces.
pub fn display_title(file: &str) -> String {
    let stem = match file.rfind('.') {
        Some(dot) if dot > 0 && !file[dot + 1..].contains(' ') => &file[..dot],
        _ => file,
    };
    let mut out = String::with_capacity(stem.len());
    let mut rest = stem;
    while let Some(open) = rest.find('(') {
        let tail = &rest[open + 1..];
        match tail.find(')') {
            Some(close) if close > 0 && tail[..close].chars().all(|c| c.is_ascii_digit()) => {
                out.push_str(&rest[..open]);
                rest = &tail[close + 1..];
            }
            _ => {
                out.push_str(&rest[..=open]);
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ordered, non-empty list of tracks under a fixed directory.
#[derive(Clone, Debug)]
pub struct Playlist {
    dir: String,
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(dir: impl Into<String>, tracks: Vec<Track>) -> Result<Self, FolioError> {
        if tracks.is_empty() {
            return Err(FolioError::EmptyPlaylist);
        }
        Ok(Self {
            dir: dir.into(),
            tracks,
        })
    }

    pub fn from_files<I, S>(files: I) -> Result<Self, FolioError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MUSIC_DIR, files.into_iter().map(Track::new).collect())
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn url(&self, index: usize) -> Option<String> {
        let track = self.tracks.get(index)?;
        let sep = if self.dir.ends_with('/') { "" } else { "/" };
        Some(format!("{}{}{}", self.dir, sep, track.file))
    }
}

/// Instruction for whoever owns the audio element.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerEffect {
    LoadSource(String),
    Play,
    Pause,
    ApplyVolume(f32),
    PersistVolume(f32),
}

pub type PlayerEffects = SmallVec<[PlayerEffect; 4]>;

/// Durable storage for the last used volume.
pub trait VolumeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// In-memory store, used where no durable storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryVolumeStore {
    pub value: Option<String>,
}

impl VolumeStore for MemoryVolumeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// Parse a persisted volume, clamping into `[0, 1]`.
pub fn parse_volume(raw: &str) -> Result<f32, FolioError> {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v.clamp(0.0, 1.0)),
        _ => Err(FolioError::InvalidVolume(raw.to_string())),
    }
}

/// Starting volume: the persisted value, or the default when absent or bad.
pub fn load_volume(store: &dyn VolumeStore) -> f32 {
    match store.load() {
        Some(raw) => parse_volume(&raw).unwrap_or_else(|e| {
            log::warn!("[player] {}; using default volume", e);
            DEFAULT_VOLUME
        }),
        None => DEFAULT_VOLUME,
    }
}

pub fn format_volume(volume: f32) -> String {
    volume.to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub current_index: usize,
    pub is_playing: bool,
    pub volume: f32,
    pub is_muted: bool,
    pub is_open: bool,
    /// Playback was refused by the browser and waits for a user gesture.
    pub awaiting_gesture: bool,
}

pub struct MusicPlayer {
    playlist: Playlist,
    state: PlayerState,
}

impl MusicPlayer {
    pub fn new(playlist: Playlist, volume: f32) -> Self {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        };
        Self {
            playlist,
            state: PlayerState {
                current_index: 0,
                is_playing: false,
                volume,
                is_muted: false,
                is_open: true,
                awaiting_gesture: false,
            },
        }
    }

    pub fn with_store(playlist: Playlist, store: &dyn VolumeStore) -> Self {
        Self::new(playlist, load_volume(store))
    }

    /// Effects that bind a fresh audio element to the current state.
    pub fn startup(&self) -> PlayerEffects {
        let mut fx = PlayerEffects::new();
        if let Some(url) = self.current_url() {
            fx.push(PlayerEffect::LoadSource(url));
        }
        fx.push(PlayerEffect::ApplyVolume(self.effective_volume()));
        fx
    }

    pub fn toggle_play(&mut self) -> PlayerEffects {
        if self.state.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    pub fn play(&mut self) -> PlayerEffects {
        self.state.is_playing = true;
        self.state.awaiting_gesture = false;
        log::info!("[player] play {}", self.current_title());
        let mut fx = PlayerEffects::new();
        fx.push(PlayerEffect::Play);
        fx
    }

    pub fn pause(&mut self) -> PlayerEffects {
        self.state.is_playing = false;
        self.state.awaiting_gesture = false;
        log::info!("[player] pause");
        let mut fx = PlayerEffects::new();
        fx.push(PlayerEffect::Pause);
        fx
    }

    /// Advance circularly. Also the path taken when a track ends on its own.
    pub fn skip_next(&mut self) -> PlayerEffects {
        let next = (self.state.current_index + 1) % self.playlist.len();
        self.select(next)
    }

    pub fn track_ended(&mut self) -> PlayerEffects {
        self.skip_next()
    }

    fn select(&mut self, index: usize) -> PlayerEffects {
        self.state.current_index = index;
        let mut fx = PlayerEffects::new();
        if let Some(url) = self.current_url() {
            fx.push(PlayerEffect::LoadSource(url));
        }
        if self.state.is_playing {
            fx.push(PlayerEffect::Play);
        }
        log::info!("[player] track {} -> {}", index, self.current_title());
        fx
    }

    pub fn set_volume(&mut self, volume: f32) -> PlayerEffects {
        if !volume.is_finite() {
            return PlayerEffects::new();
        }
        self.state.volume = volume.clamp(0.0, 1.0);
        if self.state.volume > 0.0 {
            self.state.is_muted = false;
        }
        self.volume_effects()
    }

    pub fn toggle_mute(&mut self) -> PlayerEffects {
        self.state.is_muted = !self.state.is_muted;
        self.volume_effects()
    }

    fn volume_effects(&self) -> PlayerEffects {
        let mut fx = PlayerEffects::new();
        fx.push(PlayerEffect::ApplyVolume(self.effective_volume()));
        fx.push(PlayerEffect::PersistVolume(self.state.volume));
        fx
    }

    pub fn open(&mut self) {
        self.state.is_open = true;
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    pub fn toggle_open(&mut self) -> bool {
        self.state.is_open = !self.state.is_open;
        self.state.is_open
    }

    /// The browser refused a `play()` attempt. Stay logically playing.
    pub fn play_rejected(&mut self) {
        if self.state.is_playing {
            self.state.awaiting_gesture = true;
            log::debug!("[player] playback blocked; waiting for a user gesture");
        }
    }

    pub fn play_started(&mut self) {
        self.state.awaiting_gesture = false;
    }

    /// A click, touch or key press happened anywhere on the page.
    pub fn user_gesture(&mut self, element_paused: bool) -> PlayerEffects {
        let mut fx = PlayerEffects::new();
        if self.state.is_playing && (self.state.awaiting_gesture || element_paused) {
            fx.push(PlayerEffect::Play);
        }
        fx
    }

    pub fn effective_volume(&self) -> f32 {
        if self.state.is_muted {
            0.0
        } else {
            self.state.volume
        }
    }

    /// Mute icon shows for an explicit mute or a zero volume.
    pub fn shows_muted(&self) -> bool {
        self.state.is_muted || self.state.volume == 0.0
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_url(&self) -> Option<String> {
        self.playlist.url(self.state.current_index)
    }

    pub fn current_title(&self) -> String {
        self.playlist
            .get(self.state.current_index)
            .map(Track::display_title)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_title_strips_extension_and_copy_marker() {
        assert_eq!(display_title("Skybound Unique (2).mp3"), "Skybound Unique");
        assert_eq!(display_title("Forest  Theme .mp3"), "Forest Theme");
        assert_eq!(display_title("Overture (live).ogg"), "Overture (live)");
        assert_eq!(display_title("no-extension"), "no-extension");
    }

    #[test]
    fn playlist_url_joins_directory() {
        let p = Playlist::new("/music", vec![Track::new("a.mp3")]).unwrap();
        assert_eq!(p.url(0).as_deref(), Some("/music/a.mp3"));
        assert_eq!(p.url(1), None);
    }
}
