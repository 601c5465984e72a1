// Small pure helpers turning core state into DOM strings. Kept free of
// web-sys so they can be host-tested.
use folio_core::{SectionInfo, Theme};

/// CSS height for the progress bar fill.
pub fn percent_css(percent: f64) -> String {
    let p = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("{:.1}%", p)
}

/// Index carried by a progress dot or a `data-scroll-to` button. Accepts a
/// number or a section element id.
pub fn parse_section_ref(value: Option<&str>, sections: &[SectionInfo]) -> Option<usize> {
    let value = value?.trim();
    if let Ok(i) = value.parse::<usize>() {
        return (i < sections.len()).then_some(i);
    }
    let id = value.trim_start_matches('#');
    sections.iter().position(|s| s.element_id == id)
}

/// Volume slider value; out-of-range values are clamped, junk is ignored.
pub fn parse_slider(value: &str) -> Option<f32> {
    let v = value.trim().parse::<f32>().ok()?;
    v.is_finite().then(|| v.clamp(0.0, 1.0))
}

/// Volume carried by a `data-sound-*` attribute, falling back to `default`.
pub fn cue_volume(attr: Option<&str>, default: f32) -> f32 {
    attr.and_then(parse_slider).unwrap_or(default)
}

pub fn backdrop_css(path: &str) -> String {
    format!("url({})", path)
}

pub fn play_button_title(is_playing: bool) -> &'static str {
    if is_playing {
        "Pause"
    } else {
        "Play"
    }
}

pub fn player_toggle_title(is_open: bool) -> &'static str {
    if is_open {
        "Close Player"
    } else {
        "Open Music Player"
    }
}

pub fn theme_toggle_title(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Switch to Light Mode",
        Theme::Light => "Switch to Dark Mode",
    }
}

pub fn sound_toggle_title(enabled: bool) -> &'static str {
    if enabled {
        "Mute sounds"
    } else {
        "Enable sounds"
    }
}
