// Host-side tests for the DOM bindings and UI cadence.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants as timings;
use std::collections::HashSet;
use std::time::Duration;

#[test]
fn element_ids_are_unique_and_plain() {
    let ids = [
        APP_ROOT_ID,
        PARTICLE_CANVAS_ID,
        LOADER_ID,
        LOADER_BAR_ID,
        LOADER_LABEL_ID,
        LOADER_SKIP_ID,
        INTRO_VIDEO_ID,
        PROGRESS_ID,
        PROGRESS_FILL_ID,
        MASCOT_ID,
        MASCOT_BUBBLE_ID,
        MASCOT_TEXT_ID,
        MASCOT_HINT_ID,
        MASCOT_IMAGE_ID,
        PLAYER_WIDGET_ID,
        PLAYER_TITLE_ID,
        PLAYER_PLAY_ID,
        PLAYER_NEXT_ID,
        PLAYER_MUTE_ID,
        PLAYER_VOLUME_ID,
        PLAYER_TOGGLE_ID,
        THEME_TOGGLE_ID,
        SOUND_TOGGLE_ID,
    ];
    let mut seen = HashSet::new();
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{id} should be a bare id");
        assert!(!id.contains(' '), "{id} contains whitespace");
        assert!(seen.insert(id), "duplicate id {id}");
    }
    // Section ids come from the core table and must not collide with widgets.
    for section in folio_core::SECTIONS {
        assert!(!seen.contains(section.element_id));
    }
}

#[test]
fn attribute_selectors_match_their_attributes() {
    assert_eq!(SOUND_HOVER_SELECTOR, format!("[{}]", SOUND_HOVER_ATTR));
    assert_eq!(SOUND_CLICK_SELECTOR, format!("[{}]", SOUND_CLICK_ATTR));
    assert_eq!(SCROLL_TO_SELECTOR, format!("[{}]", SCROLL_TO_ATTR));
    assert!(LOADER_MODE_ATTR.starts_with("data-"));
    assert!(DOT_INDEX_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn clocks_resolve_the_core_timings() {
    assert!(UI_TICK_MS > 0 && LOADER_TICK_MS > 0);
    let ui_tick = Duration::from_millis(UI_TICK_MS as u64);
    let loader_tick = Duration::from_millis(LOADER_TICK_MS as u64);
    // Several ticks per timed phase, or the transitions would visibly lag.
    assert!(ui_tick * 10 <= timings::MASCOT_STARTUP_DELAY);
    assert!(ui_tick * 10 <= timings::MASCOT_MESSAGE_DURATION);
    assert!(loader_tick <= timings::LOADER_STEP_INTERVAL);
    assert!(loader_tick * 2 <= timings::LOADER_EXIT_DELAY);
}

#[test]
fn gesture_events_cover_pointer_touch_and_keys() {
    assert!(GESTURE_EVENTS.contains(&"click"));
    assert!(GESTURE_EVENTS.contains(&"touchstart"));
    assert!(GESTURE_EVENTS.contains(&"keydown"));
}
