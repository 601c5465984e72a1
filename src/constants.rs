// DOM bindings and UI cadence for the web front-end. The markup provides
// these ids and classes; the Rust side only toggles classes, attributes and a
// few inline styles on them.

// Root + layers
pub const APP_ROOT_ID: &str = "app-root";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Loading overlay
pub const LOADER_ID: &str = "loading-screen";
pub const LOADER_BAR_ID: &str = "loading-bar";
pub const LOADER_LABEL_ID: &str = "loading-percent";
pub const LOADER_SKIP_ID: &str = "loading-skip";
pub const INTRO_VIDEO_ID: &str = "intro-video";
pub const LOADER_MODE_ATTR: &str = "data-loader";

// Scroll progress indicator
pub const PROGRESS_ID: &str = "scroll-progress";
pub const PROGRESS_FILL_ID: &str = "scroll-progress-fill";
pub const PROGRESS_DOT_SELECTOR: &str = ".progress-dot";
pub const SCROLL_TO_SELECTOR: &str = "[data-scroll-to]";
pub const SCROLL_TO_ATTR: &str = "data-scroll-to";
pub const DOT_INDEX_ATTR: &str = "data-index";

// Mascot
pub const MASCOT_ID: &str = "mascot";
pub const MASCOT_BUBBLE_ID: &str = "mascot-bubble";
pub const MASCOT_TEXT_ID: &str = "mascot-text";
pub const MASCOT_HINT_ID: &str = "mascot-hint";
pub const MASCOT_IMAGE_ID: &str = "mascot-image";

// Music player
pub const PLAYER_WIDGET_ID: &str = "music-player";
pub const PLAYER_TITLE_ID: &str = "music-track-name";
pub const PLAYER_PLAY_ID: &str = "music-play";
pub const PLAYER_NEXT_ID: &str = "music-next";
pub const PLAYER_MUTE_ID: &str = "music-mute";
pub const PLAYER_VOLUME_ID: &str = "music-volume";
pub const PLAYER_TOGGLE_ID: &str = "music-toggle";

// Global controls
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const SOUND_TOGGLE_ID: &str = "sound-toggle";
pub const SOUND_HOVER_SELECTOR: &str = "[data-sound-hover]";
pub const SOUND_CLICK_SELECTOR: &str = "[data-sound-click]";
pub const SOUND_HOVER_ATTR: &str = "data-sound-hover";
pub const SOUND_CLICK_ATTR: &str = "data-sound-click";

// State classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const ACTIVE_CLASS: &str = "is-active";
pub const READY_CLASS: &str = "is-ready";
pub const EXITING_CLASS: &str = "is-exiting";
pub const OPEN_CLASS: &str = "is-open";
pub const PLAYING_CLASS: &str = "playing";
pub const MUTED_CLASS: &str = "is-muted";

// Timer cadence (milliseconds)
pub const UI_TICK_MS: i32 = 100; // mascot clock
pub const LOADER_TICK_MS: i32 = 50; // loader clock

// Events that count as a user gesture for autoplay recovery
pub const GESTURE_EVENTS: [&str; 3] = ["click", "touchstart", "keydown"];
