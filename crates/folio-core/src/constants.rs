use std::time::Duration;

// Shared tuning constants for the portfolio core.

// Sections
pub const SECTION_COUNT: usize = 5;
pub const INTERACTION_SCROLL_THRESHOLD_PX: f64 = 100.0; // scrolling past this counts as interaction

// Particle field
pub const LIGHT_PARTICLE_COUNT: usize = 25;
pub const DARK_PARTICLE_COUNT: usize = 35;
pub const PARTICLE_MIN_SIZE: f32 = 2.0;
pub const LIGHT_PARTICLE_SIZE_SPAN: f32 = 4.0;
pub const DARK_PARTICLE_SIZE_SPAN: f32 = 5.0;
pub const PARTICLE_DRIFT_X_SPAN: f32 = 0.5; // vx in [-span/2, span/2)
pub const PARTICLE_FALL_MIN: f32 = 0.2;
pub const PARTICLE_FALL_SPAN: f32 = 0.5;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
pub const PARTICLE_EDGE_MARGIN: f32 = 10.0; // off-canvas slack before wrap/respawn
pub const SWAY_FREQUENCY: f32 = 0.01; // radians per pixel of fall
pub const SWAY_AMPLITUDE: f32 = 0.3;

// Mascot
pub const MASCOT_STARTUP_DELAY: Duration = Duration::from_millis(3000);
pub const MASCOT_MESSAGE_DURATION: Duration = Duration::from_millis(5000);

// Music player
pub const VOLUME_STORAGE_KEY: &str = "music-player-volume";
pub const DEFAULT_VOLUME: f32 = 0.5;
pub const MUSIC_DIR: &str = "/music/";

// Loader
pub const LOADER_TIMER_DURATION: Duration = Duration::from_millis(2500);
pub const LOADER_FALLBACK_TIMEOUT: Duration = Duration::from_millis(8000);
pub const LOADER_EXIT_DELAY: Duration = Duration::from_millis(300);
pub const LOADER_STEP_INTERVAL: Duration = Duration::from_millis(150);
pub const LOADER_STEP_MAX: f32 = 15.0; // max simulated progress per step (percent)

// UI sounds
pub const SOUNDS_DIR: &str = "/sounds/";
pub const SOUND_EXTENSION: &str = "mp3";
