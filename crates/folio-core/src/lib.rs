//! Platform-agnostic core of the folio front-end.
//!
//! Everything here is plain Rust: no DOM, no canvas, no audio element. The web
//! crate owns the browser objects and drives these types from event listeners,
//! timers and animation frames, applying whatever they report back.

pub mod animation;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod mascot;
pub mod particles;
pub mod player;
pub mod scroll;
pub mod sound;
pub mod theme;

pub use animation::*;
pub use config::*;
pub use error::*;
pub use loader::*;
pub use mascot::*;
pub use particles::*;
pub use player::*;
pub use scroll::*;
pub use sound::*;
pub use theme::*;
