use thiserror::Error;

/// Configuration errors raised when building core state.
///
/// Runtime failures (blocked autoplay, missing assets, missing canvas) are not
/// errors: they degrade to reduced decoration and never reach this type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FolioError {
    #[error("playlist must contain at least one track")]
    EmptyPlaylist,
    #[error("site needs at least one section")]
    InvalidSectionCount,
    #[error("invalid volume value {0:?}")]
    InvalidVolume(String),
}
