//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
///
/// Framing and camera-derivation problems are never represented here: a
/// missing or malformed authored camera falls back to computed framing, and
/// a degenerate bounding volume fails closed to a fixed distance. Only
/// conditions the caller must decide about (clip resolution, options I/O)
/// propagate.
#[derive(Debug)]
pub enum ViewerError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// No playback action exists for the requested clip name.
    ///
    /// The playback state machine treats the transition as a no-op; the
    /// caller decides whether to downgrade to `Stopped`.
    ClipUnavailable(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ClipUnavailable(name) => {
                write!(f, "no playback action for clip {name:?}")
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
