//! Errors reported by the playback [`Controller`](crate::Controller).

use std::fmt;
use std::io;

/// Why a playback request was refused.
#[derive(Debug)]
pub enum PlaybackError {
    /// A session is running or paused, or a cancelled session's worker is
    /// still finishing its in-flight callback.
    AlreadyRunning,
    /// The request needs a running or paused session and there is none.
    NotActive,
    /// The worker thread could not be spawned.
    Spawn(io::Error),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => f.write_str("a playback session is already running"),
            Self::NotActive => f.write_str("no playback session is active"),
            Self::Spawn(e) => write!(f, "failed to spawn playback worker: {e}"),
        }
    }
}

impl std::error::Error for PlaybackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PlaybackError {
    fn from(e: io::Error) -> Self {
        Self::Spawn(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_and_source() {
        assert_eq!(
            PlaybackError::AlreadyRunning.to_string(),
            "a playback session is already running"
        );
        assert!(PlaybackError::NotActive.source().is_none());
        let e = PlaybackError::from(io::Error::other("no threads"));
        assert!(e.to_string().ends_with("no threads"));
        assert!(e.source().is_some());
    }
}
