// Daemon error types
//
// Every failure of a daemon call collapses into one of three kinds.
// Each kind keeps its short machine-readable code alongside the
// human-readable message.

use thiserror::Error;

/// Error returned by daemon requests.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// The request never completed (connection refused, timeout) or
    /// the response body could not be read.
    #[error("{0}")]
    Transport(reqwest::Error),

    /// The daemon answered with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u16),

    /// The request could not be constructed or its response could not
    /// be decoded (bad URL, client setup, serialization).
    #[error("{0}")]
    Request(String),
}

impl DaemonError {
    /// Short machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            DaemonError::Transport(_) => "DAEMON_ERROR",
            DaemonError::Http(_) => "DAEMON_HTTP",
            DaemonError::Request(_) => "NATIVE_ERROR",
        }
    }

    /// HTTP status code, if this error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            DaemonError::Http(code) => Some(*code),
            _ => None,
        }
    }
}
