// SPDX-License-Identifier: MPL-2.0
use crate::application::port::FullscreenError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Frame(FrameError),
    Fullscreen(FullscreenError),
}

/// Reasons a frame image could not be made available.
/// Used to pick the placeholder message shown in place of the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The frame file or URL does not exist (HTTP 404, missing file)
    NotFound,

    /// The server answered with an unexpected status code
    HttpStatus(u16),

    /// The request could not be completed (DNS, TLS, timeout)
    Network(String),

    /// Local read failure
    Io(String),
}

impl FrameError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FrameError::NotFound => "error-frame-not-found",
            FrameError::HttpStatus(_) => "error-frame-http-status",
            FrameError::Network(_) => "error-frame-network",
            FrameError::Io(_) => "error-frame-io",
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::NotFound => write!(f, "Frame not found"),
            FrameError::HttpStatus(code) => write!(f, "Unexpected HTTP status {}", code),
            FrameError::Network(msg) => write!(f, "Network error: {}", msg),
            FrameError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Frame(e) => write!(f, "Frame Error: {}", e),
            Error::Fullscreen(e) => write!(f, "Fullscreen Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FrameError> for Error {
    fn from(err: FrameError) -> Self {
        Error::Frame(err)
    }
}

impl From<FullscreenError> for Error {
    fn from(err: FullscreenError) -> Self {
        Error::Fullscreen(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_convert_with_message() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "settings.toml").into();
        match err {
            Error::Io(message) => assert!(message.contains("settings.toml")),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn fullscreen_errors_keep_their_kind() {
        let err: Error = FullscreenError::NoSurface.into();
        assert!(matches!(err, Error::Fullscreen(FullscreenError::NoSurface)));
        assert!(format!("{err}").starts_with("Fullscreen Error"));
    }

    #[test]
    fn frame_error_i18n_keys() {
        assert_eq!(FrameError::NotFound.i18n_key(), "error-frame-not-found");
        assert_eq!(FrameError::HttpStatus(500).i18n_key(), "error-frame-http-status");
        assert_eq!(
            FrameError::Network("timeout".into()).i18n_key(),
            "error-frame-network"
        );
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("[rotation\n");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
