// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Photo(PhotoError),
}

/// Reasons a listing photo could not be turned into an image handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// The reference is empty or uses a scheme we cannot load.
    UnsupportedSource(String),

    /// The remote server answered with a non-success status.
    HttpStatus(u16),

    /// The payload exceeded the configured byte limit.
    TooLarge { limit: usize },

    /// The payload is not a recognizable image format.
    NotAnImage,

    /// The fetch did not complete before the timeout.
    TimedOut,

    /// Transport or file system failure.
    Transfer(String),
}

impl PhotoError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PhotoError::UnsupportedSource(_) => "error-photo-unsupported-source",
            PhotoError::HttpStatus(_) => "error-photo-http-status",
            PhotoError::TooLarge { .. } => "error-photo-too-large",
            PhotoError::NotAnImage => "error-photo-not-an-image",
            PhotoError::TimedOut => "error-photo-timed-out",
            PhotoError::Transfer(_) => "error-photo-transfer",
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::UnsupportedSource(uri) => write!(f, "Unsupported photo source: {}", uri),
            PhotoError::HttpStatus(code) => write!(f, "HTTP status {}", code),
            PhotoError::TooLarge { limit } => write!(f, "Photo larger than {} bytes", limit),
            PhotoError::NotAnImage => write!(f, "Payload is not an image"),
            PhotoError::TimedOut => write!(f, "Photo fetch timed out"),
            PhotoError::Transfer(msg) => write!(f, "Transfer failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Photo(e) => write!(f, "Photo Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PhotoError> for Error {
    fn from(err: PhotoError) -> Self {
        Error::Photo(err)
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

impl From<reqwest::Error> for PhotoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PhotoError::TimedOut
        } else {
            PhotoError::Transfer(err.to_string())
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Photo(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn photo_error_wraps_into_error() {
        let err: Error = PhotoError::HttpStatus(404).into();
        assert_eq!(format!("{}", err), "Photo Error: HTTP status 404");
    }

    #[test]
    fn photo_error_i18n_keys() {
        assert_eq!(PhotoError::NotAnImage.i18n_key(), "error-photo-not-an-image");
        assert_eq!(PhotoError::TimedOut.i18n_key(), "error-photo-timed-out");
        assert_eq!(
            PhotoError::TooLarge { limit: 1 }.i18n_key(),
            "error-photo-too-large"
        );
    }
}
