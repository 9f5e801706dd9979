// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(ManifestError),
    Image(String),
    Calendar(String),
    Fragment(String),
}

/// Specific problems found while reading a gallery manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestError {
    /// The manifest is not valid TOML or does not match the expected layout.
    Syntax(String),

    /// The manifest parsed but declares no gallery entries.
    Empty,

    /// An entry has no base image URL.
    MissingSource {
        /// Position of the offending entry.
        index: usize,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Syntax(msg) => write!(f, "invalid manifest: {}", msg),
            ManifestError::Empty => write!(f, "manifest declares no gallery items"),
            ManifestError::MissingSource { index } => {
                write!(f, "gallery item {} has an empty src", index)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Calendar(e) => write!(f, "Calendar Error: {}", e),
            Error::Fragment(e) => write!(f, "Fragment Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ManifestError> for Error {
    fn from(err: ManifestError) -> Self {
        Error::Manifest(err)
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
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
    fn manifest_error_wraps_into_error() {
        let err: Error = ManifestError::MissingSource { index: 3 }.into();
        assert_eq!(
            format!("{}", err),
            "Manifest Error: gallery item 3 has an empty src"
        );
    }

    #[test]
    fn toml_error_maps_to_config() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("a = = b");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
