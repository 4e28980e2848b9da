// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Result File Error: {0}")]
    ResultFile(String),

    #[error("Navigation Error: {0}")]
    Navigation(#[from] NavigationError),
}

/// Positional lookups that found no such neighbor.
///
/// Callers in the modal session treat every variant as "navigation
/// exhausted" and leave their state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Index past the end of the result set.
    #[error("index {index} out of range (total: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The identifier is not part of the active result set.
    #[error("unknown result id: {0}")]
    UnknownId(String),

    /// Already at the first or last item; navigation does not wrap.
    #[error("no {0} item")]
    NoNeighbor(&'static str),
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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io(std::io::Error::other("disk failure"));
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(inner) => assert!(inner.to_string().contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn navigation_error_wraps_into_crate_error() {
        let err: Error = NavigationError::IndexOutOfRange { index: 7, len: 5 }.into();
        assert_eq!(
            format!("{}", err),
            "Navigation Error: index 7 out of range (total: 5)"
        );
    }

    #[test]
    fn no_neighbor_names_direction() {
        let err = NavigationError::NoNeighbor("next");
        assert_eq!(err.to_string(), "no next item");
    }
}
