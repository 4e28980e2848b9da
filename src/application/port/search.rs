// SPDX-License-Identifier: MPL-2.0
//! Search and geometry port definitions.
//!
//! The core never issues search requests or decodes images itself. A
//! [`SearchSource`] delivers finished result records, and an
//! [`ImageProbe`] reports the natural pixel size of a displayed image
//! (the "image ready" notification).
//!
//! # Implementation Note
//!
//! The file-backed adapters in `infrastructure` implement both traits for
//! the CLI driver. A GUI host provides its own.

use crate::domain::results::ResultItem;
use crate::error::Result;
use iced_core::Size;
use std::fmt;

// =============================================================================
// SearchSource
// =============================================================================

/// Produces the result records of one search action.
pub trait SearchSource {
    /// Runs the search and returns its results in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot deliver results.
    fn fetch(&mut self) -> Result<Vec<ResultItem>>;
}

// =============================================================================
// ProbeError
// =============================================================================

/// Reasons an image could not be made ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The local file is missing.
    NotFound,
    /// The reference cannot be resolved by this probe.
    Unsupported,
    /// The image data could not be decoded.
    Decode(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::NotFound => write!(f, "image file not found"),
            ProbeError::Unsupported => write!(f, "image reference not supported"),
            ProbeError::Decode(msg) => write!(f, "failed to decode image: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

// =============================================================================
// ImageProbe
// =============================================================================

/// Resolves the natural size of a result's full-resolution image.
pub trait ImageProbe {
    /// Natural width and height in pixels.
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] when the image cannot be loaded.
    fn natural_size(&self, item: &ResultItem) -> std::result::Result<Size, ProbeError>;
}
