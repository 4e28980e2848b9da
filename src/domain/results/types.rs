// SPDX-License-Identifier: MPL-2.0
//! Search result types for the domain layer.
//!
//! A result is either a hit from the local image library or a photo from an
//! external provider. Both share one capability surface (identifier, title,
//! preview and full-resolution references); variant fields are reached only
//! through [`ResultItem::as_local`] / [`ResultItem::as_external`].
//!
//! The only external dependency here is `serde`, so result files can be read
//! straight into these types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// ResultId
// =============================================================================

/// Opaque identifier of a result, unique within one result set snapshot.
///
/// Lookups always compare identifiers, never object identity, because items
/// are rebuilt whenever a new search replaces the set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(String);

impl ResultId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResultId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// ImageRef
// =============================================================================

/// A renderable image reference: inline `data:` URI or a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageRef {
    /// Image bytes embedded as a `data:` URI (local library thumbnails).
    Inline(String),
    /// Remote or file URL.
    Url(String),
}

impl ImageRef {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::Inline(uri) | ImageRef::Url(uri) => uri,
        }
    }

    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(self, ImageRef::Inline(_))
    }

    /// Whether the reference carries no usable location.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        if value.starts_with("data:") {
            ImageRef::Inline(value)
        } else {
            ImageRef::Url(value)
        }
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        match value {
            ImageRef::Inline(uri) | ImageRef::Url(uri) => uri,
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Inline payloads can be megabytes long.
            ImageRef::Inline(uri) => {
                let header = uri.split(',').next().unwrap_or("data:");
                write!(f, "{header},…")
            }
            ImageRef::Url(url) => f.write_str(url),
        }
    }
}

// =============================================================================
// Similarity
// =============================================================================

/// Similarity score of a local search hit, guaranteed within 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Similarity(f32);

impl Similarity {
    /// Creates a new similarity score. Out-of-range input is clamped and
    /// `NaN` becomes zero.
    #[must_use]
    pub fn new(score: f32) -> Self {
        if score.is_nan() {
            Self(0.0)
        } else {
            Self(score.clamp(0.0, 1.0))
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Percentage with two decimals (e.g., 0.5 → "50.00%").
    #[must_use]
    pub fn to_percent_label(self) -> String {
        format!("{:.2}%", self.0 * 100.0)
    }
}

impl From<f32> for Similarity {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Similarity> for f32 {
    fn from(value: Similarity) -> Self {
        value.0
    }
}

// =============================================================================
// Variants
// =============================================================================

/// Fields only a local library hit carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalDetails {
    #[serde(default)]
    pub similarity: Similarity,
    pub file_path: PathBuf,
    #[serde(default)]
    pub file_exists: bool,
    /// Display tag text attached to the library entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Fields only an external provider photo carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalDetails {
    /// Provider name (e.g., "pixabay").
    pub source: String,
    pub photographer: String,
    pub page_url: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExternalDetails {
    /// Pixel dimensions reported by the provider.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Variant tag of a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultKind {
    Local(LocalDetails),
    External(ExternalDetails),
}

// =============================================================================
// ResultItem
// =============================================================================

/// One entry of a result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    id: ResultId,
    title: String,
    preview: ImageRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full: Option<ImageRef>,
    #[serde(flatten)]
    kind: ResultKind,
}

impl ResultItem {
    /// Creates a result whose full-resolution reference is its preview.
    #[must_use]
    pub fn new(
        id: impl Into<ResultId>,
        title: impl Into<String>,
        preview: impl Into<ImageRef>,
        kind: ResultKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            preview: preview.into(),
            full: None,
            kind,
        }
    }

    /// Sets a dedicated full-resolution reference.
    #[must_use]
    pub fn with_full(mut self, full: impl Into<ImageRef>) -> Self {
        self.full = Some(full.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &ResultId {
        &self.id
    }

    #[must_use]
    pub fn display_title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn preview_ref(&self) -> &ImageRef {
        &self.preview
    }

    /// Highest-resolution reference available, falling back to the preview.
    #[must_use]
    pub fn full_ref(&self) -> &ImageRef {
        self.full
            .as_ref()
            .filter(|full| !full.is_empty())
            .unwrap_or(&self.preview)
    }

    #[must_use]
    pub fn kind(&self) -> &ResultKind {
        &self.kind
    }

    #[must_use]
    pub fn as_local(&self) -> Option<&LocalDetails> {
        match &self.kind {
            ResultKind::Local(local) => Some(local),
            ResultKind::External(_) => None,
        }
    }

    #[must_use]
    pub fn as_external(&self) -> Option<&ExternalDetails> {
        match &self.kind {
            ResultKind::External(external) => Some(external),
            ResultKind::Local(_) => None,
        }
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self.kind, ResultKind::Local(_))
    }

    /// Display facts for the detail panel.
    #[must_use]
    pub fn summary(&self) -> ItemSummary {
        match &self.kind {
            ResultKind::Local(local) => ItemSummary {
                title: self.title.clone(),
                source_label: "local".to_string(),
                dimensions: None,
                similarity: Some(local.similarity.to_percent_label()),
                file_status: if local.file_exists {
                    FileStatus::Present
                } else {
                    FileStatus::Missing
                },
            },
            ResultKind::External(external) => ItemSummary {
                title: self.title.clone(),
                source_label: external.source.to_uppercase(),
                dimensions: Some(format!("{}×{}", external.width, external.height)),
                similarity: None,
                file_status: FileStatus::External,
            },
        }
    }
}

// =============================================================================
// ItemSummary
// =============================================================================

/// Availability of the underlying image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Local file found on disk.
    Present,
    /// Local library entry whose file is gone.
    Missing,
    /// Hosted by an external provider.
    External,
}

/// Per-item facts shown next to the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub title: String,
    pub source_label: String,
    pub dimensions: Option<String>,
    pub similarity: Option<String>,
    pub file_status: FileStatus,
}
