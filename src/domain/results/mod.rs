// SPDX-License-Identifier: MPL-2.0
//! Search result domain types.

pub mod types;

// Re-export commonly used types
pub use types::{
    ExternalDetails, FileStatus, ImageRef, ItemSummary, LocalDetails, ResultId, ResultItem,
    ResultKind, Similarity,
};
