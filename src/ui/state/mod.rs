// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure per-image state, separated from the controller that drives it.

pub mod drag;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use viewport::{ImageTransform, TransformStep, ViewportState};
pub use zoom::{fit_scale, ZoomSettings, ZoomState};
