// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a magnified image.

use iced_core::{Point, Vector};

/// Manages grab-and-drag state
///
/// The anchor is the pointer position minus the image offset at drag start.
/// It exists exactly while a drag is active.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    anchor: Option<Point>,
}

impl DragState {
    /// Starts a drag operation, or re-anchors one already in progress.
    pub fn start(&mut self, pointer: Point, offset: Vector) {
        self.anchor = Some(pointer - offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Pointer-to-offset reference captured at drag start.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Calculates the new image offset for the current pointer position
    #[must_use]
    pub fn calculate_offset(&self, pointer: Point) -> Option<Vector> {
        let anchor = self.anchor?;
        Some(pointer - anchor)
    }
}
