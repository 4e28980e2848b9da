// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Holds the per-image transform state (scale, pan offset, drag) and derives
//! the render transform from it.

use super::drag::DragState;
use super::zoom::ZoomState;
use crate::domain::ui::newtypes::Scale;
use iced_core::{Point, Size, Vector};

/// Transform state for the displayed image.
///
/// The drag anchor exists exactly while a drag is active, and the scale is
/// always within bounds through [`Scale`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportState {
    zoom: ZoomState,
    offset: Vector,
    drag: DragState,
}

impl ViewportState {
    #[must_use]
    pub fn scale(&self) -> Scale {
        self.zoom.scale()
    }

    /// Pan offset in container pixels.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag.anchor()
    }

    /// Returns `true` if the scale changed.
    pub fn zoom_by(&mut self, delta: f32) -> bool {
        self.zoom.zoom_by(delta)
    }

    /// Applies a fitted scale and recenters the image.
    pub fn apply_fit(&mut self, scale: Scale) {
        self.zoom.set_scale(scale);
        self.offset = Vector::ZERO;
        self.drag.stop();
    }

    /// Starts (or re-anchors) a pan. Only a magnified image can be panned.
    ///
    /// Returns `true` if a drag is now active.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.scale().is_magnified() {
            return false;
        }
        self.drag.start(pointer, self.offset);
        true
    }

    /// Returns `true` if the offset was updated.
    pub fn continue_drag(&mut self, pointer: Point) -> bool {
        match self.drag.calculate_offset(pointer) {
            Some(offset) => {
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.stop();
    }

    /// Back to the pre-fit default: natural scale, no offset, no drag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Render transform for an image of `natural` size inside `container`.
    #[must_use]
    pub fn transform(&self, container: Size, natural: Size) -> ImageTransform {
        ImageTransform {
            container_center: Point::new(container.width / 2.0, container.height / 2.0),
            image_center: Point::new(natural.width / 2.0, natural.height / 2.0),
            offset: self.offset,
            scale: self.scale().value(),
        }
    }
}

/// One step of the render transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformStep {
    /// Moves the image center onto the container center.
    CenterInContainer(Vector),
    /// Pan offset.
    Translate(Vector),
    /// Uniform scale about the image center.
    Scale(f32),
}

/// Composite transform: center in container, then translate, then scale.
///
/// Steps are listed outermost first, like a CSS transform list, so when
/// mapping a point the scale is applied first and centering last. The pan
/// offset therefore stays in container pixels regardless of zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    container_center: Point,
    image_center: Point,
    offset: Vector,
    scale: f32,
}

impl ImageTransform {
    #[must_use]
    pub fn steps(&self) -> [TransformStep; 3] {
        [
            TransformStep::CenterInContainer(self.container_center - self.image_center),
            TransformStep::Translate(self.offset),
            TransformStep::Scale(self.scale),
        ]
    }

    /// Maps an image-local point to container coordinates.
    #[must_use]
    pub fn map_point(&self, point: Point) -> Point {
        let from_center = point - self.image_center;
        self.container_center + self.offset + from_center * self.scale
    }

    /// Size of the image on screen.
    #[must_use]
    pub fn displayed_size(&self) -> Size {
        Size::new(
            self.image_center.x * 2.0 * self.scale,
            self.image_center.y * 2.0 * self.scale,
        )
    }
}
