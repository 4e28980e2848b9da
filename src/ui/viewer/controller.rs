// SPDX-License-Identifier: MPL-2.0
//! Viewport controller - zoom, pan and fit for one displayed image.
//!
//! Groups the operations that share the per-image transform state. Each
//! gesture is a [`Message`]; [`ViewportController::handle`] applies it as a
//! pure state transition and reports an [`Effect`]. The same operations are
//! available as plain methods for hosts that do not route messages.
//!
//! ## Composition
//!
//! - [`ViewportState`]: scale, offset and drag anchor
//! - `loading::State`: request tokens and load phase
//! - `pointer::State`: cursor tracking and double-click detection
//!
//! ## Asynchronous readiness
//!
//! [`display`](ViewportController::display) returns a [`RequestToken`]. The
//! host echoes it with the ready (or failed) signal. Signals for superseded
//! tokens are discarded, so the fit always reflects the latest request.

use crate::config::Config;
use crate::domain::results::ImageRef;
use crate::ui::state::zoom::is_valid_extent;
use crate::ui::state::{fit_scale, ImageTransform, ViewportState, ZoomSettings};
use crate::ui::viewer::subcomponents::loading::{self, LoadPhase, RequestToken};
use crate::ui::viewer::subcomponents::pointer;
use iced_core::mouse::Interaction;
use iced_core::{Point, Size};
use std::time::Instant;

/// Messages for the viewport controller.
#[derive(Debug, Clone)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // IMAGE LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════
    /// Show a new image.
    Display(ImageRef),
    /// The host decoded the image requested with `token`.
    ImageReady { token: RequestToken, natural: Size },
    /// The host could not load the image requested with `token`.
    ImageFailed { token: RequestToken, reason: String },
    /// Container geometry changed.
    ContainerResized(Size),

    // ═══════════════════════════════════════════════════════════════════════
    // ZOOM
    // ═══════════════════════════════════════════════════════════════════════
    /// Fit the image to the container.
    FitToContainer,
    /// Shift the scale by an arbitrary delta.
    ZoomBy(f32),
    /// Zoom in by one step.
    ZoomIn,
    /// Zoom out by one step.
    ZoomOut,
    /// One wheel notch; the sign selects the direction.
    ZoomWheel(f32),
    /// Back to the fitted scale.
    ResetZoom,

    // ═══════════════════════════════════════════════════════════════════════
    // POINTER
    // ═══════════════════════════════════════════════════════════════════════
    /// Pointer pressed on the image.
    BeginDrag(Point),
    /// Pointer moved while pressed.
    ContinueDrag(Point),
    /// Pointer released or left the viewer.
    EndDrag,
    /// Pointer moved (for cursor tracking).
    MouseMoved(Point),
    /// Click on the image (for double-click reset).
    Click { position: Point, at: Instant },
}

/// Effects produced by viewport operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A new image was requested; the host must echo this token.
    Requested(RequestToken),
    /// Scale or offset changed - view needs refresh.
    TransformChanged,
    /// The current image failed to load.
    Failed(String),
}

/// Transform controller for the single displayed image.
#[derive(Debug, Clone)]
pub struct ViewportController {
    viewport: ViewportState,
    loading: loading::State,
    pointer: pointer::State,
    settings: ZoomSettings,
    double_click_reset: bool,
    container: Option<Size>,
    /// Set when the image became ready before the container had valid size.
    deferred_fit: bool,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ZoomSettings::default(), true)
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(settings: ZoomSettings, double_click_reset: bool) -> Self {
        Self {
            viewport: ViewportState::default(),
            loading: loading::State::default(),
            pointer: pointer::State::default(),
            settings,
            double_click_reset,
            container: None,
            deferred_fit: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(ZoomSettings::from(config), config.double_click_reset())
    }

    /// Handle a controller message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Display(source) if source.is_empty() => {
                tracing::debug!("display ignored: empty image reference");
                Effect::None
            }
            Message::Display(source) => Effect::Requested(self.display(source)),
            Message::ImageReady { token, natural } => {
                Self::changed(self.image_ready(token, natural))
            }
            Message::ImageFailed { token, reason } => {
                if self.image_failed(token, reason.clone()) {
                    Effect::Failed(reason)
                } else {
                    Effect::None
                }
            }
            Message::ContainerResized(size) => Self::changed(self.set_container_size(size)),
            Message::FitToContainer => Self::changed(self.fit_to_container()),
            Message::ZoomBy(delta) => Self::changed(self.zoom_by(delta)),
            Message::ZoomIn => Self::changed(self.zoom_in()),
            Message::ZoomOut => Self::changed(self.zoom_out()),
            Message::ZoomWheel(notch) => Self::changed(self.zoom_wheel(notch)),
            Message::ResetZoom => Self::changed(self.reset_zoom()),
            Message::BeginDrag(pointer) => {
                self.begin_drag(pointer);
                Effect::None
            }
            Message::ContinueDrag(pointer) => Self::changed(self.continue_drag(pointer)),
            Message::EndDrag => {
                self.end_drag();
                Effect::None
            }
            Message::MouseMoved(position) => {
                self.pointer.handle(pointer::Message::MouseMoved(position));
                Effect::None
            }
            Message::Click { position, at } => Self::changed(self.click(position, at)),
        }
    }

    fn changed(changed: bool) -> Effect {
        if changed {
            Effect::TransformChanged
        } else {
            Effect::None
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // IMAGE LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════

    /// Starts showing `source`, resetting the transform to its default.
    ///
    /// Any previous request is superseded.
    pub fn display(&mut self, source: ImageRef) -> RequestToken {
        self.viewport.reset();
        self.deferred_fit = false;
        self.loading.start(source)
    }

    /// Ready signal for `token`. Fits once if `token` is current.
    ///
    /// Returns `true` if the transform changed.
    pub fn image_ready(&mut self, token: RequestToken, natural: Size) -> bool {
        match self
            .loading
            .handle(loading::Message::Ready { token, natural })
        {
            loading::Effect::Loaded(natural) => {
                if !is_valid_extent(natural) {
                    tracing::debug!(?natural, "image has no usable size, keeping scale");
                    return false;
                }
                if self.container.is_some_and(is_valid_extent) {
                    self.fit_to_container()
                } else {
                    tracing::debug!(%token, "container not measured yet, deferring fit");
                    self.deferred_fit = true;
                    false
                }
            }
            _ => false,
        }
    }

    /// Failure signal for `token`. Returns `true` if it applied.
    pub fn image_failed(&mut self, token: RequestToken, reason: String) -> bool {
        let applied = matches!(
            self.loading
                .handle(loading::Message::Failed { token, reason }),
            loading::Effect::Failed(_)
        );
        if applied {
            self.deferred_fit = false;
        }
        applied
    }

    /// Records container geometry and applies a deferred fit if one waits.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        self.container = Some(size);
        if self.deferred_fit && is_valid_extent(size) {
            self.deferred_fit = false;
            return self.fit_to_container();
        }
        false
    }

    /// Drops the displayed image and returns to the default state.
    pub fn clear(&mut self) {
        self.loading.handle(loading::Message::Cancel);
        self.viewport.reset();
        self.deferred_fit = false;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ZOOM
    // ═══════════════════════════════════════════════════════════════════════

    /// Fits the ready image into 90% of the container, recentering it.
    ///
    /// Skipped, keeping the current scale, when either geometry is missing
    /// or degenerate. Returns `true` if the transform changed.
    pub fn fit_to_container(&mut self) -> bool {
        let (Some(container), Some(natural)) = (self.container, self.loading.natural_size())
        else {
            tracing::debug!("fit skipped: geometry unavailable");
            return false;
        };
        let Some(scale) = fit_scale(container, natural) else {
            tracing::debug!(?container, ?natural, "fit skipped: degenerate geometry");
            return false;
        };
        let before = self.viewport;
        self.viewport.apply_fit(scale);
        self.viewport != before
    }

    /// Returns `true` if the scale changed.
    pub fn zoom_by(&mut self, delta: f32) -> bool {
        if self.loading.source().is_none() {
            tracing::debug!("zoom skipped: no image displayed");
            return false;
        }
        self.viewport.zoom_by(delta)
    }

    pub fn zoom_in(&mut self) -> bool {
        if self.viewport.scale().is_max() {
            tracing::debug!("zoom in ignored: already at maximum");
            return false;
        }
        self.zoom_by(self.settings.zoom_step.value())
    }

    pub fn zoom_out(&mut self) -> bool {
        if self.viewport.scale().is_min() {
            tracing::debug!("zoom out ignored: already at minimum");
            return false;
        }
        self.zoom_by(-self.settings.zoom_step.value())
    }

    /// One wheel notch in the direction of `notch`'s sign. Zero is ignored.
    pub fn zoom_wheel(&mut self, notch: f32) -> bool {
        if notch == 0.0 || !notch.is_finite() {
            return false;
        }
        self.zoom_by(notch.signum() * self.settings.wheel_step.value())
    }

    /// Same as [`fit_to_container`](Self::fit_to_container).
    pub fn reset_zoom(&mut self) -> bool {
        self.fit_to_container()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // POINTER
    // ═══════════════════════════════════════════════════════════════════════

    /// Starts panning. Ignored unless the image is magnified.
    ///
    /// A second call while dragging restarts the anchor at `pointer`.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        self.viewport.begin_drag(pointer)
    }

    pub fn continue_drag(&mut self, pointer: Point) -> bool {
        self.viewport.continue_drag(pointer)
    }

    pub fn end_drag(&mut self) {
        self.viewport.end_drag();
    }

    /// Registers a click. A double-click resets zoom when enabled.
    pub fn click(&mut self, position: Point, at: Instant) -> bool {
        let effect = self
            .pointer
            .handle(pointer::Message::Click { position, at });
        if effect == pointer::Effect::DoubleClick && self.double_click_reset {
            return self.reset_zoom();
        }
        false
    }

    // ═══════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.viewport
    }

    /// Rounded scale percentage for display.
    #[must_use]
    pub fn zoom_level_percent(&self) -> u32 {
        self.viewport.scale().as_percent()
    }

    /// Render transform, once both container and image sizes are known.
    #[must_use]
    pub fn transform(&self) -> Option<ImageTransform> {
        let container = self.container?;
        let natural = self.loading.natural_size()?;
        Some(self.viewport.transform(container, natural))
    }

    #[must_use]
    pub fn cursor_interaction(&self) -> Interaction {
        if self.viewport.is_dragging() {
            Interaction::Grabbing
        } else if self.viewport.scale().is_magnified() {
            Interaction::Grab
        } else {
            Interaction::Idle
        }
    }

    #[must_use]
    pub fn phase(&self) -> &LoadPhase {
        self.loading.phase()
    }

    #[must_use]
    pub fn source(&self) -> Option<&ImageRef> {
        self.loading.source()
    }

    #[must_use]
    pub fn current_token(&self) -> Option<RequestToken> {
        self.loading.current_token()
    }

    #[must_use]
    pub fn container_size(&self) -> Option<Size> {
        self.container
    }

    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        self.loading.natural_size()
    }

    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.pointer.cursor_position()
    }

    #[must_use]
    pub fn settings(&self) -> ZoomSettings {
        self.settings
    }
}
