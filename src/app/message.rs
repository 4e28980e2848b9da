// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and events for the application.

use crate::domain::results::{ImageRef, ResultId, ResultItem};
use crate::ui::viewer::controller;
use crate::ui::viewer::RequestToken;
use iced_core::keyboard::{Key, Modifiers};
use iced_core::mouse::ScrollDelta;
use iced_core::Size;

/// Top-level messages consumed by `App::update`. Viewport gestures are
/// forwarded to the controller while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A search delivered a new result list.
    ResultsLoaded(Vec<ResultItem>),
    /// The viewer context was cleared.
    ClearResults,
    Open(ResultId),
    Close,
    Next,
    Previous,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    WheelScrolled(ScrollDelta),
    ContainerResized(Size),
    /// The host decoded the image requested with `token`.
    ImageReady {
        token: RequestToken,
        natural: Size,
    },
    /// The host could not load the image requested with `token`.
    ImageFailed {
        token: RequestToken,
        reason: String,
    },
    Viewport(controller::Message),
}

/// What the host has to do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Load `source` and answer with `ImageReady`/`ImageFailed` for `token`.
    ImageRequested {
        token: RequestToken,
        source: ImageRef,
    },
    /// The transform changed and the image should be redrawn.
    Redraw,
    /// The viewer was closed.
    Closed,
}
