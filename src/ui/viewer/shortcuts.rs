// SPDX-License-Identifier: MPL-2.0
//! Keyboard and wheel bindings for the open viewer.
//!
//! | Key          | Command    |
//! |--------------|------------|
//! | `Escape`     | Close      |
//! | `ArrowLeft`  | Previous   |
//! | `ArrowRight` | Next       |
//! | `+` / `=`    | Zoom in    |
//! | `-`          | Zoom out   |
//! | `0`          | Reset zoom |
//!
//! The wheel zooms one notch per event in the direction of its vertical
//! delta.

use iced_core::keyboard::{key::Named, Key, Modifiers};
use iced_core::mouse::ScrollDelta;

/// A viewer command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Close,
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Maps a key press to a viewer command.
///
/// Presses with the command or alt modifier held are left to the host.
#[must_use]
pub fn command_for_key(key: &Key, modifiers: Modifiers) -> Option<Command> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    match key {
        Key::Named(Named::Escape) => Some(Command::Close),
        Key::Named(Named::ArrowLeft) => Some(Command::Previous),
        Key::Named(Named::ArrowRight) => Some(Command::Next),
        Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(Command::ZoomIn),
            "-" => Some(Command::ZoomOut),
            "0" => Some(Command::ResetZoom),
            _ => None,
        },
        _ => None,
    }
}

/// Direction of one wheel notch: `1.0` (zoom in), `-1.0` (zoom out), or
/// `None` for a purely horizontal or empty scroll.
#[must_use]
pub fn wheel_notch(delta: ScrollDelta) -> Option<f32> {
    let y = match delta {
        ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => y,
    };
    if y == 0.0 || !y.is_finite() {
        None
    } else {
        Some(y.signum())
    }
}
