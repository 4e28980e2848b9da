// SPDX-License-Identifier: MPL-2.0
//! Pointer sub-component: cursor tracking and double-click detection.

use crate::config::defaults::DOUBLE_CLICK_THRESHOLD;
use iced_core::Point;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct State {
    /// Current cursor position within the viewer.
    cursor_position: Option<Point>,
    /// Last click timestamp for double-click detection.
    last_click: Option<Instant>,
}

/// Messages for the pointer sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Mouse moved (for cursor tracking).
    MouseMoved(Point),
    /// Click at a position and time.
    Click { position: Point, at: Instant },
}

/// Effects produced by pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Second click within the threshold.
    DoubleClick,
}

impl State {
    /// Handle a pointer message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::MouseMoved(position) => {
                self.cursor_position = Some(position);
                Effect::None
            }
            Message::Click { position, at } => {
                self.cursor_position = Some(position);

                let is_double_click = self.last_click.is_some_and(|previous| {
                    at.checked_duration_since(previous)
                        .is_some_and(|elapsed| elapsed < DOUBLE_CLICK_THRESHOLD)
                });

                if is_double_click {
                    // Reset to avoid triple-click
                    self.last_click = None;
                    Effect::DoubleClick
                } else {
                    self.last_click = Some(at);
                    Effect::None
                }
            }
        }
    }

    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn click(state: &mut State, at: Instant) -> Effect {
        state.handle(Message::Click {
            position: Point::ORIGIN,
            at,
        })
    }

    #[test]
    fn mouse_moved_updates_cursor_position() {
        let mut state = State::default();
        assert!(state.cursor_position().is_none());

        state.handle(Message::MouseMoved(Point::new(50.0, 75.0)));
        assert_eq!(state.cursor_position(), Some(Point::new(50.0, 75.0)));
    }

    #[test]
    fn double_click_within_threshold() {
        let mut state = State::default();
        let start = Instant::now();
        assert_eq!(click(&mut state, start), Effect::None);
        assert_eq!(
            click(&mut state, start + Duration::from_millis(200)),
            Effect::DoubleClick
        );
    }

    #[test]
    fn slow_clicks_are_single() {
        let mut state = State::default();
        let start = Instant::now();
        click(&mut state, start);
        assert_eq!(
            click(&mut state, start + Duration::from_millis(500)),
            Effect::None
        );
    }

    #[test]
    fn triple_click_yields_one_double_click() {
        let mut state = State::default();
        let start = Instant::now();
        click(&mut state, start);
        assert_eq!(
            click(&mut state, start + Duration::from_millis(100)),
            Effect::DoubleClick
        );
        assert_eq!(
            click(&mut state, start + Duration::from_millis(200)),
            Effect::None
        );
    }
}
