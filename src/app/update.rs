// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Event, Message};
use crate::application::port::HostPage;
use crate::domain::results::ResultItem;
use crate::ui::viewer::controller;
use crate::ui::viewer::session::Effect as SessionEffect;
use crate::ui::viewer::shortcuts::{self, Command};
use iced_core::keyboard::{Key, Modifiers};
use iced_core::mouse::ScrollDelta;

fn redraw_if(changed: bool) -> Event {
    if changed {
        Event::Redraw
    } else {
        Event::None
    }
}

impl<H: HostPage> App<H> {
    /// Single update entrypoint.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ResultsLoaded(items) => {
                self.handle_results_loaded(items);
                Event::None
            }
            Message::ClearResults => {
                self.results.clear();
                let event = self.close();
                self.viewer.clear();
                event
            }
            Message::Open(id) => {
                let effects = self.session.open(&self.results, &id);
                self.apply(effects)
            }
            Message::Close => self.close(),
            Message::Next => {
                let effects = self.session.next(&self.results);
                self.apply(effects)
            }
            Message::Previous => {
                let effects = self.session.previous(&self.results);
                self.apply(effects)
            }
            Message::KeyPressed { key, modifiers } => self.handle_key(&key, modifiers),
            Message::WheelScrolled(delta) => self.handle_wheel(delta),
            Message::ContainerResized(size) => redraw_if(self.viewer.set_container_size(size)),
            Message::ImageReady { token, natural } => {
                redraw_if(self.viewer.image_ready(token, natural))
            }
            Message::ImageFailed { token, reason } => {
                redraw_if(self.viewer.image_failed(token, reason))
            }
            Message::Viewport(msg) => self.handle_viewport(msg),
        }
    }

    fn handle_results_loaded(&mut self, items: Vec<ResultItem>) {
        self.results.replace(items);
        tracing::info!(
            count = self.results.len(),
            generation = self.results.generation(),
            "results loaded"
        );
        if let Some(id) = self.session.current_id() {
            if !self.results.contains(id) {
                tracing::info!(%id, "open result left the set, navigation exhausted");
            }
        }
    }

    fn close(&mut self) -> Event {
        let effects = self.session.close();
        if effects.is_empty() {
            return Event::None;
        }
        self.apply(effects);
        self.viewer.clear();
        Event::Closed
    }

    /// Applies session side effects in order.
    fn apply(&mut self, effects: Vec<SessionEffect>) -> Event {
        let mut event = Event::None;
        for effect in effects {
            match effect {
                SessionEffect::LockScroll => self.host.set_scroll_locked(true),
                SessionEffect::UnlockScroll => self.host.set_scroll_locked(false),
                SessionEffect::BindKeys(subscription) => {
                    tracing::debug!(%subscription, "navigation keys bound");
                }
                SessionEffect::UnbindKeys(subscription) => {
                    tracing::debug!(%subscription, "navigation keys unbound");
                }
                SessionEffect::Display(source) => {
                    let token = self.viewer.display(source.clone());
                    event = Event::ImageRequested { token, source };
                }
            }
        }
        event
    }

    fn handle_key(&mut self, key: &Key, modifiers: Modifiers) -> Event {
        if !self.session.keys_bound() {
            return Event::None;
        }
        let Some(command) = shortcuts::command_for_key(key, modifiers) else {
            return Event::None;
        };
        match command {
            Command::Close => self.close(),
            Command::Previous => {
                let effects = self.session.previous(&self.results);
                self.apply(effects)
            }
            Command::Next => {
                let effects = self.session.next(&self.results);
                self.apply(effects)
            }
            Command::ZoomIn => redraw_if(self.viewer.zoom_in()),
            Command::ZoomOut => redraw_if(self.viewer.zoom_out()),
            Command::ResetZoom => redraw_if(self.viewer.reset_zoom()),
        }
    }

    fn handle_wheel(&mut self, delta: ScrollDelta) -> Event {
        if !self.session.is_open() {
            return Event::None;
        }
        match shortcuts::wheel_notch(delta) {
            Some(notch) => redraw_if(self.viewer.zoom_wheel(notch)),
            None => Event::None,
        }
    }

    fn handle_viewport(&mut self, msg: controller::Message) -> Event {
        if !self.session.is_open() {
            tracing::debug!(?msg, "viewport message ignored: viewer closed");
            return Event::None;
        }
        match self.viewer.handle(msg) {
            controller::Effect::None => Event::None,
            controller::Effect::TransformChanged | controller::Effect::Failed(_) => Event::Redraw,
            controller::Effect::Requested(token) => match self.viewer.source() {
                Some(source) => Event::ImageRequested {
                    token,
                    source: source.clone(),
                },
                None => Event::None,
            },
        }
    }
}
