// SPDX-License-Identifier: MPL-2.0
//! Modal session: which single result is being inspected.
//!
//! The session never owns the results. Every transition borrows the active
//! [`ResultSet`] for lookups and returns the side effects the orchestrator
//! must apply (scroll lock, key binding, display).

use crate::application::query::{Direction, ResultSet};
use crate::domain::results::{ImageRef, ResultId, ResultItem};
use crate::ui::viewer::subscription::{SubscriptionId, SubscriptionSlot};

/// Session lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Closed,
    Open {
        current: ResultId,
    },
}

/// Messages for the modal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(ResultId),
    Next,
    Previous,
    Close,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Prevent background page scrolling.
    LockScroll,
    /// Restore background page scrolling.
    UnlockScroll,
    /// Navigation keys are now routed through this subscription.
    BindKeys(SubscriptionId),
    /// The subscription no longer receives keys.
    UnbindKeys(SubscriptionId),
    /// Show this image in the viewport.
    Display(ImageRef),
}

#[derive(Debug, Clone, Default)]
pub struct ModalSession {
    state: SessionState,
    keys: SubscriptionSlot,
}

impl ModalSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a session message against the active results.
    pub fn handle(&mut self, msg: Message, results: &ResultSet) -> Vec<Effect> {
        match msg {
            Message::Open(id) => self.open(results, &id),
            Message::Next => self.next(results),
            Message::Previous => self.previous(results),
            Message::Close => self.close(),
        }
    }

    /// Opens `id` if it resolves in `results`.
    ///
    /// Opening while already open switches items: scroll stays locked and
    /// the key subscription is replaced.
    pub fn open(&mut self, results: &ResultSet, id: &ResultId) -> Vec<Effect> {
        let Some(item) = results.get(id) else {
            tracing::debug!(%id, "open ignored: id not in results");
            return Vec::new();
        };
        if item.full_ref().is_empty() {
            tracing::debug!(%id, "open ignored: result has no image reference");
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(3);
        if !self.is_open() {
            effects.push(Effect::LockScroll);
        }
        effects.push(Effect::BindKeys(self.keys.replace()));
        effects.push(Effect::Display(item.full_ref().clone()));

        tracing::info!(%id, "viewer opened");
        self.state = SessionState::Open {
            current: item.id().clone(),
        };
        effects
    }

    /// Advances to the following item. No wraparound.
    pub fn next(&mut self, results: &ResultSet) -> Vec<Effect> {
        self.step(results, Direction::Next)
    }

    /// Moves to the preceding item. Clamped at the first.
    pub fn previous(&mut self, results: &ResultSet) -> Vec<Effect> {
        self.step(results, Direction::Previous)
    }

    fn step(&mut self, results: &ResultSet, direction: Direction) -> Vec<Effect> {
        let SessionState::Open { current } = &self.state else {
            return Vec::new();
        };
        match results.neighbor(current, direction) {
            Ok(item) if item.full_ref().is_empty() => {
                tracing::debug!(
                    to = %item.id(),
                    "navigation skipped: result has no image reference"
                );
                Vec::new()
            }
            Ok(item) => {
                tracing::debug!(from = %current, to = %item.id(), "viewer navigated");
                let display = Effect::Display(item.full_ref().clone());
                self.state = SessionState::Open {
                    current: item.id().clone(),
                };
                vec![display]
            }
            Err(err) => {
                tracing::debug!(%err, "navigation exhausted");
                Vec::new()
            }
        }
    }

    /// Closes the viewer. No-op when already closed.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        let mut effects = vec![Effect::UnlockScroll];
        if let Some(id) = self.keys.dispose() {
            effects.push(Effect::UnbindKeys(id));
        }
        tracing::info!("viewer closed");
        self.state = SessionState::Closed;
        effects
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open { .. })
    }

    #[must_use]
    pub fn current_id(&self) -> Option<&ResultId> {
        match &self.state {
            SessionState::Open { current } => Some(current),
            SessionState::Closed => None,
        }
    }

    /// Whether navigation keys are currently routed to the session.
    #[must_use]
    pub fn keys_bound(&self) -> bool {
        self.keys.is_active()
    }

    #[must_use]
    pub fn key_subscription(&self) -> Option<SubscriptionId> {
        self.keys.current()
    }

    /// The open item, if it is still present in `results`.
    #[must_use]
    pub fn current_item<'a>(&self, results: &'a ResultSet) -> Option<&'a ResultItem> {
        results.get(self.current_id()?)
    }

    /// 1-based position of the open item and the total count.
    #[must_use]
    pub fn position(&self, results: &ResultSet) -> Option<(usize, usize)> {
        let index = results.index_of(self.current_id()?)?;
        Some((index + 1, results.len()))
    }
}
