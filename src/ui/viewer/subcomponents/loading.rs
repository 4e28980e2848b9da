// SPDX-License-Identifier: MPL-2.0
//! Image loading sub-component with stale-completion guarding.

use crate::domain::results::ImageRef;
use crate::ui::viewer::subscription::{SubscriptionId, SubscriptionSlot};
use iced_core::Size;
use std::fmt;

/// Identifies one `display` request. Readiness signals must carry it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(SubscriptionId);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0.value()
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request {}", self.0)
    }
}

/// Load phase of the displayed image.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadPhase {
    /// Nothing requested.
    #[default]
    Idle,
    /// Waiting for the ready signal.
    Pending,
    /// Decoded with the given natural size.
    Ready { natural: Size },
    /// The image could not be loaded.
    Failed { reason: String },
}

/// Loading state for the viewer.
#[derive(Debug, Clone, Default)]
pub struct State {
    requests: SubscriptionSlot,
    source: Option<ImageRef>,
    phase: LoadPhase,
}

/// Messages for the loading sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new image was requested.
    Start(ImageRef),
    /// The host decoded the image for `token`.
    Ready { token: RequestToken, natural: Size },
    /// The host failed to load the image for `token`.
    Failed { token: RequestToken, reason: String },
    /// Drop the current request.
    Cancel,
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A request was issued.
    Requested(RequestToken),
    /// The current request completed; the orchestrator should fit.
    Loaded(Size),
    /// The current request failed.
    Failed(String),
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start(source) => Effect::Requested(self.start(source)),
            Message::Ready { token, natural } => {
                if !self.accepts(token) {
                    tracing::debug!(%token, "discarding stale ready signal");
                    return Effect::None;
                }
                self.phase = LoadPhase::Ready { natural };
                Effect::Loaded(natural)
            }
            Message::Failed { token, reason } => {
                if !self.accepts(token) {
                    tracing::debug!(%token, "discarding stale failure");
                    return Effect::None;
                }
                tracing::warn!(%token, %reason, "image failed to load");
                self.phase = LoadPhase::Failed {
                    reason: reason.clone(),
                };
                Effect::Failed(reason)
            }
            Message::Cancel => {
                self.requests.dispose();
                self.source = None;
                self.phase = LoadPhase::Idle;
                Effect::None
            }
        }
    }

    /// Issues a new request for `source`, superseding the previous one.
    pub fn start(&mut self, source: ImageRef) -> RequestToken {
        let token = RequestToken(self.requests.replace());
        tracing::debug!(%token, %source, "image requested");
        self.source = Some(source);
        self.phase = LoadPhase::Pending;
        token
    }

    /// Only the live request, and only once.
    fn accepts(&self, token: RequestToken) -> bool {
        self.requests.is_current(token.0) && self.phase == LoadPhase::Pending
    }

    #[must_use]
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    #[must_use]
    pub fn source(&self) -> Option<&ImageRef> {
        self.source.as_ref()
    }

    /// Token of the outstanding or last completed request.
    #[must_use]
    pub fn current_token(&self) -> Option<RequestToken> {
        self.requests.current().map(RequestToken)
    }

    /// Natural size once the current image is ready.
    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        match self.phase {
            LoadPhase::Ready { natural } => Some(natural),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(state: &mut State, source: &str) -> RequestToken {
        match state.handle(Message::Start(ImageRef::from(source.to_string()))) {
            Effect::Requested(token) => token,
            other => panic!("expected Requested, got {other:?}"),
        }
    }

    #[test]
    fn start_enters_pending() {
        let mut state = State::default();
        let token = start(&mut state, "https://example.com/a.jpg");
        assert_eq!(state.phase(), &LoadPhase::Pending);
        assert_eq!(state.current_token(), Some(token));
        assert_eq!(
            state.source().map(ImageRef::as_str),
            Some("https://example.com/a.jpg")
        );
    }

    #[test]
    fn ready_for_current_token_loads_once() {
        let mut state = State::default();
        let token = start(&mut state, "a.jpg");
        let natural = Size::new(400.0, 300.0);

        let effect = state.handle(Message::Ready { token, natural });
        assert_eq!(effect, Effect::Loaded(natural));
        assert_eq!(state.natural_size(), Some(natural));

        let repeat = state.handle(Message::Ready { token, natural });
        assert_eq!(repeat, Effect::None);
    }

    #[test]
    fn stale_ready_is_discarded() {
        let mut state = State::default();
        let first = start(&mut state, "a.jpg");
        let second = start(&mut state, "b.jpg");

        let stale = state.handle(Message::Ready {
            token: first,
            natural: Size::new(100.0, 100.0),
        });
        assert_eq!(stale, Effect::None);
        assert_eq!(state.phase(), &LoadPhase::Pending);

        let fresh = state.handle(Message::Ready {
            token: second,
            natural: Size::new(200.0, 200.0),
        });
        assert_eq!(fresh, Effect::Loaded(Size::new(200.0, 200.0)));
    }

    #[test]
    fn failure_sets_failed_phase() {
        let mut state = State::default();
        let token = start(&mut state, "missing.jpg");
        let effect = state.handle(Message::Failed {
            token,
            reason: "not found".into(),
        });

        assert_eq!(effect, Effect::Failed("not found".into()));
        assert_eq!(
            state.phase(),
            &LoadPhase::Failed {
                reason: "not found".into()
            }
        );
        assert!(state.natural_size().is_none());
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut state = State::default();
        let first = start(&mut state, "a.jpg");
        start(&mut state, "b.jpg");
        let effect = state.handle(Message::Failed {
            token: first,
            reason: "late".into(),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), &LoadPhase::Pending);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut state = State::default();
        let token = start(&mut state, "a.jpg");
        state.handle(Message::Cancel);

        assert_eq!(state.phase(), &LoadPhase::Idle);
        assert!(state.current_token().is_none());
        let effect = state.handle(Message::Ready {
            token,
            natural: Size::new(10.0, 10.0),
        });
        assert_eq!(effect, Effect::None);
    }
}
