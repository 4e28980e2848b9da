// SPDX-License-Identifier: MPL-2.0
//! Disposable subscription handles.
//!
//! A [`SubscriptionSlot`] holds at most one live handle. Replacing it
//! invalidates the previous handle, so late deliveries addressed to an old
//! handle can be recognised and dropped.

use std::fmt;

/// Identifier of one subscription issued by a [`SubscriptionSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Slot holding the current subscription, if any.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionSlot {
    issued: u64,
    current: Option<SubscriptionId>,
}

impl SubscriptionSlot {
    /// Issues a fresh handle, disposing of the previous one.
    pub fn replace(&mut self) -> SubscriptionId {
        self.issued += 1;
        let id = SubscriptionId(self.issued);
        self.current = Some(id);
        id
    }

    /// Disposes of the current handle. Returns it if one was live.
    pub fn dispose(&mut self) -> Option<SubscriptionId> {
        self.current.take()
    }

    #[must_use]
    pub fn current(&self) -> Option<SubscriptionId> {
        self.current
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Whether `id` is the live handle.
    #[must_use]
    pub fn is_current(&self, id: SubscriptionId) -> bool {
        self.current == Some(id)
    }
}
