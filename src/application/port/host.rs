// SPDX-License-Identifier: MPL-2.0
//! Host page port definition.
//!
//! The hosting interface layer owns page-level state the viewer has to
//! influence. Only the modal session toggles background scrolling; the
//! viewport controller never touches it.

/// Page-level side effects driven by the modal session.
pub trait HostPage {
    /// Locks (`true`) or unlocks (`false`) scrolling of the page behind the
    /// viewer.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Host that only remembers the last scroll-lock request.
///
/// Used by the CLI driver and tests where no real page exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessHost {
    scroll_locked: bool,
}

impl HeadlessHost {
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl HostPage for HeadlessHost {
    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
