// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between results, session and
//! viewport.
//!
//! The `App` struct is constructed explicitly and owns every piece of
//! browsing state. It translates messages into transitions and applies the
//! resulting side effects: the scroll lock goes to the [`HostPage`], display
//! requests go to the viewport controller and back out to the host as an
//! [`Event`].

mod message;
mod update;

pub use message::{Event, Message};

use crate::application::port::{HostPage, SearchSource};
use crate::application::query::{NavigationInfo, ResultSet};
use crate::config::Config;
use crate::domain::results::{ItemSummary, ResultItem};
use crate::error::Result;
use crate::ui::viewer::{ModalSession, ViewportController};
use std::fmt;

/// Root state for browsing one result set in the modal viewer.
pub struct App<H: HostPage> {
    config: Config,
    results: ResultSet,
    viewer: ViewportController,
    session: ModalSession,
    host: H,
}

impl<H: HostPage> fmt::Debug for App<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("results", &self.results.len())
            .field("session", self.session.state())
            .field("zoom", &self.viewer.zoom_level_percent())
            .finish_non_exhaustive()
    }
}

impl<H: HostPage> App<H> {
    /// Creates an application with no results and the viewer closed.
    pub fn new(config: Config, host: H) -> Self {
        let viewer = ViewportController::from_config(&config);
        Self {
            config,
            results: ResultSet::new(),
            viewer,
            session: ModalSession::new(),
            host,
        }
    }

    /// Runs `source` and loads its results.
    ///
    /// # Errors
    ///
    /// Returns the source's error; the current results are left untouched.
    pub fn load_from<S: SearchSource>(&mut self, source: &mut S) -> Result<Event> {
        let items = source.fetch()?;
        Ok(self.update(Message::ResultsLoaded(items)))
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewportController {
        &self.viewer
    }

    #[must_use]
    pub fn session(&self) -> &ModalSession {
        &self.session
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The open item, if it is still in the results.
    #[must_use]
    pub fn current_item(&self) -> Option<&ResultItem> {
        self.session.current_item(&self.results)
    }

    /// `(index, total)` for the "i / n" label, 1-based.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.session.position(&self.results)
    }

    #[must_use]
    pub fn navigation_info(&self) -> Option<NavigationInfo> {
        self.session
            .current_id()
            .map(|id| self.results.navigation_info(id))
    }

    /// Details panel content for the open item.
    #[must_use]
    pub fn current_summary(&self) -> Option<ItemSummary> {
        self.current_item().map(ResultItem::summary)
    }
}
