// SPDX-License-Identifier: MPL-2.0
//! `search_lens` is the interaction core of a search-result image browser.
//!
//! It tracks an ordered set of heterogeneous results, opens any one of them
//! in a modal viewer, and manages the viewer's zoom, pan and fit state. All
//! rendering is left to the host, which feeds input and geometry in as
//! messages and applies the returned events.

#![doc(html_root_url = "https://docs.rs/search_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
