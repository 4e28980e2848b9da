// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces for the collaborators the core
//! consumes or drives but does not implement.
//!
//! # Available Ports
//!
//! - [`host`]: Page-level side effects (scroll lock)
//! - [`search`]: Result delivery and image geometry probing
//!
//! # Design Notes
//!
//! - Traits use domain types and `iced_core` geometry only
//! - Methods are synchronous; asynchronous hosts deliver results as messages

pub mod host;
pub mod search;

// Re-export main types for convenience
pub use host::{HeadlessHost, HostPage};
pub use search::{ImageProbe, ProbeError, SearchSource};
