// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, used by the CLI driver.
//!
//! # Available Adapters
//!
//! - [`result_file`]: TOML result files (implements [`SearchSource`])
//! - [`probe`]: Image geometry via the `image` crate (implements [`ImageProbe`])
//!
//! [`SearchSource`]: crate::application::port::SearchSource
//! [`ImageProbe`]: crate::application::port::ImageProbe

pub mod probe;
pub mod result_file;

// Re-export main types for convenience
pub use probe::FsImageProbe;
pub use result_file::ResultFileSource;
