// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The viewport controller orchestrates them.
//!
//! ## Architecture
//!
//! ```text
//! controller.rs (orchestrator)
//!     ├── loading  - Request tokens and load phase
//!     └── pointer  - Cursor tracking and double-click
//! ```

pub mod loading;
pub mod pointer;
