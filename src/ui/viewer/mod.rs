// SPDX-License-Identifier: MPL-2.0
//! Image viewer: the viewport controller, the modal session driving it, and
//! the input bindings that feed both.

pub mod controller;
pub mod session;
pub mod shortcuts;
pub mod subcomponents;
pub mod subscription;

pub use controller::ViewportController;
pub use session::{ModalSession, SessionState};
pub use shortcuts::Command;
pub use subcomponents::loading::{LoadPhase, RequestToken};
