// SPDX-License-Identifier: MPL-2.0
//! Interaction layer: per-image state and the viewer built on it.

pub mod state;
pub mod viewer;
