// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! - [`result_set`]: the ordered result collection and navigation lookups

pub mod result_set;

pub use result_set::{Direction, NavigationInfo, ResultSet};
