// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and value objects.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It depends on nothing but `std` and `serde` derives to keep it testable
//! in isolation.
//!
//! # Modules
//!
//! - [`results`]: Search result types ([`ResultItem`](results::ResultItem),
//!   [`ResultId`](results::ResultId), [`ImageRef`](results::ImageRef))
//! - [`ui`]: UI value objects ([`Scale`](ui::newtypes::Scale),
//!   [`ZoomStep`](ui::newtypes::ZoomStep))

pub mod results;
pub mod ui;
