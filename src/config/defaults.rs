// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Viewport scale bounds and zoom steps
//! - **Fit**: Fit-to-container margin
//! - **Pointer**: Double-click detection

use std::time::Duration;

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Minimum allowed viewport scale (10%).
pub const MIN_SCALE: f32 = 0.1;

/// Maximum allowed viewport scale (500%).
pub const MAX_SCALE: f32 = 5.0;

/// Scale applied to a freshly displayed image before it is fitted.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Scale increment for zoom in/out buttons and keys.
pub const DEFAULT_ZOOM_STEP: f32 = 0.2;

/// Scale increment per mouse wheel notch.
pub const DEFAULT_WHEEL_STEP: f32 = 0.1;

/// Smallest configurable zoom or wheel step.
pub const MIN_ZOOM_STEP: f32 = 0.01;

/// Largest configurable zoom or wheel step.
pub const MAX_ZOOM_STEP: f32 = 1.0;

// ==========================================================================
// Fit Defaults
// ==========================================================================

/// Share of the container an image may occupy on each axis when fitted.
pub const FIT_MARGIN: f32 = 0.9;

/// Fitting never enlarges an image beyond its natural size.
pub const MAX_FIT_SCALE: f32 = 1.0;

// ==========================================================================
// Pointer Defaults
// ==========================================================================

/// Time window in which a second click counts as a double-click.
pub const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Whether double-clicking the image resets zoom by default.
pub const DEFAULT_DOUBLE_CLICK_RESET: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);
    assert!(MAX_FIT_SCALE <= MAX_SCALE);

    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_STEP <= MAX_ZOOM_STEP);

    assert!(FIT_MARGIN > 0.0);
    assert!(FIT_MARGIN <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_are_valid() {
        assert!(MIN_SCALE < DEFAULT_SCALE);
        assert!(DEFAULT_SCALE < MAX_SCALE);
        assert_eq!(MIN_SCALE, 0.1);
        assert_eq!(MAX_SCALE, 5.0);
    }

    #[test]
    fn zoom_step_defaults_are_valid() {
        assert_eq!(DEFAULT_ZOOM_STEP, 0.2);
        assert_eq!(DEFAULT_WHEEL_STEP, 0.1);
        assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);
    }

    #[test]
    fn fit_defaults_are_valid() {
        assert_eq!(FIT_MARGIN, 0.9);
        assert_eq!(MAX_FIT_SCALE, 1.0);
    }
}
