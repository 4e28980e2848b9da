// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_SCALE, DEFAULT_ZOOM_STEP, MAX_SCALE, MAX_ZOOM_STEP, MIN_SCALE, MIN_ZOOM_STEP,
};

// =============================================================================
// Scale
// =============================================================================

/// Viewport scale factor, guaranteed to be within valid range (0.1–5.0).
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// Non-finite input yields the default scale.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(MIN_SCALE, MAX_SCALE))
        } else {
            Self::default()
        }
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a rounded percentage (e.g., 1.0 → 100).
    #[must_use]
    pub fn as_percent(self) -> u32 {
        // Bounded to 10..=500 so the cast is lossless.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.0 * 100.0).round() as u32;
        percent
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }

    /// Whether the image is magnified beyond its natural size.
    #[must_use]
    pub fn is_magnified(self) -> bool {
        self.0 > 1.0
    }

    /// Returns the scale shifted by `delta`, clamped to the valid range.
    #[must_use]
    pub fn offset_by(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

// =============================================================================
// ZoomStep
// =============================================================================

/// Scale increment for a single zoom command (0.01–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_finite() {
            Self(step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP))
        } else {
            Self::default()
        }
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_clamps_to_valid_range() {
        assert_eq!(Scale::new(0.0).value(), MIN_SCALE);
        assert_eq!(Scale::new(100.0).value(), MAX_SCALE);
        assert_eq!(Scale::new(2.5).value(), 2.5);
    }

    #[test]
    fn scale_rejects_non_finite() {
        assert_eq!(Scale::new(f32::NAN), Scale::default());
        assert_eq!(Scale::new(f32::INFINITY), Scale::default());
    }

    #[test]
    fn scale_percent_is_rounded() {
        assert_eq!(Scale::new(1.0).as_percent(), 100);
        assert_eq!(Scale::new(0.456).as_percent(), 46);
        assert_eq!(Scale::new(5.0).as_percent(), 500);
    }

    #[test]
    fn scale_bounds_checks() {
        assert!(Scale::new(MIN_SCALE).is_min());
        assert!(Scale::new(MAX_SCALE).is_max());
        assert!(!Scale::default().is_magnified());
        assert!(Scale::new(1.2).is_magnified());
    }

    #[test]
    fn offset_by_stays_within_bounds() {
        let scale = Scale::new(4.9);
        assert_eq!(scale.offset_by(1.0).value(), MAX_SCALE);
        assert_eq!(Scale::new(0.2).offset_by(-1.0).value(), MIN_SCALE);
    }

    #[test]
    fn zoom_step_clamps() {
        assert_eq!(ZoomStep::new(10.0).value(), MAX_ZOOM_STEP);
        assert_eq!(ZoomStep::new(-1.0).value(), MIN_ZOOM_STEP);
        assert_eq!(ZoomStep::default().value(), DEFAULT_ZOOM_STEP);
    }
}
