// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles all zoom-related state and logic, including:
//! - Bounded scale changes
//! - Fit-to-container scale computation
//! - Zoom step configuration

use crate::config::defaults::{DEFAULT_WHEEL_STEP, FIT_MARGIN, MAX_FIT_SCALE};
use crate::config::Config;
use crate::domain::ui::newtypes::{Scale, ZoomStep};
use iced_core::Size;

/// Zoom step settings for the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    /// Step for zoom in/out commands.
    pub zoom_step: ZoomStep,
    /// Step per wheel notch.
    pub wheel_step: ZoomStep,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            zoom_step: ZoomStep::default(),
            wheel_step: ZoomStep::new(DEFAULT_WHEEL_STEP),
        }
    }
}

impl From<&Config> for ZoomSettings {
    fn from(config: &Config) -> Self {
        Self {
            zoom_step: config.zoom_step(),
            wheel_step: config.wheel_step(),
        }
    }
}

/// Manages the current scale of the displayed image.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomState {
    scale: Scale,
}

impl ZoomState {
    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Shifts the scale by `delta`, clamped to bounds.
    ///
    /// Returns `false`, leaving the state untouched, when the clamped result
    /// equals the current scale or `delta` is not finite.
    pub fn zoom_by(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let next = self.scale.offset_by(delta);
        if next == self.scale {
            return false;
        }
        self.scale = next;
        true
    }

    /// Sets the scale directly (e.g., after a fit).
    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }
}

/// Whether a size can take part in scale computations.
#[must_use]
pub fn is_valid_extent(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Scale that makes `natural` occupy at most 90% of `container` on each
/// axis without exceeding its natural size.
///
/// Returns `None` for degenerate geometry (zero, negative or non-finite).
#[must_use]
pub fn fit_scale(container: Size, natural: Size) -> Option<Scale> {
    if !is_valid_extent(container) || !is_valid_extent(natural) {
        return None;
    }
    let scale_x = container.width * FIT_MARGIN / natural.width;
    let scale_y = container.height * FIT_MARGIN / natural.height;
    Some(Scale::new(scale_x.min(scale_y).min(MAX_FIT_SCALE)))
}

/// Formats a zoom percentage for display (e.g., 150 → "150%").
#[must_use]
pub fn format_percent(percent: u32) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{MAX_SCALE, MIN_SCALE};
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_zoom_state_is_natural_size() {
        let state = ZoomState::default();
        assert_eq!(state.scale().value(), 1.0);
    }

    #[test]
    fn zoom_by_clamps_and_reports_change() {
        let mut state = ZoomState::default();
        assert!(state.zoom_by(10.0));
        assert_eq!(state.scale().value(), MAX_SCALE);

        // Already at the bound: no change reported.
        assert!(!state.zoom_by(0.2));
        assert_eq!(state.scale().value(), MAX_SCALE);

        assert!(state.zoom_by(-10.0));
        assert_eq!(state.scale().value(), MIN_SCALE);
        assert!(!state.zoom_by(-0.2));
    }

    #[test]
    fn zoom_by_ignores_non_finite_delta() {
        let mut state = ZoomState::default();
        assert!(!state.zoom_by(f32::NAN));
        assert!(!state.zoom_by(f32::INFINITY));
        assert_eq!(state.scale().value(), 1.0);
    }

    #[test]
    fn zoom_by_zero_is_no_op() {
        let mut state = ZoomState::default();
        assert!(!state.zoom_by(0.0));
    }

    #[test]
    fn fit_scale_never_exceeds_natural_size() {
        // 800x600 container, 400x300 image: 1.8 on both axes, capped at 1.0.
        let scale = fit_scale(Size::new(800.0, 600.0), Size::new(400.0, 300.0));
        assert_eq!(scale.map(Scale::value), Some(1.0));
    }

    #[test]
    fn fit_scale_uses_tighter_axis() {
        // 1000x500 container, 2000x2000 image: min(0.45, 0.225) = 0.225.
        let scale = fit_scale(Size::new(1000.0, 500.0), Size::new(2000.0, 2000.0))
            .expect("valid geometry");
        assert_abs_diff_eq!(scale.value(), 0.225, epsilon = 1e-6);
    }

    #[test]
    fn fit_scale_clamps_to_minimum_scale() {
        let scale = fit_scale(Size::new(100.0, 100.0), Size::new(100_000.0, 100_000.0));
        assert_eq!(scale.map(Scale::value), Some(MIN_SCALE));
    }

    #[test]
    fn fit_scale_rejects_degenerate_geometry() {
        assert!(fit_scale(Size::new(0.0, 600.0), Size::new(400.0, 300.0)).is_none());
        assert!(fit_scale(Size::new(800.0, 600.0), Size::new(0.0, 0.0)).is_none());
        assert!(fit_scale(Size::new(f32::NAN, 600.0), Size::new(400.0, 300.0)).is_none());
        assert!(fit_scale(Size::new(800.0, -1.0), Size::new(400.0, 300.0)).is_none());
    }

    #[test]
    fn settings_follow_config() {
        let config = Config {
            zoom_step: Some(0.5),
            wheel_step: Some(0.05),
            double_click_reset: None,
        };
        let settings = ZoomSettings::from(&config);
        assert_eq!(settings.zoom_step.value(), 0.5);
        assert_eq!(settings.wheel_step.value(), 0.05);
    }

    #[test]
    fn format_percent_appends_sign() {
        assert_eq!(format_percent(150), "150%");
    }
}
