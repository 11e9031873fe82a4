//! Timing-curve descriptors for CSS transitions.

use serde::{Deserialize, Serialize};

/// Easing curve for the tilt transition, rendered to a CSS
/// timing-function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    /// Custom cubic-bezier control points (x1, y1, x2, y2).
    CubicBezier(f64, f64, f64, f64),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOut
    }
}

impl Easing {
    pub fn to_css(&self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Cubic ease-in-out mapping.
/// Input: linear progress in [0.0, 1.0]. Output: eased progress in the same
/// range. Used by consumers that drive decorative animations from script
/// rather than CSS.
pub fn ease_in_out_cubic(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
