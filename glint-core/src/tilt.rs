//! Pointer-driven tilt computation.
//!
//! Maps a pointer position over a rectangular surface to the full visual
//! deformation of that surface: 3D rotation, scale, a highlight under the
//! pointer, and a reflective sheen offset from center. The mapping is a pure
//! function of pointer position and configuration; hover components call it
//! on every pointer-move and fall back to [`TiltState::neutral`] on leave.

use crate::easing::Easing;
use serde::{Deserialize, Serialize};

/// How far the sheen travels from center, in percentage points, when the
/// pointer reaches a surface edge.
const REFLECTION_TRAVEL_PCT: f64 = 12.0;

/// Sheen opacity while the pointer is over the surface.
const HOVER_REFLECTION_OPACITY: f64 = 0.12;

/// Bounding rectangle of a hoverable surface, in viewport coordinates
/// (the same space as pointer event coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect with no area cannot anchor a tilt; callers get the neutral
    /// state instead of a division by zero.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Tunable constants for the tilt effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltConfig {
    /// Maximum rotation magnitude in degrees, reached at the surface edges.
    pub max_angle_deg: f64,
    /// Uniform scale applied while the pointer is over the surface.
    pub hover_scale: f64,
    /// Duration of the transition back to rest, in milliseconds.
    pub transition_ms: u32,
    /// Perspective distance for the 3D transform, in pixels.
    pub perspective_px: f64,
    /// Timing curve for the transition.
    pub easing: Easing,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle_deg: 8.0,
            hover_scale: 1.03,
            transition_ms: 300,
            perspective_px: 1000.0,
            easing: Easing::default(),
        }
    }
}

/// The current visual deformation of a single surface.
///
/// Positions are in normalized percentage coordinates (0–100 across the
/// surface). A state is owned exclusively by the surface it animates and is
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltState {
    /// Rotation around the horizontal axis, degrees. Positive tilts the top
    /// edge toward the viewer.
    pub rotation_x_deg: f64,
    /// Rotation around the vertical axis, degrees.
    pub rotation_y_deg: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Highlight center, percent of surface width.
    pub glow_x_pct: f64,
    /// Highlight center, percent of surface height.
    pub glow_y_pct: f64,
    /// 0 at rest, 1 while hovered.
    pub glow_intensity: f64,
    /// Sheen center, percent of surface width.
    pub reflection_x_pct: f64,
    /// Sheen center, percent of surface height.
    pub reflection_y_pct: f64,
    /// 0 at rest, a fixed low value while hovered.
    pub reflection_opacity: f64,
}

impl TiltState {
    /// The at-rest state: no rotation, unit scale, centered glow and sheen,
    /// zero intensity/opacity. Surfaces mount with this value and reset to
    /// it on pointer-leave.
    pub fn neutral() -> Self {
        Self {
            rotation_x_deg: 0.0,
            rotation_y_deg: 0.0,
            scale: 1.0,
            glow_x_pct: 50.0,
            glow_y_pct: 50.0,
            glow_intensity: 0.0,
            reflection_x_pct: 50.0,
            reflection_y_pct: 50.0,
            reflection_opacity: 0.0,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }
}

impl Default for TiltState {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Compute the tilt state for a pointer at `(pointer_x, pointer_y)` in
/// viewport coordinates over `rect`.
///
/// Offsets are linearly interpolated from the surface center: a pointer at
/// the center yields zero rotation, a pointer at an edge yields the full
/// `max_angle_deg`. The X-axis rotation is inverted so that moving the
/// pointer toward the top of the surface tilts the top edge toward the
/// viewer. Pointers outside `rect` (events can still fire there) extrapolate
/// along the same line, unclamped.
///
/// Degenerate geometry (zero width or height) returns the neutral state.
pub fn compute_tilt(
    pointer_x: f64,
    pointer_y: f64,
    rect: &SurfaceRect,
    config: &TiltConfig,
) -> TiltState {
    if rect.is_degenerate() {
        return TiltState::neutral();
    }

    let x = pointer_x - rect.left;
    let y = pointer_y - rect.top;
    let cx = rect.width / 2.0;
    let cy = rect.height / 2.0;

    // Normalized offsets from center, in [-1, 1] for in-bounds pointers.
    let px = (x - cx) / cx;
    let py = (y - cy) / cy;

    TiltState {
        rotation_x_deg: config.max_angle_deg * -py,
        rotation_y_deg: config.max_angle_deg * px,
        scale: config.hover_scale,
        glow_x_pct: x / rect.width * 100.0,
        glow_y_pct: y / rect.height * 100.0,
        glow_intensity: 1.0,
        reflection_x_pct: 50.0 + px * REFLECTION_TRAVEL_PCT,
        reflection_y_pct: 50.0 + py * REFLECTION_TRAVEL_PCT,
        reflection_opacity: HOVER_REFLECTION_OPACITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_200x100() -> SurfaceRect {
        SurfaceRect::new(0.0, 0.0, 200.0, 100.0)
    }

    #[test]
    fn neutral_state_is_exact() {
        let neutral = TiltState::neutral();
        assert_eq!(neutral.rotation_x_deg, 0.0);
        assert_eq!(neutral.rotation_y_deg, 0.0);
        assert_eq!(neutral.scale, 1.0);
        assert_eq!(neutral.glow_x_pct, 50.0);
        assert_eq!(neutral.glow_y_pct, 50.0);
        assert_eq!(neutral.glow_intensity, 0.0);
        assert_eq!(neutral.reflection_x_pct, 50.0);
        assert_eq!(neutral.reflection_y_pct, 50.0);
        assert_eq!(neutral.reflection_opacity, 0.0);
    }

    #[test]
    fn default_state_is_neutral() {
        assert_eq!(TiltState::default(), TiltState::neutral());
    }

    #[test]
    fn pointer_at_center_yields_zero_rotation() {
        let state = compute_tilt(100.0, 50.0, &rect_200x100(), &TiltConfig::default());
        assert_eq!(state.rotation_x_deg, 0.0);
        assert_eq!(state.rotation_y_deg, 0.0);
        assert_eq!(state.glow_x_pct, 50.0);
        assert_eq!(state.glow_y_pct, 50.0);
        assert_eq!(state.reflection_x_pct, 50.0);
        assert_eq!(state.reflection_y_pct, 50.0);
    }

    #[test]
    fn top_right_corner_scenario() {
        // rect 200x100 at origin, pointer at the top-right corner.
        let state = compute_tilt(200.0, 0.0, &rect_200x100(), &TiltConfig::default());
        assert_eq!(state.rotation_x_deg, 8.0);
        assert_eq!(state.rotation_y_deg, 8.0);
        assert_eq!(state.glow_x_pct, 100.0);
        assert_eq!(state.glow_y_pct, 0.0);
        assert_eq!(state.reflection_x_pct, 62.0);
        assert_eq!(state.reflection_y_pct, 38.0);
        assert_eq!(state.reflection_opacity, 0.12);
        assert_eq!(state.glow_intensity, 1.0);
        assert_eq!(state.scale, 1.03);
    }

    #[test]
    fn top_edge_tilts_top_toward_viewer() {
        // Pointer above center: py < 0, so rotation_x must be positive.
        let state = compute_tilt(100.0, 10.0, &rect_200x100(), &TiltConfig::default());
        assert!(state.rotation_x_deg > 0.0);
        assert_eq!(state.rotation_y_deg, 0.0);
    }

    #[test]
    fn rect_offset_from_origin_uses_local_coordinates() {
        let rect = SurfaceRect::new(300.0, 400.0, 200.0, 100.0);
        let state = compute_tilt(400.0, 450.0, &rect, &TiltConfig::default());
        // (400, 450) is the center of this rect.
        assert_eq!(state.rotation_x_deg, 0.0);
        assert_eq!(state.rotation_y_deg, 0.0);
        assert_eq!(state.glow_x_pct, 50.0);
        assert_eq!(state.glow_y_pct, 50.0);
    }

    #[test]
    fn zero_width_rect_returns_neutral() {
        let rect = SurfaceRect::new(0.0, 0.0, 0.0, 100.0);
        let state = compute_tilt(10.0, 10.0, &rect, &TiltConfig::default());
        assert!(state.is_neutral());
    }

    #[test]
    fn zero_height_rect_returns_neutral() {
        let rect = SurfaceRect::new(0.0, 0.0, 100.0, 0.0);
        let state = compute_tilt(10.0, 10.0, &rect, &TiltConfig::default());
        assert!(state.is_neutral());
    }

    #[test]
    fn negative_size_rect_returns_neutral() {
        let rect = SurfaceRect::new(0.0, 0.0, -50.0, 100.0);
        assert!(compute_tilt(10.0, 10.0, &rect, &TiltConfig::default()).is_neutral());
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let rect = rect_200x100();
        let config = TiltConfig::default();
        let a = compute_tilt(137.5, 41.25, &rect, &config);
        let b = compute_tilt(137.5, 41.25, &rect, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn custom_max_angle_scales_rotation() {
        let config = TiltConfig {
            max_angle_deg: 15.0,
            ..TiltConfig::default()
        };
        let state = compute_tilt(200.0, 0.0, &rect_200x100(), &config);
        assert_eq!(state.rotation_x_deg, 15.0);
        assert_eq!(state.rotation_y_deg, 15.0);
    }

    #[test]
    fn out_of_bounds_pointer_extrapolates_unclamped() {
        // Pointer-capture can deliver moves past the edge; the linear map
        // extends past max_angle rather than clamping.
        let state = compute_tilt(300.0, 50.0, &rect_200x100(), &TiltConfig::default());
        assert_eq!(state.rotation_y_deg, 16.0);
    }
}
