//! Derived CSS strings for the tilt effect.
//!
//! The transform is composed in the fixed order
//! perspective → rotateX → rotateY → scale3d. 3D transform composition is
//! not commutative; reordering changes the visual result, so the order is
//! part of the contract and asserted by tests.

use crate::tilt::{TiltConfig, TiltState};

/// Inline `transform` value for a surface in the given state.
pub fn transform_style(config: &TiltConfig, state: &TiltState) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({}, {}, {})",
        config.perspective_px,
        state.rotation_x_deg,
        state.rotation_y_deg,
        state.scale,
        state.scale,
        state.scale,
    )
}

/// Inline `transition` value driving the settle back to rest.
pub fn transition_style(config: &TiltConfig) -> String {
    format!(
        "transform {}ms {}",
        config.transition_ms,
        config.easing.to_css()
    )
}

/// Inline style for the highlight overlay: a radial gradient centered under
/// the pointer, faded in and out via `glow_intensity`.
pub fn glow_style(state: &TiltState) -> String {
    format!(
        "background: radial-gradient(circle at {}% {}%, rgba(255, 255, 255, 0.25) 0%, transparent 60%); opacity: {};",
        state.glow_x_pct, state.glow_y_pct, state.glow_intensity
    )
}

/// Inline style for the reflective sheen overlay, offset opposite/along
/// pointer displacement from center.
pub fn sheen_style(state: &TiltState) -> String {
    format!(
        "background: radial-gradient(ellipse at {}% {}%, rgba(255, 255, 255, 0.9) 0%, transparent 55%); opacity: {};",
        state.reflection_x_pct, state.reflection_y_pct, state.reflection_opacity
    )
}
