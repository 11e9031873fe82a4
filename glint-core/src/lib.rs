pub mod easing;
pub mod hover;
pub mod markdown;
pub mod style;
pub mod tilt;

pub use easing::{ease_in_out_cubic, Easing};
pub use hover::{HoverMachine, HoverPhase};
pub use markdown::{segment_markdown, Segment};
pub use style::{glow_style, sheen_style, transform_style, transition_style};
pub use tilt::{compute_tilt, SurfaceRect, TiltConfig, TiltState};
