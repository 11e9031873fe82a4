mod persistence;
mod use_bounce;
mod use_tilt;

pub use persistence::{load_prefs, save_prefs, PersistedPrefs};
pub use use_bounce::{use_bounce, BounceHandle};
pub use use_tilt::{use_tilt, TiltHandle};
