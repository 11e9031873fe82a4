// glint-ui/src/hooks/persistence.rs
//!
//! Browser persistence for user preferences: the summary panel's view mode
//! and the diagram theme. Stored as versioned JSON in localStorage; load
//! returns `None` for missing, corrupt, or out-of-date data, and saving
//! failures are logged and otherwise ignored.

use crate::components::summary_panel::ViewMode;
use crate::mermaid::DiagramTheme;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "glint_prefs";

/// Preferences persisted between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedPrefs {
    pub summary_mode: ViewMode,
    pub diagram_theme: DiagramTheme,
    /// Schema version for future migrations
    version: u32,
}

impl PersistedPrefs {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(summary_mode: ViewMode, diagram_theme: DiagramTheme) -> Self {
        Self {
            summary_mode,
            diagram_theme,
            version: Self::CURRENT_VERSION,
        }
    }
}

/// Load preferences from localStorage.
/// Returns None if nothing is stored, parsing fails, or storage is
/// unavailable.
pub fn load_prefs() -> Option<PersistedPrefs> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY).ok()??;

    match serde_json::from_str::<PersistedPrefs>(&json) {
        Ok(prefs) => {
            // Only accept current version (future: add migration logic)
            if prefs.version == PersistedPrefs::CURRENT_VERSION {
                Some(prefs)
            } else {
                log::warn!(
                    "Ignoring stored preferences with version {} (current: {})",
                    prefs.version,
                    PersistedPrefs::CURRENT_VERSION
                );
                None
            }
        }
        Err(e) => {
            log::warn!("Failed to parse stored preferences: {}", e);
            None
        }
    }
}

/// Save preferences to localStorage.
/// Logs a warning if saving fails (storage unavailable or quota exceeded).
pub fn save_prefs(prefs: &PersistedPrefs) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };

    match serde_json::to_string(prefs) {
        Ok(json) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
                log::warn!("Failed to save preferences: {:?}", e);
            }
        }
        Err(e) => {
            log::warn!("Failed to serialize preferences: {}", e);
        }
    }
}
