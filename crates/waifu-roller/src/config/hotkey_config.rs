use crate::{
    AppError, AppResult,
    config::{DEFAULT_ABORT_HOTKEY, DEFAULT_PAUSE_HOTKEY, default_abort_hotkey, default_pause_hotkey},
};

use std::{panic::Location, str::FromStr};

use error_location::ErrorLocation;
use global_hotkey::hotkey::HotKey;
use serde::{Deserialize, Serialize};

/// Global hotkey bindings, in `global-hotkey` syntax (e.g. `"CapsLock"`, `"shift+KeyP"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Toggles pause/resume.
    #[serde(default = "default_pause_hotkey")]
    pub pause: String,
    /// Aborts the run.
    #[serde(default = "default_abort_hotkey")]
    pub abort: String,
}

impl HotkeyConfig {
    /// Parsed pause hotkey.
    #[track_caller]
    pub fn pause_hotkey(&self) -> AppResult<HotKey> {
        parse_hotkey("pause", &self.pause)
    }

    /// Parsed abort hotkey.
    #[track_caller]
    pub fn abort_hotkey(&self) -> AppResult<HotKey> {
        parse_hotkey("abort", &self.abort)
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            pause: DEFAULT_PAUSE_HOTKEY.to_string(),
            abort: DEFAULT_ABORT_HOTKEY.to_string(),
        }
    }
}

#[track_caller]
fn parse_hotkey(name: &str, value: &str) -> AppResult<HotKey> {
    HotKey::from_str(value).map_err(|e| AppError::ConfigError {
        reason: format!("Invalid {name} hotkey {value:?}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
