use crate::config::{
    DEFAULT_KEEP_FAILSAFE, DEFAULT_REVERT_WINDOW, DEFAULT_SKIP_CONFIRMATION, DEFAULT_VERBOSE,
    default_keep_failsafe, default_revert_window, default_skip_confirmation, default_verbose,
};

use serde::{Deserialize, Serialize};

/// Application behaviour configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Print milestone lines and per-command progress.
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// After completion, return to the window that was active at startup.
    #[serde(default = "default_revert_window")]
    pub revert_window: bool,
    /// Moving the mouse to a corner of the screen terminates the run.
    #[serde(default = "default_keep_failsafe")]
    pub keep_failsafe: bool,
    /// Start immediately, without the tips and ENTER confirmation.
    #[serde(default = "default_skip_confirmation")]
    pub skip_confirmation: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            verbose: DEFAULT_VERBOSE,
            revert_window: DEFAULT_REVERT_WINDOW,
            keep_failsafe: DEFAULT_KEEP_FAILSAFE,
            skip_confirmation: DEFAULT_SKIP_CONFIRMATION,
        }
    }
}
