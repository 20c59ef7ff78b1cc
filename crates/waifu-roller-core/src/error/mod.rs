use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Automation errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No open window matched the target's title rule.
    ///
    /// Recoverable: [`crate::WindowLocator::open_or_focus`] turns this into a launch.
    #[error("Target not open: no window resembling {marker:?} among {candidates:?} {location}")]
    TargetNotOpen {
        /// Title marker that was searched for.
        marker: String,
        /// Titles that contained the marker but failed the rule.
        candidates: Vec<String>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The target executable could not be located on disk.
    #[error("Executable not found at: {path:?} {location}")]
    ExecutableNotFound {
        /// Path that was searched.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Window automation is not available on this operating system.
    #[error("Unsupported platform: {platform} {location}")]
    UnsupportedPlatform {
        /// Name of the running operating system.
        platform: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Spawning the target executable failed.
    #[error("Failed to launch {path:?}: {reason} {location}")]
    LaunchFailed {
        /// Executable that was spawned.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An OS window call failed, usually because the window is gone.
    #[error("Window {operation} failed: {reason} {location}")]
    WindowOperationFailed {
        /// Operation that was attempted (minimize, maximize, activate, enumerate).
        operation: &'static str,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Simulated keyboard input could not be sent.
    #[error("Input simulation failed: {reason} {location}")]
    InputFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The pointer was parked in a screen corner while input was about to be sent.
    #[error("Fail-safe triggered {location}")]
    FailSafeTriggered {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The session has been terminated by an abort trigger.
    #[error("Run aborted {location}")]
    Aborted {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Whether this error is the terminal abort condition.
    pub fn is_abort(&self) -> bool {
        matches!(self, CoreError::Aborted { .. })
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
