//! Operating system backends for the core's window and launch seams.

#[cfg(target_os = "windows")]
mod win32;

use std::{panic::Location, path::Path, sync::Arc};

use error_location::ErrorLocation;
use tracing::{info, instrument};
use waifu_roller_core::{CoreError, CoreResult, Launcher, WindowSystem};

/// The desktop window backend for this platform.
///
/// Only Windows is supported; elsewhere this fails before any input is sent.
#[track_caller]
pub fn window_system() -> CoreResult<Arc<dyn WindowSystem>> {
    #[cfg(target_os = "windows")]
    {
        Ok(Arc::new(win32::Win32Desktop))
    }
    #[cfg(not(target_os = "windows"))]
    {
        Err(CoreError::UnsupportedPlatform {
            platform: std::env::consts::OS.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// UTF-16 buffer size for a window title of `reported` units, including the terminator.
///
/// Negative lengths (errors) yield room for the terminator only.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) fn title_buffer_len(reported: i32) -> usize {
    usize::try_from(reported).unwrap_or(0) + 1
}

/// Starts the target through the OS shell, detached from this process.
pub struct ShellLauncher;

impl Launcher for ShellLauncher {
    #[instrument(skip(self))]
    fn spawn(&self, executable: &Path) -> CoreResult<()> {
        open::that_detached(executable).map_err(|e| CoreError::LaunchFailed {
            path: executable.to_path_buf(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(executable = ?executable, "Launched target");

        Ok(())
    }
}
