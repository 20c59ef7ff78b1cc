use crate::{CoreResult, WindowHandle};

use std::path::Path;

/// Access to the desktop's top-level windows.
///
/// Implementations may be called from the engine thread and the hotkey
/// listener concurrently.
pub trait WindowSystem: Send + Sync {
    /// All visible top-level windows whose title contains `marker`, in enumeration order.
    fn windows_with_title(&self, marker: &str) -> CoreResult<Vec<WindowHandle>>;

    /// The window currently holding OS focus, with its live title.
    fn active_window(&self) -> Option<WindowHandle>;

    /// Minimize `window`.
    fn minimize(&self, window: &WindowHandle) -> CoreResult<()>;

    /// Maximize `window`.
    fn maximize(&self, window: &WindowHandle) -> CoreResult<()>;

    /// Bring `window` to the foreground.
    fn activate(&self, window: &WindowHandle) -> CoreResult<()>;
}

/// Starts the target executable.
pub trait Launcher: Send + Sync {
    /// Spawn `executable` without waiting for it.
    fn spawn(&self, executable: &Path) -> CoreResult<()>;
}
