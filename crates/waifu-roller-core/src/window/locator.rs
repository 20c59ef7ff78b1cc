//! Finding, focusing and launching the target application window.

use crate::{CoreError, CoreResult, Launcher, TargetApp, WindowHandle, WindowSystem};

use std::{panic::Location, sync::Arc, thread, time::Duration};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Locates the target application's window and brings it to the foreground.
pub struct WindowLocator {
    target: TargetApp,
    windows: Arc<dyn WindowSystem>,
    launcher: Arc<dyn Launcher>,
    launch_settle: Duration,
}

impl WindowLocator {
    /// Create a locator for `target`.
    ///
    /// `launch_settle` is how long [`Self::open_or_focus`] waits after spawning
    /// the executable before returning.
    pub fn new(
        target: TargetApp,
        windows: Arc<dyn WindowSystem>,
        launcher: Arc<dyn Launcher>,
        launch_settle: Duration,
    ) -> Self {
        Self {
            target,
            windows,
            launcher,
            launch_settle,
        }
    }

    /// The application this locator looks for.
    pub fn target(&self) -> &TargetApp {
        &self.target
    }

    /// The window system this locator queries.
    pub fn windows(&self) -> &Arc<dyn WindowSystem> {
        &self.windows
    }

    /// First window, in enumeration order, that satisfies the target's title rule.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn locate(&self) -> CoreResult<WindowHandle> {
        let rule = &self.target.title_rule;
        let candidates = self.windows.windows_with_title(&rule.marker)?;

        if let Some(window) = candidates.iter().find(|w| rule.matches(w.title())) {
            debug!(title = window.title(), "Located target window");
            return Ok(window.clone());
        }

        Err(CoreError::TargetNotOpen {
            marker: rule.marker.clone(),
            candidates: candidates.iter().map(|w| w.title().to_string()).collect(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Bring `window` to the foreground.
    ///
    /// Minimizing and maximizing first avoids the activation silently failing
    /// for a window that has never been foregrounded.
    #[instrument(skip(self), fields(title = window.title()))]
    pub fn focus(&self, window: &WindowHandle) -> CoreResult<()> {
        self.windows.minimize(window)?;
        self.windows.maximize(window)?;
        self.windows.activate(window)?;

        debug!("Focused target window");

        Ok(())
    }

    /// Whether the window holding OS focus belongs to the target.
    pub fn is_target_active(&self) -> bool {
        self.windows
            .active_window()
            .is_some_and(|w| self.target.title_rule.matches(w.title()))
    }

    /// Focus the target if it is open, otherwise launch it.
    ///
    /// Returns `false` when an open window was focused, and `true` when the
    /// executable had to be started. In that case the caller should let the
    /// user confirm the application is ready before sending input.
    #[instrument(skip(self))]
    pub fn open_or_focus(&self) -> CoreResult<bool> {
        match self.locate() {
            Ok(window) => {
                self.focus(&window)?;
                info!(title = window.title(), "Moved to the target application");
                Ok(false)
            }
            Err(CoreError::TargetNotOpen { candidates, .. }) => {
                debug!(?candidates, "Target not open, launching");

                let executable = self.target.resolve_executable()?;
                self.launcher.spawn(&executable)?;

                info!(
                    executable = ?executable,
                    settle_ms = self.launch_settle.as_millis(),
                    "Launched target application"
                );

                thread::sleep(self.launch_settle);
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }
}
