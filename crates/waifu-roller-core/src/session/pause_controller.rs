use crate::{
    CoreError, CoreResult, SessionCell, SessionState, StatusLine, StatusSink, WindowLocator,
};

use std::{panic::Location, sync::Arc, thread, time::Duration};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// Pause/resume toggle driven by the pause hotkey.
pub struct PauseController {
    session: Arc<SessionCell>,
    locator: Arc<WindowLocator>,
    status: Arc<dyn StatusSink>,
    resume_settle: Duration,
}

impl PauseController {
    /// Create a controller toggling `session`.
    pub fn new(
        session: Arc<SessionCell>,
        locator: Arc<WindowLocator>,
        status: Arc<dyn StatusSink>,
        resume_settle: Duration,
    ) -> Self {
        Self {
            session,
            locator,
            status,
            resume_settle,
        }
    }

    /// Flip between running and paused.
    ///
    /// On resume the target window is refocused first if it lost focus, so
    /// control never returns into the wrong window. A target that is no
    /// longer open is reported, and the gate keeps waiting for it.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn toggle(&self) -> CoreResult<SessionState> {
        let Some(state) = self.session.toggle() else {
            return Err(CoreError::Aborted {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        match state {
            SessionState::Paused => {
                self.status
                    .emit(StatusLine::Notice("Program has been paused.".to_string()));
                info!("Session paused");
            }
            SessionState::Running => {
                self.status
                    .emit(StatusLine::Notice("Program resumed.".to_string()));
                info!("Session resumed");

                if !self.locator.is_target_active() {
                    self.refocus();
                    thread::sleep(self.resume_settle);
                }
            }
            SessionState::Terminating => {}
        }

        Ok(state)
    }

    fn refocus(&self) {
        let result = self
            .locator
            .locate()
            .and_then(|window| self.locator.focus(&window));

        if let Err(e) = result {
            warn!(error = ?e, "Could not refocus target on resume");
            self.status.emit(StatusLine::Notice(format!(
                "Could not move back to {}; waiting for it to regain focus.",
                self.locator.target().display_name()
            )));
        }
    }
}
