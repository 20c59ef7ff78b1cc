//! The wait/gate primitive: the only place a run ever suspends.
//!
//! Every inter-step delay doubles as a checkpoint: after the minimum delay,
//! the gate holds until the session is running and the target window has
//! focus again, and bails out as soon as the session is terminating.

use crate::{
    CoreError, CoreResult, SessionCell, SessionState, StatusLine, StatusSink, WindowLocator,
};

use std::{
    panic::Location,
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Gates each automation step on pause and focus state.
pub struct Gate {
    session: Arc<SessionCell>,
    locator: Arc<WindowLocator>,
    status: Arc<dyn StatusSink>,
    poll_interval: Duration,
}

impl Gate {
    /// Create a gate polling every `poll_interval`.
    pub fn new(
        session: Arc<SessionCell>,
        locator: Arc<WindowLocator>,
        status: Arc<dyn StatusSink>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            session,
            locator,
            status,
            poll_interval,
        }
    }

    /// Sleep at least `min_delay`, then hold until running and focused.
    ///
    /// Waits indefinitely for the user to resume or refocus. Returns
    /// [`CoreError::Aborted`] as soon as the session is terminating, including
    /// during the initial delay.
    #[track_caller]
    #[instrument(skip(self), level = "trace")]
    pub fn wait(&self, min_delay: Duration) -> CoreResult<()> {
        let location = Location::caller();

        self.sleep_cancellable(min_delay, location)?;

        let mut notified = false;
        loop {
            match self.session.state() {
                SessionState::Terminating => return Err(aborted(location)),
                SessionState::Running if self.locator.is_target_active() => return Ok(()),
                SessionState::Running if !notified => {
                    notified = true;
                    debug!("Target lost focus, suspending");
                    self.status.emit(StatusLine::Notice(format!(
                        "{} not in focus, program suspended...",
                        self.locator.target().display_name()
                    )));
                }
                _ => {}
            }
            thread::sleep(self.poll_interval);
        }
    }

    fn sleep_cancellable(
        &self,
        duration: Duration,
        location: &'static Location<'static>,
    ) -> CoreResult<()> {
        let deadline = Instant::now() + duration;
        loop {
            if self.session.is_terminating() {
                return Err(aborted(location));
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(());
            }
            thread::sleep(remaining.min(self.poll_interval));
        }
    }
}

fn aborted(location: &'static Location<'static>) -> CoreError {
    CoreError::Aborted {
        location: ErrorLocation::from(location),
    }
}
