//! Single termination path for every abort trigger.
//!
//! Interrupt signals, the abort hotkey and fail-safe trips all call
//! [`AbortController::trigger`]. The first trigger wins: it flips the shared
//! session into its terminal state (which every in-flight wait observes),
//! prints the cause, and notifies the top level through a watch channel.

use crate::{AbortCause, SessionCell, StatusLine, StatusSink};

use std::sync::{Arc, OnceLock};

use tokio::sync::watch;
use tracing::{debug, instrument, warn};

/// Armed until the first abort trigger, then terminal.
pub struct AbortController {
    session: Arc<SessionCell>,
    status: Arc<dyn StatusSink>,
    cause: OnceLock<AbortCause>,
    notify_tx: watch::Sender<Option<AbortCause>>,
}

impl AbortController {
    /// Create an armed controller for `session`.
    pub fn new(session: Arc<SessionCell>, status: Arc<dyn StatusSink>) -> Self {
        let (notify_tx, _) = watch::channel(None);
        Self {
            session,
            status,
            cause: OnceLock::new(),
            notify_tx,
        }
    }

    /// Terminate the session for `cause`.
    ///
    /// Returns `true` if this call fired the abort, `false` if an earlier
    /// trigger already did. Later triggers are ignored.
    #[instrument(skip(self))]
    pub fn trigger(&self, cause: AbortCause) -> bool {
        if self.cause.set(cause).is_err() {
            debug!(?cause, "Abort already triggered, ignoring");
            return false;
        }

        self.session.terminate();
        self.status.emit(StatusLine::Aborted(cause));
        warn!(%cause, "Abort triggered");

        self.notify_tx.send_replace(Some(cause));

        true
    }

    /// Whether no trigger has fired yet.
    pub fn is_armed(&self) -> bool {
        self.cause.get().is_none()
    }

    /// The cause of the abort, once triggered.
    pub fn cause(&self) -> Option<AbortCause> {
        self.cause.get().copied()
    }

    /// Watch for the abort. The value turns `Some` exactly once.
    pub fn subscribe(&self) -> watch::Receiver<Option<AbortCause>> {
        self.notify_tx.subscribe()
    }

    /// The session this controller terminates.
    pub fn session(&self) -> &Arc<SessionCell> {
        &self.session
    }
}
