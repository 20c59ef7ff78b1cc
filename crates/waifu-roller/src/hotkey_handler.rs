//! Global pause and abort hotkeys.
//!
//! Registration happens on the main thread, which pumps the messages the
//! hotkeys are delivered through. The handler itself lives on the async
//! runtime and turns presses into pause toggles and abort triggers.

use crate::{AppError, AppResult, config::HotkeyConfig};

use std::{panic::Location, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};
use waifu_roller_core::{AbortCause, AbortController, PauseController};

/// Ids of the registered hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyIds {
    /// Toggles pause/resume.
    pub pause: u32,
    /// Aborts the run.
    pub abort: u32,
}

/// What a hotkey press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Flip between running and paused.
    TogglePause,
    /// Stop the run.
    Abort,
}

/// Register the configured pause and abort hotkeys.
///
/// Must be called on a thread with a message pump (the main thread running
/// the `tao` event loop) so that `WM_HOTKEY` messages are dispatched on
/// Windows. The returned [`GlobalHotKeyManager`] must be kept alive on that
/// thread for the hotkeys to remain registered.
#[track_caller]
#[instrument(skip(config))]
pub fn register_hotkeys(config: &HotkeyConfig) -> AppResult<(GlobalHotKeyManager, HotkeyIds)> {
    let pause = config.pause_hotkey()?;
    let abort = config.abort_hotkey()?;

    if pause == abort {
        return Err(AppError::HotkeyRegistrationFailed {
            reason: format!("pause and abort are both bound to {:?}", config.pause),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let manager = GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
        reason: format!("Failed to create manager: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    for (name, hotkey) in [(&config.pause, pause), (&config.abort, abort)] {
        manager
            .register(hotkey)
            .map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to register {}: {}", name, e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    info!(pause = %config.pause, abort = %config.abort, "Global hotkeys registered");

    Ok((
        manager,
        HotkeyIds {
            pause: pause.id(),
            abort: abort.id(),
        },
    ))
}

/// Routes hotkey presses to the pause and abort controllers.
pub struct HotkeyHandler {
    ids: HotkeyIds,
    pause: Arc<PauseController>,
    abort: Arc<AbortController>,
}

impl HotkeyHandler {
    /// Create a handler for previously registered hotkeys.
    ///
    /// This struct is `Send` and can live on any thread; it only listens on
    /// the global [`GlobalHotKeyEvent`] channel.
    pub fn new(ids: HotkeyIds, pause: Arc<PauseController>, abort: Arc<AbortController>) -> Self {
        Self { ids, pause, abort }
    }

    /// Run the hotkey handler event loop until shutdown is signalled.
    #[instrument(skip(self, shutdown_rx))]
    pub async fn run(&self, shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let receiver = GlobalHotKeyEvent::receiver().clone();
        let (event_tx, event_rx) = mpsc::channel(32);

        // Forwards the blocking crossbeam receiver onto the async channel.
        // Stops on the next send once event_rx is dropped.
        let handle = tokio::task::spawn_blocking(move || {
            while let Ok(event) = receiver.recv() {
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        self.process(event_rx, shutdown_rx).await;

        // The forwarder may be stuck in recv() until another hotkey event
        // arrives; the runtime cleans it up on exit.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Hotkey event forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Hotkey event forwarder task panicked"),
            Err(_) => debug!(
                "Hotkey event forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    /// Handle events from `event_rx` until shutdown or the channel closes.
    pub(crate) async fn process(
        &self,
        mut event_rx: mpsc::Receiver<GlobalHotKeyEvent>,
        mut shutdown_rx: watch::Receiver<bool>,
    ) {
        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Hotkey handler shutting down");
                    break;
                }
                event = event_rx.recv() => {
                    let Some(event) = event else {
                        debug!("Hotkey event channel closed");
                        break;
                    };
                    if let Some(action) = self.classify(&event) {
                        self.dispatch(action).await;
                    }
                }
            }
        }
    }

    /// Map a raw event to an action. Releases and unknown ids are ignored.
    pub(crate) fn classify(&self, event: &GlobalHotKeyEvent) -> Option<HotkeyAction> {
        if event.state != HotKeyState::Pressed {
            return None;
        }

        if event.id == self.ids.pause {
            Some(HotkeyAction::TogglePause)
        } else if event.id == self.ids.abort {
            Some(HotkeyAction::Abort)
        } else {
            None
        }
    }

    #[instrument(skip(self))]
    pub(crate) async fn dispatch(&self, action: HotkeyAction) {
        match action {
            HotkeyAction::Abort => {
                self.abort.trigger(AbortCause::Hotkey);
            }
            HotkeyAction::TogglePause => {
                // Resuming may refocus the target and sleep, so keep it off the
                // async workers.
                let pause = Arc::clone(&self.pause);
                match tokio::task::spawn_blocking(move || pause.toggle()).await {
                    Ok(Ok(state)) => debug!(?state, "Pause toggled"),
                    Ok(Err(e)) => debug!(error = ?e, "Pause ignored, run is terminating"),
                    Err(e) => warn!(error = ?e, "Pause toggle task panicked"),
                }
            }
        }
    }
}
