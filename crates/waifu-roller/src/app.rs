use crate::{AppError, AppResult};

use std::{panic::Location, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use tokio::{sync::watch, task::JoinError};
use tracing::{error, info, info_span, instrument, warn};
use uuid::Uuid;
use waifu_roller_core::{
    AbortCause, AbortController, ActionEngine, ActionRequest, CoreResult, Keystrokes, RunReport,
    StatusSink, Timings, WindowLocator,
};

/// Exit code for a run that completed.
pub const EXIT_OK: i32 = 0;
/// Exit code for any other failure.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for a run stopped by an abort trigger.
pub const EXIT_ABORTED: i32 = 130;

/// How long an aborted engine gets to unwind through its gate.
const ABORT_GRACE: Duration = Duration::from_secs(1);

/// Builds the keyboard on the engine's thread.
pub(crate) type KeyboardFactory = Box<dyn FnOnce() -> CoreResult<Box<dyn Keystrokes>> + Send>;

/// Blocks until a freshly launched target is ready.
pub(crate) type ReadyPrompt = Box<dyn FnMut() -> CoreResult<()> + Send>;

/// One run of the action sequence, supervised on the async runtime.
///
/// The engine itself is synchronous and runs on a blocking task. This loop
/// only watches for it to finish, for Ctrl+C, and for abort triggers.
pub struct App {
    pub(crate) request: ActionRequest,
    pub(crate) locator: Arc<WindowLocator>,
    pub(crate) abort: Arc<AbortController>,
    pub(crate) status: Arc<dyn StatusSink>,
    pub(crate) timings: Timings,
    pub(crate) keyboard: KeyboardFactory,
    pub(crate) ready_prompt: ReadyPrompt,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

enum Outcome {
    Finished(Result<CoreResult<RunReport>, JoinError>),
    Aborted,
}

impl App {
    /// Run to completion and return the process exit code.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> i32 {
        let run_id = Uuid::new_v4();
        info!(run_id = %run_id, "Waifu-Roller starting");

        let App {
            request,
            locator,
            abort,
            status,
            timings,
            keyboard,
            ready_prompt,
            shutdown_tx,
        } = self;

        let mut abort_rx = abort.subscribe();
        let span = info_span!("engine", run_id = %run_id);
        let engine_abort = Arc::clone(&abort);
        let mut engine_task = tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            let keys = keyboard()?;
            ActionEngine::new(locator, engine_abort, keys, status, timings)
                .with_ready_prompt(ready_prompt)
                .run(&request)
        });
        let mut interrupt_armed = true;

        let outcome = loop {
            tokio::select! {
                joined = &mut engine_task => break Outcome::Finished(joined),

                signal = tokio::signal::ctrl_c(), if interrupt_armed => match signal {
                    Ok(()) => {
                        abort.trigger(AbortCause::Interrupt);
                    }
                    Err(e) => {
                        warn!(error = ?e, "Could not listen for Ctrl+C");
                        interrupt_armed = false;
                    }
                },

                _ = abort_rx.changed() => {
                    if abort.cause().is_some() {
                        break Outcome::Aborted;
                    }
                }
            }
        };

        let code = match outcome {
            Outcome::Finished(joined) => exit_code(run_id, flatten(joined)),
            Outcome::Aborted => {
                match tokio::time::timeout(ABORT_GRACE, engine_task).await {
                    Ok(_) => info!(run_id = %run_id, "Engine unwound after abort"),
                    Err(_) => warn!(
                        run_id = %run_id,
                        "Engine did not stop within grace period, exiting anyway"
                    ),
                }
                EXIT_ABORTED
            }
        };

        let _ = shutdown_tx.send(true);
        info!(run_id = %run_id, exit_code = code, "Waifu-Roller shut down");

        code
    }
}

/// Map the engine's result to an exit code, reporting it to the user.
pub(crate) fn exit_code(run_id: Uuid, result: AppResult<RunReport>) -> i32 {
    match result {
        Ok(report) => {
            info!(run_id = %run_id, ?report, "Run finished successfully");
            println!("Run finished successfully");
            EXIT_OK
        }
        Err(e) if e.is_abort() => EXIT_ABORTED,
        Err(e) => {
            error!(run_id = %run_id, error = ?e, "Run failed");
            eprintln!("{e}");
            EXIT_FAILURE
        }
    }
}

#[track_caller]
fn flatten(joined: Result<CoreResult<RunReport>, JoinError>) -> AppResult<RunReport> {
    match joined {
        Ok(result) => Ok(result?),
        Err(e) => Err(AppError::EngineTaskFailed {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
