//! The ordered action sequence of one run.
//!
//! capture caller window -> open or focus target -> navigate -> repeat the
//! command -> optional extras -> optional revert. Steps run strictly in
//! order on the calling thread and are separated by [`Gate::wait`].

use crate::{
    AbortCause, AbortController, ActionRequest, CoreError, CoreResult, Gate, InputKey, Keystrokes,
    RunReport, StatusLine, StatusSink, Timings, WindowHandle, WindowLocator,
};

use std::{panic::Location, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Prefix the target's bot expects in front of every command.
pub const COMMAND_PREFIX: char = '$';

/// One-shot commands sent after the repeats when extras are requested.
pub const EXTRA_COMMANDS: [&str; 2] = ["daily", "dk"];

type ReadyPrompt = Box<dyn FnMut() -> CoreResult<()>>;

/// Drives the target application through one [`ActionRequest`].
pub struct ActionEngine {
    locator: Arc<WindowLocator>,
    gate: Gate,
    keys: Box<dyn Keystrokes>,
    abort: Arc<AbortController>,
    status: Arc<dyn StatusSink>,
    timings: Timings,
    ready_prompt: Option<ReadyPrompt>,
}

impl ActionEngine {
    /// Create an engine sending input through `keys`.
    pub fn new(
        locator: Arc<WindowLocator>,
        abort: Arc<AbortController>,
        keys: Box<dyn Keystrokes>,
        status: Arc<dyn StatusSink>,
        timings: Timings,
    ) -> Self {
        let gate = Gate::new(
            Arc::clone(abort.session()),
            Arc::clone(&locator),
            Arc::clone(&status),
            timings.poll_interval,
        );

        Self {
            locator,
            gate,
            keys,
            abort,
            status,
            timings,
            ready_prompt: None,
        }
    }

    /// Called after the target had to be launched, before any input is sent.
    ///
    /// Typically blocks until the user confirms the application has loaded.
    pub fn with_ready_prompt(mut self, prompt: impl FnMut() -> CoreResult<()> + 'static) -> Self {
        self.ready_prompt = Some(Box::new(prompt));
        self
    }

    /// Execute `request` from start to finish.
    ///
    /// Any failure other than the target not being open stops the whole run;
    /// a half-finished UI interaction is not resumed.
    #[track_caller]
    #[instrument(skip(self, request), fields(command = %request.command, repeat_count = request.repeat_count))]
    pub fn run(&mut self, request: &ActionRequest) -> CoreResult<RunReport> {
        if self.abort.session().is_terminating() {
            return Err(CoreError::Aborted {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut report = RunReport::default();

        let caller = self.locator.windows().active_window();
        debug!(caller = ?caller.as_ref().map(WindowHandle::title), "Captured caller window");

        report.launched = self.open_target()?;

        self.navigate(request)?;
        report.commands_sent = self.repeat_command(request)?;

        if request.run_extras {
            self.send_extras()?;
            report.extras_sent = true;
        }

        if request.revert_window {
            if let Some(caller) = caller {
                report.reverted = self.revert(&caller)?;
            }
        }

        info!(?report, "Run complete");

        Ok(report)
    }

    fn open_target(&mut self) -> CoreResult<bool> {
        let launched = self.locator.open_or_focus()?;
        self.milestone(format!(
            "Moved to the {} desktop application",
            self.locator.target().display_name()
        ));

        if launched {
            if let Some(prompt) = self.ready_prompt.as_mut() {
                prompt()?;
            }
            // The freshly started window has to be found and foregrounded
            // before the first keystroke. Never launches a second time.
            let window = self.locator.locate()?;
            self.locator.focus(&window)?;
        }

        Ok(launched)
    }

    #[instrument(skip(self, request))]
    fn navigate(&mut self, request: &ActionRequest) -> CoreResult<()> {
        let query = request.destination_query();
        self.milestone(format!(
            "Navigating by searching for channel with query {query:?}..."
        ));

        // Clear any stray search UI.
        self.input(|keys| keys.tap(InputKey::Escape))?;
        self.gate.wait(self.timings.action_cooldown)?;

        // Quick switcher.
        self.input(|keys| keys.chord(InputKey::Control, InputKey::Char('k')))?;
        self.gate.wait(self.timings.action_cooldown)?;

        let typing_cooldown = self.timings.typing_cooldown;
        self.input(|keys| {
            keys.type_text(&query, typing_cooldown)?;
            keys.tap(InputKey::Enter)
        })?;
        self.gate.wait(self.timings.action_cooldown)?;

        // Lands focus on the message input.
        self.input(|keys| keys.tap(InputKey::Escape))?;
        self.gate.wait(self.timings.action_cooldown)?;

        self.milestone("Finished navigating, focused text area, and ready to roll".to_string());

        Ok(())
    }

    #[instrument(skip(self, request))]
    fn repeat_command(&mut self, request: &ActionRequest) -> CoreResult<u32> {
        let line = format!("{COMMAND_PREFIX}{}", request.command);
        let total = request.repeat_count;

        self.milestone(format!("Starting to roll with command {line:?}..."));

        for current in 1..=total {
            self.send_line(&line)?;
            if request.report_progress {
                self.status.emit(StatusLine::Progress { current, total });
            }
            debug!(current, total, "Command sent");
            self.gate.wait(self.timings.rolling_cooldown)?;
        }

        self.milestone("Finished rolling.".to_string());

        Ok(total)
    }

    fn send_extras(&mut self) -> CoreResult<()> {
        for (i, extra) in EXTRA_COMMANDS.iter().enumerate() {
            if i > 0 {
                self.gate.wait(self.timings.rolling_cooldown)?;
            }
            self.send_line(&format!("{COMMAND_PREFIX}{extra}"))?;
        }

        self.milestone("Finished running daily commands.".to_string());

        Ok(())
    }

    #[instrument(skip(self, caller), fields(title = caller.title()))]
    fn revert(&mut self, caller: &WindowHandle) -> CoreResult<bool> {
        self.milestone(format!(
            "Waiting {:?} before restoring your window '{}'. \
             Abort now to stay in {}.",
            self.timings.revert_delay,
            caller.title(),
            self.locator.target().display_name()
        ));

        self.gate.wait(self.timings.revert_delay)?;

        match self.locator.windows().activate(caller) {
            Ok(()) => {
                self.milestone(format!("Returned focus to window '{}'", caller.title()));
                Ok(true)
            }
            Err(e) => {
                warn!(error = ?e, "Caller window could not be restored");
                self.status.emit(StatusLine::Notice(format!(
                    "Could not return to window '{}', it may have been closed.",
                    caller.title()
                )));
                Ok(false)
            }
        }
    }

    fn send_line(&mut self, line: &str) -> CoreResult<()> {
        self.input(|keys| {
            keys.type_text(line, Duration::ZERO)?;
            keys.tap(InputKey::Enter)
        })
    }

    /// Run a keystroke burst, routing a fail-safe trip into the abort path.
    #[track_caller]
    fn input<F>(&mut self, burst: F) -> CoreResult<()>
    where
        F: FnOnce(&mut dyn Keystrokes) -> CoreResult<()>,
    {
        match burst(self.keys.as_mut()) {
            Err(CoreError::FailSafeTriggered { .. }) => {
                self.abort.trigger(AbortCause::FailSafe);
                Err(CoreError::Aborted {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            other => other,
        }
    }

    fn milestone(&self, message: String) {
        self.status.emit(StatusLine::Milestone(message));
    }
}
