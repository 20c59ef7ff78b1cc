//! Waifu-Roller Core Library
//!
//! Drives a desktop chat client by simulated keyboard input: focus (or
//! launch) the client, jump to a channel through its quick switcher, and
//! send a command a fixed number of times. The user can pause, resume or
//! abort at any point, and every step waits for the client to hold focus.
//!
//! Platform access goes through the [`WindowSystem`], [`Launcher`],
//! [`Keystrokes`] and [`StatusSink`] traits.
//!
//! # Example
//!
//! ```no_run
//! use waifu_roller_core::{
//!     AbortController, ActionEngine, ActionRequest, CoreResult, Keystrokes, Launcher,
//!     SessionCell, StatusSink, TargetApp, Timings, WindowLocator, WindowSystem,
//! };
//!
//! use std::sync::Arc;
//!
//! fn roll(
//!     windows: Arc<dyn WindowSystem>,
//!     launcher: Arc<dyn Launcher>,
//!     keys: Box<dyn Keystrokes>,
//!     status: Arc<dyn StatusSink>,
//! ) -> CoreResult<()> {
//!     let timings = Timings::default();
//!     let session = Arc::new(SessionCell::new());
//!     let abort = Arc::new(AbortController::new(session, Arc::clone(&status)));
//!     let target = TargetApp::discord("C:/Users/me/AppData/Local/Discord");
//!     let locator = Arc::new(WindowLocator::new(target, windows, launcher, timings.launch_settle));
//!
//!     let mut engine = ActionEngine::new(locator, abort, keys, status, timings);
//!     let report = engine.run(&ActionRequest {
//!         command: "wa".to_string(),
//!         destination: "waifu-spam".to_string(),
//!         repeat_count: 3,
//!         run_extras: false,
//!         report_progress: true,
//!         revert_window: false,
//!     })?;
//!
//!     println!("Sent {} commands", report.commands_sent);
//!     Ok(())
//! }
//! ```

mod abort;
mod engine;
mod error;
mod gate;
mod session;
mod status;
mod window;

pub use {
    abort::{AbortCause, AbortController},
    engine::{
        ActionEngine, ActionRequest, COMMAND_PREFIX, EXTRA_COMMANDS, InputKey, Keystrokes,
        RunReport, Timings, pointer_in_failsafe_corner,
    },
    error::{CoreError, Result as CoreResult},
    gate::Gate,
    session::{PauseController, SessionCell, SessionState},
    status::{StatusLine, StatusSink},
    window::{Launcher, TargetApp, TitleRule, WindowHandle, WindowLocator, WindowSystem},
};

#[cfg(test)]
mod tests;
