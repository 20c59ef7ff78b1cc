//! Minimal in-memory desktop for exercising the binary's wiring.

use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use waifu_roller_core::{
    AbortController, ActionRequest, CoreResult, InputKey, Keystrokes, Launcher, SessionCell,
    StatusLine, StatusSink, TargetApp, Timings, WindowHandle, WindowLocator, WindowSystem,
};

const TARGET: isize = 7;

#[derive(Default)]
struct StubState {
    target_open: bool,
    focus_sticks: bool,
    active: Option<isize>,
    keystrokes: usize,
    lines: Vec<StatusLine>,
}

/// Desktop holding at most the target window.
#[derive(Default)]
pub(crate) struct StubDesktop {
    state: Mutex<StubState>,
}

impl StubDesktop {
    /// Target open; activating it gives it focus when `focus_sticks`.
    pub(crate) fn new(focus_sticks: bool) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(StubState {
                target_open: true,
                focus_sticks,
                ..StubState::default()
            }),
        })
    }

    fn state(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn keystrokes(&self) -> usize {
        self.state().keystrokes
    }

    pub(crate) fn lines(&self) -> Vec<StatusLine> {
        self.state().lines.clone()
    }

    pub(crate) fn is_target_focused(&self) -> bool {
        self.state().active == Some(TARGET)
    }
}

impl WindowSystem for StubDesktop {
    fn windows_with_title(&self, marker: &str) -> CoreResult<Vec<WindowHandle>> {
        let state = self.state();
        Ok(if state.target_open && "#rolls - Discord".contains(marker) {
            vec![WindowHandle::new(TARGET, "#rolls - Discord")]
        } else {
            Vec::new()
        })
    }

    fn active_window(&self) -> Option<WindowHandle> {
        (self.state().active == Some(TARGET))
            .then(|| WindowHandle::new(TARGET, "#rolls - Discord"))
    }

    fn minimize(&self, _window: &WindowHandle) -> CoreResult<()> {
        self.state().active = None;
        Ok(())
    }

    fn maximize(&self, _window: &WindowHandle) -> CoreResult<()> {
        Ok(())
    }

    fn activate(&self, window: &WindowHandle) -> CoreResult<()> {
        let mut state = self.state();
        if state.focus_sticks {
            state.active = Some(window.raw());
        }
        Ok(())
    }
}

impl Launcher for StubDesktop {
    fn spawn(&self, _executable: &Path) -> CoreResult<()> {
        Ok(())
    }
}

impl StatusSink for StubDesktop {
    fn emit(&self, line: StatusLine) {
        self.state().lines.push(line);
    }
}

/// Counts keystroke calls on a [`StubDesktop`].
pub(crate) struct CountingKeyboard(pub(crate) Arc<StubDesktop>);

impl Keystrokes for CountingKeyboard {
    fn tap(&mut self, _key: InputKey) -> CoreResult<()> {
        self.0.state().keystrokes += 1;
        Ok(())
    }

    fn chord(&mut self, _modifier: InputKey, _key: InputKey) -> CoreResult<()> {
        self.0.state().keystrokes += 1;
        Ok(())
    }

    fn type_text(&mut self, _text: &str, _interval: Duration) -> CoreResult<()> {
        self.0.state().keystrokes += 1;
        Ok(())
    }
}

pub(crate) fn fast_timings() -> Timings {
    Timings {
        action_cooldown: Duration::ZERO,
        typing_cooldown: Duration::ZERO,
        rolling_cooldown: Duration::ZERO,
        revert_delay: Duration::ZERO,
        launch_settle: Duration::ZERO,
        resume_settle: Duration::ZERO,
        poll_interval: Duration::from_millis(1),
    }
}

pub(crate) fn request(repeat_count: u32) -> ActionRequest {
    ActionRequest {
        command: "wa".to_string(),
        destination: "rolls".to_string(),
        repeat_count,
        run_extras: false,
        report_progress: true,
        revert_window: false,
    }
}

/// Session, abort controller and locator wired to one stub desktop.
pub(crate) struct Wiring {
    pub(crate) desktop: Arc<StubDesktop>,
    pub(crate) session: Arc<SessionCell>,
    pub(crate) abort: Arc<AbortController>,
    pub(crate) locator: Arc<WindowLocator>,
}

impl Wiring {
    pub(crate) fn new(desktop: Arc<StubDesktop>) -> Self {
        let session = Arc::new(SessionCell::new());
        let abort = Arc::new(AbortController::new(
            Arc::clone(&session),
            Arc::clone(&desktop) as Arc<dyn StatusSink>,
        ));
        let locator = Arc::new(WindowLocator::new(
            TargetApp::discord("Discord"),
            Arc::clone(&desktop) as Arc<dyn WindowSystem>,
            Arc::clone(&desktop) as Arc<dyn Launcher>,
            Duration::ZERO,
        ));

        Self {
            desktop,
            session,
            abort,
            locator,
        }
    }

    pub(crate) fn status(&self) -> Arc<dyn StatusSink> {
        Arc::clone(&self.desktop) as Arc<dyn StatusSink>
    }
}
