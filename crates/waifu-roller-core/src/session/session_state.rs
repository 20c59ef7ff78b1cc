use std::sync::atomic::{AtomicU8, Ordering};

/// Observable state of an automation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Steps may proceed once the target window is focused.
    Running,
    /// Held by the user; every wait blocks until resumed.
    Paused,
    /// An abort trigger fired. Terminal.
    Terminating,
}

impl SessionState {
    const fn to_raw(self) -> u8 {
        match self {
            SessionState::Running => 0,
            SessionState::Paused => 1,
            SessionState::Terminating => 2,
        }
    }

    const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => SessionState::Running,
            1 => SessionState::Paused,
            _ => SessionState::Terminating,
        }
    }
}

/// Shared session flag.
///
/// Written by the hotkey listener (toggle) and by abort delivery (terminate),
/// read by the gate on every poll tick. All transitions are single atomic
/// operations, so readers never observe an intermediate state.
#[derive(Debug)]
pub struct SessionCell {
    state: AtomicU8,
}

impl SessionCell {
    /// Create a cell in the [`SessionState::Running`] state.
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(SessionState::Running.to_raw()),
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        SessionState::from_raw(self.state.load(Ordering::SeqCst))
    }

    /// Whether the session has entered its terminal state.
    pub fn is_terminating(&self) -> bool {
        self.state() == SessionState::Terminating
    }

    /// Flip Running and Paused. Returns the new state, or `None` once terminating.
    pub fn toggle(&self) -> Option<SessionState> {
        let mut current = self.state.load(Ordering::SeqCst);
        loop {
            let next = match SessionState::from_raw(current) {
                SessionState::Running => SessionState::Paused,
                SessionState::Paused => SessionState::Running,
                SessionState::Terminating => return None,
            };
            match self.state.compare_exchange(
                current,
                next.to_raw(),
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return Some(next),
                Err(actual) => current = actual,
            }
        }
    }

    /// Force the terminal state. Returns `true` if this call made the transition.
    pub fn terminate(&self) -> bool {
        self.state
            .swap(SessionState::Terminating.to_raw(), Ordering::SeqCst)
            != SessionState::Terminating.to_raw()
    }
}

impl Default for SessionCell {
    fn default() -> Self {
        Self::new()
    }
}
