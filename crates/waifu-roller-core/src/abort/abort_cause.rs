use std::fmt;

/// What ended the run early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortCause {
    /// The process received an interrupt signal (Ctrl+C).
    Interrupt,
    /// The user pressed the dedicated abort hotkey.
    Hotkey,
    /// The pointer was moved into a screen corner while input was being sent.
    FailSafe,
}

impl fmt::Display for AbortCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortCause::Interrupt => write!(f, "Run terminated by interrupt signal"),
            AbortCause::Hotkey => write!(f, "Run interrupted with the abort hotkey"),
            AbortCause::FailSafe => write!(
                f,
                "Fail-safe triggered from the mouse moving to a corner of the screen"
            ),
        }
    }
}
