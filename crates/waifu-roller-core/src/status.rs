use crate::AbortCause;

/// A user-facing console line produced by the automation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Step-by-step progress detail, shown only in verbose mode.
    Milestone(String),
    /// One command transmission out of the requested total.
    Progress {
        /// 1-based index of the transmission just sent.
        current: u32,
        /// Requested repeat count.
        total: u32,
    },
    /// Something the user should always see (pause, focus lost, window gone).
    Notice(String),
    /// The run is terminating for the given reason.
    Aborted(AbortCause),
}

/// Receives console lines. Implementations decide how (and whether) to show them.
pub trait StatusSink: Send + Sync {
    /// Emit a single line.
    fn emit(&self, line: StatusLine);
}
