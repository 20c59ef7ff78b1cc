//! User-facing console output.
//!
//! Status lines go to stdout, separate from the tracing logs on stderr.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use waifu_roller_core::{AbortCause, StatusLine, StatusSink};

/// Prints status lines, hiding milestones unless verbose.
pub struct ConsoleReporter<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    verbose: bool,
}

impl ConsoleReporter {
    /// Reporter writing to stdout.
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Reporter writing to `out`.
    pub fn new(out: W, verbose: bool) -> Self {
        Self {
            out: Mutex::new(out),
            verbose,
        }
    }

    /// Consume the reporter and return its writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    /// Render `line`, or `None` if it should not be shown.
    pub(crate) fn render(&self, line: &StatusLine) -> Option<String> {
        match line {
            StatusLine::Milestone(text) => self.verbose.then(|| text.clone()),
            StatusLine::Progress { current, total } => {
                Some(format!("Attempted to roll ({current}/{total})"))
            }
            StatusLine::Notice(text) => Some(text.clone()),
            StatusLine::Aborted(cause) => Some(abort_message(*cause)),
        }
    }
}

impl<W: Write + Send> StatusSink for ConsoleReporter<W> {
    fn emit(&self, line: StatusLine) {
        let Some(text) = self.render(&line) else {
            return;
        };
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }
}

fn abort_message(cause: AbortCause) -> String {
    match cause {
        AbortCause::FailSafe => format!(
            "{cause}.\nTIP: To disable this fail-safe, set keep_failsafe to false \
             in your configuration file."
        ),
        _ => cause.to_string(),
    }
}
