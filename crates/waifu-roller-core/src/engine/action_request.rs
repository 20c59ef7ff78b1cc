/// One automation run, validated by the caller before execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// Command name without its prefix, e.g. `"wa"`.
    pub command: String,
    /// Query typed into the quick switcher to reach the destination channel.
    pub destination: String,
    /// How many times to send the command. Zero is valid.
    pub repeat_count: u32,
    /// Also send the one-shot extra commands after the repeats.
    pub run_extras: bool,
    /// Emit an `i/repeat_count` line after each transmission.
    pub report_progress: bool,
    /// Refocus the window that was active at start once the run is done.
    pub revert_window: bool,
}

impl ActionRequest {
    /// The quick-switcher query: the destination with exactly one leading `#`.
    pub fn destination_query(&self) -> String {
        let bare = self
            .destination
            .strip_prefix('#')
            .unwrap_or(&self.destination);
        format!("#{bare}")
    }
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// The target had to be launched first.
    pub launched: bool,
    /// Number of command transmissions sent.
    pub commands_sent: u32,
    /// The extra commands were sent.
    pub extras_sent: bool,
    /// Focus was returned to the caller window.
    pub reverted: bool,
}
