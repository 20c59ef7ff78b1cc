use std::time::Duration;

/// Delays used between automation steps.
///
/// The defaults keep the input cadence slow enough for the target UI to keep
/// up and to look like a person typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Between navigation sub-steps.
    pub action_cooldown: Duration,
    /// Between characters while typing the destination query.
    pub typing_cooldown: Duration,
    /// Between command transmissions.
    pub rolling_cooldown: Duration,
    /// Before refocusing the caller window. Abort during it keeps focus on the target.
    pub revert_delay: Duration,
    /// After spawning the target executable.
    pub launch_settle: Duration,
    /// After refocusing the target on resume.
    pub resume_settle: Duration,
    /// Gate poll tick.
    pub poll_interval: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            action_cooldown: Duration::from_millis(100),
            typing_cooldown: Duration::from_millis(50),
            rolling_cooldown: Duration::from_secs(1),
            revert_delay: Duration::from_secs(3),
            launch_settle: Duration::from_secs(5),
            resume_settle: Duration::from_millis(100),
            poll_interval: Duration::from_millis(25),
        }
    }
}
