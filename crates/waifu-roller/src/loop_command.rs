/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread runs the `tao` event loop that pumps hotkey messages, so
/// process exit has to be requested through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    /// The run is over. The main thread exits the event loop with this code.
    Exit(i32),
}
