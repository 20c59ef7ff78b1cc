use crate::CoreResult;

use std::time::Duration;

/// Keys the action sequence needs besides plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Dismiss whatever popup or search UI is open.
    Escape,
    /// Submit the current input.
    Enter,
    /// Platform control modifier.
    Control,
    /// A printable character key.
    Char(char),
}

/// Simulated keyboard. Every call is fire-and-forget.
pub trait Keystrokes {
    /// Press and release a single key.
    fn tap(&mut self, key: InputKey) -> CoreResult<()>;

    /// Hold `modifier`, tap `key`, release `modifier`.
    fn chord(&mut self, modifier: InputKey, key: InputKey) -> CoreResult<()>;

    /// Type `text`, pausing `interval` between characters.
    fn type_text(&mut self, text: &str, interval: Duration) -> CoreResult<()>;
}

/// Whether `pointer` sits exactly on one of the four corner pixels of a
/// `display` sized screen.
///
/// Parking the pointer in a corner is the user's manual emergency stop.
/// Coordinates off the main display (other monitors) never trip it.
pub fn pointer_in_failsafe_corner(pointer: (i32, i32), display: (i32, i32)) -> bool {
    let (width, height) = display;
    let (right, bottom) = (width - 1, height - 1);
    [(0, 0), (right, 0), (0, bottom), (right, bottom)].contains(&pointer)
}
