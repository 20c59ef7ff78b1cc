use waifu_roller_core::{CoreError, CoreResult};

use std::panic::Location;

use enigo::{Direction, Enigo, Key, Keyboard};
use error_location::ErrorLocation;

/// RAII guard that guarantees a held modifier key is released when dropped.
///
/// Prevents a stuck modifier if the key tapped while it is held fails.
/// Release on drop is best-effort; the OS resets modifier state on the next
/// physical key press by the user.
pub struct ModifierKeyGuard<'a> {
    enigo: &'a mut Enigo,
    modifier: Key,
}

impl<'a> ModifierKeyGuard<'a> {
    /// Press `modifier` and return a guard that will release it on drop.
    #[track_caller]
    pub(crate) fn press(enigo: &'a mut Enigo, modifier: Key) -> CoreResult<Self> {
        enigo
            .key(modifier, Direction::Press)
            .map_err(|e| CoreError::InputFailed {
                reason: format!("Failed to press modifier {modifier:?}: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { enigo, modifier })
    }

    /// Access the underlying Enigo for key operations while the modifier is held.
    pub(crate) fn enigo_mut(&mut self) -> &mut Enigo {
        self.enigo
    }
}

impl Drop for ModifierKeyGuard<'_> {
    fn drop(&mut self) {
        let _ = self.enigo.key(self.modifier, Direction::Release);
    }
}
