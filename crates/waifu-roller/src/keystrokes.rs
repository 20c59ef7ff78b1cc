//! Keyboard input through enigo, guarded by the pointer fail-safe.

use crate::ModifierKeyGuard;

use std::{panic::Location, thread, time::Duration};

use enigo::{Direction, Enigo, Key, Keyboard, Mouse, Settings};
use error_location::ErrorLocation;
use tracing::{debug, instrument, warn};
use waifu_roller_core::{CoreError, CoreResult, InputKey, Keystrokes, pointer_in_failsafe_corner};

/// Real keyboard. Not `Send` on every platform, so create it on the thread
/// that sends the input.
pub struct EnigoKeystrokes {
    enigo: Enigo,
    keep_failsafe: bool,
}

impl EnigoKeystrokes {
    /// Connect to the platform input backend.
    #[track_caller]
    #[instrument]
    pub fn new(keep_failsafe: bool) -> CoreResult<Self> {
        let enigo = Enigo::new(&Settings::default()).map_err(|e| CoreError::InputFailed {
            reason: format!("Failed to create Enigo: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(keep_failsafe, "Keyboard backend ready");

        Ok(Self {
            enigo,
            keep_failsafe,
        })
    }

    /// Refuse to send input while the pointer is parked in a screen corner.
    #[track_caller]
    fn check_failsafe(&self) -> CoreResult<()> {
        if !self.keep_failsafe {
            return Ok(());
        }

        let position = self.enigo.location();
        let display = self.enigo.main_display();
        match (position, display) {
            (Ok(pointer), Ok(display)) if pointer_in_failsafe_corner(pointer, display) => {
                Err(CoreError::FailSafeTriggered {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            (Ok(_), Ok(_)) => Ok(()),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = ?e, "Could not read pointer position, fail-safe skipped");
                Ok(())
            }
        }
    }

    #[track_caller]
    fn click(&mut self, key: Key) -> CoreResult<()> {
        self.enigo
            .key(key, Direction::Click)
            .map_err(|e| input_failed(format!("Failed to tap {key:?}: {e}")))
    }
}

impl Keystrokes for EnigoKeystrokes {
    fn tap(&mut self, key: InputKey) -> CoreResult<()> {
        self.check_failsafe()?;
        self.click(enigo_key(key))
    }

    fn chord(&mut self, modifier: InputKey, key: InputKey) -> CoreResult<()> {
        self.check_failsafe()?;

        let mut guard = ModifierKeyGuard::press(&mut self.enigo, enigo_key(modifier))?;
        guard
            .enigo_mut()
            .key(enigo_key(key), Direction::Click)
            .map_err(|e| input_failed(format!("Failed to tap {key:?} in chord: {e}")))
    }

    fn type_text(&mut self, text: &str, interval: Duration) -> CoreResult<()> {
        self.check_failsafe()?;

        if interval.is_zero() {
            return self
                .enigo
                .text(text)
                .map_err(|e| input_failed(format!("Failed to type text: {e}")));
        }

        for (i, c) in text.chars().enumerate() {
            if i > 0 {
                thread::sleep(interval);
                self.check_failsafe()?;
            }
            self.click(Key::Unicode(c))?;
        }

        Ok(())
    }
}

pub(crate) fn enigo_key(key: InputKey) -> Key {
    match key {
        InputKey::Escape => Key::Escape,
        InputKey::Enter => Key::Return,
        InputKey::Control => Key::Control,
        InputKey::Char(c) => Key::Unicode(c),
    }
}

#[track_caller]
fn input_failed(reason: String) -> CoreError {
    CoreError::InputFailed {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
