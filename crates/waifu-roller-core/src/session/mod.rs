mod pause_controller;
mod session_state;

pub use {
    pause_controller::PauseController,
    session_state::{SessionCell, SessionState},
};
