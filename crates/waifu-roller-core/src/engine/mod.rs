mod action_engine;
mod action_request;
mod keystrokes;
mod timings;

pub use {
    action_engine::{ActionEngine, COMMAND_PREFIX, EXTRA_COMMANDS},
    action_request::{ActionRequest, RunReport},
    keystrokes::{InputKey, Keystrokes, pointer_in_failsafe_corner},
    timings::Timings,
};
