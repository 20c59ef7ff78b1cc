mod abort_cause;
mod abort_controller;

pub use {abort_cause::AbortCause, abort_controller::AbortController};
