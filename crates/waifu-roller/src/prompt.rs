//! Blocking console prompts shown before input starts.

use crate::{AppResult, config::HotkeyConfig};

use std::io::{self, BufRead, Write};

use tracing::instrument;
use waifu_roller_core::{ActionRequest, COMMAND_PREFIX, CoreError, CoreResult};

/// Show the hotkey tips and the chosen run, then block until ENTER.
#[instrument(skip_all)]
pub fn confirm_run(request: &ActionRequest, hotkeys: &HotkeyConfig) -> AppResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", run_summary(request, hotkeys))?;
    writeln!(stdout, "Hit ENTER to continue, or Ctrl+C to quit: ")?;
    stdout.flush()?;

    read_line(&mut io::stdin().lock())?;

    Ok(())
}

/// Ask the user to confirm a freshly launched client has finished loading.
#[track_caller]
pub fn wait_for_ready() -> CoreResult<()> {
    println!("Hit ENTER here once the application has finished loading to start sending input");

    read_line(&mut io::stdin().lock()).map_err(|e| CoreError::InputFailed {
        reason: format!("Failed to read confirmation: {e}"),
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
    })
}

pub(crate) fn run_summary(request: &ActionRequest, hotkeys: &HotkeyConfig) -> String {
    format!(
        "TIP: You can abort the run at any time with the {abort} key\n\
         TIP: You can pause and resume rolling with the {pause} key\n\
         You have chosen to roll with the command '{COMMAND_PREFIX}{command}' {count} times \
         in the channel queried with {destination:?}, and have opted to {daily}run the daily \
         commands as well.\n",
        abort = hotkeys.abort.to_uppercase(),
        pause = hotkeys.pause.to_uppercase(),
        command = request.command,
        count = request.repeat_count,
        destination = request.destination,
        daily = if request.run_extras { "" } else { "NOT " },
    )
}

fn read_line(input: &mut impl BufRead) -> io::Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
