//! Command line interface.
//!
//! Intended syntax: `waifu-roller wa -c digimon-waifus -n 16`. Every
//! argument except `--daily` falls back to the config file's `[defaults]`.

use crate::{
    AppError, AppResult,
    config::{Config, validate_command, validate_destination},
};

use std::panic::Location;

use clap::Parser;
use error_location::ErrorLocation;
use waifu_roller_core::ActionRequest;

/// Roll waifus on Discord.
#[derive(Debug, Parser)]
#[command(name = "waifu-roller", version, about)]
pub struct Cli {
    /// Name of the command to send, without `$` or `/` prefix.
    pub command: Option<String>,

    /// Channel to search for with the quick switcher.
    #[arg(short = 'c', long = "channel")]
    pub channel: Option<String>,

    /// Number of times to send the command.
    #[arg(short = 'n', long = "num")]
    pub num: Option<u32>,

    /// Also run the daily commands after rolling.
    #[arg(short = 'd', long = "daily")]
    pub daily: bool,

    /// Print the path of the configuration file and exit.
    #[arg(long = "config")]
    pub config: bool,
}

impl Cli {
    /// Merge arguments with config defaults into a validated request.
    #[track_caller]
    pub fn into_request(self, config: &Config) -> AppResult<ActionRequest> {
        let invalid = |reason: String| AppError::InvalidArguments {
            reason,
            location: ErrorLocation::from(Location::caller()),
        };
        let missing = |name: &str, key: &str| {
            invalid(format!(
                "the {name} argument is required when [defaults] {key} is not set"
            ))
        };

        let command = self
            .command
            .or_else(|| config.defaults.command.clone())
            .ok_or_else(|| missing("COMMAND", "command"))?;
        validate_command(&command).map_err(invalid)?;

        let destination = self
            .channel
            .or_else(|| config.defaults.destination.clone())
            .ok_or_else(|| missing("--channel", "destination"))?;
        validate_destination(&destination).map_err(invalid)?;

        let repeat_count = self
            .num
            .or(config.defaults.repeat_count)
            .ok_or_else(|| missing("--num", "repeat_count"))?;

        Ok(ActionRequest {
            command,
            destination,
            repeat_count,
            run_extras: self.daily,
            report_progress: config.behaviour.verbose,
            revert_window: config.behaviour.revert_window,
        })
    }
}
