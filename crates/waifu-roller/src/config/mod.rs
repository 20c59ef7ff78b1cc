mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod defaults_config;
mod hotkey_config;
mod target_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, config::Config, defaults_config::DefaultsConfig,
    hotkey_config::HotkeyConfig, target_config::TargetConfig,
};

pub(crate) const DEFAULT_VERBOSE: bool = true;
pub(crate) const DEFAULT_REVERT_WINDOW: bool = false;
pub(crate) const DEFAULT_KEEP_FAILSAFE: bool = true;
pub(crate) const DEFAULT_SKIP_CONFIRMATION: bool = false;
pub(crate) const DEFAULT_PAUSE_HOTKEY: &str = "CapsLock";
pub(crate) const DEFAULT_ABORT_HOTKEY: &str = "Tab";

pub(crate) fn default_verbose() -> bool {
    DEFAULT_VERBOSE
}

pub(crate) fn default_revert_window() -> bool {
    DEFAULT_REVERT_WINDOW
}

pub(crate) fn default_keep_failsafe() -> bool {
    DEFAULT_KEEP_FAILSAFE
}

pub(crate) fn default_skip_confirmation() -> bool {
    DEFAULT_SKIP_CONFIRMATION
}

pub(crate) fn default_pause_hotkey() -> String {
    DEFAULT_PAUSE_HOTKEY.to_string()
}

pub(crate) fn default_abort_hotkey() -> String {
    DEFAULT_ABORT_HOTKEY.to_string()
}

/// Commands are typed after the bot prefix, so they must not carry one.
pub(crate) fn validate_command(command: &str) -> Result<(), String> {
    if command.is_empty() || command.starts_with(['$', '/']) {
        return Err(format!(
            "{command:?} is not a valid command: it should be non-empty and not \
             command-prefixed (e.g. 'wa')"
        ));
    }
    Ok(())
}

/// Channel names never contain whitespace; a query with spaces would not resolve.
pub(crate) fn validate_destination(destination: &str) -> Result<(), String> {
    if destination.is_empty() || destination.chars().any(char::is_whitespace) {
        return Err(format!(
            "{destination:?} is not a valid channel: it should be non-empty and \
             not contain any whitespace (e.g. waifu-spam)"
        ));
    }
    Ok(())
}
