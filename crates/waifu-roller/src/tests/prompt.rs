use crate::{config::HotkeyConfig, prompt::run_summary, tests::support::request};

/// WHAT: The summary names the hotkeys and the full command
/// WHY: The user confirms exactly what will be sent before input starts
#[test]
fn given_request_when_summarised_then_shows_keys_command_and_count() {
    // Given: A request for 3 rolls without extras
    let request = request(3);

    // When: Rendering the summary with default hotkeys
    let summary = run_summary(&request, &HotkeyConfig::default());

    // Then: Keys, prefixed command, count, channel and the extras choice
    assert!(summary.contains("TAB"));
    assert!(summary.contains("CAPSLOCK"));
    assert!(summary.contains("'$wa' 3 times"));
    assert!(summary.contains("\"rolls\""));
    assert!(summary.contains("NOT run the daily"));
}

/// WHAT: Requests with extras drop the NOT
/// WHY: The summary must match what the run will do
#[test]
fn given_request_with_extras_when_summarised_then_daily_opted_in() {
    // Given: Extras requested
    let mut request = request(1);
    request.run_extras = true;

    // When: Rendering
    let summary = run_summary(&request, &HotkeyConfig::default());

    // Then: Opted in
    assert!(summary.contains("opted to run the daily"));
}
