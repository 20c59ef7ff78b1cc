use crate::{
    CoreError, TargetApp, TitleRule, WindowHandle, WindowLocator,
    tests::fakes::{
        CALLER, DesktopEvent, FakeDesktop, Harness, TARGET, fast_timings,
        install_dir_with_executable,
    },
};

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

/// WHAT: Title rule accepts the bare name and the decorated suffix only
/// WHY: Other windows that merely mention the name must never receive input
#[test]
fn given_target_rule_when_matching_titles_then_only_name_or_suffix_match() {
    // Given: A rule for "Target"
    let rule = TitleRule::new("Target", "Target", "- Target");

    // When/Then: Only exact name or suffix matches
    assert!(rule.matches("Target"));
    assert!(rule.matches("#general - Target"));
    assert!(!rule.matches("Targetron"));
    assert!(!rule.matches("Target - Notepad"));
}

/// WHAT: Discord description uses the client's title conventions
/// WHY: The locator relies on these markers to find the client
#[test]
fn given_discord_target_when_matching_then_channel_titles_accepted() {
    // Given: The Discord target description
    let target = TargetApp::discord("unused");

    // When/Then: Channel windows match, browser tabs do not
    assert!(target.title_rule.matches("Discord"));
    assert!(target.title_rule.matches("#waifu-spam | Server - Discord"));
    assert!(!target.title_rule.matches("Discord - Mozilla Firefox"));
}

/// WHAT: Locate returns the first matching window in enumeration order
/// WHY: Enumeration order is the only tie-breaker between client windows
#[test]
#[allow(clippy::unwrap_used)]
fn given_several_candidates_when_locating_then_first_match_returned() {
    // Given: A non-matching candidate ahead of two matching windows
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_closed();
    desktop.add_window(WindowHandle::new(10, "Discord - Mozilla Firefox"));
    desktop.add_window(WindowHandle::new(11, "#first - Discord"));
    desktop.add_window(WindowHandle::new(12, "#second - Discord"));
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());

    // When: Locating
    let window = harness.locator.locate().unwrap();

    // Then: The first matching window wins
    assert_eq!(window.raw(), 11);
}

/// WHAT: Locate fails with a typed error listing near misses
/// WHY: The launch fallback catches exactly this condition
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_match_when_locating_then_target_not_open_with_candidates() {
    // Given: Only a window that mentions the marker
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_closed();
    desktop.add_window(WindowHandle::new(10, "Discordant notes"));
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());

    // When: Locating
    let result = harness.locator.locate();

    // Then: TargetNotOpen with the candidate title
    assert!(matches!(
        &result,
        Err(CoreError::TargetNotOpen { candidates, .. })
            if candidates.as_slice() == ["Discordant notes".to_string()]
    ));
}

/// WHAT: Focus calls minimize, maximize, activate in order
/// WHY: Activating a never-foregrounded window directly can silently fail
#[test]
#[allow(clippy::unwrap_used)]
fn given_open_target_when_focusing_then_minimize_maximize_activate() {
    // Given: An open target window
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_open();
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());
    let window = harness.locator.locate().unwrap();

    // When: Focusing it
    harness.locator.focus(&window).unwrap();

    // Then: Exact call order, and the target holds focus
    assert_eq!(
        desktop.events(),
        vec![
            DesktopEvent::Minimize(TARGET),
            DesktopEvent::Maximize(TARGET),
            DesktopEvent::Activate(TARGET),
        ]
    );
    assert!(harness.locator.is_target_active());
}

/// WHAT: open_or_focus focuses an open target and reports no launch
/// WHY: The caller only prompts the user when the app was started
#[test]
#[allow(clippy::unwrap_used)]
fn given_open_target_when_open_or_focus_then_false_and_focused() {
    // Given: The target is open but the terminal has focus
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_open();
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());
    assert_eq!(desktop.active(), Some(CALLER));

    // When: Opening or focusing
    let launched = harness.locator.open_or_focus().unwrap();

    // Then: No launch, target focused
    assert!(!launched);
    assert_eq!(desktop.active(), Some(TARGET));
    assert!(
        !desktop
            .events()
            .iter()
            .any(|e| matches!(e, DesktopEvent::Spawn(_)))
    );
}

/// WHAT: open_or_focus spawns the executable and waits the settle delay
/// WHY: A closed client is started instead of failing the run
#[test]
#[allow(clippy::unwrap_used)]
fn given_closed_target_when_open_or_focus_then_spawned_after_settle() {
    // Given: No matching window and an installed client
    let (install_dir, executable) = install_dir_with_executable();
    let desktop = FakeDesktop::with_target_closed();
    let settle = Duration::from_millis(20);
    let locator = WindowLocator::new(
        TargetApp::discord(install_dir.path()),
        Arc::clone(&desktop) as Arc<dyn crate::WindowSystem>,
        Arc::clone(&desktop) as Arc<dyn crate::Launcher>,
        settle,
    );

    // When: Opening or focusing
    let start = Instant::now();
    let launched = locator.open_or_focus().unwrap();

    // Then: Executable spawned, settle delay honoured
    assert!(launched);
    assert!(start.elapsed() >= settle);
    assert_eq!(desktop.events(), vec![DesktopEvent::Spawn(executable)]);
}

/// WHAT: Missing install surfaces ExecutableNotFound
/// WHY: Fatal environment errors must stop the run before any input
#[test]
#[allow(clippy::unwrap_used)]
fn given_closed_target_and_no_install_when_open_or_focus_then_executable_not_found() {
    // Given: No matching window and an empty install directory
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_closed();
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());

    // When: Opening or focusing
    let result = harness.locator.open_or_focus();

    // Then: ExecutableNotFound, nothing spawned
    assert!(matches!(result, Err(CoreError::ExecutableNotFound { .. })));
    assert!(desktop.events().is_empty());
}
