use crate::{
    AbortCause, CoreError, Gate,
    tests::fakes::{CALLER, FakeDesktop, Harness, TARGET, fast_timings},
};

use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

fn gate(harness: &Harness) -> Gate {
    Gate::new(
        Arc::clone(&harness.session),
        Arc::clone(&harness.locator),
        harness.status(),
        Duration::from_millis(1),
    )
}

/// WHAT: Wait honours the minimum delay when running and focused
/// WHY: Cooldowns between steps keep the target UI in step with input
#[test]
#[allow(clippy::unwrap_used)]
fn given_running_and_focused_when_waiting_then_returns_after_delay() {
    // Given: A focused target
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_open();
    desktop.set_active(Some(TARGET));
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());
    let gate = gate(&harness);

    // When: Waiting 20ms
    let start = Instant::now();
    let result = gate.wait(Duration::from_millis(20));

    // Then: Returns Ok no earlier than the delay, silently
    assert!(result.is_ok());
    assert!(start.elapsed() >= Duration::from_millis(20));
    assert!(desktop.notices().is_empty());
}

/// WHAT: Lost focus suspends the wait with exactly one notice
/// WHY: Focus loss is self-healing, and the notice must not spam every tick
#[test]
#[allow(clippy::unwrap_used)]
fn given_unfocused_target_when_waiting_then_one_notice_until_refocused() {
    // Given: The user switched to another window
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_open();
    desktop.set_active(Some(CALLER));
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());
    let gate = gate(&harness);

    let refocus = {
        let desktop = Arc::clone(&desktop);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            desktop.set_active(Some(TARGET));
        })
    };

    // When: Waiting with no minimum delay
    let result = gate.wait(Duration::ZERO);
    refocus.join().unwrap();

    // Then: Released after refocus, with a single notice
    assert!(result.is_ok());
    assert_eq!(
        desktop.notices(),
        vec!["Discord not in focus, program suspended...".to_string()]
    );
}

/// WHAT: A paused session holds the wait until resumed
/// WHY: Pause must stop the run at the next step boundary
#[test]
#[allow(clippy::unwrap_used)]
fn given_paused_session_when_waiting_then_released_on_resume() {
    // Given: A paused session with the target focused
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_open();
    desktop.set_active(Some(TARGET));
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());
    let gate = gate(&harness);
    harness.session.toggle();

    let resume = {
        let session = Arc::clone(&harness.session);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            session.toggle();
        })
    };

    // When: Waiting
    let start = Instant::now();
    let result = gate.wait(Duration::ZERO);
    resume.join().unwrap();

    // Then: Only released after the resume
    assert!(result.is_ok());
    assert!(start.elapsed() >= Duration::from_millis(30));
}

/// WHAT: An in-flight wait observes the abort
/// WHY: Abort must unwind the engine from wherever it is suspended
#[test]
#[allow(clippy::unwrap_used)]
fn given_paused_wait_when_aborted_then_wait_returns_aborted() {
    // Given: A wait blocked on a paused session
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_open();
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());
    harness.session.toggle();
    let gate = gate(&harness);

    let abort = {
        let abort = Arc::clone(&harness.abort);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            abort.trigger(AbortCause::Interrupt);
        })
    };

    // When: Waiting
    let result = gate.wait(Duration::ZERO);
    abort.join().unwrap();

    // Then: Aborted
    assert!(matches!(result, Err(CoreError::Aborted { .. })));
}

/// WHAT: Abort cuts a long minimum delay short
/// WHY: The revert delay is the user's window to cancel the refocus
#[test]
#[allow(clippy::unwrap_used)]
fn given_long_delay_when_aborted_then_returns_early() {
    // Given: A focused target and a 10 second delay
    let tmp = tempfile::tempdir().unwrap();
    let desktop = FakeDesktop::with_target_open();
    desktop.set_active(Some(TARGET));
    let harness = Harness::new(Arc::clone(&desktop), tmp.path(), fast_timings());
    let gate = gate(&harness);

    let abort = {
        let abort = Arc::clone(&harness.abort);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            abort.trigger(AbortCause::Hotkey);
        })
    };

    // When: Waiting
    let start = Instant::now();
    let result = gate.wait(Duration::from_secs(10));
    abort.join().unwrap();

    // Then: Aborted well before the delay elapsed
    assert!(matches!(result, Err(CoreError::Aborted { .. })));
    assert!(start.elapsed() < Duration::from_secs(5));
}
