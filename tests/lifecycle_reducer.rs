use packopener::mvi::Reducer;
use packopener::pack::{LifecycleIntent, LifecycleReducer, LifecycleState};

fn run(intents: &[LifecycleIntent]) -> LifecycleState {
    intents
        .iter()
        .fold(LifecycleState::Idle, |state, intent| LifecycleReducer::reduce(state, *intent))
}

#[test]
fn full_cycle_returns_to_idle() {
    let state = run(&[
        LifecycleIntent::RequestAccepted,
        LifecycleIntent::SessionInstalled,
        LifecycleIntent::RevealComplete,
    ]);
    assert_eq!(state, LifecycleState::Idle);
    assert!(state.accepts_request());
}

#[test]
fn failed_fetch_returns_to_idle() {
    let state = run(&[LifecycleIntent::RequestAccepted, LifecycleIntent::FetchFailed]);
    assert_eq!(state, LifecycleState::Idle);
}

#[test]
fn second_request_does_not_leave_requesting() {
    let state = run(&[LifecycleIntent::RequestAccepted, LifecycleIntent::RequestAccepted]);
    assert_eq!(state, LifecycleState::Requesting);
}

#[test]
fn stale_completion_is_ignored_while_requesting() {
    let state = run(&[LifecycleIntent::RequestAccepted, LifecycleIntent::RevealComplete]);
    assert_eq!(state, LifecycleState::Requesting);
}

#[test]
fn trigger_disabled_outside_idle() {
    assert!(!LifecycleState::Idle.input_disabled());
    assert!(LifecycleState::Requesting.input_disabled());
    assert!(LifecycleState::Revealing.input_disabled());
}

#[test]
fn label_per_state() {
    assert_eq!(LifecycleState::Idle.display_label(), "Open New Pack");
    assert_eq!(LifecycleState::Requesting.display_label(), "Opening pack...");
    assert_eq!(LifecycleState::Revealing.display_label(), "Revealing cards...");
}
