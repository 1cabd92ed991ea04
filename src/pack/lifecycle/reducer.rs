//! Reducer for the pack lifecycle.

use crate::mvi::Reducer;

use super::intent::LifecycleIntent;
use super::state::LifecycleState;

/// Reducer for lifecycle state transitions.
///
/// Pure function. The idle guard, logging and network calls are handled by
/// the controller around the dispatch call. Intents that do not apply to the
/// current state leave it unchanged.
pub struct LifecycleReducer;

impl Reducer for LifecycleReducer {
    type State = LifecycleState;
    type Intent = LifecycleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (LifecycleState::Idle, LifecycleIntent::RequestAccepted) => LifecycleState::Requesting,
            (LifecycleState::Requesting, LifecycleIntent::FetchFailed) => LifecycleState::Idle,
            (LifecycleState::Requesting, LifecycleIntent::SessionInstalled) => {
                LifecycleState::Revealing
            }
            // The only way out of Revealing.
            (LifecycleState::Revealing, LifecycleIntent::RevealComplete) => LifecycleState::Idle,
            (other, _) => other,
        }
    }
}
