//! Intents for the pack lifecycle.

use crate::mvi::Intent;

/// Intents that can be dispatched to the lifecycle reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleIntent {
    /// A pack request passed the idle guard.
    RequestAccepted,

    /// Creating or opening the pack failed.
    FetchFailed,

    /// The opened pack was installed as the active session; reveals begin.
    SessionInstalled,

    /// The sequencer ran past the last card.
    RevealComplete,
}

impl Intent for LifecycleIntent {}
