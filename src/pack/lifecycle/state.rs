//! State for the pack lifecycle.

use crate::mvi::MviState;

/// Label shown on the trigger while idle.
pub const DEFAULT_LABEL: &str = "Open New Pack";
/// Label shown while the pack is being created and opened.
pub const REQUESTING_LABEL: &str = "Opening pack...";
/// Label shown while cards are flipping.
pub const REVEALING_LABEL: &str = "Revealing cards...";

/// Single source of truth for busy/idle status.
///
/// Everything the trigger displays is derived from this value, so no
/// separate "busy" flag exists that could drift out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Waiting for the user; the trigger is enabled.
    #[default]
    Idle,

    /// Creating and opening a pack (includes the settle delay).
    Requesting,

    /// Cards of the active session are being flipped one by one.
    Revealing,
}

impl MviState for LifecycleState {}

impl LifecycleState {
    /// Check whether a new pack request may start.
    pub fn accepts_request(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check whether the trigger must be drawn disabled.
    pub fn input_disabled(&self) -> bool {
        !self.accepts_request()
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Idle => DEFAULT_LABEL,
            Self::Requesting => REQUESTING_LABEL,
            Self::Revealing => REVEALING_LABEL,
        }
    }
}
