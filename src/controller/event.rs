use crate::controller::error::PackError;
use crate::pack::{LifecycleState, PackSession};

/// Commands accepted by the controller task.
#[derive(Debug)]
pub enum ControllerCommand {
    /// Request a new pack. `None` uses the configured default pack type.
    RequestPack { pack: Option<String> },
    Shutdown,
}

/// Notifications published by the controller, in the order they happened.
#[derive(Debug)]
pub enum ControllerEvent {
    /// The lifecycle state changed.
    Lifecycle(LifecycleState),

    /// A new session replaced the active one. All its cards are face down.
    SessionInstalled(PackSession),

    /// The card at `index` of the active session was flipped.
    CardRevealed { index: usize },

    /// The viewport should center the card at `index`.
    ScrollIntoView { index: usize },

    /// A request arrived while the controller was busy and was dropped.
    RequestRejected { state: LifecycleState },

    /// Creating or opening a pack failed; the active session is unchanged.
    RequestFailed(PackError),
}
