//! Reveal sequencing controller.
//!
//! Drives a pack request from the trigger to the last flipped card:
//!
//! ```text
//! request ──→ create pack ──→ open pack ──→ settle ──→ reveal 0..n ──→ idle
//!    │             │              │
//!    └─ busy: rejected            └─ failure: idle, previous session kept
//! ```
//!
//! The controller runs as a single task that owns the active session and
//! the lifecycle state. Everything else talks to it through
//! [`ControllerHandle`] and listens to [`ControllerEvent`]s.

mod actor;
mod error;
mod event;
mod handle;
mod scroll;
mod sequencer;

pub use actor::{spawn, PackController};
pub use error::PackError;
pub use event::{ControllerCommand, ControllerEvent};
pub use handle::ControllerHandle;
pub use scroll::{ScrollMonitor, ScrollSignal};
pub use sequencer::{RevealSequencer, RevealStep};
