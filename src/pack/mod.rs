//! Pack data model and lifecycle state machine.
//!
//! - `card.rs` - Card and pack identifiers
//! - `session.rs` - The active pack session (the displayed cards)
//! - `lifecycle/` - Idle → Requesting → Revealing state machine (MVI)

mod card;
pub mod lifecycle;
mod session;

pub use card::{Card, PackId};
pub use lifecycle::{LifecycleIntent, LifecycleReducer, LifecycleState};
pub use session::PackSession;
