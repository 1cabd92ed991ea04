//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for the unidirectional state machines used by the pack
//! lifecycle and the pack selector popup.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a state machine
//! - **Intent**: User actions or controller events
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::MviState;
