//! Pack lifecycle state machine.
//!
//! Gates the single user-facing trigger: a new pack may only be requested
//! while the lifecycle is `Idle`.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lifecycle state enum (Idle → Requesting → Revealing)
//! - `intent.rs` - Controller events (RequestAccepted, FetchFailed, ...)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::LifecycleIntent;
pub use reducer::LifecycleReducer;
pub use state::LifecycleState;
