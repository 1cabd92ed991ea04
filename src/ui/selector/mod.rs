//! Pack type selector popup.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Hidden / Visible { options, focused }
//! - `intent.rs` - Open, Close, MoveUp, MoveDown
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::SelectorIntent;
pub use reducer::SelectorReducer;
pub use state::PackSelectorState;
