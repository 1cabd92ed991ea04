//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (trigger pressed, selector moved)
/// - Controller events (pack fetched, reveal finished)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
