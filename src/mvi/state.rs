//! Base trait for state in MVI architecture.

/// Marker trait for state objects driven by a [`Reducer`](super::Reducer).
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait MviState: Clone + PartialEq + Default + Send + 'static {}
