//! User-scroll monitor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Kind of manual navigation the display surface detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSignal {
    /// Arrow / page / home / end keys.
    Keyboard,
    /// Mouse wheel.
    Wheel,
    /// Mouse drag (the terminal stand-in for a touch move).
    Drag,
}

/// Tracks whether the user scrolled by hand since the last pack request.
///
/// The display surface calls [`observe`](Self::observe) for every manual
/// scroll signal; the controller resets the flag when it accepts a request
/// and reads it before each auto-scroll. Once set, auto-scroll stays off
/// for the rest of that reveal sequence.
#[derive(Debug, Clone, Default)]
pub struct ScrollMonitor {
    user_scrolled: Arc<AtomicBool>,
}

impl ScrollMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a manual scroll signal.
    pub fn observe(&self, signal: ScrollSignal) {
        if !self.user_scrolled.swap(true, Ordering::SeqCst) {
            tracing::debug!(?signal, "Manual scroll detected, auto-scroll suspended");
        }
    }

    /// Current reading of the scroll-interaction flag.
    pub fn user_scrolled(&self) -> bool {
        self.user_scrolled.load(Ordering::SeqCst)
    }

    pub(crate) fn reset(&self) {
        self.user_scrolled.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clear() {
        assert!(!ScrollMonitor::new().user_scrolled());
    }

    #[test]
    fn any_signal_sets_flag() {
        for signal in [ScrollSignal::Keyboard, ScrollSignal::Wheel, ScrollSignal::Drag] {
            let monitor = ScrollMonitor::new();
            monitor.observe(signal);
            assert!(monitor.user_scrolled(), "signal {:?}", signal);
        }
    }

    #[test]
    fn clones_share_the_flag() {
        let monitor = ScrollMonitor::new();
        let ui_side = monitor.clone();
        ui_side.observe(ScrollSignal::Wheel);
        assert!(monitor.user_scrolled());

        monitor.reset();
        assert!(!ui_side.user_scrolled());
    }

    #[test]
    fn repeated_signals_keep_flag_set() {
        let monitor = ScrollMonitor::new();
        monitor.observe(ScrollSignal::Keyboard);
        monitor.observe(ScrollSignal::Drag);
        assert!(monitor.user_scrolled());
    }
}
