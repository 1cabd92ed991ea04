//! Reveal sequencer.

use std::time::Duration;

use crate::controller::scroll::ScrollMonitor;
use crate::pack::PackSession;

/// Outcome of one sequencer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// The card at `index` was flipped. `scroll_into_view` is false when the
    /// user has taken over scrolling.
    Revealed {
        index: usize,
        scroll_into_view: bool,
    },
    /// No card left at the current index.
    Complete,
}

/// Flips the cards of a session strictly in order, one per step.
///
/// The sequencer does not own a timer: the controller calls
/// [`step`](Self::step) every `step_delay` until the sequence completes.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    next: usize,
    step_delay: Duration,
}

impl RevealSequencer {
    /// Start a sequence at index 0.
    pub fn new(step_delay: Duration) -> Self {
        Self::starting_at(0, step_delay)
    }

    pub fn starting_at(index: usize, step_delay: Duration) -> Self {
        Self {
            next: index,
            step_delay,
        }
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Terminal condition: the next index is past the last card.
    pub fn is_complete(&self, session: &PackSession) -> bool {
        self.next >= session.len()
    }

    /// Reveal the card at the current index and advance.
    pub fn step(&mut self, session: &mut PackSession, monitor: &ScrollMonitor) -> RevealStep {
        if self.is_complete(session) {
            return RevealStep::Complete;
        }

        let index = self.next;
        session.reveal(index);
        self.next += 1;

        RevealStep::Revealed {
            index,
            scroll_into_view: !monitor.user_scrolled(),
        }
    }
}
