use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SelectorIntent {
    /// Show the popup with the cursor on `current`.
    Open { options: Vec<String>, current: usize },
    Close,
    MoveUp,
    MoveDown,
}

impl Intent for SelectorIntent {}
