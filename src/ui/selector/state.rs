use crate::mvi::MviState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PackSelectorState {
    #[default]
    Hidden,
    Visible {
        options: Vec<String>,
        focused: usize,
    },
}

impl MviState for PackSelectorState {}

impl PackSelectorState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The option under the cursor, if the popup is open.
    pub fn focused_option(&self) -> Option<&str> {
        match self {
            Self::Visible { options, focused } => options.get(*focused).map(String::as_str),
            Self::Hidden => None,
        }
    }
}
