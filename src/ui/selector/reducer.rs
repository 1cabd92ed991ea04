use crate::mvi::Reducer;
use crate::ui::selector::intent::SelectorIntent;
use crate::ui::selector::state::PackSelectorState;

pub struct SelectorReducer;

impl Reducer for SelectorReducer {
    type State = PackSelectorState;
    type Intent = SelectorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectorIntent::Open { options, current } => {
                if options.is_empty() {
                    return PackSelectorState::Hidden;
                }
                let focused = current.min(options.len() - 1);
                PackSelectorState::Visible { options, focused }
            }
            SelectorIntent::Close => PackSelectorState::Hidden,
            SelectorIntent::MoveUp => match state {
                PackSelectorState::Visible { options, focused } => {
                    let focused = if focused == 0 {
                        options.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    PackSelectorState::Visible { options, focused }
                }
                other => other,
            },
            SelectorIntent::MoveDown => match state {
                PackSelectorState::Visible { options, focused } => {
                    let focused = if focused + 1 >= options.len() {
                        0
                    } else {
                        focused + 1
                    };
                    PackSelectorState::Visible { options, focused }
                }
                other => other,
            },
        }
    }
}
