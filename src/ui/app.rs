use crate::config::Config;
use crate::controller::{ControllerEvent, ControllerHandle, ScrollSignal};
use crate::mvi::Reducer;
use crate::pack::{LifecycleState, PackSession};
use crate::ui::grid::CardGrid;
use crate::ui::selector::{PackSelectorState, SelectorIntent, SelectorReducer};
use crate::ui::viewport::Viewport;

/// Rows moved per mouse wheel notch.
pub const WHEEL_ROWS: i32 = 3;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Display-side mirror of the controller plus view-only state.
///
/// The controller is the single writer of the lifecycle and the session;
/// `App` only replays its events.
pub struct App {
    should_quit: bool,
    lifecycle: LifecycleState,
    session: PackSession,
    packs: Vec<String>,
    selected_pack: String,
    selector: PackSelectorState,
    grid: CardGrid,
    viewport: Viewport,
    body_width: u16,
    drag_anchor: Option<u16>,
    last_error: Option<String>,
    controller: Option<ControllerHandle>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            lifecycle: LifecycleState::default(),
            session: PackSession::default(),
            packs: config.packs.available.clone(),
            selected_pack: config.packs.default.clone(),
            selector: PackSelectorState::default(),
            grid: CardGrid::from_config(&config.ui),
            viewport: Viewport::default(),
            body_width: 0,
            drag_anchor: None,
            last_error: None,
            controller: None,
        }
    }

    pub fn attach_controller(&mut self, handle: ControllerHandle) {
        self.controller = Some(handle);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }

    pub fn session(&self) -> &PackSession {
        &self.session
    }

    pub fn selected_pack(&self) -> &str {
        &self.selected_pack
    }

    pub fn selector(&self) -> &PackSelectorState {
        &self.selector
    }

    pub fn grid(&self) -> &CardGrid {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The "Open New Pack" action.
    ///
    /// Ignored while the trigger is disabled. Returns `true` when the request
    /// was handed to the controller.
    pub fn trigger(&mut self) -> bool {
        if self.lifecycle.input_disabled() {
            tracing::debug!(state = ?self.lifecycle, "Trigger ignored while busy");
            return false;
        }
        let Some(controller) = &self.controller else {
            return false;
        };
        controller.request_pack(self.selected_pack.clone())
    }

    pub fn on_tick(&mut self) {
        self.viewport.tick();
    }

    /// Body area resized.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.body_width = width;
        let content = self.grid.content_height(self.session.len(), width);
        self.viewport.set_bounds(content, height);
    }

    pub fn on_controller_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::Lifecycle(state) => {
                if state == LifecycleState::Requesting {
                    self.last_error = None;
                }
                self.lifecycle = state;
            }
            ControllerEvent::SessionInstalled(session) => {
                self.session = session;
                self.viewport.reset();
                let content = self.grid.content_height(self.session.len(), self.body_width);
                self.viewport.set_bounds(content, self.viewport.height());
            }
            ControllerEvent::CardRevealed { index } => {
                self.session.reveal(index);
            }
            ControllerEvent::ScrollIntoView { index } => {
                // May have been queued before a manual scroll was handled.
                if self.user_scrolled() {
                    return;
                }
                let (top, span) = self.grid.row_span(index, self.body_width);
                self.viewport.center_on(top, span);
            }
            ControllerEvent::RequestRejected { .. } => {}
            ControllerEvent::RequestFailed(err) => {
                self.last_error = Some(format!("{}: {}", err.user_message(), err.service_error()));
            }
        }
    }

    /// Manual scroll. Reported to the scroll monitor before moving.
    pub fn scroll_manual(&mut self, delta: i32, signal: ScrollSignal) {
        if let Some(controller) = &self.controller {
            controller.scroll_monitor().observe(signal);
        }
        self.viewport.scroll_by(delta);
    }

    pub fn scroll_page(&mut self, pages: i32) {
        let page = i32::from(self.viewport.height().saturating_sub(1).max(1));
        self.scroll_manual(pages * page, ScrollSignal::Keyboard);
    }

    pub fn scroll_home(&mut self) {
        self.observe_scroll(ScrollSignal::Keyboard);
        self.viewport.scroll_to_top();
    }

    pub fn scroll_end(&mut self) {
        self.observe_scroll(ScrollSignal::Keyboard);
        self.viewport.scroll_to_bottom();
    }

    pub fn begin_drag(&mut self, row: u16) {
        self.drag_anchor = Some(row);
    }

    /// Drag scrolling follows the pointer like a touch move.
    pub fn drag_to(&mut self, row: u16) {
        let anchor = self.drag_anchor.unwrap_or(row);
        self.drag_anchor = Some(row);
        self.scroll_manual(i32::from(anchor) - i32::from(row), ScrollSignal::Drag);
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    fn user_scrolled(&self) -> bool {
        self.controller
            .as_ref()
            .is_some_and(|controller| controller.scroll_monitor().user_scrolled())
    }

    fn observe_scroll(&self, signal: ScrollSignal) {
        if let Some(controller) = &self.controller {
            controller.scroll_monitor().observe(signal);
        }
    }

    // ========================================================================
    // Pack selector (MVI pattern)
    // ========================================================================

    pub fn dispatch_selector(&mut self, intent: SelectorIntent) {
        dispatch_mvi!(self, selector, SelectorReducer, intent);
    }

    pub fn open_selector(&mut self) {
        let current = self
            .packs
            .iter()
            .position(|pack| pack == &self.selected_pack)
            .unwrap_or(0);
        self.dispatch_selector(SelectorIntent::Open {
            options: self.packs.clone(),
            current,
        });
    }

    /// Adopt the focused option and close the popup. Never requests a pack.
    pub fn confirm_selection(&mut self) {
        if let Some(pack) = self.selector.focused_option() {
            tracing::debug!(pack, "Pack type selected");
            self.selected_pack = pack.to_string();
        }
        self.dispatch_selector(SelectorIntent::Close);
    }
}
