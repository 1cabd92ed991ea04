pub mod app;
pub mod events;
pub mod footer;
pub mod grid;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod selector;
pub mod terminal_guard;
pub mod theme;
pub mod viewport;

pub use runtime::run;
