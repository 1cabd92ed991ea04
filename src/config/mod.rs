//! Configuration loading and validation.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_CARD_CELLS};
pub use types::{Config, PacksConfig, RevealConfig, ServiceConfig, UiConfig};
