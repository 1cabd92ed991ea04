use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub packs: PacksConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Pack service connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the pack service (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Reveal timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Delay between consecutive card flips, in milliseconds (default: 500).
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    /// Delay between receiving the cards and showing them (default: 500).
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

/// Pack types offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacksConfig {
    /// Pack type requested when the user has not picked one.
    #[serde(default = "default_pack")]
    pub default: String,
    /// Pack types listed in the selector.
    #[serde(default = "default_available_packs")]
    pub available: Vec<String>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Card tile width in columns.
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    /// Card tile height in rows.
    #[serde(default = "default_card_height")]
    pub card_height: u16,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_step_delay_ms() -> u64 {
    500
}

fn default_settle_delay_ms() -> u64 {
    500
}

fn default_pack() -> String {
    "Common Pack".to_string()
}

fn default_available_packs() -> Vec<String> {
    [
        "Common Pack",
        "Romance Dawn [OP-01]",
        "Paramount War [OP-02]",
        "Pillars of Strength [OP-03]",
        "Kingdoms of Intrigue [OP-04]",
        "Awakening of the New Era [OP-05]",
        "Wings of the Captain [OP-06]",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_card_width() -> u16 {
    22
}

fn default_card_height() -> u16 {
    9
}

impl RevealConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl Default for PacksConfig {
    fn default() -> Self {
        Self {
            default: default_pack(),
            available: default_available_packs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            card_width: default_card_width(),
            card_height: default_card_height(),
        }
    }
}
