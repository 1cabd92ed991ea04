use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Open trading-card packs in the terminal.
#[derive(Debug, Parser)]
#[command(name = "packopener", version, about)]
pub struct Cli {
    /// Config file path (default: ~/.config/pack-opener/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the pack service base URL
    #[arg(long, value_name = "URL")]
    pub service_url: Option<String>,

    /// Pack type opened by default
    #[arg(long, value_name = "NAME")]
    pub pack: Option<String>,

    /// Delay between card flips in milliseconds
    #[arg(long, value_name = "MS")]
    pub step_delay_ms: Option<u64>,

    /// Write logs to this file (overrides PACK_OPENER_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file, apply command-line overrides and re-validate.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load_from(&self.config_path())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.service_url {
            config.service.base_url = url.clone();
        }
        if let Some(pack) = &self.pack {
            if !config.packs.available.contains(pack) {
                config.packs.available.push(pack.clone());
            }
            config.packs.default = pack.clone();
        }
        if let Some(step) = self.step_delay_ms {
            config.reveal.step_delay_ms = step;
        }
    }
}
