use anyhow::Context;
use luckybot_core::{BotConfig, DeliveryConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";
pub const DATABASE_FILE: &str = "luckybot.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub bot: BotConfig,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("luckybot"),
            bot: BotConfig::default(),
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Resolve the data directory and bot settings.
    ///
    /// An explicit `config_file` must exist; otherwise `config.json` inside
    /// the data directory is used when present.
    pub fn load(
        data_dir: Option<PathBuf>,
        config_file: Option<&Path>,
        verbose: bool,
    ) -> anyhow::Result<Self> {
        let mut config = Self {
            verbose,
            ..Self::default()
        };
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        let fallback = config.data_dir.join(CONFIG_FILE);
        let file = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None if fallback.exists() => Some(fallback),
            None => None,
        };

        if let Some(path) = file {
            config.bot = BotConfig::from_file(&path)
                .with_context(|| format!("loading bot config from {}", path.display()))?;
        }

        Ok(config)
    }

    /// Drop every pacing delay, for local runs.
    pub fn without_pacing(mut self) -> Self {
        self.bot.delivery = DeliveryConfig {
            max_retries: self.bot.delivery.max_retries,
            ..DeliveryConfig::immediate()
        };
        self
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
