use crate::error::{LuckyError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// First day of the daily cadence; gaps are counted from here.
    pub epoch: NaiveDate,
    pub draw_mode: DrawMode,
    pub delivery: DeliveryConfig,
    /// Clip sent when the winner tops the ranking.
    pub goat_media: Option<PathBuf>,
    pub schedule_days: u32,
    pub chance_iterations: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Elimination tournament with the game scheduled for the date.
    Tournament,
    /// Shuffle-then-pick over the participant list.
    RandomPick,
}

/// Pacing and retry settings. Durations are plain milliseconds so a JSON
/// config can say `"send_delay_ms": 1500`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Waited before every externally visible send.
    pub send_delay_ms: u64,
    /// Waited after each participant's turn in a round.
    pub turn_delay_ms: u64,
    pub max_retries: u32,
    pub retry_margin_ms: u64,
    /// Used when a rate-limit signal carries no retry-after value.
    pub default_retry_after_ms: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 1_000,
            turn_delay_ms: 1_000,
            max_retries: 3,
            retry_margin_ms: 1_000,
            default_retry_after_ms: 30_000,
        }
    }
}

impl DeliveryConfig {
    /// No pauses at all, for tests and offline runs.
    pub fn immediate() -> Self {
        Self {
            send_delay_ms: 0,
            turn_delay_ms: 0,
            retry_margin_ms: 0,
            default_retry_after_ms: 0,
            ..Self::default()
        }
    }

    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }

    pub fn retry_margin(&self) -> Duration {
        Duration::from_millis(self.retry_margin_ms)
    }

    pub fn default_retry_after(&self) -> Duration {
        Duration::from_millis(self.default_retry_after_ms)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            draw_mode: DrawMode::Tournament,
            delivery: DeliveryConfig::default(),
            goat_media: None,
            schedule_days: 7,
            chance_iterations: 10_000,
        }
    }
}

impl BotConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.schedule_days == 0 {
            return Err(LuckyError::config("Schedule must cover at least one day"));
        }

        if self.chance_iterations == 0 {
            return Err(LuckyError::config(
                "Chance iterations must be greater than 0",
            ));
        }

        if self.delivery.max_retries > 10 {
            return Err(LuckyError::config("Max retries must be at most 10"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.epoch, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(config.draw_mode, DrawMode::Tournament);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BotConfig =
            serde_json::from_str(r#"{"draw_mode": "random_pick", "schedule_days": 3}"#).unwrap();

        assert_eq!(config.draw_mode, DrawMode::RandomPick);
        assert_eq!(config.schedule_days, 3);
        assert_eq!(config.delivery.max_retries, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = BotConfig::default();
        config.schedule_days = 0;
        assert!(config.validate().is_err());

        let mut config = BotConfig::default();
        config.delivery.max_retries = 11;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.json");
        std::fs::write(&path, r#"{"epoch": "2024-06-01"}"#).unwrap();

        let config = BotConfig::from_file(&path).unwrap();
        assert_eq!(config.epoch, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_from_file_with_delays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.json");
        std::fs::write(
            &path,
            r#"{"delivery": {"send_delay_ms": 2000, "default_retry_after_ms": 5000}}"#,
        )
        .unwrap();

        let config = BotConfig::from_file(&path).unwrap();
        assert_eq!(config.delivery.send_delay(), Duration::from_secs(2));
        assert_eq!(config.delivery.default_retry_after(), Duration::from_secs(5));
        assert_eq!(config.delivery.turn_delay(), Duration::from_secs(1));
        assert_eq!(config.delivery.retry_margin(), Duration::from_secs(1));
        assert_eq!(config.delivery.max_retries, 3);
    }

    #[test]
    fn test_delivery_round_trips_as_integers() {
        let json = serde_json::to_value(DeliveryConfig::immediate()).unwrap();
        assert_eq!(json["send_delay_ms"], 0);
        assert_eq!(json["max_retries"], 3);

        let back: DeliveryConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, DeliveryConfig::immediate());
    }
}
