use std::path::{Path, PathBuf};

use crate::ai::{Agent, HeuristicAgent, RandomAgent};
use crate::error::ConfigError;
use crate::game::{AiConfig, Side};

/// Longest computer "thinking" pause accepted from config.
const MAX_AI_DELAY_MS: u64 = 10_000;

/// Which computer opponent to play against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    Heuristic,
    Random,
}

impl Opponent {
    pub fn build(self) -> Box<dyn Agent> {
        match self {
            Opponent::Heuristic => Box::new(HeuristicAgent),
            Opponent::Random => Box::new(RandomAgent::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    Dark,
}

/// Game session settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub vs_computer: bool,
    pub ai_side: Side,
    pub opponent: Opponent,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            vs_computer: false,
            ai_side: Side::Second,
            opponent: Opponent::Heuristic,
        }
    }
}

impl GameConfig {
    pub fn ai_config(&self) -> AiConfig {
        AiConfig {
            enabled: self.vs_computer,
            side: self.ai_side,
        }
    }
}

/// Terminal front-end settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause before the computer drops its disc.
    pub ai_delay_ms: u64,
    /// Time per row of the falling-disc animation.
    pub drop_frame_ms: u64,
    pub theme: ThemeKind,
    /// Where to write logs; logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            ai_delay_ms: 350,
            drop_frame_ms: 12,
            theme: ThemeKind::Light,
            log_file: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.drop_frame_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.drop_frame_ms must be > 0".into(),
            ));
        }
        if self.ui.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ui.ai_delay_ms must be <= {MAX_AI_DELAY_MS}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
