//! Configuration handling for derelict
//!
//! Settings live in `~/.config/derelict/config.toml`:
//!
//! ```toml
//! [typewriter]
//! fast_speed = 0.03
//! glitch_threshold = 40
//!
//! [clock]
//! mission_start = "2175-12-16T12:00:00"
//!
//! [[terminals]]
//! name = "mother"
//! kind = "MOTHER"
//! integrity = { cpu = 100, memory = 70, storage = 50 }
//! ```
//!
//! Missing sections and keys fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::ShipClock;
use crate::degradation::{ComponentIntegrity, IntegritySpec};
use crate::error::ConfigError;
use crate::terminal::TypewriterConfig;

/// Format of `clock.mission_start`.
pub const MISSION_START_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub typewriter: TypewriterConfig,
    pub clock: ClockConfig,
    pub terminals: Vec<TerminalSpec>,
}

/// Ship clock configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Mission start as `YYYY-MM-DDTHH:MM:SS`
    pub mission_start: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            mission_start: ShipClock::default_mission_start()
                .format(MISSION_START_FORMAT)
                .to_string(),
        }
    }
}

/// One terminal on board the ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalSpec {
    /// Name used to pick the terminal on the command line
    pub name: String,
    /// Terminal kind shown in the boot designation (e.g. `MOTHER`)
    pub kind: String,
    /// Hardware integrity percentages
    #[serde(default)]
    pub integrity: IntegritySpec,
    /// Optional JSON boot script replacing the standard transcript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_script: Option<PathBuf>,
}

impl TerminalSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, integrity: IntegritySpec) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            integrity,
            boot_script: None,
        }
    }

    /// Validated integrity values.
    pub fn integrity(&self) -> Result<ComponentIntegrity, ConfigError> {
        Ok(ComponentIntegrity::try_from(self.integrity)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typewriter: TypewriterConfig::default(),
            clock: ClockConfig::default(),
            terminals: vec![
                TerminalSpec::new("mother", "MOTHER", IntegritySpec::new(100, 70, 50)),
                TerminalSpec::new("security", "SECURITY", IntegritySpec::new(62, 89, 100)),
            ],
        }
    }
}

impl Config {
    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("derelict").join("config.toml"))
    }

    /// Load config from the default path, or defaults if the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load and validate config from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(
            path = %path.display(),
            terminals = config.terminals.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check tuning values, the clock and every terminal's integrity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.typewriter.validate()?;
        self.mission_start()?;
        for terminal in &self.terminals {
            terminal.integrity()?;
        }
        Ok(())
    }

    /// Look up a terminal by name (case-insensitive).
    pub fn terminal(&self, name: &str) -> Result<&TerminalSpec, ConfigError> {
        self.terminals
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownTerminal(name.to_string()))
    }

    /// Parsed mission start date.
    pub fn mission_start(&self) -> Result<NaiveDateTime, ConfigError> {
        NaiveDateTime::parse_from_str(&self.clock.mission_start, MISSION_START_FORMAT).map_err(
            |e| ConfigError::Invalid {
                key: "clock.mission_start",
                reason: format!("'{}': {}", self.clock.mission_start, e),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerminalError;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.terminals.len(), 2);
    }

    #[test]
    fn default_mission_start_round_trips() {
        let config = Config::default();
        assert_eq!(
            config.mission_start().unwrap(),
            ShipClock::default_mission_start()
        );
    }

    #[test]
    fn terminal_lookup_ignores_case() {
        let config = Config::default();
        assert_eq!(config.terminal("MOTHER").unwrap().kind, "MOTHER");
        assert!(matches!(
            config.terminal("bridge"),
            Err(ConfigError::UnknownTerminal(name)) if name == "bridge"
        ));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[typewriter]\nfast_speed = 0.05\n").unwrap();
        assert_eq!(config.typewriter.fast_speed, 0.05);
        assert_eq!(config.typewriter.slow_speed, 0.25);
        assert_eq!(config.terminals, Config::default().terminals);
    }

    #[test]
    fn parses_terminal_tables() {
        let toml = r#"
[[terminals]]
name = "lab"
kind = "SCIENCE"
integrity = { cpu = 20, memory = 100, storage = 100 }
boot_script = "lab.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let lab = config.terminal("lab").unwrap();
        assert_eq!(lab.boot_script.as_deref(), Some(Path::new("lab.json")));
        assert_eq!(lab.integrity().unwrap().cpu(), 20);
    }

    #[test]
    fn missing_integrity_component_fails_validation() {
        let toml = r#"
[[terminals]]
name = "lab"
kind = "SCIENCE"
integrity = { cpu = 20, memory = 100 }
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Terminal(TerminalError::InvalidIntegrity {
                component: "storage",
                ..
            })
        ));
    }

    #[test]
    fn bad_mission_start_is_rejected() {
        let mut config = Config::default();
        config.clock.mission_start = "yesterday".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                key: "clock.mission_start",
                ..
            })
        ));
    }

    #[test]
    fn serialized_config_parses_back() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }
}
