use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::logging::{LogLevel, log_info, log_warning};

pub const CONFIG_PATH: &str = "conf/bingo.conf";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub marker: char,
    pub color: bool,
    pub log_level: LogLevel,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            marker: 'X',
            color: true,
            log_level: LogLevel::Warning,
        }
    }
}

impl GameConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_map(&parse_config(&content)))
    }

    fn from_map(config_map: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        let marker = config_map.get("marker")
            .and_then(|m| {
                let mut chars = m.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            })
            .unwrap_or(defaults.marker);

        let color = config_map.get("color")
            .and_then(|c| c.parse::<bool>().ok())
            .unwrap_or(defaults.color);

        let log_level = config_map.get("log_level")
            .and_then(|l| LogLevel::parse(l))
            .unwrap_or(defaults.log_level);

        GameConfig { marker, color, log_level }
    }

    pub fn load_or_default() -> (Self, ConfigSource) {
        Self::load_from_or_default(CONFIG_PATH)
    }

    /// Load the config without logging, so the caller can apply the log
    /// level first and then report where the settings came from.
    pub fn load_from_or_default<P: AsRef<Path>>(path: P) -> (Self, ConfigSource) {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(config) => (config, ConfigSource::File(path.display().to_string())),
            Err(e) if path.exists() => (
                Self::default(),
                ConfigSource::Unreadable(path.display().to_string(), e.to_string()),
            ),
            Err(_) => (Self::default(), ConfigSource::Missing(path.display().to_string())),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    Missing(String),
    Unreadable(String, String),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => log_info(&format!("Loaded configuration from {path}")),
            ConfigSource::Missing(path) => log_info(&format!("No config at {path}. Using defaults.")),
            ConfigSource::Unreadable(path, e) => {
                log_warning(&format!("Could not load config from {path}: {e}. Using defaults."))
            }
        }
    }
}

fn parse_config(content: &str) -> HashMap<String, String> {
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            config.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    config
}
