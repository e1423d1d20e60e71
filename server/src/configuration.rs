use crafting::GameSettings;
use log::info;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Path of sqlite database, `:memory:` keeps state in memory only.
    pub database: String,
    pub tick_millis: u64,
    pub persist_seconds: u64,
    pub game: GameSettings,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            database: "./database.sqlite".to_string(),
            tick_millis: 20,
            persist_seconds: 30,
            game: GameSettings::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigurationError {
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl From<std::io::Error> for ConfigurationError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<toml::de::Error> for ConfigurationError {
    fn from(error: toml::de::Error) -> Self {
        Self::Toml(error)
    }
}

impl Configuration {
    /// Reads toml file, missing file means defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("Configuration {} not found, use defaults", path.display());
                Ok(Self::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigurationError> {
        let configuration = toml::from_str(contents)?;
        Ok(configuration)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }

    pub fn persist_period(&self) -> Duration {
        Duration::from_secs(self.persist_seconds)
    }
}
