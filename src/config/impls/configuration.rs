use std::fs::File;
use std::io::{ErrorKind, Write};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::log_level::LogLevel;
use crate::config::structs::agent_config::AgentConfig;
use crate::config::structs::configuration::Configuration;

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: LogLevel::info,
            agent: AgentConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn create_file(path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(&Configuration::init())?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`. A missing file yields the defaults.
    pub fn load_from_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(ConfigurationError::IOError(error)) if error.kind() == ErrorKind::NotFound => {
                eprintln!("No config file found at '{path}', using defaults.");
                Configuration::init()
            }
            Err(error) => return Err(error),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.agent.validate()
    }
}
