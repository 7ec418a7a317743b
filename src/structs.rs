use clap::Parser;
use crate::config::enums::log_level::LogLevel;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host name or IPv4 address of the registration service.
    #[arg(required_unless_present = "create_config")]
    pub host: Option<String>,
    /// UDP port of the registration service.
    #[arg(required_unless_present = "create_config")]
    pub port: Option<u16>,
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Write a config file with default values and exit.
    #[arg(long)]
    pub create_config: bool,
    /// Overrides the log level of the config file.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}
