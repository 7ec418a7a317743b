use log::LevelFilter;
use crate::config::enums::log_level::LogLevel;

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::off => LevelFilter::Off,
            LogLevel::error => LevelFilter::Error,
            LogLevel::warn => LevelFilter::Warn,
            LogLevel::info => LevelFilter::Info,
            LogLevel::debug => LevelFilter::Debug,
            LogLevel::trace => LevelFilter::Trace,
        }
    }
}
