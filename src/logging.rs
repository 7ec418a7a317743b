use fern::colors::{Color, ColoredLevelConfig};
use log::{info, SetLoggerError};
use crate::config::structs::configuration::Configuration;

/// Installs the global logger. Log lines go to stderr so they never mix
/// with the interactive output on stdout.
pub fn setup_logging(config: &Configuration) -> Result<(), SetLoggerError>
{
    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(config.log_level.to_level_filter())
        .chain(std::io::stderr())
        .apply()?;

    info!("logging initialized.");
    Ok(())
}
