use std::process::exit;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use registration_agent::agent::agent::agent_service;
use registration_agent::config::structs::configuration::Configuration;
use registration_agent::logging::setup_logging;
use registration_agent::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_config {
        match Configuration::create_file(&args.config) {
            Ok(()) => {
                eprintln!("[CONFIG] Written default configuration to '{}'", args.config);
                exit(0);
            }
            Err(error) => {
                eprintln!("[CONFIG] Unable to write '{}': {error}", args.config);
                exit(101);
            }
        }
    }

    let mut config = match Configuration::load_from_file(&args.config) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("[CONFIG] Unable to load '{}': {error}", args.config);
            exit(101);
        }
    };
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }

    if let Err(error) = setup_logging(&config) {
        eprintln!("Unable to initialize logging: {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let (Some(host), Some(port)) = (args.host, args.port) else {
        error!("Registry host and port are required");
        exit(2);
    };

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(agent_service(config, &host, port));
    runtime.shutdown_background();

    if let Err(error) = result {
        error!("{error}");
        exit(1);
    }
    Ok(())
}
