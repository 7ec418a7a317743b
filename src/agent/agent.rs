use log::info;
use tokio::io::BufReader;
use crate::agent::enums::agent_error::AgentError;
use crate::agent::structs::agent_context::AgentContext;
use crate::agent::structs::command_interpreter::CommandInterpreter;
use crate::agent::structs::console::Console;
use crate::config::structs::configuration::Configuration;
use crate::transport::transport::{bind_endpoints, discover_local_ip, resolve_registry};

pub const PROMPT: &str = "Type in r(egister), f(etch), u(nregister), p(robe), or q(uit): ";
pub const REGISTER_USAGE: &str = "Register Usage: r <port num> <data> <service name>";
pub const FETCH_USAGE: &str = "Fetch Usage: f <name prefix>";
pub const UNREGISTER_USAGE: &str = "Unregister Usage: u <port num>";
pub const PROBE_USAGE: &str = "Probe Usage: p";
pub const QUIT_USAGE: &str = "Quit Usage: q";
pub const INVALID_INPUT: &str = "Invalid input: not valid UTF-8";

/// Runs the agent against the registry at `host:port` until the user quits,
/// input ends or Ctrl-C is pressed.
pub async fn agent_service(config: Configuration, host: &str, port: u16) -> Result<(), AgentError>
{
    let agent_config = config.agent;

    let registry = resolve_registry(host, port).await?;
    let endpoints = bind_endpoints(agent_config.bind_ip()?, agent_config.bind_port, agent_config.reuse_address)?;
    let local_ip = match agent_config.advertise_ipv4()? {
        Some(ip) => ip,
        None => discover_local_ip(registry)?,
    };
    info!(
        "[AGENT] Registry {registry}, advertising {local_ip}, primary port {}, probe port {}",
        endpoints.primary_port()?,
        endpoints.secondary_port()?
    );

    let context = AgentContext::new(agent_config, local_ip, registry, endpoints, Console::stdout());
    let interpreter = CommandInterpreter::new(context.clone());
    let input = BufReader::new(tokio::io::stdin());

    let result = tokio::select! {
        result = interpreter.run(input) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("[AGENT] Ctrl-C received, shutting down");
            Ok(())
        }
    };

    context.shutdown();
    context.join_background().await;
    info!("[AGENT] Stopped");
    result
}
