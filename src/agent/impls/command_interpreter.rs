use std::sync::Arc;
use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use crate::agent::agent::{INVALID_INPUT, PROMPT};
use crate::agent::enums::agent_error::AgentError;
use crate::agent::enums::command::Command;
use crate::agent::enums::flow::Flow;
use crate::agent::structs::agent_context::AgentContext;
use crate::agent::structs::command_interpreter::CommandInterpreter;
use crate::lease::structs::registration_lease::RegistrationLease;
use crate::protocol::enums::message::Message;
use crate::protocol::enums::message_type::MessageType;
use crate::protocol::structs::ack::Ack;
use crate::protocol::structs::fetch_reply::FetchReply;
use crate::protocol::structs::fetch_request::FetchRequest;
use crate::protocol::structs::probe_request::ProbeRequest;
use crate::protocol::structs::register_reply::RegisterReply;
use crate::protocol::structs::register_request::RegisterRequest;
use crate::protocol::structs::unregister_request::UnregisterRequest;
use crate::transport::enums::transport_error::TransportError;

impl CommandInterpreter {
    pub fn new(context: Arc<AgentContext>) -> CommandInterpreter
    {
        CommandInterpreter {
            context,
        }
    }

    /// Prompts and executes lines from `input` until `q` or end of input.
    /// Lines that are not UTF-8 are reported and skipped.
    pub async fn run<R: AsyncBufRead + Unpin>(&self, mut input: R) -> Result<(), AgentError>
    {
        let mut raw = Vec::new();
        loop {
            self.context.console.prompt(PROMPT);
            raw.clear();
            if input.read_until(b'\n', &mut raw).await? == 0 {
                debug!("[AGENT] End of input");
                self.quit();
                return Ok(());
            }

            let Ok(line) = std::str::from_utf8(&raw) else {
                self.context.console.line(INVALID_INPUT);
                continue;
            };

            if self.execute_line(line.trim_end_matches(['\n', '\r'])).await == Flow::Quit {
                return Ok(());
            }
        }
    }

    pub async fn execute_line(&self, line: &str) -> Flow
    {
        match Command::parse(line) {
            Ok(None) => Flow::Continue,
            Ok(Some(command)) => self.dispatch(command).await,
            Err(error) => {
                self.context.console.line(error.to_string());
                Flow::Continue
            }
        }
    }

    pub async fn dispatch(&self, command: Command) -> Flow
    {
        match command {
            Command::Register { port, data, name } => self.register(port, data, name).await,
            Command::Fetch { prefix } => self.fetch(prefix).await,
            Command::Unregister { port } => self.unregister(port).await,
            Command::Probe => self.probe().await,
            Command::Quit => {
                self.quit();
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    async fn register(&self, port: u16, data: u32, name: String)
    {
        let context = &self.context;
        let request = Message::from(RegisterRequest {
            sequence: context.sequence.next(),
            ip: context.local_ip,
            port,
            data,
            name,
        });

        let Some(bytes) = Self::encode(&request) else {
            context.console.line("Register failed.");
            return;
        };
        let Some(response) = self.exchange(MessageType::Register, &bytes).await else {
            context.console.line("Register failed.");
            return;
        };
        let reply = match RegisterReply::from_bytes(&response) {
            Ok(reply) => reply,
            Err(error) => {
                warn!("[AGENT] Unreadable register reply: {error}");
                context.console.line("Register failed.");
                return;
            }
        };

        context.console.line(format!("Register {}:{} succeed with lifetime = {}", context.local_ip, port, reply.lifetime));

        context.port_locks.acquire(port);
        context.start_lease(RegistrationLease::new(port, bytes, reply.lifetime, context.renewal_margin()));
        context.ensure_probe_responder();
    }

    async fn fetch(&self, prefix: String)
    {
        let context = &self.context;
        let request = Message::from(FetchRequest {
            sequence: context.sequence.next(),
            prefix,
        });

        let reply = match self.request(&request).await.map(|response| FetchReply::from_bytes(&response)) {
            Some(Ok(reply)) => reply,
            Some(Err(error)) => {
                warn!("[AGENT] Unreadable fetch reply: {error}");
                context.console.line("Fetch failed.");
                return;
            }
            None => {
                context.console.line("Fetch failed.");
                return;
            }
        };

        for (index, entry) in reply.entries.iter().enumerate() {
            context.console.line(format!("Result {index}:"));
            context.console.line(format!("    Service IP: {}", entry.ip));
            context.console.line(format!("    Service Port: {}", entry.port));
            context.console.line(format!("    Service Data: 0x{:x}", entry.data));
        }
        context.console.line("Fetch succeeded.");
    }

    async fn unregister(&self, port: u16)
    {
        let context = &self.context;
        if !context.port_locks.is_locked(port) {
            context.console.line(format!("Port number {port} hasn't been registered yet."));
            return;
        }

        let request = Message::from(UnregisterRequest {
            sequence: context.sequence.next(),
            ip: context.local_ip,
            port,
        });

        match self.request(&request).await {
            Some(_) => {
                context.port_locks.release(port);
                context.console.line("Unregister succeeded.");
            }
            None => context.console.line("Unregister failed."),
        }
    }

    async fn probe(&self)
    {
        let context = &self.context;
        let request = Message::from(ProbeRequest {
            sequence: context.sequence.next(),
        });

        match self.request(&request).await.map(|response| Ack::from_bytes(&response)) {
            Some(Ok(_)) => context.console.line("Probe succeeded."),
            Some(Err(error)) => {
                warn!("[AGENT] Unreadable probe reply: {error}");
                context.console.line("Probe failed.");
            }
            None => context.console.line("Probe failed."),
        }
    }

    fn quit(&self)
    {
        debug!("[AGENT] Quitting");
        self.context.shutdown();
    }

    fn encode(request: &Message) -> Option<Vec<u8>>
    {
        match request.to_bytes() {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                warn!("[AGENT] Could not encode {} request: {error}", request.message_type());
                None
            }
        }
    }

    /// Encodes and sends `request`. `None` means no usable reply.
    async fn request(&self, request: &Message) -> Option<Vec<u8>>
    {
        let bytes = Self::encode(request)?;
        self.exchange(request.message_type(), &bytes).await
    }

    async fn exchange(&self, kind: MessageType, bytes: &[u8]) -> Option<Vec<u8>>
    {
        match self.context.engine.send(kind, bytes).await {
            Ok(response) => Some(response),
            Err(TransportError::Cancelled) => {
                debug!("[AGENT] {kind} request cancelled");
                None
            }
            Err(error) => {
                debug!("[AGENT] {kind} request failed: {error}");
                None
            }
        }
    }
}
