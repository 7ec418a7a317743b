use crate::agent::agent::{FETCH_USAGE, PROBE_USAGE, QUIT_USAGE, REGISTER_USAGE, UNREGISTER_USAGE};
use crate::agent::enums::command::Command;
use crate::agent::enums::command_error::CommandError;
use crate::protocol::protocol::MAX_NAME_LENGTH;

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError>
    {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match command {
            "r" => {
                let &[port, data, name] = args.as_slice() else {
                    return Err(CommandError::Usage(REGISTER_USAGE));
                };
                if name.len() > MAX_NAME_LENGTH {
                    return Err(CommandError::NameTooLong(name.len()));
                }
                Command::Register {
                    port: parse_port(port)?,
                    data: parse_data(data)?,
                    name: name.to_string(),
                }
            }
            "f" => {
                let prefix = match args.as_slice() {
                    [] => "",
                    &[prefix] => prefix,
                    _ => return Err(CommandError::Usage(FETCH_USAGE)),
                };
                if prefix.len() > MAX_NAME_LENGTH {
                    return Err(CommandError::PrefixTooLong(prefix.len()));
                }
                Command::Fetch { prefix: prefix.to_string() }
            }
            "u" => {
                let &[port] = args.as_slice() else {
                    return Err(CommandError::Usage(UNREGISTER_USAGE));
                };
                Command::Unregister { port: parse_port(port)? }
            }
            "p" if args.is_empty() => Command::Probe,
            "p" => return Err(CommandError::Usage(PROBE_USAGE)),
            "q" if args.is_empty() => Command::Quit,
            "q" => return Err(CommandError::Usage(QUIT_USAGE)),
            other => return Err(CommandError::Unsupported(other.to_string())),
        };

        Ok(Some(command))
    }
}

pub fn parse_port(value: &str) -> Result<u16, CommandError>
{
    value.parse().map_err(|_| CommandError::InvalidPort(value.to_string()))
}

/// Accepts `0x` hexadecimal or any decimal in `i32::MIN..=u32::MAX`.
/// Negative values keep their two's complement bits.
pub fn parse_data(value: &str) -> Result<u32, CommandError>
{
    let invalid = || CommandError::InvalidData(value.to_string());

    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).map_err(|_| invalid());
    }

    let decimal: i64 = value.parse().map_err(|_| invalid())?;
    if decimal < i64::from(i32::MIN) || decimal > i64::from(u32::MAX) {
        return Err(invalid());
    }
    Ok(decimal as u32)
}
