use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unsupported command: {0}")]
    Unsupported(String),

    #[error("{0}")]
    Usage(&'static str),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Service name is {0} bytes long, at most 255 are allowed")]
    NameTooLong(usize),

    #[error("Name prefix is {0} bytes long, at most 255 are allowed")]
    PrefixTooLong(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let error = CommandError::Unsupported(String::from("x"));
        assert_eq!(format!("{}", error), "Unsupported command: x");
    }

    #[test]
    fn test_usage_display_is_the_usage_line() {
        let error = CommandError::Usage("Probe Usage: p");
        assert_eq!(format!("{}", error), "Probe Usage: p");
    }
}
