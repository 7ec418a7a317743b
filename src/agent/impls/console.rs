use std::fmt;
use std::io::Write;
use std::sync::Arc;
use log::debug;
use parking_lot::Mutex;
use crate::agent::structs::console::Console;

impl Console {
    pub fn stdout() -> Console
    {
        Console::from_writer(std::io::stdout())
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Console
    {
        Console {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn line(&self, text: impl AsRef<str>)
    {
        let mut writer = self.writer.lock();
        if let Err(error) = writeln!(writer, "{}", text.as_ref()).and_then(|_| writer.flush()) {
            debug!("[CONSOLE] Write failed: {error}");
        }
    }

    /// Writes `text` without a line break.
    pub fn prompt(&self, text: &str)
    {
        let mut writer = self.writer.lock();
        if let Err(error) = write!(writer, "{text}").and_then(|_| writer.flush()) {
            debug!("[CONSOLE] Write failed: {error}");
        }
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
