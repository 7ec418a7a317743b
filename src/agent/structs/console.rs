use std::io::Write;
use std::sync::Arc;
use parking_lot::Mutex;

/// User-facing output, shared by the command loop and background tasks so
/// their lines never interleave mid-line.
#[derive(Clone)]
pub struct Console {
    pub(crate) writer: Arc<Mutex<Box<dyn Write + Send>>>,
}
