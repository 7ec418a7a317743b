/// A parsed line of user input.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Command {
    Register { port: u16, data: u32, name: String },
    /// An empty prefix matches every service.
    Fetch { prefix: String },
    Unregister { port: u16 },
    Probe,
    Quit,
}
