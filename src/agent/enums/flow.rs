#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Flow {
    Continue,
    Quit,
}
