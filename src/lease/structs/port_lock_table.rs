use std::collections::BTreeMap;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct PortLockTable {
    pub(crate) locks: Mutex<BTreeMap<u16, bool>>,
}
