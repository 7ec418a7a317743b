use std::collections::BTreeMap;
use parking_lot::Mutex;
use crate::lease::structs::port_lock_table::PortLockTable;

impl PortLockTable {
    pub fn new() -> PortLockTable
    {
        PortLockTable {
            locks: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn acquire(&self, port: u16)
    {
        self.locks.lock().insert(port, true);
    }

    /// Marks the port unlocked. The entry stays until its lease task wakes
    /// and removes it.
    pub fn release(&self, port: u16)
    {
        if let Some(locked) = self.locks.lock().get_mut(&port) {
            *locked = false;
        }
    }

    pub fn is_locked(&self, port: u16) -> bool
    {
        self.locks.lock().get(&port).copied().unwrap_or(false)
    }

    pub fn remove(&self, port: u16) -> Option<bool>
    {
        self.locks.lock().remove(&port)
    }

    /// Checks and removes under one lock acquisition. Returns true when the
    /// port is unlocked, whether or not it had an entry. A locked port is
    /// left untouched.
    pub fn remove_if_unlocked(&self, port: u16) -> bool
    {
        let mut locks = self.locks.lock();
        if locks.get(&port).copied().unwrap_or(false) {
            return false;
        }
        locks.remove(&port);
        true
    }

    pub fn contains(&self, port: u16) -> bool
    {
        self.locks.lock().contains_key(&port)
    }

    pub fn len(&self) -> usize
    {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.locks.lock().is_empty()
    }
}
