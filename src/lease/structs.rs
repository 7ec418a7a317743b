pub mod lease_manager;
pub mod port_lock_table;
pub mod registration_lease;
