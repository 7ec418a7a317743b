//! Registration leases and their renewal.
//!
//! A successful register leaves behind a [`structs::registration_lease::RegistrationLease`]
//! and one [`structs::lease_manager::LeaseManager`] task per port. The task
//! sleeps until `lifetime - margin` seconds have passed, then checks the
//! [`structs::port_lock_table::PortLockTable`]:
//!
//! - port unlocked: the user unregistered it, the entry is removed and the
//!   task ends without sending anything
//! - port locked: the stored register datagram is resent verbatim and the
//!   task loops with the lifetime granted by the reply
//!
//! A renewal that gets no reply releases the port and ends the task. Quitting
//! the agent cancels any pending sleep.

pub mod enums;
pub mod impls;
pub mod structs;

#[allow(clippy::module_inception)]
pub mod lease;
