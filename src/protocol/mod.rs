//! Wire codec for the registration protocol.
//!
//! Every frame starts with a 4 byte header followed by a payload whose layout
//! is fixed by the message type:
//!
//! | Byte | Field |
//! |------|-------|
//! | 0-1  | magic `0xC4 0x61` |
//! | 2    | sequence number |
//! | 3    | message type |
//!
//! # Message Types
//!
//! - **Register** (1): IP, port, data and service name of the advertised service
//! - **RegisterReply** (2): lifetime granted by the registry, in seconds
//! - **Fetch** (3): optional service name prefix
//! - **FetchReply** (4): list of matching (IP, port, data) entries
//! - **Unregister** (5): IP and port of the service to drop
//! - **Probe** (6): liveness check, header only
//! - **Ack** (7): acknowledgement, header only
//!
//! Replies are decoded at fixed offsets. Neither the magic nor the type byte of
//! a reply is checked: any datagram long enough for the expected layout is
//! taken at face value.

/// Enumerations for message kinds and codec errors.
pub mod enums;

/// Implementation blocks for encoding and decoding.
pub mod impls;

/// Data structures for protocol messages.
pub mod structs;

/// Protocol constants and header helpers.
#[allow(clippy::module_inception)]
pub mod protocol;
