//! Zero-copy read and write structures for the transceiver host protocol.
//!
//! The protocol carries every exchange between the host and the radio as a
//! small binary message: a one-byte command identifier, a one-byte payload
//! length and a command-specific payload. Requests travel downstream to the
//! radio; confirms and indications travel upstream. Synchronous requests are
//! answered by a confirm whose identifier is statically derived from the
//! request identifier (see [`CommandId::sync_response`]).
//!
//! Each reader follows the same pattern:
//! - [`new`]: create a reader, validating that the buffer is long enough.
//! - [`new_unchecked`]: create a reader without validating the length.
//! - accessor methods returning the decoded fields.
//!
//! Requests are plain structs implementing [`WireCommand`], which computes
//! the exact payload length ([`buffer_len`]) and writes the payload bytes
//! ([`emit`]). [`MessageBuffer::encode`] wraps the payload in the message
//! envelope.
//!
//! ## Security tails
//!
//! Commands that carry a trailing [`SecuritySpec`] encode it conditionally:
//! an absent or zero-level specification collapses to a single zero byte,
//! shortening the message by [`SecuritySpec::LEN`]` - 1` bytes. Messages
//! with two independent tails trim each separately, so the second tail's
//! position depends on the first tail's encoded length.
//!
//! ## Reading a message
//! ```
//! # use trx154_wire::{CommandId, Message, StatusConfirm, MacStatus};
//! let bytes = [0x6d, 0x01, 0x00];
//! let message = Message::new(&bytes[..]).unwrap();
//! assert_eq!(message.command_id(), Ok(CommandId::MlmeSetConfirm));
//! let confirm = StatusConfirm::new(message.payload()).unwrap();
//! assert_eq!(confirm.status(), MacStatus::Success);
//! ```
//!
//! [`new`]: Message::new
//! [`new_unchecked`]: Message::new_unchecked
//! [`buffer_len`]: WireCommand::buffer_len
//! [`emit`]: WireCommand::emit
#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(test)]
mod tests;

mod address;
pub use address::*;

mod command;
pub use command::*;

mod message;
pub use message::*;

mod security;
pub use security::*;

mod status;
pub use status::*;

mod pan_descriptor;
pub use pan_descriptor::*;

mod pib;
pub use pib::*;

mod mcps;
pub use mcps::*;

mod mlme;
pub use mlme::*;

mod hwme;
pub use hwme::*;

mod tdme;
pub use tdme::*;

/// An error that can occur when reading or writing a wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error;

/// A type alias for `Result<T, trx154_wire::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
