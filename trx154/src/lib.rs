//! Host-side protocol engine for an IEEE 802.15.4 radio transceiver driven
//! over a byte-stream link (SPI or UART).
//!
//! The engine encodes requests, pairs synchronous requests with their
//! confirms, and routes asynchronous indications to registered callbacks.
//! It also carries the host-side correctness workarounds required by
//! first-generation hardware ([`HardwareVariant::V1`]): destination address
//! filtering of data indications, LQI filtering of scan results and
//! capture of the short address assigned during association.
//!
//! One [`Device`] exists per physical radio link and owns everything the
//! engine needs: the transport, the cached addresses, the blacklist and
//! the callback table. The engine performs no locking of its own; in
//! multitask deployments the caller must serialize access to a device and
//! its transport.
#![no_std]
#![deny(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

pub(crate) mod utils;

pub use trx154_wire as wire;

mod blacklist;
pub use blacklist::{Blacklist, MAC_BLACKLIST_SIZE};

mod callbacks;
pub use callbacks::*;

mod device;
pub use device::{Device, HardwareVariant};

mod dispatch;

mod transport;
pub use transport::{Transport, TransportError};

mod mcps;
pub use mcps::PurgeResult;

mod mlme;
pub use mlme::GetResult;

mod hwme;
pub use hwme::{HaesResult, HwGetResult};

mod tdme;
pub use tdme::{check_pib_attribute, GetSfrResult, LoTlkResult, TxPktResult, TxPowerResult};

/// Engine-level error propagated to the caller.
///
/// MAC status codes reported by the radio are not errors at this level;
/// they are passed through verbatim inside the confirm results.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// Malformed caller input, or a command the engine does not know.
    InvalidArgument,
    /// The transport failed, or a response did not match the request that
    /// was issued (protocol desynchronization).
    SystemError,
    /// A fixed-capacity table is full.
    NoBuffer,
    /// The payload exceeds what the radio accepts in one frame.
    FrameTooLong,
    /// An inbound frame was rejected by host-side address filtering.
    AddressFiltered,
}

/// Outcome of dispatching one inbound message.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DispatchResult {
    /// A callback accepted the message.
    Handled,
    /// No callback accepted the message.
    NotHandled,
    /// The message was suppressed by policy before reaching any callback.
    Suppressed,
}
