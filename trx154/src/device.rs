//! The per-radio device context.

use trx154_wire::{LqiMode, MessageBuffer, WireCommand, UNASSIGNED_SHORT_ADDRESS};

use crate::blacklist::Blacklist;
use crate::callbacks::Callbacks;
use crate::transport::Transport;
use crate::Error;

/// Hardware revision of the attached transceiver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareVariant {
    /// First-generation silicon. The radio reports every received frame;
    /// the host must filter by destination address and beacon LQI itself,
    /// and must track the addresses assigned to the device.
    V1,
    /// Later revisions that filter in hardware and support raw PHY access
    /// and autonomous poll handling.
    V2,
}

impl HardwareVariant {
    /// The host carries the filtering workarounds for this revision.
    pub(crate) fn host_filtering(&self) -> bool {
        matches!(self, Self::V1)
    }

    /// The radio accepts raw PHY data requests.
    pub(crate) fn phy_access(&self) -> bool {
        matches!(self, Self::V2)
    }
}

/// One managed radio.
///
/// Exactly one `Device` exists per physical radio link. It is passed by
/// mutable reference into every engine entry point and is mutated only by
/// the engine itself, in direct response to confirms and indications. The
/// engine performs no internal locking; callers running multiple tasks
/// must serialize access to the device and its transport themselves.
pub struct Device<T: Transport> {
    pub(crate) transport: T,
    pub(crate) variant: HardwareVariant,
    /// Early engineering silicon, with different transmit power tables.
    pub mac_mpw: bool,
    /// Callback table consulted by [`dispatch`](Device::dispatch).
    pub callbacks: Callbacks<T>,
    pub(crate) short_address: u16,
    pub(crate) extended_address: [u8; 8],
    pub(crate) lqi_mode: LqiMode,
    pub(crate) blacklist: Blacklist,
}

impl<T: Transport> Device<T> {
    /// Create a device context over a transport.
    ///
    /// The context starts out empty: no callbacks, an empty blacklist, no
    /// assigned short address and an all-zero extended address.
    pub fn new(transport: T, variant: HardwareVariant) -> Self {
        Self {
            transport,
            variant,
            mac_mpw: false,
            callbacks: Callbacks::default(),
            short_address: UNASSIGNED_SHORT_ADDRESS,
            extended_address: [0; 8],
            lqi_mode: LqiMode::Cs,
            blacklist: Blacklist::new(),
        }
    }

    /// Return the hardware revision this context was created for.
    pub fn variant(&self) -> HardwareVariant {
        self.variant
    }

    /// Return the short address cached from SET and associate confirms.
    pub fn short_address(&self) -> u16 {
        self.short_address
    }

    /// Return the extended address cached from SET confirms.
    pub fn extended_address(&self) -> [u8; 8] {
        self.extended_address
    }

    /// Return the LQI mode cached from HWME-SET confirms.
    pub fn lqi_mode(&self) -> LqiMode {
        self.lqi_mode
    }

    /// Consume the context and hand the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    /// Send a request that is not answered synchronously.
    pub(crate) fn request_async<C: WireCommand>(&mut self, request: &C) -> Result<(), Error> {
        let command = MessageBuffer::encode(request);
        self.transport
            .downstream(command.as_slice(), None)
            .map_err(|_| Error::SystemError)
    }

    /// Send a synchronous request and return its validated response.
    ///
    /// The response's command identifier must be the confirm statically
    /// paired with the request; anything else means the link is
    /// desynchronized and fails without recovery.
    pub(crate) fn request_sync<C: WireCommand>(
        &mut self,
        request: &C,
    ) -> Result<MessageBuffer, Error> {
        let command = MessageBuffer::encode(request);
        let mut response = MessageBuffer::new();
        self.transport
            .downstream(command.as_slice(), Some(&mut response))
            .map_err(|_| Error::SystemError)?;

        let expected = C::COMMAND.sync_response().ok_or(Error::SystemError)?;
        if response.command() != expected as u8 {
            crate::warn!("sync response does not match the request, link desynchronized");
            return Err(Error::SystemError);
        }

        Ok(response)
    }
}
