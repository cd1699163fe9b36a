//! MCPS and PCPS data service messages.

use bitflags::bitflags;

use super::security::{emit_tail, tail_len};
use super::{
    AddressMode, CommandId, Error, FullAddress, MacStatus, Result, SecuritySpec, WireCommand,
};

/// Maximum MSDU payload accepted by a data request.
pub const MAX_MSDU_LEN: usize = 114;

/// Maximum PSDU accepted by a raw PHY data request.
pub const MAX_PSDU_LEN: usize = 127;

bitflags! {
    /// Transmission options of a data request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TxOptions: u8 {
        /// Request an acknowledgment from the peer.
        const ACK_REQUESTED = 0x01;
        /// Transmit in the guaranteed time slot.
        const GTS = 0x02;
        /// Queue for indirect transmission, fetched by the peer's poll.
        const INDIRECT = 0x04;
    }
}

/// An MCPS-DATA request: transmit one MSDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRequest<'p> {
    /// Source addressing mode.
    pub src_addr_mode: AddressMode,
    /// Destination address.
    pub dst: FullAddress,
    /// Handle identifying this MSDU in the confirm.
    pub msdu_handle: u8,
    /// Transmission options.
    pub tx_options: TxOptions,
    /// The MSDU to transmit, at most [`MAX_MSDU_LEN`] bytes.
    pub msdu: &'p [u8],
    /// Security to apply to the frame.
    pub security: Option<SecuritySpec>,
}

impl WireCommand for DataRequest<'_> {
    const COMMAND: CommandId = CommandId::McpsDataRequest;

    fn buffer_len(&self) -> usize {
        1 + FullAddress::LEN + 3 + self.msdu.len() + tail_len(self.security.as_ref())
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = u8::from(self.src_addr_mode);
        self.dst.emit(&mut buffer[1..12]);
        buffer[12] = self.msdu.len() as u8;
        buffer[13] = self.msdu_handle;
        buffer[14] = self.tx_options.bits();
        buffer[15..15 + self.msdu.len()].copy_from_slice(self.msdu);
        emit_tail(self.security.as_ref(), &mut buffer[15 + self.msdu.len()..]);
    }
}

/// A PCPS-DATA request: transmit one raw PSDU, bypassing the MAC.
///
/// Only supported by hardware revisions that filter in hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhyDataRequest<'p> {
    /// Handle identifying this PSDU in the confirm.
    pub psdu_handle: u8,
    /// Transmission options.
    pub tx_opts: u8,
    /// The PSDU to transmit, at most [`MAX_PSDU_LEN`] bytes.
    pub psdu: &'p [u8],
}

impl WireCommand for PhyDataRequest<'_> {
    const COMMAND: CommandId = CommandId::PcpsDataRequest;

    fn buffer_len(&self) -> usize {
        3 + self.psdu.len()
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.psdu_handle;
        buffer[1] = self.tx_opts;
        buffer[2] = self.psdu.len() as u8;
        buffer[3..3 + self.psdu.len()].copy_from_slice(self.psdu);
    }
}

/// An MCPS-PURGE request: drop a queued indirect MSDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeRequest {
    /// Handle of the MSDU to purge.
    pub msdu_handle: u8,
}

impl WireCommand for PurgeRequest {
    const COMMAND: CommandId = CommandId::McpsPurgeRequest;

    fn buffer_len(&self) -> usize {
        1
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.msdu_handle;
    }
}

/// A reader for an MCPS-DATA indication: a received data frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> DataIndication<T> {
    /// Payload offset of the MSDU bytes.
    const MSDU_OFFSET: usize = 2 * FullAddress::LEN + 3 + 4;

    /// Create a new [`DataIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the fixed fields and
    /// the MSDU length it announces.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if !indication.check_len() {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Returns `false` if the buffer is too short to contain the indication.
    pub fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();

        if buffer.len() < Self::MSDU_OFFSET {
            return false;
        }

        buffer.len() >= Self::MSDU_OFFSET + buffer[22] as usize
    }

    /// Create a new [`DataIndication`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the source address of the frame.
    pub fn src(&self) -> FullAddress {
        FullAddress::parse(self.buffer.as_ref()).unwrap_or_default()
    }

    /// Return the destination address of the frame.
    pub fn dst(&self) -> FullAddress {
        FullAddress::parse(&self.buffer.as_ref()[FullAddress::LEN..]).unwrap_or_default()
    }

    /// Return the length of the MSDU in octets.
    pub fn msdu_length(&self) -> u8 {
        self.buffer.as_ref()[22]
    }

    /// Return the link quality measured during reception.
    pub fn mpdu_link_quality(&self) -> u8 {
        self.buffer.as_ref()[23]
    }

    /// Return the sequence number of the received frame.
    pub fn dsn(&self) -> u8 {
        self.buffer.as_ref()[24]
    }

    /// Return the reception timestamp, in symbols.
    pub fn timestamp(&self) -> u32 {
        let buffer = self.buffer.as_ref();
        u32::from_le_bytes([buffer[25], buffer[26], buffer[27], buffer[28]])
    }

    /// Return the received MSDU.
    pub fn msdu(&self) -> &[u8] {
        let length = self.msdu_length() as usize;
        &self.buffer.as_ref()[Self::MSDU_OFFSET..Self::MSDU_OFFSET + length]
    }

    /// Return the security specification the frame was secured with.
    pub fn security(&self) -> Result<SecuritySpec> {
        let offset = Self::MSDU_OFFSET + self.msdu_length() as usize;
        SecuritySpec::parse(&self.buffer.as_ref()[offset.min(self.buffer.as_ref().len())..])
    }
}

/// A reader for an MCPS-DATA confirm: the outcome of a data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> DataConfirm<T> {
    /// Create a new [`DataConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if !confirm.check_len() {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Returns `false` if the buffer is too short to contain the confirm.
    pub fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= 6
    }

    /// Create a new [`DataConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the handle of the MSDU this confirm reports on.
    pub fn msdu_handle(&self) -> u8 {
        self.buffer.as_ref()[0]
    }

    /// Return the transmission timestamp, in symbols.
    pub fn timestamp(&self) -> u32 {
        let buffer = self.buffer.as_ref();
        u32::from_le_bytes([buffer[1], buffer[2], buffer[3], buffer[4]])
    }

    /// Return the transmission status.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[5])
    }
}

/// A reader for an MCPS-PURGE confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> PurgeConfirm<T> {
    /// Create a new [`PurgeConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if confirm.buffer.as_ref().len() < 2 {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Create a new [`PurgeConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the handle of the purged MSDU.
    pub fn msdu_handle(&self) -> u8 {
        self.buffer.as_ref()[0]
    }

    /// Return the purge status.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[1])
    }
}

/// A reader for a PCPS-DATA indication: a received raw PSDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhyDataIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> PhyDataIndication<T> {
    /// Create a new [`PhyDataIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the PSDU length it
    /// announces.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if !indication.check_len() {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Returns `false` if the buffer is too short to contain the indication.
    pub fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();

        buffer.len() >= 3 && buffer.len() >= 3 + buffer[2] as usize
    }

    /// Create a new [`PhyDataIndication`] reader without checking the
    /// length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the carrier sense value measured during reception.
    pub fn cs(&self) -> u8 {
        self.buffer.as_ref()[0]
    }

    /// Return the energy detect value measured during reception.
    pub fn ed(&self) -> u8 {
        self.buffer.as_ref()[1]
    }

    /// Return the received PSDU.
    pub fn psdu(&self) -> &[u8] {
        let length = self.buffer.as_ref()[2] as usize;
        &self.buffer.as_ref()[3..3 + length]
    }
}

/// A reader for a PCPS-DATA confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhyDataConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> PhyDataConfirm<T> {
    /// Create a new [`PhyDataConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if confirm.buffer.as_ref().len() < 2 {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Create a new [`PhyDataConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the handle of the PSDU this confirm reports on.
    pub fn psdu_handle(&self) -> u8 {
        self.buffer.as_ref()[0]
    }

    /// Return the transmission status.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[1])
    }
}
