//! MLME service messages.

use super::security::{emit_tail, tail_len};
use super::{
    AddressMode, CommandId, Error, FullAddress, MacStatus, PanDescriptor, PanDescriptorList,
    PibAttribute, Result, SecuritySpec, WireCommand,
};

/// Maximum PIB attribute value accepted by a set request.
pub const MAX_ATTRIBUTE_LEN: usize = 122;

/// The kind of scan performed by a scan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanType {
    /// Energy detect scan.
    Energy,
    /// Active scan, soliciting beacons.
    Active,
    /// Passive scan, listening for beacons.
    Passive,
    /// Orphan scan, soliciting a coordinator realignment.
    Orphan,
    /// A scan type byte outside the known set.
    Unknown,
}

impl From<u8> for ScanType {
    fn from(value: u8) -> Self {
        match value {
            0x00 => Self::Energy,
            0x01 => Self::Active,
            0x02 => Self::Passive,
            0x03 => Self::Orphan,
            _ => Self::Unknown,
        }
    }
}

impl From<ScanType> for u8 {
    fn from(scan_type: ScanType) -> u8 {
        match scan_type {
            ScanType::Energy => 0x00,
            ScanType::Active => 0x01,
            ScanType::Passive => 0x02,
            ScanType::Orphan => 0x03,
            ScanType::Unknown => 0x00,
        }
    }
}

/// An MLME-ASSOCIATE request: join a PAN through a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociateRequest {
    /// Channel the coordinator operates on.
    pub logical_channel: u8,
    /// Address of the coordinator.
    pub dst: FullAddress,
    /// Capability information of this device.
    pub capability_info: u8,
    /// Security to apply to the association command.
    pub security: Option<SecuritySpec>,
}

impl WireCommand for AssociateRequest {
    const COMMAND: CommandId = CommandId::MlmeAssociateRequest;

    fn buffer_len(&self) -> usize {
        2 + FullAddress::LEN + tail_len(self.security.as_ref())
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.logical_channel;
        self.dst.emit(&mut buffer[1..12]);
        buffer[12] = self.capability_info;
        emit_tail(self.security.as_ref(), &mut buffer[13..]);
    }
}

/// An MLME-ASSOCIATE response: answer a device's association attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociateResponse {
    /// Extended address of the associating device.
    pub device_address: [u8; 8],
    /// Short address assigned to the device.
    pub assoc_short_address: u16,
    /// Association status handed back to the device.
    pub status: u8,
    /// Security to apply to the response command.
    pub security: Option<SecuritySpec>,
}

impl WireCommand for AssociateResponse {
    const COMMAND: CommandId = CommandId::MlmeAssociateResponse;

    fn buffer_len(&self) -> usize {
        11 + tail_len(self.security.as_ref())
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[..8].copy_from_slice(&self.device_address);
        buffer[8..10].copy_from_slice(&self.assoc_short_address.to_le_bytes());
        buffer[10] = self.status;
        emit_tail(self.security.as_ref(), &mut buffer[11..]);
    }
}

/// An MLME-DISASSOCIATE request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisassociateRequest {
    /// Address of the device to disassociate from or to evict.
    pub device_address: FullAddress,
    /// Reason communicated to the peer.
    pub reason: u8,
    /// Send the notification indirectly, fetched by the peer's poll.
    pub tx_indirect: bool,
    /// Security to apply to the notification command.
    pub security: Option<SecuritySpec>,
}

impl WireCommand for DisassociateRequest {
    const COMMAND: CommandId = CommandId::MlmeDisassociateRequest;

    fn buffer_len(&self) -> usize {
        FullAddress::LEN + 2 + tail_len(self.security.as_ref())
    }

    fn emit(&self, buffer: &mut [u8]) {
        self.device_address.emit(&mut buffer[..11]);
        buffer[11] = self.reason;
        buffer[12] = self.tx_indirect as u8;
        emit_tail(self.security.as_ref(), &mut buffer[13..]);
    }
}

/// An MLME-GET request: read one PIB attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetRequest {
    /// Attribute to read.
    pub attribute: PibAttribute,
    /// Index within an attribute table, zero otherwise.
    pub attribute_index: u8,
}

impl WireCommand for GetRequest {
    const COMMAND: CommandId = CommandId::MlmeGetRequest;

    fn buffer_len(&self) -> usize {
        2
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = u8::from(self.attribute);
        buffer[1] = self.attribute_index;
    }
}

/// An MLME-SET request: write one PIB attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRequest<'p> {
    /// Attribute to write.
    pub attribute: PibAttribute,
    /// Index within an attribute table, zero otherwise.
    pub attribute_index: u8,
    /// Attribute value, at most [`MAX_ATTRIBUTE_LEN`] bytes.
    pub value: &'p [u8],
}

impl WireCommand for SetRequest<'_> {
    const COMMAND: CommandId = CommandId::MlmeSetRequest;

    fn buffer_len(&self) -> usize {
        3 + self.value.len()
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = u8::from(self.attribute);
        buffer[1] = self.attribute_index;
        buffer[2] = self.value.len() as u8;
        buffer[3..3 + self.value.len()].copy_from_slice(self.value);
    }
}

/// An MLME-RESET request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetRequest {
    /// Also reset the PIB to its defaults.
    pub set_default_pib: bool,
}

impl WireCommand for ResetRequest {
    const COMMAND: CommandId = CommandId::MlmeResetRequest;

    fn buffer_len(&self) -> usize {
        1
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.set_default_pib as u8;
    }
}

/// An MLME-RX-ENABLE request: enable the receiver for a bounded time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RxEnableRequest {
    /// Defer the enable to the next superframe if it is too late for this
    /// one.
    pub defer_permit: bool,
    /// When to enable the receiver, in symbols from the superframe start.
    pub rx_on_time: u32,
    /// How long to keep the receiver enabled, in symbols.
    pub rx_on_duration: u32,
}

impl WireCommand for RxEnableRequest {
    const COMMAND: CommandId = CommandId::MlmeRxEnableRequest;

    fn buffer_len(&self) -> usize {
        9
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.defer_permit as u8;
        buffer[1..5].copy_from_slice(&self.rx_on_time.to_le_bytes());
        buffer[5..9].copy_from_slice(&self.rx_on_duration.to_le_bytes());
    }
}

/// An MLME-SCAN request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRequest {
    /// The kind of scan to perform.
    pub scan_type: ScanType,
    /// Channel bitmap, bit n enabling channel n.
    pub scan_channels: u32,
    /// Time to spend on each channel, as an exponent.
    pub scan_duration: u8,
    /// Security to apply to scan-related commands.
    pub security: Option<SecuritySpec>,
}

impl WireCommand for ScanRequest {
    const COMMAND: CommandId = CommandId::MlmeScanRequest;

    fn buffer_len(&self) -> usize {
        6 + tail_len(self.security.as_ref())
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = u8::from(self.scan_type);
        buffer[1..5].copy_from_slice(&self.scan_channels.to_le_bytes());
        buffer[5] = self.scan_duration;
        emit_tail(self.security.as_ref(), &mut buffer[6..]);
    }
}

/// An MLME-START request: begin operating as a coordinator.
///
/// Carries two independent security tails; each collapses separately, so
/// the beacon security tail has no fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartRequest {
    /// PAN identifier to operate under.
    pub pan_id: u16,
    /// Channel to operate on.
    pub logical_channel: u8,
    /// Beacon interval, as an exponent; 15 disables beacons.
    pub beacon_order: u8,
    /// Superframe duration, as an exponent.
    pub superframe_order: u8,
    /// Operate as the PAN coordinator.
    pub pan_coordinator: bool,
    /// Use battery life extension mode.
    pub battery_life_extension: bool,
    /// Transmit a coordinator realignment before the new configuration.
    pub coord_realignment: bool,
    /// Security to apply to the coordinator realignment command.
    pub coord_realign_security: Option<SecuritySpec>,
    /// Security to apply to transmitted beacons.
    pub beacon_security: Option<SecuritySpec>,
}

impl WireCommand for StartRequest {
    const COMMAND: CommandId = CommandId::MlmeStartRequest;

    fn buffer_len(&self) -> usize {
        8 + tail_len(self.coord_realign_security.as_ref())
            + tail_len(self.beacon_security.as_ref())
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[..2].copy_from_slice(&self.pan_id.to_le_bytes());
        buffer[2] = self.logical_channel;
        buffer[3] = self.beacon_order;
        buffer[4] = self.superframe_order;
        buffer[5] = self.pan_coordinator as u8;
        buffer[6] = self.battery_life_extension as u8;
        buffer[7] = self.coord_realignment as u8;
        let written = emit_tail(self.coord_realign_security.as_ref(), &mut buffer[8..]);
        emit_tail(self.beacon_security.as_ref(), &mut buffer[8 + written..]);
    }
}

/// An MLME-POLL request: fetch pending data from a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollRequest {
    /// Address of the coordinator to poll.
    pub coord_address: FullAddress,
    /// Polling interval in 0.1 second steps, on hardware that polls
    /// autonomously. Zero polls once; 0xffff stops polling.
    pub interval: Option<u16>,
    /// Security to apply to the data request command.
    pub security: Option<SecuritySpec>,
}

impl WireCommand for PollRequest {
    const COMMAND: CommandId = CommandId::MlmePollRequest;

    fn buffer_len(&self) -> usize {
        FullAddress::LEN
            + if self.interval.is_some() { 2 } else { 0 }
            + tail_len(self.security.as_ref())
    }

    fn emit(&self, buffer: &mut [u8]) {
        self.coord_address.emit(&mut buffer[..11]);
        let mut offset = 11;
        if let Some(interval) = self.interval {
            buffer[11..13].copy_from_slice(&interval.to_le_bytes());
            offset += 2;
        }
        emit_tail(self.security.as_ref(), &mut buffer[offset..]);
    }
}

/// An MLME-ORPHAN response: realign an orphaned device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrphanResponse {
    /// Extended address of the orphaned device.
    pub orphan_address: [u8; 8],
    /// Short address the device had been assigned.
    pub short_address: u16,
    /// The device is still a member of this PAN.
    pub associated_member: bool,
    /// Security to apply to the realignment command.
    pub security: Option<SecuritySpec>,
}

impl WireCommand for OrphanResponse {
    const COMMAND: CommandId = CommandId::MlmeOrphanResponse;

    fn buffer_len(&self) -> usize {
        11 + tail_len(self.security.as_ref())
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[..8].copy_from_slice(&self.orphan_address);
        buffer[8..10].copy_from_slice(&self.short_address.to_le_bytes());
        buffer[10] = self.associated_member as u8;
        emit_tail(self.security.as_ref(), &mut buffer[11..]);
    }
}

/// A reader for confirms that carry nothing but a status byte.
///
/// Covers the MLME-SET, MLME-RESET, MLME-RX-ENABLE, MLME-START and
/// MLME-POLL confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> StatusConfirm<T> {
    /// Create a new [`StatusConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if confirm.buffer.as_ref().is_empty() {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Create a new [`StatusConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the status of the confirmed request.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }
}

/// A reader for an MLME-GET confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> GetConfirm<T> {
    /// Create a new [`GetConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the value length it
    /// announces.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if !confirm.check_len() {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Returns `false` if the buffer is too short to contain the confirm.
    pub fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();

        buffer.len() >= 4 && buffer.len() >= 4 + buffer[3] as usize
    }

    /// Create a new [`GetConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the status of the read.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the raw attribute identifier the confirm reports on.
    pub fn attribute(&self) -> u8 {
        self.buffer.as_ref()[1]
    }

    /// Return the attribute index.
    pub fn attribute_index(&self) -> u8 {
        self.buffer.as_ref()[2]
    }

    /// Return the attribute value. Meaningful only on success.
    pub fn value(&self) -> &[u8] {
        let length = self.buffer.as_ref()[3] as usize;
        &self.buffer.as_ref()[4..4 + length]
    }
}

/// A reader for an MLME-ASSOCIATE indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociateIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> AssociateIndication<T> {
    /// Create a new [`AssociateIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if indication.buffer.as_ref().len() < 9 {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Create a new [`AssociateIndication`] reader without checking the
    /// length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the extended address of the associating device.
    pub fn device_address(&self) -> [u8; 8] {
        let mut address = [0; 8];
        address.copy_from_slice(&self.buffer.as_ref()[..8]);
        address
    }

    /// Return the capability information of the associating device.
    pub fn capability_info(&self) -> u8 {
        self.buffer.as_ref()[8]
    }

    /// Return the security specification of the association command.
    pub fn security(&self) -> Result<SecuritySpec> {
        SecuritySpec::parse(&self.buffer.as_ref()[9..])
    }
}

/// A reader for an MLME-ASSOCIATE confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociateConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> AssociateConfirm<T> {
    /// Create a new [`AssociateConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if confirm.buffer.as_ref().len() < 3 {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Create a new [`AssociateConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the short address assigned by the coordinator.
    pub fn assoc_short_address(&self) -> u16 {
        let buffer = self.buffer.as_ref();
        u16::from_le_bytes([buffer[0], buffer[1]])
    }

    /// Return the association status.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[2])
    }

    /// Return the security specification of the response command.
    pub fn security(&self) -> Result<SecuritySpec> {
        SecuritySpec::parse(&self.buffer.as_ref()[3..])
    }
}

/// A reader for an MLME-DISASSOCIATE indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisassociateIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> DisassociateIndication<T> {
    /// Create a new [`DisassociateIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if indication.buffer.as_ref().len() < 9 {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Create a new [`DisassociateIndication`] reader without checking the
    /// length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the extended address of the disassociating device.
    pub fn device_address(&self) -> [u8; 8] {
        let mut address = [0; 8];
        address.copy_from_slice(&self.buffer.as_ref()[..8]);
        address
    }

    /// Return the disassociation reason.
    pub fn reason(&self) -> u8 {
        self.buffer.as_ref()[8]
    }

    /// Return the security specification of the notification command.
    pub fn security(&self) -> Result<SecuritySpec> {
        SecuritySpec::parse(&self.buffer.as_ref()[9..])
    }
}

/// A reader for an MLME-DISASSOCIATE confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisassociateConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> DisassociateConfirm<T> {
    /// Create a new [`DisassociateConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if confirm.buffer.as_ref().len() < 1 + FullAddress::LEN {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Create a new [`DisassociateConfirm`] reader without checking the
    /// length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the disassociation status.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the address of the device the notification was sent to.
    pub fn device_address(&self) -> FullAddress {
        FullAddress::parse(&self.buffer.as_ref()[1..]).unwrap_or_default()
    }
}

/// A reader for an MLME-SCAN confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> ScanConfirm<T> {
    /// Payload offset of the result list.
    pub const RESULT_LIST_OFFSET: usize = 7;

    /// Create a new [`ScanConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the header.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if confirm.buffer.as_ref().len() < Self::RESULT_LIST_OFFSET {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Create a new [`ScanConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the scan status.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the kind of scan the confirm reports on.
    pub fn scan_type(&self) -> ScanType {
        ScanType::from(self.buffer.as_ref()[1])
    }

    /// Return the bitmap of channels the scan did not reach.
    pub fn unscanned_channels(&self) -> u32 {
        let buffer = self.buffer.as_ref();
        u32::from_le_bytes([buffer[2], buffer[3], buffer[4], buffer[5]])
    }

    /// Return the number of entries in the result list.
    pub fn result_list_size(&self) -> u8 {
        self.buffer.as_ref()[6]
    }

    /// Return the raw result list bytes.
    pub fn result_list(&self) -> &[u8] {
        &self.buffer.as_ref()[Self::RESULT_LIST_OFFSET..]
    }

    /// Return the energy levels of an energy detect scan.
    pub fn energy_detect_list(&self) -> &[u8] {
        let size = self.result_list_size() as usize;
        let list = self.result_list();
        &list[..size.min(list.len())]
    }

    /// Return an iterator over the PAN descriptors of an active or passive
    /// scan.
    pub fn pan_descriptors(&self) -> PanDescriptorList<'_> {
        PanDescriptorList::new(self.result_list(), self.result_list_size())
    }
}

/// A reader for an MLME-ORPHAN indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrphanIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> OrphanIndication<T> {
    /// Create a new [`OrphanIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if indication.buffer.as_ref().len() < 8 {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Create a new [`OrphanIndication`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the extended address of the orphaned device.
    pub fn orphan_address(&self) -> [u8; 8] {
        let mut address = [0; 8];
        address.copy_from_slice(&self.buffer.as_ref()[..8]);
        address
    }

    /// Return the security specification of the orphan notification.
    pub fn security(&self) -> Result<SecuritySpec> {
        SecuritySpec::parse(&self.buffer.as_ref()[8..])
    }
}

/// A reader for an MLME-COMM-STATUS indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommStatusIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> CommStatusIndication<T> {
    /// Create a new [`CommStatusIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if indication.buffer.as_ref().len() < 21 {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Create a new [`CommStatusIndication`] reader without checking the
    /// length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the PAN identifier of the frame the status reports on.
    pub fn pan_id(&self) -> u16 {
        let buffer = self.buffer.as_ref();
        u16::from_le_bytes([buffer[0], buffer[1]])
    }

    /// Return the source addressing mode.
    pub fn src_addr_mode(&self) -> AddressMode {
        AddressMode::from(self.buffer.as_ref()[2])
    }

    /// Return the source address bytes.
    pub fn src_address(&self) -> [u8; 8] {
        let mut address = [0; 8];
        address.copy_from_slice(&self.buffer.as_ref()[3..11]);
        address
    }

    /// Return the destination addressing mode.
    pub fn dst_addr_mode(&self) -> AddressMode {
        AddressMode::from(self.buffer.as_ref()[11])
    }

    /// Return the destination address bytes.
    pub fn dst_address(&self) -> [u8; 8] {
        let mut address = [0; 8];
        address.copy_from_slice(&self.buffer.as_ref()[12..20]);
        address
    }

    /// Return the reported status.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[20])
    }

    /// Return the security specification of the reported frame.
    pub fn security(&self) -> Result<SecuritySpec> {
        SecuritySpec::parse(&self.buffer.as_ref()[21..])
    }
}

/// A reader for an MLME-SYNC-LOSS indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncLossIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> SyncLossIndication<T> {
    /// Create a new [`SyncLossIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if indication.buffer.as_ref().len() < 4 {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Create a new [`SyncLossIndication`] reader without checking the
    /// length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the reason synchronization was lost.
    pub fn loss_reason(&self) -> u8 {
        self.buffer.as_ref()[0]
    }

    /// Return the PAN identifier the device was synchronized to.
    pub fn pan_id(&self) -> u16 {
        let buffer = self.buffer.as_ref();
        u16::from_le_bytes([buffer[1], buffer[2]])
    }

    /// Return the channel the device was synchronized on.
    pub fn logical_channel(&self) -> u8 {
        self.buffer.as_ref()[3]
    }

    /// Return the security specification of the realignment command.
    pub fn security(&self) -> Result<SecuritySpec> {
        SecuritySpec::parse(&self.buffer.as_ref()[4..])
    }
}

/// A reader for an MLME-BEACON-NOTIFY indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeaconNotifyIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> BeaconNotifyIndication<T> {
    /// Create a new [`BeaconNotifyIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the embedded PAN
    /// descriptor.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if !indication.check_len() {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Returns `false` if the buffer is too short to contain the
    /// indication.
    pub fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();

        buffer.len() > 1 && PanDescriptor::new(&buffer[1..]).is_ok()
    }

    /// Create a new [`BeaconNotifyIndication`] reader without checking the
    /// length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the beacon sequence number.
    pub fn bsn(&self) -> u8 {
        self.buffer.as_ref()[0]
    }

    /// Return the descriptor of the PAN the beacon was received from.
    pub fn pan_descriptor(&self) -> Result<PanDescriptor<&[u8]>> {
        PanDescriptor::new(&self.buffer.as_ref()[1..])
    }

    /// Return the beacon payload.
    pub fn sdu(&self) -> Result<&[u8]> {
        let buffer = self.buffer.as_ref();
        // pending-address specification byte follows the descriptor
        let mut offset = 1 + self.pan_descriptor()?.len();
        let pend_addr_spec = *buffer.get(offset).ok_or(Error)?;
        let short_count = (pend_addr_spec & 0x07) as usize;
        let extended_count = ((pend_addr_spec >> 4) & 0x07) as usize;
        offset += 1 + 2 * short_count + 8 * extended_count;

        let sdu_length = *buffer.get(offset).ok_or(Error)? as usize;
        offset += 1;

        if buffer.len() < offset + sdu_length {
            return Err(Error);
        }

        Ok(&buffer[offset..offset + sdu_length])
    }
}

/// A reader for an MLME-POLL indication, reported by hardware that answers
/// polls autonomously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> PollIndication<T> {
    /// Create a new [`PollIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if indication.buffer.as_ref().len() < FullAddress::LEN + 2 {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Create a new [`PollIndication`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the source address of the poll.
    pub fn src(&self) -> FullAddress {
        FullAddress::parse(self.buffer.as_ref()).unwrap_or_default()
    }

    /// Return the link quality measured during reception.
    pub fn lqi(&self) -> u8 {
        self.buffer.as_ref()[11]
    }

    /// Return the sequence number of the poll command.
    pub fn dsn(&self) -> u8 {
        self.buffer.as_ref()[12]
    }
}
