//! TDME test and debug messages.

use super::{CommandId, Error, MacStatus, Result, WireCommand};

/// A TDME attribute settable through TDME-SET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum TdmeAttribute {
    Channel = 0x00,
    TxConfig = 0x01,
    EdConfig = 0x02,
    RxConfig = 0x03,
    Lo1Config = 0x04,
    Lo2Config = 0x05,
    AtmConfig = 0x06,
}

impl From<TdmeAttribute> for u8 {
    fn from(attribute: TdmeAttribute) -> u8 {
        attribute as u8
    }
}

/// Radio test mode selected by a TDME-TESTMODE request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum TestMode {
    Off = 0x00,
    Idle = 0x01,
    Tx = 0x02,
    Rx = 0x03,
    Ed = 0x04,
    Lo1 = 0x05,
    Lo2 = 0x06,
    Lo3 = 0x07,
}

impl From<TestMode> for u8 {
    fn from(mode: TestMode) -> u8 {
        mode as u8
    }
}

/// Payload selector of a TDME-TXPKT request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPktData<'p> {
    /// Radio-generated random payload of the given length.
    Random {
        /// Payload length in octets.
        length: u8,
    },
    /// Radio-generated sequence-number payload of the given length.
    SeqNum {
        /// Payload length in octets.
        length: u8,
    },
    /// Radio-generated counting payload of the given length.
    Count {
        /// Payload length in octets.
        length: u8,
    },
    /// Payload supplied by the host, appended to the request.
    Appended(&'p [u8]),
}

impl TxPktData<'_> {
    fn data_type(&self) -> u8 {
        match self {
            Self::Random { .. } => 0x00,
            Self::SeqNum { .. } => 0x01,
            Self::Count { .. } => 0x02,
            Self::Appended(_) => 0x03,
        }
    }

    fn length(&self) -> u8 {
        match self {
            Self::Random { length } | Self::SeqNum { length } | Self::Count { length } => *length,
            Self::Appended(data) => data.len() as u8,
        }
    }
}

/// A TDME-SETSFR request: write one special function register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetSfrRequest {
    /// Register page.
    pub page: u8,
    /// Register address within the page.
    pub address: u8,
    /// Value to write.
    pub value: u8,
}

impl WireCommand for SetSfrRequest {
    const COMMAND: CommandId = CommandId::TdmeSetSfrRequest;

    fn buffer_len(&self) -> usize {
        3
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.page;
        buffer[1] = self.address;
        buffer[2] = self.value;
    }
}

/// A TDME-GETSFR request: read one special function register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSfrRequest {
    /// Register page.
    pub page: u8,
    /// Register address within the page.
    pub address: u8,
}

impl WireCommand for GetSfrRequest {
    const COMMAND: CommandId = CommandId::TdmeGetSfrRequest;

    fn buffer_len(&self) -> usize {
        2
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.page;
        buffer[1] = self.address;
    }
}

/// A TDME-TESTMODE request: put the radio in a test mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestModeRequest {
    /// Mode to enter.
    pub mode: TestMode,
}

impl WireCommand for TestModeRequest {
    const COMMAND: CommandId = CommandId::TdmeTestModeRequest;

    fn buffer_len(&self) -> usize {
        1
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = u8::from(self.mode);
    }
}

/// A TDME-SET request: write one test attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TdmeSetRequest<'p> {
    /// Attribute to write.
    pub attribute: TdmeAttribute,
    /// Attribute value.
    pub value: &'p [u8],
}

impl WireCommand for TdmeSetRequest<'_> {
    const COMMAND: CommandId = CommandId::TdmeSetRequest;

    fn buffer_len(&self) -> usize {
        2 + self.value.len()
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = u8::from(self.attribute);
        buffer[1] = self.value.len() as u8;
        buffer[2..2 + self.value.len()].copy_from_slice(self.value);
    }
}

/// A TDME-TXPKT request: transmit one test packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxPktRequest<'p> {
    /// Sequence number of the test packet.
    pub sequence_number: u8,
    /// Payload of the test packet.
    pub data: TxPktData<'p>,
}

impl WireCommand for TxPktRequest<'_> {
    const COMMAND: CommandId = CommandId::TdmeTxPktRequest;

    fn buffer_len(&self) -> usize {
        3 + match self.data {
            TxPktData::Appended(data) => data.len(),
            _ => 0,
        }
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.data.data_type();
        buffer[1] = self.sequence_number;
        buffer[2] = self.data.length();
        if let TxPktData::Appended(data) = self.data {
            buffer[3..3 + data.len()].copy_from_slice(data);
        }
    }
}

/// A TDME-LOTLK request: run a local oscillator tuning lock test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoTlkRequest {
    /// Channel to tune to.
    pub channel: u8,
    /// Tune for reception rather than transmission.
    pub rx_txb: bool,
}

impl WireCommand for LoTlkRequest {
    const COMMAND: CommandId = CommandId::TdmeLoTlkRequest;

    fn buffer_len(&self) -> usize {
        2
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.channel;
        buffer[1] = self.rx_txb as u8;
    }
}

/// A reader for a TDME-SETSFR confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetSfrConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> SetSfrConfirm<T> {
    /// Create a new [`SetSfrConfirm`] reader from a given buffer.
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

    /// Create a new [`SetSfrConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the status of the write.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the register page the confirm reports on.
    pub fn page(&self) -> u8 {
        self.buffer.as_ref()[1]
    }

    /// Return the register address the confirm reports on.
    pub fn address(&self) -> u8 {
        self.buffer.as_ref()[2]
    }
}

/// A reader for a TDME-GETSFR confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSfrConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> GetSfrConfirm<T> {
    /// Create a new [`GetSfrConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if confirm.buffer.as_ref().len() < 4 {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Create a new [`GetSfrConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the status of the read.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the register page the confirm reports on.
    pub fn page(&self) -> u8 {
        self.buffer.as_ref()[1]
    }

    /// Return the register address the confirm reports on.
    pub fn address(&self) -> u8 {
        self.buffer.as_ref()[2]
    }

    /// Return the value read from the register.
    pub fn value(&self) -> u8 {
        self.buffer.as_ref()[3]
    }
}

/// A reader for a TDME-TESTMODE confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestModeConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> TestModeConfirm<T> {
    /// Create a new [`TestModeConfirm`] reader from a given buffer.
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

    /// Create a new [`TestModeConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the status of the mode change.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the raw test mode the confirm reports on.
    pub fn mode(&self) -> u8 {
        self.buffer.as_ref()[1]
    }
}

/// A reader for a TDME-SET confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TdmeSetConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> TdmeSetConfirm<T> {
    /// Create a new [`TdmeSetConfirm`] reader from a given buffer.
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

    /// Create a new [`TdmeSetConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the status of the write.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the raw attribute identifier the confirm reports on.
    pub fn attribute(&self) -> u8 {
        self.buffer.as_ref()[1]
    }
}

/// A reader for a TDME-TXPKT confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxPktConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> TxPktConfirm<T> {
    /// Create a new [`TxPktConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the payload length
    /// it announces.
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

        buffer.len() >= 3 && buffer.len() >= 3 + buffer[2] as usize
    }

    /// Create a new [`TxPktConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the status of the transmission.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the sequence number of the transmitted packet.
    pub fn sequence_number(&self) -> u8 {
        self.buffer.as_ref()[1]
    }

    /// Return the transmitted payload.
    pub fn data(&self) -> &[u8] {
        let length = self.buffer.as_ref()[2] as usize;
        &self.buffer.as_ref()[3..3 + length]
    }
}

/// A reader for a TDME-LOTLK confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoTlkConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> LoTlkConfirm<T> {
    /// Create a new [`LoTlkConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if confirm.buffer.as_ref().len() < 6 {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Create a new [`LoTlkConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the status of the tuning test.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the channel the test ran on.
    pub fn channel(&self) -> u8 {
        self.buffer.as_ref()[1]
    }

    /// Return whether the test tuned for reception.
    pub fn rx_txb(&self) -> bool {
        self.buffer.as_ref()[2] != 0
    }

    /// Return the frequency trim DAC value the lock settled on.
    pub fn lo_fdac(&self) -> u8 {
        self.buffer.as_ref()[3]
    }

    /// Return the amplitude setting the lock settled on.
    pub fn lo_amp(&self) -> u8 {
        self.buffer.as_ref()[4]
    }

    /// Return the transmit calibration value the lock settled on.
    pub fn lo_txcal(&self) -> u8 {
        self.buffer.as_ref()[5]
    }
}

/// A reader for a TDME-RXPKT indication: a test packet received while in a
/// receive test mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RxPktIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> RxPktIndication<T> {
    /// Create a new [`RxPktIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the payload length
    /// it announces.
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

        buffer.len() >= 5 && buffer.len() >= 5 + buffer[4] as usize
    }

    /// Create a new [`RxPktIndication`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the reception status.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the energy detect value measured during reception.
    pub fn ed(&self) -> u8 {
        self.buffer.as_ref()[1]
    }

    /// Return the carrier sense value measured during reception.
    pub fn cs(&self) -> u8 {
        self.buffer.as_ref()[2]
    }

    /// Return the frequency offset measured during reception.
    pub fn frequency_offset(&self) -> u8 {
        self.buffer.as_ref()[3]
    }

    /// Return the received payload.
    pub fn data(&self) -> &[u8] {
        let length = self.buffer.as_ref()[4] as usize;
        &self.buffer.as_ref()[5..5 + length]
    }
}

/// A reader for a TDME-EDDET indication: an energy detect threshold
/// crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdDetIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> EdDetIndication<T> {
    /// Create a new [`EdDetIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if indication.buffer.as_ref().len() < 7 {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Create a new [`EdDetIndication`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the threshold that was crossed.
    pub fn threshold(&self) -> u8 {
        self.buffer.as_ref()[0]
    }

    /// Return the energy detect value.
    pub fn ed(&self) -> u8 {
        self.buffer.as_ref()[1]
    }

    /// Return the carrier sense value.
    pub fn cs(&self) -> u8 {
        self.buffer.as_ref()[2]
    }

    /// Return the timestamp of the crossing, in symbols.
    pub fn timestamp(&self) -> u32 {
        let buffer = self.buffer.as_ref();
        u32::from_le_bytes([buffer[3], buffer[4], buffer[5], buffer[6]])
    }
}

/// A reader for a TDME-ERROR indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> ErrorIndication<T> {
    /// Create a new [`ErrorIndication`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty.
    pub fn new(buffer: T) -> Result<Self> {
        let indication = Self::new_unchecked(buffer);

        if indication.buffer.as_ref().is_empty() {
            return Err(Error);
        }

        Ok(indication)
    }

    /// Create a new [`ErrorIndication`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the error code reported by the radio.
    pub fn error_code(&self) -> u8 {
        self.buffer.as_ref()[0]
    }
}
