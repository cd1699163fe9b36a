//! HWME hardware management messages.

use super::{CommandId, Error, HwAttribute, MacStatus, Result, WireCommand};

/// Maximum hardware attribute value accepted by a set request.
pub const MAX_HW_ATTRIBUTE_LEN: usize = 16;

/// Length of the data block carried by an HAES request and confirm.
pub const HAES_BLOCK_LEN: usize = 16;

/// An HWME-SET request: write one hardware attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwmeSetRequest<'p> {
    /// Attribute to write.
    pub attribute: HwAttribute,
    /// Attribute value, at most [`MAX_HW_ATTRIBUTE_LEN`] bytes.
    pub value: &'p [u8],
}

impl WireCommand for HwmeSetRequest<'_> {
    const COMMAND: CommandId = CommandId::HwmeSetRequest;

    fn buffer_len(&self) -> usize {
        2 + self.value.len()
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = u8::from(self.attribute);
        buffer[1] = self.value.len() as u8;
        buffer[2..2 + self.value.len()].copy_from_slice(self.value);
    }
}

/// An HWME-GET request: read one hardware attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwmeGetRequest {
    /// Attribute to read.
    pub attribute: HwAttribute,
}

impl WireCommand for HwmeGetRequest {
    const COMMAND: CommandId = CommandId::HwmeGetRequest;

    fn buffer_len(&self) -> usize {
        1
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = u8::from(self.attribute);
    }
}

/// An HWME-HAES request: run one AES block through the hardware engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HaesRequest {
    /// Encrypt or decrypt selector.
    pub mode: u8,
    /// The block to process.
    pub data: [u8; HAES_BLOCK_LEN],
}

impl WireCommand for HaesRequest {
    const COMMAND: CommandId = CommandId::HwmeHaesRequest;

    fn buffer_len(&self) -> usize {
        1 + HAES_BLOCK_LEN
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = self.mode;
        buffer[1..1 + HAES_BLOCK_LEN].copy_from_slice(&self.data);
    }
}

/// A reader for an HWME-SET confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwmeSetConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> HwmeSetConfirm<T> {
    /// Create a new [`HwmeSetConfirm`] reader from a given buffer.
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

    /// Create a new [`HwmeSetConfirm`] reader without checking the length.
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

/// A reader for an HWME-GET confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwmeGetConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> HwmeGetConfirm<T> {
    /// Create a new [`HwmeGetConfirm`] reader from a given buffer.
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

        buffer.len() >= 3 && buffer.len() >= 3 + buffer[2] as usize
    }

    /// Create a new [`HwmeGetConfirm`] reader without checking the length.
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

    /// Return the attribute value. Meaningful only on success.
    pub fn value(&self) -> &[u8] {
        let length = self.buffer.as_ref()[2] as usize;
        &self.buffer.as_ref()[3..3 + length]
    }
}

/// A reader for an HWME-HAES confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HaesConfirm<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> HaesConfirm<T> {
    /// Create a new [`HaesConfirm`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let confirm = Self::new_unchecked(buffer);

        if confirm.buffer.as_ref().len() < 1 + HAES_BLOCK_LEN {
            return Err(Error);
        }

        Ok(confirm)
    }

    /// Create a new [`HaesConfirm`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the status of the operation.
    pub fn status(&self) -> MacStatus {
        MacStatus::from(self.buffer.as_ref()[0])
    }

    /// Return the processed block.
    pub fn data(&self) -> [u8; HAES_BLOCK_LEN] {
        let mut data = [0; HAES_BLOCK_LEN];
        data.copy_from_slice(&self.buffer.as_ref()[1..1 + HAES_BLOCK_LEN]);
        data
    }
}

/// A reader for an HWME-WAKEUP indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeupIndication<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> WakeupIndication<T> {
    /// Create a new [`WakeupIndication`] reader from a given buffer.
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

    /// Create a new [`WakeupIndication`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the condition that woke the radio up.
    pub fn wakeup_condition(&self) -> u8 {
        self.buffer.as_ref()[0]
    }
}
