//! Message envelope readers and writers.

use super::{CommandId, Error, Result};

/// Length of the message header: command identifier plus payload length.
pub const HEADER_LEN: usize = 2;

/// Maximum payload length representable by the one-byte length field.
pub const MAX_PAYLOAD_LEN: usize = 254;

/// Maximum total length of a message on the wire.
pub const MAX_MESSAGE_LEN: usize = HEADER_LEN + MAX_PAYLOAD_LEN;

/// A reader/writer for the message envelope.
///
/// Every message is `[command][length][payload...]` with `length` counting
/// only the payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> Message<T> {
    /// Create a new [`Message`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short to contain the header
    /// and the payload the header announces.
    pub fn new(buffer: T) -> Result<Self> {
        let message = Self::new_unchecked(buffer);

        if !message.check_len() {
            return Err(Error);
        }

        Ok(message)
    }

    /// Returns `false` if the buffer is too short to contain the message.
    pub fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();

        if buffer.len() < HEADER_LEN {
            return false;
        }

        buffer.len() >= HEADER_LEN + buffer[1] as usize
    }

    /// Create a new [`Message`] reader/writer without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the raw command byte.
    pub fn command(&self) -> u8 {
        self.buffer.as_ref()[0]
    }

    /// Return the decoded command identifier.
    pub fn command_id(&self) -> Result<CommandId> {
        CommandId::try_from(self.command())
    }

    /// Return the payload length in octets.
    pub fn length(&self) -> u8 {
        self.buffer.as_ref()[1]
    }

    /// Return the payload of the message.
    pub fn payload(&self) -> &[u8] {
        let length = self.length() as usize;
        &self.buffer.as_ref()[HEADER_LEN..HEADER_LEN + length]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> Message<T> {
    /// Set the command identifier.
    pub fn set_command_id(&mut self, command: CommandId) {
        self.buffer.as_mut()[0] = command as u8;
    }

    /// Set the payload length.
    pub fn set_length(&mut self, length: u8) {
        self.buffer.as_mut()[1] = length;
    }

    /// Return a mutable view of the payload.
    pub fn payload_mut(&mut self) -> &mut [u8] {
        let length = self.buffer.as_ref()[1] as usize;
        &mut self.buffer.as_mut()[HEADER_LEN..HEADER_LEN + length]
    }
}

/// A request that can be encoded into a message payload.
pub trait WireCommand {
    /// The command identifier of this request.
    const COMMAND: CommandId;

    /// Return the payload length when emitted into a buffer.
    fn buffer_len(&self) -> usize;

    /// Emit the payload into a buffer of at least [`buffer_len`] bytes.
    ///
    /// [`buffer_len`]: WireCommand::buffer_len
    fn emit(&self, buffer: &mut [u8]);
}

/// Owned storage for one message.
///
/// Used for outbound commands and for inbound messages received from the
/// transport. The stored message is self-describing through its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBuffer {
    buffer: [u8; MAX_MESSAGE_LEN],
}

impl MessageBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: [0; MAX_MESSAGE_LEN],
        }
    }

    /// Encode a request, envelope included.
    pub fn encode<C: WireCommand>(command: &C) -> Self {
        let mut message = Self::new();
        let length = command.buffer_len();
        message.buffer[0] = C::COMMAND as u8;
        message.buffer[1] = length as u8;
        command.emit(&mut message.buffer[HEADER_LEN..HEADER_LEN + length]);
        message
    }

    /// Return the raw command byte.
    pub fn command(&self) -> u8 {
        self.buffer[0]
    }

    /// Return the decoded command identifier.
    pub fn command_id(&self) -> Result<CommandId> {
        CommandId::try_from(self.buffer[0])
    }

    /// Return the payload length in octets.
    pub fn length(&self) -> u8 {
        self.buffer[1]
    }

    /// Set the payload length.
    pub fn set_length(&mut self, length: u8) {
        self.buffer[1] = length;
    }

    /// Return the payload of the stored message.
    pub fn payload(&self) -> &[u8] {
        &self.buffer[HEADER_LEN..HEADER_LEN + self.buffer[1] as usize]
    }

    /// Return a mutable view of the payload.
    pub fn payload_mut(&mut self) -> &mut [u8] {
        let length = self.buffer[1] as usize;
        &mut self.buffer[HEADER_LEN..HEADER_LEN + length]
    }

    /// Return the stored message, envelope included.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[..HEADER_LEN + self.buffer[1] as usize]
    }

    /// Return the whole backing storage for the transport to fill.
    pub fn storage_mut(&mut self) -> &mut [u8; MAX_MESSAGE_LEN] {
        &mut self.buffer
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for MessageBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
