//! Addressing fields readers and writers.

use super::{Error, Result};

/// The short address denoting a broadcast to all devices on the PAN.
pub const BROADCAST_SHORT_ADDRESS: u16 = 0xffff;

/// The short address of a device that has not been assigned one.
pub const UNASSIGNED_SHORT_ADDRESS: u16 = 0xffff;

/// Addressing mode of a protocol address field.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum AddressMode {
    /// No address present.
    Absent,
    /// 16-bit short address.
    Short,
    /// 64-bit extended address.
    Extended,
    /// A mode byte outside the known set.
    Unknown,
}

impl AddressMode {
    /// Return the size of the address in octets.
    pub fn size(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Short => 2,
            Self::Extended => 8,
            Self::Unknown => 0,
        }
    }
}

impl From<u8> for AddressMode {
    fn from(value: u8) -> Self {
        match value {
            0b00 => Self::Absent,
            0b10 => Self::Short,
            0b11 => Self::Extended,
            _ => Self::Unknown,
        }
    }
}

impl From<AddressMode> for u8 {
    fn from(mode: AddressMode) -> u8 {
        match mode {
            AddressMode::Absent => 0b00,
            AddressMode::Short => 0b10,
            AddressMode::Extended => 0b11,
            AddressMode::Unknown => 0b00,
        }
    }
}

/// A full protocol address: mode, PAN identifier and address bytes.
///
/// On the wire this is always 11 bytes: mode(1), PAN identifier(2,
/// little-endian), address(8). Short addresses occupy the first two address
/// bytes, little-endian; the remaining bytes are ignored by the radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct FullAddress {
    /// Addressing mode of `address`.
    pub mode: AddressMode,
    /// PAN identifier.
    pub pan_id: u16,
    /// Address bytes, little-endian for short addresses.
    pub address: [u8; 8],
}

impl FullAddress {
    /// The wire length of a full address.
    pub const LEN: usize = 11;

    /// Create a short address.
    pub fn short(pan_id: u16, short_address: u16) -> Self {
        let mut address = [0; 8];
        address[..2].copy_from_slice(&short_address.to_le_bytes());
        Self {
            mode: AddressMode::Short,
            pan_id,
            address,
        }
    }

    /// Create an extended address.
    pub fn extended(pan_id: u16, address: [u8; 8]) -> Self {
        Self {
            mode: AddressMode::Extended,
            pan_id,
            address,
        }
    }

    /// Parse a full address from the start of a buffer.
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < Self::LEN {
            return Err(Error);
        }

        let mut address = [0; 8];
        address.copy_from_slice(&buffer[3..11]);

        Ok(Self {
            mode: AddressMode::from(buffer[0]),
            pan_id: u16::from_le_bytes([buffer[1], buffer[2]]),
            address,
        })
    }

    /// Write the full address to the start of a buffer.
    pub fn emit(&self, buffer: &mut [u8]) {
        buffer[0] = u8::from(self.mode);
        buffer[1..3].copy_from_slice(&self.pan_id.to_le_bytes());
        buffer[3..11].copy_from_slice(&self.address);
    }

    /// Return the short address encoded in the address bytes.
    pub fn short_address(&self) -> u16 {
        u16::from_le_bytes([self.address[0], self.address[1]])
    }
}

impl Default for FullAddress {
    fn default() -> Self {
        Self {
            mode: AddressMode::Absent,
            pan_id: 0,
            address: [0; 8],
        }
    }
}

/// A bare MAC address without a PAN identifier, as stored in the blacklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct MacAddress {
    /// Addressing mode of `address`.
    pub mode: AddressMode,
    /// Address bytes, little-endian for short addresses.
    pub address: [u8; 8],
}

impl MacAddress {
    /// Create a short address.
    pub fn short(short_address: u16) -> Self {
        let mut address = [0; 8];
        address[..2].copy_from_slice(&short_address.to_le_bytes());
        Self {
            mode: AddressMode::Short,
            address,
        }
    }

    /// Create an extended address.
    pub fn extended(address: [u8; 8]) -> Self {
        Self {
            mode: AddressMode::Extended,
            address,
        }
    }
}

impl Default for MacAddress {
    fn default() -> Self {
        Self {
            mode: AddressMode::Absent,
            address: [0; 8],
        }
    }
}

impl From<FullAddress> for MacAddress {
    fn from(address: FullAddress) -> Self {
        Self {
            mode: address.mode,
            address: address.address,
        }
    }
}
