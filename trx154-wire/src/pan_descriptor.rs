//! PAN descriptor readers.

use super::{Error, FullAddress, Result, SecuritySpec};

/// A reader for one PAN descriptor inside a scan confirm or beacon-notify
/// indication.
///
/// The descriptor is 22 bytes when its security specification is collapsed
/// (security level zero) and 32 bytes otherwise. The length of every
/// descriptor therefore depends on its own content; descriptors in a list
/// must be walked front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanDescriptor<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> PanDescriptor<T> {
    /// The length of a descriptor with a collapsed security specification.
    pub const BASE_LEN: usize = 22;

    /// The additional bytes occupied by an active security specification.
    pub const SECURITY_EXT_LEN: usize = SecuritySpec::LEN - 1;

    /// Create a new [`PanDescriptor`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the descriptor,
    /// including its security specification when active.
    pub fn new(buffer: T) -> Result<Self> {
        let descriptor = Self::new_unchecked(buffer);

        if !descriptor.check_len() {
            return Err(Error);
        }

        Ok(descriptor)
    }

    /// Returns `false` if the buffer is too short to contain the descriptor.
    pub fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();

        if buffer.len() < Self::BASE_LEN {
            return false;
        }

        buffer[21] == 0 || buffer.len() >= Self::BASE_LEN + Self::SECURITY_EXT_LEN
    }

    /// Create a new [`PanDescriptor`] reader without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the length of this descriptor in octets.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        if self.buffer.as_ref()[21] == 0 {
            Self::BASE_LEN
        } else {
            Self::BASE_LEN + Self::SECURITY_EXT_LEN
        }
    }

    /// Return the address of the coordinator that sent the beacon.
    pub fn coordinator(&self) -> FullAddress {
        FullAddress::parse(self.buffer.as_ref()).unwrap_or_default()
    }

    /// Return the logical channel the beacon was received on.
    pub fn logical_channel(&self) -> u8 {
        self.buffer.as_ref()[11]
    }

    /// Return the superframe specification.
    pub fn superframe_spec(&self) -> u16 {
        let buffer = self.buffer.as_ref();
        u16::from_le_bytes([buffer[12], buffer[13]])
    }

    /// Query whether the coordinator accepts GTS requests.
    pub fn gts_permit(&self) -> bool {
        self.buffer.as_ref()[14] != 0
    }

    /// Return the link quality of the received beacon.
    pub fn link_quality(&self) -> u8 {
        self.buffer.as_ref()[15]
    }

    /// Return the timestamp of the received beacon, in symbols.
    pub fn timestamp(&self) -> u32 {
        let buffer = self.buffer.as_ref();
        u32::from_le_bytes([buffer[16], buffer[17], buffer[18], buffer[19]])
    }

    /// Query whether security processing of the beacon failed.
    pub fn security_failure(&self) -> bool {
        self.buffer.as_ref()[20] != 0
    }

    /// Return the security specification the beacon was secured with.
    pub fn security(&self) -> Result<SecuritySpec> {
        SecuritySpec::parse(&self.buffer.as_ref()[21..])
    }
}

/// An iterator over the PAN descriptors of a scan confirm result list.
///
/// Iteration stops early if a descriptor does not fit the remaining bytes,
/// so a malformed list yields only its well-formed prefix.
#[derive(Debug)]
pub struct PanDescriptorList<'b> {
    buffer: &'b [u8],
    remaining: u8,
    offset: usize,
}

impl<'b> PanDescriptorList<'b> {
    /// Create a new iterator over `count` descriptors stored in `buffer`.
    pub fn new(buffer: &'b [u8], count: u8) -> Self {
        Self {
            buffer,
            remaining: count,
            offset: 0,
        }
    }
}

impl<'b> Iterator for PanDescriptorList<'b> {
    type Item = PanDescriptor<&'b [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let descriptor = PanDescriptor::new(&self.buffer[self.offset.min(self.buffer.len())..])
            .ok()?;

        self.remaining -= 1;
        self.offset += descriptor.len();
        Some(descriptor)
    }
}
