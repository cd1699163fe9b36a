//! Security specification tails.

use super::{Error, Result};

/// The security material appended to security-capable commands.
///
/// On the wire this is 11 bytes when the security level is non-zero. A zero
/// security level collapses the whole structure to a single zero byte; the
/// key material fields are not transmitted at all. Readers and writers must
/// account for both forms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct SecuritySpec {
    /// Security level, 0-7. Zero disables security.
    pub security_level: u8,
    /// Key identifier mode, 0-3.
    pub key_id_mode: u8,
    /// Key source identifier.
    pub key_source: [u8; 8],
    /// Key index within the key source.
    pub key_index: u8,
}

impl SecuritySpec {
    /// The wire length of an active security specification.
    pub const LEN: usize = 11;

    /// Query whether security is enabled.
    pub fn is_active(&self) -> bool {
        self.security_level != 0
    }

    /// Parse a security specification from the start of a buffer.
    ///
    /// A leading zero byte decodes as the collapsed, inactive form
    /// regardless of what follows it.
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        match buffer.first() {
            None => Err(Error),
            Some(0) => Ok(Self::default()),
            Some(_) if buffer.len() < Self::LEN => Err(Error),
            Some(&security_level) => {
                let mut key_source = [0; 8];
                key_source.copy_from_slice(&buffer[2..10]);
                Ok(Self {
                    security_level,
                    key_id_mode: buffer[1],
                    key_source,
                    key_index: buffer[10],
                })
            }
        }
    }

    /// Return the length of the specification when emitted into a buffer.
    pub fn buffer_len(&self) -> usize {
        if self.is_active() {
            Self::LEN
        } else {
            1
        }
    }

    /// Write the specification to the start of a buffer, in collapsed form
    /// when inactive.
    pub fn emit(&self, buffer: &mut [u8]) {
        if self.is_active() {
            buffer[0] = self.security_level;
            buffer[1] = self.key_id_mode;
            buffer[2..10].copy_from_slice(&self.key_source);
            buffer[10] = self.key_index;
        } else {
            buffer[0] = 0;
        }
    }
}

/// Encoded length of an optional security tail.
pub(crate) fn tail_len(security: Option<&SecuritySpec>) -> usize {
    security.map_or(1, SecuritySpec::buffer_len)
}

/// Write an optional security tail, returning the number of bytes written.
pub(crate) fn emit_tail(security: Option<&SecuritySpec>, buffer: &mut [u8]) -> usize {
    match security {
        Some(spec) => {
            spec.emit(buffer);
            spec.buffer_len()
        }
        None => {
            buffer[0] = 0;
            1
        }
    }
}
