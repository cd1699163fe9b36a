//! Source address blacklist.
//!
//! Indications whose source address matches an entry are suppressed before
//! they reach any callback. The capacity is fixed at build time through the
//! `TRX154_MAC_BLACKLIST_SIZE` environment variable.

use trx154_wire::{AddressMode, MacAddress};

use crate::device::Device;
use crate::transport::Transport;
use crate::Error;

mod config {
    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}

pub use config::MAC_BLACKLIST_SIZE;

/// A fixed-capacity table of suppressed source addresses.
///
/// A free slot is marked by [`AddressMode::Absent`]. Slot reuse order is
/// unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: [MacAddress; MAC_BLACKLIST_SIZE],
}

impl Blacklist {
    /// Number of entries the table can hold.
    pub const CAPACITY: usize = MAC_BLACKLIST_SIZE;

    pub(crate) fn new() -> Self {
        Self {
            entries: [MacAddress::default(); MAC_BLACKLIST_SIZE],
        }
    }

    /// Add an address to the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the address mode is neither
    /// short nor extended, and [`Error::NoBuffer`] if the table is full.
    /// A failed add leaves the table unchanged.
    pub fn add(&mut self, address: MacAddress) -> Result<(), Error> {
        if address.mode != AddressMode::Short && address.mode != AddressMode::Extended {
            return Err(Error::InvalidArgument);
        }

        for entry in self.entries.iter_mut() {
            if entry.mode == AddressMode::Absent {
                *entry = address;
                return Ok(());
            }
        }

        Err(Error::NoBuffer)
    }

    /// Reset every slot to free.
    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = MacAddress::default();
        }
    }

    /// Query whether an address matches an occupied entry of the same mode.
    pub(crate) fn contains(&self, mode: AddressMode, address: &[u8; 8]) -> bool {
        let length = mode.size();
        if length == 0 {
            return false;
        }

        self.entries
            .iter()
            .any(|entry| entry.mode == mode && entry.address[..length] == address[..length])
    }
}

impl<T: Transport> Device<T> {
    /// Add an address to this device's blacklist.
    ///
    /// # Errors
    ///
    /// See [`Blacklist::add`].
    pub fn blacklist_add(&mut self, address: MacAddress) -> Result<(), Error> {
        self.blacklist.add(address)
    }

    /// Remove every entry from this device's blacklist.
    pub fn blacklist_clear(&mut self) {
        self.blacklist.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_absent_mode() {
        let mut blacklist = Blacklist::new();
        assert_eq!(
            blacklist.add(MacAddress::default()),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn add_and_match() {
        let mut blacklist = Blacklist::new();
        blacklist.add(MacAddress::short(0x1234)).unwrap();

        let mut address = [0u8; 8];
        address[..2].copy_from_slice(&0x1234u16.to_le_bytes());
        assert!(blacklist.contains(AddressMode::Short, &address));
        // same bytes under the other mode do not match
        assert!(!blacklist.contains(AddressMode::Extended, &address));

        blacklist.clear();
        assert!(!blacklist.contains(AddressMode::Short, &address));
    }

    #[test]
    fn full_table_is_left_unchanged() {
        let mut blacklist = Blacklist::new();
        for i in 0..Blacklist::CAPACITY {
            blacklist.add(MacAddress::short(i as u16)).unwrap();
        }

        let before = blacklist.clone();
        assert_eq!(
            blacklist.add(MacAddress::short(0xbeef)),
            Err(Error::NoBuffer)
        );
        assert_eq!(blacklist, before);
    }

    #[test]
    fn short_match_ignores_trailing_bytes() {
        let mut blacklist = Blacklist::new();
        blacklist.add(MacAddress::short(0x00aa)).unwrap();

        let mut address = [0xff; 8];
        address[..2].copy_from_slice(&0x00aau16.to_le_bytes());
        assert!(blacklist.contains(AddressMode::Short, &address));
    }
}
