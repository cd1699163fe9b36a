//! MLME service requests.

use heapless::Vec;
use trx154_wire as wire;
use trx154_wire::{
    MacStatus, PibAttribute, MAX_ATTRIBUTE_LEN, UNASSIGNED_SHORT_ADDRESS,
};

use crate::device::Device;
use crate::transport::Transport;
use crate::Error;

/// Outcome of a PIB read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetResult {
    /// Read status reported by the radio.
    pub status: MacStatus,
    /// Attribute value; empty unless the status is success.
    pub value: Vec<u8, MAX_ATTRIBUTE_LEN>,
}

impl<T: Transport> Device<T> {
    /// Start associating with a coordinator. The confirm arrives
    /// asynchronously through the dispatch engine.
    pub fn mlme_associate_request(
        &mut self,
        request: &wire::AssociateRequest,
    ) -> Result<(), Error> {
        self.request_async(request)
    }

    /// Answer a device's association attempt.
    pub fn mlme_associate_response(
        &mut self,
        response: &wire::AssociateResponse,
    ) -> Result<(), Error> {
        self.request_async(response)
    }

    /// Notify a peer of disassociation.
    pub fn mlme_disassociate_request(
        &mut self,
        request: &wire::DisassociateRequest,
    ) -> Result<(), Error> {
        self.request_async(request)
    }

    /// Read one PIB attribute.
    pub fn mlme_get_request_sync(
        &mut self,
        attribute: PibAttribute,
        attribute_index: u8,
    ) -> Result<GetResult, Error> {
        let response = self.request_sync(&wire::GetRequest {
            attribute,
            attribute_index,
        })?;
        let confirm = wire::GetConfirm::new(response.payload()).map_err(|_| Error::SystemError)?;

        let mut value = Vec::new();
        if confirm.status().is_success() {
            value
                .extend_from_slice(confirm.value())
                .map_err(|_| Error::SystemError)?;
        }

        Ok(GetResult {
            status: confirm.status(),
            value,
        })
    }

    /// Write one PIB attribute.
    ///
    /// On first-generation hardware a successful write of the short or
    /// extended address also updates the cache consulted by the inbound
    /// address filter.
    pub fn mlme_set_request_sync(
        &mut self,
        attribute: PibAttribute,
        attribute_index: u8,
        value: &[u8],
    ) -> Result<MacStatus, Error> {
        if value.len() > MAX_ATTRIBUTE_LEN {
            return Err(Error::InvalidArgument);
        }

        let response = self.request_sync(&wire::SetRequest {
            attribute,
            attribute_index,
            value,
        })?;
        let status = wire::StatusConfirm::new(response.payload())
            .map_err(|_| Error::SystemError)?
            .status();

        if self.variant.host_filtering() && status.is_success() {
            match attribute {
                PibAttribute::MacShortAddress if value.len() >= 2 => {
                    self.short_address = u16::from_le_bytes([value[0], value[1]]);
                }
                PibAttribute::NsIeeeAddress if value.len() >= 8 => {
                    self.extended_address.copy_from_slice(&value[..8]);
                }
                _ => {}
            }
        }

        Ok(status)
    }

    /// Reset the MAC sublayer.
    ///
    /// Resetting the PIB to defaults also clears the cached short address
    /// on first-generation hardware.
    pub fn mlme_reset_request_sync(&mut self, set_default_pib: bool) -> Result<MacStatus, Error> {
        let response = self.request_sync(&wire::ResetRequest { set_default_pib })?;
        let status = wire::StatusConfirm::new(response.payload())
            .map_err(|_| Error::SystemError)?
            .status();

        if self.variant.host_filtering() && set_default_pib && status.is_success() {
            self.short_address = UNASSIGNED_SHORT_ADDRESS;
        }

        Ok(status)
    }

    /// Enable the receiver for a bounded time.
    pub fn mlme_rx_enable_request_sync(
        &mut self,
        request: &wire::RxEnableRequest,
    ) -> Result<MacStatus, Error> {
        let response = self.request_sync(request)?;
        Ok(wire::StatusConfirm::new(response.payload())
            .map_err(|_| Error::SystemError)?
            .status())
    }

    /// Start a channel scan. The confirm arrives asynchronously through
    /// the dispatch engine, after LQI filtering where applicable.
    pub fn mlme_scan_request(&mut self, request: &wire::ScanRequest) -> Result<(), Error> {
        self.request_async(request)
    }

    /// Begin operating as a coordinator.
    pub fn mlme_start_request_sync(
        &mut self,
        request: &wire::StartRequest,
    ) -> Result<MacStatus, Error> {
        let response = self.request_sync(request)?;
        Ok(wire::StatusConfirm::new(response.payload())
            .map_err(|_| Error::SystemError)?
            .status())
    }

    /// Poll a coordinator for pending data.
    pub fn mlme_poll_request_sync(
        &mut self,
        request: &wire::PollRequest,
    ) -> Result<MacStatus, Error> {
        let response = self.request_sync(request)?;
        Ok(wire::StatusConfirm::new(response.payload())
            .map_err(|_| Error::SystemError)?
            .status())
    }

    /// Realign an orphaned device.
    pub fn mlme_orphan_response(&mut self, response: &wire::OrphanResponse) -> Result<(), Error> {
        self.request_async(response)
    }
}
