//! MCPS and PCPS data service requests.

use trx154_wire as wire;
use trx154_wire::{MacStatus, MAX_MSDU_LEN, MAX_PSDU_LEN};

use crate::device::Device;
use crate::transport::Transport;
use crate::Error;

/// Outcome of a purge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeResult {
    /// Purge status reported by the radio.
    pub status: MacStatus,
    /// Handle of the purged MSDU.
    pub msdu_handle: u8,
}

impl<T: Transport> Device<T> {
    /// Transmit one MSDU. The confirm arrives asynchronously through the
    /// dispatch engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FrameTooLong`] if the MSDU exceeds
    /// [`MAX_MSDU_LEN`], and [`Error::SystemError`] on transport failure.
    pub fn mcps_data_request(&mut self, request: &wire::DataRequest<'_>) -> Result<(), Error> {
        if request.msdu.len() > MAX_MSDU_LEN {
            return Err(Error::FrameTooLong);
        }

        self.request_async(request)
    }

    /// Drop a queued indirect MSDU.
    pub fn mcps_purge_request_sync(&mut self, msdu_handle: u8) -> Result<PurgeResult, Error> {
        let response = self.request_sync(&wire::PurgeRequest { msdu_handle })?;
        let confirm =
            wire::PurgeConfirm::new(response.payload()).map_err(|_| Error::SystemError)?;

        Ok(PurgeResult {
            status: confirm.status(),
            msdu_handle: confirm.msdu_handle(),
        })
    }

    /// Transmit one raw PSDU, bypassing MAC processing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] on hardware without raw PHY
    /// access, and [`Error::FrameTooLong`] if the PSDU exceeds
    /// [`MAX_PSDU_LEN`].
    pub fn pcps_data_request(&mut self, request: &wire::PhyDataRequest<'_>) -> Result<(), Error> {
        if !self.variant.phy_access() {
            return Err(Error::InvalidArgument);
        }

        if request.psdu.len() > MAX_PSDU_LEN {
            return Err(Error::FrameTooLong);
        }

        self.request_async(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::HardwareVariant;
    use crate::transport::tests::{Exchange, ScriptedTransport};
    use trx154_wire::{AddressMode, FullAddress, TxOptions};

    fn data_request(msdu: &[u8]) -> wire::DataRequest<'_> {
        wire::DataRequest {
            src_addr_mode: AddressMode::Short,
            dst: FullAddress::short(0xabcd, 0x0001),
            msdu_handle: 1,
            tx_options: TxOptions::empty(),
            msdu,
            security: None,
        }
    }

    #[test]
    fn oversized_msdu_is_rejected_before_sending() {
        let transport = ScriptedTransport::new(vec![]);
        let mut device = Device::new(transport, HardwareVariant::V1);

        let msdu = [0u8; MAX_MSDU_LEN + 1];
        assert_eq!(
            device.mcps_data_request(&data_request(&msdu)),
            Err(Error::FrameTooLong)
        );
    }

    #[test]
    fn phy_access_requires_newer_hardware() {
        let transport = ScriptedTransport::new(vec![]);
        let mut device = Device::new(transport, HardwareVariant::V1);

        let request = wire::PhyDataRequest {
            psdu_handle: 1,
            tx_opts: 0,
            psdu: &[0x01],
        };
        assert_eq!(
            device.pcps_data_request(&request),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn purge_round_trip() {
        let transport = ScriptedTransport::new(vec![Exchange::reply(
            &[0x01, 1, 42],
            &[0x61, 2, 42, 0x00],
        )]);
        let mut device = Device::new(transport, HardwareVariant::V1);

        let result = device.mcps_purge_request_sync(42).unwrap();
        assert_eq!(result.status, MacStatus::Success);
        assert_eq!(result.msdu_handle, 42);
    }
}
