//! HWME hardware management requests.

use heapless::Vec;
use trx154_wire as wire;
use trx154_wire::{HwAttribute, LqiMode, MacStatus, HAES_BLOCK_LEN, MAX_HW_ATTRIBUTE_LEN};

use crate::device::Device;
use crate::transport::Transport;
use crate::Error;

/// Outcome of a hardware attribute read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HwGetResult {
    /// Read status reported by the radio.
    pub status: MacStatus,
    /// Attribute value; empty unless the status is success.
    pub value: Vec<u8, MAX_HW_ATTRIBUTE_LEN>,
}

/// Outcome of a hardware AES operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HaesResult {
    /// Operation status reported by the radio.
    pub status: MacStatus,
    /// The processed block; meaningful only on success.
    pub data: [u8; HAES_BLOCK_LEN],
}

impl<T: Transport> Device<T> {
    /// Write one hardware attribute.
    ///
    /// On first-generation hardware a successful write of the LQI mode is
    /// cached, because the scan result filter cannot judge energy-detect
    /// LQI values.
    pub fn hwme_set_request_sync(
        &mut self,
        attribute: HwAttribute,
        value: &[u8],
    ) -> Result<MacStatus, Error> {
        if value.len() > MAX_HW_ATTRIBUTE_LEN {
            return Err(Error::InvalidArgument);
        }

        let response = self.request_sync(&wire::HwmeSetRequest { attribute, value })?;
        let confirm =
            wire::HwmeSetConfirm::new(response.payload()).map_err(|_| Error::SystemError)?;
        let status = confirm.status();

        if self.variant.host_filtering()
            && attribute == HwAttribute::LqiMode
            && status.is_success()
        {
            if let Some(&mode) = value.first() {
                self.lqi_mode = LqiMode::from(mode);
            }
        }

        Ok(status)
    }

    /// Read one hardware attribute.
    pub fn hwme_get_request_sync(&mut self, attribute: HwAttribute) -> Result<HwGetResult, Error> {
        let response = self.request_sync(&wire::HwmeGetRequest { attribute })?;
        let confirm =
            wire::HwmeGetConfirm::new(response.payload()).map_err(|_| Error::SystemError)?;

        let mut value = Vec::new();
        if confirm.status().is_success() {
            value
                .extend_from_slice(confirm.value())
                .map_err(|_| Error::SystemError)?;
        }

        Ok(HwGetResult {
            status: confirm.status(),
            value,
        })
    }

    /// Run one AES block through the hardware engine.
    pub fn hwme_haes_request_sync(
        &mut self,
        mode: u8,
        data: [u8; HAES_BLOCK_LEN],
    ) -> Result<HaesResult, Error> {
        let response = self.request_sync(&wire::HaesRequest { mode, data })?;
        let confirm =
            wire::HaesConfirm::new(response.payload()).map_err(|_| Error::SystemError)?;

        Ok(HaesResult {
            status: confirm.status(),
            data: if confirm.status().is_success() {
                confirm.data()
            } else {
                data
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::HardwareVariant;
    use crate::transport::tests::{Exchange, ScriptedTransport};

    #[test]
    fn lqi_mode_is_cached_on_success() {
        let transport = ScriptedTransport::new(vec![Exchange::reply(
            &[0x11, 3, 0x10, 1, 0x01],
            &[0x71, 2, 0x00, 0x10],
        )]);
        let mut device = Device::new(transport, HardwareVariant::V1);
        assert_eq!(device.lqi_mode(), LqiMode::Cs);

        device
            .hwme_set_request_sync(HwAttribute::LqiMode, &[0x01])
            .unwrap();

        assert_eq!(device.lqi_mode(), LqiMode::Ed);
    }

    #[test]
    fn hwme_get_round_trip() {
        let transport = ScriptedTransport::new(vec![Exchange::reply(
            &[0x12, 1, 0x01],
            &[0x72, 4, 0x00, 0x01, 1, 0xca],
        )]);
        let mut device = Device::new(transport, HardwareVariant::V1);

        let result = device.hwme_get_request_sync(HwAttribute::ChipId).unwrap();
        assert_eq!(result.status, MacStatus::Success);
        assert_eq!(result.value, [0xca]);
    }
}
