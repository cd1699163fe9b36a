//! TDME test and debug requests, and the radio bring-up helpers built on
//! them.

use heapless::Vec;
use trx154_wire as wire;
use trx154_wire::{HwAttribute, MacStatus, PibAttribute, TdmeAttribute, TestMode};

use crate::device::Device;
use crate::transport::Transport;
use crate::Error;

/// Outcome of a special function register read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSfrResult {
    /// Read status reported by the radio.
    pub status: MacStatus,
    /// The value read from the register.
    pub value: u8,
}

/// Outcome of a test packet transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxPktResult {
    /// Transmission status reported by the radio.
    pub status: MacStatus,
    /// Sequence number of the transmitted packet.
    pub sequence_number: u8,
    /// The transmitted payload; empty unless the status is success.
    pub data: Vec<u8, { wire::MAX_PSDU_LEN + 1 }>,
}

/// Outcome of a local oscillator tuning lock test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoTlkResult {
    /// Test status reported by the radio.
    pub status: MacStatus,
    /// Channel the test ran on.
    pub channel: u8,
    /// Whether the test tuned for reception.
    pub rx_txb: bool,
    /// Frequency trim DAC value the lock settled on.
    pub lo_fdac: u8,
    /// Amplitude setting the lock settled on.
    pub lo_amp: u8,
    /// Transmit calibration value the lock settled on.
    pub lo_txcal: u8,
}

/// Outcome of a transmit power read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxPowerResult {
    /// Read status reported by the radio.
    pub status: MacStatus,
    /// 6-bit transmit power in dBm, with the tolerance encoded in the top
    /// two bits.
    pub txp: u8,
}

impl<T: Transport> Device<T> {
    /// Write one special function register.
    pub fn tdme_setsfr_request_sync(
        &mut self,
        page: u8,
        address: u8,
        value: u8,
    ) -> Result<MacStatus, Error> {
        let response = self.request_sync(&wire::SetSfrRequest {
            page,
            address,
            value,
        })?;
        Ok(wire::SetSfrConfirm::new(response.payload())
            .map_err(|_| Error::SystemError)?
            .status())
    }

    /// Read one special function register.
    pub fn tdme_getsfr_request_sync(
        &mut self,
        page: u8,
        address: u8,
    ) -> Result<GetSfrResult, Error> {
        let response = self.request_sync(&wire::GetSfrRequest { page, address })?;
        let confirm =
            wire::GetSfrConfirm::new(response.payload()).map_err(|_| Error::SystemError)?;

        Ok(GetSfrResult {
            status: confirm.status(),
            value: confirm.value(),
        })
    }

    /// Put the radio in a test mode.
    pub fn tdme_testmode_request_sync(&mut self, mode: TestMode) -> Result<MacStatus, Error> {
        let response = self.request_sync(&wire::TestModeRequest { mode })?;
        Ok(wire::TestModeConfirm::new(response.payload())
            .map_err(|_| Error::SystemError)?
            .status())
    }

    /// Write one test attribute.
    pub fn tdme_set_request_sync(
        &mut self,
        attribute: TdmeAttribute,
        value: &[u8],
    ) -> Result<MacStatus, Error> {
        let response = self.request_sync(&wire::TdmeSetRequest { attribute, value })?;
        Ok(wire::TdmeSetConfirm::new(response.payload())
            .map_err(|_| Error::SystemError)?
            .status())
    }

    /// Transmit one test packet.
    pub fn tdme_txpkt_request_sync(
        &mut self,
        request: &wire::TxPktRequest<'_>,
    ) -> Result<TxPktResult, Error> {
        let response = self.request_sync(request)?;
        let confirm =
            wire::TxPktConfirm::new(response.payload()).map_err(|_| Error::SystemError)?;

        let mut data = Vec::new();
        if confirm.status().is_success() {
            data.extend_from_slice(confirm.data())
                .map_err(|_| Error::SystemError)?;
        }

        Ok(TxPktResult {
            status: confirm.status(),
            sequence_number: confirm.sequence_number(),
            data,
        })
    }

    /// Run a local oscillator tuning lock test.
    pub fn tdme_lotlk_request_sync(
        &mut self,
        channel: u8,
        rx_txb: bool,
    ) -> Result<LoTlkResult, Error> {
        let response = self.request_sync(&wire::LoTlkRequest { channel, rx_txb })?;
        let confirm =
            wire::LoTlkConfirm::new(response.payload()).map_err(|_| Error::SystemError)?;

        Ok(LoTlkResult {
            status: confirm.status(),
            channel: confirm.channel(),
            rx_txb: confirm.rx_txb(),
            lo_fdac: confirm.lo_fdac(),
            lo_amp: confirm.lo_amp(),
            lo_txcal: confirm.lo_txcal(),
        })
    }

    /// Program the fixed register set the radio needs after power-on: LNA
    /// gain curve, preamble timing and the default transmit power.
    ///
    /// Returns the first non-success status, or success once the whole
    /// sequence has been written.
    pub fn tdme_chip_init(&mut self) -> Result<MacStatus, Error> {
        const SEQUENCE: [(u8, u8, u8); 11] = [
            (1, 0xe1, 0x29), // LNA Gain Settings
            (1, 0xe2, 0x54),
            (1, 0xe3, 0x6c),
            (1, 0xe4, 0x7a),
            (1, 0xe5, 0x84),
            (1, 0xe6, 0x8b),
            (1, 0xe7, 0x92),
            (1, 0xe9, 0x96),
            (1, 0xd3, 0x5b), // Preamble Timing Config
            (1, 0xd1, 0x5a), // Preamble Threshold High
            (0, 0xfe, 0x3f), // Tx Output Power 8 dBm
        ];

        for (page, address, value) in SEQUENCE {
            let status = self.tdme_setsfr_request_sync(page, address, value)?;
            if !status.is_success() {
                return Ok(status);
            }
        }

        if self.variant.host_filtering() {
            // disable in-radio LQI frame filtering, the host filters itself
            let status = self.hwme_set_request_sync(HwAttribute::LqiLimit, &[0x00])?;
            if !status.is_success() {
                return Ok(status);
            }
        }

        Ok(MacStatus::Success)
    }

    /// Write the LO transmit calibration value for a channel.
    pub fn tdme_channel_init(&mut self, channel: u8) -> Result<MacStatus, Error> {
        let txcalval = if channel >= 25 {
            0xa7
        } else if channel >= 23 {
            0xa8
        } else if channel >= 22 {
            0xa9
        } else if channel >= 20 {
            0xaa
        } else if channel >= 17 {
            0xab
        } else if channel >= 16 {
            0xac
        } else if channel >= 14 {
            0xad
        } else if channel >= 12 {
            0xae
        } else {
            0xaf
        };

        self.tdme_setsfr_request_sync(1, 0xbf, txcalval) // LO Tx Cal
    }

    /// Set the transmit power, mapping the 6-bit dBm value through the
    /// power amplifier configuration table of this silicon revision.
    pub fn tdme_set_tx_power(&mut self, txp: u8) -> Result<MacStatus, Error> {
        // sign-extend from 6 to 8 bit
        let mut txp_ext = 0x3f & txp;
        if txp_ext & 0x20 != 0 {
            txp_ext = txp_ext.wrapping_add(0xc0);
        }
        let txp_val = txp_ext as i8;

        if self.mac_mpw {
            let paib = if txp_val > 0 {
                0xd3 // 8 dBm: ptrim = 5, itrim = +3 => +4 dBm
            } else {
                0x73 // 0 dBm: ptrim = 7, itrim = +3 => -6 dBm
            };
            // write PACFG
            self.tdme_setsfr_request_sync(0, 0xb1, paib)
        } else {
            // Look-Up Table for Setting Current and Frequency Trim values
            // for desired Output Power
            let paib = match txp_val {
                v if v > 8 => 0x3f,
                8 => 0x32,
                7 => 0x22,
                6 => 0x18,
                5 => 0x10,
                4 => 0x0c,
                3 => 0x08,
                2 => 0x05,
                1 => 0x03,
                0 => 0x01,
                _ => 0x00,
            };
            // write PACFGIB
            self.tdme_setsfr_request_sync(0, 0xfe, paib)
        }
    }

    /// Read the transmit power back from the power amplifier
    /// configuration.
    pub fn tdme_get_tx_power(&mut self) -> Result<TxPowerResult, Error> {
        if self.mac_mpw {
            let result = self.tdme_getsfr_request_sync(0, 0xb1)?; // read PACFG

            let txp_val: i8 = if result.value & 0x80 != 0 {
                4 // BOOST, +4 dBm
            } else {
                -6 // -6 dBm
            };

            let mut txp = (txp_val as u8) & 0x3f;
            txp += 0x01 << 6; // tolerance +-3 dB

            Ok(TxPowerResult {
                status: result.status,
                txp,
            })
        } else {
            let result = self.tdme_getsfr_request_sync(0, 0xfe)?; // read PACFGIB

            let txp_val: i8 = if result.value >= 0x32 {
                8
            } else if result.value >= 0x22 {
                7
            } else if result.value >= 0x18 {
                6
            } else if result.value >= 0x10 {
                5
            } else if result.value >= 0x0c {
                4
            } else if result.value >= 0x08 {
                3
            } else if result.value >= 0x05 {
                2
            } else if result.value >= 0x03 {
                1
            } else if result.value > 0x00 {
                0
            } else {
                -1
            };

            Ok(TxPowerResult {
                status: result.status,
                txp: (txp_val as u8) & 0x3f,
            })
        }
    }
}

/// Validate a PIB attribute value on the host before handing it to the
/// radio.
///
/// Returns [`MacStatus::InvalidParameter`] for values the radio would
/// reject, and success otherwise. Attributes without a host-side rule pass
/// through unchecked.
pub fn check_pib_attribute(attribute: PibAttribute, value: &[u8]) -> MacStatus {
    /// Longest beacon payload the radio accepts.
    const MAX_BEACON_PAYLOAD_LEN: usize = 52;

    let Some(&first) = value.first() else {
        return MacStatus::InvalidParameter;
    };

    let valid = match attribute {
        // PHY
        PibAttribute::PhyCurrentChannel => (11..=26).contains(&first),
        PibAttribute::PhyTransmitPower => first <= 0x3f,
        PibAttribute::PhyCcaMode => first <= 0x03,
        // MAC
        PibAttribute::MacBattLifeExtPeriods => (6..=41).contains(&first),
        PibAttribute::MacBeaconPayload => value.len() <= MAX_BEACON_PAYLOAD_LEN,
        PibAttribute::MacBeaconPayloadLength => (first as usize) <= MAX_BEACON_PAYLOAD_LEN,
        PibAttribute::MacBeaconOrder => first <= 15,
        PibAttribute::MacMaxBe => (3..=8).contains(&first),
        PibAttribute::MacMaxCsmaBackoffs => first <= 5,
        PibAttribute::MacMaxFrameRetries => first <= 7,
        PibAttribute::MacMinBe => first <= 8,
        PibAttribute::MacResponseWaitTime => (2..=64).contains(&first),
        PibAttribute::MacSuperframeOrder => first <= 15,
        // boolean
        PibAttribute::MacAssociatedPanCoord
        | PibAttribute::MacAssociationPermit
        | PibAttribute::MacAutoRequest
        | PibAttribute::MacBattLifeExt
        | PibAttribute::MacGtsPermit
        | PibAttribute::MacPromiscuousMode
        | PibAttribute::MacRxOnWhenIdle
        | PibAttribute::MacSecurityEnabled => first <= 1,
        // MAC security
        PibAttribute::MacAutoRequestSecurityLevel => first <= 7,
        PibAttribute::MacAutoRequestKeyIdMode => first <= 3,
        _ => true,
    };

    if valid {
        MacStatus::Success
    } else {
        MacStatus::InvalidParameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::HardwareVariant;
    use crate::transport::tests::{Exchange, ScriptedTransport};

    #[test]
    fn check_pib_attribute_rules() {
        assert_eq!(
            check_pib_attribute(PibAttribute::PhyCurrentChannel, &[11]),
            MacStatus::Success
        );
        assert_eq!(
            check_pib_attribute(PibAttribute::PhyCurrentChannel, &[27]),
            MacStatus::InvalidParameter
        );
        assert_eq!(
            check_pib_attribute(PibAttribute::MacRxOnWhenIdle, &[2]),
            MacStatus::InvalidParameter
        );
        assert_eq!(
            check_pib_attribute(PibAttribute::MacMaxBe, &[2]),
            MacStatus::InvalidParameter
        );
        // attributes without a rule pass through
        assert_eq!(
            check_pib_attribute(PibAttribute::MacPanId, &[0xff]),
            MacStatus::Success
        );
    }

    #[test]
    fn channel_init_picks_the_calibration_value() {
        let transport = ScriptedTransport::new(vec![
            Exchange::reply(&[0x14, 3, 1, 0xbf, 0xa7], &[0x74, 3, 0x00, 1, 0xbf]),
            Exchange::reply(&[0x14, 3, 1, 0xbf, 0xaf], &[0x74, 3, 0x00, 1, 0xbf]),
        ]);
        let mut device = Device::new(transport, HardwareVariant::V1);

        device.tdme_channel_init(26).unwrap();
        device.tdme_channel_init(11).unwrap();
        device.release().finish();
    }

    #[test]
    fn set_tx_power_uses_the_production_table() {
        let transport = ScriptedTransport::new(vec![Exchange::reply(
            &[0x14, 3, 0, 0xfe, 0x32],
            &[0x74, 3, 0x00, 0, 0xfe],
        )]);
        let mut device = Device::new(transport, HardwareVariant::V2);

        device.tdme_set_tx_power(8).unwrap();
        device.release().finish();
    }

    #[test]
    fn set_tx_power_sign_extends_negative_values() {
        // 0x3f is -1 dBm in 6-bit two's complement, below the table floor
        let transport = ScriptedTransport::new(vec![Exchange::reply(
            &[0x14, 3, 0, 0xfe, 0x00],
            &[0x74, 3, 0x00, 0, 0xfe],
        )]);
        let mut device = Device::new(transport, HardwareVariant::V2);

        device.tdme_set_tx_power(0x3f).unwrap();
        device.release().finish();
    }

    #[test]
    fn get_tx_power_maps_the_table_back() {
        let transport = ScriptedTransport::new(vec![Exchange::reply(
            &[0x15, 2, 0, 0xfe],
            &[0x75, 4, 0x00, 0, 0xfe, 0x32],
        )]);
        let mut device = Device::new(transport, HardwareVariant::V2);

        let result = device.tdme_get_tx_power().unwrap();
        assert_eq!(result.status, MacStatus::Success);
        assert_eq!(result.txp, 8);
    }

    #[test]
    fn chip_init_stops_on_failure() {
        let transport = ScriptedTransport::new(vec![Exchange::reply(
            &[0x14, 3, 1, 0xe1, 0x29],
            &[0x74, 3, 0xe8, 1, 0xe1],
        )]);
        let mut device = Device::new(transport, HardwareVariant::V2);

        assert_eq!(device.tdme_chip_init(), Ok(MacStatus::InvalidParameter));
        device.release().finish();
    }
}
