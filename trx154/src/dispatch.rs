//! Inbound message dispatch.
//!
//! The transport hands every upstream message to [`Device::dispatch`],
//! which resolves the command to a callback slot, applies the
//! first-generation hardware workarounds and the blacklist, and delivers
//! the decoded payload.

use trx154_wire as wire;
use trx154_wire::{
    AddressMode, CommandId, LqiMode, MacStatus, MessageBuffer, ScanType,
    BROADCAST_SHORT_ADDRESS, UNASSIGNED_SHORT_ADDRESS,
};

use crate::blacklist::Blacklist;
use crate::device::Device;
use crate::transport::Transport;
use crate::{DispatchResult, Error};

/// LQI limit, at or below which received beacons are rejected.
const LQI_LIMIT: u8 = 75;

impl<T: Transport> Device<T> {
    /// Dispatch one inbound message to the registered callbacks.
    ///
    /// The message is taken mutably because first-generation hardware
    /// requires rewriting scan confirms in place (see
    /// [`HardwareVariant::V1`](crate::HardwareVariant)).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for messages that are not
    /// asynchronous upstream messages of this hardware revision, and
    /// [`Error::AddressFiltered`] for data indications addressed to
    /// another device. Blacklist suppression is not an error; it reports
    /// [`DispatchResult::Suppressed`].
    pub fn dispatch(&mut self, message: &mut MessageBuffer) -> Result<DispatchResult, Error> {
        let Ok(command) = message.command_id() else {
            crate::warn!("unknown inbound command");
            return Err(Error::InvalidArgument);
        };

        // Only asynchronous upstream messages have callback slots; sync
        // confirms are consumed by the synchronous request engine.
        if !command.is_upstream() || command.is_sync_confirm() {
            return Err(Error::InvalidArgument);
        }

        if !self.variant.phy_access()
            && matches!(
                command,
                CommandId::PcpsDataIndication
                    | CommandId::PcpsDataConfirm
                    | CommandId::MlmePollIndication
            )
        {
            return Err(Error::InvalidArgument);
        }

        if self.variant.host_filtering() {
            match command {
                CommandId::McpsDataIndication => {
                    self.check_data_ind_dst_addr(message.payload())?
                }
                CommandId::MlmeScanConfirm => self.filter_scan_results(message),
                CommandId::MlmeAssociateConfirm => {
                    self.capture_assoc_short_address(message.payload())
                }
                _ => {}
            }
        }

        if self.blacklist_must_filter(command, message.payload()) {
            crate::debug!("blacklisted source, suppressing message");
            return Ok(DispatchResult::Suppressed);
        }

        let result = self.deliver(command, message)?;
        if result != DispatchResult::NotHandled {
            return Ok(result);
        }

        if let Some(generic) = self.callbacks.generic_dispatch {
            let reader = wire::Message::new_unchecked(message.as_slice());
            return generic(&reader, self);
        }

        Ok(DispatchResult::NotHandled)
    }

    /// Invoke the callback slot of one message, if registered.
    fn deliver(
        &mut self,
        command: CommandId,
        message: &MessageBuffer,
    ) -> Result<DispatchResult, Error> {
        use CommandId::*;

        let payload = message.payload();
        let not_handled: Result<DispatchResult, Error> = Ok(DispatchResult::NotHandled);

        match command {
            McpsDataIndication => {
                let Some(callback) = self.callbacks.mcps_data_indication else {
                    return not_handled;
                };
                let reader =
                    wire::DataIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            McpsDataConfirm => {
                let Some(callback) = self.callbacks.mcps_data_confirm else {
                    return not_handled;
                };
                let reader =
                    wire::DataConfirm::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            PcpsDataIndication => {
                let Some(callback) = self.callbacks.pcps_data_indication else {
                    return not_handled;
                };
                let reader =
                    wire::PhyDataIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            PcpsDataConfirm => {
                let Some(callback) = self.callbacks.pcps_data_confirm else {
                    return not_handled;
                };
                let reader =
                    wire::PhyDataConfirm::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmeAssociateIndication => {
                let Some(callback) = self.callbacks.mlme_associate_indication else {
                    return not_handled;
                };
                let reader =
                    wire::AssociateIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmeAssociateConfirm => {
                let Some(callback) = self.callbacks.mlme_associate_confirm else {
                    return not_handled;
                };
                let reader =
                    wire::AssociateConfirm::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmeDisassociateIndication => {
                let Some(callback) = self.callbacks.mlme_disassociate_indication else {
                    return not_handled;
                };
                let reader = wire::DisassociateIndication::new(payload)
                    .map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmeDisassociateConfirm => {
                let Some(callback) = self.callbacks.mlme_disassociate_confirm else {
                    return not_handled;
                };
                let reader =
                    wire::DisassociateConfirm::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmeBeaconNotifyIndication => {
                let Some(callback) = self.callbacks.mlme_beacon_notify_indication else {
                    return not_handled;
                };
                let reader = wire::BeaconNotifyIndication::new(payload)
                    .map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmeOrphanIndication => {
                let Some(callback) = self.callbacks.mlme_orphan_indication else {
                    return not_handled;
                };
                let reader =
                    wire::OrphanIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmeScanConfirm => {
                let Some(callback) = self.callbacks.mlme_scan_confirm else {
                    return not_handled;
                };
                let reader =
                    wire::ScanConfirm::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmeCommStatusIndication => {
                let Some(callback) = self.callbacks.mlme_comm_status_indication else {
                    return not_handled;
                };
                let reader =
                    wire::CommStatusIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmeSyncLossIndication => {
                let Some(callback) = self.callbacks.mlme_sync_loss_indication else {
                    return not_handled;
                };
                let reader =
                    wire::SyncLossIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            MlmePollIndication => {
                let Some(callback) = self.callbacks.mlme_poll_indication else {
                    return not_handled;
                };
                let reader =
                    wire::PollIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            HwmeWakeupIndication => {
                let Some(callback) = self.callbacks.hwme_wakeup_indication else {
                    return not_handled;
                };
                let reader =
                    wire::WakeupIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            TdmeRxPktIndication => {
                let Some(callback) = self.callbacks.tdme_rxpkt_indication else {
                    return not_handled;
                };
                let reader =
                    wire::RxPktIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            TdmeEdDetIndication => {
                let Some(callback) = self.callbacks.tdme_eddet_indication else {
                    return not_handled;
                };
                let reader =
                    wire::EdDetIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            TdmeErrorIndication => {
                let Some(callback) = self.callbacks.tdme_error_indication else {
                    return not_handled;
                };
                let reader =
                    wire::ErrorIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
                callback(&reader, self)
            }
            _ => Err(Error::InvalidArgument),
        }
    }

    /// Drop data indications addressed to another device.
    ///
    /// First-generation hardware reports every frame it decodes; the host
    /// re-checks the destination. An all-zero cached extended address
    /// accepts every extended-addressed frame: the device has not been
    /// provisioned yet, and rejecting would make bring-up impossible.
    fn check_data_ind_dst_addr(&self, payload: &[u8]) -> Result<(), Error> {
        let indication =
            wire::DataIndication::new(payload).map_err(|_| Error::InvalidArgument)?;
        let dst = indication.dst();

        match dst.mode {
            AddressMode::Short => {
                let short = dst.short_address();
                if short != BROADCAST_SHORT_ADDRESS
                    && short != self.short_address
                    && self.short_address != UNASSIGNED_SHORT_ADDRESS
                {
                    crate::debug!("data indication for another short address, dropping");
                    return Err(Error::AddressFiltered);
                }
            }
            AddressMode::Extended => {
                if dst.address != self.extended_address && self.extended_address != [0; 8] {
                    crate::debug!("data indication for another extended address, dropping");
                    return Err(Error::AddressFiltered);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Remove scan results whose beacon LQI is at or below [`LQI_LIMIT`],
    /// compacting the confirm in place.
    fn filter_scan_results(&self, message: &mut MessageBuffer) {
        if self.lqi_mode == LqiMode::Ed {
            // cannot judge energy-detect LQI values
            return;
        }

        {
            let Ok(confirm) = wire::ScanConfirm::new(message.payload()) else {
                return;
            };
            let scan_type = confirm.scan_type();
            if scan_type != ScanType::Active && scan_type != ScanType::Passive {
                return;
            }
        }

        let mut modified = false;
        let mut offset = 7;
        let mut index = 0;

        loop {
            let payload = message.payload();
            if index >= payload[6] {
                break;
            }
            let Ok(descriptor) = wire::PanDescriptor::new(&payload[offset.min(payload.len())..])
            else {
                break;
            };
            let span = descriptor.len();

            if descriptor.link_quality() > LQI_LIMIT {
                // LQI is acceptable, move to the next entry
                offset += span;
                index += 1;
                continue;
            }

            modified = true;
            let length = payload.len();
            let payload = message.payload_mut();
            // copy the rest of the list forward over the removed entry
            payload.copy_within(offset + span.., offset);
            payload[6] -= 1;
            message.set_length((length - span) as u8);
        }

        if modified {
            let payload = message.payload_mut();
            if payload[6] == 0
                && matches!(
                    MacStatus::from(payload[0]),
                    MacStatus::Success | MacStatus::LimitReached
                )
            {
                crate::debug!("every scan result filtered out, reporting no beacon");
                payload[0] = MacStatus::NoBeacon.into();
            }
        }
    }

    /// Cache the short address assigned by a successful association.
    fn capture_assoc_short_address(&mut self, payload: &[u8]) {
        let Ok(confirm) = wire::AssociateConfirm::new(payload) else {
            return;
        };

        if confirm.status().is_success()
            && confirm.assoc_short_address() != UNASSIGNED_SHORT_ADDRESS
        {
            self.short_address = confirm.assoc_short_address();
        }
    }

    /// Query whether the source of an indication is blacklisted.
    fn blacklist_must_filter(&self, command: CommandId, payload: &[u8]) -> bool {
        use CommandId::*;

        if Blacklist::CAPACITY == 0 {
            return false;
        }

        let (mode, address) = match command {
            McpsDataIndication => {
                let Ok(indication) = wire::DataIndication::new(payload) else {
                    return false;
                };
                let src = indication.src();
                (src.mode, src.address)
            }
            MlmeAssociateIndication => {
                let Ok(indication) = wire::AssociateIndication::new(payload) else {
                    return false;
                };
                (AddressMode::Extended, indication.device_address())
            }
            MlmeBeaconNotifyIndication => {
                let Ok(indication) = wire::BeaconNotifyIndication::new(payload) else {
                    return false;
                };
                let Ok(descriptor) = indication.pan_descriptor() else {
                    return false;
                };
                let coordinator = descriptor.coordinator();
                (coordinator.mode, coordinator.address)
            }
            MlmeCommStatusIndication => {
                let Ok(indication) = wire::CommStatusIndication::new(payload) else {
                    return false;
                };
                (indication.src_addr_mode(), indication.src_address())
            }
            MlmeDisassociateIndication => {
                let Ok(indication) = wire::DisassociateIndication::new(payload) else {
                    return false;
                };
                (AddressMode::Extended, indication.device_address())
            }
            MlmeOrphanIndication => {
                let Ok(indication) = wire::OrphanIndication::new(payload) else {
                    return false;
                };
                (AddressMode::Extended, indication.orphan_address())
            }
            MlmePollIndication => {
                let Ok(indication) = wire::PollIndication::new(payload) else {
                    return false;
                };
                let src = indication.src();
                (src.mode, src.address)
            }
            _ => return false,
        };

        self.blacklist.contains(mode, &address)
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::device::HardwareVariant;
    use crate::transport::tests::NullTransport;
    use trx154_wire::{FullAddress, MacAddress, SecuritySpec};

    fn message(bytes: &[u8]) -> MessageBuffer {
        let mut message = MessageBuffer::new();
        message.storage_mut()[..bytes.len()].copy_from_slice(bytes);
        message
    }

    /// A data indication from `src` to `dst` carrying a 2-byte MSDU.
    fn data_indication(src: FullAddress, dst: FullAddress) -> MessageBuffer {
        let mut bytes = vec![0x20, 32];
        let mut address = [0u8; 11];
        src.emit(&mut address);
        bytes.extend_from_slice(&address);
        dst.emit(&mut address);
        bytes.extend_from_slice(&address);
        bytes.push(2); // msdu length
        bytes.push(0xc8); // link quality
        bytes.push(1); // dsn
        bytes.extend_from_slice(&[0, 0, 0, 0]); // timestamp
        bytes.extend_from_slice(&[0xaa, 0xbb]); // msdu
        bytes.push(0); // security
        message(&bytes)
    }

    fn pan_descriptor(short_addr: u16, lqi: u8, secured: bool) -> std::vec::Vec<u8> {
        let mut bytes = std::vec::Vec::new();
        let mut coord = [0u8; 11];
        FullAddress::short(0x1111, short_addr).emit(&mut coord);
        bytes.extend_from_slice(&coord);
        bytes.push(15); // logical channel
        bytes.extend_from_slice(&[0xff, 0xcf]); // superframe spec
        bytes.push(0); // gts permit
        bytes.push(lqi);
        bytes.extend_from_slice(&[0, 0, 0, 0]); // timestamp
        bytes.push(0); // security failure
        if secured {
            bytes.extend_from_slice(&[5, 1, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        } else {
            bytes.push(0);
        }
        bytes
    }

    fn scan_confirm(status: MacStatus, scan_type: ScanType, descriptors: &[&[u8]]) -> MessageBuffer {
        let mut payload = vec![
            status.into(),
            scan_type.into(),
            0,
            0,
            0,
            0,
            descriptors.len() as u8,
        ];
        for descriptor in descriptors {
            payload.extend_from_slice(descriptor);
        }
        let mut bytes = vec![0x2a, payload.len() as u8];
        bytes.extend_from_slice(&payload);
        message(&bytes)
    }

    fn device_v1() -> Device<NullTransport> {
        Device::new(NullTransport, HardwareVariant::V1)
    }

    #[test]
    fn unknown_command_is_rejected() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut device = device_v1();
        assert_eq!(
            device.dispatch(&mut message(&[0xf4, 0])),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn requests_and_sync_confirms_are_rejected() {
        let mut device = device_v1();
        // a request id
        assert_eq!(
            device.dispatch(&mut message(&[0x0d, 3, 0, 0, 0x17])),
            Err(Error::InvalidArgument)
        );
        // a synchronous confirm id
        assert_eq!(
            device.dispatch(&mut message(&[0x6d, 1, 0])),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn newer_hardware_messages_are_rejected_on_v1() {
        let mut device = device_v1();
        assert_eq!(
            device.dispatch(&mut message(&[0x22, 4, 0, 0, 1, 0xaa])),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn no_callback_means_not_handled() {
        let mut device = device_v1();
        let mut msg = message(&[0x2e, 1, 0x00]); // wakeup indication
        assert_eq!(device.dispatch(&mut msg), Ok(DispatchResult::NotHandled));
    }

    #[test]
    fn broadcast_is_always_delivered() {
        static DELIVERED: AtomicUsize = AtomicUsize::new(0);

        let mut device = device_v1();
        device.short_address = 0x1234; // provisioned
        device.callbacks.mcps_data_indication = Some(|_, _| {
            DELIVERED.fetch_add(1, Ordering::Relaxed);
            Ok(DispatchResult::Handled)
        });

        let src = FullAddress::short(0xabcd, 0x0042);
        let dst = FullAddress::short(0xabcd, BROADCAST_SHORT_ADDRESS);
        assert_eq!(
            device.dispatch(&mut data_indication(src, dst)),
            Ok(DispatchResult::Handled)
        );
        assert_eq!(DELIVERED.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn foreign_short_address_is_filtered_once_provisioned() {
        let mut device = device_v1();
        device.callbacks.mcps_data_indication = Some(|_, _| Ok(DispatchResult::Handled));

        let src = FullAddress::short(0xabcd, 0x0042);
        let dst = FullAddress::short(0xabcd, 0x5678);

        // unassigned cache accepts everything
        assert_eq!(
            device.dispatch(&mut data_indication(src, dst)),
            Ok(DispatchResult::Handled)
        );

        device.short_address = 0x1234;
        assert_eq!(
            device.dispatch(&mut data_indication(src, dst)),
            Err(Error::AddressFiltered)
        );

        // the device's own address still passes
        let own = FullAddress::short(0xabcd, 0x1234);
        assert_eq!(
            device.dispatch(&mut data_indication(src, own)),
            Ok(DispatchResult::Handled)
        );
    }

    #[test]
    fn extended_filtering_waits_for_provisioning() {
        let mut device = device_v1();
        device.callbacks.mcps_data_indication = Some(|_, _| Ok(DispatchResult::Handled));

        let src = FullAddress::short(0xabcd, 0x0042);
        let dst = FullAddress::extended(0xabcd, [9, 9, 9, 9, 9, 9, 9, 9]);

        // all-zero cached extended address accepts everything
        assert_eq!(
            device.dispatch(&mut data_indication(src, dst)),
            Ok(DispatchResult::Handled)
        );

        device.extended_address = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(
            device.dispatch(&mut data_indication(src, dst)),
            Err(Error::AddressFiltered)
        );

        let own = FullAddress::extended(0xabcd, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            device.dispatch(&mut data_indication(src, own)),
            Ok(DispatchResult::Handled)
        );
    }

    #[test]
    fn newer_hardware_does_not_address_filter() {
        let mut device = Device::new(NullTransport, HardwareVariant::V2);
        device.short_address = 0x1234;
        device.callbacks.mcps_data_indication = Some(|_, _| Ok(DispatchResult::Handled));

        let src = FullAddress::short(0xabcd, 0x0042);
        let dst = FullAddress::short(0xabcd, 0x5678);
        assert_eq!(
            device.dispatch(&mut data_indication(src, dst)),
            Ok(DispatchResult::Handled)
        );
    }

    #[test]
    fn scan_confirm_filtering_removes_weak_beacons() {
        let mut device = device_v1();

        let keep = pan_descriptor(0x000a, 200, false);
        let drop_plain = pan_descriptor(0x000b, 75, false); // at the limit
        let drop_secured = pan_descriptor(0x000c, 10, true);
        let mut msg = scan_confirm(
            MacStatus::Success,
            ScanType::Active,
            &[&drop_plain, &keep, &drop_secured],
        );
        let original_len = msg.length();

        device.dispatch(&mut msg).unwrap();

        // 22 bytes for the plain entry, 32 for the secured one
        assert_eq!(msg.length(), original_len - 22 - 32);
        let confirm = wire::ScanConfirm::new(msg.payload()).unwrap();
        assert_eq!(confirm.status(), MacStatus::Success);
        assert_eq!(confirm.result_list_size(), 1);
        let survivor = confirm.pan_descriptors().next().unwrap();
        assert_eq!(survivor.coordinator().short_address(), 0x000a);
    }

    #[test]
    fn emptied_scan_confirm_reports_no_beacon() {
        let mut device = device_v1();

        let weak = pan_descriptor(0x000b, 40, false);
        let mut msg = scan_confirm(MacStatus::Success, ScanType::Active, &[&weak]);
        device.dispatch(&mut msg).unwrap();

        let confirm = wire::ScanConfirm::new(msg.payload()).unwrap();
        assert_eq!(confirm.status(), MacStatus::NoBeacon);
        assert_eq!(confirm.result_list_size(), 0);
    }

    #[test]
    fn empty_scan_confirm_keeps_its_status() {
        let mut device = device_v1();

        let mut msg = scan_confirm(MacStatus::Success, ScanType::Active, &[]);
        device.dispatch(&mut msg).unwrap();

        let confirm = wire::ScanConfirm::new(msg.payload()).unwrap();
        assert_eq!(confirm.status(), MacStatus::Success);
    }

    #[test]
    fn energy_scan_results_are_not_filtered() {
        let mut device = device_v1();

        // an energy scan result list full of small values
        let mut msg = message(&[0x2a, 10, 0x00, 0x00, 0, 0, 0, 0, 3, 10, 20, 30]);
        device.dispatch(&mut msg).unwrap();

        let confirm = wire::ScanConfirm::new(msg.payload()).unwrap();
        assert_eq!(confirm.result_list_size(), 3);
        assert_eq!(confirm.energy_detect_list(), [10, 20, 30]);
    }

    #[test]
    fn ed_lqi_mode_disables_scan_filtering() {
        let mut device = device_v1();
        device.lqi_mode = LqiMode::Ed;

        let weak = pan_descriptor(0x000b, 40, false);
        let mut msg = scan_confirm(MacStatus::Success, ScanType::Active, &[&weak]);
        device.dispatch(&mut msg).unwrap();

        let confirm = wire::ScanConfirm::new(msg.payload()).unwrap();
        assert_eq!(confirm.result_list_size(), 1);
    }

    #[test]
    fn newer_hardware_does_not_filter_scans() {
        let mut device = Device::new(NullTransport, HardwareVariant::V2);

        let weak = pan_descriptor(0x000b, 40, false);
        let mut msg = scan_confirm(MacStatus::Success, ScanType::Active, &[&weak]);
        device.dispatch(&mut msg).unwrap();

        let confirm = wire::ScanConfirm::new(msg.payload()).unwrap();
        assert_eq!(confirm.result_list_size(), 1);
    }

    #[test]
    fn associate_confirm_caches_the_assigned_address() {
        let mut device = device_v1();

        let mut msg = message(&[0x25, 4, 0x34, 0x12, 0x00, 0x00]);
        device.dispatch(&mut msg).unwrap();
        assert_eq!(device.short_address(), 0x1234);

        // the unassigned sentinel is never cached
        let mut device = device_v1();
        let mut msg = message(&[0x25, 4, 0xff, 0xff, 0x00, 0x00]);
        device.dispatch(&mut msg).unwrap();
        assert_eq!(device.short_address(), UNASSIGNED_SHORT_ADDRESS);
    }

    #[test]
    fn blacklisted_source_is_suppressed() {
        static DELIVERED: AtomicUsize = AtomicUsize::new(0);

        let mut device = device_v1();
        device.callbacks.mcps_data_indication = Some(|_, _| {
            DELIVERED.fetch_add(1, Ordering::Relaxed);
            Ok(DispatchResult::Handled)
        });

        let src = FullAddress::short(0xabcd, 0x0042);
        let dst = FullAddress::short(0xabcd, BROADCAST_SHORT_ADDRESS);

        device.blacklist_add(MacAddress::short(0x0042)).unwrap();
        assert_eq!(
            device.dispatch(&mut data_indication(src, dst)),
            Ok(DispatchResult::Suppressed)
        );
        assert_eq!(DELIVERED.load(Ordering::Relaxed), 0);

        // clearing makes the same indication deliverable again
        device.blacklist_clear();
        assert_eq!(
            device.dispatch(&mut data_indication(src, dst)),
            Ok(DispatchResult::Handled)
        );
        assert_eq!(DELIVERED.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn blacklist_matches_extended_sources() {
        let mut device = device_v1();
        device.callbacks.mlme_associate_indication = Some(|_, _| Ok(DispatchResult::Handled));

        let address = [1, 2, 3, 4, 5, 6, 7, 8];
        device.blacklist_add(MacAddress::extended(address)).unwrap();

        let mut bytes = vec![0x24, 10];
        bytes.extend_from_slice(&address);
        bytes.push(0x80); // capability
        bytes.push(0); // security
        assert_eq!(
            device.dispatch(&mut message(&bytes)),
            Ok(DispatchResult::Suppressed)
        );
    }

    #[test]
    fn generic_dispatch_is_the_fallback() {
        static SPECIFIC: AtomicUsize = AtomicUsize::new(0);
        static GENERIC: AtomicUsize = AtomicUsize::new(0);

        let mut device = device_v1();
        device.callbacks.generic_dispatch = Some(|msg, _| {
            assert_eq!(msg.command_id(), Ok(CommandId::HwmeWakeupIndication));
            GENERIC.fetch_add(1, Ordering::Relaxed);
            Ok(DispatchResult::Handled)
        });

        // no specific callback: straight to the generic one
        let mut msg = message(&[0x2e, 1, 0x02]);
        assert_eq!(device.dispatch(&mut msg), Ok(DispatchResult::Handled));
        assert_eq!(GENERIC.load(Ordering::Relaxed), 1);

        // a declining specific callback also falls through
        device.callbacks.hwme_wakeup_indication = Some(|_, _| {
            SPECIFIC.fetch_add(1, Ordering::Relaxed);
            Ok(DispatchResult::NotHandled)
        });
        let mut msg = message(&[0x2e, 1, 0x02]);
        assert_eq!(device.dispatch(&mut msg), Ok(DispatchResult::Handled));
        assert_eq!(SPECIFIC.load(Ordering::Relaxed), 1);
        assert_eq!(GENERIC.load(Ordering::Relaxed), 2);

        // a handling specific callback short-circuits
        device.callbacks.hwme_wakeup_indication = Some(|_, _| Ok(DispatchResult::Handled));
        let mut msg = message(&[0x2e, 1, 0x02]);
        assert_eq!(device.dispatch(&mut msg), Ok(DispatchResult::Handled));
        assert_eq!(GENERIC.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn callback_receives_the_decoded_payload() {
        let mut device = device_v1();
        device.callbacks.mcps_data_indication = Some(|indication, _| {
            assert_eq!(indication.msdu(), [0xaa, 0xbb]);
            assert_eq!(indication.src().short_address(), 0x0042);
            assert_eq!(indication.security(), Ok(SecuritySpec::default()));
            Ok(DispatchResult::Handled)
        });

        let src = FullAddress::short(0xabcd, 0x0042);
        let dst = FullAddress::short(0xabcd, BROADCAST_SHORT_ADDRESS);
        assert_eq!(
            device.dispatch(&mut data_indication(src, dst)),
            Ok(DispatchResult::Handled)
        );
    }
}
