//! Callback slots for inbound confirms and indications.

use trx154_wire as wire;

use crate::device::Device;
use crate::transport::Transport;
use crate::{DispatchResult, Error};

/// Value returned by a callback: handled, declined, or an error.
pub type CallbackResult = Result<DispatchResult, Error>;

/// Callback receiving an MCPS-DATA indication.
pub type DataIndicationCallback<T> =
    fn(&wire::DataIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MCPS-DATA confirm.
pub type DataConfirmCallback<T> = fn(&wire::DataConfirm<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving a PCPS-DATA indication.
pub type PhyDataIndicationCallback<T> =
    fn(&wire::PhyDataIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving a PCPS-DATA confirm.
pub type PhyDataConfirmCallback<T> =
    fn(&wire::PhyDataConfirm<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-ASSOCIATE indication.
pub type AssociateIndicationCallback<T> =
    fn(&wire::AssociateIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-ASSOCIATE confirm.
pub type AssociateConfirmCallback<T> =
    fn(&wire::AssociateConfirm<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-DISASSOCIATE indication.
pub type DisassociateIndicationCallback<T> =
    fn(&wire::DisassociateIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-DISASSOCIATE confirm.
pub type DisassociateConfirmCallback<T> =
    fn(&wire::DisassociateConfirm<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-BEACON-NOTIFY indication.
pub type BeaconNotifyIndicationCallback<T> =
    fn(&wire::BeaconNotifyIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-ORPHAN indication.
pub type OrphanIndicationCallback<T> =
    fn(&wire::OrphanIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-SCAN confirm, after LQI filtering.
pub type ScanConfirmCallback<T> = fn(&wire::ScanConfirm<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-COMM-STATUS indication.
pub type CommStatusIndicationCallback<T> =
    fn(&wire::CommStatusIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-SYNC-LOSS indication.
pub type SyncLossIndicationCallback<T> =
    fn(&wire::SyncLossIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an MLME-POLL indication.
pub type PollIndicationCallback<T> =
    fn(&wire::PollIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving an HWME-WAKEUP indication.
pub type WakeupIndicationCallback<T> =
    fn(&wire::WakeupIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving a TDME-RXPKT indication.
pub type RxPktIndicationCallback<T> =
    fn(&wire::RxPktIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving a TDME-EDDET indication.
pub type EdDetIndicationCallback<T> =
    fn(&wire::EdDetIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Callback receiving a TDME-ERROR indication.
pub type ErrorIndicationCallback<T> =
    fn(&wire::ErrorIndication<&[u8]>, &mut Device<T>) -> CallbackResult;
/// Fallback receiving the whole message when no slot handles it.
pub type GenericDispatchCallback<T> = fn(&wire::Message<&[u8]>, &mut Device<T>) -> CallbackResult;

/// The callback table of one device.
///
/// One slot per inbound message type; the last registration wins and there
/// is no unregistration beyond storing `None`. Unhandled messages fall
/// through to [`generic_dispatch`].
///
/// [`generic_dispatch`]: Callbacks::generic_dispatch
pub struct Callbacks<T: Transport> {
    pub mcps_data_indication: Option<DataIndicationCallback<T>>,
    pub mcps_data_confirm: Option<DataConfirmCallback<T>>,
    pub pcps_data_indication: Option<PhyDataIndicationCallback<T>>,
    pub pcps_data_confirm: Option<PhyDataConfirmCallback<T>>,
    pub mlme_associate_indication: Option<AssociateIndicationCallback<T>>,
    pub mlme_associate_confirm: Option<AssociateConfirmCallback<T>>,
    pub mlme_disassociate_indication: Option<DisassociateIndicationCallback<T>>,
    pub mlme_disassociate_confirm: Option<DisassociateConfirmCallback<T>>,
    pub mlme_beacon_notify_indication: Option<BeaconNotifyIndicationCallback<T>>,
    pub mlme_orphan_indication: Option<OrphanIndicationCallback<T>>,
    pub mlme_scan_confirm: Option<ScanConfirmCallback<T>>,
    pub mlme_comm_status_indication: Option<CommStatusIndicationCallback<T>>,
    pub mlme_sync_loss_indication: Option<SyncLossIndicationCallback<T>>,
    pub mlme_poll_indication: Option<PollIndicationCallback<T>>,
    pub hwme_wakeup_indication: Option<WakeupIndicationCallback<T>>,
    pub tdme_rxpkt_indication: Option<RxPktIndicationCallback<T>>,
    pub tdme_eddet_indication: Option<EdDetIndicationCallback<T>>,
    pub tdme_error_indication: Option<ErrorIndicationCallback<T>>,
    pub generic_dispatch: Option<GenericDispatchCallback<T>>,
}

impl<T: Transport> Default for Callbacks<T> {
    fn default() -> Self {
        Self {
            mcps_data_indication: None,
            mcps_data_confirm: None,
            pcps_data_indication: None,
            pcps_data_confirm: None,
            mlme_associate_indication: None,
            mlme_associate_confirm: None,
            mlme_disassociate_indication: None,
            mlme_disassociate_confirm: None,
            mlme_beacon_notify_indication: None,
            mlme_orphan_indication: None,
            mlme_scan_confirm: None,
            mlme_comm_status_indication: None,
            mlme_sync_loss_indication: None,
            mlme_poll_indication: None,
            hwme_wakeup_indication: None,
            tdme_rxpkt_indication: None,
            tdme_eddet_indication: None,
            tdme_error_indication: None,
            generic_dispatch: None,
        }
    }
}
