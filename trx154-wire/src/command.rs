//! Command identifiers for the transceiver host protocol.

use super::{Error, Result};

/// Bit set in every identifier travelling from the radio to the host.
pub const UPSTREAM_FLAG: u8 = 0x20;

/// Bit set in every confirm answering a synchronous request.
///
/// A synchronous confirm identifier is the request identifier with both
/// [`UPSTREAM_FLAG`] and this bit set, so the transport can route sync
/// responses without a lookup table.
pub const SYNC_FLAG: u8 = 0x40;

/// Identifier of a protocol message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandId {
    /// MCPS-DATA request.
    McpsDataRequest = 0x00,
    /// MCPS-PURGE request (synchronous).
    McpsPurgeRequest = 0x01,
    /// PCPS-DATA request, raw PHY transmission on newer hardware.
    PcpsDataRequest = 0x02,
    /// MLME-ASSOCIATE request.
    MlmeAssociateRequest = 0x05,
    /// MLME-ASSOCIATE response.
    MlmeAssociateResponse = 0x06,
    /// MLME-DISASSOCIATE request.
    MlmeDisassociateRequest = 0x07,
    /// MLME-GET request (synchronous).
    MlmeGetRequest = 0x08,
    /// MLME-ORPHAN response.
    MlmeOrphanResponse = 0x09,
    /// MLME-RESET request (synchronous).
    MlmeResetRequest = 0x0a,
    /// MLME-RX-ENABLE request (synchronous).
    MlmeRxEnableRequest = 0x0b,
    /// MLME-SCAN request.
    MlmeScanRequest = 0x0c,
    /// MLME-SET request (synchronous).
    MlmeSetRequest = 0x0d,
    /// MLME-START request (synchronous).
    MlmeStartRequest = 0x0e,
    /// MLME-POLL request (synchronous).
    MlmePollRequest = 0x10,
    /// HWME-SET request (synchronous).
    HwmeSetRequest = 0x11,
    /// HWME-GET request (synchronous).
    HwmeGetRequest = 0x12,
    /// HWME-HAES request (synchronous).
    HwmeHaesRequest = 0x13,
    /// TDME-SETSFR request (synchronous).
    TdmeSetSfrRequest = 0x14,
    /// TDME-GETSFR request (synchronous).
    TdmeGetSfrRequest = 0x15,
    /// TDME-TESTMODE request (synchronous).
    TdmeTestModeRequest = 0x16,
    /// TDME-SET request (synchronous).
    TdmeSetRequest = 0x17,
    /// TDME-TXPKT request (synchronous).
    TdmeTxPktRequest = 0x18,
    /// TDME-LOTLK request (synchronous).
    TdmeLoTlkRequest = 0x19,

    /// MCPS-DATA indication, a received data frame.
    McpsDataIndication = 0x20,
    /// MCPS-DATA confirm, transmission outcome (asynchronous).
    McpsDataConfirm = 0x21,
    /// PCPS-DATA indication (newer hardware).
    PcpsDataIndication = 0x22,
    /// PCPS-DATA confirm (newer hardware, asynchronous).
    PcpsDataConfirm = 0x23,
    /// MLME-ASSOCIATE indication.
    MlmeAssociateIndication = 0x24,
    /// MLME-ASSOCIATE confirm (asynchronous).
    MlmeAssociateConfirm = 0x25,
    /// MLME-DISASSOCIATE indication.
    MlmeDisassociateIndication = 0x26,
    /// MLME-DISASSOCIATE confirm (asynchronous).
    MlmeDisassociateConfirm = 0x27,
    /// MLME-BEACON-NOTIFY indication.
    MlmeBeaconNotifyIndication = 0x28,
    /// MLME-ORPHAN indication.
    MlmeOrphanIndication = 0x29,
    /// MLME-SCAN confirm (asynchronous).
    MlmeScanConfirm = 0x2a,
    /// MLME-COMM-STATUS indication.
    MlmeCommStatusIndication = 0x2b,
    /// MLME-SYNC-LOSS indication.
    MlmeSyncLossIndication = 0x2c,
    /// MLME-POLL indication (newer hardware).
    MlmePollIndication = 0x2d,
    /// HWME-WAKEUP indication.
    HwmeWakeupIndication = 0x2e,
    /// TDME-RXPKT indication.
    TdmeRxPktIndication = 0x2f,
    /// TDME-EDDET indication.
    TdmeEdDetIndication = 0x30,
    /// TDME-ERROR indication.
    TdmeErrorIndication = 0x31,

    /// MCPS-PURGE confirm.
    McpsPurgeConfirm = 0x61,
    /// MLME-GET confirm.
    MlmeGetConfirm = 0x68,
    /// MLME-RESET confirm.
    MlmeResetConfirm = 0x6a,
    /// MLME-RX-ENABLE confirm.
    MlmeRxEnableConfirm = 0x6b,
    /// MLME-SET confirm.
    MlmeSetConfirm = 0x6d,
    /// MLME-START confirm.
    MlmeStartConfirm = 0x6e,
    /// MLME-POLL confirm.
    MlmePollConfirm = 0x70,
    /// HWME-SET confirm.
    HwmeSetConfirm = 0x71,
    /// HWME-GET confirm.
    HwmeGetConfirm = 0x72,
    /// HWME-HAES confirm.
    HwmeHaesConfirm = 0x73,
    /// TDME-SETSFR confirm.
    TdmeSetSfrConfirm = 0x74,
    /// TDME-GETSFR confirm.
    TdmeGetSfrConfirm = 0x75,
    /// TDME-TESTMODE confirm.
    TdmeTestModeConfirm = 0x76,
    /// TDME-SET confirm.
    TdmeSetConfirm = 0x77,
    /// TDME-TXPKT confirm.
    TdmeTxPktConfirm = 0x78,
    /// TDME-LOTLK confirm.
    TdmeLoTlkConfirm = 0x79,
}

impl CommandId {
    /// Query whether this message travels from the radio to the host.
    pub fn is_upstream(&self) -> bool {
        (*self as u8) & UPSTREAM_FLAG != 0
    }

    /// Query whether this is a confirm answering a synchronous request.
    pub fn is_sync_confirm(&self) -> bool {
        (*self as u8) & SYNC_FLAG != 0
    }

    /// Return the confirm identifier answering this request, if the request
    /// is synchronous.
    pub fn sync_response(&self) -> Option<CommandId> {
        use CommandId::*;
        let confirm = match self {
            McpsPurgeRequest => McpsPurgeConfirm,
            MlmeGetRequest => MlmeGetConfirm,
            MlmeResetRequest => MlmeResetConfirm,
            MlmeRxEnableRequest => MlmeRxEnableConfirm,
            MlmeSetRequest => MlmeSetConfirm,
            MlmeStartRequest => MlmeStartConfirm,
            MlmePollRequest => MlmePollConfirm,
            HwmeSetRequest => HwmeSetConfirm,
            HwmeGetRequest => HwmeGetConfirm,
            HwmeHaesRequest => HwmeHaesConfirm,
            TdmeSetSfrRequest => TdmeSetSfrConfirm,
            TdmeGetSfrRequest => TdmeGetSfrConfirm,
            TdmeTestModeRequest => TdmeTestModeConfirm,
            TdmeSetRequest => TdmeSetConfirm,
            TdmeTxPktRequest => TdmeTxPktConfirm,
            TdmeLoTlkRequest => TdmeLoTlkConfirm,
            _ => return None,
        };
        Some(confirm)
    }
}

impl TryFrom<u8> for CommandId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        use CommandId::*;
        Ok(match value {
            0x00 => McpsDataRequest,
            0x01 => McpsPurgeRequest,
            0x02 => PcpsDataRequest,
            0x05 => MlmeAssociateRequest,
            0x06 => MlmeAssociateResponse,
            0x07 => MlmeDisassociateRequest,
            0x08 => MlmeGetRequest,
            0x09 => MlmeOrphanResponse,
            0x0a => MlmeResetRequest,
            0x0b => MlmeRxEnableRequest,
            0x0c => MlmeScanRequest,
            0x0d => MlmeSetRequest,
            0x0e => MlmeStartRequest,
            0x10 => MlmePollRequest,
            0x11 => HwmeSetRequest,
            0x12 => HwmeGetRequest,
            0x13 => HwmeHaesRequest,
            0x14 => TdmeSetSfrRequest,
            0x15 => TdmeGetSfrRequest,
            0x16 => TdmeTestModeRequest,
            0x17 => TdmeSetRequest,
            0x18 => TdmeTxPktRequest,
            0x19 => TdmeLoTlkRequest,
            0x20 => McpsDataIndication,
            0x21 => McpsDataConfirm,
            0x22 => PcpsDataIndication,
            0x23 => PcpsDataConfirm,
            0x24 => MlmeAssociateIndication,
            0x25 => MlmeAssociateConfirm,
            0x26 => MlmeDisassociateIndication,
            0x27 => MlmeDisassociateConfirm,
            0x28 => MlmeBeaconNotifyIndication,
            0x29 => MlmeOrphanIndication,
            0x2a => MlmeScanConfirm,
            0x2b => MlmeCommStatusIndication,
            0x2c => MlmeSyncLossIndication,
            0x2d => MlmePollIndication,
            0x2e => HwmeWakeupIndication,
            0x2f => TdmeRxPktIndication,
            0x30 => TdmeEdDetIndication,
            0x31 => TdmeErrorIndication,
            0x61 => McpsPurgeConfirm,
            0x68 => MlmeGetConfirm,
            0x6a => MlmeResetConfirm,
            0x6b => MlmeRxEnableConfirm,
            0x6d => MlmeSetConfirm,
            0x6e => MlmeStartConfirm,
            0x70 => MlmePollConfirm,
            0x71 => HwmeSetConfirm,
            0x72 => HwmeGetConfirm,
            0x73 => HwmeHaesConfirm,
            0x74 => TdmeSetSfrConfirm,
            0x75 => TdmeGetSfrConfirm,
            0x76 => TdmeTestModeConfirm,
            0x77 => TdmeSetConfirm,
            0x78 => TdmeTxPktConfirm,
            0x79 => TdmeLoTlkConfirm,
            _ => return Err(Error),
        })
    }
}
