use super::*;

mod encoding;
mod parsing;

#[test]
fn sync_response_ids() {
    assert_eq!(
        CommandId::MlmeSetRequest.sync_response(),
        Some(CommandId::MlmeSetConfirm)
    );
    assert_eq!(
        CommandId::TdmeLoTlkRequest.sync_response(),
        Some(CommandId::TdmeLoTlkConfirm)
    );
    assert_eq!(CommandId::McpsDataRequest.sync_response(), None);
    assert_eq!(CommandId::MlmeScanRequest.sync_response(), None);
}

#[test]
fn command_id_flags() {
    assert!(!CommandId::MlmeSetRequest.is_upstream());
    assert!(CommandId::McpsDataIndication.is_upstream());
    assert!(CommandId::MlmeSetConfirm.is_upstream());
    assert!(CommandId::MlmeSetConfirm.is_sync_confirm());
    assert!(!CommandId::MlmeScanConfirm.is_sync_confirm());
}

#[test]
fn command_id_round_trip() {
    for byte in 0..=u8::MAX {
        if let Ok(id) = CommandId::try_from(byte) {
            assert_eq!(id as u8, byte);
        }
    }
}

#[test]
fn status_round_trip() {
    for byte in 0..=u8::MAX {
        let status = MacStatus::from(byte);
        assert_eq!(u8::from(status), byte);
    }
    assert_eq!(MacStatus::from(0x00), MacStatus::Success);
    assert_eq!(MacStatus::from(0xea), MacStatus::NoBeacon);
    assert_eq!(MacStatus::from(0x42), MacStatus::Unknown(0x42));
}
