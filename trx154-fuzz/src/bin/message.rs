use afl::*;
use trx154_wire::{
    AssociateConfirm, BeaconNotifyIndication, CommandId, DataIndication, Message, ScanConfirm,
};

fn main() {
    fuzz!(|data: &[u8]| {
        let Ok(message) = Message::new(data) else {
            return;
        };
        let Ok(command) = message.command_id() else {
            return;
        };

        let payload = message.payload();
        match command {
            CommandId::McpsDataIndication => {
                if let Ok(indication) = DataIndication::new(payload) {
                    let _ = indication.msdu();
                    let _ = indication.security();
                }
            }
            CommandId::MlmeScanConfirm => {
                if let Ok(confirm) = ScanConfirm::new(payload) {
                    for descriptor in confirm.pan_descriptors() {
                        let _ = descriptor.coordinator();
                        let _ = descriptor.security();
                    }
                }
            }
            CommandId::MlmeBeaconNotifyIndication => {
                if let Ok(indication) = BeaconNotifyIndication::new(payload) {
                    let _ = indication.sdu();
                }
            }
            CommandId::MlmeAssociateConfirm => {
                if let Ok(confirm) = AssociateConfirm::new(payload) {
                    let _ = confirm.security();
                }
            }
            _ => {}
        }
    });
}
