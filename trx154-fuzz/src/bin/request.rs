use afl::*;
use arbitrary::Arbitrary;
use trx154_wire::{AddressMode, FullAddress, MessageBuffer, SecuritySpec, TxOptions, WireCommand};

#[derive(Debug, Arbitrary)]
struct Input {
    src_addr_mode: AddressMode,
    dst: FullAddress,
    msdu_handle: u8,
    tx_options: u8,
    msdu: Vec<u8>,
    security: Option<SecuritySpec>,
    start: StartInput,
}

#[derive(Debug, Arbitrary)]
struct StartInput {
    pan_id: u16,
    coord_realign_security: Option<SecuritySpec>,
    beacon_security: Option<SecuritySpec>,
}

fn main() {
    fuzz!(|input: Input| {
        let msdu = &input.msdu[..input.msdu.len().min(trx154_wire::MAX_MSDU_LEN)];
        let request = trx154_wire::DataRequest {
            src_addr_mode: input.src_addr_mode,
            dst: input.dst,
            msdu_handle: input.msdu_handle,
            tx_options: TxOptions::from_bits_truncate(input.tx_options),
            msdu,
            security: input.security,
        };
        let message = MessageBuffer::encode(&request);
        assert_eq!(message.length() as usize, request.buffer_len());

        let start = trx154_wire::StartRequest {
            pan_id: input.start.pan_id,
            logical_channel: 11,
            beacon_order: 15,
            superframe_order: 15,
            pan_coordinator: false,
            battery_life_extension: false,
            coord_realignment: false,
            coord_realign_security: input.start.coord_realign_security,
            beacon_security: input.start.beacon_security,
        };
        let message = MessageBuffer::encode(&start);
        assert_eq!(message.length() as usize, start.buffer_len());
    });
}
