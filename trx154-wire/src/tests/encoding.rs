use crate::*;

fn active_security() -> SecuritySpec {
    SecuritySpec {
        security_level: 5,
        key_id_mode: 1,
        key_source: [1, 2, 3, 4, 5, 6, 7, 8],
        key_index: 9,
    }
}

#[test]
fn data_request_without_security() {
    let request = DataRequest {
        src_addr_mode: AddressMode::Short,
        dst: FullAddress::short(0xabcd, 0x1234),
        msdu_handle: 7,
        tx_options: TxOptions::ACK_REQUESTED,
        msdu: &[0xde, 0xad],
        security: None,
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(
        message.as_slice(),
        [
            0x00, 18, // envelope
            0x02, 0xcd, 0xab, 0x34, 0x12, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // src + dst
            0x02, 0x07, 0x01, // msdu length, handle, tx options
            0xde, 0xad, // msdu
            0x00, // collapsed security tail
        ]
    );
}

#[test]
fn data_request_with_security() {
    let request = DataRequest {
        src_addr_mode: AddressMode::Short,
        dst: FullAddress::short(0xabcd, 0x1234),
        msdu_handle: 7,
        tx_options: TxOptions::empty(),
        msdu: &[0xde, 0xad],
        security: Some(active_security()),
    };

    let message = MessageBuffer::encode(&request);

    // full tail instead of the collapsed byte
    assert_eq!(message.length(), 18 - 1 + 11);
    assert_eq!(
        &message.payload()[17..],
        [5, 1, 1, 2, 3, 4, 5, 6, 7, 8, 9]
    );
}

#[test]
fn zero_level_security_collapses() {
    // an explicitly zero-level specification encodes like an absent one
    let zeroed = DataRequest {
        src_addr_mode: AddressMode::Short,
        dst: FullAddress::short(0xabcd, 0x1234),
        msdu_handle: 0,
        tx_options: TxOptions::empty(),
        msdu: &[],
        security: Some(SecuritySpec::default()),
    };
    let absent = DataRequest {
        security: None,
        ..zeroed
    };

    assert_eq!(
        MessageBuffer::encode(&zeroed).as_slice(),
        MessageBuffer::encode(&absent).as_slice()
    );
}

#[test]
fn associate_request_trimmed_length() {
    let request = AssociateRequest {
        logical_channel: 21,
        dst: FullAddress::short(0xface, 0x0001),
        capability_info: 0x80,
        security: None,
    };

    let message = MessageBuffer::encode(&request);

    // 13 fixed bytes plus the one-byte collapsed tail
    assert_eq!(message.command_id(), Ok(CommandId::MlmeAssociateRequest));
    assert_eq!(message.length(), 14);
    assert_eq!(message.payload()[13], 0x00);
}

#[test]
fn start_request_both_tails_collapsed() {
    let request = StartRequest {
        pan_id: 0xbeef,
        logical_channel: 11,
        beacon_order: 15,
        superframe_order: 15,
        pan_coordinator: true,
        battery_life_extension: false,
        coord_realignment: false,
        coord_realign_security: None,
        beacon_security: None,
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(
        message.as_slice(),
        [
            0x0e, 10, // envelope
            0xef, 0xbe, 11, 15, 15, 1, 0, 0, // fixed fields
            0x00, 0x00, // two collapsed tails
        ]
    );
}

#[test]
fn start_request_second_tail_floats() {
    let base = StartRequest {
        pan_id: 0xbeef,
        logical_channel: 11,
        beacon_order: 15,
        superframe_order: 15,
        pan_coordinator: true,
        battery_life_extension: false,
        coord_realignment: false,
        coord_realign_security: None,
        beacon_security: None,
    };

    let realign_only = StartRequest {
        coord_realign_security: Some(active_security()),
        ..base
    };
    let beacon_only = StartRequest {
        beacon_security: Some(active_security()),
        ..base
    };
    let both = StartRequest {
        coord_realign_security: Some(active_security()),
        beacon_security: Some(active_security()),
        ..base
    };

    // each tail trims independently, and their lengths add up
    assert_eq!(base.buffer_len(), 10);
    assert_eq!(realign_only.buffer_len(), 20);
    assert_eq!(beacon_only.buffer_len(), 20);
    assert_eq!(
        both.buffer_len(),
        realign_only.buffer_len() + beacon_only.buffer_len() - base.buffer_len()
    );

    // with the first tail collapsed, the beacon tail starts at offset 9
    let message = MessageBuffer::encode(&beacon_only);
    assert_eq!(message.payload()[8], 0x00);
    assert_eq!(message.payload()[9], 5);

    // with the first tail active, the beacon tail moves to offset 19
    let message = MessageBuffer::encode(&both);
    assert_eq!(message.payload()[8], 5);
    assert_eq!(message.payload()[19], 5);
}

#[test]
fn set_request_single_byte_attribute() {
    let request = SetRequest {
        attribute: PibAttribute::PhyCurrentChannel,
        attribute_index: 0,
        value: &[0x17],
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(message.as_slice(), [0x0d, 3, 0x00, 0x00, 0x17]);
}

#[test]
fn get_request() {
    let request = GetRequest {
        attribute: PibAttribute::MacShortAddress,
        attribute_index: 0,
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(message.as_slice(), [0x08, 2, 0x53, 0x00]);
}

#[test]
fn rx_enable_request_little_endian() {
    let request = RxEnableRequest {
        defer_permit: true,
        rx_on_time: 0x0a0b0c0d,
        rx_on_duration: 0x00112233,
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(
        message.as_slice(),
        [0x0b, 9, 1, 0x0d, 0x0c, 0x0b, 0x0a, 0x33, 0x22, 0x11, 0x00]
    );
}

#[test]
fn scan_request() {
    let request = ScanRequest {
        scan_type: ScanType::Active,
        scan_channels: 0x07fff800,
        scan_duration: 5,
        security: None,
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(
        message.as_slice(),
        [0x0c, 7, 0x01, 0x00, 0xf8, 0x7f, 0x07, 5, 0x00]
    );
}

#[test]
fn poll_request_with_and_without_interval() {
    let without = PollRequest {
        coord_address: FullAddress::short(0x1234, 0x0042),
        interval: None,
        security: None,
    };
    let with = PollRequest {
        interval: Some(0x000a),
        ..without
    };

    assert_eq!(without.buffer_len(), 12);
    assert_eq!(with.buffer_len(), 14);

    let message = MessageBuffer::encode(&with);
    assert_eq!(&message.payload()[11..13], [0x0a, 0x00]);
    assert_eq!(message.payload()[13], 0x00);
}

#[test]
fn orphan_response() {
    let request = OrphanResponse {
        orphan_address: [1, 2, 3, 4, 5, 6, 7, 8],
        short_address: 0xcafe,
        associated_member: true,
        security: None,
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(
        message.as_slice(),
        [0x09, 12, 1, 2, 3, 4, 5, 6, 7, 8, 0xfe, 0xca, 1, 0x00]
    );
}

#[test]
fn hwme_set_request() {
    let request = HwmeSetRequest {
        attribute: HwAttribute::LqiLimit,
        value: &[0x00],
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(message.as_slice(), [0x11, 3, 0x11, 1, 0x00]);
}

#[test]
fn haes_request() {
    let request = HaesRequest {
        mode: 1,
        data: [0xaa; 16],
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(message.length(), 17);
    assert_eq!(message.payload()[0], 1);
    assert_eq!(&message.payload()[1..], [0xaa; 16]);
}

#[test]
fn tdme_setsfr_request() {
    let request = SetSfrRequest {
        page: 1,
        address: 0xe1,
        value: 0x29,
    };

    let message = MessageBuffer::encode(&request);

    assert_eq!(message.as_slice(), [0x14, 3, 1, 0xe1, 0x29]);
}

#[test]
fn txpkt_request_appends_payload_only_when_asked() {
    let generated = TxPktRequest {
        sequence_number: 3,
        data: TxPktData::Random { length: 20 },
    };
    let appended = TxPktRequest {
        sequence_number: 3,
        data: TxPktData::Appended(&[0x10, 0x20, 0x30]),
    };

    assert_eq!(
        MessageBuffer::encode(&generated).as_slice(),
        [0x18, 3, 0x00, 3, 20]
    );
    assert_eq!(
        MessageBuffer::encode(&appended).as_slice(),
        [0x18, 6, 0x03, 3, 3, 0x10, 0x20, 0x30]
    );
}
