use crate::*;

#[test]
fn message_envelope() {
    let bytes = [0x6d, 0x01, 0x00];
    let message = Message::new(&bytes[..]).unwrap();

    assert_eq!(message.command_id(), Ok(CommandId::MlmeSetConfirm));
    assert_eq!(message.length(), 1);
    assert_eq!(message.payload(), [0x00]);
}

#[test]
fn message_truncated_payload_is_rejected() {
    // the header announces more payload than the buffer holds
    let bytes = [0x6d, 0x05, 0x00];
    assert!(Message::new(&bytes[..]).is_err());
}

#[test]
fn message_unknown_command() {
    let bytes = [0xf4, 0x00];
    let message = Message::new(&bytes[..]).unwrap();

    assert_eq!(message.command(), 0xf4);
    assert!(message.command_id().is_err());
}

#[test]
fn security_spec_collapsed_and_full() {
    assert_eq!(
        SecuritySpec::parse(&[0x00]),
        Ok(SecuritySpec::default())
    );

    let spec = SecuritySpec::parse(&[5, 1, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    assert_eq!(spec.security_level, 5);
    assert_eq!(spec.key_id_mode, 1);
    assert_eq!(spec.key_source, [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(spec.key_index, 9);

    // an active level needs the full structure
    assert!(SecuritySpec::parse(&[5, 1, 2]).is_err());
    assert!(SecuritySpec::parse(&[]).is_err());
}

#[test]
fn data_indication() {
    #[rustfmt::skip]
    let payload = [
        // src: short address 0x0001 on PAN 0xabcd
        0x02, 0xcd, 0xab, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        // dst: short address 0x0002 on PAN 0xabcd
        0x02, 0xcd, 0xab, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x03,                   // msdu length
        0xc8,                   // link quality
        0x2a,                   // dsn
        0x10, 0x00, 0x00, 0x00, // timestamp
        0x11, 0x22, 0x33,       // msdu
        0x00,                   // collapsed security tail
    ];

    let indication = DataIndication::new(&payload[..]).unwrap();

    assert_eq!(indication.src().mode, AddressMode::Short);
    assert_eq!(indication.src().pan_id, 0xabcd);
    assert_eq!(indication.src().short_address(), 0x0001);
    assert_eq!(indication.dst().short_address(), 0x0002);
    assert_eq!(indication.msdu_length(), 3);
    assert_eq!(indication.mpdu_link_quality(), 0xc8);
    assert_eq!(indication.dsn(), 0x2a);
    assert_eq!(indication.timestamp(), 0x10);
    assert_eq!(indication.msdu(), [0x11, 0x22, 0x33]);
    assert_eq!(indication.security(), Ok(SecuritySpec::default()));
}

#[test]
fn data_indication_truncated_msdu_is_rejected() {
    let mut payload = [0u8; 30];
    payload[22] = 200; // msdu length far beyond the buffer
    assert!(DataIndication::new(&payload[..]).is_err());
}

#[test]
fn get_confirm() {
    let payload = [0x00, 0x53, 0x00, 0x02, 0x34, 0x12];
    let confirm = GetConfirm::new(&payload[..]).unwrap();

    assert_eq!(confirm.status(), MacStatus::Success);
    assert_eq!(confirm.attribute(), 0x53);
    assert_eq!(confirm.attribute_index(), 0);
    assert_eq!(confirm.value(), [0x34, 0x12]);
}

#[test]
fn associate_confirm() {
    let payload = [0x01, 0x80, 0x00, 0x00];
    let confirm = AssociateConfirm::new(&payload[..]).unwrap();

    assert_eq!(confirm.assoc_short_address(), 0x8001);
    assert_eq!(confirm.status(), MacStatus::Success);
}

#[test]
fn comm_status_indication() {
    let bytes = hex::decode("cdab020300000000000000030405060708090a0be800").unwrap();
    let indication = CommStatusIndication::new(&bytes[..]).unwrap();

    assert_eq!(indication.pan_id(), 0xabcd);
    assert_eq!(indication.src_addr_mode(), AddressMode::Short);
    assert_eq!(indication.src_address()[0], 0x03);
    assert_eq!(indication.dst_addr_mode(), AddressMode::Extended);
    assert_eq!(indication.status(), MacStatus::InvalidParameter);
}

fn pan_descriptor_bytes(short_addr: u16, lqi: u8, secured: bool) -> std::vec::Vec<u8> {
    let mut bytes = std::vec::Vec::new();
    let mut coord = [0u8; 11];
    FullAddress::short(0x1111, short_addr).emit(&mut coord);
    bytes.extend_from_slice(&coord);
    bytes.push(15); // logical channel
    bytes.extend_from_slice(&[0xff, 0xcf]); // superframe spec
    bytes.push(1); // gts permit
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

#[test]
fn pan_descriptor_lengths() {
    let plain = pan_descriptor_bytes(0x0001, 100, false);
    let secured = pan_descriptor_bytes(0x0001, 100, true);

    let descriptor = PanDescriptor::new(&plain[..]).unwrap();
    assert_eq!(descriptor.len(), 22);
    assert_eq!(descriptor.link_quality(), 100);
    assert_eq!(descriptor.coordinator().short_address(), 0x0001);

    let descriptor = PanDescriptor::new(&secured[..]).unwrap();
    assert_eq!(descriptor.len(), 32);
    assert_eq!(descriptor.security().unwrap().security_level, 5);
}

#[test]
fn scan_confirm_descriptor_walk() {
    let mut payload = vec![
        0x00, // status
        0x01, // active scan
        0x00, 0x00, 0x00, 0x00, // unscanned channels
        0x02, // result list size
    ];
    payload.extend_from_slice(&pan_descriptor_bytes(0x000a, 200, false));
    payload.extend_from_slice(&pan_descriptor_bytes(0x000b, 90, true));

    let confirm = ScanConfirm::new(&payload[..]).unwrap();
    assert_eq!(confirm.status(), MacStatus::Success);
    assert_eq!(confirm.scan_type(), ScanType::Active);
    assert_eq!(confirm.result_list_size(), 2);

    let descriptors: std::vec::Vec<_> = confirm.pan_descriptors().collect();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].coordinator().short_address(), 0x000a);
    assert_eq!(descriptors[0].len(), 22);
    assert_eq!(descriptors[1].coordinator().short_address(), 0x000b);
    assert_eq!(descriptors[1].len(), 32);
}

#[test]
fn scan_confirm_energy_list() {
    let payload = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 10, 20, 30];
    let confirm = ScanConfirm::new(&payload[..]).unwrap();

    assert_eq!(confirm.scan_type(), ScanType::Energy);
    assert_eq!(confirm.energy_detect_list(), [10, 20, 30]);
}

#[test]
fn beacon_notify_indication() {
    let mut payload = vec![0x07]; // bsn
    payload.extend_from_slice(&pan_descriptor_bytes(0x00aa, 180, false));
    payload.push(0x00); // no pending addresses
    payload.push(0x02); // sdu length
    payload.extend_from_slice(&[0xbe, 0xef]);

    let indication = BeaconNotifyIndication::new(&payload[..]).unwrap();

    assert_eq!(indication.bsn(), 0x07);
    let descriptor = indication.pan_descriptor().unwrap();
    assert_eq!(descriptor.coordinator().short_address(), 0x00aa);
    assert_eq!(indication.sdu(), Ok(&[0xbe, 0xef][..]));
}

#[test]
fn beacon_notify_indication_with_pending_addresses() {
    let mut payload = vec![0x07];
    payload.extend_from_slice(&pan_descriptor_bytes(0x00aa, 180, false));
    payload.push(0x12); // one short and one extended pending address
    payload.extend_from_slice(&[0x01, 0x00]);
    payload.extend_from_slice(&[0; 8]);
    payload.push(0x01); // sdu length
    payload.push(0x5a);

    let indication = BeaconNotifyIndication::new(&payload[..]).unwrap();
    assert_eq!(indication.sdu(), Ok(&[0x5a][..]));
}

#[test]
fn disassociate_indication() {
    let payload = [1, 2, 3, 4, 5, 6, 7, 8, 0x02, 0x00];
    let indication = DisassociateIndication::new(&payload[..]).unwrap();

    assert_eq!(indication.device_address(), [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(indication.reason(), 0x02);
}

#[test]
fn hwme_get_confirm() {
    let payload = [0x00, 0x10, 0x01, 0x01];
    let confirm = HwmeGetConfirm::new(&payload[..]).unwrap();

    assert_eq!(confirm.status(), MacStatus::Success);
    assert_eq!(confirm.attribute(), 0x10);
    assert_eq!(confirm.value(), [0x01]);
}

#[test]
fn lotlk_confirm() {
    let payload = [0x00, 11, 0x01, 0x5a, 0x12, 0xa7];
    let confirm = LoTlkConfirm::new(&payload[..]).unwrap();

    assert_eq!(confirm.status(), MacStatus::Success);
    assert_eq!(confirm.channel(), 11);
    assert!(confirm.rx_txb());
    assert_eq!(confirm.lo_fdac(), 0x5a);
    assert_eq!(confirm.lo_amp(), 0x12);
    assert_eq!(confirm.lo_txcal(), 0xa7);
}
