use wire::{
    ByteReader, ByteWriter, Decode, DecodeExact, EncapCommand, EncapHeader, EncapPacket, Encode,
    OpaqueBuffer, WireError, ENCAP_HEADER_SIZE,
};

fn register_session_reply() -> Vec<u8> {
    let mut bytes = vec![
        0x65, 0x00, // command: RegisterSession
        0x04, 0x00, // length
        0x78, 0x56, 0x34, 0x12, // session handle
        0x00, 0x00, 0x00, 0x00, // status
    ];
    bytes.extend_from_slice(b"CTX12345");
    bytes.extend_from_slice(&[0, 0, 0, 0]); // options
    bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]); // protocol version + options
    bytes
}

#[test]
fn decode_known_capture() {
    let bytes = register_session_reply();
    let packet = EncapPacket::from_bytes(&bytes).unwrap();
    assert_eq!(packet.header.command, EncapCommand::REGISTER_SESSION);
    assert_eq!(packet.header.session_handle, 0x1234_5678);
    assert_eq!(packet.header.sender_context, *b"CTX12345");
    assert_eq!(
        packet.payload().unwrap().as_bytes(),
        &[0x01, 0x00, 0x00, 0x00]
    );
    assert_eq!(packet.to_vec().unwrap(), bytes);
}

#[test]
fn explicit_decode_length_below_header_fails() {
    let bytes = register_session_reply();
    for len in [0, 1, ENCAP_HEADER_SIZE - 1] {
        let mut reader = ByteReader::new(&bytes);
        let err = EncapPacket::decode_exact(&mut reader, len).unwrap_err();
        assert!(matches!(err, WireError::LengthTooShort { .. }), "len {len}");
    }
}

#[test]
fn explicit_decode_length_must_match_declared() {
    let bytes = register_session_reply();
    for len in [ENCAP_HEADER_SIZE, bytes.len() - 1, bytes.len() + 1] {
        let mut reader = ByteReader::new(&bytes);
        let err = EncapPacket::decode_exact(&mut reader, len).unwrap_err();
        assert_eq!(
            err,
            WireError::LengthMismatch {
                given: len,
                declared: bytes.len()
            }
        );
    }
}

#[test]
fn consecutive_packets_in_one_buffer() {
    let first = EncapPacket::with_payload(
        EncapCommand::SEND_RR_DATA,
        1,
        &OpaqueBuffer::from(vec![1, 2, 3]),
    )
    .unwrap();
    let second = EncapPacket::new(EncapHeader::new(EncapCommand::NOP, 1));

    let mut buf = vec![0u8; first.encoded_len() + second.encoded_len()];
    let mut writer = ByteWriter::new(&mut buf);
    first.encode(&mut writer).unwrap();
    second.encode(&mut writer).unwrap();
    assert_eq!(writer.remaining(), 0);

    let mut reader = ByteReader::new(&buf);
    assert_eq!(EncapPacket::decode(&mut reader).unwrap(), first);
    assert_eq!(EncapPacket::decode(&mut reader).unwrap(), second);
    assert!(reader.is_empty());
}

#[test]
fn encode_into_undersized_buffer_fails() {
    let packet = EncapPacket::with_payload(
        EncapCommand::SEND_RR_DATA,
        1,
        &OpaqueBuffer::from(vec![0u8; 8]),
    )
    .unwrap();
    let mut buf = vec![0u8; packet.encoded_len() - 1];
    let mut writer = ByteWriter::new(&mut buf);
    assert!(matches!(
        packet.encode(&mut writer),
        Err(WireError::Cursor(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn header_serde_json_roundtrip() {
    let mut header = EncapHeader::new(EncapCommand::LIST_IDENTITY, 9);
    header.status = 1;
    let json = serde_json::to_string(&header).unwrap();
    let back: EncapHeader = serde_json::from_str(&json).unwrap();
    assert_eq!(back, header);
}
