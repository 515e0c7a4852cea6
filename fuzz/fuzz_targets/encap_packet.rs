#![no_main]

use cip::{ForwardCloseSuccess, ForwardOpenSuccess, SetBeamMaskRequest, SetFormatRequest};
use libfuzzer_sys::fuzz_target;
use wire::{ByteReader, DecodeExact, EncapPacket, Encode, Limits};

fuzz_target!(|data: &[u8]| {
    let limits = Limits::for_testing();
    let mut reader = ByteReader::new(data);

    while let Ok(packet) = EncapPacket::decode_limited(&mut reader, &limits) {
        // A decoded packet re-encodes to the bytes it came from.
        let bytes = packet.to_vec().expect("decoded packet re-encodes");
        assert_eq!(EncapPacket::from_bytes(&bytes).ok(), Some(packet.clone()));

        if let Ok(reply) = packet.payload_as::<ForwardOpenSuccess>() {
            let bytes = reply.to_vec().expect("decoded reply re-encodes");
            assert_eq!(ForwardOpenSuccess::from_bytes(&bytes).ok(), Some(reply));
        }
        if let Ok(reply) = packet.payload_as::<ForwardCloseSuccess>() {
            let bytes = reply.to_vec().expect("decoded reply re-encodes");
            assert_eq!(ForwardCloseSuccess::from_bytes(&bytes).ok(), Some(reply));
        }
        let _ = packet.payload_as::<SetFormatRequest>();
        let _ = packet.payload_as::<SetBeamMaskRequest>();
    }

    let _ = EncapPacket::from_bytes(data);
});
