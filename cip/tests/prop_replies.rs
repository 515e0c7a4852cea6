use cip::{ForwardCloseSuccess, ForwardOpenSuccess, Path};
use proptest::prelude::*;
use wire::{ByteReader, Decode, DecodeExact, EncapCommand, EncapPacket, Encode, OpaqueBuffer};

fn response_data_strategy() -> impl Strategy<Value = Vec<u8>> {
    (0usize..=255).prop_flat_map(|words| prop::collection::vec(any::<u8>(), words * 2))
}

prop_compose! {
    fn forward_open_strategy()(
        ids in any::<(u32, u32)>(),
        connection_sn in any::<u16>(),
        originator_vendor_id in any::<u16>(),
        originator_sn in any::<u32>(),
        apis in any::<(u32, u32)>(),
        data in response_data_strategy(),
    ) -> ForwardOpenSuccess {
        let mut reply = ForwardOpenSuccess::default();
        reply.o_to_t_connection_id = ids.0;
        reply.t_to_o_connection_id = ids.1;
        reply.connection_sn = connection_sn;
        reply.originator_vendor_id = originator_vendor_id;
        reply.originator_sn = originator_sn;
        reply.o_to_t_api = apis.0;
        reply.t_to_o_api = apis.1;
        reply.set_response_data(OpaqueBuffer::from(data)).unwrap();
        reply
    }
}

prop_compose! {
    fn forward_close_strategy()(
        connection_sn in any::<u16>(),
        originator_vendor_id in any::<u16>(),
        originator_sn in any::<u32>(),
        data in response_data_strategy(),
    ) -> ForwardCloseSuccess {
        let mut reply = ForwardCloseSuccess::default();
        reply.connection_sn = connection_sn;
        reply.originator_vendor_id = originator_vendor_id;
        reply.originator_sn = originator_sn;
        reply.set_response_data(OpaqueBuffer::from(data)).unwrap();
        reply
    }
}

#[derive(Debug, Clone, Copy)]
enum Segment {
    Class(u8),
    Instance(u8),
    Attribute(u8),
    ConnectionPoint(u8),
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        any::<u8>().prop_map(Segment::Class),
        any::<u8>().prop_map(Segment::Instance),
        any::<u8>().prop_map(Segment::Attribute),
        any::<u8>().prop_map(Segment::ConnectionPoint),
    ]
}

proptest! {
    #[test]
    fn prop_forward_open_roundtrip(reply in forward_open_strategy()) {
        let bytes = reply.to_vec().unwrap();
        prop_assert_eq!(bytes.len(), reply.encoded_len());
        prop_assert_eq!(ForwardOpenSuccess::from_bytes(&bytes).unwrap(), reply);
    }

    #[test]
    fn prop_forward_close_roundtrip(reply in forward_close_strategy()) {
        let bytes = reply.to_vec().unwrap();
        prop_assert_eq!(bytes.len(), reply.encoded_len());
        let mut reader = ByteReader::new(&bytes);
        prop_assert_eq!(ForwardCloseSuccess::decode(&mut reader).unwrap(), reply);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_forward_open_through_packet(reply in forward_open_strategy(), session in any::<u32>()) {
        let packet = EncapPacket::with_payload(EncapCommand::SEND_RR_DATA, session, &reply).unwrap();
        let decoded = EncapPacket::from_bytes(&packet.to_vec().unwrap()).unwrap();
        prop_assert_eq!(decoded.payload_as::<ForwardOpenSuccess>().unwrap(), reply);
    }

    #[test]
    fn prop_path_length_prefix(segments in prop::collection::vec(segment_strategy(), 0..64), pad in any::<bool>()) {
        let mut path = Path::new();
        path.set_pad_after_length(pad);
        for segment in &segments {
            match *segment {
                Segment::Class(v) => path.add_logical_class(v),
                Segment::Instance(v) => path.add_logical_instance(v),
                Segment::Attribute(v) => path.add_logical_attribute(v),
                Segment::ConnectionPoint(v) => path.add_logical_connection_point(v),
            };
        }
        let bytes = path.to_vec().unwrap();
        prop_assert_eq!(bytes.len(), path.encoded_len());
        prop_assert_eq!(usize::from(bytes[0]), segments.len());
        let start = 1 + usize::from(pad);
        if pad {
            prop_assert_eq!(bytes[1], 0);
        }
        prop_assert_eq!(&bytes[start..], path.as_bytes());
    }

    #[test]
    fn prop_decode_arbitrary_bytes_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = ForwardOpenSuccess::from_bytes(&data);
        let _ = ForwardCloseSuccess::from_bytes(&data);
    }
}
