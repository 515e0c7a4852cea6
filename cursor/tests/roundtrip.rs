use cursor::{ByteReader, ByteWriter, CursorError};

#[test]
fn bounded_writer_roundtrip_fields() {
    let mut buf = [0u8; 8];
    let mut writer = ByteWriter::new(&mut buf);
    writer.write_u16(0x006F).unwrap();
    writer.write_u16(0x0010).unwrap();
    writer.write_u32(0x1122_3344).unwrap();
    let bytes_used = writer.finish();

    let mut reader = ByteReader::new(&buf[..bytes_used]);
    assert_eq!(reader.read_u16().unwrap(), 0x006F);
    assert_eq!(reader.read_u16().unwrap(), 0x0010);
    assert_eq!(reader.read_u32().unwrap(), 0x1122_3344);
}

#[test]
fn reader_stops_at_slice_end() {
    let mut buf = [0u8; 8];
    let mut writer = ByteWriter::new(&mut buf);
    writer.write_u32(1).unwrap();
    let used = writer.finish();

    let mut reader = ByteReader::new(&buf[..used]);
    reader.read_u16().unwrap();
    assert!(matches!(
        reader.read_u32(),
        Err(CursorError::UnexpectedEof {
            requested: 4,
            available: 2
        })
    ));
}
