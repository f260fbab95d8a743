pub mod stream;

use stream::Stream;
use winnow::{
    ModalResult, Parser,
    binary::{Endianness, be_u8, u32 as take_u32},
    token::take,
};

use crate::{
    header::{CHUNKED, ID_LENGTH_PRESENT, MESSAGE_BEGIN, MESSAGE_END, NdefHeader, SHORT_RECORD},
    ndef_type::NdefType,
    record::NdefRecord,
};

/// Parse records until one carries the message end flag or the input runs out
pub fn parse_ndef_records(input: &mut Stream<'_>) -> ModalResult<Vec<NdefRecord>> {
    let mut records = Vec::new();

    while !input.is_empty() {
        let record = parse_ndef_record(input)?;
        let last = record.header.message_end;
        records.push(record);

        if last {
            break;
        }
    }

    Ok(records)
}

/// One record: header, type, optional id, payload
pub fn parse_ndef_record(input: &mut Stream<'_>) -> ModalResult<NdefRecord> {
    let header = parse_header(input)?;

    let type_ = owned_bytes(input, header.type_length as usize)?;
    let id = match header.id_length {
        Some(length) => Some(owned_bytes(input, length as usize)?),
        None => None,
    };
    let payload = owned_bytes(input, header.payload_length as usize)?;

    Ok(NdefRecord {
        header,
        type_,
        id,
        payload,
    })
}

fn parse_header(input: &mut Stream<'_>) -> ModalResult<NdefHeader> {
    let flags = be_u8.parse_next(input)?;
    let is_set = |flag: u8| flags & flag != 0;

    let short_record = is_set(SHORT_RECORD);
    let has_id_length = is_set(ID_LENGTH_PRESENT);

    let type_length = be_u8.parse_next(input)?;
    let payload_length = if short_record {
        u32::from(be_u8.parse_next(input)?)
    } else {
        take_u32(Endianness::Big).parse_next(input)?
    };

    let id_length = if has_id_length {
        Some(be_u8.parse_next(input)?)
    } else {
        None
    };

    Ok(NdefHeader {
        message_begin: is_set(MESSAGE_BEGIN),
        message_end: is_set(MESSAGE_END),
        chunked: is_set(CHUNKED),
        short_record,
        has_id_length,
        type_name_format: NdefType::from_bits(flags),
        type_length,
        payload_length,
        id_length,
    })
}

fn owned_bytes(input: &mut Stream<'_>, length: usize) -> ModalResult<Vec<u8>> {
    take(length).map(<[u8]>::to_vec).parse_next(input)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::LazyLock;

    use pretty_assertions::assert_eq;
    use winnow::error::{ErrMode, Needed};

    use super::*;

    /// Fixtures hold the message as comma separated decimal bytes
    fn fixture_bytes(contents: &[u8]) -> Vec<u8> {
        std::str::from_utf8(contents)
            .unwrap()
            .split(',')
            .map(|byte| byte.trim().parse().unwrap())
            .collect()
    }

    pub(crate) static ANDROID_TEXT: LazyLock<Vec<u8>> = LazyLock::new(|| {
        fixture_bytes(include_bytes!("../../../test/data/android_text_message.txt"))
    });

    pub(crate) static TWO_RECORDS: LazyLock<Vec<u8>> = LazyLock::new(|| {
        fixture_bytes(include_bytes!("../../../test/data/two_record_message.txt"))
    });

    #[test]
    fn known_header_parse() {
        let bytes = [0xD1, 0x01, 0x0D, 0x55, 0x02];
        let mut input = stream::new(&bytes);

        assert_eq!(
            parse_header(&mut input).unwrap(),
            NdefHeader {
                message_begin: true,
                message_end: true,
                chunked: false,
                short_record: true,
                has_id_length: false,
                type_name_format: NdefType::WellKnown,
                type_length: 1,
                payload_length: 13,
                id_length: None,
            }
        );
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn long_record_header_parse() {
        let bytes = [0xC1, 0x01, 0x00, 0x00, 0x01, 0x2C];
        let header = parse_header(&mut stream::new(&bytes)).unwrap();

        assert!(!header.short_record);
        assert_eq!(header.payload_length, 300);
    }

    #[test]
    fn header_with_id_length() {
        let bytes = [0xD9, 0x01, 0x05, 0x03];
        let header = parse_header(&mut stream::new(&bytes)).unwrap();

        assert!(header.has_id_length);
        assert_eq!(header.id_length, Some(3));
    }

    #[test]
    fn android_text_message() {
        let mut data = stream::new(&ANDROID_TEXT);
        let records = parse_ndef_records(&mut data).unwrap();
        assert_eq!(records.len(), 1);
        assert!(data.is_empty());

        let record = &records[0];
        assert_eq!(record.type_, b"T");
        assert_eq!(record.id, None);
        assert_eq!(record.header.payload_length, 27);
        assert_eq!(&record.payload[..3], b"\x02de");
        assert_eq!(&record.payload[3..], b"Strandkorb 42 reserviert");
    }

    #[test]
    fn two_record_message() {
        let mut data = stream::new(&TWO_RECORDS);
        let records = parse_ndef_records(&mut data).unwrap();
        assert_eq!(records.len(), 2);

        assert!(records[0].header.message_begin);
        assert!(!records[0].header.message_end);
        assert_eq!(records[0].type_, b"T");

        assert!(records[1].header.message_end);
        assert_eq!(records[1].type_, b"U");
        assert_eq!(records[1].payload, b"\x04example.com");
    }

    #[test]
    fn stops_at_message_end() {
        let mut bytes = ANDROID_TEXT.clone();
        bytes.extend_from_slice(&[0x00, 0xFE]);

        let mut data = stream::new(&bytes);
        let records = parse_ndef_records(&mut data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn record_with_id() {
        let bytes = [0xD9, 0x01, 0x03, 0x02, b'T', b'i', b'd', 0x00, b'h', b'i'];
        let record = parse_ndef_record(&mut stream::new(&bytes)).unwrap();

        assert_eq!(record.id, Some(b"id".to_vec()));
        assert_eq!(record.payload, b"\x00hi");
    }

    #[test]
    fn truncated_payload_is_incomplete() {
        let bytes = &ANDROID_TEXT[..20];
        let result = parse_ndef_records(&mut stream::new(bytes));

        assert!(matches!(result, Err(ErrMode::Incomplete(Needed::Size(_)))));
        if let Err(ErrMode::Incomplete(needed)) = result {
            assert_eq!(needed, Needed::new(ANDROID_TEXT.len() - 20));
        }
    }

    #[test]
    fn empty_input_has_no_records() {
        let records = parse_ndef_records(&mut stream::new(&[])).unwrap();
        assert!(records.is_empty());
    }
}
