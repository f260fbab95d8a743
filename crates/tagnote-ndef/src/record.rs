use crate::{
    error::EncodingError, header::NdefHeader, ndef_type::NdefType, payload::TextRecordPayload,
};

/// Record type of a well-known Text Record
pub const TEXT_RECORD_TYPE: &[u8] = b"T";

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefRecord {
    pub header: NdefHeader,
    pub type_: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// A lone well-known `T` record without an id, the only record of its message
    pub fn text(payload: TextRecordPayload) -> Result<Self, EncodingError> {
        let payload: Vec<u8> = payload.into();
        let payload_length =
            u32::try_from(payload.len()).map_err(|_| EncodingError::PayloadTooLarge {
                length: payload.len() as u64,
            })?;

        let header = NdefHeader {
            message_begin: true,
            message_end: true,
            chunked: false,
            short_record: payload_length < 256,
            has_id_length: false,
            type_name_format: NdefType::WellKnown,
            type_length: TEXT_RECORD_TYPE.len() as u8,
            payload_length,
            id_length: None,
        };

        Ok(Self {
            header,
            type_: TEXT_RECORD_TYPE.to_vec(),
            id: None,
            payload,
        })
    }

    pub fn is_text(&self) -> bool {
        self.header.type_name_format == NdefType::WellKnown && self.type_ == TEXT_RECORD_TYPE
    }

    /// Type as a string for log lines and errors
    pub fn type_lossy(&self) -> String {
        String::from_utf8_lossy(&self.type_).to_string()
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        self.header.write_to(out);
        out.extend_from_slice(&self.type_);

        if let Some(id) = &self.id {
            out.extend_from_slice(id);
        }

        out.extend_from_slice(&self.payload);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::encoder::encode;

    #[test]
    fn short_text_record_bytes() {
        let record = NdefRecord::text(encode("Hello", "en").unwrap()).unwrap();
        assert!(record.is_text());

        let mut out = Vec::new();
        record.write_to(&mut out);

        assert_eq!(
            out,
            vec![
                0xD1, 0x01, 0x08, b'T', 0x02, b'e', b'n', b'H', b'e', b'l', b'l', b'o'
            ]
        );
    }

    #[test]
    fn long_text_record_bytes() {
        let text = "a".repeat(300);
        let record = NdefRecord::text(encode(&text, "de").unwrap()).unwrap();
        assert!(!record.header.short_record);
        assert_eq!(record.header.payload_length, 303);

        let mut out = Vec::new();
        record.write_to(&mut out);

        assert_eq!(&out[..7], &[0xC1, 0x01, 0x00, 0x00, 0x01, 0x2F, b'T']);
        assert_eq!(out.len(), 7 + 303);
    }

    #[test]
    fn uri_record_is_not_text() {
        let record = NdefRecord {
            type_: b"U".to_vec(),
            ..NdefRecord::text(encode("", "").unwrap()).unwrap()
        };

        assert!(!record.is_text());
        assert_eq!(record.type_lossy(), "U");
    }
}
