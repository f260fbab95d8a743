use crate::{ndef_type::NdefType, payload::TextPayloadFormat};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum EncodingError {
    #[error("language code is {length} bytes long, at most {max} bytes fit in the status byte")]
    LanguageCodeTooLong { length: u64, max: u8 },

    #[error("payload of {length} bytes does not fit in a single NDEF record")]
    PayloadTooLarge { length: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum DecodeError {
    #[error("no NDEF content to decode")]
    NoContent,

    #[error("text record truncated, expected at least {expected} bytes, got {actual}")]
    Truncated { expected: u64, actual: u64 },

    #[error("bytes are not valid {format}: {reason}")]
    UnsupportedCharset {
        format: TextPayloadFormat,
        reason: String,
    },

    #[error("malformed NDEF message: {0}")]
    MalformedMessage(String),

    #[error("first record is not a text record, tnf: {type_name_format:?}, type: {record_type}")]
    NotTextRecord {
        type_name_format: NdefType,
        record_type: String,
    },
}
