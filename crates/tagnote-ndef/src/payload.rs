use serde::{Deserialize, Serialize};

use crate::status_byte::StatusByte;

/// Character encoding of the text, bit 7 of the status byte
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    uniffi::Enum,
)]
#[strum(ascii_case_insensitive)]
pub enum TextPayloadFormat {
    #[default]
    #[serde(rename = "UTF-8", alias = "utf-8", alias = "utf8")]
    #[strum(to_string = "UTF-8", serialize = "utf8")]
    Utf8,

    #[serde(rename = "UTF-16", alias = "utf-16", alias = "utf16")]
    #[strum(to_string = "UTF-16", serialize = "utf16")]
    Utf16,
}

/// Text Record payload as produced by the encoder
///
/// Always holds a status byte followed by at least as many language code bytes as the status byte announces
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Deref, derive_more::AsRef, derive_more::Into)]
pub struct TextRecordPayload(Vec<u8>);

impl TextRecordPayload {
    pub(crate) fn new_unchecked(bytes: Vec<u8>) -> Self {
        debug_assert!(!bytes.is_empty());
        Self(bytes)
    }

    pub fn status_byte(&self) -> StatusByte {
        StatusByte::from(self.0[0])
    }

    pub fn language_code_bytes(&self) -> &[u8] {
        &self.0[1..self.status_byte().header_length()]
    }

    pub fn text_bytes(&self) -> &[u8] {
        &self.0[self.status_byte().header_length()..]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct DecodedText {
    pub text: String,
    pub language_code: String,
    pub format: TextPayloadFormat,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn format_names() {
        assert_eq!(TextPayloadFormat::Utf8.to_string(), "UTF-8");
        assert_eq!(TextPayloadFormat::Utf16.to_string(), "UTF-16");

        assert_eq!(TextPayloadFormat::from_str("utf-8").unwrap(), TextPayloadFormat::Utf8);
        assert_eq!(TextPayloadFormat::from_str("UTF16").unwrap(), TextPayloadFormat::Utf16);
        assert!(TextPayloadFormat::from_str("latin1").is_err());
    }

    #[test]
    fn payload_accessors_split_the_layout() {
        let payload = TextRecordPayload::new_unchecked(b"\x02enHello".to_vec());

        assert_eq!(payload.status_byte().language_code_length(), 2);
        assert_eq!(payload.language_code_bytes(), b"en");
        assert_eq!(payload.text_bytes(), b"Hello");
        assert_eq!(payload.len(), 8);
    }
}
