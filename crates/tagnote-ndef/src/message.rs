use tagnote_util::hex_preview;
use tracing::{debug, warn};
use winnow::error::{ErrMode, Needed};

use crate::{
    decoder, encoder,
    error::{DecodeError, EncodingError},
    ndef_type::NdefType,
    parser,
    payload::{DecodedText, TextPayloadFormat},
    record::NdefRecord,
};

/// A NDEF message, the unit a tag transport reads and writes
#[derive(Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
pub struct NdefMessage {
    pub records: Vec<NdefRecord>,
}

impl NdefMessage {
    pub fn single(record: NdefRecord) -> Self {
        Self {
            records: vec![record],
        }
    }

    /// Parse raw message bytes, zero bytes is a message without records
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut stream = parser::stream::new(bytes);

        let records = parser::parse_ndef_records(&mut stream).map_err(|error| match error {
            ErrMode::Incomplete(Needed::Size(needed)) => DecodeError::MalformedMessage(format!(
                "record truncated, {needed} more bytes needed"
            )),
            ErrMode::Incomplete(Needed::Unknown) => {
                DecodeError::MalformedMessage("record truncated".to_string())
            }
            error => DecodeError::MalformedMessage(format!("error parsing message: {error}")),
        })?;

        if !stream.is_empty() {
            debug!("{} bytes after the message end record", stream.len());
        }

        Ok(Self { records })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for record in &self.records {
            record.write_to(&mut out);
        }

        out
    }

    pub fn first_record(&self) -> Option<&NdefRecord> {
        self.records.first()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decode the first record as text, any other record is ignored
    pub fn decode_text(&self) -> Result<DecodedText, DecodeError> {
        let Some(record) = self.first_record() else {
            return Err(DecodeError::NoContent);
        };

        if record.header.type_name_format == NdefType::Empty {
            return Err(DecodeError::NoContent);
        }

        if self.records.len() > 1 {
            debug!("ignoring {} records after the first", self.records.len() - 1);
        }

        if record.header.chunked {
            return Err(DecodeError::MalformedMessage(
                "chunked records are not supported".to_string(),
            ));
        }

        if !record.is_text() {
            warn!(
                "first record is not text, tnf: {:?}, type: {}",
                record.header.type_name_format,
                record.type_lossy()
            );

            return Err(DecodeError::NotTextRecord {
                type_name_format: record.header.type_name_format,
                record_type: record.type_lossy(),
            });
        }

        decoder::decode(&record.payload)
    }
}

/// Encode `text` into a single Text Record message, ready for a tag transport
pub fn encode_text_message(
    text: &str,
    language_code: &str,
    format: TextPayloadFormat,
) -> Result<Vec<u8>, EncodingError> {
    let payload = encoder::encode_with_format(text, language_code, format)?;
    let message = NdefMessage::single(NdefRecord::text(payload)?);

    Ok(message.to_bytes())
}

/// Decode the text of the first record of a raw message
pub fn decode_text_message(bytes: &[u8]) -> Result<DecodedText, DecodeError> {
    debug!("decoding message: {}", hex_preview(bytes));
    NdefMessage::parse(bytes)?.decode_text()
}
