use tagnote_util::hex_preview;
use tracing::debug;

use crate::{
    error::EncodingError,
    payload::{TextPayloadFormat, TextRecordPayload},
    status_byte::StatusByte,
};

type Result<T, E = EncodingError> = std::result::Result<T, E>;

/// Encode `text` as a UTF-8 Text Record payload tagged with `language_code`
pub fn encode(text: &str, language_code: &str) -> Result<TextRecordPayload> {
    encode_with_format(text, language_code, TextPayloadFormat::Utf8)
}

const UTF16_BIG_ENDIAN_BOM: [u8; 2] = [0xFE, 0xFF];

/// Encode `text` as a Text Record payload in the given format
///
/// UTF-16 text is written big-endian. A byte order mark is only added when the text itself
/// starts with U+FEFF or U+FFFE, which a reader would otherwise take for one
pub fn encode_with_format(
    text: &str,
    language_code: &str,
    format: TextPayloadFormat,
) -> Result<TextRecordPayload> {
    let language_code = language_code.as_bytes();
    let status = StatusByte::new(format, language_code.len())?;

    let needs_bom =
        format == TextPayloadFormat::Utf16 && text.starts_with(['\u{FEFF}', '\u{FFFE}']);

    let text_length = match format {
        TextPayloadFormat::Utf8 => text.len(),
        TextPayloadFormat::Utf16 => text.encode_utf16().count() * 2 + 2 * needs_bom as usize,
    };

    let mut payload = Vec::with_capacity(status.header_length() + text_length);
    payload.push(status.as_byte());
    payload.extend_from_slice(language_code);

    match format {
        TextPayloadFormat::Utf8 => payload.extend_from_slice(text.as_bytes()),
        TextPayloadFormat::Utf16 => {
            if needs_bom {
                payload.extend_from_slice(&UTF16_BIG_ENDIAN_BOM);
            }

            for unit in text.encode_utf16() {
                payload.extend_from_slice(&unit.to_be_bytes());
            }
        }
    }

    debug!("encoded {format} text record: {}", hex_preview(&payload));
    Ok(TextRecordPayload::new_unchecked(payload))
}
