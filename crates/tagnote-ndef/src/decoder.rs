use tagnote_util::{hex_preview, result_ext::ResultExt as _};
use tracing::{debug, warn};

use crate::{
    error::DecodeError,
    payload::{DecodedText, TextPayloadFormat},
    status_byte::StatusByte,
};

type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Decode a Text Record payload into its text and language code
pub fn decode(payload: &[u8]) -> Result<DecodedText> {
    let Some(&status) = payload.first() else {
        return Err(DecodeError::NoContent);
    };

    let status = StatusByte::from(status);
    let header_length = status.header_length();

    if payload.len() < header_length {
        warn!(
            "text record claims a {} byte language code, payload is {} bytes: {}",
            status.language_code_length(),
            payload.len(),
            hex_preview(payload)
        );

        return Err(DecodeError::Truncated {
            expected: header_length as u64,
            actual: payload.len() as u64,
        });
    }

    let format = status.format();
    let language_code = std::str::from_utf8(&payload[1..header_length])
        .map_err(|error| DecodeError::UnsupportedCharset {
            format: TextPayloadFormat::Utf8,
            reason: format!("language code: {error}"),
        })?
        .to_string();

    let text = decode_text(&payload[header_length..], format)?;
    debug!("decoded {format} text record, language: {language_code:?}");

    Ok(DecodedText {
        text,
        language_code,
        format,
    })
}

fn decode_text(bytes: &[u8], format: TextPayloadFormat) -> Result<String> {
    match format {
        TextPayloadFormat::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err_str(|reason| DecodeError::UnsupportedCharset { format, reason }),

        TextPayloadFormat::Utf16 => decode_utf16(bytes),
    }
}

/// A leading byte order mark picks the byte order, big-endian otherwise
fn decode_utf16(bytes: &[u8]) -> Result<String> {
    let (bytes, little_endian) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, false),
        [0xFF, 0xFE, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };

    if bytes.len() % 2 != 0 {
        return Err(DecodeError::UnsupportedCharset {
            format: TextPayloadFormat::Utf16,
            reason: format!("odd number of bytes ({})", bytes.len()),
        });
    }

    let units = bytes
        .chunks_exact(2)
        .map(|chunk| {
            if little_endian {
                u16::from_le_bytes([chunk[0], chunk[1]])
            } else {
                u16::from_be_bytes([chunk[0], chunk[1]])
            }
        })
        .collect::<Vec<u16>>();

    String::from_utf16(&units).map_err_str(|reason| DecodeError::UnsupportedCharset {
        format: TextPayloadFormat::Utf16,
        reason,
    })
}
