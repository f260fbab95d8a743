use crate::{DecodeError, DecodedText, EncodingError, NdefMessage, TextPayloadFormat};

#[uniffi::export]
fn encode_text_record(
    text: String,
    language_code: String,
    format: TextPayloadFormat,
) -> Result<Vec<u8>, EncodingError> {
    let payload = crate::encode_with_format(&text, &language_code, format)?;
    Ok(payload.into())
}

#[uniffi::export]
fn decode_text_record(payload: Vec<u8>) -> Result<DecodedText, DecodeError> {
    crate::decode(&payload)
}

#[uniffi::export]
fn encode_text_ndef_message(
    text: String,
    language_code: String,
    format: TextPayloadFormat,
) -> Result<Vec<u8>, EncodingError> {
    crate::encode_text_message(&text, &language_code, format)
}

#[uniffi::export]
fn decode_text_ndef_message(message: Vec<u8>) -> Result<DecodedText, DecodeError> {
    crate::decode_text_message(&message)
}

#[uniffi::export]
fn parse_ndef_message(message: Vec<u8>) -> Result<NdefMessage, DecodeError> {
    NdefMessage::parse(&message)
}

#[uniffi::export]
fn text_payload_format_name(format: TextPayloadFormat) -> String {
    format.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffi_round_trip() {
        let payload =
            encode_text_record("Moin".to_string(), "de".to_string(), TextPayloadFormat::Utf8)
                .unwrap();
        assert_eq!(payload, b"\x02deMoin");

        let decoded = decode_text_record(payload).unwrap();
        assert_eq!(decoded.text, "Moin");
    }

    #[test]
    fn ffi_message_round_trip() {
        let message =
            encode_text_ndef_message("Moin".to_string(), "de".to_string(), TextPayloadFormat::Utf16)
                .unwrap();

        let parsed = parse_ndef_message(message.clone()).unwrap();
        assert_eq!(parsed.records.len(), 1);

        let decoded = decode_text_ndef_message(message).unwrap();
        assert_eq!(decoded.text, "Moin");
        assert_eq!(text_payload_format_name(decoded.format), "UTF-16");
    }
}
