//! NDEF Text Record codec
//!
//! A Text Record payload is a status byte (bit 7: UTF-16 flag, bits 5..0: language code length),
//! the language code, then the text. The record and message framing around it lives in
//! [`record`] and [`message`].

uniffi::setup_scaffolding!();

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod ffi;
pub mod header;
pub mod message;
pub mod ndef_type;
pub mod parser;
pub mod payload;
pub mod record;
pub mod status_byte;

pub use decoder::decode;
pub use encoder::{encode, encode_with_format};
pub use error::{DecodeError, EncodingError};
pub use message::{NdefMessage, decode_text_message, encode_text_message};
pub use payload::{DecodedText, TextPayloadFormat, TextRecordPayload};
pub use record::NdefRecord;
pub use status_byte::StatusByte;
