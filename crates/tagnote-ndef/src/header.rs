use crate::ndef_type::NdefType;

pub const MESSAGE_BEGIN: u8 = 0x80;
pub const MESSAGE_END: u8 = 0x40;
pub const CHUNKED: u8 = 0x20;
pub const SHORT_RECORD: u8 = 0x10;
pub const ID_LENGTH_PRESENT: u8 = 0x08;

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    pub type_name_format: NdefType,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}

impl NdefHeader {
    /// First byte of the record, MB ME CF SR IL flags followed by the TNF
    ///
    /// SR and IL follow what [`Self::write_to`] actually writes, so a header whose flags
    /// disagree with its lengths still serialises to a well formed record
    pub fn flags_byte(&self) -> u8 {
        let mut byte = self.type_name_format.bits();

        if self.message_begin {
            byte |= MESSAGE_BEGIN;
        }
        if self.message_end {
            byte |= MESSAGE_END;
        }
        if self.chunked {
            byte |= CHUNKED;
        }
        if self.short_payload_length().is_some() {
            byte |= SHORT_RECORD;
        }
        if self.id_length.is_some() {
            byte |= ID_LENGTH_PRESENT;
        }

        byte
    }

    /// Append the header in wire order: flags, type length, payload length, id length
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.flags_byte());
        out.push(self.type_length);

        match self.short_payload_length() {
            Some(length) => out.push(length),
            None => out.extend_from_slice(&self.payload_length.to_be_bytes()),
        }

        if let Some(id_length) = self.id_length {
            out.push(id_length);
        }
    }

    /// One byte payload length, `None` when the record is not short or the length does not fit
    fn short_payload_length(&self) -> Option<u8> {
        if !self.short_record {
            return None;
        }

        u8::try_from(self.payload_length).ok()
    }
}
