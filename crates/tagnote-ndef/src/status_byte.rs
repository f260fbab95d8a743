use crate::{error::EncodingError, payload::TextPayloadFormat};

/// Bit 7, set when the text is UTF-16
pub const UTF16_FLAG: u8 = 0x80;

/// Bit 6, must be written as zero
pub const RESERVED_BIT: u8 = 0x40;

/// Bits 5..0, length of the language code
pub const LANGUAGE_CODE_LENGTH_MASK: u8 = 0x3F;

pub const MAX_LANGUAGE_CODE_LENGTH: u8 = LANGUAGE_CODE_LENGTH_MASK;

/// First byte of a Text Record payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusByte(u8);

impl StatusByte {
    pub fn new(format: TextPayloadFormat, language_code_length: usize) -> Result<Self, EncodingError> {
        if language_code_length > MAX_LANGUAGE_CODE_LENGTH as usize {
            return Err(EncodingError::LanguageCodeTooLong {
                length: language_code_length as u64,
                max: MAX_LANGUAGE_CODE_LENGTH,
            });
        }

        let mut byte = language_code_length as u8;
        if format == TextPayloadFormat::Utf16 {
            byte |= UTF16_FLAG;
        }

        Ok(Self(byte))
    }

    pub const fn as_byte(self) -> u8 {
        self.0
    }

    pub fn format(self) -> TextPayloadFormat {
        if self.0 & UTF16_FLAG == 0 {
            TextPayloadFormat::Utf8
        } else {
            TextPayloadFormat::Utf16
        }
    }

    pub const fn language_code_length(self) -> usize {
        (self.0 & LANGUAGE_CODE_LENGTH_MASK) as usize
    }

    pub const fn reserved_bit(self) -> bool {
        self.0 & RESERVED_BIT != 0
    }

    /// Status byte plus language code, the minimum payload length
    pub const fn header_length(self) -> usize {
        1 + self.language_code_length()
    }
}

impl From<u8> for StatusByte {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<StatusByte> for u8 {
    fn from(status: StatusByte) -> Self {
        status.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_status_byte_is_the_length() {
        let status = StatusByte::new(TextPayloadFormat::Utf8, 2).unwrap();
        assert_eq!(status.as_byte(), 0x02);
        assert_eq!(status.format(), TextPayloadFormat::Utf8);
        assert!(!status.reserved_bit());
    }

    #[test]
    fn utf16_sets_the_top_bit() {
        let status = StatusByte::new(TextPayloadFormat::Utf16, 5).unwrap();
        assert_eq!(status.as_byte(), 0x85);
        assert_eq!(status.format(), TextPayloadFormat::Utf16);
        assert_eq!(status.language_code_length(), 5);
    }

    #[test]
    fn longest_language_code_fits() {
        let status = StatusByte::new(TextPayloadFormat::Utf8, 63).unwrap();
        assert_eq!(status.as_byte(), 0x3F);
        assert_eq!(status.header_length(), 64);
    }

    #[test]
    fn too_long_language_code_is_rejected() {
        let error = StatusByte::new(TextPayloadFormat::Utf8, 64).unwrap_err();
        assert_eq!(error, EncodingError::LanguageCodeTooLong { length: 64, max: 63 });
    }

    #[test]
    fn length_uses_all_six_low_bits() {
        // 0x0C would read as 0 under a 0x33 mask
        assert_eq!(StatusByte::from(0x0C).language_code_length(), 12);
        assert_eq!(StatusByte::from(0x3F).language_code_length(), 63);
        assert_eq!(StatusByte::from(0xFF).language_code_length(), 63);
    }

    #[test]
    fn reserved_bit_does_not_change_the_length() {
        let status = StatusByte::from(0x42);
        assert!(status.reserved_bit());
        assert_eq!(status.language_code_length(), 2);
        assert_eq!(status.format(), TextPayloadFormat::Utf8);
    }
}
