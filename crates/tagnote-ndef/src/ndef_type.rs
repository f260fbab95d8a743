/// Type Name Format, the low 3 bits of a record header
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum NdefType {
    Empty,
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl NdefType {
    /// Only the low 3 bits are looked at
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::WellKnown => 1,
            Self::Mime => 2,
            Self::AbsoluteUri => 3,
            Self::External => 4,
            Self::Unknown => 5,
            Self::Unchanged => 6,
            Self::Reserved => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip() {
        for bits in 0..8 {
            assert_eq!(NdefType::from_bits(bits).bits(), bits);
        }
    }

    #[test]
    fn ignores_flag_bits() {
        assert_eq!(NdefType::from_bits(0xD1), NdefType::WellKnown);
        assert_eq!(NdefType::from_bits(0xF8), NdefType::Empty);
    }
}
