use winnow::{Bytes, Partial};

/// Raw message bytes, running out of input is reported as incomplete rather than as an error
pub type Stream<'i> = Partial<&'i Bytes>;

pub fn new(bytes: &[u8]) -> Stream<'_> {
    Partial::new(Bytes::new(bytes))
}
