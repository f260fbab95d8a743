//! Boundary to the platform's NFC stack

use tracing::{debug, warn};

/// Implemented by the host platform for one discovered tag
#[uniffi::export(callback_interface)]
pub trait TagTransport: Send + Sync + 'static {
    /// Open the I/O channel to the tag
    fn connect(&self) -> Result<(), TransportError>;

    /// Read the raw NDEF message currently stored on the tag
    fn read_message(&self) -> Result<Vec<u8>, TransportError>;

    /// Replace the NDEF message stored on the tag
    fn write_message(&self, message: Vec<u8>) -> Result<(), TransportError>;

    /// Release the I/O channel
    fn close(&self) -> Result<(), TransportError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, uniffi::Error)]
pub enum TransportError {
    #[error("unable to connect to tag: {0}")]
    Connect(String),

    #[error("unable to read from tag: {0}")]
    Read(String),

    #[error("unable to write to tag: {0}")]
    Write(String),

    #[error("tag does not support NDEF")]
    NotNdef,

    #[error("another transaction is already running on this tag")]
    Busy,

    #[error("unexpected transport error: {0}")]
    Unexpected(String),
}

impl From<uniffi::UnexpectedUniFFICallbackError> for TransportError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Unexpected(error.reason)
    }
}

type Result<T, E = TransportError> = std::result::Result<T, E>;

/// A connected tag, the connection is closed when the session is dropped
pub struct TagSession<'a> {
    transport: &'a dyn TagTransport,
}

impl<'a> TagSession<'a> {
    pub fn open(transport: &'a dyn TagTransport) -> Result<Self> {
        transport.connect()?;
        debug!("tag session opened");

        Ok(Self { transport })
    }

    pub fn read_message(&self) -> Result<Vec<u8>> {
        self.transport.read_message()
    }

    pub fn write_message(&self, message: Vec<u8>) -> Result<()> {
        self.transport.write_message(message)
    }
}

impl Drop for TagSession<'_> {
    fn drop(&mut self) {
        match self.transport.close() {
            Ok(()) => debug!("tag session closed"),
            Err(error) => warn!("unable to close tag session: {error}"),
        }
    }
}
