use std::fmt::Debug;

use parking_lot::Mutex;
use tracing::warn;

use crate::transport::{TagSession, TagTransport, TransportError};

type Result<T, E = TransportError> = std::result::Result<T, E>;

/// A tag that is in range, one read or write transaction at a time
#[derive(uniffi::Object)]
pub struct NfcTag {
    transport: Mutex<Box<dyn TagTransport>>,
}

impl Debug for NfcTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NfcTag")
            .field("busy", &self.transport.is_locked())
            .finish()
    }
}

#[uniffi::export]
impl NfcTag {
    #[uniffi::constructor]
    pub fn new(transport: Box<dyn TagTransport>) -> Self {
        Self {
            transport: Mutex::new(transport),
        }
    }

    /// Connect, read the stored message and close
    pub fn read_message(&self) -> Result<Vec<u8>> {
        self.transaction(|session| session.read_message())
    }

    /// Connect, replace the stored message and close
    pub fn write_message(&self, message: Vec<u8>) -> Result<()> {
        self.transaction(|session| session.write_message(message))
    }
}

impl NfcTag {
    fn transaction<T>(&self, run: impl FnOnce(&TagSession<'_>) -> Result<T>) -> Result<T> {
        let Some(transport) = self.transport.try_lock() else {
            warn!("tag transaction requested while another one is running");
            return Err(TransportError::Busy);
        };

        let session = TagSession::open(&**transport)?;
        run(&session)
    }
}
