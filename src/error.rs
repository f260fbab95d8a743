use tagnote_ndef::{DecodeError, EncodingError};

use crate::{notice::UserNotice, transport::TransportError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum TagError {
    #[error("no NFC tag in range")]
    NoTag,

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Decoding(#[from] DecodeError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// What the user can do about a failed tag action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum Recovery {
    /// Hold the tag to the device again
    ReattachTag,

    /// The tag is in use, try again once the running transaction is done
    RetryLater,

    /// The text or language code can not be encoded
    FixInput,

    /// Nothing readable on the tag, show empty content
    ShowEmpty,
}

impl TagError {
    pub fn recovery(&self) -> Recovery {
        match self {
            Self::NoTag => Recovery::ReattachTag,
            Self::Encoding(_) => Recovery::FixInput,
            Self::Decoding(_) => Recovery::ShowEmpty,
            Self::Transport(TransportError::Busy) => Recovery::RetryLater,
            Self::Transport(_) => Recovery::ReattachTag,
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::NoTag | Self::Transport(_))
    }

    /// Notice to show when this error ended a write
    pub fn write_notice(&self) -> UserNotice {
        match self {
            Self::NoTag => UserNotice::NoTagDetected,
            _ => UserNotice::WriteFailed,
        }
    }
}

#[uniffi::export]
fn tag_error_recovery(error: TagError) -> Recovery {
    error.recovery()
}

#[uniffi::export]
fn tag_error_is_transport_failure(error: TagError) -> bool {
    error.is_transport_failure()
}
