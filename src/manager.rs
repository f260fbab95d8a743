use std::sync::Arc;

use parking_lot::RwLock;
use tagnote_macros::impl_default_for;
use tagnote_ndef::{DecodeError, DecodedText, decode_text_message, encode_text_message};
use tagnote_util::hex_preview;
use tracing::{debug, info, warn};

use crate::{
    config::{ConfigError, TagConfig},
    error::TagError,
    logging,
    notice::UserNotice,
    tag::NfcTag,
};

type Result<T, E = TagError> = std::result::Result<T, E>;

/// Entry points for writing and reading text on a tag
#[derive(Debug, uniffi::Object)]
pub struct TagManager {
    config: RwLock<TagConfig>,
}

impl_default_for!(TagManager);

#[uniffi::export]
impl TagManager {
    #[uniffi::constructor]
    pub fn new() -> Self {
        logging::init();

        Self {
            config: RwLock::new(TagConfig::default()),
        }
    }

    #[uniffi::constructor]
    pub fn with_config(config: TagConfig) -> Result<Arc<Self>, ConfigError> {
        logging::init();
        config.validate()?;

        Ok(Arc::new(Self {
            config: RwLock::new(config),
        }))
    }

    pub fn config(&self) -> TagConfig {
        self.config.read().clone()
    }

    pub fn set_config(&self, config: TagConfig) -> Result<(), ConfigError> {
        config.validate()?;

        debug!("config updated: {config:?}");
        *self.config.write() = config;

        Ok(())
    }

    /// Encode `text` with the configured language code and write it to the tag
    pub fn write_text(&self, tag: Option<Arc<NfcTag>>, text: String) -> Result<()> {
        let Some(tag) = tag else {
            warn!("write requested without a tag in range");
            return Err(TagError::NoTag);
        };

        let message = {
            let config = self.config.read();
            encode_text_message(&text, &config.language_code, config.text_format)?
        };

        debug!("writing message: {}", hex_preview(&message));
        tag.write_message(message)?;
        info!("text written to tag");

        Ok(())
    }

    /// Write `text` and return the notice to show for the outcome
    pub fn submit_text(&self, tag: Option<Arc<NfcTag>>, text: String) -> UserNotice {
        match self.write_text(tag, text) {
            Ok(()) => UserNotice::WriteSucceeded,
            Err(error) => {
                warn!("unable to write text: {error}");
                error.write_notice()
            }
        }
    }

    /// Read the stored message and decode its text
    pub fn read_text(&self, tag: Arc<NfcTag>) -> Result<DecodedText> {
        let message = tag.read_message()?;
        let decoded = decode_text_message(&message)?;

        Ok(decoded)
    }

    /// Decode messages handed over by tag discovery, only the first one is used
    pub fn decode_messages(&self, messages: Vec<Vec<u8>>) -> Result<DecodedText> {
        let Some(message) = messages.first() else {
            return Err(DecodeError::NoContent.into());
        };

        if messages.len() > 1 {
            debug!("ignoring {} messages after the first", messages.len() - 1);
        }

        Ok(decode_text_message(message)?)
    }

    /// Text to show for discovered messages, the label alone when decoding failed
    pub fn display_text(&self, messages: Vec<Vec<u8>>) -> Option<String> {
        let label = self.config.read().content_label.clone();

        match self.decode_messages(messages) {
            Ok(decoded) => Some(format!("{label}{}", decoded.text)),
            Err(TagError::Decoding(DecodeError::NoContent)) => None,
            Err(error) => {
                warn!("unable to decode tag content: {error}");
                Some(label)
            }
        }
    }
}
