use serde::{Deserialize, Serialize};
use tagnote_ndef::{TextPayloadFormat, status_byte::MAX_LANGUAGE_CODE_LENGTH};
use tagnote_util::result_ext::ResultExt as _;

pub const DEFAULT_LANGUAGE_CODE: &str = "de";
pub const DEFAULT_CONTENT_LABEL: &str = "NFC Content: ";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct TagConfig {
    /// Language code written into every text record
    pub language_code: String,

    /// Encoding of written text, reading accepts both
    pub text_format: TextPayloadFormat,

    /// Prefix for decoded text shown to the user
    pub content_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, uniffi::Error)]
pub enum ConfigError {
    #[error("unable to parse config: {0}")]
    Parse(String),

    #[error("unable to serialize config: {0}")]
    Serialize(String),

    #[error("language code is {length} bytes long, at most {max} bytes are allowed")]
    LanguageCodeTooLong { length: u64, max: u8 },
}

type Result<T, E = ConfigError> = std::result::Result<T, E>;

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            text_format: TextPayloadFormat::Utf8,
            content_label: DEFAULT_CONTENT_LABEL.to_string(),
        }
    }
}

impl TagConfig {
    /// Parse and validate a JSON config, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err_str(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err_str(ConfigError::Serialize)
    }

    pub fn validate(&self) -> Result<()> {
        let length = self.language_code.len();
        if length > MAX_LANGUAGE_CODE_LENGTH as usize {
            return Err(ConfigError::LanguageCodeTooLong {
                length: length as u64,
                max: MAX_LANGUAGE_CODE_LENGTH,
            });
        }

        Ok(())
    }
}

#[uniffi::export]
fn tag_config_default() -> TagConfig {
    TagConfig::default()
}

#[uniffi::export]
fn tag_config_from_json(json: String) -> Result<TagConfig> {
    TagConfig::from_json(&json)
}
