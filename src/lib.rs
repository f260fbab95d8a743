//! Write and read short text notes on NFC tags
//!
//! The wire codec lives in [`tagnote_ndef`], this crate adds the tag transport boundary,
//! configuration and the entry points used by the mobile frontends.

uniffi::setup_scaffolding!();

pub mod config;
pub mod error;
pub mod logging;
pub mod manager;
pub mod notice;
pub mod tag;
pub mod transport;

pub use tagnote_ndef as ndef;

pub use config::{ConfigError, TagConfig};
pub use error::{Recovery, TagError};
pub use manager::TagManager;
pub use notice::UserNotice;
pub use tag::NfcTag;
pub use transport::{TagSession, TagTransport, TransportError};
