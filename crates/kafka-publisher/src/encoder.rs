//! Key and value encoders applied to each record on publish.
//!
//! Encoders are plain functions chosen once when the publisher is built and
//! called explicitly for every record.

use crate::error::PublisherError;
use event_generator::{EventDocument, Record};

/// Encodes an optional text key. `None` publishes the record without a key.
pub type KeyEncoder = fn(Option<&str>) -> Option<Vec<u8>>;

/// Encodes a record value into its wire bytes.
pub type ValueEncoder = fn(&EventDocument) -> Result<Vec<u8>, serde_json::Error>;

/// Key and payload bytes for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    pub key: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

/// The pair of encoders a publisher applies to every record.
#[derive(Clone, Copy)]
pub struct Encoders {
    pub key: KeyEncoder,
    pub value: ValueEncoder,
}

impl Encoders {
    /// UTF-8 keys and JSON values.
    pub fn json() -> Self {
        Self {
            key: encode_key_utf8,
            value: encode_value_json,
        }
    }

    /// Encode a record's key and value.
    pub fn encode(&self, record: &Record) -> Result<EncodedRecord, PublisherError> {
        let payload = (self.value)(&record.value)?;
        let key = (self.key)(record.key.as_deref());
        Ok(EncodedRecord { key, payload })
    }
}

impl Default for Encoders {
    fn default() -> Self {
        Self::json()
    }
}

impl std::fmt::Debug for Encoders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encoders").finish_non_exhaustive()
    }
}

/// Encode a key as UTF-8 bytes. Empty keys are treated as absent.
pub fn encode_key_utf8(key: Option<&str>) -> Option<Vec<u8>> {
    key.filter(|k| !k.is_empty()).map(|k| k.as_bytes().to_vec())
}

/// Encode a document as compact JSON.
pub fn encode_value_json(value: &EventDocument) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}
