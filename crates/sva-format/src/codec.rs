//! Tagged JSON codec for spatial values.
//!
//! Every document is an [`Envelope`] `{ "kind": ..., "data": ... }` where
//! `data` is the value's record. Decoding checks the tag before touching the
//! payload, so a transform can never be read back as a motion vector.

use crate::error::{FormatError, Result};
use crate::record::{Persist, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use sva_math::SpatialSeq;
use tracing::{debug, warn};

/// Codec options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Indented output.
    pub pretty: bool,
    /// Reject non-finite numbers on both encode and decode.
    pub validate: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            validate: true,
        }
    }
}

/// Top-level document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<D> {
    pub kind: String,
    pub data: D,
}

fn seq_kind(element: &str) -> String {
    format!("seq/{element}")
}

fn checked<R: Validate>(kind: &str, record: &R, config: &FormatConfig) -> Result<()> {
    if !config.validate {
        return Ok(());
    }
    record.validate().inspect_err(|e| {
        warn!(kind, error = %e, "rejected record");
    })
}

fn to_json<D: Serialize>(envelope: &Envelope<D>, config: &FormatConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(envelope)?
    } else {
        serde_json::to_string(envelope)?
    };
    debug!(kind = %envelope.kind, bytes = json.len(), "encoded");
    Ok(json)
}

/// Parse the envelope and check its tag, leaving the payload untyped.
fn open(json: &str, expected: &str) -> Result<serde_json::Value> {
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(json)?;
    if envelope.kind != expected {
        warn!(expected, found = %envelope.kind, "kind mismatch");
        return Err(FormatError::UnknownKind(envelope.kind));
    }
    Ok(envelope.data)
}

/// Encode `value` with the default configuration.
pub fn serialize<T: Persist>(value: &T) -> Result<String> {
    serialize_with(value, &FormatConfig::default())
}

pub fn serialize_with<T: Persist>(value: &T, config: &FormatConfig) -> Result<String> {
    let record = value.to_record();
    checked(T::KIND, &record, config)?;
    to_json(
        &Envelope {
            kind: T::KIND.to_string(),
            data: record,
        },
        config,
    )
}

/// Decode a value written by [`serialize`].
pub fn deserialize<T: Persist>(json: &str) -> Result<T> {
    deserialize_with(json, &FormatConfig::default())
}

pub fn deserialize_with<T: Persist>(json: &str, config: &FormatConfig) -> Result<T> {
    let data = open(json, T::KIND)?;
    let record: T::Record = serde_json::from_value(data)?;
    checked(T::KIND, &record, config)?;
    let value = T::from_record(record)?;
    debug!(kind = T::KIND, bytes = json.len(), "decoded");
    Ok(value)
}

/// Encode a sequence, preserving order.
pub fn serialize_seq<T: Persist>(seq: &SpatialSeq<T>, config: &FormatConfig) -> Result<String> {
    let records = seq
        .iter()
        .map(|v| {
            let record = v.to_record();
            checked(T::KIND, &record, config)?;
            Ok(record)
        })
        .collect::<Result<Vec<_>>>()?;
    to_json(
        &Envelope {
            kind: seq_kind(T::KIND),
            data: records,
        },
        config,
    )
}

pub fn deserialize_seq<T: Persist>(json: &str, config: &FormatConfig) -> Result<SpatialSeq<T>> {
    let data = open(json, &seq_kind(T::KIND))?;
    let records: Vec<T::Record> = serde_json::from_value(data)?;
    let seq = records
        .into_iter()
        .map(|record| {
            checked(T::KIND, &record, config)?;
            T::from_record(record)
        })
        .collect::<Result<SpatialSeq<T>>>()?;
    debug!(kind = T::KIND, len = seq.len(), "decoded sequence");
    Ok(seq)
}

/// Write `value` to a file.
pub fn save<T: Persist>(path: impl AsRef<Path>, value: &T, config: &FormatConfig) -> Result<()> {
    let json = serialize_with(value, config)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a value written by [`save`].
pub fn load<T: Persist>(path: impl AsRef<Path>, config: &FormatConfig) -> Result<T> {
    let json = std::fs::read_to_string(path)?;
    deserialize_with(&json, config)
}
