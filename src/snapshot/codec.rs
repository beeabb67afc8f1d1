//! Snapshot codec
//!
//! Encoding and decoding functions for persisted collections.

use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use crate::config::SnapshotFormat;
use crate::error::{Result, StoreError};
use crate::record::PlayerRecord;

/// Magic bytes at the start of every binary snapshot
pub const BINARY_MAGIC: &[u8; 4] = b"PLYS";

/// Binary layout version
pub const BINARY_VERSION: u16 = 1;

/// Header size: magic (4) + version (2) + body length (4) + CRC32 (4)
pub const BINARY_HEADER_SIZE: usize = 14;

/// Envelope version written into JSON snapshots
pub const JSON_VERSION: u32 = 0;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: StateRef<'a>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a> {
    players: &'a [PlayerRecord],
}

#[derive(Deserialize)]
struct Envelope {
    state: State,
    #[serde(default)]
    version: u32,
}

#[derive(Deserialize)]
struct State {
    #[serde(default)]
    players: Vec<PlayerRecord>,
}

// =============================================================================
// Format Dispatch
// =============================================================================

/// Encode `records` in the given format
pub fn encode(format: SnapshotFormat, records: &[PlayerRecord]) -> Result<Bytes> {
    match format {
        SnapshotFormat::Json => encode_json(records),
        SnapshotFormat::Binary => encode_binary(records),
    }
}

/// Decode a snapshot written in the given format
pub fn decode(format: SnapshotFormat, data: &[u8]) -> Result<Vec<PlayerRecord>> {
    match format {
        SnapshotFormat::Json => decode_json(data),
        SnapshotFormat::Binary => decode_binary(data),
    }
}

// =============================================================================
// JSON Encoding/Decoding
// =============================================================================

pub fn encode_json(records: &[PlayerRecord]) -> Result<Bytes> {
    let envelope = EnvelopeRef {
        state: StateRef { players: records },
        version: JSON_VERSION,
    };
    Ok(Bytes::from(serde_json::to_vec(&envelope)?))
}

pub fn decode_json(data: &[u8]) -> Result<Vec<PlayerRecord>> {
    let envelope: Envelope = serde_json::from_slice(data)?;

    if envelope.version != JSON_VERSION {
        return Err(StoreError::Serialization(format!(
            "unsupported snapshot version {} (expected {})",
            envelope.version, JSON_VERSION
        )));
    }

    Ok(envelope.state.players)
}

// =============================================================================
// Binary Encoding/Decoding
// =============================================================================

/// Format: magic (4) + version (2) + body_len (4) + crc (4) + body
pub fn encode_binary(records: &[PlayerRecord]) -> Result<Bytes> {
    let body = bincode::serialize(records)?;

    let body_len = u32::try_from(body.len()).map_err(|_| {
        StoreError::Serialization(format!("snapshot body too large: {} bytes", body.len()))
    })?;
    let crc = crc32fast::hash(&body);

    let mut buf = BytesMut::with_capacity(BINARY_HEADER_SIZE + body.len());
    buf.put_slice(BINARY_MAGIC);
    buf.put_u16(BINARY_VERSION);
    buf.put_u32(body_len);
    buf.put_u32(crc);
    buf.put_slice(&body);

    Ok(buf.freeze())
}

pub fn decode_binary(data: &[u8]) -> Result<Vec<PlayerRecord>> {
    if data.len() < BINARY_HEADER_SIZE {
        return Err(StoreError::Corruption(format!(
            "snapshot too short: {} bytes",
            data.len()
        )));
    }

    if &data[0..4] != BINARY_MAGIC {
        return Err(StoreError::Corruption("bad snapshot magic".to_string()));
    }

    let version = u16::from_be_bytes([data[4], data[5]]);
    if version != BINARY_VERSION {
        return Err(StoreError::Corruption(format!(
            "unsupported snapshot version {}",
            version
        )));
    }

    let body_len = u32::from_be_bytes([data[6], data[7], data[8], data[9]]) as usize;
    let expected_crc = u32::from_be_bytes([data[10], data[11], data[12], data[13]]);

    let body = &data[BINARY_HEADER_SIZE..];
    if body.len() != body_len {
        return Err(StoreError::Corruption(format!(
            "body length mismatch: header says {}, found {}",
            body_len,
            body.len()
        )));
    }

    let actual_crc = crc32fast::hash(body);
    if actual_crc != expected_crc {
        return Err(StoreError::Corruption(format!(
            "CRC mismatch: expected {:#010x}, got {:#010x}",
            expected_crc, actual_crc
        )));
    }

    Ok(bincode::deserialize(body)?)
}
