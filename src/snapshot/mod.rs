//! Snapshot Module
//!
//! Encodes the whole player collection into one durable blob and back.
//!
//! ## Formats
//!
//! ### JSON (default)
//! The persist envelope the browser client already writes:
//! ```text
//! {"state":{"players":[{"id":"1","name":"Alice","points":10}]},"version":0}
//! ```
//!
//! ### Binary
//! ```text
//! ┌──────────┬────────────┬──────────┬──────────┬──────────────────┐
//! │Magic (4) │Version (2) │ Len (4)  │ CRC (4)  │  bincode body    │
//! └──────────┴────────────┴──────────┴──────────┴──────────────────┘
//! ```
//! All header integers are big-endian; the CRC covers the body only.

mod codec;

pub use codec::{
    decode, decode_binary, decode_json, encode, encode_binary, encode_json, BINARY_HEADER_SIZE,
    BINARY_MAGIC, BINARY_VERSION, JSON_VERSION,
};
