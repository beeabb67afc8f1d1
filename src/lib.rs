//! # player-store
//!
//! An in-process, persisted record store for players:
//! - Ordered collection with create/update/delete and exact-match queries
//! - Write-through (or batched) mirroring to a durable key-value byte store
//! - Rehydration at startup, falling back to empty on unreadable state
//! - Permissive or strict identity discipline
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Caller                               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  PlayerRecord / Player
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     PlayerStore                              │
//! │        (RwLock<Vec<PlayerRecord>> + write mutex)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  whole collection
//!                       ▼
//!                ┌─────────────┐
//!                │  Snapshot   │  JSON envelope / checksummed bincode
//!                └──────┬──────┘
//!                       │  Bytes
//!                       ▼
//!                ┌─────────────┐
//!                │DurableStore │  MemoryStore / FileStore
//!                └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod domain;
pub mod record;
pub mod durable;
pub mod snapshot;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::{Config, DuplicatePolicy, PersistPolicy, SnapshotFormat};
pub use domain::{Player, PlayerId};
pub use record::PlayerRecord;
pub use durable::{DurableStore, FileStore, MemoryStore};
pub use store::PlayerStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of player-store
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
