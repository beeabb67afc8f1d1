//! Configuration for the player store
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, StoreError};

/// Main configuration for a PlayerStore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Key under which the whole collection is stored in the durable store
    pub namespace: String,

    /// When mutations are mirrored to the durable store
    pub persist_policy: PersistPolicy,

    /// Encoding of the persisted collection
    pub snapshot_format: SnapshotFormat,

    // -------------------------------------------------------------------------
    // Identity Configuration
    // -------------------------------------------------------------------------
    /// How create/update/delete treat duplicate and missing ids
    pub duplicate_policy: DuplicatePolicy,
}

/// Persistence strategy: how often the collection is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistPolicy {
    /// Write after every mutation (safest, slowest)
    WriteThrough,

    /// Write after every N mutations; `flush()` writes the remainder
    EveryNMutations { count: usize },
}

/// Identity discipline for mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Duplicate creates are appended, missing ids on update/delete are
    /// silently tolerated
    Permissive,

    /// Duplicate creates fail with `DuplicateIdentity`, missing ids on
    /// update/delete fail with `NotFound`
    Strict,
}

/// Encoding used for the persisted snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// `{"state":{"players":[...]},"version":0}`
    Json,

    /// Checksummed bincode body
    Binary,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "players".to_string(),
            persist_policy: PersistPolicy::WriteThrough,
            snapshot_format: SnapshotFormat::Json,
            duplicate_policy: DuplicatePolicy::Permissive,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations the store cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(StoreError::Config("namespace must not be empty".to_string()));
        }

        if let PersistPolicy::EveryNMutations { count: 0 } = self.persist_policy {
            return Err(StoreError::Config(
                "EveryNMutations count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_strict(&self) -> bool {
        self.duplicate_policy == DuplicatePolicy::Strict
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the durable store key for this collection
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Set the persistence policy
    pub fn persist_policy(mut self, policy: PersistPolicy) -> Self {
        self.config.persist_policy = policy;
        self
    }

    /// Set the snapshot encoding
    pub fn snapshot_format(mut self, format: SnapshotFormat) -> Self {
        self.config.snapshot_format = format;
        self
    }

    /// Set the identity discipline
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Shorthand for `duplicate_policy(DuplicatePolicy::Strict)`
    pub fn strict(self) -> Self {
        self.duplicate_policy(DuplicatePolicy::Strict)
    }

    pub fn build(self) -> Config {
        self.config
    }
}
