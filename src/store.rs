//! Store Module
//!
//! The player collection and its CRUD/query API.
//!
//! ## Responsibilities
//! - Own the ordered in-memory collection of `PlayerRecord`s
//! - Apply create/update/delete under the configured identity discipline
//! - Mirror the collection to the durable store per `PersistPolicy`
//! - Rehydrate from the durable store on open (soft on bad payloads)
//! - Hand out copies only, never references into the collection

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::{Config, PersistPolicy};
use crate::domain::Player;
use crate::durable::DurableStore;
use crate::error::{Result, StoreError};
use crate::record::PlayerRecord;
use crate::snapshot;

/// State owned by the single writer
#[derive(Debug, Default)]
struct WriteState {
    /// Mutations applied in memory but not yet persisted
    pending: usize,
}

/// Persisted, ordered store of player records
///
/// ## Concurrency Model
///
/// - **Writes** (create/update/delete/flush): serialized by `write_lock`,
///   which also tracks the pending-mutation count
/// - **Reads** (find_by_id/find_all): take a read lock on `records` and copy
///
/// Under `WriteThrough` a mutation is staged on a copy of the collection,
/// persisted, and only then swapped in. A failed durable write leaves the
/// visible collection untouched. Under `EveryNMutations` the change is
/// applied first; a failed batch write is logged and retried by the next
/// batch or `flush()`, which is the call that reports write errors.
pub struct PlayerStore<S: DurableStore> {
    /// Store configuration
    config: Config,

    /// Durable byte store the collection is mirrored into
    durable: S,

    /// The collection, in insertion order (updates move to the tail)
    records: RwLock<Vec<PlayerRecord>>,

    /// Serializes mutations
    write_lock: Mutex<WriteState>,
}

impl<S: DurableStore> PlayerStore<S> {
    /// Open a store over `durable`, rehydrating from `config.namespace`
    ///
    /// An absent or undecodable payload yields an empty store. Errors from
    /// the durable backend itself are returned.
    pub fn open(durable: S, config: Config) -> Result<Self> {
        config.validate()?;

        let records = Self::rehydrate(&durable, &config)?;

        info!(
            namespace = %config.namespace,
            records = records.len(),
            "player store opened"
        );

        Ok(Self {
            config,
            durable,
            records: RwLock::new(records),
            write_lock: Mutex::new(WriteState::default()),
        })
    }

    /// Open with the default config
    pub fn open_default(durable: S) -> Result<Self> {
        Self::open(durable, Config::default())
    }

    fn rehydrate(durable: &S, config: &Config) -> Result<Vec<PlayerRecord>> {
        let Some(data) = durable.get(&config.namespace)? else {
            debug!(namespace = %config.namespace, "no persisted state, starting empty");
            return Ok(Vec::new());
        };

        match snapshot::decode(config.snapshot_format, &data) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(
                    namespace = %config.namespace,
                    error = %e,
                    "discarding unreadable persisted state, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append `record` at the tail
    ///
    /// Strict mode rejects an id that is already present.
    pub fn create(&self, record: PlayerRecord) -> Result<()> {
        let strict = self.config.is_strict();
        self.mutate("create", move |records| {
            if strict && records.iter().any(|r| r.id == record.id) {
                return Err(StoreError::DuplicateIdentity(record.id));
            }
            records.push(record);
            Ok(())
        })
    }

    /// Replace the first record with `record.id`, moving it to the tail
    ///
    /// A missing id appends the record in permissive mode and fails with
    /// `NotFound` in strict mode.
    pub fn update(&self, record: PlayerRecord) -> Result<()> {
        let strict = self.config.is_strict();
        self.mutate("update", move |records| {
            match records.iter().position(|r| r.id == record.id) {
                Some(index) => {
                    records.remove(index);
                }
                None if strict => return Err(StoreError::NotFound(record.id)),
                None => {}
            }
            records.push(record);
            Ok(())
        })
    }

    /// Remove the first record with `id`
    ///
    /// A missing id is a no-op in permissive mode (the collection is still
    /// persisted) and fails with `NotFound` in strict mode.
    pub fn delete(&self, id: &str) -> Result<()> {
        let strict = self.config.is_strict();
        self.mutate("delete", move |records| {
            match records.iter().position(|r| r.id == id) {
                Some(index) => {
                    records.remove(index);
                }
                None if strict => return Err(StoreError::NotFound(id.to_string())),
                None => {}
            }
            Ok(())
        })
    }

    pub fn create_player(&self, player: &Player) -> Result<()> {
        self.create(PlayerRecord::from_domain(player))
    }

    pub fn update_player(&self, player: &Player) -> Result<()> {
        self.update(PlayerRecord::from_domain(player))
    }

    /// Apply `op` to the collection and persist per policy
    fn mutate<F>(&self, op: &'static str, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<PlayerRecord>) -> Result<()>,
    {
        let mut write_state = self.write_lock.lock();

        match self.config.persist_policy {
            PersistPolicy::WriteThrough => {
                let mut staged = self.records.read().clone();
                apply(&mut staged)?;
                self.persist(&staged)?;

                let len = staged.len();
                *self.records.write() = staged;
                write_state.pending = 0;

                debug!(op, records = len, "mutation persisted");
            }
            PersistPolicy::EveryNMutations { count } => {
                {
                    let mut records = self.records.write();
                    apply(&mut records)?;
                }
                write_state.pending += 1;

                debug!(op, pending = write_state.pending, "mutation applied");

                // Applied mutations return Ok; a failed batch write leaves them
                // pending for the next batch or flush()
                if write_state.pending >= count {
                    let records = self.records.read();
                    match self.persist(&records) {
                        Ok(()) => write_state.pending = 0,
                        Err(e) => warn!(
                            op,
                            pending = write_state.pending,
                            error = %e,
                            "batch write failed, mutations remain pending"
                        ),
                    }
                }
            }
        }

        Ok(())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the collection now, regardless of policy
    pub fn flush(&self) -> Result<()> {
        let mut write_state = self.write_lock.lock();

        let records = self.records.read();
        self.persist(&records)?;
        write_state.pending = 0;

        Ok(())
    }

    /// Flush anything still pending and release the store
    pub fn close(self) -> Result<()> {
        if self.pending_mutations() > 0 {
            self.flush()?;
        }
        Ok(())
    }

    fn persist(&self, records: &[PlayerRecord]) -> Result<()> {
        let data = snapshot::encode(self.config.snapshot_format, records)?;
        let size = data.len();

        self.durable.set(&self.config.namespace, data)?;

        debug!(
            namespace = %self.config.namespace,
            records = records.len(),
            bytes = size,
            "collection persisted"
        );
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Copy of the first record with `id`
    pub fn find_by_id(&self, id: &str) -> Option<PlayerRecord> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }

    /// Copies of all records, or of those whose name equals `name_filter`
    ///
    /// The match is exact and case-sensitive. An empty filter means no filter.
    pub fn find_all(&self, name_filter: Option<&str>) -> Vec<PlayerRecord> {
        let records = self.records.read();
        match name_filter {
            Some(name) if !name.is_empty() => records
                .iter()
                .filter(|r| r.name == name)
                .cloned()
                .collect(),
            _ => PlayerRecord::map_many(&records),
        }
    }

    /// `find_by_id` converted to the domain entity
    pub fn find_player(&self, id: &str) -> Result<Option<Player>> {
        self.find_by_id(id).map(|r| r.to_domain()).transpose()
    }

    /// `find_all` converted to domain entities
    pub fn find_players(&self, name_filter: Option<&str>) -> Result<Vec<Player>> {
        self.find_all(name_filter)
            .iter()
            .map(PlayerRecord::to_domain)
            .collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.read().iter().any(|r| r.id == id)
    }

    /// Mutations not yet written to the durable store
    pub fn pending_mutations(&self) -> usize {
        self.write_lock.lock().pending
    }

    /// Durable store key of this collection
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
