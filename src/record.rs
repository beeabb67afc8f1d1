//! Record Adapter
//!
//! Flat, storable projection of a Player and the conversions between the two.
//!
//! ## Responsibilities
//! - Build a `PlayerRecord` from a `Player` (never fails)
//! - Rebuild a `Player` from a record (fails on an invalid id)
//! - Copy record slices so callers never alias store-owned state

use serde::{Deserialize, Serialize};

use crate::domain::{Player, PlayerId};
use crate::error::Result;

/// Storable record: id, name and points as plain fields
///
/// Records carry no identity of their own. Two records with the same `id`
/// describe the same player; keeping ids unique is the store's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    pub points: i64,
}

impl PlayerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
        }
    }

    /// Convert back into the domain entity
    ///
    /// Fails with `InvalidIdentity` if `id` is not a valid `PlayerId`.
    pub fn to_domain(&self) -> Result<Player> {
        let id = PlayerId::new(self.id.as_str())?;
        Ok(Player::new(id, self.name.clone(), self.points))
    }

    /// Project a domain entity into a record
    pub fn from_domain(player: &Player) -> Self {
        Self::new(player.id().value(), player.name(), player.points())
    }

    /// Element-wise owned copy of `records`
    pub fn map_many(records: &[PlayerRecord]) -> Vec<PlayerRecord> {
        records.to_vec()
    }
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self::from_domain(player)
    }
}

impl TryFrom<&PlayerRecord> for Player {
    type Error = crate::error::StoreError;

    fn try_from(record: &PlayerRecord) -> Result<Self> {
        record.to_domain()
    }
}
