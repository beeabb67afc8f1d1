//! Player entity

use super::PlayerId;

/// A scored participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    points: i64,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, points: i64) -> Self {
        Self {
            id,
            name: name.into(),
            points,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current score (may be zero or negative)
    pub fn points(&self) -> i64 {
        self.points
    }
}
