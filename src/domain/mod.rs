//! Domain Module
//!
//! The Player entity and its identity value.
//!
//! ## Responsibilities
//! - Validate player identities on construction
//! - Expose read accessors used by the record adapter
//!
//! Everything here is immutable once built; the store never hands out
//! domain objects that alias its own state.

mod player;
mod player_id;

pub use player::Player;
pub use player_id::PlayerId;
