//! Entity identification for board pieces.
//!
//! Tiles (2048), cards (Memory) and gems (Candy-Match) each carry a unique
//! `EntityId`. Callers key animations on these ids, so identity must
//! survive slides, falls and serialization.
//!
//! ## Usage
//!
//! ```
//! use arcade_rules::core::{EntityId, IdAllocator};
//!
//! let mut ids = IdAllocator::default();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(ids.peek(), EntityId(2));
//! ```

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a tile, card or gem.
///
/// Serializes as a bare number. Text formats also accept a numeric string
/// (`"7"`), since some clients send ids that way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Binary formats cannot self-describe, so only numbers there.
        if !deserializer.is_human_readable() {
            return u32::deserialize(deserializer).map(Self);
        }
        deserializer.deserialize_any(EntityIdVisitor)
    }
}

struct EntityIdVisitor;

impl Visitor<'_> for EntityIdVisitor {
    type Value = EntityId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned integer id or a numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<EntityId, E> {
        u32::try_from(v)
            .map(EntityId)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<EntityId, E> {
        u32::try_from(v)
            .map(EntityId)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<EntityId, E> {
        v.trim()
            .parse::<u32>()
            .map(EntityId)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

/// Monotonic id source stored inside each game state.
///
/// Living in the state (rather than the engine) keeps ids unique after a
/// game is serialized and restored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdAllocator(u32);

impl IdAllocator {
    /// Start allocating at `next`.
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self(next)
    }

    /// Hand out the next id.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.0);
        self.0 = self.0.wrapping_add(1);
        id
    }

    /// The id the next `alloc` call will return.
    #[must_use]
    pub const fn peek(&self) -> EntityId {
        EntityId(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.alloc(), EntityId(0));
        assert_eq!(ids.alloc(), EntityId(1));
        assert_eq!(ids.alloc(), EntityId(2));
    }

    #[test]
    fn test_starting_at() {
        let mut ids = IdAllocator::starting_at(40);
        assert_eq!(ids.alloc(), EntityId(40));
        assert_eq!(ids.peek(), EntityId(41));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Entity(42)");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123");
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_accepts_numeric_strings() {
        let id: EntityId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(id, EntityId(7));

        assert!(serde_json::from_str::<EntityId>("\"seven\"").is_err());
        assert!(serde_json::from_str::<EntityId>("-1").is_err());
        assert!(serde_json::from_str::<EntityId>("4294967296").is_err());
    }

    #[test]
    fn test_binary_roundtrip() {
        let bytes = bincode::serialize(&EntityId(9)).unwrap();
        let id: EntityId = bincode::deserialize(&bytes).unwrap();
        assert_eq!(id, EntityId(9));
    }
}
