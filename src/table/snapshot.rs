//! Serializable engine state for checkpoints.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::error::Result;

/// Plain copy of an engine's three piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Draw pile, front first.
    pub deck: Vec<Card>,
    /// Visible cards, in table order.
    pub table: Vec<Card>,
    /// Cards removed from play.
    pub discarded: Vec<Card>,
}

impl EngineSnapshot {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
