//! Numeric progression state of a pet.

use serde::{Deserialize, Serialize};

use crate::stats::Gauges;

/// Coins a freshly adopted pet starts with.
pub const STARTING_COINS: i64 = 100;

/// The numbers that progression rules read and write: gauges, level, XP
/// and currency. Identity, inventory and quests live with the pet record
/// that embeds this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    pub gauges: Gauges,
    /// Current level, always ≥ 1.
    pub level: u32,
    /// XP toward the next level. A leveling check converts at most one
    /// threshold's worth per call; surplus carries over.
    pub xp: u32,
    /// Currency, never negative — actions that cannot be paid for are
    /// rejected instead.
    pub pet_coins: i64,
}

impl Default for PetState {
    fn default() -> Self {
        Self {
            gauges: Gauges::full(),
            level: 1,
            xp: 0,
            pet_coins: STARTING_COINS,
        }
    }
}
