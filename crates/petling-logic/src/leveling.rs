//! XP thresholds and level-up resolution.
//!
//! The threshold for the next level is `level * xp_per_level`. Leveling up
//! subtracts the threshold, grants a fixed coin bonus, and fully restores
//! energy, health and mood (hunger is not restored — a bigger pet is a
//! hungrier pet).

use serde::{Deserialize, Serialize};

use crate::state::PetState;
use crate::stats::GAUGE_MAX;

/// Configuration for leveling and its rewards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelingConfig {
    /// XP needed per level: threshold = `level * xp_per_level`.
    pub xp_per_level: u32,
    /// Coins granted on each level-up.
    pub level_coin_bonus: i64,
    /// XP granted for claiming a completed quest.
    pub claim_bonus_xp: u32,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            xp_per_level: 100,
            level_coin_bonus: 100,
            claim_bonus_xp: 25,
        }
    }
}

/// XP required to advance from `level` to the next.
pub fn xp_needed(level: u32, config: &LevelingConfig) -> u32 {
    level * config.xp_per_level
}

/// Result of a successful level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
    pub coin_bonus: i64,
}

/// Run the leveling check once.
///
/// Advances at most one level per call: an action that grants enough XP to
/// cross two thresholds still advances one level, and the surplus converts
/// on the next check. This throttling is deliberate product behavior, not
/// an accumulation bug.
pub fn check_level_up(state: &mut PetState, config: &LevelingConfig) -> Option<LevelUp> {
    let needed = xp_needed(state.level, config);
    if state.xp < needed {
        return None;
    }
    state.xp -= needed;
    state.level += 1;
    state.pet_coins += config.level_coin_bonus;
    state.gauges.energy = GAUGE_MAX;
    state.gauges.health = GAUGE_MAX;
    state.gauges.mood = GAUGE_MAX;
    Some(LevelUp {
        new_level: state.level,
        coin_bonus: config.level_coin_bonus,
    })
}
