//! Care actions — precondition validation and gauge/coin/XP effects.
//!
//! Each action is a symmetric gain/cost table entry. Validation happens
//! before any mutation; applying an effect is clamp-then-assign on the
//! gauges plus plain integer arithmetic on coins and XP.

use serde::{Deserialize, Serialize};

use crate::error::ProgressionError;
use crate::state::PetState;

/// Coins one feeding costs.
pub const FEED_COIN_COST: i64 = 10;
/// Energy one play session costs.
pub const PLAY_ENERGY_COST: f32 = 20.0;

/// The discrete care actions a player can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Feed,
    Play,
    Sleep,
    Clean,
}

impl ActionKind {
    /// All care actions in table order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Feed,
        ActionKind::Play,
        ActionKind::Sleep,
        ActionKind::Clean,
    ];

    /// Wire name of the action.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Feed => "feed",
            ActionKind::Play => "play",
            ActionKind::Sleep => "sleep",
            ActionKind::Clean => "clean",
        }
    }

    /// Parse a wire name, rejecting anything outside the table.
    pub fn from_name(name: &str) -> Result<Self, ProgressionError> {
        match name {
            "feed" => Ok(ActionKind::Feed),
            "play" => Ok(ActionKind::Play),
            "sleep" => Ok(ActionKind::Sleep),
            "clean" => Ok(ActionKind::Clean),
            other => Err(ProgressionError::UnknownAction(other.to_string())),
        }
    }
}

/// The deltas one action applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionEffect {
    pub hunger_delta: f32,
    pub energy_delta: f32,
    pub mood_delta: f32,
    pub health_delta: f32,
    pub coin_delta: i64,
    pub xp_gain: u32,
}

/// Validate an action against the pet's current resources and compute its
/// effect.
///
/// `unlimited_coins` is the explicit capability flag resolved by the caller
/// from configuration — with it set, coin preconditions pass and coin costs
/// are not charged.
///
/// Fails with [`ProgressionError::Precondition`] when a required resource is
/// insufficient; the pet is left untouched.
pub fn compute_action_effect(
    action: ActionKind,
    state: &PetState,
    unlimited_coins: bool,
) -> Result<ActionEffect, ProgressionError> {
    match action {
        ActionKind::Feed => {
            if !unlimited_coins && state.pet_coins < FEED_COIN_COST {
                return Err(ProgressionError::Precondition {
                    resource: "coins",
                    needed: FEED_COIN_COST as f64,
                    available: state.pet_coins as f64,
                });
            }
            Ok(ActionEffect {
                hunger_delta: 30.0,
                energy_delta: 0.0,
                mood_delta: 10.0,
                health_delta: 5.0,
                coin_delta: if unlimited_coins { 0 } else { -FEED_COIN_COST },
                xp_gain: 15,
            })
        }
        ActionKind::Play => {
            if state.gauges.energy < PLAY_ENERGY_COST {
                return Err(ProgressionError::Precondition {
                    resource: "energy",
                    needed: PLAY_ENERGY_COST as f64,
                    available: state.gauges.energy as f64,
                });
            }
            Ok(ActionEffect {
                hunger_delta: 0.0,
                energy_delta: -PLAY_ENERGY_COST,
                mood_delta: 25.0,
                health_delta: 0.0,
                coin_delta: 20,
                xp_gain: 20,
            })
        }
        ActionKind::Sleep => Ok(ActionEffect {
            hunger_delta: 0.0,
            energy_delta: 60.0,
            mood_delta: 0.0,
            health_delta: 10.0,
            coin_delta: 0,
            xp_gain: 5,
        }),
        ActionKind::Clean => Ok(ActionEffect {
            hunger_delta: 0.0,
            energy_delta: 0.0,
            mood_delta: 0.0,
            health_delta: 0.0,
            coin_delta: 0,
            xp_gain: 10,
        }),
    }
}

/// Apply a computed effect: clamp the gauges, credit/charge coins, add XP.
pub fn apply_effect(state: &mut PetState, effect: &ActionEffect) {
    state.gauges.adjust(
        effect.hunger_delta,
        effect.energy_delta,
        effect.mood_delta,
        effect.health_delta,
    );
    state.pet_coins += effect.coin_delta;
    state.xp += effect.xp_gain;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Gauges;

    fn state(coins: i64, energy: f32) -> PetState {
        PetState {
            gauges: Gauges {
                hunger: 50.0,
                energy,
                mood: 50.0,
                health: 50.0,
            },
            level: 1,
            xp: 0,
            pet_coins: coins,
        }
    }

    #[test]
    fn feed_charges_and_replenishes() {
        let mut s = state(30, 50.0);
        let effect = compute_action_effect(ActionKind::Feed, &s, false).unwrap();
        apply_effect(&mut s, &effect);
        assert_eq!(s.pet_coins, 20);
        assert!((s.gauges.hunger - 80.0).abs() < f32::EPSILON);
        assert!((s.gauges.mood - 60.0).abs() < f32::EPSILON);
        assert!((s.gauges.health - 55.0).abs() < f32::EPSILON);
        assert_eq!(s.xp, 15);
    }

    #[test]
    fn feed_rejected_when_broke() {
        let s = state(5, 50.0);
        let err = compute_action_effect(ActionKind::Feed, &s, false).unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::Precondition {
                resource: "coins",
                ..
            }
        ));
    }

    #[test]
    fn unlimited_coins_skips_charge() {
        let mut s = state(0, 50.0);
        let effect = compute_action_effect(ActionKind::Feed, &s, true).unwrap();
        apply_effect(&mut s, &effect);
        assert_eq!(s.pet_coins, 0);
        assert_eq!(s.xp, 15);
    }

    #[test]
    fn play_at_energy_25() {
        let mut s = state(0, 25.0);
        let effect = compute_action_effect(ActionKind::Play, &s, false).unwrap();
        apply_effect(&mut s, &effect);
        assert!((s.gauges.energy - 5.0).abs() < f32::EPSILON);
        assert!((s.gauges.mood - 75.0).abs() < f32::EPSILON);
        assert_eq!(s.xp, 20);
        assert_eq!(s.pet_coins, 20);
    }

    #[test]
    fn play_rejected_when_exhausted() {
        let s = state(0, 19.9);
        let err = compute_action_effect(ActionKind::Play, &s, false).unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::Precondition {
                resource: "energy",
                ..
            }
        ));
    }

    #[test]
    fn sleep_and_clean_have_no_preconditions() {
        let mut s = state(0, 0.0);
        let effect = compute_action_effect(ActionKind::Sleep, &s, false).unwrap();
        apply_effect(&mut s, &effect);
        assert!((s.gauges.energy - 60.0).abs() < f32::EPSILON);
        assert!((s.gauges.health - 60.0).abs() < f32::EPSILON);
        assert_eq!(s.xp, 5);

        let effect = compute_action_effect(ActionKind::Clean, &s, false).unwrap();
        apply_effect(&mut s, &effect);
        assert_eq!(s.xp, 15);
    }

    #[test]
    fn gains_clamp_at_gauge_max() {
        let mut s = state(100, 95.0);
        let effect = compute_action_effect(ActionKind::Sleep, &s, false).unwrap();
        apply_effect(&mut s, &effect);
        assert!((s.gauges.energy - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_action_name() {
        let err = ActionKind::from_name("dance").unwrap_err();
        assert_eq!(err, ProgressionError::UnknownAction("dance".to_string()));
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_name(kind.name()).unwrap(), kind);
        }
    }
}
