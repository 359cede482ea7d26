//! Daily quests — progress advancement and the claim state machine.
//!
//! A quest is a bounded counter tied to an action category (or to raw XP
//! gain). Progress never exceeds the target; `completed` flips exactly when
//! the target is reached; `claimed` implies `completed` and is set only by a
//! successful claim.

use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;
use crate::error::ProgressionError;
use crate::leveling::{self, LevelingConfig};
use crate::state::PetState;

/// What a quest counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Feed,
    Play,
    Sleep,
    Clean,
    /// Counts cumulative XP gained, advanced by the exact XP delta of each
    /// action rather than a unit count.
    Xp,
}

impl From<ActionKind> for QuestKind {
    fn from(action: ActionKind) -> Self {
        match action {
            ActionKind::Feed => QuestKind::Feed,
            ActionKind::Play => QuestKind::Play,
            ActionKind::Sleep => QuestKind::Sleep,
            ActionKind::Clean => QuestKind::Clean,
        }
    }
}

/// One daily quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique within the pet's active quest set.
    pub id: u32,
    pub kind: QuestKind,
    /// Positive progress target.
    pub target: u32,
    /// Current progress, always `0..=target`.
    pub progress: u32,
    /// True exactly from the moment progress reaches the target.
    pub completed: bool,
    /// True only after a successful claim. `claimed` implies `completed`.
    pub claimed: bool,
    /// Coins credited when claimed.
    pub reward: i64,
}

impl Quest {
    pub fn new(id: u32, kind: QuestKind, target: u32, reward: i64) -> Self {
        Self {
            id,
            kind,
            target,
            progress: 0,
            completed: false,
            claimed: false,
            reward,
        }
    }
}

/// Advance every active, uncompleted quest of the matching kind by `amount`.
///
/// All matching quests advance independently on one call — no early exit
/// after the first match. Returns `true` if any quest changed.
pub fn advance(quests: &mut [Quest], kind: QuestKind, amount: u32) -> bool {
    if amount == 0 {
        return false;
    }
    let mut changed = false;
    for quest in quests.iter_mut().filter(|q| q.kind == kind && !q.completed) {
        quest.progress = (quest.progress + amount).min(quest.target);
        if quest.progress >= quest.target {
            quest.completed = true;
        }
        changed = true;
    }
    changed
}

/// Result of a successful claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Coins credited.
    pub reward: i64,
    /// Whether the claim-bonus XP pushed the pet over a level threshold.
    pub leveled_up: bool,
}

/// Resolve a claim request against the active quest set.
///
/// On success the quest is marked claimed, the reward coins are credited,
/// the fixed claim-bonus XP is granted, and the leveling check is re-run —
/// claiming can itself level the pet.
pub fn claim(
    state: &mut PetState,
    quests: &mut [Quest],
    quest_id: u32,
    config: &LevelingConfig,
) -> Result<ClaimOutcome, ProgressionError> {
    let quest = quests
        .iter_mut()
        .find(|q| q.id == quest_id)
        .ok_or(ProgressionError::QuestNotFound(quest_id))?;
    if !quest.completed {
        return Err(ProgressionError::QuestNotCompleted(quest_id));
    }
    if quest.claimed {
        return Err(ProgressionError::QuestAlreadyClaimed(quest_id));
    }
    quest.claimed = true;
    state.pet_coins += quest.reward;
    state.xp += config.claim_bonus_xp;
    let reward = quest.reward;
    let leveled_up = leveling::check_level_up(state, config).is_some();
    Ok(ClaimOutcome { reward, leveled_up })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(id: u32, kind: QuestKind, target: u32, progress: u32) -> Quest {
        let completed = progress >= target;
        Quest {
            id,
            kind,
            target,
            progress,
            completed,
            claimed: false,
            reward: 50,
        }
    }

    #[test]
    fn advance_completes_exactly_at_target() {
        let mut quests = vec![quest(1, QuestKind::Feed, 3, 2)];
        assert!(advance(&mut quests, QuestKind::Feed, 1));
        assert_eq!(quests[0].progress, 3);
        assert!(quests[0].completed);
        assert!(!quests[0].claimed);
    }

    #[test]
    fn advance_clamps_overshoot() {
        let mut quests = vec![quest(1, QuestKind::Xp, 50, 40)];
        advance(&mut quests, QuestKind::Xp, 100);
        assert_eq!(quests[0].progress, 50);
        assert!(quests[0].completed);
    }

    #[test]
    fn all_matching_quests_advance_together() {
        let mut quests = vec![
            quest(1, QuestKind::Play, 3, 0),
            quest(2, QuestKind::Feed, 2, 0),
            quest(3, QuestKind::Play, 5, 0),
        ];
        advance(&mut quests, QuestKind::Play, 1);
        assert_eq!(quests[0].progress, 1);
        assert_eq!(quests[1].progress, 0);
        assert_eq!(quests[2].progress, 1);
    }

    #[test]
    fn completed_quest_stops_advancing() {
        let mut quests = vec![quest(1, QuestKind::Sleep, 2, 2)];
        assert!(!advance(&mut quests, QuestKind::Sleep, 1));
        assert_eq!(quests[0].progress, 2);
    }

    #[test]
    fn claim_pays_out_once() {
        let config = LevelingConfig::default();
        let mut state = PetState::default();
        let mut quests = vec![quest(7, QuestKind::Clean, 1, 1)];
        let coins_before = state.pet_coins;

        let outcome = claim(&mut state, &mut quests, 7, &config).unwrap();
        assert_eq!(outcome.reward, 50);
        assert_eq!(state.pet_coins, coins_before + 50);
        assert_eq!(state.xp, config.claim_bonus_xp);
        assert!(quests[0].claimed);

        // Second claim is rejected and does not double-credit
        let err = claim(&mut state, &mut quests, 7, &config).unwrap_err();
        assert_eq!(err, ProgressionError::QuestAlreadyClaimed(7));
        assert_eq!(state.pet_coins, coins_before + 50);
    }

    #[test]
    fn claim_rejects_incomplete_and_missing() {
        let config = LevelingConfig::default();
        let mut state = PetState::default();
        let mut quests = vec![quest(1, QuestKind::Feed, 3, 1)];
        assert_eq!(
            claim(&mut state, &mut quests, 1, &config).unwrap_err(),
            ProgressionError::QuestNotCompleted(1)
        );
        assert_eq!(
            claim(&mut state, &mut quests, 99, &config).unwrap_err(),
            ProgressionError::QuestNotFound(99)
        );
    }

    #[test]
    fn claim_can_trigger_level_up() {
        let config = LevelingConfig::default();
        let mut state = PetState {
            xp: 90,
            ..PetState::default()
        };
        let mut quests = vec![quest(1, QuestKind::Xp, 50, 50)];
        let outcome = claim(&mut state, &mut quests, 1, &config).unwrap();
        assert!(outcome.leveled_up);
        assert_eq!(state.level, 2);
        assert_eq!(state.xp, 15); // 90 + 25 - 100
    }
}
