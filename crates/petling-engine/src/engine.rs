//! The progression engine — atomic per-pet transactions.
//!
//! Every operation follows the same shape: lock the pet, clone it, run
//! decay and quest upkeep, apply the operation's rules, then commit the
//! clone by assignment. A failure anywhere returns before the commit, so
//! callers never observe partial application.

use std::collections::HashSet;

use petling_logic::actions::{self, ActionKind};
use petling_logic::error::ProgressionError;
use petling_logic::leveling::{self, LevelingConfig};
use petling_logic::quests::{self, QuestKind};
use petling_logic::stats::{self, DecayRates};

use crate::catalog::{self, ItemKind};
use crate::error::EngineError;
use crate::pet::Pet;
use crate::quest_gen::{self, QuestGenConfig};
use crate::store::PetStore;

/// Engine-wide configuration, composing the per-module tunables plus the
/// capability grants that replace any hardcoded privileged identifier.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub decay: DecayRates,
    pub leveling: LevelingConfig,
    pub quest_gen: QuestGenConfig,
    /// Users whose coin preconditions always pass and whose coin costs are
    /// never charged. Resolved from deployment configuration, never from a
    /// literal id comparison in the rules.
    pub unlimited_coin_users: HashSet<String>,
}

impl EngineConfig {
    /// Grant the unlimited-coins capability to a user.
    pub fn grant_unlimited_coins(mut self, user_id: impl Into<String>) -> Self {
        self.unlimited_coin_users.insert(user_id.into());
        self
    }
}

/// Result of applying a care action.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub pet: Pet,
    pub leveled_up: bool,
}

/// Result of claiming a quest.
#[derive(Debug, Clone)]
pub struct ClaimOutcome {
    pub pet: Pet,
    pub reward: i64,
    pub leveled_up: bool,
}

/// Composes decay, actions, quests and leveling into atomic operations
/// over a [`PetStore`].
pub struct ProgressionEngine<S: PetStore> {
    store: S,
    config: EngineConfig,
}

impl<S: PetStore> ProgressionEngine<S> {
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store (snapshots, save files).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new pet record.
    pub fn adopt(&self, pet: Pet) {
        log::info!("adopted pet {} ({})", pet.id, pet.name);
        self.store.insert(pet);
    }

    /// Current snapshot of a pet, without mutating anything.
    pub fn pet(&self, pet_id: &str) -> Result<Pet, EngineError> {
        self.store.get(pet_id)
    }

    fn unlimited_coins(&self, user_id: &str) -> bool {
        self.config.unlimited_coin_users.contains(user_id)
    }

    /// Apply one care action: decay → effect → quest advancement →
    /// leveling → timestamp. `now` is UNIX seconds supplied by the caller.
    pub fn apply_action(
        &self,
        pet_id: &str,
        user_id: &str,
        action: ActionKind,
        now: f64,
    ) -> Result<ActionOutcome, EngineError> {
        let unlimited = self.unlimited_coins(user_id);
        let config = &self.config;
        self.store.transact(pet_id, |pet| {
            ensure_owner(pet, user_id)?;
            let mut next = pet.clone();
            run_upkeep(&mut next, now, config);

            let effect = actions::compute_action_effect(action, &next.state, unlimited)?;
            actions::apply_effect(&mut next.state, &effect);

            // Corrected, non-duplicating sequence: the action category
            // counts one occurrence, XP quests count the exact XP delta.
            quests::advance(&mut next.daily_quests, action.into(), 1);
            quests::advance(&mut next.daily_quests, QuestKind::Xp, effect.xp_gain);

            let leveled_up = leveling::check_level_up(&mut next.state, &config.leveling).is_some();
            next.touch(now);

            if leveled_up {
                log::info!("pet {} reached level {}", next.id, next.state.level);
            }
            log::debug!("{} applied {} (xp +{})", next.id, action.name(), effect.xp_gain);

            *pet = next;
            Ok(ActionOutcome {
                pet: pet.clone(),
                leveled_up,
            })
        })
    }

    /// Apply an action given its wire name; unrecognized names fail with
    /// `UnknownAction` before touching the store record.
    pub fn apply_action_named(
        &self,
        pet_id: &str,
        user_id: &str,
        action: &str,
        now: f64,
    ) -> Result<ActionOutcome, EngineError> {
        let action = ActionKind::from_name(action).map_err(EngineError::from)?;
        self.apply_action(pet_id, user_id, action, now)
    }

    /// Claim a completed quest's reward. Claiming grants bonus XP and can
    /// itself level the pet.
    pub fn claim_quest(
        &self,
        pet_id: &str,
        quest_id: u32,
        now: f64,
    ) -> Result<ClaimOutcome, EngineError> {
        let config = &self.config;
        self.store.transact(pet_id, |pet| {
            let mut next = pet.clone();
            run_upkeep(&mut next, now, config);

            let outcome =
                quests::claim(&mut next.state, &mut next.daily_quests, quest_id, &config.leveling)?;
            next.touch(now);

            log::info!(
                "pet {} claimed quest {} for {} coins",
                next.id,
                quest_id,
                outcome.reward
            );

            *pet = next;
            Ok(ClaimOutcome {
                pet: pet.clone(),
                reward: outcome.reward,
                leveled_up: outcome.leveled_up,
            })
        })
    }

    /// Submit a finished mini-game score. The per-user best is updated only
    /// when strictly greater; resubmitting a lower or equal score is a
    /// successful no-op, never an error.
    pub fn submit_score(
        &self,
        pet_id: &str,
        user_id: &str,
        score: u32,
    ) -> Result<Pet, EngineError> {
        self.store.transact(pet_id, |pet| {
            ensure_owner(pet, user_id)?;
            let best = pet.high_scores.get(user_id).copied().unwrap_or(0);
            if score > best {
                pet.high_scores.insert(user_id.to_string(), score);
                log::info!("pet {}: new best score {} for {}", pet.id, score, user_id);
            }
            Ok(pet.clone())
        })
    }

    /// Buy a catalog item: catalog check, duplicate check, funds check,
    /// then charge and add to inventory.
    pub fn buy_item(
        &self,
        pet_id: &str,
        user_id: &str,
        item_id: &str,
    ) -> Result<Pet, EngineError> {
        let unlimited = self.unlimited_coins(user_id);
        self.store.transact(pet_id, |pet| {
            ensure_owner(pet, user_id)?;
            let item =
                catalog::find(item_id).ok_or_else(|| EngineError::ItemNotFound(item_id.into()))?;
            if pet.inventory.contains(item_id) {
                return Err(EngineError::AlreadyOwned(item_id.into()));
            }
            if !unlimited && pet.state.pet_coins < item.price {
                return Err(ProgressionError::Precondition {
                    resource: "coins",
                    needed: item.price as f64,
                    available: pet.state.pet_coins as f64,
                }
                .into());
            }

            let mut next = pet.clone();
            if !unlimited {
                next.state.pet_coins -= item.price;
            }
            next.inventory.insert(item_id.to_string());

            *pet = next;
            Ok(pet.clone())
        })
    }

    /// Equip an owned item into its catalog slot (or as the background).
    pub fn equip_item(&self, pet_id: &str, item_id: &str) -> Result<Pet, EngineError> {
        self.store.transact(pet_id, |pet| {
            let item =
                catalog::find(item_id).ok_or_else(|| EngineError::ItemNotFound(item_id.into()))?;
            if !pet.inventory.contains(item_id) {
                return Err(EngineError::NotOwned(item_id.into()));
            }
            match item.kind {
                ItemKind::Accessory(slot) => pet.accessories.set(slot, Some(item_id.to_string())),
                ItemKind::Background => pet.background = Some(item_id.to_string()),
            }
            Ok(pet.clone())
        })
    }
}

fn ensure_owner(pet: &Pet, user_id: &str) -> Result<(), EngineError> {
    if pet.owned_by(user_id) {
        Ok(())
    } else {
        Err(EngineError::UnknownUser {
            user: user_id.to_string(),
            pet: pet.id.clone(),
        })
    }
}

/// Elapsed-time decay plus quest-set regeneration. The timestamp only
/// advances when decay actually ran, so sub-threshold intervals keep
/// accumulating.
fn run_upkeep(pet: &mut Pet, now: f64, config: &EngineConfig) {
    let hours = ((now - pet.last_interaction) / 3600.0) as f32;
    if stats::decay(&mut pet.state.gauges, hours, &config.decay) {
        pet.touch(now);
        log::debug!("pet {} decayed over {:.2}h", pet.id, hours);
    }
    if pet.daily_quests.is_empty() {
        pet.daily_quests = quest_gen::generate(&mut rand::thread_rng(), &config.quest_gen);
        log::debug!("pet {}: regenerated {} daily quests", pet.id, pet.daily_quests.len());
    }
}
