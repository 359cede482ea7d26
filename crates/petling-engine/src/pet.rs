//! The pet record — everything persisted per pet.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use petling_logic::quests::Quest;
use petling_logic::state::PetState;

/// Slots an accessory can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipSlot {
    Head,
    Body,
    Legs,
}

impl EquipSlot {
    /// All equip slots in order.
    pub const ALL: [EquipSlot; 3] = [EquipSlot::Head, EquipSlot::Body, EquipSlot::Legs];
}

/// What the pet currently wears, one owned item id per slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accessories {
    pub head: Option<String>,
    pub body: Option<String>,
    pub legs: Option<String>,
}

impl Accessories {
    /// The item equipped in a slot, if any.
    pub fn get(&self, slot: EquipSlot) -> Option<&str> {
        match slot {
            EquipSlot::Head => self.head.as_deref(),
            EquipSlot::Body => self.body.as_deref(),
            EquipSlot::Legs => self.legs.as_deref(),
        }
    }

    /// Equip (or clear) a slot.
    pub fn set(&mut self, slot: EquipSlot, item: Option<String>) {
        match slot {
            EquipSlot::Head => self.head = item,
            EquipSlot::Body => self.body = item,
            EquipSlot::Legs => self.legs = item,
        }
    }
}

/// One pet and everything that persists with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    /// One or two owning user ids.
    pub owners: Vec<String>,
    /// Gauges, level, XP, coins.
    pub state: PetState,
    /// Owned item ids — membership only, no ordering.
    pub inventory: HashSet<String>,
    pub accessories: Accessories,
    /// Equipped background item, `None` for the default.
    pub background: Option<String>,
    /// Active daily quest set, regenerated when empty.
    pub daily_quests: Vec<Quest>,
    /// UNIX seconds of the last decay/action. Monotonically non-decreasing.
    pub last_interaction: f64,
    /// Best mini-game score per user id, monotone non-decreasing.
    pub high_scores: HashMap<String, u32>,
}

impl Pet {
    /// Adopt a new pet: full gauges, level 1, starting coins, no items.
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owners: vec![owner.into()],
            state: PetState::default(),
            inventory: HashSet::new(),
            accessories: Accessories::default(),
            background: None,
            daily_quests: Vec::new(),
            last_interaction: 0.0,
            high_scores: HashMap::new(),
        }
    }

    /// Adopt at a known moment, so the first decay measures from adoption.
    pub fn adopted_at(mut self, now: f64) -> Self {
        self.last_interaction = now;
        self
    }

    /// Add a co-owner (pets support one or two owners).
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owners.push(owner.into());
        self
    }

    /// Whether this user owns the pet.
    pub fn owned_by(&self, user_id: &str) -> bool {
        self.owners.iter().any(|o| o == user_id)
    }

    /// Advance the interaction timestamp, never backwards.
    pub fn touch(&mut self, now: f64) {
        if now > self.last_interaction {
            self.last_interaction = now;
        }
    }
}
