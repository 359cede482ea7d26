//! Petling progression engine.
//!
//! Composes the pure rules from `petling-logic` into atomic per-pet
//! transactions: elapsed-time decay, care actions, quest claims, shop
//! purchases and mini-game score submission. Each operation is a
//! run-to-completion read-modify-write on one pet record behind a per-pet
//! lock; nothing partial is ever observable.
//!
//! # Example
//!
//! ```rust
//! use petling_engine::prelude::*;
//! use petling_logic::actions::ActionKind;
//!
//! let engine = ProgressionEngine::new(MemoryStore::new(), EngineConfig::default());
//! engine.adopt(Pet::new("pet-1", "Biscuit", "user-1"));
//!
//! let outcome = engine
//!     .apply_action("pet-1", "user-1", ActionKind::Sleep, 1_700_000_000.0)
//!     .unwrap();
//! assert!(outcome.pet.state.xp > 0 || outcome.leveled_up);
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod pet;
pub mod quest_gen;
pub mod store;

/// Commonly used types for convenient importing.
pub mod prelude {
    pub use crate::engine::{EngineConfig, ProgressionEngine};
    pub use crate::error::EngineError;
    pub use crate::pet::{EquipSlot, Pet};
    pub use crate::store::{MemoryStore, PetStore};
}
