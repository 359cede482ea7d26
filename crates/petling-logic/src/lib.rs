//! Pure pet progression logic for Petling.
//!
//! This crate contains all progression rules that are independent of any
//! storage, clock, or runtime. Functions take plain data and return results,
//! making them unit-testable and portable across the backend routes, the
//! headless harness, and any future engine.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | Precondition-validated care actions and their gauge/coin/XP effects |
//! | [`error`] | Shared progression error taxonomy |
//! | [`leveling`] | XP thresholds, single-step level-up, full gauge restore |
//! | [`quests`] | Daily quest progress advancement and claim state machine |
//! | [`state`] | Numeric pet state (gauges, level, XP, coins) |
//! | [`stats`] | Bounded gauges and elapsed-time decay |

pub mod actions;
pub mod error;
pub mod leveling;
pub mod quests;
pub mod state;
pub mod stats;
