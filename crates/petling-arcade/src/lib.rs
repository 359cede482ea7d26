//! Arcade mini-game simulations for Petling.
//!
//! Two continuous-time, score-producing games, each modeled as an explicit
//! state struct advanced by a pure `tick(&mut state, &input, &config, dt)`
//! step — no rendering surface, no captured closures, no wall clock. The
//! caller drives one step per rendered frame (or any other schedule); the
//! simulation is deterministic for a given input trace and, for the dodge
//! game, a given RNG seed.
//!
//! Both games terminate on hazard collision. The final integer score is the
//! only value that crosses back into the progression engine, via its
//! score-submission operation. Aborting a run before game over has no side
//! effects.

pub mod collision;
pub mod dodge;
pub mod runner;
