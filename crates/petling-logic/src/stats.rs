//! Bounded pet gauges and elapsed-time decay.
//!
//! All four gauges live in `[0.0, 100.0]` and are clamped on every mutation.
//! Decay is a pure function of elapsed hours — the caller owns the clock.

use serde::{Deserialize, Serialize};

/// Upper bound of every gauge.
pub const GAUGE_MAX: f32 = 100.0;

/// Elapsed-hours threshold below which decay is a no-op. Avoids churn from
/// rapid repeated calls (6 minutes).
pub const MIN_DECAY_HOURS: f32 = 0.1;

/// The four pet gauges — 0.0 (depleted) to 100.0 (full).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauges {
    pub hunger: f32,
    pub energy: f32,
    pub mood: f32,
    pub health: f32,
}

impl Default for Gauges {
    fn default() -> Self {
        Self::full()
    }
}

impl Gauges {
    /// All gauges at their maximum — a freshly adopted pet.
    pub fn full() -> Self {
        Self {
            hunger: GAUGE_MAX,
            energy: GAUGE_MAX,
            mood: GAUGE_MAX,
            health: GAUGE_MAX,
        }
    }

    /// Apply deltas to all four gauges, clamping each to `[0, 100]`.
    pub fn adjust(&mut self, hunger: f32, energy: f32, mood: f32, health: f32) {
        self.hunger = (self.hunger + hunger).clamp(0.0, GAUGE_MAX);
        self.energy = (self.energy + energy).clamp(0.0, GAUGE_MAX);
        self.mood = (self.mood + mood).clamp(0.0, GAUGE_MAX);
        self.health = (self.health + health).clamp(0.0, GAUGE_MAX);
    }
}

/// Hourly linear decay rates. Health does not decay with time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayRates {
    pub hunger_per_hour: f32,
    pub energy_per_hour: f32,
    pub mood_per_hour: f32,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger_per_hour: 5.0,
            energy_per_hour: 3.0,
            mood_per_hour: 2.0,
        }
    }
}

/// Apply elapsed-time decay to the gauges.
///
/// Returns `true` if decay was applied, `false` for the sub-threshold no-op.
/// On a no-op the caller must NOT advance the last-interaction timestamp, so
/// short intervals still accumulate toward the next real decay.
pub fn decay(gauges: &mut Gauges, hours: f32, rates: &DecayRates) -> bool {
    if hours <= MIN_DECAY_HOURS {
        return false;
    }
    gauges.hunger = (gauges.hunger - rates.hunger_per_hour * hours).clamp(0.0, GAUGE_MAX);
    gauges.energy = (gauges.energy - rates.energy_per_hour * hours).clamp(0.0, GAUGE_MAX);
    gauges.mood = (gauges.mood - rates.mood_per_hour * hours).clamp(0.0, GAUGE_MAX);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_is_linear_in_hours() {
        let mut g = Gauges::full();
        let applied = decay(&mut g, 4.0, &DecayRates::default());
        assert!(applied);
        assert!((g.hunger - 80.0).abs() < 0.001);
        assert!((g.energy - 88.0).abs() < 0.001);
        assert!((g.mood - 92.0).abs() < 0.001);
        assert!((g.health - 100.0).abs() < f32::EPSILON); // untouched by time
    }

    #[test]
    fn decay_clamps_at_zero() {
        let mut g = Gauges {
            hunger: 3.0,
            energy: 1.0,
            mood: 0.5,
            health: 40.0,
        };
        decay(&mut g, 10.0, &DecayRates::default());
        assert!(g.hunger.abs() < f32::EPSILON);
        assert!(g.energy.abs() < f32::EPSILON);
        assert!(g.mood.abs() < f32::EPSILON);
        assert!((g.health - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn short_interval_is_a_noop() {
        let mut g = Gauges {
            hunger: 50.0,
            energy: 50.0,
            mood: 50.0,
            health: 50.0,
        };
        let before = g;
        assert!(!decay(&mut g, 0.05, &DecayRates::default()));
        assert_eq!(g, before);

        // Exactly at the threshold is still a no-op
        assert!(!decay(&mut g, MIN_DECAY_HOURS, &DecayRates::default()));
        assert_eq!(g, before);
    }

    #[test]
    fn adjust_clamps_both_ends() {
        let mut g = Gauges {
            hunger: 90.0,
            energy: 10.0,
            mood: 50.0,
            health: 50.0,
        };
        g.adjust(30.0, -25.0, 0.0, 0.0);
        assert!((g.hunger - 100.0).abs() < f32::EPSILON);
        assert!(g.energy.abs() < f32::EPSILON);
    }
}
