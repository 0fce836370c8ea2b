//! Scoring primitives shared by every policy.
//!
//! All functions are pure. Randomness enters only through [`draw`], whose
//! result callers pass in as a jitter term, so a score can be recomputed
//! exactly by holding the draw fixed.

use kazam_battle::query::{self, NEUTRAL};
use kazam_battle::{ChartError, Combatant, Condition, Move, Stat, Type, TypeChart};
use rand::Rng;

/// Divisor normalizing the defense + special defense pair
const DEFENSE_SCALE: f64 = 200.0;

/// Divisor normalizing base power
const POWER_SCALE: f64 = 150.0;

/// A uniform draw in [0, 1)
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..1.0)
}

fn or_neutral(lookup: Result<f64, ChartError>) -> f64 {
    lookup.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "type chart lookup failed, assuming neutral");
        NEUTRAL
    })
}

/// Chart lookup that never fails: a missing entry counts as neutral
pub fn effectiveness<C: TypeChart + ?Sized>(chart: &C, attacking: Type, defending: Type) -> f64 {
    or_neutral(query::lookup(chart, attacking, defending))
}

/// Fail-soft matchup of `attacker`'s type against `defender`'s type
pub fn matchup<C: TypeChart + ?Sized>(chart: &C, attacker: &Combatant, defender: &Combatant) -> f64 {
    or_neutral(query::matchup(chart, attacker, defender))
}

/// Effectiveness that is never rewarded above neutral
pub fn capped(effectiveness: f64) -> f64 {
    effectiveness.min(NEUTRAL)
}

/// Defense + special defense over 200
pub fn defense_pair(combatant: &Combatant) -> f64 {
    f64::from(combatant.stats.defense_pair()) / DEFENSE_SCALE
}

/// Accuracy as a fraction
pub fn accuracy(mv: &Move) -> f64 {
    f64::from(mv.accuracy) / 100.0
}

/// Base power over 150
pub fn power(mv: &Move) -> f64 {
    f64::from(mv.power) / POWER_SCALE
}

/// How much inflicting `condition` hampers the opponent
pub fn status_value(condition: &Condition) -> f64 {
    match condition {
        Condition::Sleep | Condition::Freeze => 1.0,
        c if c.incapacitates() => 0.8,
        Condition::StatDrop(Stat::Atk | Stat::Spa | Stat::Spe) => 0.7,
        Condition::StatDrop(Stat::Def | Stat::Spd) => 0.6,
        _ => 0.3,
    }
}

/// The highest scoring candidate. Ties keep the earliest; NaN never wins.
pub fn best_by<T, I, F>(candidates: I, mut score: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for candidate in candidates {
        let s = score(&candidate);
        let s = if s.is_nan() { f64::NEG_INFINITY } else { s };
        if best.as_ref().is_none_or(|(_, b)| s > *b) {
            best = Some((candidate, s));
        }
    }
    best.map(|(candidate, _)| candidate)
}
