//! Survival-first policy.
//!
//! Evaluated once per turn, first matching branch wins:
//!
//! 1. **Item**: below half health, a potion if one is left; otherwise a
//!    revive, but only for a knocked-out combatant.
//! 2. **Switch**: below half health with a bad matchup, or whenever the
//!    matchup is a total immunity. Picks the sturdiest healthy teammate.
//! 3. **Shield**: below half health, sometimes raise a protect-family move.
//! 4. **Move**: the move that best hinders the opponent.

use kazam_battle::query;
use kazam_battle::{
    BattleView, Combatant, Inventory, ItemKind, Move, Player, StandardChart, TypeChart,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Strategy;
use crate::candidates;
use crate::decision::Decision;
use crate::error::DecisionError;
use crate::scoring;
use crate::turn::Turn;

const LOW_HEALTH: f64 = 0.5;
const TYPE_DISADVANTAGE: f64 = 0.5;
const SHIELD_CHANCE: f64 = 0.3;

// Move scoring
const STATUS_PREFERENCE: f64 = 0.7;
const STAT_DROP_BONUS: f64 = 0.3;
const MOVE_EFFECTIVENESS_WEIGHT: f64 = 0.2;
const MOVE_ACCURACY_WEIGHT: f64 = 0.1;

// Switch scoring. Relative weights, not a probability.
const SWITCH_EFFECTIVENESS_WEIGHT: f64 = 0.4;
const SWITCH_DEFENSE_WEIGHT: f64 = 0.5;
const SWITCH_HEALTH_WEIGHT: f64 = 0.3;

const JITTER_WEIGHT: f64 = 0.1;

/// Survival-first decision policy
#[derive(Debug, Clone)]
pub struct Cautious<C = StandardChart, R = StdRng> {
    player: Player,
    chart: C,
    rng: R,
}

impl Cautious {
    /// Policy for `player` using the standard chart and an entropy-seeded generator
    pub fn new(player: Player) -> Self {
        Self::with_parts(player, StandardChart, StdRng::from_entropy())
    }

    /// Policy whose random draws are reproducible from `seed`
    pub fn seeded(player: Player, seed: u64) -> Self {
        Self::with_parts(player, StandardChart, StdRng::seed_from_u64(seed))
    }
}

impl<C: TypeChart, R: Rng> Cautious<C, R> {
    pub fn with_parts(player: Player, chart: C, rng: R) -> Self {
        Self { player, chart, rng }
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    fn consider_item(&self, turn: &Turn<'_>, items: &[ItemKind]) -> Option<Decision> {
        let active = turn.active;
        if active.health_ratio() >= LOW_HEALTH {
            return None;
        }

        let item = if items.contains(&ItemKind::Potion) {
            ItemKind::Potion
        } else if active.fainted && items.contains(&ItemKind::Revive) {
            ItemKind::Revive
        } else {
            return None;
        };

        Some(Decision::UseItem {
            player: self.player,
            target: active.id,
            item,
        })
    }

    fn should_switch(&self, turn: &Turn<'_>) -> bool {
        let effectiveness = scoring::matchup(&self.chart, turn.active, turn.opponent);
        let health = turn.active.health_ratio();

        (effectiveness < TYPE_DISADVANTAGE && health < LOW_HEALTH) || query::is_immune(effectiveness)
    }

    fn pick_switch(&mut self, turn: &Turn<'_>) -> Option<Decision> {
        let candidates = candidates::switch_candidates(turn.team);
        let chart = &self.chart;
        let rng = &mut self.rng;

        let best = scoring::best_by(candidates, |candidate| {
            let score = switch_score(chart, candidate, turn.opponent, scoring::draw(rng));
            tracing::trace!(candidate = %candidate.name, score, "cautious switch candidate");
            score
        })?;

        Some(Decision::Switch {
            player: self.player,
            target: best.id,
        })
    }

    fn consider_shield(&mut self, turn: &Turn<'_>) -> Option<Decision> {
        if turn.active.health_ratio() >= LOW_HEALTH {
            return None;
        }
        if scoring::draw(&mut self.rng) >= SHIELD_CHANCE {
            return None;
        }
        let (slot, _) = candidates::protective_move(turn.active)?;

        Some(Decision::Attack {
            player: self.player,
            combatant: turn.active.id,
            slot,
        })
    }

    fn pick_move(&mut self, turn: &Turn<'_>) -> Result<Decision, DecisionError> {
        let moves = candidates::usable_moves(turn.active)?;
        let chart = &self.chart;
        let rng = &mut self.rng;

        let best = scoring::best_by(moves, |(_, mv)| {
            let score = move_score(chart, mv, turn.opponent, scoring::draw(rng));
            tracing::trace!(move_name = %mv.name, score, "cautious move");
            score
        });
        let (slot, _) = best.ok_or_else(|| DecisionError::NoUsableMove {
            combatant: turn.active.name.clone(),
        })?;

        Ok(Decision::Attack {
            player: self.player,
            combatant: turn.active.id,
            slot,
        })
    }
}

impl<C: TypeChart, R: Rng> Strategy for Cautious<C, R> {
    fn player(&self) -> Player {
        self.player
    }

    fn decide<B: BattleView + ?Sized>(
        &mut self,
        battle: &B,
        inventory: &Inventory,
    ) -> Result<Decision, DecisionError> {
        let turn = Turn::resolve(battle, self.player)?;
        let items = candidates::usable_items(inventory);

        if let Some(decision) = self.consider_item(&turn, &items) {
            tracing::debug!(player = %self.player, branch = "item", %decision, "cautious decision");
            return Ok(decision);
        }

        if self.should_switch(&turn) {
            if let Some(decision) = self.pick_switch(&turn) {
                tracing::debug!(player = %self.player, branch = "switch", %decision, "cautious decision");
                return Ok(decision);
            }
            tracing::debug!(player = %self.player, "switch wanted but no candidates");
        }

        if let Some(decision) = self.consider_shield(&turn) {
            tracing::debug!(player = %self.player, branch = "shield", %decision, "cautious decision");
            return Ok(decision);
        }

        let decision = self.pick_move(&turn)?;
        tracing::debug!(player = %self.player, branch = "move", %decision, "cautious decision");
        Ok(decision)
    }
}

/// Defensive value of a move against `opponent`. Status moves are
/// preferred, stat drops most of all; a missing chart entry counts as neutral.
pub fn move_score<C: TypeChart + ?Sized>(
    chart: &C,
    mv: &Move,
    opponent: &Combatant,
    jitter: f64,
) -> f64 {
    let mut score = 0.0;

    if let Some(condition) = mv.inflicts() {
        score += STATUS_PREFERENCE;
        if condition.reduces_stat() {
            score += STAT_DROP_BONUS;
        }
    }

    score += scoring::effectiveness(chart, mv.move_type, opponent.species_type)
        * MOVE_EFFECTIVENESS_WEIGHT;
    score += scoring::accuracy(mv) * MOVE_ACCURACY_WEIGHT;
    score += jitter * JITTER_WEIGHT;

    score
}

/// How safely `candidate` could come in against `opponent`
pub fn switch_score<C: TypeChart + ?Sized>(
    chart: &C,
    candidate: &Combatant,
    opponent: &Combatant,
    jitter: f64,
) -> f64 {
    let effectiveness = scoring::capped(scoring::matchup(chart, candidate, opponent));
    // Mean of the two defenses, normalized
    let bulk = scoring::defense_pair(candidate) / 2.0;

    effectiveness * SWITCH_EFFECTIVENESS_WEIGHT
        + bulk * SWITCH_DEFENSE_WEIGHT
        + candidate.health_ratio() * SWITCH_HEALTH_WEIGHT
        + jitter * JITTER_WEIGHT
}
