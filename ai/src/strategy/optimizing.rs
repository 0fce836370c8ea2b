//! Tempo-first policy.
//!
//! Evaluated once per turn, first matching branch wins:
//!
//! 1. **Revive** a knocked-out combatant whenever a revive is left.
//! 2. **Heal** with the strongest potion the missing health justifies,
//!    falling through tiers whose item is used up. The basic potion is only
//!    used on a successful draw.
//! 3. **Switch** on immunity or on a bad matchup at low health, otherwise
//!    with a probability that grows as matchup and health worsen.
//! 4. **Move**: the move with the best offensive score.

use kazam_battle::query;
use kazam_battle::{
    BattleView, Combatant, Inventory, ItemKind, Move, Player, StandardChart, TypeChart,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Strategy;
use crate::candidates;
use crate::decision::Decision;
use crate::error::{DecisionError, ScoreFault};
use crate::scoring;
use crate::turn::Turn;

const CRITICAL_HEALTH: f64 = 0.25;
const LOW_HEALTH: f64 = 0.5;
const TYPE_DISADVANTAGE: f64 = 0.5;

// Missing health needed before each potion tier is worth spending
const MEGA_POTION_MISSING: u32 = 100;
const HYPER_POTION_MISSING: u32 = 50;
const SUPER_POTION_MISSING: u32 = 25;
const POTION_CHANCE: f64 = 0.8;

const BASE_SWITCH_CHANCE: f64 = 0.35;
const DISADVANTAGE_SWITCH_WEIGHT: f64 = 0.3;
const LOW_HEALTH_SWITCH_WEIGHT: f64 = 0.2;
const MAX_SWITCH_CHANCE: f64 = 0.8;

// Move scoring
const MOVE_EFFECTIVENESS_WEIGHT: f64 = 0.3;
const MOVE_POWER_WEIGHT: f64 = 0.25;
const MOVE_STATUS_WEIGHT: f64 = 0.25;
const MOVE_ACCURACY_WEIGHT: f64 = 0.15;
const MOVE_PP_WEIGHT: f64 = 0.05;

// Switch scoring
const SWITCH_EFFECTIVENESS_WEIGHT: f64 = 0.4;
const SWITCH_DEFENSE_WEIGHT: f64 = 0.3;
const SWITCH_HEALTH_WEIGHT: f64 = 0.2;
const SWITCH_JITTER_WEIGHT: f64 = 0.1;

/// Tempo-first decision policy
#[derive(Debug, Clone)]
pub struct Optimizing<C = StandardChart, R = StdRng> {
    player: Player,
    chart: C,
    rng: R,
}

impl Optimizing {
    /// Policy for `player` using the standard chart and an entropy-seeded generator
    pub fn new(player: Player) -> Self {
        Self::with_parts(player, StandardChart, StdRng::from_entropy())
    }

    /// Policy whose random draws are reproducible from `seed`
    pub fn seeded(player: Player, seed: u64) -> Self {
        Self::with_parts(player, StandardChart, StdRng::seed_from_u64(seed))
    }
}

impl<C: TypeChart, R: Rng> Optimizing<C, R> {
    pub fn with_parts(player: Player, chart: C, rng: R) -> Self {
        Self { player, chart, rng }
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    fn use_item(&self, turn: &Turn<'_>, item: ItemKind) -> Decision {
        Decision::UseItem {
            player: self.player,
            target: turn.active.id,
            item,
        }
    }

    fn consider_revive(&self, turn: &Turn<'_>, items: &[ItemKind]) -> Option<Decision> {
        (turn.active.fainted && items.contains(&ItemKind::Revive))
            .then(|| self.use_item(turn, ItemKind::Revive))
    }

    fn consider_heal(&mut self, turn: &Turn<'_>, items: &[ItemKind]) -> Option<Decision> {
        let ratio = turn.active.health_ratio();
        let missing = turn.active.missing_health();
        let has = |item| items.contains(&item);

        if ratio < CRITICAL_HEALTH && missing > MEGA_POTION_MISSING && has(ItemKind::MegaPotion) {
            return Some(self.use_item(turn, ItemKind::MegaPotion));
        }
        if ratio >= LOW_HEALTH {
            return None;
        }
        if missing > HYPER_POTION_MISSING && has(ItemKind::HyperPotion) {
            return Some(self.use_item(turn, ItemKind::HyperPotion));
        }
        if missing > SUPER_POTION_MISSING && has(ItemKind::SuperPotion) {
            return Some(self.use_item(turn, ItemKind::SuperPotion));
        }

        // The draw is spent even when no potion is left
        let roll = scoring::draw(&mut self.rng);
        (roll < POTION_CHANCE && has(ItemKind::Potion)).then(|| self.use_item(turn, ItemKind::Potion))
    }

    fn should_switch(&mut self, turn: &Turn<'_>) -> bool {
        let effectiveness = scoring::matchup(&self.chart, turn.active, turn.opponent);
        let health = turn.active.health_ratio();

        if query::is_immune(effectiveness) {
            return true;
        }
        if effectiveness < TYPE_DISADVANTAGE && health < LOW_HEALTH {
            return true;
        }

        let chance = switch_chance(effectiveness, health);
        let roll = scoring::draw(&mut self.rng);
        tracing::trace!(player = %self.player, chance, roll, "optimizing switch roll");
        roll < chance
    }

    fn pick_switch(&mut self, turn: &Turn<'_>) -> Option<Decision> {
        let candidates = candidates::switch_candidates(turn.team);
        let chart = &self.chart;
        let rng = &mut self.rng;

        let best = scoring::best_by(candidates, |candidate| {
            let score = switch_score(chart, candidate, turn.opponent, scoring::draw(rng));
            tracing::trace!(candidate = %candidate.name, score, "optimizing switch candidate");
            score
        })?;

        Some(Decision::Switch {
            player: self.player,
            target: best.id,
        })
    }

    fn pick_move(&mut self, turn: &Turn<'_>) -> Result<Decision, DecisionError> {
        let moves = candidates::usable_moves(turn.active)?;
        let chart = &self.chart;
        let rng = &mut self.rng;

        let best = scoring::best_by(moves, |(_, mv)| {
            let score = match move_score(chart, mv, turn.opponent) {
                Ok(score) => score,
                Err(fault) => {
                    let score = scoring::draw(rng);
                    tracing::warn!(move_name = %mv.name, error = %fault, score, "move scoring failed, using random score");
                    score
                }
            };
            tracing::trace!(move_name = %mv.name, score, "optimizing move");
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

impl<C: TypeChart, R: Rng> Strategy for Optimizing<C, R> {
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

        if let Some(decision) = self.consider_revive(&turn, &items) {
            tracing::debug!(player = %self.player, branch = "revive", %decision, "optimizing decision");
            return Ok(decision);
        }

        if let Some(decision) = self.consider_heal(&turn, &items) {
            tracing::debug!(player = %self.player, branch = "heal", %decision, "optimizing decision");
            return Ok(decision);
        }

        if self.should_switch(&turn) {
            if let Some(decision) = self.pick_switch(&turn) {
                tracing::debug!(player = %self.player, branch = "switch", %decision, "optimizing decision");
                return Ok(decision);
            }
            tracing::debug!(player = %self.player, "switch wanted but no candidates");
        }

        let decision = self.pick_move(&turn)?;
        tracing::debug!(player = %self.player, branch = "move", %decision, "optimizing decision");
        Ok(decision)
    }
}

/// Probability of a voluntary switch for the given matchup and health ratio
pub fn switch_chance(effectiveness: f64, health: f64) -> f64 {
    let mut chance = BASE_SWITCH_CHANCE;
    if effectiveness < 1.0 {
        chance += (1.0 - effectiveness) * DISADVANTAGE_SWITCH_WEIGHT;
    }
    if health < LOW_HEALTH {
        chance += (1.0 - health) * LOW_HEALTH_SWITCH_WEIGHT;
    }
    chance.min(MAX_SWITCH_CHANCE)
}

/// Offensive value of a move against `opponent`.
///
/// Unlike the cautious score this is strict: a missing chart entry or a move
/// without a maximum use count is reported, and the caller decides what to
/// substitute.
pub fn move_score<C: TypeChart + ?Sized>(
    chart: &C,
    mv: &Move,
    opponent: &Combatant,
) -> Result<f64, ScoreFault> {
    let effectiveness = query::move_matchup(chart, mv, opponent)?;
    let pp = mv
        .pp_ratio()
        .ok_or_else(|| ScoreFault::NoMaxPp(mv.name.clone()))?;
    let status = mv.inflicts().map_or(0.0, scoring::status_value);

    Ok(effectiveness * MOVE_EFFECTIVENESS_WEIGHT
        + scoring::power(mv) * MOVE_POWER_WEIGHT
        + status * MOVE_STATUS_WEIGHT
        + scoring::accuracy(mv) * MOVE_ACCURACY_WEIGHT
        + pp * MOVE_PP_WEIGHT)
}

/// How well `candidate` would fare coming in against `opponent`
pub fn switch_score<C: TypeChart + ?Sized>(
    chart: &C,
    candidate: &Combatant,
    opponent: &Combatant,
    jitter: f64,
) -> f64 {
    scoring::matchup(chart, candidate, opponent) * SWITCH_EFFECTIVENESS_WEIGHT
        + scoring::defense_pair(candidate) * SWITCH_DEFENSE_WEIGHT
        + candidate.health_ratio() * SWITCH_HEALTH_WEIGHT
        + jitter * SWITCH_JITTER_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use kazam_battle::{
        BattleState, ChartError, CombatantId, Condition, CustomChart, Stats, Team, Type,
    };
    use rand::rngs::mock::StepRng;

    /// Every draw is 0.0
    fn low() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every draw is just below 1.0
    fn high() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn tackle() -> Move {
        Move::damage(1, "Tackle", Type::Normal, 40, 100, 35)
    }

    fn thunderbolt() -> Move {
        Move::damage(2, "Thunderbolt", Type::Electric, 90, 100, 15)
    }

    fn mon(id: u32, name: &str, species_type: Type) -> Combatant {
        Combatant::new(CombatantId(id), name, species_type, 100, Stats::new(50, 50, 50, 50))
            .with_moves(vec![tackle()])
    }

    fn battle(mine: Vec<Combatant>, opponent: Combatant) -> BattleState {
        let mut team = Team::new(Player::P2, "Ai");
        for c in mine {
            team.push(c);
        }
        team.set_active(CombatantId(1));

        let foe = Team::new(Player::P1, "Foe")
            .with_member(opponent)
            .with_active(CombatantId(1));
        BattleState::new(vec![foe, team])
    }

    fn every_item() -> Inventory {
        ItemKind::ALL
            .iter()
            .fold(Inventory::new(), |inv, item| inv.with(*item, 1))
    }

    fn decide_item(hp_max: u32, hp: u32, inv: &Inventory, rng: StepRng) -> Option<ItemKind> {
        let active = Combatant::new(CombatantId(1), "Snorlax", Type::Normal, hp_max, Stats::default())
            .with_moves(vec![tackle()])
            .with_hp(hp);
        let state = battle(vec![active], mon(1, "Foe", Type::Fire));

        let mut ai = Optimizing::with_parts(Player::P2, StandardChart, rng);
        ai.decide(&state, inv).unwrap().item()
    }

    #[test]
    fn test_revive_ignores_health_gate() {
        let inv = every_item();
        assert_eq!(decide_item(100, 0, &inv, high()), Some(ItemKind::Revive));

        let only_revive = Inventory::new().with(ItemKind::Revive, 1);
        assert_eq!(decide_item(100, 80, &only_revive, high()), None);
    }

    #[test]
    fn test_heal_tiers() {
        let inv = every_item();
        assert_eq!(decide_item(150, 30, &inv, low()), Some(ItemKind::MegaPotion));
        assert_eq!(decide_item(100, 30, &inv, low()), Some(ItemKind::HyperPotion));
        assert_eq!(decide_item(50, 20, &inv, low()), Some(ItemKind::SuperPotion));
        assert_eq!(decide_item(18, 8, &inv, low()), Some(ItemKind::Potion));
    }

    #[test]
    fn test_mega_potion_needs_critical_health() {
        // 120 missing but only below half health, not critical
        let inv = every_item();
        assert_eq!(decide_item(300, 120, &inv, low()), Some(ItemKind::HyperPotion));
    }

    #[test]
    fn test_heal_thresholds_are_strict() {
        let inv = every_item();

        // Critical health but exactly 100 missing: not enough for a mega potion
        assert_eq!(decide_item(125, 25, &inv, low()), Some(ItemKind::HyperPotion));
        // Exactly 50 missing skips the hyper potion
        assert_eq!(decide_item(90, 40, &inv, low()), Some(ItemKind::SuperPotion));
        // Exactly 25 missing skips the super potion and goes to the draw
        assert_eq!(decide_item(45, 20, &inv, low()), Some(ItemKind::Potion));
        assert_eq!(decide_item(45, 20, &inv, high()), None);
    }

    #[test]
    fn test_heal_tier_falls_through() {
        let inv = Inventory::new().with(ItemKind::SuperPotion, 1).with(ItemKind::Potion, 1);
        assert_eq!(decide_item(150, 30, &inv, low()), Some(ItemKind::SuperPotion));

        let inv = Inventory::new().with(ItemKind::Potion, 1);
        assert_eq!(decide_item(150, 30, &inv, low()), Some(ItemKind::Potion));
    }

    #[test]
    fn test_basic_potion_skipped_on_high_draw() {
        let inv = Inventory::new().with(ItemKind::Potion, 3);
        assert_eq!(decide_item(100, 45, &inv, high()), None);
        assert_eq!(decide_item(100, 45, &inv, low()), Some(ItemKind::Potion));
    }

    #[test]
    fn test_no_heal_when_healthy() {
        let inv = every_item();
        assert_eq!(decide_item(100, 50, &inv, high()), None);
    }

    #[test]
    fn test_switch_on_immunity() {
        let state = battle(
            vec![mon(1, "Eevee", Type::Normal), mon(2, "Pikachu", Type::Electric)],
            mon(1, "Gengar", Type::Ghost),
        );

        let mut ai = Optimizing::with_parts(Player::P2, StandardChart, high());
        assert_eq!(
            ai.decide(&state, &Inventory::new()).unwrap(),
            Decision::Switch {
                player: Player::P2,
                target: CombatantId(2)
            }
        );
    }

    #[test]
    fn test_voluntary_switch_follows_draw() {
        let state = battle(
            vec![mon(1, "Eevee", Type::Normal), mon(2, "Pikachu", Type::Electric)],
            mon(1, "Foe", Type::Fire),
        );

        let mut ai = Optimizing::with_parts(Player::P2, StandardChart, low());
        assert!(ai.decide(&state, &Inventory::new()).unwrap().is_switch());

        let mut ai = Optimizing::with_parts(Player::P2, StandardChart, high());
        assert!(ai.decide(&state, &Inventory::new()).unwrap().is_attack());
    }

    #[test]
    fn test_switch_prefers_matchup() {
        let state = battle(
            vec![
                mon(1, "Charmander", Type::Fire).with_hp(30),
                mon(2, "Rattata", Type::Normal),
                mon(3, "Pikachu", Type::Electric),
            ],
            mon(1, "Gyarados", Type::Water),
        );

        // 0.5 effectiveness at 30% health: switch chance 0.64
        let mut ai = Optimizing::with_parts(Player::P2, StandardChart, low());
        assert_eq!(
            ai.decide(&state, &Inventory::new()).unwrap(),
            Decision::Switch {
                player: Player::P2,
                target: CombatantId(3)
            }
        );
    }

    #[test]
    fn test_switch_chance() {
        assert!((switch_chance(1.0, 1.0) - 0.35).abs() < 1e-9);
        assert!((switch_chance(2.0, 0.5) - 0.35).abs() < 1e-9);
        assert!((switch_chance(0.5, 1.0) - 0.5).abs() < 1e-9);
        assert!((switch_chance(0.5, 0.0) - 0.7).abs() < 1e-9);
        assert_eq!(switch_chance(0.0, 0.0), MAX_SWITCH_CHANCE);
    }

    #[test]
    fn test_picks_strongest_move() {
        let active = mon(1, "Pikachu", Type::Electric).with_moves(vec![tackle(), thunderbolt()]);
        let state = battle(vec![active], mon(1, "Squirtle", Type::Water));

        let mut ai = Optimizing::with_parts(Player::P2, StandardChart, high());
        assert_eq!(
            ai.decide(&state, &Inventory::new()).unwrap(),
            Decision::Attack {
                player: Player::P2,
                combatant: CombatantId(1),
                slot: 1
            }
        );
    }

    #[test]
    fn test_move_score_weights() {
        let opponent = mon(1, "Squirtle", Type::Water);

        // 2.0 * 0.3 + 0.6 * 0.25 + 1.0 * 0.15 + 1.0 * 0.05
        let score = move_score(&StandardChart, &thunderbolt(), &opponent).unwrap();
        assert!((score - 0.95).abs() < 1e-9);

        // 2.0 * 0.3 + 0.8 * 0.25 + 0.9 * 0.15 + 1.0 * 0.05
        let wave = Move::status(3, "Thunder Wave", Type::Electric, Condition::Paralysis, 90, 20);
        let score = move_score(&StandardChart, &wave, &opponent).unwrap();
        assert!((score - 0.985).abs() < 1e-9);
    }

    #[test]
    fn test_move_score_counts_remaining_uses() {
        let opponent = mon(1, "Foe", Type::Normal);
        let fresh = move_score(&StandardChart, &tackle(), &opponent).unwrap();
        let worn = move_score(&StandardChart, &tackle().with_pp(7), &opponent).unwrap();
        assert!((fresh - worn - 0.8 * MOVE_PP_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_move_score_faults() {
        let opponent = mon(1, "Foe", Type::Rock);

        let err = move_score(&CustomChart::new(), &tackle(), &opponent).unwrap_err();
        assert_eq!(
            err,
            ScoreFault::Chart(ChartError::MissingEntry {
                attacking: Type::Normal,
                defending: Type::Rock
            })
        );

        let broken = Move::damage(9, "Broken", Type::Normal, 40, 100, 0);
        assert_eq!(
            move_score(&StandardChart, &broken, &opponent).unwrap_err(),
            ScoreFault::NoMaxPp("Broken".to_string())
        );
    }

    #[test]
    fn test_scoring_fault_degrades_to_random() {
        let active = mon(1, "Pikachu", Type::Electric).with_moves(vec![tackle(), thunderbolt()]);
        let state = battle(vec![active], mon(1, "Squirtle", Type::Water));

        // Every move faults and draws the same value, so the first one wins
        let mut ai = Optimizing::with_parts(Player::P2, CustomChart::new(), high());
        assert_eq!(
            ai.decide(&state, &Inventory::new()).unwrap(),
            Decision::Attack {
                player: Player::P2,
                combatant: CombatantId(1),
                slot: 0
            }
        );
    }

    #[test]
    fn test_switch_score_weights() {
        let opponent = mon(1, "Foe", Type::Water);
        let candidate = Combatant::new(CombatantId(2), "Pikachu", Type::Electric, 100, Stats::new(50, 60, 40, 90));

        // 2.0 * 0.4 + 0.5 * 0.3 + 1.0 * 0.2 + 0.5 * 0.1
        let score = switch_score(&StandardChart, &candidate, &opponent, 0.5);
        assert!((score - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_faults() {
        let state = battle(vec![mon(1, "Eevee", Type::Normal)], mon(1, "Foe", Type::Fire));
        let mut ai = Optimizing::with_parts(Player::P4, StandardChart, low());
        assert_eq!(
            ai.decide(&state, &Inventory::new()).unwrap_err(),
            DecisionError::TeamNotFound(Player::P4)
        );

        let lonely = BattleState::new(vec![
            Team::new(Player::P2, "Ai")
                .with_member(mon(1, "Eevee", Type::Normal))
                .with_active(CombatantId(1)),
        ]);
        let mut ai = Optimizing::with_parts(Player::P2, StandardChart, low());
        assert_eq!(
            ai.decide(&lonely, &Inventory::new()).unwrap_err(),
            DecisionError::NoActiveOpponent(Player::P2)
        );
    }
}
