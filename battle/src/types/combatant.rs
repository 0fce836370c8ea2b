//! Combatant state

use std::collections::HashSet;

use super::condition::Condition;
use super::ids::CombatantId;
use super::moves::Move;
use super::pokemon_type::Type;
use super::stats::Stats;

/// A single monster in a team.
///
/// The resolution engine owns all mutation during combat. Decision making
/// only reads it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,

    /// Display name (nickname or species)
    pub name: String,

    pub species_type: Type,

    // === HP ===
    pub hp_current: u32,
    pub hp_max: u32,

    pub stats: Stats,

    /// Knocked out
    pub fainted: bool,

    /// Whether this combatant is currently on the field
    pub active: bool,

    /// Known moves in slot order
    pub moves: Vec<Move>,

    /// Conditions currently affecting this combatant
    pub conditions: HashSet<Condition>,
}

impl Combatant {
    /// Create a combatant at full health with no moves
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        species_type: Type,
        hp_max: u32,
        stats: Stats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species_type,
            hp_current: hp_max,
            hp_max,
            stats,
            fainted: false,
            active: false,
            moves: Vec::new(),
            conditions: HashSet::new(),
        }
    }

    /// Set current HP (clamped to max). Zero HP marks the combatant fainted.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp_current = hp.min(self.hp_max);
        self.fainted = self.hp_current == 0;
        self
    }

    /// Replace the move list
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    /// Current HP over max HP, 0.0 when max HP is zero
    pub fn health_ratio(&self) -> f64 {
        if self.hp_max == 0 {
            return 0.0;
        }
        f64::from(self.hp_current) / f64::from(self.hp_max)
    }

    /// HP needed to be back at full health
    pub fn missing_health(&self) -> u32 {
        self.hp_max.saturating_sub(self.hp_current)
    }

    /// Check if combatant is still able to battle
    pub fn is_alive(&self) -> bool {
        !self.fainted
    }

    /// Check if combatant can be switched to
    pub fn can_switch_to(&self) -> bool {
        self.is_alive() && !self.active
    }

    /// Mark as knocked out
    pub fn faint(&mut self) {
        self.hp_current = 0;
        self.fainted = true;
    }

    /// Moves with uses remaining, paired with their slot index
    pub fn usable_moves(&self) -> impl Iterator<Item = (usize, &Move)> {
        self.moves.iter().enumerate().filter(|(_, m)| m.is_usable())
    }

    pub fn has_condition(&self, condition: &Condition) -> bool {
        self.conditions.contains(condition)
    }

    pub fn add_condition(&mut self, condition: Condition) {
        self.conditions.insert(condition);
    }

    pub fn remove_condition(&mut self, condition: &Condition) -> bool {
        self.conditions.remove(condition)
    }

    /// Called when this combatant leaves the field
    pub fn on_switch_out(&mut self) {
        self.active = false;
        self.conditions.retain(|c| !matches!(c, Condition::Confusion | Condition::StatDrop(_)));
    }

    /// Called when this combatant enters the field
    pub fn on_switch_in(&mut self) {
        self.active = true;
    }
}
