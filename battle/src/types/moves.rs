//! Moves known by a combatant

use super::condition::Condition;
use super::pokemon_type::Type;

/// What a move does when it lands
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveCategory {
    /// Plain damage
    Damage,
    /// Attempts to inflict a condition on the target
    Status(Condition),
}

/// A move slot: the move plus its remaining uses
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub id: u32,
    pub name: String,
    pub category: MoveCategory,
    pub move_type: Type,
    pub power: u32,

    /// Hit chance, 0-100
    pub accuracy: u8,

    pub pp: u32,
    pub max_pp: u32,
}

impl Move {
    /// Create a damaging move with full uses
    pub fn damage(
        id: u32,
        name: impl Into<String>,
        move_type: Type,
        power: u32,
        accuracy: u8,
        max_pp: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: MoveCategory::Damage,
            move_type,
            power,
            accuracy: accuracy.min(100),
            pp: max_pp,
            max_pp,
        }
    }

    /// Create a status-inflicting move with full uses
    pub fn status(
        id: u32,
        name: impl Into<String>,
        move_type: Type,
        condition: Condition,
        accuracy: u8,
        max_pp: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: MoveCategory::Status(condition),
            move_type,
            power: 0,
            accuracy: accuracy.min(100),
            pp: max_pp,
            max_pp,
        }
    }

    /// Set the remaining uses (clamped to max)
    pub fn with_pp(mut self, pp: u32) -> Self {
        self.pp = pp.min(self.max_pp);
        self
    }

    /// Whether the move has uses remaining
    pub fn is_usable(&self) -> bool {
        self.pp > 0
    }

    /// The condition this move tries to inflict, if it is a status move
    pub fn inflicts(&self) -> Option<&Condition> {
        match &self.category {
            MoveCategory::Status(condition) => Some(condition),
            MoveCategory::Damage => None,
        }
    }

    pub fn is_status(&self) -> bool {
        self.inflicts().is_some()
    }

    /// Whether this is a protect-family move that shields the user for a turn
    pub fn is_protective(&self) -> bool {
        let normalized = self.name.to_lowercase().replace([' ', '-', '\''], "");
        matches!(
            normalized.as_str(),
            "protect"
                | "detect"
                | "kingsshield"
                | "spikyshield"
                | "banefulbunker"
                | "obstruct"
                | "silktrap"
                | "burningbulwark"
        )
    }

    /// Remaining uses as a fraction of the maximum, or None if the move has no uses at all
    pub fn pp_ratio(&self) -> Option<f64> {
        if self.max_pp == 0 {
            return None;
        }
        Some(f64::from(self.pp) / f64::from(self.max_pp))
    }
}
