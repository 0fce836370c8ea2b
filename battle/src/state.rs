//! Read access to the whole battle

use crate::types::{Combatant, Player, Team};

/// Read-only view of every team in a battle.
///
/// The battle engine owns the real state; decision making only needs to
/// find teams by side and look at who is on the field.
pub trait BattleView {
    /// All teams taking part, in side order
    fn teams(&self) -> &[Team];

    /// The team controlled by a side
    fn team(&self, player: Player) -> Option<&Team> {
        self.teams().iter().find(|t| t.player == player)
    }

    /// The first active combatant on any side other than `player`
    fn opposing_active(&self, player: Player) -> Option<&Combatant> {
        self.teams()
            .iter()
            .filter(|t| t.player != player)
            .find_map(|t| t.active())
    }
}

/// A plain battle state container
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// Current turn number (0 = not started)
    pub turn: u32,

    pub teams: Vec<Team>,
}

impl BattleState {
    /// Create a battle between the given teams
    pub fn new(teams: Vec<Team>) -> Self {
        Self { turn: 0, teams }
    }

    /// Get a team mutably by side
    pub fn team_mut(&mut self, player: Player) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.player == player)
    }

    /// Whether at most one side still has combatants able to battle
    pub fn is_over(&self) -> bool {
        self.teams.iter().filter(|t| !t.all_fainted()).count() <= 1
    }
}

impl BattleView for BattleState {
    fn teams(&self) -> &[Team] {
        &self.teams
    }
}

impl BattleView for [Team] {
    fn teams(&self) -> &[Team] {
        self
    }
}

impl BattleView for Vec<Team> {
    fn teams(&self) -> &[Team] {
        self
    }
}
