//! Per-turn lookup of the combatants a decision is about

use kazam_battle::{BattleView, Combatant, Player, Team};

use crate::error::DecisionError;

/// Everything a policy reads from the battle for one decision
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub player: Player,
    pub team: &'a Team,
    pub active: &'a Combatant,
    pub opponent: &'a Combatant,
}

impl<'a> Turn<'a> {
    /// Resolve `player`'s team, its active combatant and the opposing
    /// active combatant. Any of them missing is a fault in the battle state.
    pub fn resolve<B: BattleView + ?Sized>(
        battle: &'a B,
        player: Player,
    ) -> Result<Self, DecisionError> {
        let team = battle
            .team(player)
            .ok_or(DecisionError::TeamNotFound(player))?;
        let active = team
            .active()
            .ok_or(DecisionError::ActiveNotFound(player))?;
        let opponent = battle
            .opposing_active(player)
            .ok_or(DecisionError::NoActiveOpponent(player))?;

        Ok(Self {
            player,
            team,
            active,
            opponent,
        })
    }
}
