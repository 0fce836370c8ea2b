//! Legal options for the current turn.
//!
//! Every move, switch target and item a policy may return passes through
//! here first. Item *eligibility* (e.g. revive only for a knocked-out
//! target) differs per policy and is decided by the policy itself.

use kazam_battle::{Combatant, Inventory, ItemKind, Move, Team};

use crate::error::DecisionError;

/// Moves of `combatant` with uses remaining, paired with their slot index.
///
/// An active combatant with nothing left to use is a fault: the engine is
/// expected to substitute a default action before asking for a decision.
pub fn usable_moves(combatant: &Combatant) -> Result<Vec<(usize, &Move)>, DecisionError> {
    let moves: Vec<_> = combatant.usable_moves().collect();
    if moves.is_empty() {
        return Err(DecisionError::NoUsableMove {
            combatant: combatant.name.clone(),
        });
    }
    Ok(moves)
}

/// The first protect-family move with uses remaining
pub fn protective_move(combatant: &Combatant) -> Option<(usize, &Move)> {
    combatant.usable_moves().find(|(_, m)| m.is_protective())
}

/// Teammates that could replace the active combatant: the team's bench,
/// never the active one and never a knocked-out one. May be empty.
pub fn switch_candidates(team: &Team) -> Vec<&Combatant> {
    team.bench().collect()
}

/// Items with at least one use left
pub fn usable_items(inventory: &Inventory) -> Vec<ItemKind> {
    inventory.available().map(|(item, _)| item).collect()
}
