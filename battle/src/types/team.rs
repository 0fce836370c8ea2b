//! Team (one side's roster) state

use super::combatant::Combatant;
use super::ids::{CombatantId, Player};

/// One side's roster and its active combatant
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    /// Side controlling this team
    pub player: Player,

    /// Trainer's display name
    pub trainer: String,

    /// Combatants in party order
    pub members: Vec<Combatant>,

    /// Currently active combatant
    pub active_id: Option<CombatantId>,
}

impl Team {
    /// Create an empty team
    pub fn new(player: Player, trainer: impl Into<String>) -> Self {
        Self {
            player,
            trainer: trainer.into(),
            members: Vec::new(),
            active_id: None,
        }
    }

    /// Add a member to the end of the party
    pub fn push(&mut self, combatant: Combatant) {
        self.members.push(combatant);
    }

    /// Builder form of [`Team::push`]
    pub fn with_member(mut self, combatant: Combatant) -> Self {
        self.push(combatant);
        self
    }

    /// Get a member by id
    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.members.iter().find(|c| c.id == id)
    }

    /// Get a member by id mutably
    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.members.iter_mut().find(|c| c.id == id)
    }

    /// The active combatant, resolved through [`Team::active_id`]
    pub fn active(&self) -> Option<&Combatant> {
        self.active_id.and_then(|id| self.get(id))
    }

    /// The active combatant mutably
    pub fn active_mut(&mut self) -> Option<&mut Combatant> {
        let id = self.active_id?;
        self.get_mut(id)
    }

    /// Make a member active, switching the previous one out.
    /// Returns false (and changes nothing) if no member has that id.
    pub fn set_active(&mut self, id: CombatantId) -> bool {
        if self.get(id).is_none() {
            return false;
        }

        if let Some(previous) = self.active_mut() {
            previous.on_switch_out();
        }

        self.active_id = Some(id);
        if let Some(next) = self.get_mut(id) {
            next.on_switch_in();
        }
        true
    }

    /// Builder form of [`Team::set_active`]
    pub fn with_active(mut self, id: CombatantId) -> Self {
        self.set_active(id);
        self
    }

    /// Iterate over bench members (not active, not fainted)
    pub fn bench(&self) -> impl Iterator<Item = &Combatant> {
        self.members
            .iter()
            .filter(move |c| Some(c.id) != self.active_id && c.can_switch_to())
    }

    /// Count non-fainted members
    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|c| c.is_alive()).count()
    }

    /// Check if all members have fainted
    pub fn all_fainted(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(|c| c.fainted)
    }

    /// Find a member by name
    pub fn find(&self, name: &str) -> Option<&Combatant> {
        self.members.iter().find(|c| c.name == name)
    }
}
