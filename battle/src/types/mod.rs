//! Domain types read by decision making

mod combatant;
mod condition;
mod ids;
mod inventory;
mod moves;
mod pokemon_type;
mod stats;
mod team;

pub use combatant::Combatant;
pub use condition::Condition;
pub use ids::{CombatantId, Player};
pub use inventory::{Inventory, ItemKind};
pub use moves::{Move, MoveCategory};
pub use pokemon_type::{CustomChart, StandardChart, Type, TypeChart, TYPE_CHART};
pub use stats::{Stat, Stats};
pub use team::Team;
