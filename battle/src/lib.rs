//! Battle domain types for turn-based monster battles.
//!
//! This crate provides the shared type system read by the decision-making
//! layer (`kazam-ai`) and written by whatever engine resolves turns.
//!
//! # Overview
//!
//! ```text
//! battle engine (owns and mutates state)
//!        │
//!        ▼
//! kazam-battle (domain types + read access) ← THIS CRATE
//!        │
//!        └─> kazam-ai (turn decisions)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Elemental types with the effectiveness chart
//! - [`TypeChart`] - Lookup capability ([`StandardChart`], [`CustomChart`])
//! - [`Condition`] - Status conditions, classified by what they do
//! - [`Move`] - A move slot with remaining uses
//! - [`Combatant`] - One monster's battle state
//! - [`Team`] - One side's roster and active combatant
//! - [`Inventory`] - Item counts for one side
//!
//! ## Battle Access
//! - [`BattleView`] - Read accessor over every team
//! - [`BattleState`] - Plain container implementing it
//!
//! # Example Usage
//!
//! ```
//! use kazam_battle::{BattleState, BattleView, Combatant, CombatantId, Player, Stats, Team, Type};
//!
//! let red = Team::new(Player::P1, "Red")
//!     .with_member(Combatant::new(CombatantId(1), "Pikachu", Type::Electric, 100, Stats::default()))
//!     .with_active(CombatantId(1));
//! let blue = Team::new(Player::P2, "Blue")
//!     .with_member(Combatant::new(CombatantId(1), "Onix", Type::Rock, 120, Stats::default()))
//!     .with_active(CombatantId(1));
//!
//! let battle = BattleState::new(vec![red, blue]);
//! let opponent = battle.opposing_active(Player::P1).unwrap();
//! assert_eq!(opponent.name, "Onix");
//! ```

mod error;
pub mod query;
mod state;
pub mod types;

pub use error::ChartError;
pub use state::{BattleState, BattleView};

// Re-export main types at crate root for convenience
pub use types::{
    Combatant, CombatantId, Condition, CustomChart, Inventory, ItemKind, Move, MoveCategory,
    Player, StandardChart, Stat, Stats, Team, Type, TypeChart, TYPE_CHART,
};
