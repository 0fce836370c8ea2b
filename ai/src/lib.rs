//! Turn decision policies for computer-controlled sides.
//!
//! Given the whole battle state, a policy returns exactly one action for its
//! side each turn: attack, switch or use an item. Two policies are provided:
//!
//! - [`Cautious`] - survival first: heals early, switches out of lost
//!   matchups, raises shields and prefers status moves
//! - [`Optimizing`] - tempo first: revives immediately, tiers potions by
//!   missing health, switches probabilistically and ranks attacks by damage
//!
//! # Overview
//!
//! ```text
//! battle engine ──(BattleView, Inventory)──> Strategy::decide ──> Decision
//!                                                  │
//!                    candidates (legal options) ───┤
//!                    scoring (shared primitives) ──┘
//! ```
//!
//! Inconsistent battle state is reported as a [`DecisionError`]. A missing
//! type chart entry is never an error: it is scored as neutral (cautious) or
//! replaced by a random score for that move (optimizing), and logged with
//! `tracing`.
//!
//! # Example Usage
//!
//! ```
//! use kazam_ai::{Profile, Strategy};
//! use kazam_battle::{BattleState, Combatant, CombatantId, Inventory, Move, Player, Stats, Team, Type};
//!
//! let pikachu = Combatant::new(CombatantId(1), "Pikachu", Type::Electric, 100, Stats::default())
//!     .with_moves(vec![Move::damage(1, "Thunderbolt", Type::Electric, 90, 100, 15)]);
//! let ai_team = Team::new(Player::P2, "Cpu").with_member(pikachu).with_active(CombatantId(1));
//! let foe = Team::new(Player::P1, "Red")
//!     .with_member(Combatant::new(CombatantId(1), "Squirtle", Type::Water, 100, Stats::default()))
//!     .with_active(CombatantId(1));
//! let battle = BattleState::new(vec![foe, ai_team]);
//!
//! let mut ai = "expert".parse::<Profile>().unwrap().build(Player::P2, Some(7));
//! let decision = ai.decide(&battle, &Inventory::new()).unwrap();
//! assert!(decision.is_attack());
//! ```

pub mod candidates;
mod decision;
mod error;
pub mod scoring;
pub mod strategy;
mod turn;

pub use decision::Decision;
pub use error::{DecisionError, ScoreFault, UnknownProfile};
pub use strategy::{Ai, Cautious, Optimizing, Profile, Strategy};
pub use turn::Turn;
