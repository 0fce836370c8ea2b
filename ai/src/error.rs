use kazam_battle::{ChartError, Player};
use thiserror::Error;

/// Inconsistent battle state reported to the caller.
///
/// Each variant means the engine handed over a state no decision can be
/// made from. The caller decides whether to abort the turn or substitute
/// a default action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("No team found for {0}")]
    TeamNotFound(Player),

    #[error("No active combatant on {0}'s team")]
    ActiveNotFound(Player),

    #[error("No active opponent found for {0}")]
    NoActiveOpponent(Player),

    #[error("No usable move available for {combatant}")]
    NoUsableMove { combatant: String },
}

/// A single move could not be scored. Policies recover from this by
/// substituting a random score for that move.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreFault {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Move {0} has no maximum uses")]
    NoMaxPp(String),
}

/// A profile name that matches no known policy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown profile: {0}")]
pub struct UnknownProfile(pub String);
