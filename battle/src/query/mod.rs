//! Query helpers for battle decision making
//!
//! This module provides type matchup lookups over any [`TypeChart`],
//! shared by every decision profile.
//!
//! [`TypeChart`]: crate::types::TypeChart

mod matchup;

pub use matchup::{
    // Chart-level queries
    is_immune,
    lookup,
    // Combatant-level queries
    matchup,
    move_matchup,
    NEUTRAL,
};
