use thiserror::Error;

use crate::types::Type;

/// Errors raised by type chart lookups and catalog parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("No effectiveness entry for {attacking} against {defending}")]
    MissingEntry { attacking: Type, defending: Type },

    #[error("Negative multiplier {multiplier} for {attacking} against {defending}")]
    NegativeMultiplier {
        attacking: Type,
        defending: Type,
        multiplier: f32,
    },

    #[error("Unknown type: {0}")]
    UnknownType(String),
}
