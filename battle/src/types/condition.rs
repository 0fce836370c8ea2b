//! Status conditions as seen by decision making
//!
//! The full catalog (durations, immunity rules, how an effect is applied)
//! belongs to the resolution engine. This module only classifies a
//! condition so that callers can reason about what it does.

use super::stats::Stat;

/// A status condition a move can inflict
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
    Confusion,

    /// Lowers one of the target's stats
    StatDrop(Stat),

    /// Catalog entry this crate does not classify
    Other(String),
}

impl Condition {
    /// Parse a catalog name.
    ///
    /// Accepts short protocol codes ("slp", "par"), plain names ("Sleep",
    /// "CONFUSE") and stat drops written either as "<stat> down" or
    /// "reduce <stat>" with any mix of case, spaces, dashes and underscores.
    pub fn from_name(s: &str) -> Self {
        let normalized = s.to_lowercase().replace([' ', '-', '_', '\''], "");

        match normalized.as_str() {
            "brn" | "burn" | "burned" => return Condition::Burn,
            "frz" | "freeze" | "frozen" => return Condition::Freeze,
            "par" | "paralysis" | "paralyze" | "paralyzed" => return Condition::Paralysis,
            "psn" | "poison" | "poisoned" => return Condition::Poison,
            "tox" | "toxic" | "badpoison" => return Condition::BadPoison,
            "slp" | "sleep" | "asleep" => return Condition::Sleep,
            "confusion" | "confuse" | "confused" => return Condition::Confusion,
            _ => {}
        }

        let dropped = normalized
            .strip_suffix("down")
            .or_else(|| normalized.strip_prefix("reduce"))
            .or_else(|| normalized.strip_prefix("lower"))
            .and_then(Stat::parse);

        match dropped {
            Some(stat) => Condition::StatDrop(stat),
            None => Condition::Other(s.to_string()),
        }
    }

    /// The stat this condition lowers, if any
    pub fn stat_reduced(&self) -> Option<Stat> {
        match self {
            Condition::StatDrop(stat) => Some(*stat),
            _ => None,
        }
    }

    /// Whether this condition lowers one of the target's stats
    pub fn reduces_stat(&self) -> bool {
        self.stat_reduced().is_some()
    }

    /// Whether this condition can stop the target from acting
    pub fn incapacitates(&self) -> bool {
        matches!(
            self,
            Condition::Sleep | Condition::Freeze | Condition::Paralysis | Condition::Confusion
        )
    }

    /// Check if this is a known condition (not Other)
    pub fn is_known(&self) -> bool {
        !matches!(self, Condition::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Condition::Burn => "Burn",
            Condition::Freeze => "Freeze",
            Condition::Paralysis => "Paralysis",
            Condition::Poison => "Poison",
            Condition::BadPoison => "Toxic",
            Condition::Sleep => "Sleep",
            Condition::Confusion => "Confusion",
            Condition::StatDrop(Stat::Atk) => "Attack Down",
            Condition::StatDrop(Stat::Def) => "Defense Down",
            Condition::StatDrop(Stat::Spa) => "Special Attack Down",
            Condition::StatDrop(Stat::Spd) => "Special Defense Down",
            Condition::StatDrop(Stat::Spe) => "Speed Down",
            Condition::StatDrop(Stat::Accuracy) => "Accuracy Down",
            Condition::StatDrop(Stat::Evasion) => "Evasion Down",
            Condition::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
