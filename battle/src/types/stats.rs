//! Stats and stat identifiers

/// A stat that conditions can raise or lower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    /// Parse a short ("atk") or long ("special defense") stat name
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "atk" | "attack" => Some(Stat::Atk),
            "def" | "defense" | "defence" => Some(Stat::Def),
            "spa" | "specialattack" | "spatk" => Some(Stat::Spa),
            "spd" | "specialdefense" | "specialdefence" | "spdef" => Some(Stat::Spd),
            "spe" | "speed" => Some(Stat::Spe),
            "accuracy" | "acc" => Some(Stat::Accuracy),
            "evasion" | "evasiveness" | "eva" => Some(Stat::Evasion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Atk => "Attack",
            Stat::Def => "Defense",
            Stat::Spa => "Special Attack",
            Stat::Spd => "Special Defense",
            Stat::Spe => "Speed",
            Stat::Accuracy => "Accuracy",
            Stat::Evasion => "Evasion",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Battle stats of a combatant (health is tracked separately)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub attack: u32,
    pub defense: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    pub fn new(attack: u32, defense: u32, special_defense: u32, speed: u32) -> Self {
        Self {
            attack,
            defense,
            special_defense,
            speed,
        }
    }

    /// Sum of the two defensive stats, saturating at `u32::MAX`
    pub fn defense_pair(&self) -> u32 {
        self.defense.saturating_add(self.special_defense)
    }
}
