//! Type matchup helpers for decision making

use crate::error::ChartError;
use crate::types::{Combatant, Move, Type, TypeChart};

/// Multiplier callers substitute when a chart lookup fails
pub const NEUTRAL: f64 = 1.0;

/// Look up a multiplier, widened for scoring arithmetic
pub fn lookup<C: TypeChart + ?Sized>(
    chart: &C,
    attacking: Type,
    defending: Type,
) -> Result<f64, ChartError> {
    chart.multiplier(attacking, defending).map(f64::from)
}

/// How well `attacker`'s type hits `defender`'s type
pub fn matchup<C: TypeChart + ?Sized>(
    chart: &C,
    attacker: &Combatant,
    defender: &Combatant,
) -> Result<f64, ChartError> {
    lookup(chart, attacker.species_type, defender.species_type)
}

/// How well a move's type hits `defender`'s type
pub fn move_matchup<C: TypeChart + ?Sized>(
    chart: &C,
    mv: &Move,
    defender: &Combatant,
) -> Result<f64, ChartError> {
    lookup(chart, mv.move_type, defender.species_type)
}

/// Check if a multiplier means total immunity
pub fn is_immune(multiplier: f64) -> bool {
    multiplier == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CombatantId, CustomChart, StandardChart, Stats};

    fn combatant(species_type: Type) -> Combatant {
        Combatant::new(CombatantId(1), species_type.as_str(), species_type, 100, Stats::default())
    }

    #[test]
    fn test_lookup_standard() {
        assert_eq!(lookup(&StandardChart, Type::Water, Type::Fire), Ok(2.0));
        assert_eq!(lookup(&StandardChart, Type::Fire, Type::Water), Ok(0.5));
    }

    #[test]
    fn test_lookup_missing() {
        let chart = CustomChart::new();
        assert!(lookup(&chart, Type::Water, Type::Fire).is_err());
    }

    #[test]
    fn test_matchup() {
        let ghost = combatant(Type::Ghost);
        let normal = combatant(Type::Normal);

        let m = matchup(&StandardChart, &normal, &ghost).unwrap();
        assert!(is_immune(m));

        let m = matchup(&StandardChart, &ghost, &ghost).unwrap();
        assert_eq!(m, 2.0);
    }

    #[test]
    fn test_move_matchup() {
        let ground = combatant(Type::Ground);
        let thunderbolt = Move::damage(1, "Thunderbolt", Type::Electric, 90, 100, 15);
        let surf = Move::damage(2, "Surf", Type::Water, 90, 100, 15);

        assert_eq!(move_matchup(&StandardChart, &thunderbolt, &ground), Ok(0.0));
        assert_eq!(move_matchup(&StandardChart, &surf, &ground), Ok(2.0));
    }

    #[test]
    fn test_is_immune() {
        assert!(is_immune(0.0));
        assert!(!is_immune(0.25));
        assert!(!is_immune(NEUTRAL));
    }
}
