//! Decision policies and runtime profile selection

pub mod cautious;
pub mod optimizing;

pub use cautious::Cautious;
pub use optimizing::Optimizing;

use std::fmt;
use std::str::FromStr;

use kazam_battle::{BattleView, Inventory, Player, StandardChart, TypeChart};
use rand::Rng;
use rand::rngs::StdRng;

use crate::decision::Decision;
use crate::error::{DecisionError, UnknownProfile};

/// A policy that picks one action per turn for the side it controls.
///
/// Implementations keep no state between turns apart from their random
/// generator. Every returned decision is legal for the given state: moves
/// have uses left, switch targets are conscious and items are in stock.
pub trait Strategy {
    /// The side this policy plays for
    fn player(&self) -> Player;

    /// Choose the action for this turn
    fn decide<B: BattleView + ?Sized>(
        &mut self,
        battle: &B,
        inventory: &Inventory,
    ) -> Result<Decision, DecisionError>;
}

/// Named policy selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Profile {
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "defensive"))]
    Cautious,

    #[cfg_attr(feature = "serde", serde(alias = "expert"))]
    Optimizing,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Cautious, Profile::Optimizing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Cautious => "cautious",
            Profile::Optimizing => "optimizing",
        }
    }

    /// Build the policy for `player`. A seed makes every draw reproducible;
    /// without one the generator is seeded from the OS.
    pub fn build(self, player: Player, seed: Option<u64>) -> Ai {
        match (self, seed) {
            (Profile::Cautious, Some(seed)) => Ai::Cautious(Cautious::seeded(player, seed)),
            (Profile::Cautious, None) => Ai::Cautious(Cautious::new(player)),
            (Profile::Optimizing, Some(seed)) => Ai::Optimizing(Optimizing::seeded(player, seed)),
            (Profile::Optimizing, None) => Ai::Optimizing(Optimizing::new(player)),
        }
    }

    /// Build the policy with a caller-supplied chart and generator
    pub fn build_with<C: TypeChart, R: Rng>(self, player: Player, chart: C, rng: R) -> Ai<C, R> {
        match self {
            Profile::Cautious => Ai::Cautious(Cautious::with_parts(player, chart, rng)),
            Profile::Optimizing => Ai::Optimizing(Optimizing::with_parts(player, chart, rng)),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cautious" | "defensive" => Ok(Profile::Cautious),
            "optimizing" | "expert" => Ok(Profile::Optimizing),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

/// Either policy, chosen at runtime
#[derive(Debug, Clone)]
pub enum Ai<C = StandardChart, R = StdRng> {
    Cautious(Cautious<C, R>),
    Optimizing(Optimizing<C, R>),
}

impl<C, R> Ai<C, R> {
    pub fn profile(&self) -> Profile {
        match self {
            Ai::Cautious(_) => Profile::Cautious,
            Ai::Optimizing(_) => Profile::Optimizing,
        }
    }
}

impl<C: TypeChart, R: Rng> Strategy for Ai<C, R> {
    fn player(&self) -> Player {
        match self {
            Ai::Cautious(ai) => ai.player(),
            Ai::Optimizing(ai) => ai.player(),
        }
    }

    fn decide<B: BattleView + ?Sized>(
        &mut self,
        battle: &B,
        inventory: &Inventory,
    ) -> Result<Decision, DecisionError> {
        match self {
            Ai::Cautious(ai) => ai.decide(battle, inventory),
            Ai::Optimizing(ai) => ai.decide(battle, inventory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kazam_battle::{BattleState, Combatant, CombatantId, Move, Stats, Team, Type};
    use rand::rngs::mock::StepRng;

    fn create_battle() -> BattleState {
        let mine = Team::new(Player::P1, "Red")
            .with_member(
                Combatant::new(CombatantId(1), "Pikachu", Type::Electric, 100, Stats::default())
                    .with_moves(vec![Move::damage(1, "Thundershock", Type::Electric, 40, 100, 30)]),
            )
            .with_active(CombatantId(1));
        let foe = Team::new(Player::P2, "Blue")
            .with_member(Combatant::new(CombatantId(1), "Onix", Type::Rock, 100, Stats::default()))
            .with_active(CombatantId(1));
        BattleState::new(vec![mine, foe])
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("cautious".parse::<Profile>(), Ok(Profile::Cautious));
        assert_eq!("Defensive".parse::<Profile>(), Ok(Profile::Cautious));
        assert_eq!(" optimizing ".parse::<Profile>(), Ok(Profile::Optimizing));
        assert_eq!("EXPERT".parse::<Profile>(), Ok(Profile::Optimizing));
        assert_eq!(
            "random".parse::<Profile>(),
            Err(UnknownProfile("random".to_string()))
        );
    }

    #[test]
    fn test_profile_display_roundtrip() {
        for profile in Profile::ALL {
            assert_eq!(profile.to_string().parse::<Profile>(), Ok(profile));
        }
    }

    #[test]
    fn test_build() {
        let ai = Profile::Optimizing.build(Player::P3, Some(7));
        assert_eq!(ai.profile(), Profile::Optimizing);
        assert_eq!(ai.player(), Player::P3);

        let ai = Profile::default().build(Player::P1, None);
        assert_eq!(ai.profile(), Profile::Cautious);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let battle = create_battle();
        let inventory = Inventory::new();

        for profile in Profile::ALL {
            let mut a = profile.build(Player::P1, Some(42));
            let mut b = profile.build(Player::P1, Some(42));
            for _ in 0..5 {
                assert_eq!(
                    a.decide(&battle, &inventory).unwrap(),
                    b.decide(&battle, &inventory).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_ai_delegates() {
        let battle = create_battle();
        let mut ai = Profile::Cautious.build_with(Player::P1, StandardChart, StepRng::new(0, 0));
        let decision = ai.decide(&battle, &Inventory::new()).unwrap();
        assert_eq!(
            decision,
            Decision::Attack {
                player: Player::P1,
                combatant: CombatantId(1),
                slot: 0
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_profile_serde_aliases() {
        let profile: Profile = serde_json::from_str("\"expert\"").unwrap();
        assert_eq!(profile, Profile::Optimizing);
        assert_eq!(serde_json::to_string(&Profile::Cautious).unwrap(), "\"cautious\"");
    }
}
