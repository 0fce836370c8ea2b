//! The action a policy hands back to the battle engine

use kazam_battle::{CombatantId, ItemKind, Player};

/// One concrete, directly executable action for a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Decision {
    /// Use the move in `slot` of `combatant`'s move list
    Attack {
        player: Player,
        combatant: CombatantId,
        slot: usize,
    },

    /// Bring `target` onto the field
    Switch { player: Player, target: CombatantId },

    /// Use an item from the side's inventory on `target`
    UseItem {
        player: Player,
        target: CombatantId,
        item: ItemKind,
    },
}

impl Decision {
    /// The side taking the action
    pub fn player(&self) -> Player {
        match self {
            Decision::Attack { player, .. }
            | Decision::Switch { player, .. }
            | Decision::UseItem { player, .. } => *player,
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Decision::Attack { .. })
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, Decision::Switch { .. })
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Decision::UseItem { .. })
    }

    /// The item used, for item decisions
    pub fn item(&self) -> Option<ItemKind> {
        match self {
            Decision::UseItem { item, .. } => Some(*item),
            _ => None,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Attack {
                player,
                combatant,
                slot,
            } => write!(f, "{}: move {} [{}]", player, slot + 1, combatant),
            Decision::Switch { player, target } => write!(f, "{}: switch {}", player, target),
            Decision::UseItem {
                player,
                target,
                item,
            } => write!(f, "{}: item {} -> {}", player, item, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let attack = Decision::Attack {
            player: Player::P2,
            combatant: CombatantId(4),
            slot: 0,
        };
        assert_eq!(attack.to_string(), "p2: move 1 [#4]");

        let switch = Decision::Switch {
            player: Player::P2,
            target: CombatantId(5),
        };
        assert_eq!(switch.to_string(), "p2: switch #5");

        let item = Decision::UseItem {
            player: Player::P1,
            target: CombatantId(4),
            item: ItemKind::Potion,
        };
        assert_eq!(item.to_string(), "p1: item potion -> #4");
    }

    #[test]
    fn test_accessors() {
        let item = Decision::UseItem {
            player: Player::P1,
            target: CombatantId(1),
            item: ItemKind::Revive,
        };
        assert_eq!(item.player(), Player::P1);
        assert!(item.is_item());
        assert!(!item.is_switch());
        assert_eq!(item.item(), Some(ItemKind::Revive));

        let switch = Decision::Switch {
            player: Player::P3,
            target: CombatantId(2),
        };
        assert!(switch.is_switch());
        assert_eq!(switch.item(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_tagged() {
        let decision = Decision::Switch {
            player: Player::P2,
            target: CombatantId(3),
        };
        let json = serde_json::to_value(decision).unwrap();
        assert_eq!(json["kind"], "switch");
        assert_eq!(json["target"], 3);

        let back: Decision = serde_json::from_value(json).unwrap();
        assert_eq!(back, decision);
    }
}
