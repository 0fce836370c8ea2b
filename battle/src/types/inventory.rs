//! Item kinds and the per-side inventory

use std::collections::HashMap;

/// Items a trainer can use on their own combatants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Basic heal
    Potion,
    SuperPotion,
    HyperPotion,
    /// Top-tier heal
    MegaPotion,
    /// Brings a knocked-out combatant back
    Revive,
    /// Wards off status conditions
    StatusGuard,
}

impl ItemKind {
    pub const ALL: [ItemKind; 6] = [
        ItemKind::Potion,
        ItemKind::SuperPotion,
        ItemKind::HyperPotion,
        ItemKind::MegaPotion,
        ItemKind::Revive,
        ItemKind::StatusGuard,
    ];

    /// Parse an item name (case, spaces, dashes and underscores ignored)
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "potion" => Some(ItemKind::Potion),
            "superpotion" | "super" => Some(ItemKind::SuperPotion),
            "hyperpotion" | "hyper" => Some(ItemKind::HyperPotion),
            "megapotion" | "mega" => Some(ItemKind::MegaPotion),
            "revive" => Some(ItemKind::Revive),
            "statusguard" | "guard" | "safeguard" => Some(ItemKind::StatusGuard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Potion => "potion",
            ItemKind::SuperPotion => "super potion",
            ItemKind::HyperPotion => "hyper potion",
            ItemKind::MegaPotion => "mega potion",
            ItemKind::Revive => "revive",
            ItemKind::StatusGuard => "status guard",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remaining item counts for one side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    counts: HashMap<ItemKind, u32>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the count of an item
    pub fn with(mut self, item: ItemKind, count: u32) -> Self {
        self.set(item, count);
        self
    }

    pub fn set(&mut self, item: ItemKind, count: u32) {
        self.counts.insert(item, count);
    }

    pub fn add(&mut self, item: ItemKind, count: u32) {
        *self.counts.entry(item).or_insert(0) += count;
    }

    /// Remove one of an item, returning false if none were left
    pub fn take(&mut self, item: ItemKind) -> bool {
        match self.counts.get_mut(&item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, item: ItemKind) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    pub fn has(&self, item: ItemKind) -> bool {
        self.count(item) > 0
    }

    /// Items with at least one use left, in [`ItemKind::ALL`] order
    pub fn available(&self) -> impl Iterator<Item = (ItemKind, u32)> + '_ {
        ItemKind::ALL
            .into_iter()
            .map(|item| (item, self.count(item)))
            .filter(|(_, count)| *count > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.available().next().is_none()
    }
}
