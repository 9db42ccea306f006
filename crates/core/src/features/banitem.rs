use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::{PoisonError, RwLock};
use tracing::info;

static ITEM_ID: Lazy<Regex> = Lazy::new(|| Regex::new("^(minecraft:)?([a-z_]+)$").unwrap());

/// Items staff may want to keep out of a classroom.
pub const ITEMS: &[&str] = &[
    "anvil",
    "arrow",
    "barrier",
    "bow",
    "command_block",
    "crossbow",
    "diamond_sword",
    "egg",
    "elytra",
    "end_crystal",
    "ender_pearl",
    "fire_charge",
    "firework_rocket",
    "flint_and_steel",
    "lava_bucket",
    "respawn_anchor",
    "snowball",
    "spawner",
    "tnt",
    "trident",
    "water_bucket",
];

/// Resolves user input such as `TNT` or `minecraft:tnt` to a known item.
pub fn match_item(input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();
    let captures = ITEM_ID.captures(&input)?;
    let name = captures.get(2)?.as_str();
    ITEMS.iter().copied().find(|item| *item == name)
}

#[derive(Debug, Default)]
pub struct BanitemManager {
    banned: RwLock<IndexSet<&'static str>>,
}

impl BanitemManager {
    pub fn new() -> BanitemManager {
        BanitemManager::default()
    }

    pub fn is_banned(&self, item: &str) -> bool {
        self.banned
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(item)
    }

    /// Returns false if the item was already banned.
    pub fn ban(&self, item: &'static str) -> bool {
        let inserted = self
            .banned
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(item);
        if inserted {
            info!("Banned item {}", item);
        }
        inserted
    }

    /// Returns false if the item was not banned.
    pub fn unban(&self, item: &str) -> bool {
        let removed = self
            .banned
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .shift_remove(item);
        if removed {
            info!("Unbanned item {}", item);
        }
        removed
    }

    /// Banned items in the order they were banned.
    pub fn banned(&self) -> Vec<&'static str> {
        self.banned
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_resolve_with_or_without_namespace() {
        assert_eq!(match_item("tnt"), Some("tnt"));
        assert_eq!(match_item("TNT"), Some("tnt"));
        assert_eq!(match_item("minecraft:lava_bucket"), Some("lava_bucket"));
        assert_eq!(match_item("stone"), None);
        assert_eq!(match_item("other:tnt"), None);
    }

    #[test]
    fn ban_and_unban_toggle_membership() {
        let manager = BanitemManager::new();
        assert!(manager.ban("tnt"));
        assert!(!manager.ban("tnt"));
        assert!(manager.ban("bow"));
        assert_eq!(manager.banned(), vec!["tnt", "bow"]);
        assert!(manager.unban("tnt"));
        assert!(!manager.unban("tnt"));
        assert!(!manager.is_banned("tnt"));
        assert!(manager.is_banned("bow"));
    }
}
