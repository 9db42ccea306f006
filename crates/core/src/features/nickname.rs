use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::{PoisonError, RwLock};
use tracing::info;

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-zA-Z-]+$").unwrap());

/// Names may contain letters and hyphens only.
pub fn is_valid_name(name: &str) -> bool {
    NAME.is_match(name)
}

#[derive(Debug, Default)]
pub struct NicknameManager {
    nicknames: RwLock<IndexMap<String, String>>,
}

impl NicknameManager {
    pub fn new() -> NicknameManager {
        NicknameManager::default()
    }

    /// Returns the nickname that was replaced, if any.
    pub fn set(&self, player: &str, nickname: &str) -> Option<String> {
        info!("{} is now known as {}", player, nickname);
        self.nicknames
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(player.to_lowercase(), nickname.to_string())
    }

    pub fn clear(&self, player: &str) -> Option<String> {
        self.nicknames
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .shift_remove(&player.to_lowercase())
    }

    pub fn get(&self, player: &str) -> Option<String> {
        self.nicknames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&player.to_lowercase())
            .cloned()
    }

    /// Players that currently have a nickname.
    pub fn players(&self) -> Vec<String> {
        self.nicknames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}
