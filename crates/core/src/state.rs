use crate::config::WorkshopConfig;
use crate::features::{banitem::BanitemManager, nickname::NicknameManager, Setting};
use crate::permissions::{PermissionRegistry, PermissionSet};
use anyhow::Result;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Toggles for the optional features.
#[derive(Debug)]
pub struct FeatureSettings {
    pub banitem: Arc<Setting>,
    pub nickname: Arc<Setting>,
}

impl FeatureSettings {
    fn from_config(config: &WorkshopConfig) -> FeatureSettings {
        FeatureSettings {
            banitem: Arc::new(Setting::new("banitem", config.enable_banitem)),
            nickname: Arc::new(Setting::new("nickname", config.enable_nickname)),
        }
    }

    fn apply(&self, config: &WorkshopConfig) {
        self.banitem.set(config.enable_banitem);
        self.nickname.set(config.enable_nickname);
    }

    pub fn all(&self) -> [&Arc<Setting>; 2] {
        [&self.banitem, &self.nickname]
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Setting>> {
        self.all()
            .into_iter()
            .find(|setting| setting.name().eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.all().into_iter().map(|setting| setting.name()).collect()
    }
}

/// Everything the builtin commands operate on.
#[derive(Debug)]
pub struct WorkshopState {
    config_path: Option<PathBuf>,
    features: FeatureSettings,
    permissions: RwLock<PermissionRegistry>,
    banitem: BanitemManager,
    nicknames: NicknameManager,
}

impl WorkshopState {
    /// State backed by a config file; [`reload`](Self::reload) re-reads it.
    pub fn load(config_path: impl AsRef<Path>) -> Result<WorkshopState> {
        let config_path = config_path.as_ref().to_path_buf();
        let config = WorkshopConfig::load(&config_path)?;
        let mut state = WorkshopState::from_config(&config);
        state.config_path = Some(config_path);
        Ok(state)
    }

    /// State that lives only in memory; reloading keeps it as is.
    pub fn from_config(config: &WorkshopConfig) -> WorkshopState {
        WorkshopState {
            config_path: None,
            features: FeatureSettings::from_config(config),
            permissions: RwLock::new(permission_registry(config)),
            banitem: BanitemManager::new(),
            nicknames: NicknameManager::new(),
        }
    }

    pub fn reload(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };
        let config = WorkshopConfig::load(path)?;
        self.features.apply(&config);
        *self
            .permissions
            .write()
            .unwrap_or_else(PoisonError::into_inner) = permission_registry(&config);
        info!("Reloaded settings from {}", path.display());
        Ok(())
    }

    pub fn features(&self) -> &FeatureSettings {
        &self.features
    }

    pub fn banitem(&self) -> &BanitemManager {
        &self.banitem
    }

    pub fn nicknames(&self) -> &NicknameManager {
        &self.nicknames
    }

    pub fn permissions_for(&self, sender: &str) -> PermissionSet {
        self.permissions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .for_sender(sender)
    }

    /// Players known from the permission settings or from a nickname.
    pub fn known_players(&self) -> Vec<String> {
        let configured = self
            .permissions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .senders()
            .map(str::to_string)
            .collect_vec();
        configured
            .into_iter()
            .chain(self.nicknames.players())
            .unique_by(|name| name.to_lowercase())
            .collect()
    }
}

fn permission_registry(config: &WorkshopConfig) -> PermissionRegistry {
    PermissionRegistry::new(
        config.permission_groups.clone(),
        config.sender_groups.clone(),
    )
}
