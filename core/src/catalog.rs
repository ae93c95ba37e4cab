use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiniAppType {
    Weather,
    Crossword,
    TicTacToe,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniAppEntry {
    pub title: String,
    pub app_type: MiniAppType,
}

impl MiniAppEntry {
    pub fn new(title: &str, app_type: MiniAppType) -> Self {
        Self {
            title: title.to_string(),
            app_type,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCatalog {
    entries: Vec<MiniAppEntry>,
}

impl AppCatalog {
    pub fn new(entries: Vec<MiniAppEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MiniAppEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&MiniAppEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn shuffled(&self, rng: &mut SessionRng) -> Vec<MiniAppEntry> {
        let mut entries = self.entries.clone();
        rng.shuffle(&mut entries);
        entries
    }
}

impl Default for AppCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                MiniAppEntry::new("Weather", MiniAppType::Weather),
                MiniAppEntry::new("Crossword", MiniAppType::Crossword),
                MiniAppEntry::new("Tic Tac Toe", MiniAppType::TicTacToe),
            ],
        }
    }
}

impl Validate for AppCatalog {
    fn validate(&self) -> Result<(), String> {
        if self.entries.is_empty() {
            return Err("Catalog must contain at least one entry".to_string());
        }
        for entry in &self.entries {
            if entry.title.trim().is_empty() {
                return Err("Catalog entry title must not be empty".to_string());
            }
        }
        Ok(())
    }
}

pub fn catalog_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, AppCatalog, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

pub fn load_catalog(file_path: &str) -> AppCatalog {
    match catalog_config_manager(file_path).get_config() {
        Ok(catalog) => catalog,
        Err(err) => {
            crate::log!("Failed to load app catalog from {}: {}", file_path, err);
            AppCatalog::default()
        }
    }
}
