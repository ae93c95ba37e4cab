use serde::{Deserialize, Serialize};

use super::types::CrosswordItem;
use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswordSettings {
    pub items: Vec<CrosswordItem>,
}

impl CrosswordSettings {
    pub fn new(items: Vec<CrosswordItem>) -> Self {
        Self { items }
    }
}

impl Validate for CrosswordSettings {
    fn validate(&self) -> Result<(), String> {
        for item in &self.items {
            if item.answer.is_empty() {
                return Err(format!(
                    "Answer for question '{}' must not be empty",
                    item.question
                ));
            }
        }
        Ok(())
    }
}

pub fn crossword_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, CrosswordSettings, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

pub fn load_crossword_settings(file_path: &str) -> CrosswordSettings {
    match crossword_config_manager(file_path).get_config() {
        Ok(settings) => settings,
        Err(err) => {
            crate::log!(
                "Failed to load crossword settings from {}: {}",
                file_path,
                err
            );
            CrosswordSettings::default()
        }
    }
}
