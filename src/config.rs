use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::suggest::SuggestionStrategy;

pub const CONFIG_FILE: &str = "config.json";

fn default_store_url() -> String {
    "http://localhost:8080/v1".into()
}

fn default_analysis_url() -> String {
    "http://localhost:8000".into()
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct MindwellConfig {
    /// Base URL of the hosted document store.
    #[serde(default = "default_store_url")]
    pub store_url: String,
    /// Base URL of the text-analysis service (emotion, summary, suggestion).
    #[serde(default = "default_analysis_url")]
    pub analysis_url: String,
    #[serde(default)]
    pub suggestion_strategy: SuggestionStrategy,
}

impl Default for MindwellConfig {
    fn default() -> Self {
        Self {
            store_url: default_store_url(),
            analysis_url: default_analysis_url(),
            suggestion_strategy: SuggestionStrategy::default(),
        }
    }
}

impl MindwellConfig {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("mindwell")
            .join(CONFIG_FILE)
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load() -> Self {
        let path = Self::config_path();
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("Invalid config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the config file, creating the directory if needed.
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_services() {
        let cfg = MindwellConfig::default();
        assert_eq!(cfg.analysis_url, "http://localhost:8000");
        assert_eq!(cfg.suggestion_strategy, SuggestionStrategy::LocalRules);
    }

    #[test]
    fn partial_config_fills_missing_fields() {
        let cfg: MindwellConfig =
            serde_json::from_str(r#"{"store_url": "https://db.example.com/v1"}"#).unwrap();
        assert_eq!(cfg.store_url, "https://db.example.com/v1");
        assert_eq!(cfg.analysis_url, "http://localhost:8000");
    }

    #[test]
    fn config_round_trips() {
        let cfg = MindwellConfig {
            store_url: "https://db.example.com/v1".into(),
            analysis_url: "https://ai.example.com".into(),
            suggestion_strategy: SuggestionStrategy::Remote,
        };
        let raw = serde_json::to_string(&cfg).unwrap();
        assert_eq!(serde_json::from_str::<MindwellConfig>(&raw).unwrap(), cfg);
    }
}
