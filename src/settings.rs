//! Viewer settings with persistence
//!
//! Settings are saved to `~/.config/morpho/settings.toml`

use std::fs;
use std::path::PathBuf;

use morpho_core::MorphConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All viewer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// Morph timing and ripple tuning
    pub morph: MorphConfig,
    /// How many ticks the headless demo loop simulates
    pub demo_ticks: u64,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            morph: MorphConfig::default(),
            demo_ticks: 900,
        }
    }
}

impl ViewerSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("morpho"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let settings = ViewerSettings::default();
        let text = toml::to_string_pretty(&settings).unwrap();
        let back: ViewerSettings = toml::from_str(&text).unwrap();
        assert_eq!(back.demo_ticks, settings.demo_ticks);
        assert_eq!(back.morph.duration_ticks, settings.morph.duration_ticks);
        assert_eq!(back.morph.ripple.amplitude, settings.morph.ripple.amplitude);
    }
}
