use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::error::SettingsError;
use crate::models::settings::SiteSettings;

const SETTINGS_FILE: &str = "site.toml";

/// Reads and writes `site.toml`
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory, or the working directory
    /// when no home directory can be resolved
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "Storefront", "StorefrontSite") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<SiteSettings, SettingsError> {
        if !self.path.exists() {
            log::info!("No settings file at {}, using defaults", self.path.display());
            return Ok(SiteSettings::default());
        }

        let text = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        let settings = Self::parse(&text)?;
        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<SiteSettings, SettingsError> {
        let settings: SiteSettings = toml::from_str(text)?;
        settings.validate().map_err(SettingsError::Invalid)?;
        Ok(settings)
    }

    pub fn load_or_default(&self) -> SiteSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
                SiteSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &SiteSettings) -> Result<(), SettingsError> {
        settings.validate().map_err(SettingsError::Invalid)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let text = toml::to_string_pretty(settings)?;
        fs::write(&self.path, text).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::AutoplayPolicy;

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = SettingsService::parse(
            r#"
            [carousel]
            autoplay_policy = "fixed-cadence"
            "#,
        )
        .unwrap();

        assert_eq!(settings.carousel.autoplay_policy, AutoplayPolicy::FixedCadence);
        assert_eq!(settings.carousel.autoplay_interval_ms, 7_000);
        assert_eq!(settings.countdown.tick_ms, 1_000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SettingsService::parse("[countdown]\ntick_ms = 0\n").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = SettingsService::parse("theme = [").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
