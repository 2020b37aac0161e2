use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

/// Reads the widget configuration from a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the platform config directory, falling back to the
    /// working directory when no home directory can be resolved.
    pub fn from_project_dirs() -> Self {
        if let Some(dirs) = ProjectDirs::from("com", "KenBoyle", "BirthdayCountdown") {
            Self::new(dirs.config_dir().join(SETTINGS_FILE))
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            Self::new(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!("No settings file at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;
        Ok(settings)
    }

    /// Like [`get`](Self::get), but any failure is logged and replaced by
    /// the defaults so the widget always starts.
    pub fn get_or_default(&self) -> Settings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::CelebrationMode;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        assert_eq!(service.get().unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "hue_step = 45\n\n[celebration]\nmode = \"once\"\n",
        )
        .unwrap();

        let settings = SettingsService::new(&path).get().unwrap();
        assert_eq!(settings.hue_step, 45);
        assert_eq!(settings.celebration.mode, CelebrationMode::Once);
        assert_eq!(settings.celebration.particle_count, 150);
        assert_eq!(settings.icon_size, 50);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "icon_size = 0\n").unwrap();

        let service = SettingsService::new(&path);
        assert!(service.get().is_err());
        assert_eq!(service.get_or_default(), Settings::default());
    }

    #[test]
    fn oversized_celebration_duration_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[celebration]\nduration_secs = 1e30\n").unwrap();

        let service = SettingsService::new(&path);
        let err = service.get().unwrap_err();
        assert!(format!("{err:#}").contains("duration_secs"));
        assert_eq!(service.get_or_default(), Settings::default());
    }

    #[test]
    fn future_min_birth_date_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "min_birth_date = \"2999-01-01\"\n").unwrap();

        let service = SettingsService::new(&path);
        let err = service.get().unwrap_err();
        assert!(format!("{err:#}").contains("min_birth_date"));
        assert_eq!(service.get_or_default(), Settings::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "hue_step = [").unwrap();
        let err = SettingsService::new(&path).get().unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse settings"));
    }
}
