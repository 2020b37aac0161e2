//! Application settings.
//!
//! Every tunable constant of the widget lives here so it can be overridden
//! from `settings.toml`. Missing keys fall back to the defaults below.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

/// How often a completed countdown fires the confetti burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationMode {
    /// Fire on every slow tick while the selected countdown is complete
    #[default]
    EveryTick,
    /// Fire a single time per countdown when it first completes
    Once,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Height of one progress slot
    pub trail_height: f32,
    pub icon_radius: f32,
    /// Opacity of the progress bars
    pub bar_alpha: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            trail_height: 40.0,
            icon_radius: 20.0,
            bar_alpha: 0.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationSettings {
    pub mode: CelebrationMode,
    pub particle_count: usize,
    pub duration_secs: f32,
}

impl Default for CelebrationSettings {
    fn default() -> Self {
        Self {
            mode: CelebrationMode::EveryTick,
            particle_count: 150,
            duration_secs: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
    /// Icons are shrunk to fit in an `icon_size` x `icon_size` box
    pub icon_size: u32,
    /// Degrees the bar hue advances per added countdown
    pub hue_step: u16,
    /// Earliest date of birth the form accepts
    pub min_birth_date: NaiveDate,
    pub canvas: CanvasSettings,
    pub celebration: CelebrationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            icon_size: 50,
            hue_step: 70,
            min_birth_date: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default(),
            canvas: CanvasSettings::default(),
            celebration: CelebrationSettings::default(),
        }
    }
}

/// Longest confetti burst accepted from configuration, in seconds.
pub const MAX_CELEBRATION_SECS: f32 = 60.0;

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        self.validate_for(Local::now().date_naive())
    }

    /// Validate as if the current date were `today`.
    pub fn validate_for(&self, today: NaiveDate) -> Result<(), SettingsValidationError> {
        if self.icon_size == 0 {
            return Err(SettingsValidationError::ZeroIconSize);
        }
        if self.hue_step % 360 == 0 {
            return Err(SettingsValidationError::DegenerateHueStep(self.hue_step));
        }
        if !(self.canvas.trail_height.is_finite() && self.canvas.trail_height > 0.0) {
            return Err(SettingsValidationError::TrailHeight(self.canvas.trail_height));
        }
        if !(self.canvas.icon_radius.is_finite() && self.canvas.icon_radius > 0.0) {
            return Err(SettingsValidationError::IconRadius(self.canvas.icon_radius));
        }
        if !(0.0..=1.0).contains(&self.canvas.bar_alpha) {
            return Err(SettingsValidationError::BarAlpha(self.canvas.bar_alpha));
        }
        let duration = self.celebration.duration_secs;
        if !(duration > 0.0 && duration <= MAX_CELEBRATION_SECS) {
            return Err(SettingsValidationError::CelebrationDuration(duration));
        }
        if self.min_birth_date > today {
            return Err(SettingsValidationError::MinBirthDateInFuture(self.min_birth_date));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsValidationError {
    #[error("icon_size must be at least 1 pixel")]
    ZeroIconSize,
    #[error("hue_step {0} gives every countdown the same colour")]
    DegenerateHueStep(u16),
    #[error("canvas.trail_height must be positive, got {0}")]
    TrailHeight(f32),
    #[error("canvas.icon_radius must be positive, got {0}")]
    IconRadius(f32),
    #[error("canvas.bar_alpha must be within 0..=1, got {0}")]
    BarAlpha(f32),
    #[error("celebration.duration_secs must be within (0, 60], got {0}")]
    CelebrationDuration(f32),
    #[error("min_birth_date {0} is later than today")]
    MinBirthDateInFuture(NaiveDate),
}
