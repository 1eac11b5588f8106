//! Live desktop preferences edited from the Settings app.
//!
//! Values are seeded from [`ShellConfig`] at boot and live only in memory.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::config::ShellConfig;

/// Accepted dock icon sizes in pixels.
pub const DOCK_ICON_SIZE_RANGE: RangeInclusive<i32> = 48..=96;
/// Accepted dock hover magnification factors.
pub const DOCK_MAGNIFICATION_RANGE: RangeInclusive<f64> = 1.0..=2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Auto,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

    /// Value written to the shell root `data-theme` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccentColor {
    #[default]
    Blue,
    Purple,
    Pink,
    Red,
    Orange,
    Green,
}

impl AccentColor {
    pub const ALL: [AccentColor; 6] = [
        AccentColor::Blue,
        AccentColor::Purple,
        AccentColor::Pink,
        AccentColor::Red,
        AccentColor::Orange,
        AccentColor::Green,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#007AFF",
            Self::Purple => "#7C3AED",
            Self::Pink => "#EC4899",
            Self::Red => "#EF4444",
            Self::Orange => "#F59E0B",
            Self::Green => "#10B981",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Pink => "Pink",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Green => "Green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesktopPreferences {
    pub theme: ThemeMode,
    pub accent: AccentColor,
    pub dock_icon_size: i32,
    pub dock_magnification: f64,
    pub dock_auto_hide: bool,
}

impl Default for DesktopPreferences {
    fn default() -> Self {
        Self::from_shell(&ShellConfig::default())
    }
}

impl DesktopPreferences {
    pub fn from_shell(config: &ShellConfig) -> Self {
        Self {
            theme: ThemeMode::default(),
            accent: AccentColor::default(),
            dock_icon_size: clamp_range(config.dock_icon_size, &DOCK_ICON_SIZE_RANGE),
            dock_magnification: clamp_magnification(config.dock_magnification).unwrap_or(1.0),
            dock_auto_hide: false,
        }
    }

    /// Returns `true` when the stored size changed.
    pub fn set_dock_icon_size(&mut self, size: i32) -> bool {
        let size = clamp_range(size, &DOCK_ICON_SIZE_RANGE);
        let changed = self.dock_icon_size != size;
        self.dock_icon_size = size;
        changed
    }

    /// Non-finite factors are ignored; finite ones are clamped into range.
    pub fn set_dock_magnification(&mut self, magnification: f64) -> bool {
        let Some(magnification) = clamp_magnification(magnification) else {
            return false;
        };
        let changed = self.dock_magnification != magnification;
        self.dock_magnification = magnification;
        changed
    }
}

fn clamp_range(value: i32, range: &RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

fn clamp_magnification(value: f64) -> Option<f64> {
    value
        .is_finite()
        .then(|| value.clamp(*DOCK_MAGNIFICATION_RANGE.start(), *DOCK_MAGNIFICATION_RANGE.end()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_follow_shell_config() {
        let prefs = DesktopPreferences::default();
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.accent.hex(), "#007AFF");
        assert_eq!(prefs.dock_icon_size, 64);
        assert_eq!(prefs.dock_magnification, 1.5);
        assert!(!prefs.dock_auto_hide);
    }

    #[test]
    fn dock_size_is_clamped_to_slider_range() {
        let mut prefs = DesktopPreferences::default();
        assert!(prefs.set_dock_icon_size(200));
        assert_eq!(prefs.dock_icon_size, 96);
        assert!(prefs.set_dock_icon_size(10));
        assert_eq!(prefs.dock_icon_size, 48);
        assert!(!prefs.set_dock_icon_size(48));
    }

    #[test]
    fn magnification_rejects_non_finite_values() {
        let mut prefs = DesktopPreferences::default();
        assert!(!prefs.set_dock_magnification(f64::NAN));
        assert_eq!(prefs.dock_magnification, 1.5);
        assert!(prefs.set_dock_magnification(3.0));
        assert_eq!(prefs.dock_magnification, 2.0);
        assert!(prefs.set_dock_magnification(0.2));
        assert_eq!(prefs.dock_magnification, 1.0);
    }

    #[test]
    fn theme_serializes_as_lowercase_token() {
        for theme in ThemeMode::ALL {
            assert_eq!(
                serde_json::to_string(&theme).expect("theme json"),
                format!("\"{}\"", theme.token())
            );
        }
    }
}
