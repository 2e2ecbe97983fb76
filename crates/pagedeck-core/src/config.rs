use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeckConfig {
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub slide: SlideConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Page shown first, after the deck is populated
    #[serde(default)]
    pub start_page: usize,
    /// Mirror the settled page's title into the host
    #[serde(default = "default_true")]
    pub set_navigation_title: bool,
    /// Allow the host's swipe gesture
    #[serde(default = "default_true")]
    pub enable_swipe: bool,
    /// Decorative line above the bottom margin
    #[serde(default)]
    pub show_bottom_line: bool,
    /// Page-indicator dots
    #[serde(default = "default_true")]
    pub show_page_control: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            start_page: 0,
            set_navigation_title: default_true(),
            enable_swipe: default_true(),
            show_bottom_line: false,
            show_page_control: default_true(),
        }
    }
}

/// Slide transition animation settings for the host container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideConfig {
    /// Animate transitions instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Slide duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Animation frame rate
    #[serde(default = "default_fps")]
    pub fps: u16,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            duration_ms: default_duration_ms(),
            easing: EasingType::default(),
            fps: default_fps(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the duration
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    150
}

fn default_fps() -> u16 {
    60
}

impl DeckConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &PathBuf) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagedeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagedeck")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeckConfig::default();
        assert_eq!(config.navigator.start_page, 0);
        assert!(config.navigator.set_navigation_title);
        assert!(config.navigator.enable_swipe);
        assert!(!config.navigator.show_bottom_line);
        assert!(config.navigator.show_page_control);
        assert!(config.slide.smooth_enabled);
        assert_eq!(config.slide.duration_ms, 150);
        assert_eq!(config.slide.easing, EasingType::Cubic);
        assert_eq!(config.slide.fps, 60);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DeckConfig = toml::from_str(
            r#"
            [navigator]
            start_page = 2
            show_bottom_line = true

            [slide]
            easing = "ease_out"
            "#,
        )
        .unwrap();

        assert_eq!(config.navigator.start_page, 2);
        assert!(config.navigator.show_bottom_line);
        assert!(config.navigator.enable_swipe);
        assert_eq!(config.slide.easing, EasingType::EaseOut);
        assert_eq!(config.slide.duration_ms, 150);
    }

    #[test]
    fn test_round_trip() {
        let mut config = DeckConfig::default();
        config.navigator.enable_swipe = false;
        config.slide.duration_ms = 300;

        let text = toml::to_string_pretty(&config).unwrap();
        let back: DeckConfig = toml::from_str(&text).unwrap();
        assert!(!back.navigator.enable_swipe);
        assert_eq!(back.slide.duration_ms, 300);
    }
}
