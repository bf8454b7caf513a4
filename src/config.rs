//! # Configuration
//!
//! TOML-backed settings for the carousels and the desktop front end.
//!
//! Every section carries `#[serde(default)]`, so a file that only sets
//! `leadership.interval_ms` is valid and everything else keeps its default.
//! A missing file is created with the defaults; a missing config directory
//! falls back to in-memory defaults so the application still starts.
//!
//! ```toml
//! [experience]
//! interval_ms = 5000
//! autoplay = true
//!
//! [code_viewer]
//! copy_feedback_ms = 1500
//!
//! [contact]
//! submit_delay_ms = 1500
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "FOLIO_CAROUSEL_CONFIG";
const CONFIG_DIR: &str = "folio-carousel";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Settings for one carousel instance.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CarouselSettings {
    /// Autoplay interval in milliseconds
    pub interval_ms: u64,
    /// Whether autoplay is on when the carousel mounts
    pub autoplay: bool,
    /// Slide shown on mount, clamped into range
    pub initial_index: usize,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: 5000,
            autoplay: true,
            initial_index: 0,
        }
    }
}

impl CarouselSettings {
    pub fn with_interval_ms(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            ..Self::default()
        }
    }

    /// Manual-only carousel, no timer ever runs.
    pub fn manual() -> Self {
        Self {
            autoplay: false,
            ..Self::default()
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for the code-snippet viewer.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CodeViewerSettings {
    /// How long the "copied" badge stays up, in milliseconds
    pub copy_feedback_ms: u64,
}

impl Default for CodeViewerSettings {
    fn default() -> Self {
        Self {
            copy_feedback_ms: 1500,
        }
    }
}

impl CodeViewerSettings {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

/// Settings for the contact form.
///
/// Submissions are simulated: the form stays in the sending state for
/// `submit_delay_ms`, then clears and shows a confirmation.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ContactSettings {
    pub submit_delay_ms: u64,
    /// How long the "message sent" confirmation stays up
    pub confirmation_ms: u64,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            confirmation_ms: 3000,
        }
    }
}

impl ContactSettings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn confirmation(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectsSettings {
    /// Simulated fetch time before the gallery shows its repositories
    pub load_delay_ms: u64,
}

impl Default for ProjectsSettings {
    fn default() -> Self {
        Self {
            load_delay_ms: 1000,
        }
    }
}

impl ProjectsSettings {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Target repaint rate of the window
    pub fps: u8,
    pub dark_theme: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            dark_theme: true,
        }
    }
}

impl UiConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

/// Complete configuration of the portfolio page.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PortfolioConfig {
    pub experience: CarouselSettings,
    pub leadership: CarouselSettings,
    pub links: CarouselSettings,
    pub code_viewer: CodeViewerSettings,
    pub contact: ContactSettings,
    pub projects: ProjectsSettings,
    pub ui: UiConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            experience: CarouselSettings::with_interval_ms(5000),
            leadership: CarouselSettings::with_interval_ms(6000),
            links: CarouselSettings::with_interval_ms(5000),
            code_viewer: CodeViewerSettings::default(),
            contact: ContactSettings::default(),
            projects: ProjectsSettings::default(),
            ui: UiConfig::default(),
        }
    }
}

impl PortfolioConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: PortfolioConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, settings) in [
            ("experience", &self.experience),
            ("leadership", &self.leadership),
            ("links", &self.links),
        ] {
            settings
                .validate()
                .map_err(|e| ConfigError::Invalid(format!("[{}] {}", name, e)))?;
        }
        Ok(())
    }

    /// Config location: `$FOLIO_CAROUSEL_CONFIG`, else the platform config dir.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading config from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml(&content)
    }

    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ConfigError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        let content = self.to_toml()?;
        tokio::fs::write(path, content)
            .await
            .map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads the config at `path`, writing the defaults first if the file
    /// does not exist yet.
    pub async fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let exists = tokio::fs::try_exists(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        if !exists {
            info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save(path).await?;
            return Ok(config);
        }

        Self::load(path).await
    }

    /// Loads from [`Self::default_path`], falling back to defaults when no
    /// config directory is known.
    pub async fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_or_create(&path).await,
            None => {
                warn!("No config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_intervals() {
        let config = PortfolioConfig::default();
        assert_eq!(config.experience.interval_ms, 5000);
        assert_eq!(config.leadership.interval_ms, 6000);
        assert_eq!(config.code_viewer.copy_feedback_ms, 1500);
        assert_eq!(config.contact.submit_delay_ms, 1500);
        assert_eq!(config.projects.load_delay_ms, 1000);
        assert!(config.experience.autoplay);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = PortfolioConfig::from_toml(
            r#"
            [leadership]
            interval_ms = 8000
            "#,
        )
        .unwrap();

        assert_eq!(config.leadership.interval_ms, 8000);
        assert!(config.leadership.autoplay);
        assert_eq!(config.experience, CarouselSettings::with_interval_ms(5000));
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = PortfolioConfig::from_toml(
            r#"
            [links]
            interval_ms = 0
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("[links]")));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = PortfolioConfig::from_toml("experience = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_survives_a_save_cycle() {
        let mut config = PortfolioConfig::default();
        config.links.autoplay = false;
        let text = config.to_toml().unwrap();
        assert_eq!(PortfolioConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn frame_interval_never_divides_by_zero() {
        let ui = UiConfig {
            fps: 0,
            dark_theme: true,
        };
        assert_eq!(ui.frame_interval(), Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = PortfolioConfig::load_or_create(&path).await.unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert!(path.exists());

        let reloaded = PortfolioConfig::load(&path).await.unwrap();
        assert_eq!(reloaded, config);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PortfolioConfig::load(&dir.path().join("absent.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
