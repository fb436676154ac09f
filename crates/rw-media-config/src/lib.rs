//! Configuration management for rw-media.
//!
//! Parses `rw-media.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [media]
//! controls = true
//! autoplay = false
//! loop = false
//! muted = false
//! preload = "metadata"   # "", "none", "metadata" or "auto"
//! escaping = "double"    # "double" or "single"
//!
//! [markdown]
//! gfm = true
//! ```

use std::path::{Path, PathBuf};

use rw_media::{Escaping, MediaOptions, Preload};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override `media.controls`.
    pub controls: Option<bool>,
    /// Override `media.autoplay`.
    pub autoplay: Option<bool>,
    /// Override `media.loop`.
    pub looping: Option<bool>,
    /// Override `media.muted`.
    pub muted: Option<bool>,
    /// Override `media.preload`.
    pub preload: Option<Preload>,
    /// Override `media.escaping`.
    pub escaping: Option<Escaping>,
    /// Override `markdown.gfm`.
    pub gfm: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw-media.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering defaults for media directives.
    pub media: MediaOptions,
    /// Markdown conversion settings.
    pub markdown: MarkdownConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Markdown conversion configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Enable GFM extensions (tables, strikethrough, task lists).
    pub gfm: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { gfm: true }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rw-media.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and take precedence over config
    /// file values. Unusual playback combinations in the merged configuration
    /// are logged, never rejected.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_config_from(&cwd)),
        };

        let mut config = match discovered {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Self::default()
            }
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.warn_on_playback_quirks();
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(controls) = settings.controls {
            self.media.controls = controls;
        }
        if let Some(autoplay) = settings.autoplay {
            self.media.autoplay = autoplay;
        }
        if let Some(looping) = settings.looping {
            self.media.looping = looping;
        }
        if let Some(muted) = settings.muted {
            self.media.muted = muted;
        }
        if let Some(preload) = settings.preload {
            self.media.preload = preload;
        }
        if let Some(escaping) = settings.escaping {
            self.media.escaping = escaping;
        }
        if let Some(gfm) = settings.gfm {
            self.markdown.gfm = gfm;
        }
    }

    /// Search for a config file in `start` and its parents.
    pub fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Log playback flag combinations that browsers treat specially.
    ///
    /// Every combination is accepted and copied onto the element as given.
    /// A player with neither controls nor autoplay starts only from script,
    /// and autoplay without mute is usually blocked.
    pub fn warn_on_playback_quirks(&self) {
        let media = &self.media;
        if !media.controls && !media.autoplay {
            tracing::warn!(
                "media.controls and media.autoplay are both off; players start only from script"
            );
        }
        if media.autoplay && !media.muted {
            tracing::warn!(
                "media.autoplay is set without media.muted; browsers may block playback"
            );
        }
    }
}
