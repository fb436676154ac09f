//! Rendering defaults for media directives.

use std::fmt;
use std::str::FromStr;

use crate::escape::Escaping;

/// Value of the `preload` attribute on `<video>` and `<audio>`.
///
/// [`Unset`](Self::Unset) renders no attribute at all, leaving the choice to
/// the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Preload {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    Unset,
    None,
    Metadata,
    Auto,
}

impl Preload {
    /// Attribute value, empty for [`Unset`](Self::Unset).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::None => "none",
            Self::Metadata => "metadata",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Preload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown preload value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid preload value \"{0}\" (expected \"\", \"none\", \"metadata\" or \"auto\")")]
pub struct ParsePreloadError(String);

impl FromStr for Preload {
    type Err = ParsePreloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unset),
            "none" => Ok(Self::None),
            "metadata" => Ok(Self::Metadata),
            "auto" => Ok(Self::Auto),
            other => Err(ParsePreloadError(other.to_owned())),
        }
    }
}

/// Rendering defaults applied to every `<video>` and `<audio>` directive.
///
/// Set once when the extension is registered and read-only afterwards. The
/// playback fields never affect `<picture>`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MediaOptions {
    /// Show playback controls. Default: `true`.
    pub controls: bool,
    /// Start playing automatically. Default: `false`.
    pub autoplay: bool,
    /// Restart from the beginning when finished. Default: `false`.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Start muted. Default: `false`.
    pub muted: bool,
    /// Preload hint. Default: unset.
    pub preload: Preload,
    /// Attribute escaping mode. Default: [`Escaping::Double`].
    pub escaping: Escaping,
}

impl Default for MediaOptions {
    fn default() -> Self {
        Self {
            controls: true,
            autoplay: false,
            looping: false,
            muted: false,
            preload: Preload::Unset,
            escaping: Escaping::Double,
        }
    }
}

impl MediaOptions {
    #[must_use]
    pub fn with_controls(mut self, controls: bool) -> Self {
        self.controls = controls;
        self
    }

    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    #[must_use]
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    #[must_use]
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    #[must_use]
    pub fn with_preload(mut self, preload: Preload) -> Self {
        self.preload = preload;
        self
    }

    #[must_use]
    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }
}
