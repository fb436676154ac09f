//! Media element variants.
//!
//! Each variant knows its tag name, which attributes it seeds on the parent
//! element, and which child it creates for the directive URL.

use std::fmt;

use crate::node::{Media, MediaSource};
use crate::options::MediaOptions;

pub const ATTR_CONTROLS: &str = "controls";
pub const ATTR_AUTOPLAY: &str = "autoplay";
pub const ATTR_LOOP: &str = "loop";
pub const ATTR_MUTED: &str = "muted";
pub const ATTR_PRELOAD: &str = "preload";

/// Kind of media element a directive expands to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// `!p[alt](url)` → `<picture>`
    Picture,
    /// `!v[alt](url)` → `<video>`
    Video,
    /// `!a[alt](url)` → `<audio>`
    Audio,
}

impl MediaKind {
    pub const ALL: [Self; 3] = [Self::Picture, Self::Video, Self::Audio];

    /// Look up a variant by its directive flag. Case-sensitive.
    #[must_use]
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            b'p' => Some(Self::Picture),
            b'v' => Some(Self::Video),
            b'a' => Some(Self::Audio),
            _ => None,
        }
    }

    /// Directive flag for this variant.
    #[must_use]
    pub fn flag(self) -> u8 {
        match self {
            Self::Picture => b'p',
            Self::Video => b'v',
            Self::Audio => b'a',
        }
    }

    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Picture => "picture",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    /// Seed the parent element's attributes from the configuration.
    ///
    /// `<video>` and `<audio>` always receive all five playback keys, even
    /// when the value renders to nothing. `<picture>` receives none.
    pub fn init_attributes(self, media: &mut Media, options: &MediaOptions) {
        match self {
            Self::Picture => {}
            Self::Video | Self::Audio => {
                media.set_attribute(ATTR_CONTROLS, options.controls);
                media.set_attribute(ATTR_AUTOPLAY, options.autoplay);
                media.set_attribute(ATTR_LOOP, options.looping);
                media.set_attribute(ATTR_MUTED, options.muted);
                media.set_attribute(ATTR_PRELOAD, options.preload.as_str());
            }
        }
    }

    /// Create the next child for `media` without appending it.
    ///
    /// The first child carries the directive URL: an `<img>` for pictures (the
    /// fallback with `alt` text), a `<source>` otherwise. Later children are
    /// `<source>` elements with an empty `src` for the caller to fill in.
    #[must_use]
    pub fn make_initial_child(self, media: &Media, _options: &MediaOptions) -> MediaSource {
        let first = media.child_count() == 0;
        match self {
            Self::Picture if first => MediaSource::img(media.link(), media.alt()),
            Self::Video | Self::Audio if first => MediaSource::source(media.link()),
            Self::Picture | Self::Video | Self::Audio => MediaSource::source(""),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}
