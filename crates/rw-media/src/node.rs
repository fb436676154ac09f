//! In-memory representation of parsed media directives.

use std::fmt::{self, Write};

use crate::attrs::{AttrValue, Attributes};
use crate::escape::escape_html;
use crate::kind::MediaKind;
use crate::options::MediaOptions;

/// Kind of node, used to look up render functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `<picture>`, `<video>` or `<audio>` parent.
    Media,
    /// `<source>` child.
    Source,
    /// `<img>` child (first child of `<picture>` only).
    Img,
}

impl NodeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Source => "source",
            Self::Img => "img",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Child of a media element, rendered as a self-closing tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaSource {
    /// `<img src alt>` fallback inside `<picture>`.
    Img { src: String, alt: String },
    /// `<source src srcset>`. `srcset` only matters inside `<picture>`.
    Source { src: String, srcset: String },
}

impl MediaSource {
    #[must_use]
    pub fn img(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Img {
            src: src.into(),
            alt: alt.into(),
        }
    }

    #[must_use]
    pub fn source(src: impl Into<String>) -> Self {
        Self::Source {
            src: src.into(),
            srcset: String::new(),
        }
    }

    /// Set `srcset`. Has no effect on `<img>` children.
    #[must_use]
    pub fn with_srcset(mut self, value: impl Into<String>) -> Self {
        if let Self::Source { srcset, .. } = &mut self {
            *srcset = value.into();
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Img { .. } => NodeKind::Img,
            Self::Source { .. } => NodeKind::Source,
        }
    }

    #[must_use]
    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Img { .. } => "img",
            Self::Source { .. } => "source",
        }
    }

    #[must_use]
    pub fn is_img(&self) -> bool {
        matches!(self, Self::Img { .. })
    }

    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Img { src, .. } | Self::Source { src, .. } => src,
        }
    }

    pub fn set_src(&mut self, value: impl Into<String>) {
        match self {
            Self::Img { src, .. } | Self::Source { src, .. } => *src = value.into(),
        }
    }

    /// Attributes exposed by this child: `src`/`alt` for `<img>`,
    /// `src`/`srcset` for `<source>`.
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        match self {
            Self::Img { src, alt } => Attributes::new()
                .with("src", src.as_str())
                .with("alt", alt.as_str()),
            Self::Source { src, srcset } => Attributes::new()
                .with("src", src.as_str())
                .with("srcset", srcset.as_str()),
        }
    }
}

/// A parsed media directive: the outer `<picture>`, `<video>` or `<audio>`
/// element and its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Media {
    kind: MediaKind,
    alt: String,
    link: String,
    attributes: Attributes,
    children: Vec<MediaSource>,
}

impl Media {
    /// Create a bare element with no attributes and no children.
    ///
    /// Use [`Media::build`] to get a fully initialized element.
    #[must_use]
    pub fn new(kind: MediaKind, alt: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            kind,
            alt: alt.into(),
            link: link.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with attributes seeded from `options` and the
    /// initial child for `link` appended.
    #[must_use]
    pub fn build(
        kind: MediaKind,
        alt: impl Into<String>,
        link: impl Into<String>,
        options: &MediaOptions,
    ) -> Self {
        let mut media = Self::new(kind, alt, link);
        kind.init_attributes(&mut media, options);
        let child = kind.make_initial_child(&media, options);
        media.append_child(child);
        media
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub fn tag_name(&self) -> &'static str {
        self.kind.tag_name()
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Plain-text content of the node (the alt text).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.alt
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.attributes.set(name, value);
    }

    #[must_use]
    pub fn children(&self) -> &[MediaSource] {
        &self.children
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Append a child element.
    ///
    /// An `<img>` child is only valid as the first child of a `<picture>`.
    pub fn append_child(&mut self, child: MediaSource) {
        debug_assert!(
            !child.is_img() || (self.kind == MediaKind::Picture && self.children.is_empty()),
            "<img> may only be the first child of <picture>"
        );
        self.children.push(child);
    }

    /// Indented debug listing of the node, its attributes and children.
    ///
    /// Attribute values are escaped once.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Media({}) {{", self.kind);
        let _ = writeln!(out, "    Alt: {}", escape_html(&self.alt));
        let _ = writeln!(out, "    Link: {}", escape_html(&self.link));
        for (name, value) in self.attributes.iter() {
            let _ = writeln!(out, "    {name}: {}", escape_html(&value.to_string()));
        }
        for child in &self.children {
            let _ = writeln!(out, "    {} {{", child.tag_name());
            for (name, value) in child.attributes().iter() {
                let _ = writeln!(out, "        {name}: {}", escape_html(&value.to_string()));
            }
            out.push_str("    }\n");
        }
        out.push_str("}\n");
        out
    }
}

/// Owned node produced by an inline scanner.
///
/// Scanners usually produce `Media`; a bare `Source` renders on its own as
/// a single self-closing tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Media(Media),
    Source(MediaSource),
}

impl Node {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.as_node_ref().kind()
    }

    #[must_use]
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Self::Media(media) => NodeRef::Media(media),
            Self::Source(source) => NodeRef::Source(source),
        }
    }
}

impl From<Media> for Node {
    fn from(media: Media) -> Self {
        Self::Media(media)
    }
}

impl From<MediaSource> for Node {
    fn from(source: MediaSource) -> Self {
        Self::Source(source)
    }
}

/// Borrowed view of a node, handed to render functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Media(&'a Media),
    Source(&'a MediaSource),
}

impl<'a> NodeRef<'a> {
    #[must_use]
    pub fn kind(self) -> NodeKind {
        match self {
            Self::Media(_) => NodeKind::Media,
            Self::Source(source) => source.kind(),
        }
    }

    /// Child elements. Sources never have children.
    #[must_use]
    pub fn children(self) -> &'a [MediaSource] {
        match self {
            Self::Media(media) => media.children(),
            Self::Source(_) => &[],
        }
    }
}
