//! HTML output for media nodes.
//!
//! A media element renders as an opening tag, one self-closing tag per child
//! and a closing tag:
//!
//! ```text
//! <video controls><source src="v.webm" /></video>
//! ```
//!
//! Each tag is written with a single `write_all`, so a failing sink leaves a
//! sequence of complete tags behind.

use std::io;

use crate::attrs::Attributes;
use crate::error::RenderError;
use crate::escape::Escaping;
use crate::node::{Media, MediaSource, NodeKind, NodeRef};

/// Render function bound to one or more node kinds.
///
/// The walk calls [`render`](Self::render) with `entering = true` before a
/// node's children and with `entering = false` after them.
pub trait NodeRenderer: Send + Sync {
    fn render(
        &self,
        out: &mut dyn io::Write,
        node: NodeRef<'_>,
        entering: bool,
    ) -> Result<(), RenderError>;
}

/// Renders `<picture>`, `<video>` and `<audio>` parents.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaHtmlRenderer {
    escaping: Escaping,
}

impl MediaHtmlRenderer {
    #[must_use]
    pub fn new(escaping: Escaping) -> Self {
        Self { escaping }
    }
}

impl NodeRenderer for MediaHtmlRenderer {
    fn render(
        &self,
        out: &mut dyn io::Write,
        node: NodeRef<'_>,
        entering: bool,
    ) -> Result<(), RenderError> {
        let NodeRef::Media(media) = node else {
            return Err(RenderError::UnexpectedNode {
                expected: NodeKind::Media,
                found: node.kind(),
            });
        };
        let tag = if entering {
            open_tag(media.tag_name(), media.attributes(), self.escaping)
        } else {
            close_tag(media.tag_name())
        };
        out.write_all(tag.as_bytes())?;
        Ok(())
    }
}

/// Renders `<source>` and `<img>` children as self-closing tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceHtmlRenderer {
    escaping: Escaping,
}

impl SourceHtmlRenderer {
    #[must_use]
    pub fn new(escaping: Escaping) -> Self {
        Self { escaping }
    }
}

impl NodeRenderer for SourceHtmlRenderer {
    fn render(
        &self,
        out: &mut dyn io::Write,
        node: NodeRef<'_>,
        entering: bool,
    ) -> Result<(), RenderError> {
        let NodeRef::Source(source) = node else {
            return Err(RenderError::UnexpectedNode {
                expected: NodeKind::Source,
                found: node.kind(),
            });
        };
        if entering {
            out.write_all(source_tag(source, self.escaping).as_bytes())?;
        }
        Ok(())
    }
}

/// `<tag attrs>`
#[must_use]
pub fn open_tag(tag: &str, attrs: &Attributes, escaping: Escaping) -> String {
    format!("<{tag}{}>", attrs.render(escaping))
}

/// `<tag attrs />`
#[must_use]
pub fn self_closing_tag(tag: &str, attrs: &Attributes, escaping: Escaping) -> String {
    format!("<{tag}{} />", attrs.render(escaping))
}

/// `</tag>`
#[must_use]
pub fn close_tag(tag: &str) -> String {
    format!("</{tag}>")
}

fn source_tag(source: &MediaSource, escaping: Escaping) -> String {
    self_closing_tag(source.tag_name(), &source.attributes(), escaping)
}

/// Write a media element and its children to `out`.
pub fn write_media<W: io::Write + ?Sized>(
    out: &mut W,
    media: &Media,
    escaping: Escaping,
) -> Result<(), RenderError> {
    out.write_all(open_tag(media.tag_name(), media.attributes(), escaping).as_bytes())?;
    for child in media.children() {
        out.write_all(source_tag(child, escaping).as_bytes())?;
    }
    out.write_all(close_tag(media.tag_name()).as_bytes())?;
    Ok(())
}

/// Render a media element to a string.
///
/// # Example
///
/// ```
/// use rw_media::{Escaping, Media, MediaKind, MediaOptions, render_media};
///
/// let media = Media::build(MediaKind::Video, "Train", "https://x/v.webm", &MediaOptions::default());
/// assert_eq!(
///     render_media(&media, Escaping::Double),
///     r#"<video controls><source src="https://x/v.webm" /></video>"#
/// );
/// ```
#[must_use]
pub fn render_media(media: &Media, escaping: Escaping) -> String {
    let mut out = String::with_capacity(64);
    out.push_str(&open_tag(media.tag_name(), media.attributes(), escaping));
    for child in media.children() {
        out.push_str(&source_tag(child, escaping));
    }
    out.push_str(&close_tag(media.tag_name()));
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::kind::MediaKind;
    use crate::options::{MediaOptions, Preload};

    fn all_on() -> MediaOptions {
        MediaOptions::default()
            .with_autoplay(true)
            .with_loop(true)
            .with_muted(true)
            .with_preload(Preload::Metadata)
    }

    #[test]
    fn test_video_with_defaults() {
        let media = Media::build(
            MediaKind::Video,
            "Train",
            "https://x/v.webm",
            &MediaOptions::default(),
        );
        assert_eq!(
            render_media(&media, Escaping::Double),
            r#"<video controls><source src="https://x/v.webm" /></video>"#
        );
    }

    #[test]
    fn test_audio_with_all_options() {
        let media = Media::build(MediaKind::Audio, "Anthem", "a.mp3", &all_on());
        assert_eq!(
            render_media(&media, Escaping::Double),
            r#"<audio preload="metadata" muted loop controls autoplay><source src="a.mp3" /></audio>"#
        );
    }

    #[test]
    fn test_picture_ignores_playback_options() {
        let media = Media::build(MediaKind::Picture, "Blossoms", "b.jpg", &all_on());
        assert_eq!(
            render_media(&media, Escaping::Double),
            r#"<picture><img src="b.jpg" alt="Blossoms" /></picture>"#
        );
    }

    #[test]
    fn test_no_controls_renders_bare_tag() {
        let options = MediaOptions::default().with_controls(false);
        let media = Media::build(MediaKind::Video, "", "v.mp4", &options);
        assert_eq!(
            render_media(&media, Escaping::Double),
            r#"<video><source src="v.mp4" /></video>"#
        );
    }

    #[test]
    fn test_alt_never_rendered_on_video() {
        let media = Media::build(
            MediaKind::Video,
            "secret alt",
            "v.mp4",
            &MediaOptions::default(),
        );
        assert!(!render_media(&media, Escaping::Double).contains("secret alt"));
    }

    #[test]
    fn test_closing_tag_without_children() {
        let media = Media::new(MediaKind::Picture, "", "");
        assert_eq!(render_media(&media, Escaping::Double), "<picture></picture>");
    }

    #[test]
    fn test_multiple_sources() {
        let options = MediaOptions::default();
        let mut media = Media::build(MediaKind::Video, "Tai", "https://tai.com/video.mp4", &options);
        let mut extra = MediaKind::Video.make_initial_child(&media, &options);
        extra.set_src("https://transformation.com/640x480/video.mp4");
        media.append_child(extra);

        assert_eq!(
            render_media(&media, Escaping::Double),
            "<video controls>\
             <source src=\"https://tai.com/video.mp4\" />\
             <source src=\"https://transformation.com/640x480/video.mp4\" />\
             </video>"
        );
    }

    #[test]
    fn test_picture_source_with_srcset() {
        let options = MediaOptions::default();
        let mut media = Media::build(MediaKind::Picture, "Cat", "cat.jpg", &options);
        media.append_child(MediaSource::source("cat.avif").with_srcset("cat-2x.avif 2x"));

        assert_eq!(
            render_media(&media, Escaping::Double),
            r#"<picture><img src="cat.jpg" alt="Cat" /><source srcset="cat-2x.avif 2x" src="cat.avif" /></picture>"#
        );
    }

    #[test]
    fn test_url_double_escaped() {
        let media = Media::build(
            MediaKind::Audio,
            "",
            "a.mp3?x=1&y=2",
            &MediaOptions::default().with_controls(false),
        );
        assert_eq!(
            render_media(&media, Escaping::Double),
            r#"<audio><source src="a.mp3?x=1&amp;amp;y=2" /></audio>"#
        );
        assert_eq!(
            render_media(&media, Escaping::Single),
            r#"<audio><source src="a.mp3?x=1&amp;y=2" /></audio>"#
        );
    }

    #[test]
    fn test_alt_escaped_on_picture() {
        let media = Media::build(
            MediaKind::Picture,
            r#"say "hi""#,
            "p.png",
            &MediaOptions::default(),
        );
        assert_eq!(
            render_media(&media, Escaping::Double),
            r#"<picture><img src="p.png" alt="say &amp;quot;hi&amp;quot;" /></picture>"#
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let media = Media::build(MediaKind::Audio, "Anthem", "a.mp3", &all_on());
        assert_eq!(
            render_media(&media, Escaping::Double),
            render_media(&media, Escaping::Double)
        );
    }

    #[test]
    fn test_write_media_matches_render_media() {
        let media = Media::build(MediaKind::Audio, "Anthem", "a.mp3", &all_on());
        let mut buf = Vec::new();
        write_media(&mut buf, &media, Escaping::Double).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            render_media(&media, Escaping::Double)
        );
    }

    #[test]
    fn test_media_renderer_walk() {
        let media = Media::build(MediaKind::Picture, "B", "b.jpg", &MediaOptions::default());
        let parent = MediaHtmlRenderer::new(Escaping::Double);
        let child = SourceHtmlRenderer::new(Escaping::Double);
        let mut buf = Vec::new();

        parent.render(&mut buf, NodeRef::Media(&media), true).unwrap();
        for source in media.children() {
            child.render(&mut buf, NodeRef::Source(source), true).unwrap();
            child.render(&mut buf, NodeRef::Source(source), false).unwrap();
        }
        parent.render(&mut buf, NodeRef::Media(&media), false).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"<picture><img src="b.jpg" alt="B" /></picture>"#
        );
    }

    #[test]
    fn test_media_renderer_rejects_source() {
        let source = MediaSource::source("a.mp3");
        let err = MediaHtmlRenderer::default()
            .render(&mut Vec::new(), NodeRef::Source(&source), true)
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnexpectedNode {
                expected: NodeKind::Media,
                found: NodeKind::Source,
            }
        ));
    }

    #[test]
    fn test_source_renderer_rejects_media() {
        let media = Media::new(MediaKind::Video, "", "v.mp4");
        let err = SourceHtmlRenderer::default()
            .render(&mut Vec::new(), NodeRef::Media(&media), true)
            .unwrap_err();
        assert_eq!(err.to_string(), "source renderer cannot render a media node");
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_propagates() {
        let media = Media::build(MediaKind::Video, "", "v.mp4", &MediaOptions::default());
        let err = write_media(&mut FailingWriter, &media, Escaping::Double).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
