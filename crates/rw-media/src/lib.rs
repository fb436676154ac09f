//! Media directives for markdown.
//!
//! Expands a compact inline syntax into HTML media elements:
//!
//! | Directive          | Output                                            |
//! |--------------------|---------------------------------------------------|
//! | `!v[alt](url)`     | `<video ...><source src="url" /></video>`         |
//! | `!a[alt](url)`     | `<audio ...><source src="url" /></audio>`         |
//! | `!p[alt](url)`     | `<picture><img src="url" alt="alt" /></picture>`  |
//!
//! # Architecture
//!
//! - [`MediaParser`]: an [`InlineScanner`] that recognizes directives at a
//!   [`Cursor`] and builds [`Media`] nodes.
//! - [`MediaKind`]: per-variant tag name, attribute seeding and first child.
//! - [`MediaHtmlRenderer`] / [`SourceHtmlRenderer`]: [`NodeRenderer`]s
//!   writing the HTML tags.
//! - [`InlineProcessor`]: runs scanners over markdown, splices rendered HTML
//!   in place and hands the result to pulldown-cmark.
//! - [`MediaExtension`]: registers all of the above on a processor.
//!
//! # Example
//!
//! ```
//! use rw_media::{InlineProcessor, MediaExtension, MediaOptions, Preload};
//!
//! let options = MediaOptions::default().with_muted(true).with_preload(Preload::Metadata);
//! let mut processor = InlineProcessor::new().with_extension(&MediaExtension::with_options(options));
//!
//! let result = processor.convert("Listen: !a[Anthem](anthem.mp3)");
//! assert!(result.html.contains(
//!     r#"<audio preload="metadata" muted controls><source src="anthem.mp3" /></audio>"#
//! ));
//! ```

mod attrs;
mod cursor;
mod error;
mod escape;
mod extension;
mod fence;
mod html;
mod kind;
mod node;
mod options;
mod parser;
mod processor;
mod scanner;

pub use attrs::{AttrValue, Attributes};
pub use cursor::{Cursor, Position};
pub use error::RenderError;
pub use escape::{Escaping, ParseEscapingError, escape_html};
pub use extension::MediaExtension;
pub use html::{
    MediaHtmlRenderer, NodeRenderer, SourceHtmlRenderer, close_tag, open_tag, render_media,
    self_closing_tag, write_media,
};
pub use kind::{ATTR_AUTOPLAY, ATTR_CONTROLS, ATTR_LOOP, ATTR_MUTED, ATTR_PRELOAD, MediaKind};
pub use node::{Media, MediaSource, Node, NodeKind, NodeRef};
pub use options::{MediaOptions, ParsePreloadError, Preload};
pub use parser::{MediaParser, PRIORITY, TRIGGER};
pub use processor::{ConvertResult, Extension, InlineProcessor};
pub use scanner::{DEFAULT_PRIORITY, InlineScanner};
