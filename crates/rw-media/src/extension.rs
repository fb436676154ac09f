//! Registration entry point for media directives.

use crate::html::{MediaHtmlRenderer, SourceHtmlRenderer};
use crate::node::NodeKind;
use crate::options::MediaOptions;
use crate::parser::MediaParser;
use crate::processor::{Extension, InlineProcessor};

/// Adds the `!v`, `!a` and `!p` directives to an [`InlineProcessor`].
///
/// Registers one scanner on `!` and render functions for media, source and
/// img nodes. The options are fixed at construction.
#[derive(Clone, Debug, Default)]
pub struct MediaExtension {
    options: MediaOptions,
}

impl MediaExtension {
    /// Extension with default options (`controls` on, everything else off).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: MediaOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &MediaOptions {
        &self.options
    }
}

impl Extension for MediaExtension {
    fn extend(&self, processor: InlineProcessor) -> InlineProcessor {
        let escaping = self.options.escaping;
        processor
            .with_scanner(MediaParser::new(self.options.clone()))
            .with_renderer(NodeKind::Media, MediaHtmlRenderer::new(escaping))
            .with_renderer(NodeKind::Source, SourceHtmlRenderer::new(escaping))
            .with_renderer(NodeKind::Img, SourceHtmlRenderer::new(escaping))
    }
}
