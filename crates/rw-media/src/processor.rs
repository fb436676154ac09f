//! Inline processor: expands inline syntax to HTML before pulldown-cmark.
//!
//! pulldown-cmark has no hook for custom inline syntax, so registered
//! [`InlineScanner`]s run over the markdown first. Each recognized node is
//! rendered through the [`NodeRenderer`] bound to its [`NodeKind`] and the
//! resulting HTML replaces the source text. pulldown-cmark then passes that
//! HTML through as raw inline HTML.
//!
//! Fenced and indented code blocks, code spans and backslash-escaped bytes
//! are copied verbatim.

use std::collections::HashMap;
use std::io;

use pulldown_cmark::html::push_html;
use pulldown_cmark::{Options, Parser};

use crate::cursor::Cursor;
use crate::error::RenderError;
use crate::fence::{CodeBlockTracker, code_span_len};
use crate::html::NodeRenderer;
use crate::node::{Node, NodeKind, NodeRef};
use crate::scanner::InlineScanner;

/// Registers scanners and render functions on a processor.
pub trait Extension {
    /// Return `processor` with this extension's scanners and renderers added.
    #[must_use]
    fn extend(&self, processor: InlineProcessor) -> InlineProcessor;
}

/// Result of converting markdown to HTML.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertResult {
    /// Rendered HTML.
    pub html: String,
    /// Warnings generated during this conversion.
    pub warnings: Vec<String>,
}

/// Line-by-line inline syntax expander.
///
/// Holds per-document state (code block tracking and warnings), so use one
/// processor per conversion.
///
/// # Example
///
/// ```
/// use rw_media::{InlineProcessor, MediaExtension};
///
/// let mut processor = InlineProcessor::new().with_extension(&MediaExtension::with_defaults());
/// let output = processor.process("Watch !v[Train](train.webm) now.");
/// assert_eq!(
///     output,
///     r#"Watch <video controls><source src="train.webm" /></video> now."#
/// );
/// ```
pub struct InlineProcessor {
    scanners: Vec<Box<dyn InlineScanner>>,
    renderers: HashMap<NodeKind, Box<dyn NodeRenderer>>,
    gfm: bool,
    code_blocks: CodeBlockTracker,
    warnings: Vec<String>,
}

impl Default for InlineProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineProcessor {
    /// Create a processor with no scanners and GFM extensions enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scanners: Vec::new(),
            renderers: HashMap::new(),
            gfm: true,
            code_blocks: CodeBlockTracker::new(),
            warnings: Vec::new(),
        }
    }

    /// Register an inline scanner.
    ///
    /// Scanners are kept in ascending priority order. Scanners with equal
    /// priority keep their registration order.
    #[must_use]
    pub fn with_scanner<S: InlineScanner + 'static>(mut self, scanner: S) -> Self {
        let priority = scanner.priority();
        let idx = self.scanners.partition_point(|s| s.priority() <= priority);
        self.scanners.insert(idx, Box::new(scanner));
        self
    }

    /// Bind a render function to a node kind, replacing any previous binding.
    #[must_use]
    pub fn with_renderer<R: NodeRenderer + 'static>(
        mut self,
        kind: NodeKind,
        renderer: R,
    ) -> Self {
        self.renderers.insert(kind, Box::new(renderer));
        self
    }

    #[must_use]
    pub fn with_extension(self, extension: &impl Extension) -> Self {
        extension.extend(self)
    }

    /// Enable or disable GFM extensions (tables, strikethrough, task lists).
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Number of registered scanners.
    #[must_use]
    pub fn scanner_count(&self) -> usize {
        self.scanners.len()
    }

    /// Whether a render function is bound to `kind`.
    #[must_use]
    pub fn has_renderer(&self, kind: NodeKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Expand inline syntax in `input`, returning markdown with embedded HTML.
    ///
    /// Text that no scanner recognizes is copied unchanged. A node that
    /// fails to render is logged, recorded as a warning and left as its
    /// source text.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        self.code_blocks = CodeBlockTracker::new();

        let mut output = String::with_capacity(input.len());
        let lines: Vec<&str> = input.lines().collect();
        let line_count = lines.len();

        for (idx, line) in lines.iter().enumerate() {
            let processed = self.process_line(line, idx + 1);
            output.push_str(&processed);

            if idx < line_count - 1 || input.ends_with('\n') {
                output.push('\n');
            }
        }

        output
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> String {
        if self.code_blocks.skip_line(line) || !self.has_trigger_in(line) {
            return line.to_owned();
        }

        let mut result = String::with_capacity(line.len());
        let mut cursor = Cursor::new(line);
        let mut copied = 0;

        while let Some(byte) = cursor.peek_byte() {
            match byte {
                b'\\' => cursor.advance(2),
                b'`' => cursor.advance(code_span_len(cursor.rest())),
                _ if self.is_trigger(byte) => {
                    let start = cursor.save();
                    let Some(node) = self.scan(byte, &mut cursor) else {
                        continue;
                    };
                    result.push_str(&line[copied..start.offset()]);
                    let source = cursor.since(start);
                    match self.render(&node) {
                        Ok(html) => {
                            tracing::debug!(
                                line = line_num,
                                kind = %node.kind(),
                                source,
                                "Expanded inline node"
                            );
                            result.push_str(&html);
                        }
                        Err(e) => {
                            tracing::warn!(
                                line = line_num,
                                error = %e,
                                source,
                                "Failed to render inline node"
                            );
                            self.warnings
                                .push(format!("line {line_num}: failed to render {source}: {e}"));
                            result.push_str(source);
                        }
                    }
                    copied = cursor.offset();
                }
                _ => cursor.advance(1),
            }
        }

        result.push_str(&line[copied..]);
        result
    }

    /// Try every scanner registered for `trigger`, in priority order.
    ///
    /// When none matches, the cursor ends one byte past the trigger.
    fn scan(&self, trigger: u8, cursor: &mut Cursor<'_>) -> Option<Node> {
        let start = cursor.save();
        for scanner in self.scanners.iter().filter(|s| s.trigger() == trigger) {
            if let Some(node) = scanner.parse(cursor) {
                return Some(node);
            }
            cursor.reset(start);
        }
        cursor.advance(1);
        None
    }

    fn is_trigger(&self, byte: u8) -> bool {
        self.scanners.iter().any(|s| s.trigger() == byte)
    }

    fn has_trigger_in(&self, line: &str) -> bool {
        line.bytes().any(|b| self.is_trigger(b))
    }

    /// Render a node and its children to a string.
    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render_node(&mut buf, node.as_node_ref())?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Walk `node`: enter, render children, leave.
    pub fn render_node(
        &self,
        out: &mut dyn io::Write,
        node: NodeRef<'_>,
    ) -> Result<(), RenderError> {
        let kind = node.kind();
        let renderer = self
            .renderers
            .get(&kind)
            .ok_or(RenderError::NoRenderer(kind))?;

        renderer.render(out, node, true)?;
        for child in node.children() {
            self.render_node(out, NodeRef::Source(child))?;
        }
        renderer.render(out, node, false)
    }

    fn markdown_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Expand inline syntax and render the result to HTML with pulldown-cmark.
    pub fn convert(&mut self, markdown: &str) -> ConvertResult {
        let first_warning = self.warnings.len();
        let processed = self.process(markdown);

        let parser = Parser::new_ext(&processed, self.markdown_options());
        let mut html = String::with_capacity(processed.len() * 3 / 2);
        push_html(&mut html, parser);

        ConvertResult {
            html,
            warnings: self.warnings[first_warning..].to_vec(),
        }
    }

    /// All warnings generated by this processor so far.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
