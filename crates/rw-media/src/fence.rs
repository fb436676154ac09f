//! Code regions the inline processor leaves untouched.
//!
//! Fenced and indented code blocks are tracked line by line. Code spans are
//! skipped within a line; a span that continues onto the next line is not
//! recognized.

/// An open fence: marker byte and run length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fence {
    marker: u8,
    len: usize,
}

impl Fence {
    /// Fence opened by `trimmed`, if any.
    fn opening(trimmed: &str) -> Option<Self> {
        let marker = *trimmed.as_bytes().first()?;
        if marker != b'`' && marker != b'~' {
            return None;
        }
        let len = run_length(trimmed.as_bytes(), marker);
        if len < 3 {
            return None;
        }
        // A backtick info string may not contain backticks.
        if marker == b'`' && trimmed[len..].contains('`') {
            return None;
        }
        Some(Self { marker, len })
    }

    /// Whether `trimmed` closes this fence.
    fn is_closed_by(self, trimmed: &str) -> bool {
        let len = run_length(trimmed.as_bytes(), self.marker);
        len >= self.len && trimmed[len..].trim().is_empty()
    }
}

fn run_length(bytes: &[u8], marker: u8) -> usize {
    bytes.iter().take_while(|&&b| b == marker).count()
}

/// Fenced code block state for line-by-line scanning.
///
/// Backtick and tilde fences of three or more characters are recognized.
/// The closing fence uses the same character and is at least as long as the
/// opening one.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<Fence>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line.
    ///
    /// Returns `true` when the line is a fence marker or fenced content and
    /// must be copied verbatim.
    pub(crate) fn skip_line(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self.open {
            Some(fence) => {
                if fence.is_closed_by(trimmed) {
                    self.open = None;
                }
                true
            }
            None => {
                self.open = Fence::opening(trimmed);
                self.open.is_some()
            }
        }
    }
}

/// Block-level code state: fenced blocks plus indented code blocks.
///
/// A line indented by four or more columns is code only when it can't
/// continue a paragraph or list item. Blank lines keep an indented block
/// open; the first less-indented line ends it.
#[derive(Debug, Default)]
pub(crate) struct CodeBlockTracker {
    fence: FenceTracker,
    /// A paragraph (or other lazily continued text) is open.
    paragraph: bool,
    /// The current block run started with a list item.
    in_list: bool,
}

impl CodeBlockTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feed the next line.
    ///
    /// Returns `true` when the line belongs to a code block (fence markers
    /// included) and must be copied verbatim.
    pub(crate) fn skip_line(&mut self, line: &str) -> bool {
        if self.fence.in_fence() {
            return self.fence.skip_line(line);
        }

        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            self.paragraph = false;
            return false;
        }

        if indent_width(line) >= 4 {
            if !self.paragraph && !self.in_list {
                return true;
            }
            // List item content may open its own fence; paragraph text can't.
            if !self.paragraph && self.fence.skip_line(line) {
                return true;
            }
            self.paragraph = true;
            return false;
        }

        if self.fence.skip_line(line) {
            self.paragraph = false;
            return true;
        }

        if is_list_item(trimmed) {
            self.in_list = true;
        } else if !self.paragraph {
            self.in_list = false;
        }
        self.paragraph = !is_atx_heading(trimmed);
        false
    }
}

/// Leading indentation in columns, with tabs advancing to the next stop of 4.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for byte in line.bytes() {
        match byte {
            b' ' => width += 1,
            b'\t' => width += 4 - width % 4,
            _ => break,
        }
    }
    width
}

/// Whether `trimmed` starts with a bullet or ordered list marker.
fn is_list_item(trimmed: &str) -> bool {
    let bytes = trimmed.as_bytes();
    let marker_len = match bytes.first() {
        Some(b'-' | b'*' | b'+') => 1,
        Some(b'0'..=b'9') => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits > 9 || !matches!(bytes.get(digits), Some(b'.' | b')')) {
                return false;
            }
            digits + 1
        }
        _ => return false,
    };
    matches!(bytes.get(marker_len), None | Some(b' ' | b'\t'))
}

fn is_atx_heading(trimmed: &str) -> bool {
    let level = run_length(trimmed.as_bytes(), b'#');
    (1..=6).contains(&level)
        && matches!(trimmed.as_bytes().get(level), None | Some(b' ' | b'\t'))
}

/// Byte length of the code span starting at `rest`.
///
/// `rest` starts with a backtick run. When a closing run of the same length
/// follows on the line, the length covers the whole span. Otherwise the run
/// is literal text and only its length is returned.
pub(crate) fn code_span_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let open = run_length(bytes, b'`');
    let mut pos = open;
    while pos < bytes.len() {
        if bytes[pos] == b'`' {
            let run = run_length(&bytes[pos..], b'`');
            if run == open {
                return pos + run;
            }
            pos += run;
        } else {
            pos += 1;
        }
    }
    open
}
