//! Media directive recognition: `!v[alt](url)`, `!a[alt](url)`, `!p[alt](url)`.

use std::sync::LazyLock;

use regex::Regex;

use crate::cursor::Cursor;
use crate::kind::MediaKind;
use crate::node::{Media, Node};
use crate::options::MediaOptions;
use crate::scanner::InlineScanner;

/// Byte that starts a media directive.
pub const TRIGGER: u8 = b'!';

/// Scanner priority, ahead of link syntax.
pub const PRIORITY: u16 = 100;

/// `!<flag>[<alt>](<url>)`, anchored at the cursor and confined to one line.
static MEDIA_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!(.)\[([^\]\n]*)\]\(([^)\n]+)\)").unwrap());

/// Recognizer for media directives.
///
/// # Example
///
/// ```
/// use rw_media::{Cursor, MediaKind, MediaOptions, MediaParser};
///
/// let parser = MediaParser::new(MediaOptions::default());
/// let mut cursor = Cursor::new("!v[Train](train.webm) departs");
///
/// let media = parser.parse_media(&mut cursor).unwrap();
/// assert_eq!(media.kind(), MediaKind::Video);
/// assert_eq!(cursor.rest(), " departs");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MediaParser {
    options: MediaOptions,
}

impl MediaParser {
    #[must_use]
    pub fn new(options: MediaOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &MediaOptions {
        &self.options
    }

    /// Recognize a media directive at the cursor.
    ///
    /// On success the cursor is moved past the whole `!flag[alt](url)` span.
    /// When the text doesn't match, or the flag is not `p`, `v` or `a`, the
    /// cursor moves past the trigger byte only and `None` is returned.
    pub fn parse_media(&self, cursor: &mut Cursor<'_>) -> Option<Media> {
        let Some((kind, alt, link, len)) = match_directive(cursor.peek_line()) else {
            cursor.advance(1);
            return None;
        };

        let media = Media::build(kind, alt, link, &self.options);
        cursor.advance(len);
        Some(media)
    }
}

impl InlineScanner for MediaParser {
    fn trigger(&self) -> u8 {
        TRIGGER
    }

    fn priority(&self) -> u16 {
        PRIORITY
    }

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Node> {
        self.parse_media(cursor).map(Node::Media)
    }
}

/// Match the directive grammar at the start of `line`.
///
/// Returns the variant, alt text, URL and the byte length of the match.
fn match_directive(line: &str) -> Option<(MediaKind, &str, &str, usize)> {
    let caps = MEDIA_DIRECTIVE.captures(line)?;
    let flag = caps.get(1)?.as_str();
    // Multi-byte flags are never valid.
    let [flag] = flag.as_bytes() else {
        return None;
    };
    let kind = MediaKind::from_flag(*flag)?;
    let alt = caps.get(2)?.as_str();
    let link = caps.get(3)?.as_str();
    let len = caps.get(0)?.end();
    Some((kind, alt, link, len))
}
