//! Inline scanner trait.

use crate::cursor::Cursor;
use crate::node::Node;

/// Default priority for scanners that don't override [`InlineScanner::priority`].
pub const DEFAULT_PRIORITY: u16 = 500;

/// Handler for inline syntax starting at a trigger byte.
///
/// The [`InlineProcessor`](crate::InlineProcessor) calls [`parse`](Self::parse)
/// with the cursor positioned on a [`trigger`](Self::trigger) byte. Scanners
/// sharing a trigger are tried in ascending [`priority`](Self::priority)
/// order; the cursor is reset between attempts.
///
/// # Example
///
/// ```
/// use rw_media::{Cursor, InlineScanner, Node};
///
/// struct Bang;
///
/// impl InlineScanner for Bang {
///     fn trigger(&self) -> u8 { b'!' }
///
///     fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Node> {
///         cursor.advance(1);
///         None
///     }
/// }
///
/// let mut cursor = Cursor::new("!x");
/// assert!(Bang.parse(&mut cursor).is_none());
/// assert_eq!(cursor.offset(), 1);
/// ```
pub trait InlineScanner: Send + Sync {
    /// Byte that starts this syntax. Must be ASCII.
    fn trigger(&self) -> u8;

    /// Lower values run first.
    fn priority(&self) -> u16 {
        DEFAULT_PRIORITY
    }

    /// Try to recognize a node at the cursor.
    ///
    /// On success the cursor must be past the consumed text. On failure the
    /// cursor must be advanced past the trigger byte and no further.
    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Node>;
}
