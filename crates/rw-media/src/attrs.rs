//! Attribute bags and their HTML rendering.

use std::collections::BTreeMap;
use std::fmt;

use crate::escape::Escaping;

/// Value of an HTML attribute.
///
/// `Flag` values follow boolean-attribute rules: `true` renders as the bare
/// name and `false` is omitted. An empty `Text` is omitted as well.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// String value, escaped on output.
    Text(String),
    /// Boolean attribute.
    Flag(bool),
}

impl AttrValue {
    /// Whether this value produces no output at all.
    #[must_use]
    pub fn is_omitted(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Flag(flag) => !flag,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// Mapping from attribute name to value.
///
/// Insertion order is irrelevant: [`render`](Self::render) always emits
/// names in strictly descending byte order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: BTreeMap<String, AttrValue>,
}

impl Attributes {
    /// Create an empty attribute bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in ascending name order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Render attributes as HTML.
    ///
    /// Every emitted attribute is preceded by a single space, so the result
    /// can be appended directly after a tag name. Returns an empty string when
    /// nothing is emitted.
    #[must_use]
    pub fn render(&self, escaping: Escaping) -> String {
        let mut out = String::new();
        for (name, value) in self.iter().rev().filter(|(_, value)| !value.is_omitted()) {
            out.push(' ');
            out.push_str(name);
            if let AttrValue::Text(text) = value {
                out.push_str("=\"");
                out.push_str(&escaping.escape(text));
                out.push('"');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_descending_order() {
        let attrs = Attributes::new()
            .with("autoplay", true)
            .with("preload", "metadata")
            .with("controls", true)
            .with("muted", true)
            .with("loop", true);

        assert_eq!(
            attrs.render(Escaping::Double),
            r#" preload="metadata" muted loop controls autoplay"#
        );
    }

    #[test]
    fn test_false_flag_omitted() {
        let attrs = Attributes::new()
            .with("controls", true)
            .with("autoplay", false)
            .with("muted", false);

        assert_eq!(attrs.render(Escaping::Double), " controls");
    }

    #[test]
    fn test_empty_text_omitted() {
        let attrs = Attributes::new().with("src", "a.mp3").with("srcset", "");
        assert_eq!(attrs.render(Escaping::Double), r#" src="a.mp3""#);
    }

    #[test]
    fn test_everything_omitted_renders_nothing() {
        let attrs = Attributes::new()
            .with("preload", "")
            .with("loop", false);
        assert_eq!(attrs.render(Escaping::Double), "");
        assert_eq!(Attributes::new().render(Escaping::Double), "");
    }

    #[test]
    fn test_value_escaped_twice() {
        let attrs = Attributes::new()
            .with("src", "\"'>,<")
            .with("enabled", true)
            .with("autoplay", false)
            .with("bytes", "bytes 統一碼<");

        assert_eq!(
            attrs.render(Escaping::Double),
            r#" src="&amp;quot;&amp;#x27;&amp;gt;,&amp;lt;" enabled bytes="bytes 統一碼&amp;lt;""#
        );
    }

    #[test]
    fn test_value_escaped_once() {
        let attrs = Attributes::new().with("src", "a?x=1&y=\"2\"");
        assert_eq!(
            attrs.render(Escaping::Single),
            r#" src="a?x=1&amp;y=&quot;2&quot;""#
        );
    }

    #[test]
    fn test_set_replaces_value() {
        let mut attrs = Attributes::new();
        attrs.set("controls", true);
        attrs.set("controls", false);

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("controls"), Some(&AttrValue::Flag(false)));
        assert_eq!(attrs.render(Escaping::Double), "");
    }

    #[test]
    fn test_omitted_values_stay_in_bag() {
        let attrs = Attributes::new().with("muted", false).with("preload", "");
        assert!(attrs.contains("muted"));
        assert!(attrs.contains("preload"));
        assert!(attrs.get("muted").is_some_and(AttrValue::is_omitted));
    }

    #[test]
    fn test_render_is_deterministic() {
        let attrs = Attributes::new()
            .with("src", "x.webm")
            .with("controls", true)
            .with("type", "video/webm");
        assert_eq!(attrs.render(Escaping::Double), attrs.render(Escaping::Double));
    }

    #[test]
    fn test_attr_value_display() {
        assert_eq!(AttrValue::from("x").to_string(), "x");
        assert_eq!(AttrValue::from(true).to_string(), "true");
    }
}
