//! HTML escaping for attribute values.

use std::fmt;
use std::str::FromStr;

/// Escape HTML special characters.
///
/// Converts `&`, `<`, `>`, `"` and `'` to entity references.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// How attribute values are escaped before quoting.
///
/// [`Double`](Self::Double) runs the value through [`escape_html`] twice, so a
/// literal `"` is written as `&amp;quot;`. This matches the historical output
/// of the media directives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Escaping {
    /// Escape twice in sequence.
    #[default]
    Double,
    /// Escape once.
    Single,
}

impl Escaping {
    /// Escape an attribute value according to this mode.
    #[must_use]
    pub fn escape(self, value: &str) -> String {
        match self {
            Self::Double => escape_html(&escape_html(value)),
            Self::Single => escape_html(value),
        }
    }

    /// Configuration spelling of this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Single => "single",
        }
    }
}

impl fmt::Display for Escaping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown escaping mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid escaping mode \"{0}\" (expected \"double\" or \"single\")")]
pub struct ParseEscapingError(String);

impl FromStr for Escaping {
    type Err = ParseEscapingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "double" => Ok(Self::Double),
            "single" => Ok(Self::Single),
            other => Err(ParseEscapingError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passes_multibyte_through() {
        assert_eq!(escape_html("統一碼 ünïcödé"), "統一碼 ünïcödé");
    }

    #[test]
    fn test_double_escaping() {
        assert_eq!(Escaping::Double.escape(r#"""#), "&amp;quot;");
        assert_eq!(Escaping::Double.escape("a&b"), "a&amp;amp;b");
        assert_eq!(Escaping::Double.escape("plain"), "plain");
    }

    #[test]
    fn test_single_escaping() {
        assert_eq!(Escaping::Single.escape(r#"""#), "&quot;");
        assert_eq!(Escaping::Single.escape("a&b"), "a&amp;b");
    }

    #[test]
    fn test_parse_escaping() {
        assert_eq!("double".parse::<Escaping>(), Ok(Escaping::Double));
        assert_eq!("single".parse::<Escaping>(), Ok(Escaping::Single));
        assert!("triple".parse::<Escaping>().is_err());
    }

    #[test]
    fn test_default_is_double() {
        assert_eq!(Escaping::default(), Escaping::Double);
    }
}
