//! Typed element selectors.
//!
//! The controllers only ever need a handful of selector shapes. Keeping them
//! typed lets the browser backend render CSS (with attribute values escaped)
//! while the in-memory backend matches them directly.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

/// Element selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `[name]`: the attribute is present, any value.
    Attr(String),
    /// `[name="value"]`: the attribute equals `value` exactly.
    AttrEq(String, String),
    /// `.name`: the class list contains `name`.
    Class(String),
    /// `name`: tag name, ASCII case-insensitive.
    Tag(String),
    /// Every part matches the same element.
    All(Vec<Selector>),
}

impl Selector {
    pub fn attr(name: impl Into<String>) -> Self {
        Self::Attr(name.into())
    }

    pub fn attr_eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AttrEq(name.into(), value.into())
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    /// Render as a CSS compound selector.
    ///
    /// Tag parts are emitted first, as CSS requires the type selector to lead
    /// a compound selector.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out, true);
        self.write_css(&mut out, false);
        out
    }

    fn write_css(&self, out: &mut String, tags: bool) {
        match self {
            Self::Tag(name) if tags => out.push_str(name),
            Self::Attr(name) if !tags => {
                out.push('[');
                out.push_str(name);
                out.push(']');
            }
            Self::AttrEq(name, value) if !tags => {
                out.push('[');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_css_string(value));
                out.push_str("\"]");
            }
            Self::Class(name) if !tags => {
                out.push('.');
                out.push_str(name);
            }
            Self::All(parts) => {
                for part in parts {
                    part.write_css(out, tags);
                }
            }
            _ => {}
        }
    }

    /// Test an element given its tag and an attribute lookup.
    pub fn matches<'a>(&self, tag: &str, attr: &dyn Fn(&str) -> Option<&'a str>) -> bool {
        match self {
            Self::Attr(name) => attr(name.as_str()).is_some(),
            Self::AttrEq(name, value) => attr(name.as_str()) == Some(value.as_str()),
            Self::Class(name) => attr("class").is_some_and(|list| list.split_whitespace().any(|c| c == name.as_str())),
            Self::Tag(name) => tag.eq_ignore_ascii_case(name),
            Self::All(parts) => parts.iter().all(|part| part.matches(tag, attr)),
        }
    }
}

/// Escape a value for use inside a double-quoted CSS string.
///
/// Newline characters become hex escapes; a raw one ends the string and
/// invalidates the selector. NUL becomes U+FFFD, as CSS would parse it.
fn escape_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            '\u{c}' => out.push_str("\\c "),
            '\0' => out.push_str("\\fffd "),
            other => out.push(other),
        }
    }
    out
}
