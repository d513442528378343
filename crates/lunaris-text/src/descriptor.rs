//! Font-descriptor parsing.
//!
//! Bitmap fonts ship with a descriptor in the AngelCode BMFont text
//! format: one element per line, each an element name followed by
//! `key=value` attribute pairs.
//!
//! ```text
//! info face="Menlo" size=32
//! common lineHeight=32 base=26 pages=1
//! char id=65 x=0 y=0 width=18 height=26 xoffset=0 yoffset=4 xadvance=20
//! kerning first=65 second=86 amount=-2
//! ```
//!
//! Parsing here is purely structural: it produces [`FontElement`]
//! records without interpreting them. [`GlyphFont`] consumes the
//! records and decides which elements and attributes matter.
//!
//! [`GlyphFont`]: crate::font::GlyphFont

use ahash::HashMap;

/// One descriptor element: a name plus its attribute map.
#[derive(Debug, Clone, Default)]
pub struct FontElement {
    /// The element kind, e.g. `common`, `char` or `kerning`.
    pub name: String,
    /// Attribute name → raw string value.
    pub attributes: HashMap<String, String>,
}

impl FontElement {
    /// Create an element with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::default(),
        }
    }

    /// Add an attribute (builder style).
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Parse BMFont text-format descriptor source into elements.
///
/// Every non-empty line yields one [`FontElement`]. Quoted values keep
/// their inner whitespace (`face="Fira Code"`); fields without a `=`
/// are skipped with a warning. Nothing here is fatal: validation of
/// required attributes happens when the elements are consumed.
pub fn parse_descriptor(source: &str) -> Vec<FontElement> {
    let mut elements = Vec::new();

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = split_fields(line).into_iter();
        let Some(name) = fields.next() else {
            continue;
        };

        let mut element = FontElement::new(name);
        for field in fields {
            match field.split_once('=') {
                Some((key, value)) => {
                    element
                        .attributes
                        .insert(key.to_string(), value.trim_matches('"').to_string());
                }
                None => {
                    tracing::warn!("Skipping malformed descriptor field '{}'", field);
                }
            }
        }

        elements.push(element);
    }

    elements
}

/// Split a descriptor line on whitespace, keeping quoted runs intact.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        fields.push(current);
    }

    fields
}
