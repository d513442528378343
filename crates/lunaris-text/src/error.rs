//! Error types for font construction.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while building a [`GlyphFont`].
///
/// All of these are fatal: a font that fails to load cannot be used.
/// Lookups on a successfully built font never fail; unknown glyphs
/// resolve to documented defaults instead.
///
/// [`GlyphFont`]: crate::font::GlyphFont
#[derive(Debug)]
pub enum FontError {
    /// The font-descriptor file could not be read.
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// A recognized descriptor element is missing a required attribute.
    MissingAttribute {
        /// The element kind (`common`, `char` or `kerning`).
        element: String,
        /// The attribute that was expected.
        attribute: &'static str,
    },

    /// A required attribute is present but not parseable as an integer
    /// of the expected range.
    InvalidAttribute {
        /// The element kind.
        element: String,
        /// The attribute name.
        attribute: &'static str,
        /// The raw attribute value.
        value: String,
    },

    /// The atlas has no region for a glyph declared by the descriptor.
    MissingRegion {
        /// The declared glyph id.
        glyph: u16,
    },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io { path, source } => {
                write!(f, "Failed to read font descriptor '{}': {}", path.display(), source)
            }
            FontError::MissingAttribute { element, attribute } => {
                write!(f, "Descriptor element '{}' is missing attribute '{}'", element, attribute)
            }
            FontError::InvalidAttribute {
                element,
                attribute,
                value,
            } => write!(
                f,
                "Descriptor element '{}' has non-integer attribute {}=\"{}\"",
                element, attribute, value
            ),
            FontError::MissingRegion { glyph } => {
                write!(f, "Atlas has no region for glyph id {}", glyph)
            }
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for font operations.
pub type FontResult<T> = Result<T, FontError>;
