//! Bitmap-font metrics store.
//!
//! A [`GlyphFont`] is built once from a descriptor attribute stream,
//! resolves every declared glyph against the atlas collaborator, and
//! is read-only afterwards. Lookups are total: unknown glyphs resolve
//! to zero metrics and no region, so a label can always lay out
//! *something* even for glyphs the font never declared.

use std::path::Path;
use std::str::FromStr;

use ahash::HashMap;
use lunaris_scene::{AtlasRegion, GlyphAtlas};

use crate::descriptor::{FontElement, parse_descriptor};
use crate::error::{FontError, FontResult};

/// Sentinel glyph id meaning "no previous character".
///
/// [`GlyphFont::kerning`] always reports 0 when the previous glyph is
/// this value, so the first glyph of a layout never gets kerned.
pub const NO_GLYPH: u16 = 0;

/// Per-glyph layout metrics, in integer font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GlyphMetric {
    x_advance: i32,
    x_offset: i32,
    y_offset: i32,
}

/// Immutable glyph metrics, kerning pairs and atlas bindings for one
/// bitmap font.
///
/// Glyph ids are UTF-16 code units, matching the per-code-unit walk of
/// the layout engine. One font is typically built once and shared
/// across many labels via `Arc<GlyphFont>`; there is no post-build
/// mutation, so concurrent readers need no synchronization.
#[derive(Debug, Clone)]
pub struct GlyphFont {
    line_height: i32,
    metrics: HashMap<u16, GlyphMetric>,
    kernings: HashMap<(u16, u16), i32>,
    regions: HashMap<u16, AtlasRegion>,
}

impl GlyphFont {
    /// Build a font from a descriptor attribute stream.
    ///
    /// Recognized elements are `common` (requires `lineHeight`),
    /// `char` (requires `id`, `xadvance`, `xoffset`, `yoffset`; also
    /// resolves and caches the glyph's atlas region under the id's
    /// decimal name) and `kerning` (requires `first`, `second`,
    /// `amount`). Other elements are ignored. Elements may arrive in
    /// any order; a later record for the same key overwrites an
    /// earlier one.
    ///
    /// Fails if a required attribute is missing or not an integer, or
    /// if the atlas cannot resolve a declared glyph.
    pub fn from_elements(
        elements: impl IntoIterator<Item = FontElement>,
        atlas: &dyn GlyphAtlas,
    ) -> FontResult<Self> {
        let mut font = GlyphFont {
            line_height: 0,
            metrics: HashMap::default(),
            kernings: HashMap::default(),
            regions: HashMap::default(),
        };

        for element in elements {
            match element.name.as_str() {
                "common" => {
                    font.line_height = require_int(&element, "lineHeight")?;
                }
                "char" => {
                    let id: u16 = require_int(&element, "id")?;
                    let metric = GlyphMetric {
                        x_advance: require_int(&element, "xadvance")?,
                        x_offset: require_int(&element, "xoffset")?,
                        y_offset: require_int(&element, "yoffset")?,
                    };

                    let region = atlas
                        .region_named(&id.to_string())
                        .ok_or(FontError::MissingRegion { glyph: id })?;

                    font.metrics.insert(id, metric);
                    font.regions.insert(id, region);
                }
                "kerning" => {
                    let first: u16 = require_int(&element, "first")?;
                    let second: u16 = require_int(&element, "second")?;
                    let amount: i32 = require_int(&element, "amount")?;
                    font.kernings.insert((first, second), amount);
                }
                other => {
                    tracing::trace!("Ignoring descriptor element '{}'", other);
                }
            }
        }

        Ok(font)
    }

    /// Build a font from BMFont text-format descriptor source.
    pub fn from_descriptor(source: &str, atlas: &dyn GlyphAtlas) -> FontResult<Self> {
        Self::from_elements(parse_descriptor(source), atlas)
    }

    /// Build a font from a descriptor file on disk.
    pub fn from_file(path: impl AsRef<Path>, atlas: &dyn GlyphAtlas) -> FontResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_descriptor(&source, atlas)
    }

    /// The declared line height in font units; 0 if the descriptor had
    /// no `common` element.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Horizontal pen advance for a glyph; 0 if unknown.
    pub fn x_advance(&self, glyph: u16) -> i32 {
        self.metrics.get(&glyph).map_or(0, |m| m.x_advance)
    }

    /// Horizontal placement offset for a glyph; 0 if unknown.
    pub fn x_offset(&self, glyph: u16) -> i32 {
        self.metrics.get(&glyph).map_or(0, |m| m.x_offset)
    }

    /// Vertical placement offset for a glyph; 0 if unknown.
    pub fn y_offset(&self, glyph: u16) -> i32 {
        self.metrics.get(&glyph).map_or(0, |m| m.y_offset)
    }

    /// Kerning adjustment for the ordered pair `(prev, cur)`.
    ///
    /// Returns 0 when no pair was declared or when `prev` is
    /// [`NO_GLYPH`]. Kerning is not symmetric: only the declared order
    /// carries the adjustment.
    pub fn kerning(&self, prev: u16, cur: u16) -> i32 {
        if prev == NO_GLYPH {
            return 0;
        }
        self.kernings.get(&(prev, cur)).copied().unwrap_or(0)
    }

    /// The cached atlas region for a glyph, if the descriptor declared
    /// it.
    pub fn region(&self, glyph: u16) -> Option<AtlasRegion> {
        self.regions.get(&glyph).copied()
    }

    /// Number of declared glyphs.
    pub fn glyph_count(&self) -> usize {
        self.metrics.len()
    }
}

/// Fetch a required attribute and parse it as an integer type.
fn require_int<T: FromStr>(element: &FontElement, attribute: &'static str) -> FontResult<T> {
    let value =
        element
            .attributes
            .get(attribute)
            .ok_or_else(|| FontError::MissingAttribute {
                element: element.name.clone(),
                attribute,
            })?;

    value.parse().map_err(|_| FontError::InvalidAttribute {
        element: element.name.clone(),
        attribute,
        value: value.clone(),
    })
}
