//! The texture-atlas collaborator interface.
//!
//! A bitmap font ships as one texture image holding every glyph plus a
//! descriptor naming a sub-rectangle per glyph. Whoever loaded that
//! texture implements [`GlyphAtlas`]; the text stack only ever asks it
//! for regions by name and reads their pixel size.

use lunaris_core::geometry::Rect;
use lunaris_core::math::Vec2;

/// A named sub-rectangle of a shared texture image.
///
/// Carries both the pixel rectangle inside the atlas and the
/// normalized UV rectangle a backend needs for drawing. The layout
/// engine itself only reads [`AtlasRegion::size`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// Rectangle in pixel coordinates within the atlas.
    pub rect: Rect<f32>,
    /// Rectangle in normalized UV coordinates (0.0 to 1.0).
    pub uv_rect: Rect<f32>,
}

impl AtlasRegion {
    /// Create a region from its pixel rectangle and the atlas edge
    /// length (atlases are square).
    pub fn new(rect: Rect<f32>, atlas_size: f32) -> Self {
        let uv_rect = Rect {
            x: rect.x / atlas_size,
            y: rect.y / atlas_size,
            width: rect.width / atlas_size,
            height: rect.height / atlas_size,
        };

        Self { rect, uv_rect }
    }

    /// Native pixel size of the region.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width, self.rect.height)
    }
}

/// The atlas collaborator: resolves a glyph name to its region.
///
/// Fonts look glyphs up by the decimal string form of the glyph id,
/// once per declared glyph at font construction time.
pub trait GlyphAtlas {
    /// The region stored under `name`, or `None` if the atlas does not
    /// contain it.
    fn region_named(&self, name: &str) -> Option<AtlasRegion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_uv() {
        let region = AtlasRegion::new(Rect::new(0.0, 0.0, 64.0, 64.0), 256.0);

        assert_eq!(region.uv_rect.x, 0.0);
        assert_eq!(region.uv_rect.y, 0.0);
        assert_eq!(region.uv_rect.width, 0.25);
        assert_eq!(region.uv_rect.height, 0.25);
        assert_eq!(region.size(), Vec2::new(64.0, 64.0));
    }
}
