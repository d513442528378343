//! Incremental bitmap-glyph text layout.
//!
//! A [`GlyphLabel`] owns one mutable string and a pool of glyph quads,
//! one per drawable character. Two independent passes keep the pool in
//! sync:
//!
//! - the **content pass** runs when the text changes: it reconciles
//!   the pool size against the new string, rebinds textures, computes
//!   per-glyph pen positions with kerning, and measures the block;
//! - the **justification pass** runs after the content pass and on any
//!   alignment or justify change: it repositions every live quad from
//!   its stored pre-alignment position without touching textures or
//!   pool size.
//!
//! Quad identity is positional: the i-th quad always displays the i-th
//! non-newline code unit of the current text. Text changes therefore
//! reuse existing quads in place and only ever destroy trailing
//! excess, which keeps per-frame text updates cheap in a render loop.

use std::sync::Arc;

use lunaris_core::math::Vec2;
use lunaris_core::profiling::profile_function;
use lunaris_scene::{AtlasRegion, Color, FilteringMode, GlyphNode, GlyphScene};

use crate::font::{GlyphFont, NO_GLYPH};

const LINE_BREAK: u16 = b'\n' as u16;

/// Horizontal placement of the whole text block relative to the label
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Centered,
    Right,
}

/// Vertical placement of the whole text block relative to the label
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Per-line glyph distribution, independent of block alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Right,
    Center,
}

/// One pooled glyph quad: a scene node plus the layout state the label
/// tracks for it.
#[derive(Debug)]
pub struct GlyphQuad<N> {
    node: N,
    region: Option<AtlasRegion>,
    size: Vec2,
    position: Vec2,
    /// Pre-alignment position from the last content pass. The
    /// justification pass recomputes `position` from this absolute
    /// anchor, so repeated alignment changes never compound.
    original_position: Vec2,
}

impl<N> GlyphQuad<N> {
    /// The scene node displaying this glyph.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// The atlas region currently bound, if any.
    pub fn region(&self) -> Option<&AtlasRegion> {
        self.region.as_ref()
    }

    /// Quad size in display units.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Current block-local position (alignment applied).
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position before any alignment shift.
    pub fn original_position(&self) -> Vec2 {
        self.original_position
    }
}

/// A multi-line bitmap-font text label.
///
/// The label drives glyph nodes owned by a [`GlyphScene`] backend.
/// Mutations that can grow or shrink the quad pool (`new`, `set_text`)
/// borrow the scene; alignment, justification, color, blend and
/// filtering changes only touch nodes the label already holds.
///
/// Every setter is change-detecting: assigning the current value is a
/// no-op and triggers no collaborator calls.
///
/// ```
/// # use std::sync::Arc;
/// # use lunaris_scene::mock::{MockAtlas, MockScene};
/// use lunaris_text::{GlyphFont, GlyphLabel, Justify};
///
/// # let mut atlas = MockAtlas::new();
/// # atlas.add_glyphs("HIGH", 18.0, 26.0);
/// # let descriptor = "common lineHeight=32\n\
/// #     char id=72 xoffset=0 yoffset=0 xadvance=20\n\
/// #     char id=73 xoffset=0 yoffset=0 xadvance=8\n\
/// #     char id=71 xoffset=0 yoffset=0 xadvance=19\n";
/// let font = Arc::new(GlyphFont::from_descriptor(descriptor, &atlas)?);
/// let mut scene = MockScene::new();
///
/// let mut label = GlyphLabel::new(&mut scene, "HI\nHIGH", font, 1.0);
/// label.set_justify(Justify::Right);
/// assert_eq!(label.quads().len(), 6);
/// # Ok::<(), lunaris_text::FontError>(())
/// ```
pub struct GlyphLabel<S: GlyphScene> {
    text: String,
    horizontal_alignment: HorizontalAlignment,
    vertical_alignment: VerticalAlignment,
    justify: Justify,
    color: Color,
    color_blend_factor: f32,
    filtering_mode: FilteringMode,
    size: Vec2,
    font: Arc<GlyphFont>,
    scale_factor: f32,
    quads: Vec<GlyphQuad<S::Node>>,
}

impl<S: GlyphScene> GlyphLabel<S> {
    /// Create a label and lay out its initial text.
    ///
    /// `scale_factor` is the device pixel density; font units divide
    /// by it to produce display units, so layout stays deterministic
    /// without a display subsystem.
    pub fn new(scene: &mut S, text: &str, font: Arc<GlyphFont>, scale_factor: f32) -> Self {
        let mut label = Self {
            text: String::new(),
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            justify: Justify::default(),
            color: Color::WHITE,
            color_blend_factor: 1.0,
            filtering_mode: FilteringMode::Nearest,
            size: Vec2::ZERO,
            font,
            scale_factor,
            quads: Vec::new(),
        };
        label.set_text(scene, text);
        label
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, reusing existing quads where possible.
    ///
    /// No-op if `text` equals the current string. Otherwise runs the
    /// content pass followed by the justification pass.
    pub fn set_text(&mut self, scene: &mut S, text: &str) {
        if self.text == text {
            return;
        }
        self.text.clear();
        self.text.push_str(text);
        self.layout_content(scene);
        self.justify_quads();
    }

    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        if self.horizontal_alignment == alignment {
            return;
        }
        self.horizontal_alignment = alignment;
        self.justify_quads();
    }

    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        if self.vertical_alignment == alignment {
            return;
        }
        self.vertical_alignment = alignment;
        self.justify_quads();
    }

    pub fn justify(&self) -> Justify {
        self.justify
    }

    pub fn set_justify(&mut self, justify: Justify) {
        if self.justify == justify {
            return;
        }
        self.justify = justify;
        self.justify_quads();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the tint color and forward it to every live quad.
    pub fn set_color(&mut self, color: Color) {
        if self.color == color {
            return;
        }
        self.color = color;
        for quad in &mut self.quads {
            quad.node.set_color(color);
        }
    }

    pub fn color_blend_factor(&self) -> f32 {
        self.color_blend_factor
    }

    /// Set the color blend factor, clamped into `[0, 1]`, and forward
    /// it to every live quad.
    pub fn set_color_blend_factor(&mut self, factor: f32) {
        let factor = factor.clamp(0.0, 1.0);
        if self.color_blend_factor == factor {
            return;
        }
        self.color_blend_factor = factor;
        for quad in &mut self.quads {
            quad.node.set_color_blend(factor);
        }
    }

    pub fn filtering_mode(&self) -> FilteringMode {
        self.filtering_mode
    }

    /// Set the texture sampling mode and forward it to every live quad.
    pub fn set_filtering_mode(&mut self, mode: FilteringMode) {
        if self.filtering_mode == mode {
            return;
        }
        self.filtering_mode = mode;
        for quad in &mut self.quads {
            quad.node.set_filtering(mode);
        }
    }

    /// Bounding box of the laid-out block, in display units.
    ///
    /// Zero for empty text; otherwise the height is the line height
    /// times the number of lines.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// The font this label renders with.
    pub fn font(&self) -> &Arc<GlyphFont> {
        &self.font
    }

    /// The injected device scale factor.
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// The live quad pool, one entry per non-newline code unit of the
    /// current text, in left-to-right, top-to-bottom order.
    pub fn quads(&self) -> &[GlyphQuad<S::Node>] {
        &self.quads
    }

    /// Content pass: reconcile pool size, rebind textures, recompute
    /// pen positions and the block size.
    fn layout_content(&mut self, scene: &mut S) {
        profile_function!();

        let scale = self.scale_factor;
        let units: Vec<u16> = self.text.encode_utf16().collect();
        let char_count = units.len();
        let break_count = units.iter().filter(|&&u| u == LINE_BREAK).count();
        let target = char_count - break_count;

        // Only trailing excess is ever destroyed; leading quads keep
        // their positional identity and get rebound in place below.
        if target < self.quads.len() {
            tracing::debug!(removed = self.quads.len() - target, "shrinking glyph pool");
            for quad in self.quads.drain(target..) {
                scene.despawn(quad.node);
            }
        }

        let line_height = self.font.line_height() as f32 / scale;
        let mut new_size = Vec2::ZERO;
        let mut pen = Vec2::ZERO;
        let mut last_glyph = NO_GLYPH;
        let mut placed = 0usize;

        // The first line has no preceding line break to account for it.
        if char_count > 0 {
            new_size.y += line_height;
        }

        for &unit in &units {
            if unit == LINE_BREAK {
                pen.y -= line_height;
                new_size.y += line_height;
                pen.x = 0.0;
            } else {
                let region = self.font.region(unit);
                let quad_size = region.map_or(Vec2::ZERO, |r| r.size() / scale);

                if placed < self.quads.len() {
                    let quad = &mut self.quads[placed];
                    quad.region = region;
                    quad.size = quad_size;
                    quad.node.set_region(region.as_ref());
                    quad.node.set_size(quad_size);
                } else {
                    tracing::debug!(glyph = unit, "growing glyph pool");
                    let mut node = scene.spawn(region.as_ref());
                    node.set_size(quad_size);
                    self.quads.push(GlyphQuad {
                        node,
                        region,
                        size: quad_size,
                        position: Vec2::ZERO,
                        original_position: Vec2::ZERO,
                    });
                }

                let kerning = self.font.kerning(last_glyph, unit);
                let x_offset = self.font.x_offset(unit);
                let y_offset = self.font.y_offset(unit);
                let x_advance = self.font.x_advance(unit);

                // Reused quads get the current display state re-applied
                // so they never carry stale color or filtering.
                let quad = &mut self.quads[placed];
                quad.node.set_color(self.color);
                quad.node.set_color_blend(self.color_blend_factor);
                quad.node.set_filtering(self.filtering_mode);

                let position = Vec2::new(
                    pen.x + (x_offset + kerning) as f32 / scale,
                    pen.y - (quad.size.y + y_offset as f32 / scale),
                );
                quad.position = position;
                quad.original_position = position;
                quad.node.set_position(position);

                pen.x += (x_advance + kerning) as f32 / scale;
                new_size.x = new_size.x.max(pen.x);

                placed += 1;
            }

            last_glyph = unit;
        }

        self.size = new_size;
    }

    /// Justification pass: reposition every live quad from its stored
    /// pre-alignment anchor, then distribute each line when justify is
    /// not `Left`.
    fn justify_quads(&mut self) {
        profile_function!();

        let mut shift = Vec2::ZERO;
        match self.horizontal_alignment {
            HorizontalAlignment::Left => shift.x = 0.0,
            // Right block alignment reads the same global shift as
            // Centered; the visual difference comes from per-line
            // justification below.
            HorizontalAlignment::Right | HorizontalAlignment::Centered => {
                shift.x = -self.size.x * 0.5;
            }
        }
        match self.vertical_alignment {
            VerticalAlignment::Top => shift.y = 0.0,
            VerticalAlignment::Middle => shift.y = -self.size.y * 0.5,
            VerticalAlignment::Bottom => shift.y = -self.size.y,
        }

        for quad in &mut self.quads {
            quad.position = Vec2::new(
                quad.original_position.x + shift.x,
                quad.original_position.y - shift.y,
            );
            quad.node.set_position(quad.position);
        }

        if self.justify == Justify::Left {
            return;
        }

        let mut line_start = 0usize;
        let mut seen = 0usize;
        let mut line_width = 0.0f32;

        // A virtual trailing line break flushes the last line.
        for unit in self.text.encode_utf16().chain(std::iter::once(LINE_BREAK)) {
            if unit == LINE_BREAK {
                if seen > 0 {
                    while line_start < seen {
                        let quad = &mut self.quads[line_start];
                        let dx = match self.justify {
                            Justify::Right => self.size.x - line_width + shift.x,
                            // The centering shift is size - width/2,
                            // not (size - width)/2; kept as-is for
                            // compatibility with existing content.
                            Justify::Center => {
                                self.size.x - line_width * 0.5 + shift.x * 0.5
                            }
                            Justify::Left => 0.0,
                        };
                        quad.position.x += dx;
                        quad.node.set_position(quad.position);
                        line_start += 1;
                    }
                }
                line_width = 0.0;
            } else {
                let quad = &self.quads[seen];
                line_width = quad.position.x + quad.size.x;
                seen += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunaris_scene::mock::{MockAtlas, MockScene};

    fn test_font() -> Arc<GlyphFont> {
        let mut atlas = MockAtlas::new();
        atlas.add_glyphs("AB", 18.0, 30.0);
        let descriptor = "common lineHeight=32\n\
                          char id=65 xoffset=0 yoffset=0 xadvance=20\n\
                          char id=66 xoffset=0 yoffset=0 xadvance=18\n";
        Arc::new(GlyphFont::from_descriptor(descriptor, &atlas).unwrap())
    }

    #[test]
    fn test_defaults() {
        let mut scene = MockScene::new();
        let label = GlyphLabel::new(&mut scene, "", test_font(), 1.0);

        assert_eq!(label.horizontal_alignment(), HorizontalAlignment::Centered);
        assert_eq!(label.vertical_alignment(), VerticalAlignment::Middle);
        assert_eq!(label.justify(), Justify::Left);
        assert_eq!(label.color(), Color::WHITE);
        assert_eq!(label.color_blend_factor(), 1.0);
        assert_eq!(label.filtering_mode(), FilteringMode::Nearest);
        assert_eq!(label.size(), Vec2::ZERO);
        assert!(label.quads().is_empty());
    }

    #[test]
    fn test_blend_factor_clamped() {
        let mut scene = MockScene::new();
        let mut label = GlyphLabel::new(&mut scene, "A", test_font(), 1.0);

        label.set_color_blend_factor(2.5);
        assert_eq!(label.color_blend_factor(), 1.0);

        label.set_color_blend_factor(-0.5);
        assert_eq!(label.color_blend_factor(), 0.0);

        label.set_color_blend_factor(0.25);
        assert_eq!(label.color_blend_factor(), 0.25);
    }

    #[test]
    fn test_empty_text_clears_pool() {
        let mut scene = MockScene::new();
        let mut label = GlyphLabel::new(&mut scene, "AB", test_font(), 1.0);
        assert_eq!(label.quads().len(), 2);

        label.set_text(&mut scene, "");
        assert!(label.quads().is_empty());
        assert_eq!(label.size(), Vec2::ZERO);
        assert_eq!(scene.despawned.len(), 2);
    }

    #[test]
    fn test_scale_factor_divides_font_units() {
        let mut scene = MockScene::new();
        let label = GlyphLabel::new(&mut scene, "AB", test_font(), 2.0);

        // 32 font units of line height at scale 2 is 16 display units.
        assert_eq!(label.size().y, 16.0);
        // Advance 20 plus advance 18, halved.
        assert_eq!(label.size().x, 19.0);
        assert_eq!(label.quads()[1].original_position().x, 10.0);
        // Quad pixels also halve: 18x30 becomes 9x15.
        assert_eq!(label.quads()[0].size(), Vec2::new(9.0, 15.0));
    }

    #[test]
    fn test_unknown_glyph_degrades_gracefully() {
        let mut scene = MockScene::new();
        // 'Z' has no metrics and no region; layout must not skip it or fail.
        let label = GlyphLabel::new(&mut scene, "AZB", test_font(), 1.0);

        assert_eq!(label.quads().len(), 3);
        assert!(label.quads()[1].region().is_none());
        assert_eq!(label.quads()[1].size(), Vec2::ZERO);
        // Zero advance: 'B' starts where 'Z' started.
        assert_eq!(label.quads()[1].original_position().x, 20.0);
        assert_eq!(label.quads()[2].original_position().x, 20.0);
    }
}
