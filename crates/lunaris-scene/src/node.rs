//! The rendering-node collaborator interface.
//!
//! A glyph node is one textured quad owned by the scene backend. The
//! layout engine creates nodes through [`GlyphScene`], drives them
//! through [`GlyphNode`], and destroys them through
//! [`GlyphScene::despawn`] when the text shrinks. It never inspects
//! backend internals beyond what these traits expose.

use lunaris_core::math::Vec2;

use crate::atlas::AtlasRegion;
use crate::color::Color;

/// Texture sampling mode applied to a glyph node.
///
/// Bitmap fonts are usually drawn pixel-perfect, so `Nearest` is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilteringMode {
    #[default]
    Nearest,
    Linear,
}

/// One renderable quad displaying a single glyph.
///
/// Positions are block-local display units with the quad anchored at
/// its origin corner (not its center): a node at position `(x, y)`
/// with size `(w, h)` covers `x..x+w` horizontally and `y..y+h`
/// vertically, with `y` growing upwards.
pub trait GlyphNode {
    /// Bind the node to an atlas region, or clear its texture.
    fn set_region(&mut self, region: Option<&AtlasRegion>);

    /// Set the quad size in display units.
    fn set_size(&mut self, size: Vec2);

    /// Set the block-local position of the origin corner.
    fn set_position(&mut self, position: Vec2);

    /// Set the tint color.
    fn set_color(&mut self, color: Color);

    /// Set the color blend factor, already clamped to `[0, 1]` by the
    /// caller.
    fn set_color_blend(&mut self, factor: f32);

    /// Set the texture sampling mode.
    fn set_filtering(&mut self, mode: FilteringMode);
}

/// The scene collaborator that owns glyph nodes.
///
/// `spawn` creates a node, already attached to the scene under the
/// label; `despawn` detaches and destroys it. Between those two calls
/// the label is the node's sole owner, and a backend must not keep
/// references to a despawned node.
pub trait GlyphScene {
    type Node: GlyphNode;

    /// Create a node bound to `region` (or untextured) and attach it.
    fn spawn(&mut self, region: Option<&AtlasRegion>) -> Self::Node;

    /// Detach and destroy a node.
    fn despawn(&mut self, node: Self::Node);
}
