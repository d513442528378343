//! Recording fakes of the scene and atlas collaborators.
//!
//! Enabled by the `mock` feature. Every trait call is recorded so
//! tests can assert not just final state but how the layout engine
//! drove the collaborators (reuse vs. churn, forwarding, idempotence).

use ahash::HashMap;

use lunaris_core::geometry::Rect;
use lunaris_core::math::Vec2;

use crate::atlas::{AtlasRegion, GlyphAtlas};
use crate::color::Color;
use crate::node::{FilteringMode, GlyphNode, GlyphScene};

const MOCK_ATLAS_SIZE: f32 = 1024.0;

/// An in-memory atlas packing named regions left to right.
#[derive(Debug, Default)]
pub struct MockAtlas {
    regions: HashMap<String, AtlasRegion>,
    next_x: f32,
}

impl MockAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region of the given pixel size under `name`.
    pub fn add(&mut self, name: &str, width: f32, height: f32) {
        let rect = Rect::new(self.next_x, 0.0, width, height);
        self.next_x += width;
        self.regions
            .insert(name.to_string(), AtlasRegion::new(rect, MOCK_ATLAS_SIZE));
    }

    /// Register one region per character of `chars`, keyed by the
    /// decimal form of its UTF-16 code unit, all with the same size.
    pub fn add_glyphs(&mut self, chars: &str, width: f32, height: f32) {
        for unit in chars.encode_utf16() {
            self.add(&unit.to_string(), width, height);
        }
    }
}

impl GlyphAtlas for MockAtlas {
    fn region_named(&self, name: &str) -> Option<AtlasRegion> {
        self.regions.get(name).copied()
    }
}

/// A glyph node that stores its last-applied state and counts calls.
#[derive(Debug, Clone)]
pub struct MockNode {
    pub id: u32,
    pub region: Option<AtlasRegion>,
    pub size: Vec2,
    pub position: Vec2,
    pub color: Color,
    pub color_blend: f32,
    pub filtering: FilteringMode,
    pub region_sets: u32,
    pub size_sets: u32,
    pub position_sets: u32,
    pub color_sets: u32,
    pub blend_sets: u32,
    pub filter_sets: u32,
}

impl GlyphNode for MockNode {
    fn set_region(&mut self, region: Option<&AtlasRegion>) {
        self.region = region.copied();
        self.region_sets += 1;
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.size_sets += 1;
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.position_sets += 1;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.color_sets += 1;
    }

    fn set_color_blend(&mut self, factor: f32) {
        self.color_blend = factor;
        self.blend_sets += 1;
    }

    fn set_filtering(&mut self, mode: FilteringMode) {
        self.filtering = mode;
        self.filter_sets += 1;
    }
}

/// A scene that hands out [`MockNode`]s with increasing ids and
/// remembers which ids were despawned.
#[derive(Debug, Default)]
pub struct MockScene {
    next_id: u32,
    pub spawned: u32,
    pub despawned: Vec<u32>,
}

impl MockScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GlyphScene for MockScene {
    type Node = MockNode;

    fn spawn(&mut self, region: Option<&AtlasRegion>) -> MockNode {
        let id = self.next_id;
        self.next_id += 1;
        self.spawned += 1;
        MockNode {
            id,
            region: region.copied(),
            size: Vec2::ZERO,
            position: Vec2::ZERO,
            color: Color::WHITE,
            color_blend: 1.0,
            filtering: FilteringMode::Nearest,
            region_sets: 0,
            size_sets: 0,
            position_sets: 0,
            color_sets: 0,
            blend_sets: 0,
            filter_sets: 0,
        }
    }

    fn despawn(&mut self, node: MockNode) {
        self.despawned.push(node.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_atlas_lookup() {
        let mut atlas = MockAtlas::new();
        atlas.add("65", 18.0, 30.0);

        let region = atlas.region_named("65").unwrap();
        assert_eq!(region.size(), Vec2::new(18.0, 30.0));
        assert!(atlas.region_named("66").is_none());
    }

    #[test]
    fn test_mock_atlas_packs_left_to_right() {
        let mut atlas = MockAtlas::new();
        atlas.add_glyphs("AB", 16.0, 24.0);

        let a = atlas.region_named("65").unwrap();
        let b = atlas.region_named("66").unwrap();
        assert_eq!(a.rect.x, 0.0);
        assert_eq!(b.rect.x, 16.0);
    }

    #[test]
    fn test_mock_scene_ids() {
        let mut scene = MockScene::new();
        let a = scene.spawn(None);
        let b = scene.spawn(None);
        assert_eq!((a.id, b.id), (0, 1));
        assert_eq!(scene.spawned, 2);

        scene.despawn(a);
        assert_eq!(scene.despawned, vec![0]);
    }
}
