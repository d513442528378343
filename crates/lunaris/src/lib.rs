//! Lunaris - bitmap-glyph text for real-time scenes
//!
//! Lunaris renders variable text as pools of positioned glyph quads
//! drawn from pre-baked bitmap fonts (a texture atlas plus per-glyph
//! metrics and kerning pairs). It is renderer-agnostic: a backend
//! implements the scene collaborator traits and Lunaris drives them.
//!
//! - `lunaris-core`: math, geometry, logging and profiling utilities
//! - `lunaris-scene`: the collaborator traits a backend implements
//! - `lunaris-text`: font metrics parsing and incremental text layout
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use lunaris::prelude::*;
//!
//! let font = Arc::new(GlyphFont::from_file("fonts/menlo.fnt", &atlas)?);
//! let mut label = GlyphLabel::new(&mut scene, "READY", font, 2.0);
//! label.set_justify(Justify::Center);
//! ```

pub use lunaris_core as core;

#[cfg(feature = "scene")]
pub use lunaris_scene as scene;

#[cfg(feature = "text")]
pub use lunaris_text as text;

/// Commonly used types.
pub mod prelude {
    pub use lunaris_core::math::Vec2;

    #[cfg(feature = "scene")]
    pub use lunaris_scene::{
        AtlasRegion, Color, FilteringMode, GlyphAtlas, GlyphNode, GlyphScene,
    };

    #[cfg(feature = "text")]
    pub use lunaris_text::{
        FontElement, FontError, FontResult, GlyphFont, GlyphLabel, GlyphQuad,
        HorizontalAlignment, Justify, VerticalAlignment,
    };
}
