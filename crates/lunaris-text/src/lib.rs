//! Lunaris Text - bitmap-glyph font metrics and text layout
//!
//! This crate turns a mutable string into a pool of positioned glyph
//! quads drawn from a pre-baked bitmap font:
//!
//! - [`GlyphFont`] parses a font-descriptor attribute stream into
//!   immutable glyph metrics, kerning pairs and cached atlas regions,
//!   with O(1) lookups shared read-only across labels.
//! - [`GlyphLabel`] incrementally lays the string out against any
//!   [`GlyphScene`] backend, reusing quads across text changes and
//!   handling explicit-newline wrapping, block alignment and per-line
//!   justification.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use lunaris_text::{GlyphFont, GlyphLabel, HorizontalAlignment};
//!
//! // `atlas` and `scene` come from your rendering backend.
//! let font = Arc::new(GlyphFont::from_file("fonts/menlo.fnt", &atlas)?);
//!
//! let mut score = GlyphLabel::new(&mut scene, "SCORE 0", font.clone(), 2.0);
//! score.set_horizontal_alignment(HorizontalAlignment::Left);
//!
//! // Per-frame updates reuse the existing quads.
//! score.set_text(&mut scene, "SCORE 10");
//! ```
//!
//! Rich text, automatic width-based wrapping and complex-script
//! shaping are out of scope: lines break only at explicit `\n`, and
//! glyphs are keyed by UTF-16 code unit.

pub mod descriptor;
pub mod error;
pub mod font;
pub mod label;

// Re-export main types
pub use descriptor::{FontElement, parse_descriptor};
pub use error::{FontError, FontResult};
pub use font::{GlyphFont, NO_GLYPH};
pub use label::{GlyphLabel, GlyphQuad, HorizontalAlignment, Justify, VerticalAlignment};

// Re-export the collaborator surface labels are generic over
pub use lunaris_scene::{AtlasRegion, Color, FilteringMode, GlyphAtlas, GlyphNode, GlyphScene};

// Re-export math types from lunaris-core
pub use lunaris_core::math::Vec2;
