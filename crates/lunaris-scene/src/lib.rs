//! Lunaris Scene
//!
//! The collaborator surface between the text layout engine and whatever
//! actually owns and draws textured quads. The layout engine never talks
//! to a GPU or a scene graph directly; it goes through the traits in
//! this crate:
//!
//! - [`GlyphAtlas`] maps a glyph name to an [`AtlasRegion`] (a
//!   sub-rectangle of a pre-baked font texture).
//! - [`GlyphScene`] creates and destroys glyph nodes; [`GlyphNode`] is
//!   one positioned, textured quad.
//!
//! A rendering backend implements these traits over its own node and
//! atlas types. The `mock` feature provides recording fakes for tests
//! and benches.

pub mod atlas;
pub mod color;
pub mod node;

#[cfg(feature = "mock")]
pub mod mock;

pub use atlas::{AtlasRegion, GlyphAtlas};
pub use color::Color;
pub use node::{FilteringMode, GlyphNode, GlyphScene};
