//! Mathematical types based on the SIMD-accelerated [`glam`] crate.
//!
//! The text stack works almost exclusively in 2D display units, so the
//! types that matter here are [`Vec2`] for positions and sizes and the
//! free functions such as [`vec2`]. The full `glam` surface is
//! re-exported for downstream crates that need more.
//!
//! # Examples
//!
//! ```
//! use lunaris_core::math::{Vec2, vec2};
//!
//! let pen = Vec2::ZERO;
//! let advanced = pen + vec2(12.0, 0.0);
//! assert_eq!(advanced.x, 12.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::*;
