//! Lunaris Core
//!
//! Foundation utilities shared by the Lunaris crates: math re-exports,
//! generic geometry types, logging setup and profiling helpers.

pub mod geometry;
pub mod logging;
pub mod math;

#[cfg(feature = "profiling")]
pub mod profiling;
