//! An impulse-based 2D physics core for balls bouncing off static line
//! segments.
//!
//! The library is renderer-agnostic: it only does vector algebra,
//! nearest-point queries, collision tests and impulse resolution. The demo
//! binary drives a [`scene::Scene`] from an SDL2 frame loop and draws the
//! result.

pub mod collision;
pub mod items;
pub mod scene;
pub mod vec2;

/// Threshold below which a contact normal is considered degenerate and
/// impulse resolution is skipped instead of dividing by a near-zero
/// magnitude.
pub const EPSILON: f32 = 1e-6;
