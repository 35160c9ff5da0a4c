//! Spatial helpers for loaded assets.

/// Axis-aligned bounds merged across a model's meshes.
pub mod bounds;
